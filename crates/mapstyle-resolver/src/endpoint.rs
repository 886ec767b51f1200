//! Endpoint construction for classified references.
//!
//! | kind   | path                                   | extra params |
//! |--------|----------------------------------------|--------------|
//! | style  | `/styles/v1{path}`                     |              |
//! | glyphs | `/fonts/v1{path}`                      |              |
//! | source | `/v4/{authority}.json`                 | `secure`     |
//! | sprite | `/styles/v1/{owner}/{style}/sprite@2x` |              |
//!
//! Every endpoint ends with `access_token={token}` as its last parameter.

use mapstyle_core::{ParseError, ParsedLocator, ResourceKind};
use mapstyle_parser::parse_locator;

use crate::classify::classify;
use crate::options::ResolverOptions;

/// Retina marker for sprite sheets.
const RETINA: &str = "@2x";

/// Sprite extension used when a fallback sprite locator carries none.
const DEFAULT_SPRITE_EXTENSION: &str = "json";

/// Rewrite one reference.
///
/// Returns `Ok(None)` when no rule applies and the reference should be left
/// as it is.
pub fn rewrite_reference(
    url: &str,
    role: ResourceKind,
    access_token: &str,
    options: &ResolverOptions,
) -> Result<Option<String>, ParseError> {
    let api = options.api_endpoint()?;
    resolve_reference(url, role, access_token, &api)
}

/// [`rewrite_reference`] against an already parsed API endpoint.
pub(crate) fn resolve_reference(
    url: &str,
    role: ResourceKind,
    access_token: &str,
    api: &ParsedLocator<'_>,
) -> Result<Option<String>, ParseError> {
    let Some(kind) = classify(url, role) else {
        return Ok(None);
    };
    let locator = parse_locator(url)?;
    Ok(Some(format_endpoint(url, &locator, kind, access_token, api)))
}

/// Build the endpoint for an already parsed locator.
///
/// `raw` is the string `locator` was parsed from; sprite rewriting inspects it
/// for the retina marker. `api` supplies the scheme, authority and path prefix.
pub fn format_endpoint(
    raw: &str,
    locator: &ParsedLocator<'_>,
    kind: ResourceKind,
    access_token: &str,
    api: &ParsedLocator<'_>,
) -> String {
    let path = match kind {
        ResourceKind::Style => format!("/styles/v1{}", locator.path),
        ResourceKind::Glyphs => format!("/fonts/v1{}", locator.path),
        ResourceKind::Source => format!("/v4/{}.json", locator.authority),
        ResourceKind::Sprite => sprite_path(raw, locator),
    };
    let path = match api.path.trim_end_matches('/') {
        "" => path,
        prefix => format!("{}{}", prefix, path),
    };

    let token_param = format!("access_token={}", access_token);
    let mut params = locator.params.clone();
    if kind == ResourceKind::Source {
        params.push("secure");
    }
    params.push(&token_param);

    format!(
        "{}://{}{}{}",
        api.scheme,
        api.authority,
        path,
        query_string(&params)
    )
}

/// Join params into `?a&b`, or nothing when there are none.
fn query_string(params: &[&str]) -> String {
    if params.is_empty() {
        String::new()
    } else {
        format!("?{}", params.join("&"))
    }
}

/// Path for a sprite locator.
///
/// `mapbox://sprites/{owner}/{style}[/draft...]` keeps only owner and style.
/// Anything shorter falls back to splitting the path on its first `.`.
fn sprite_path(raw: &str, locator: &ParsedLocator<'_>) -> String {
    let segments = locator.segments();
    match (segments.first(), segments.get(1)) {
        (Some(owner), Some(style_id)) => {
            let retina = if raw.contains(RETINA) { RETINA } else { "" };
            format!(
                "/styles/v1/{}/{}/sprite{}",
                owner,
                style_id.replace(RETINA, ""),
                retina
            )
        }
        _ => {
            let (base, extension) = match locator.path.split_once('.') {
                Some((base, ext)) if !ext.is_empty() => (base, ext),
                Some((base, _)) => (base, DEFAULT_SPRITE_EXTENSION),
                None => (locator.path, DEFAULT_SPRITE_EXTENSION),
            };
            let (base, retina) = if base.contains(RETINA) {
                (base.replace(RETINA, ""), RETINA)
            } else {
                (base.to_string(), "")
            };
            format!("/styles/v1{}/sprite{}.{}", base, retina, extension)
        }
    }
}
