//! Style document walking.
//!
//! Visits `sources.*.url`, `sprite` and `glyphs`, rewriting every `mapbox:`
//! reference in place. A reference that cannot be rewritten is left as it was.

use mapstyle_core::{ParsedLocator, Reference, ResourceKind, SpriteRef, StyleDocument};
use tracing::{debug, debug_span, trace, warn};

use crate::endpoint::resolve_reference;
use crate::is_mapbox_url;
use crate::options::ResolverOptions;

/// Rewrite all references in `style` using the default options.
pub fn rewrite_style_document<'a>(
    style: &'a mut StyleDocument,
    access_token: &str,
) -> &'a mut StyleDocument {
    rewrite_style_document_with(style, access_token, &ResolverOptions::default())
}

/// Rewrite all references in `style`.
///
/// Also drops `projection.name`, which the renderer rejects. Only string
/// values are candidates; any other JSON value is left as it is. A malformed
/// `api_url` leaves every reference untouched.
pub fn rewrite_style_document_with<'a>(
    style: &'a mut StyleDocument,
    access_token: &str,
    options: &ResolverOptions,
) -> &'a mut StyleDocument {
    if let Some(projection) = style.projection.as_mut() {
        projection.name = None;
    }

    let api = match options.api_endpoint() {
        Ok(api) => api,
        Err(err) => {
            warn!(api_url = %options.api_url, error = %err, "invalid api url, leaving references untouched");
            return style;
        }
    };

    if let Some(sources) = style.sources.as_mut() {
        for (id, source) in sources.iter_mut() {
            if let Some(Reference::Url(url)) = source.url.as_mut() {
                debug_span!("source", id = %id)
                    .in_scope(|| rewrite_field(url, ResourceKind::Source, access_token, &api));
            }
        }
    }

    if let Some(SpriteRef::Url(url)) = style.sprite.as_mut() {
        debug_span!("sprite").in_scope(|| rewrite_field(url, ResourceKind::Sprite, access_token, &api));
    }

    if let Some(Reference::Url(url)) = style.glyphs.as_mut() {
        debug_span!("glyphs").in_scope(|| rewrite_field(url, ResourceKind::Glyphs, access_token, &api));
    }

    style
}

fn rewrite_field(url: &mut String, role: ResourceKind, access_token: &str, api: &ParsedLocator<'_>) {
    if !is_mapbox_url(url.as_str()) {
        return;
    }

    match resolve_reference(url.as_str(), role, access_token, api) {
        Ok(Some(endpoint)) => {
            trace!(%role, "rewrote reference");
            *url = endpoint;
        }
        Ok(None) => trace!(%role, url = %url, "no rule for reference, leaving it"),
        Err(err) => debug!(%role, error = %err, "leaving malformed reference untouched"),
    }
}
