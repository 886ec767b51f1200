//! Rewriting of short-form `mapbox:` references in map style documents.
//!
//! This crate resolves:
//! - Source tileset references (`mapbox://user.tileset`)
//! - Sprite sheet references (`mapbox://sprites/user/style`)
//! - Glyph templates (`mapbox://fonts/user/{fontstack}/{range}.pbf`)
//! - Style URLs (`mapbox://styles/user/style`)
//!
//! into HTTPS endpoints carrying an access token. Rewriting is fail-open: a
//! reference that cannot be parsed stays as it was.
//!
//! # Example
//!
//! ```
//! use mapstyle_resolver::rewrite_style_json;
//!
//! let json = r#"{"version": 8, "glyphs": "mapbox://fonts/user/{fontstack}/{range}.pbf"}"#;
//! let out = rewrite_style_json(json, "pk.test").unwrap();
//! assert_eq!(
//!     out,
//!     r#"{"glyphs":"https://api.mapbox.com/fonts/v1/user/{fontstack}/{range}.pbf?access_token=pk.test","version":8}"#
//! );
//! ```

mod classify;
mod endpoint;
mod options;
mod url;
mod walker;

pub use classify::{classify, Rule, RULES};
pub use endpoint::{format_endpoint, rewrite_reference};
pub use options::{ResolverOptions, DEFAULT_API_URL};
pub use url::{access_token_from_url, normalize_style_url};
pub use walker::{rewrite_style_document, rewrite_style_document_with};

use mapstyle_core::{StyleDocument, StyleError, MAPBOX_PREFIX};

/// Whether `url` uses the `mapbox:` scheme. A literal prefix check.
pub fn is_mapbox_url(url: &str) -> bool {
    url.starts_with(MAPBOX_PREFIX)
}

/// Parse a style document, rewrite its references and serialize it again.
pub fn rewrite_style_json(json: &str, access_token: &str) -> Result<String, StyleError> {
    rewrite_style_json_with(json, access_token, &ResolverOptions::default())
}

/// [`rewrite_style_json`] with explicit options.
pub fn rewrite_style_json_with(
    json: &str,
    access_token: &str,
    options: &ResolverOptions,
) -> Result<String, StyleError> {
    let mut style = StyleDocument::from_json(json)?;
    rewrite_style_document_with(&mut style, access_token, options);
    Ok(style.to_json()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_mapbox_url() {
        assert!(is_mapbox_url("mapbox://styles/user/style"));
        assert!(is_mapbox_url("mapbox:/onlyoneslash"));
        assert!(is_mapbox_url("mapbox:"));
        assert!(!is_mapbox_url("https://api.mapbox.com/styles/v1/user/style"));
        assert!(!is_mapbox_url("Mapbox://styles/user/style"));
        assert!(!is_mapbox_url(""));
    }

    #[test]
    fn test_rewrite_style_json_keeps_unknown_fields() {
        let json = r#"{"version":8,"name":"Streets","sources":{"composite":{"type":"vector","url":"mapbox://mapbox.mapbox-streets-v8"}},"layers":[{"id":"bg","type":"background"}]}"#;
        let out = rewrite_style_json(json, "T").unwrap();
        assert_eq!(
            out,
            r#"{"sources":{"composite":{"url":"https://api.mapbox.com/v4/mapbox.mapbox-streets-v8.json?secure&access_token=T","type":"vector"}},"version":8,"name":"Streets","layers":[{"id":"bg","type":"background"}]}"#
        );
    }

    #[test]
    fn test_rewrite_style_json_invalid() {
        let err = rewrite_style_json("{not json", "T").unwrap_err();
        assert!(matches!(err, StyleError::Json(_)));
    }

    #[test]
    fn test_non_string_url_left_untouched() {
        let json = r#"{"sources":{"a":{"url":"mapbox://u.t"},"b":{"url":42}},"glyphs":7}"#;
        let out = rewrite_style_json(json, "T").unwrap();
        assert_eq!(
            out,
            r#"{"sources":{"a":{"url":"https://api.mapbox.com/v4/u.t.json?secure&access_token=T"},"b":{"url":42}},"glyphs":7}"#
        );
    }

    #[test]
    fn test_null_fields_round_trip() {
        let json = r#"{"sources":{"a":{"url":null,"type":"vector"}},"sprite":null,"glyphs":null}"#;
        assert_eq!(rewrite_style_json(json, "T").unwrap(), json);
    }

    #[test]
    fn test_rewrite_style_json_invalid_api_url() {
        let json = r#"{"sources":{"a":{"url":"mapbox://u.t"}},"projection":{"name":"globe"}}"#;
        let options = ResolverOptions::new().with_api_url("not a url");
        let out = rewrite_style_json_with(json, "T", &options).unwrap();
        assert_eq!(out, r#"{"projection":{},"sources":{"a":{"url":"mapbox://u.t"}}}"#);
    }
}
