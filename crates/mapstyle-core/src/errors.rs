//! Error types for mapstyle.

use thiserror::Error;

/// Top-level error type for mapstyle.
///
/// Rewriting a style document never fails; this type only surfaces from the
/// entry points that also parse or serialize JSON.
#[derive(Debug, Error)]
pub enum StyleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Invalid style JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors during locator parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Malformed locator: {input:?} does not match scheme://authority/path?params")]
    MalformedLocator { input: String },
}

impl ParseError {
    pub fn malformed(input: impl Into<String>) -> Self {
        Self::MalformedLocator {
            input: input.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_display() {
        let err = ParseError::malformed("mapbox:/x");
        assert_eq!(
            err.to_string(),
            "Malformed locator: \"mapbox:/x\" does not match scheme://authority/path?params"
        );
    }

    #[test]
    fn test_style_error_wraps_parse_error() {
        let err: StyleError = ParseError::malformed("nope").into();
        assert!(matches!(err, StyleError::Parse(ParseError::MalformedLocator { .. })));
    }
}
