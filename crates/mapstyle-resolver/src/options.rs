//! Resolver configuration.

use mapstyle_core::{ParseError, ParsedLocator};
use mapstyle_parser::parse_locator;
use serde::{Deserialize, Serialize};

/// Endpoint that rewritten references point at.
pub const DEFAULT_API_URL: &str = "https://api.mapbox.com";

/// Options for reference rewriting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResolverOptions {
    /// Base URL of the resource API. Its scheme and authority replace those of
    /// the locator; a path other than `/` is prefixed to the rewritten path.
    pub api_url: String,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl ResolverOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Parse `api_url` into the locator endpoints are built against.
    pub fn api_endpoint(&self) -> Result<ParsedLocator<'_>, ParseError> {
        parse_locator(&self.api_url)
    }
}
