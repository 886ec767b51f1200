//! Locator and resource classification types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scheme prefix marking a short-form hosted resource reference.
pub const MAPBOX_PREFIX: &str = "mapbox:";

/// A locator split into its structural parts.
///
/// Borrows from the string it was parsed from and is meant to be consumed
/// right away by the endpoint formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLocator<'a> {
    /// Token preceding `://`.
    pub scheme: &'a str,
    /// Owner/host segment, may be empty.
    pub authority: &'a str,
    /// Remainder after the authority. Always starts with `/`; `/` when absent.
    pub path: &'a str,
    /// Raw `key=value` query fragments in their original order.
    pub params: Vec<&'a str>,
}

impl<'a> ParsedLocator<'a> {
    /// Path split on `/` with empty segments removed.
    pub fn segments(&self) -> Vec<&'a str> {
        self.path.split('/').filter(|s| !s.is_empty()).collect()
    }

    /// Value of the first `key=value` fragment whose key is `key`.
    pub fn param(&self, key: &str) -> Option<&'a str> {
        self.params.iter().copied().find_map(|p| {
            let (k, v) = p.split_once('=')?;
            (k == key).then_some(v)
        })
    }
}

/// How a reference must be rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Style,
    Sprite,
    Glyphs,
    Source,
}

impl ResourceKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Style => "style",
            ResourceKind::Sprite => "sprite",
            ResourceKind::Glyphs => "glyphs",
            ResourceKind::Source => "source",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
