//! Typed model of a map style document.
//!
//! Only the fields the rewriter touches are typed. Everything else (layers,
//! version, metadata, ...) is kept in `extra` maps and round-trips as-is.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Deserialize a field that is present in the input, keeping an explicit
/// `null` as a value instead of collapsing it into `None`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// A map style document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StyleDocument {
    /// Projection descriptor.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub projection: Option<Projection>,
    /// Named data sources.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<IndexMap<String, SourceDescriptor>>,
    /// Sprite sheet reference.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub sprite: Option<SpriteRef>,
    /// Glyph URL template, e.g. `mapbox://fonts/user/{fontstack}/{range}.pbf`.
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub glyphs: Option<Reference>,
    /// Fields not inspected by the rewriter.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StyleDocument {
    /// Parse a style document from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize back to compact JSON text.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Get a source by id.
    pub fn source(&self, id: &str) -> Option<&SourceDescriptor> {
        self.sources.as_ref()?.get(id)
    }

    /// The glyph template, if it is a string.
    pub fn glyphs_url(&self) -> Option<&str> {
        self.glyphs.as_ref()?.as_url()
    }

    /// The sprite URL, if it is a single string.
    pub fn sprite_url(&self) -> Option<&str> {
        self.sprite.as_ref()?.as_url()
    }
}

/// Projection descriptor. `name` is stripped before rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Projection {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One named data source.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SourceDescriptor {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub url: Option<Reference>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SourceDescriptor {
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(Reference::Url(url.into())),
            extra: Map::new(),
        }
    }

    /// The source URL, if it is a string.
    pub fn url_str(&self) -> Option<&str> {
        self.url.as_ref()?.as_url()
    }
}

/// A field that normally holds a URL string. Any other JSON value, `null`
/// included, is carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference {
    Url(String),
    Other(Value),
}

impl Reference {
    pub fn as_url(&self) -> Option<&str> {
        match self {
            Reference::Url(url) => Some(url),
            Reference::Other(_) => None,
        }
    }
}

impl From<&str> for Reference {
    fn from(url: &str) -> Self {
        Reference::Url(url.to_string())
    }
}

/// The `sprite` field: a single URL, or a structured (multi-sprite) value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpriteRef {
    Url(String),
    Structured(Value),
}

impl SpriteRef {
    pub fn as_url(&self) -> Option<&str> {
        match self {
            SpriteRef::Url(url) => Some(url),
            SpriteRef::Structured(_) => None,
        }
    }
}
