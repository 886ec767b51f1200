//! Resource kind classification.
//!
//! Rules are evaluated top-down on the raw reference string; the first match
//! wins. When nothing matches, the role of the field being rewritten decides,
//! and only the `Source` role yields a rewrite.

use mapstyle_core::ResourceKind;

/// A single classification rule.
pub struct Rule {
    pub kind: ResourceKind,
    pub matches: fn(&str) -> bool,
}

/// Classification rules in precedence order.
pub const RULES: &[Rule] = &[
    Rule {
        kind: ResourceKind::Style,
        matches: |url| url.contains("/styles/") && !url.contains("/sprite"),
    },
    Rule {
        kind: ResourceKind::Sprite,
        matches: |url| url.contains("/sprites/"),
    },
    Rule {
        kind: ResourceKind::Glyphs,
        matches: |url| url.contains("/fonts/"),
    },
    Rule {
        kind: ResourceKind::Source,
        matches: |url| url.contains("/v4/"),
    },
];

/// Decide how `url` should be rewritten, given the role of the field holding it.
///
/// `None` means the reference is passed through unchanged.
pub fn classify(url: &str, role: ResourceKind) -> Option<ResourceKind> {
    RULES
        .iter()
        .find(|rule| (rule.matches)(url))
        .map(|rule| rule.kind)
        .or_else(|| (role == ResourceKind::Source).then_some(ResourceKind::Source))
}
