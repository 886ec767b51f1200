//! Parser for short-form resource locators.
//!
//! Splits `scheme://authority/path?params` into a [`ParsedLocator`].
//! Built on `nom`; the parsed parts borrow from the input.

mod grammar;
mod lexer;

pub use grammar::locator;

use mapstyle_core::{ParseError, ParsedLocator};

/// Parse a locator string.
///
/// # Example
///
/// ```
/// use mapstyle_parser::parse_locator;
///
/// let loc = parse_locator("mapbox://styles/user/style?fresh=true").unwrap();
/// assert_eq!(loc.scheme, "mapbox");
/// assert_eq!(loc.authority, "styles");
/// assert_eq!(loc.path, "/user/style");
/// assert_eq!(loc.params, vec!["fresh=true"]);
/// ```
pub fn parse_locator(input: &str) -> Result<ParsedLocator<'_>, ParseError> {
    grammar::parse(input)
}
