//! Grammar for `scheme://authority/path?params` locators.
//!
//! Accepts exactly what `^(\w+)://([^/?]*)(/[^?]+)?\??(.+)?` accepts. The
//! pattern is not anchored at the end, so trailing text that fits no group
//! (for instance `/?a=b` directly after the authority) lands in the query.

use nom::{
    bytes::complete::tag,
    character::complete::char,
    combinator::{map, opt},
    sequence::{preceded, terminated, tuple},
    IResult,
};

use mapstyle_core::{ParseError, ParsedLocator};

use crate::lexer::*;

/// Parse a locator, returning any unconsumed input.
pub fn locator(input: &str) -> IResult<&str, ParsedLocator<'_>> {
    map(
        tuple((
            terminated(scheme, tag("://")),
            authority,
            opt(path),
            preceded(opt(char('?')), opt(query_text)),
        )),
        |(scheme, authority, path, query)| ParsedLocator {
            scheme,
            authority,
            path: path.unwrap_or("/"),
            params: query.map(|q| q.split('&').collect()).unwrap_or_default(),
        },
    )(input)
}

/// Parse a complete locator.
pub fn parse(input: &str) -> Result<ParsedLocator<'_>, ParseError> {
    locator(input)
        .map(|(_, parsed)| parsed)
        .map_err(|_| ParseError::malformed(input))
}
