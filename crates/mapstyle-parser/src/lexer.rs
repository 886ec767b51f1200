//! Character classes and primitive combinators for locators.

use nom::{
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::recognize,
    sequence::pair,
    IResult,
};

/// ASCII word character (`[A-Za-z0-9_]`).
pub fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Characters that end a query string.
pub fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}

/// Scheme: one or more word characters.
pub fn scheme(input: &str) -> IResult<&str, &str> {
    take_while1(is_word_char)(input)
}

/// Authority: everything up to the first `/` or `?`, possibly empty.
pub fn authority(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c != '/' && c != '?')(input)
}

/// Path: a `/` followed by at least one character that is not `?`.
pub fn path(input: &str) -> IResult<&str, &str> {
    recognize(pair(char('/'), take_while1(|c: char| c != '?')))(input)
}

/// Query text: the rest of the line.
pub fn query_text(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !is_line_terminator(c))(input)
}
