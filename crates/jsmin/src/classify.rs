//! Character classes that drive every separator decision.

/// Highest code point treated as plain ASCII punctuation (`~`).
const LAST_PRINTABLE: char = '~';

/// Whether `ch` can be part of an identifier, number or keyword run.
///
/// Anything above the printable ASCII range counts, as does `\`, which starts
/// a unicode escape inside an identifier. Two such characters must never end
/// up adjacent in the output unless they were adjacent in the input.
#[inline]
pub(crate) fn is_alphanumeric_like(ch: char) -> bool {
    ch > LAST_PRINTABLE || ch == '\\' || ch == '_' || ch == '$' || ch.is_ascii_alphanumeric()
}

/// Same as [`is_alphanumeric_like`], with end of input never matching.
#[inline]
pub(crate) fn token_is_alphanumeric_like(token: Option<char>) -> bool {
    token.is_some_and(is_alphanumeric_like)
}

/// Whether a `/` directly after `ch` starts a regular expression literal.
///
/// Keywords such as `return` or `typeof` are not recognized: after them a
/// `/` is treated as division.
#[inline]
pub(crate) fn permits_regex(ch: char) -> bool {
    matches!(ch, '(' | ',' | '=' | ':' | '[' | '!' | '&' | '|' | '?')
}

/// Tokens that keep a preceding line break alive.
#[inline]
pub(crate) fn keeps_newline_before(ch: char) -> bool {
    matches!(ch, '{' | '[' | '(' | '+' | '-')
}

/// Tokens that keep a following line break alive.
#[inline]
pub(crate) fn keeps_newline_after(ch: char) -> bool {
    matches!(ch, '}' | ']' | ')' | '+' | '-' | '"' | '\'')
}
