//! A single-pass minifier for JavaScript source text.
//!
//! Whitespace and comments are removed and redundant separators dropped,
//! while string and regular expression literals are copied untouched. There
//! is no parse tree: the minifier works on a two-character window and a small
//! decision table, the same way the classic `jsmin` filter does.
//!
//! ```rust
//! let src = "var answer = 42; // the answer\nalert( answer );\n";
//! assert_eq!(jsmin::minify(src).unwrap(), "var answer=42;alert(answer);");
//! ```
//!
//! A `/` directly after one of `( , = : [ ! & | ?` starts a regular expression
//! literal; anywhere else it is division. Keywords like `return` or `typeof`
//! are not regex contexts: after them the slashes go through the ordinary
//! whitespace rules, so `return / x/` loses the space inside the pattern.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod error;
mod minifier;
mod scanner;
mod source;


use alloc::string::String;

pub use error::{ErrorKind, MinifyError};
pub use minifier::Minifier;

/// Minifies `input` in one call.
///
/// Shorthand for `Minifier::new(input).minify()`.
///
/// # Errors
///
/// Returns a [`MinifyError`] if a block comment, string literal or regular
/// expression literal is left unterminated.
pub fn minify(input: &str) -> Result<String, MinifyError> {
    Minifier::new(input).minify()
}
