use thiserror::Error;

use crate::source::Position;

/// A fatal lexical error. Minification stops at the first one and no partial
/// output is produced.
///
/// `line` and `column` are 1-based and point at the opening delimiter of the
/// construct that was left open: the `/*` of a comment, the quote of a
/// string, or the `/` of a regular expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at {line}:{column}")]
pub struct MinifyError {
    pub(crate) kind: ErrorKind,
    /// Line of the opening delimiter.
    pub line: usize,
    /// Column of the opening delimiter, counted in characters.
    pub column: usize,
}

impl MinifyError {
    pub(crate) fn new(kind: ErrorKind, at: Position) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
        }
    }

    /// Which construct was left unterminated.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// The three ways a well-formed looking input can fail to minify.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A `/*` block reached end of input before `*/`.
    #[error("unterminated comment")]
    UnterminatedComment,
    /// A quoted literal reached a line terminator or end of input before its
    /// closing quote.
    #[error("unterminated string literal")]
    UnterminatedString,
    /// A regular expression literal reached a line terminator or end of input
    /// before its closing `/`.
    #[error("unterminated regular expression literal")]
    UnterminatedRegex,
}
