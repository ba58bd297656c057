//! Scanner: the layer between the character source and the collapsing
//! engine.
//!
//! It hands out *significant tokens*, single characters with comments already
//! collapsed, and copies string and regular expression literals straight into
//! the output so whitespace handling never touches them.
//!
//! Invariants
//! - A line comment is replaced by the line terminator (or end of input) that
//!   ends it; a block comment by a single space.
//! - Literal copies stop *before* the closing delimiter. The delimiter becomes
//!   the engine's current token and is emitted through the normal decision
//!   table, which is what keeps a line break after `"foo"` alive.
//! - Literal bodies are read with [`CharSource::read_verbatim`], so tabs and
//!   other control characters inside them survive.

use alloc::string::String;

use crate::{
    error::{ErrorKind, MinifyError},
    source::{CharSource, Position},
};

#[derive(Debug)]
pub(crate) struct Scanner<'src> {
    source: CharSource<'src>,
}

impl<'src> Scanner<'src> {
    pub(crate) fn new(input: &'src str) -> Self {
        Self {
            source: CharSource::new(input),
        }
    }

    /// Next character with comments stripped. `None` is end of input.
    pub(crate) fn next_significant(&mut self) -> Result<Option<char>, MinifyError> {
        let ch = self.source.read_next();
        if ch != Some('/') {
            return Ok(ch);
        }

        let start = self.source.position();
        match self.source.peek() {
            Some('/') => Ok(self.skip_line_comment()),
            Some('*') => {
                self.source.read_next();
                self.skip_block_comment(start)?;
                Ok(Some(' '))
            }
            _ => Ok(ch),
        }
    }

    fn skip_line_comment(&mut self) -> Option<char> {
        loop {
            match self.source.read_next() {
                end @ (None | Some('\n')) => return end,
                Some(_) => {}
            }
        }
    }

    fn skip_block_comment(&mut self, start: Position) -> Result<(), MinifyError> {
        loop {
            match self.source.read_next() {
                Some('*') => {
                    if self.source.peek() == Some('/') {
                        self.source.read_next();
                        return Ok(());
                    }
                }
                Some(_) => {}
                None => return Err(MinifyError::new(ErrorKind::UnterminatedComment, start)),
            }
        }
    }

    /// Copies a string literal whose opening `quote` was the last token read.
    ///
    /// Appends the opening quote and the body; the closing quote is left for
    /// the caller to emit.
    pub(crate) fn copy_string_literal(
        &mut self,
        quote: char,
        out: &mut String,
    ) -> Result<(), MinifyError> {
        let start = self.source.position();
        out.push(quote);
        loop {
            match self.source.read_verbatim() {
                Some(ch) if ch == quote => return Ok(()),
                None | Some('\n') => {
                    return Err(MinifyError::new(ErrorKind::UnterminatedString, start));
                }
                Some('\\') => {
                    out.push('\\');
                    let escaped = self
                        .source
                        .read_verbatim()
                        .ok_or(MinifyError::new(ErrorKind::UnterminatedString, start))?;
                    out.push(escaped);
                }
                Some(ch) => out.push(ch),
            }
        }
    }

    /// Copies the body of a regular expression literal whose opening `/` was
    /// the last token read and has already been written.
    ///
    /// Stops before the closing `/`, which the caller takes as its current
    /// token.
    pub(crate) fn copy_regex_literal(&mut self, out: &mut String) -> Result<(), MinifyError> {
        let start = self.source.position();
        loop {
            match self.source.read_verbatim() {
                Some('/') => return Ok(()),
                None | Some('\n') => {
                    return Err(MinifyError::new(ErrorKind::UnterminatedRegex, start));
                }
                Some('\\') => {
                    out.push('\\');
                    let escaped = self
                        .source
                        .read_verbatim()
                        .ok_or(MinifyError::new(ErrorKind::UnterminatedRegex, start))?;
                    out.push(escaped);
                }
                Some(ch) => out.push(ch),
            }
        }
    }
}

#[cfg(test)]
mod tests;
