//! Whitespace collapsing engine.
//!
//! The engine looks at a window of two significant tokens: `current`, the
//! token whose fate is being decided, and `upcoming`, the one after it. Each
//! step picks one [`Action`]; the actions cascade into each other as plain
//! sequential calls (`Emit` runs `Advance`, which runs `Fetch`).
//!
//! Decision table, keyed on `current`:
//!
//! | current  | upcoming                                  | action    |
//! |----------|-------------------------------------------|-----------|
//! | space    | alphanumeric-like                         | `Emit`    |
//! | space    | anything else                             | `Advance` |
//! | newline  | `{ [ ( + -` or alphanumeric-like          | `Emit`    |
//! | newline  | space                                     | `Fetch`   |
//! | newline  | anything else                             | `Advance` |
//! | other    | space, current alphanumeric-like          | `Emit`    |
//! | other    | space                                     | `Fetch`   |
//! | other    | newline, current in `} ] ) + - " '` or alphanumeric-like | `Emit` |
//! | other    | newline                                   | `Fetch`   |
//! | other    | anything else                             | `Emit`    |

use alloc::string::String;

use crate::{
    classify::{
        is_alphanumeric_like, keeps_newline_after, keeps_newline_before, permits_regex,
        token_is_alphanumeric_like,
    },
    error::MinifyError,
    scanner::Scanner,
};

/// What the engine does with its two-token window on one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Write `current`, then [`Action::Advance`].
    Emit,
    /// Drop `current` and shift `upcoming` into its place, then
    /// [`Action::Fetch`].
    Advance,
    /// Replace `upcoming` with the next significant token.
    Fetch,
}

/// A single minification run over one input.
///
/// ```rust
/// use jsmin::Minifier;
///
/// let out = Minifier::new("if (a) {\n  b();\n}\n").minify().unwrap();
/// assert_eq!(out, "if(a){b();}");
/// ```
#[derive(Debug)]
pub struct Minifier<'src> {
    scanner: Scanner<'src>,
    output: String,
    input_len: usize,
    /// `None` is end of input.
    current: Option<char>,
    upcoming: Option<char>,
}

impl<'src> Minifier<'src> {
    /// Prepares a run over `input`. Nothing is read until [`minify`].
    ///
    /// [`minify`]: Minifier::minify
    #[must_use]
    pub fn new(input: &'src str) -> Self {
        Self {
            scanner: Scanner::new(input),
            output: String::with_capacity(input.len()),
            input_len: input.len(),
            // beginning of file
            current: Some('\n'),
            upcoming: Some('\n'),
        }
    }

    /// Runs the minifier to completion.
    ///
    /// # Errors
    ///
    /// Returns a [`MinifyError`] if a block comment, string literal or regular
    /// expression literal is left unterminated. No partial output is returned.
    pub fn minify(mut self) -> Result<String, MinifyError> {
        if let Err(err) = self.run() {
            log::debug!("minification aborted: {err}");
            return Err(err);
        }
        log::debug!("minified {} bytes into {}", self.input_len, self.output.len());
        Ok(self.output)
    }

    fn run(&mut self) -> Result<(), MinifyError> {
        self.step(Action::Fetch)?;
        while let Some(current) = self.current {
            let action = self.decide(current);
            self.step(action)?;
        }
        Ok(())
    }

    fn decide(&self, current: char) -> Action {
        let upcoming = self.upcoming;
        match current {
            ' ' => {
                if token_is_alphanumeric_like(upcoming) {
                    Action::Emit
                } else {
                    Action::Advance
                }
            }
            '\n' => match upcoming {
                Some(' ') => Action::Fetch,
                Some(ch) if keeps_newline_before(ch) || is_alphanumeric_like(ch) => Action::Emit,
                _ => Action::Advance,
            },
            _ => match upcoming {
                Some(' ') if is_alphanumeric_like(current) => Action::Emit,
                Some(' ') => Action::Fetch,
                Some('\n')
                    if keeps_newline_after(current) || is_alphanumeric_like(current) =>
                {
                    Action::Emit
                }
                Some('\n') => Action::Fetch,
                _ => Action::Emit,
            },
        }
    }

    fn step(&mut self, action: Action) -> Result<(), MinifyError> {
        match action {
            Action::Emit => {
                self.emit_current();
                self.advance()?;
                self.fetch()
            }
            Action::Advance => {
                self.advance()?;
                self.fetch()
            }
            Action::Fetch => self.fetch(),
        }
    }

    fn emit_current(&mut self) {
        let Some(ch) = self.current else { return };
        // A separator is never needed before the first real token.
        if self.output.is_empty() && matches!(ch, ' ' | '\n') {
            return;
        }
        self.output.push(ch);
    }

    fn advance(&mut self) -> Result<(), MinifyError> {
        self.current = self.upcoming;
        if let Some(quote @ ('\'' | '"')) = self.current {
            self.scanner.copy_string_literal(quote, &mut self.output)?;
        }
        Ok(())
    }

    fn fetch(&mut self) -> Result<(), MinifyError> {
        self.upcoming = self.scanner.next_significant()?;

        let Some(current) = self.current else {
            return Ok(());
        };
        if self.upcoming == Some('/') && permits_regex(current) {
            log::trace!("regular expression literal after {current:?}");
            self.output.push(current);
            self.output.push('/');
            self.scanner.copy_regex_literal(&mut self.output)?;
            self.current = Some('/');
            self.upcoming = self.scanner.next_significant()?;
        }
        Ok(())
    }
}
