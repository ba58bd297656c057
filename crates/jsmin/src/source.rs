//! Character source: turns the raw input into the logical character stream
//! the rest of the minifier reasons about.
//!
//! - `\r` and `\r\n` both become a single `\n`.
//! - Every other code point below the space threshold is folded to `' '`, so
//!   the decision table only ever sees space, newline or something visible.
//!   Literal copies opt out of folding through [`CharSource::read_verbatim`].
//! - One character of pushback (the lookahead cell) backs [`CharSource::peek`].

use core::{iter::Peekable, str::Chars};

const LINE_FEED: char = '\n';
const CARRIAGE_RETURN: char = '\r';
const SPACE: char = ' ';

/// 1-based location of a physical character in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Position {
    pub line: usize,
    pub column: usize,
}

impl Default for Position {
    fn default() -> Self {
        Self { line: 1, column: 1 }
    }
}

#[derive(Debug)]
pub(crate) struct CharSource<'src> {
    chars: Peekable<Chars<'src>>,
    /// Holds a line-normalized but unfolded character, so a literal copy that
    /// starts right after a peek still sees it verbatim.
    lookahead: Option<(char, Position)>,
    /// Position of the next physical character.
    next: Position,
    /// Position of the last character handed out.
    last: Position,
}

impl<'src> CharSource<'src> {
    pub(crate) fn new(input: &'src str) -> Self {
        Self {
            chars: input.chars().peekable(),
            lookahead: None,
            next: Position::default(),
            last: Position::default(),
        }
    }

    /// Next logical character, with control characters folded to a space.
    pub(crate) fn read_next(&mut self) -> Option<char> {
        self.read_verbatim().map(fold_control)
    }

    /// Next character with line endings normalized and nothing else touched.
    pub(crate) fn read_verbatim(&mut self) -> Option<char> {
        if let Some((ch, at)) = self.lookahead.take() {
            self.last = at;
            return Some(ch);
        }

        let ch = self.chars.next()?;
        self.last = self.next;
        match ch {
            CARRIAGE_RETURN => {
                self.chars.next_if_eq(&LINE_FEED);
                self.new_line();
                Some(LINE_FEED)
            }
            LINE_FEED => {
                self.new_line();
                Some(LINE_FEED)
            }
            _ => {
                self.next.column += 1;
                Some(ch)
            }
        }
    }

    /// Reads the next logical character and pushes it back.
    ///
    /// The reported [`position`](Self::position) is left untouched.
    pub(crate) fn peek(&mut self) -> Option<char> {
        let last = self.last;
        let ch = self.read_verbatim()?;
        self.lookahead = Some((ch, self.last));
        self.last = last;
        Some(fold_control(ch))
    }

    /// Position of the character most recently returned by a read.
    pub(crate) fn position(&self) -> Position {
        self.last
    }

    fn new_line(&mut self) {
        self.next.line += 1;
        self.next.column = 1;
    }
}

#[inline]
fn fold_control(ch: char) -> char {
    if ch < SPACE && ch != LINE_FEED { SPACE } else { ch }
}
