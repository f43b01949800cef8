//! Per-line parser state offered to block rules
//!
//! The scheduler builds one [`ParserState`] per physical line and offers it
//! to the open block (continuation) or to the start-rule table (new block).
//! The state is a read-only snapshot: current line, indentation in columns,
//! and the first non-space/tab column.

use crate::mark::source::LineRef;

/// Read-only per-line state.
#[derive(Debug, Clone, Copy)]
pub struct ParserState<'a> {
    line: LineRef<'a>,
    indent: usize,
    first_non_space: usize,
}

impl<'a> ParserState<'a> {
    pub fn new(line: LineRef<'a>) -> Self {
        Self {
            line,
            indent: line.indent_columns(),
            first_non_space: line.first_non_space(),
        }
    }

    /// The full current line, indentation included.
    pub fn line(&self) -> LineRef<'a> {
        self.line
    }

    /// Indentation of the current line in columns (tabs expanded).
    pub fn indent(&self) -> usize {
        self.indent
    }

    /// In-line byte index of the first non-space/tab character.
    pub fn first_non_space(&self) -> usize {
        self.first_non_space
    }

    /// The line content from the first non-space/tab column onward.
    pub fn content(&self) -> LineRef<'a> {
        self.line.tail(self.first_non_space)
    }

    pub fn is_blank(&self) -> bool {
        self.first_non_space == self.line.len()
    }
}
