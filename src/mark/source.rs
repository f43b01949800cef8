//! Line views over the document buffer
//!
//! Block recognition is line oriented: every rule is offered one physical
//! line at a time. This module provides [`LineRef`], a zero-copy view over one
//! line of the source buffer, plus the whitespace and indentation helpers the
//! rules share.
//!
//! Only space and tab count as line-internal separators. This mirrors the
//! upstream line tokenizer's normalization and must stay byte-for-byte
//! consistent with it; other Unicode whitespace classes are deliberately not
//! recognized here.

use crate::mark::ast::Span;

/// Width a tab advances to: the next multiple of 4 columns.
pub const TAB_STOP: usize = 4;

/// Whether a byte is a space or tab.
#[inline]
pub fn is_space_or_tab(byte: u8) -> bool {
    byte == b' ' || byte == b'\t'
}

/// An immutable view over one physical line of the document buffer.
///
/// A `LineRef` is a borrowed slice of the source plus the byte offset of the
/// line start within the buffer. Sub-ranging is zero-copy: derived views keep
/// pointing into the same buffer with adjusted offsets. The text never
/// includes the line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRef<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> LineRef<'a> {
    pub fn new(text: &'a str, offset: usize) -> Self {
        Self { text, offset }
    }

    /// The line content, without the terminator.
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Byte offset of the line start within the document buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The byte span this line covers in the document buffer.
    pub fn span(&self) -> Span {
        Span::new(self.offset, self.offset + self.text.len())
    }

    /// Byte at the given in-line index, if any.
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        self.text.as_bytes().get(index).copied()
    }

    /// Zero-copy sub-view from `from` (in-line byte index) to the line end.
    pub fn tail(&self, from: usize) -> LineRef<'a> {
        LineRef {
            text: &self.text[from..],
            offset: self.offset + from,
        }
    }

    /// In-line byte index of the first byte that is not a space or tab.
    ///
    /// Returns the line length for blank (all space/tab or empty) lines.
    pub fn first_non_space(&self) -> usize {
        self.text
            .bytes()
            .position(|b| !is_space_or_tab(b))
            .unwrap_or(self.text.len())
    }

    /// Whether the line is empty or contains only spaces and tabs.
    pub fn is_blank(&self) -> bool {
        self.first_non_space() == self.text.len()
    }

    /// Indentation width in columns, expanding tabs to the next tab stop.
    pub fn indent_columns(&self) -> usize {
        let mut columns = 0;
        for byte in self.text.bytes() {
            match byte {
                b' ' => columns += 1,
                b'\t' => columns += TAB_STOP - columns % TAB_STOP,
                _ => break,
            }
        }
        columns
    }

    /// Span of the line content with leading and trailing space/tab excluded.
    ///
    /// Blank lines yield an empty span at the line start.
    pub fn trimmed_span(&self) -> Span {
        let bytes = self.text.as_bytes();
        let start = self.first_non_space();
        if start == bytes.len() {
            return Span::new(self.offset, self.offset);
        }
        let mut end = bytes.len();
        while end > start && is_space_or_tab(bytes[end - 1]) {
            end -= 1;
        }
        Span::new(self.offset + start, self.offset + end)
    }
}

/// Iterate the physical lines of a source buffer, preserving byte offsets.
///
/// Lines are terminated by `\n`; a trailing `\r` is excluded from the line
/// text (the offset math still accounts for it). The final line is yielded
/// whether or not the buffer ends with a terminator.
pub fn lines(source: &str) -> impl Iterator<Item = LineRef<'_>> {
    let mut offset = 0;
    source.split('\n').map(move |raw| {
        let start = offset;
        offset += raw.len() + 1;
        let text = raw.strip_suffix('\r').unwrap_or(raw);
        LineRef::new(text, start)
    })
}
