//! Spans, nodes and the block tree
//!
//! Every block node carries a byte span into the document buffer. Spans of
//! blocks that are still open are provisional; closing a block refines the
//! span exactly once. The provisional/final distinction is an explicit
//! two-state value ([`NodeSpan`]) rather than a field mutated twice, and the
//! refinement is a consuming move, so a second refinement does not compile.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range as ByteRange;

/// A byte span into the document buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn as_range(&self) -> ByteRange<usize> {
        self.start..self.end
    }

    /// Smallest span covering both inputs.
    pub fn cover(&self, other: Span) -> Span {
        Span::new(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl From<ByteRange<usize>> for Span {
    fn from(range: ByteRange<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

/// The span of a block node across its lifecycle.
///
/// A node opens with a `Provisional` span covering the full starting line
/// (indentation included) and is narrowed to a `Final` content span when the
/// block closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeSpan {
    Provisional(Span),
    Final(Span),
}

impl NodeSpan {
    /// The current span, whatever the lifecycle state.
    pub fn span(&self) -> Span {
        match self {
            NodeSpan::Provisional(span) | NodeSpan::Final(span) => *span,
        }
    }

    pub fn is_final(&self) -> bool {
        matches!(self, NodeSpan::Final(_))
    }
}

/// A thematic break: a divider line of three or more `*`, `_` or `-` marks.
///
/// Created when the thematic break rule claims a line; the span stays
/// provisional (full starting line) until the block closes, at which point it
/// is narrowed to the trimmed break content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThematicBreakNode {
    span: NodeSpan,
}

impl ThematicBreakNode {
    /// Open a node over the full starting line, indentation included.
    pub(crate) fn open(line: Span) -> Self {
        Self {
            span: NodeSpan::Provisional(line),
        }
    }

    /// Narrow the span to the matched content range.
    ///
    /// Consumes the node, so the refinement can only happen once; afterwards
    /// the node is owned by the document tree.
    pub(crate) fn into_final(self, content: Span) -> Self {
        Self {
            span: NodeSpan::Final(content),
        }
    }

    pub fn span(&self) -> Span {
        self.span.span()
    }

    pub fn node_span(&self) -> NodeSpan {
        self.span
    }

    pub fn is_closed(&self) -> bool {
        self.span.is_final()
    }
}

/// A paragraph: the fallback block for lines no rule claims.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    span: Span,
    lines: Vec<Span>,
}

impl Paragraph {
    pub(crate) fn from_lines(lines: Vec<Span>) -> Self {
        let span = lines
            .iter()
            .copied()
            .reduce(|acc, line| acc.cover(line))
            .unwrap_or(Span::new(0, 0));
        Self { span, lines }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Content span of each line, in document order.
    pub fn lines(&self) -> &[Span] {
        &self.lines
    }
}

/// A finished block in the document tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    ThematicBreak(ThematicBreakNode),
    Paragraph(Paragraph),
}

impl Block {
    pub fn span(&self) -> Span {
        match self {
            Block::ThematicBreak(node) => node.span(),
            Block::Paragraph(node) => node.span(),
        }
    }
}

/// The parsed document: finished blocks in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    pub blocks: Vec<Block>,
}
