//! Block parser lifecycle and rule registration
//!
//! A block rule plays two parts. Statically it publishes its identity and
//! ordering constraints ([`BlockRule`]); at assembly time it is built into a
//! per-configuration start decision ([`BlockStartRule`]). When a start rule
//! claims a line it installs a live [`BlockParser`], which the scheduler then
//! drives through the lifecycle: offered each following line for continuation
//! and closed when it declines.
//!
//! Closing consumes the parser (`self: Box<Self>`), so a block can only be
//! closed once and ownership of the produced node transfers to the caller's
//! tree with the close.

pub mod ordering;
pub mod thematic_break;

use crate::mark::ast::{Block, NodeSpan};
use crate::mark::blocks::ordering::{RuleConstraints, RuleId};
use crate::mark::options::{OptionsError, ParserOptions};
use crate::mark::state::ParserState;

/// Lines indented this many columns or more belong to indented code, not to
/// any other block start.
pub const CODE_INDENT: usize = 4;

/// Continuation verdict for an open block offered the next line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockContinue {
    /// The block does not include the offered line; the scheduler closes it
    /// and re-offers the line to the start rules.
    None,
    /// The block continues, having consumed the line up to this byte index.
    AtIndex(usize),
}

/// A successful start decision: the installed recognizer plus how much of the
/// line it consumed.
pub struct BlockStart {
    pub parser: Box<dyn BlockParser>,
    pub consumed_to: usize,
}

/// The innermost open block enclosing the line under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OpenBlock {
    #[default]
    Document,
    Paragraph,
}

impl OpenBlock {
    pub fn is_paragraph(&self) -> bool {
        matches!(self, OpenBlock::Paragraph)
    }
}

/// A live block parser: one currently open block during line-by-line parsing.
pub trait BlockParser {
    /// The span of the block as built so far. Provisional until close.
    fn node_span(&self) -> NodeSpan;

    /// Whether the block includes the offered next line.
    fn try_continue(&self, state: &ParserState<'_>) -> BlockContinue;

    /// Close the block, finalizing the node span and handing the node over.
    fn close(self: Box<Self>, state: &ParserState<'_>) -> Block;
}

/// Per-configuration start decision for one block type.
pub trait BlockStartRule {
    /// Decide whether the current line starts this block type.
    ///
    /// `ancestor` is the innermost open block, queried for context-sensitive
    /// decisions (a paragraph in progress blocks some starts). `None` leaves
    /// the line for the next rule in the table.
    fn try_start(&self, state: &ParserState<'_>, ancestor: OpenBlock) -> Option<BlockStart>;
}

/// Static registration of a block rule: identity, ordering constraints and
/// the per-configuration factory.
pub trait BlockRule {
    fn id(&self) -> RuleId;

    /// Ordering constraints consumed once when the rule table is assembled.
    fn constraints(&self) -> RuleConstraints;

    /// Build the start rule for the given options, snapshotting everything
    /// it needs. Fails fast on missing configuration.
    fn build(&self, options: &ParserOptions) -> Result<Box<dyn BlockStartRule>, OptionsError>;
}
