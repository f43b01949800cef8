//! Thematic break recognition
//!
//! A thematic break is a line of three or more repeated `*`, `_` or `-`
//! characters, optionally interspersed with spaces and tabs and nothing else.
//! The scan is a single left-to-right pass over the line bytes, no regex and
//! no recursion, so pathological inputs cannot exhaust the stack.
//!
//! Pattern: `^(?:(?:\*[ \t]*){3,}|(?:_[ \t]*){3,}|(?:-[ \t]*){3,})[ \t]*$`
//!
//! The rule spans exactly one line. It must run after block quotes, headings,
//! fenced code and HTML blocks (their start syntax can visually overlap with
//! a `-`/`*` run, e.g. a dash run that is really a setext heading underline)
//! and before lists and indented code (an unindented `-`/`*` run is a break,
//! not a list item, and must claim the line first).

use crate::mark::ast::{Block, NodeSpan, Span, ThematicBreakNode};
use crate::mark::blocks::ordering::{RuleConstraints, RuleId};
use crate::mark::blocks::{
    BlockContinue, BlockParser, BlockRule, BlockStart, BlockStartRule, OpenBlock, CODE_INDENT,
};
use crate::mark::options::{OptionsError, ParserOptions};
use crate::mark::source::{is_space_or_tab, LineRef};
use crate::mark::state::ParserState;

/// Whether `text` is a thematic break line.
///
/// `text` is the line content from the first non-space/tab column onward; the
/// caller is responsible for indentation-width checks. The first non-space/tab
/// byte fixes the pattern character for the whole line; any byte that is
/// neither the pattern character nor space/tab fails the match.
pub fn is_thematic_break(text: &str) -> bool {
    let bytes = text.as_bytes();

    let mut pos = 0;
    while pos < bytes.len() && is_space_or_tab(bytes[pos]) {
        pos += 1;
    }
    let Some(&pattern) = bytes.get(pos) else {
        return false;
    };
    if !matches!(pattern, b'*' | b'_' | b'-') {
        return false;
    }

    let mut count = 0;
    while pos < bytes.len() {
        let byte = bytes[pos];
        if byte == pattern {
            count += 1;
        } else if !is_space_or_tab(byte) {
            return false;
        }
        pos += 1;
    }

    count >= 3
}

/// The live recognizer for one thematic break line.
///
/// Owns the produced node. The node span is provisional over the full
/// starting line (indentation included) until close narrows it to the
/// trimmed break content.
pub struct ThematicBreakParser {
    node: ThematicBreakNode,
    content: Span,
}

impl ThematicBreakParser {
    /// Seed the recognizer with the full starting line.
    pub fn new(line: LineRef<'_>) -> Self {
        Self {
            node: ThematicBreakNode::open(line.span()),
            content: line.trimmed_span(),
        }
    }

    /// The owned node as built so far.
    pub fn node(&self) -> &ThematicBreakNode {
        &self.node
    }
}

impl BlockParser for ThematicBreakParser {
    fn node_span(&self) -> NodeSpan {
        self.node.node_span()
    }

    fn try_continue(&self, _state: &ParserState<'_>) -> BlockContinue {
        // A thematic break never spans more than one line.
        BlockContinue::None
    }

    fn close(self: Box<Self>, _state: &ParserState<'_>) -> Block {
        Block::ThematicBreak(self.node.into_final(self.content))
    }
}

/// Options snapshot taken when the start rule is built.
#[derive(Debug, Clone, Copy)]
struct ThematicBreakOptions {
    relaxed_start: bool,
}

impl ThematicBreakOptions {
    fn new(options: &ParserOptions) -> Result<Self, OptionsError> {
        Ok(Self {
            relaxed_start: options.relaxed_thematic_break()?,
        })
    }
}

/// Per-configuration start decision for thematic breaks.
pub struct ThematicBreakStartRule {
    options: ThematicBreakOptions,
}

impl BlockStartRule for ThematicBreakStartRule {
    fn try_start(&self, state: &ParserState<'_>, ancestor: OpenBlock) -> Option<BlockStart> {
        if state.indent() >= CODE_INDENT {
            // Reclassified as indented code, owned elsewhere.
            return None;
        }
        if ancestor.is_paragraph() && !self.options.relaxed_start {
            return None;
        }
        if !is_thematic_break(state.content().text()) {
            return None;
        }
        Some(BlockStart {
            parser: Box::new(ThematicBreakParser::new(state.line())),
            consumed_to: state.line().len(),
        })
    }
}

/// Registration of the thematic break rule.
pub struct ThematicBreakRule;

impl BlockRule for ThematicBreakRule {
    fn id(&self) -> RuleId {
        RuleId::ThematicBreak
    }

    fn constraints(&self) -> RuleConstraints {
        RuleConstraints {
            after: &[
                RuleId::BlockQuote,
                RuleId::Heading,
                RuleId::FencedCode,
                RuleId::HtmlBlock,
            ],
            before: &[RuleId::List, RuleId::IndentedCode],
            affects_global_scope: false,
        }
    }

    fn build(&self, options: &ParserOptions) -> Result<Box<dyn BlockStartRule>, OptionsError> {
        Ok(Box::new(ThematicBreakStartRule {
            options: ThematicBreakOptions::new(options)?,
        }))
    }
}
