//! The line scheduler
//!
//! Drives the registered block rules over a document, one physical line at a
//! time. The open block is offered each line first (continuation); when it
//! declines it is closed and the line goes to the start-rule table, walked in
//! the order resolved from the rules' after/before constraints. Lines no rule
//! claims accumulate into paragraphs; blank lines close paragraphs.
//!
//! All configuration and ordering problems surface here, at assembly time.
//! Parsing itself is infallible: a line that matches nothing is a paragraph
//! line, not an error.

use crate::mark::ast::{Block, Document, Paragraph, Span};
use crate::mark::blocks::ordering::{resolve_rule_order, OrderingError, RuleConstraints, RuleId};
use crate::mark::blocks::thematic_break::ThematicBreakRule;
use crate::mark::blocks::{BlockContinue, BlockParser, BlockRule, BlockStartRule, OpenBlock};
use crate::mark::options::{OptionsError, ParserOptions};
use crate::mark::source::{lines, LineRef};
use crate::mark::state::ParserState;
use once_cell::sync::Lazy;
use std::fmt;

/// The block rules carried by default.
pub static CORE_RULES: Lazy<Vec<Box<dyn BlockRule + Send + Sync>>> =
    Lazy::new(|| vec![Box::new(ThematicBreakRule)]);

/// Failure while assembling the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    Options(OptionsError),
    Ordering(OrderingError),
}

impl fmt::Display for AssemblyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssemblyError::Options(err) => write!(f, "Invalid parser options: {}", err),
            AssemblyError::Ordering(err) => write!(f, "Invalid rule ordering: {}", err),
        }
    }
}

impl std::error::Error for AssemblyError {}

impl From<OptionsError> for AssemblyError {
    fn from(err: OptionsError) -> Self {
        AssemblyError::Options(err)
    }
}

impl From<OrderingError> for AssemblyError {
    fn from(err: OrderingError) -> Self {
        AssemblyError::Ordering(err)
    }
}

/// A document parser over an assembled, ordered rule table.
pub struct DocumentParser {
    rules: Vec<Box<dyn BlockStartRule>>,
}

impl fmt::Debug for DocumentParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentParser")
            .field("rules", &self.rules.len())
            .finish()
    }
}

impl DocumentParser {
    /// Assemble the core rules for the given options.
    pub fn new(options: &ParserOptions) -> Result<Self, AssemblyError> {
        Self::with_rules(&CORE_RULES, options)
    }

    /// Assemble a caller-provided rule set.
    ///
    /// Resolves the rules' ordering constraints into a total order, then
    /// builds each start rule, snapshotting its options. Both steps fail
    /// fast; nothing is parsed with a partially assembled table.
    pub fn with_rules(
        rules: &[Box<dyn BlockRule + Send + Sync>],
        options: &ParserOptions,
    ) -> Result<Self, AssemblyError> {
        let registered: Vec<(RuleId, RuleConstraints)> =
            rules.iter().map(|r| (r.id(), r.constraints())).collect();
        let order = resolve_rule_order(&registered)?;

        let mut table = Vec::with_capacity(order.len());
        for id in order {
            // resolve_rule_order rejects duplicates, so the id is unique here
            if let Some(rule) = rules.iter().find(|r| r.id() == id) {
                table.push(rule.build(options)?);
            }
        }
        Ok(Self { rules: table })
    }

    /// Parse a document into its block tree.
    pub fn parse(&self, source: &str) -> Document {
        let mut blocks = Vec::new();
        let mut open: Option<Box<dyn BlockParser>> = None;
        let mut paragraph: Vec<Span> = Vec::new();

        for line in lines(source) {
            let state = ParserState::new(line);

            if let Some(parser) = open.take() {
                match parser.try_continue(&state) {
                    BlockContinue::AtIndex(_) => {
                        open = Some(parser);
                        continue;
                    }
                    BlockContinue::None => {
                        blocks.push(parser.close(&state));
                    }
                }
            }

            if state.is_blank() {
                close_paragraph(&mut paragraph, &mut blocks);
                continue;
            }

            let ancestor = if paragraph.is_empty() {
                OpenBlock::Document
            } else {
                OpenBlock::Paragraph
            };

            let started = self
                .rules
                .iter()
                .find_map(|rule| rule.try_start(&state, ancestor));
            match started {
                Some(start) => {
                    close_paragraph(&mut paragraph, &mut blocks);
                    open = Some(start.parser);
                }
                None => {
                    paragraph.push(state.content().span());
                }
            }
        }

        // End of input closes everything still open.
        let end = ParserState::new(LineRef::new("", source.len()));
        if let Some(parser) = open.take() {
            blocks.push(parser.close(&end));
        }
        close_paragraph(&mut paragraph, &mut blocks);

        Document { blocks }
    }
}

fn close_paragraph(lines: &mut Vec<Span>, blocks: &mut Vec<Block>) {
    if !lines.is_empty() {
        blocks.push(Block::Paragraph(Paragraph::from_lines(std::mem::take(
            lines,
        ))));
    }
}
