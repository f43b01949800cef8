//! Rule table assembly across registered rules
//!
//! Registers synthetic neighbor rules around the thematic break rule to
//! verify that assembly resolves ordering constraints over the registered
//! set, fails fast on cycles and missing options, and that inert neighbors
//! leave recognition behavior unchanged.

use mark_parser::mark::ast::Block;
use mark_parser::mark::blocks::ordering::{OrderingError, RuleConstraints, RuleId};
use mark_parser::mark::blocks::thematic_break::ThematicBreakRule;
use mark_parser::mark::blocks::{BlockRule, BlockStart, BlockStartRule, OpenBlock};
use mark_parser::mark::options::{OptionsError, ParserOptions};
use mark_parser::mark::parser::{AssemblyError, DocumentParser};
use mark_parser::mark::state::ParserState;

/// A registered rule that never claims a line.
struct InertRule {
    id: RuleId,
    after: &'static [RuleId],
    before: &'static [RuleId],
}

struct InertStartRule;

impl BlockStartRule for InertStartRule {
    fn try_start(&self, _state: &ParserState<'_>, _ancestor: OpenBlock) -> Option<BlockStart> {
        None
    }
}

impl BlockRule for InertRule {
    fn id(&self) -> RuleId {
        self.id
    }

    fn constraints(&self) -> RuleConstraints {
        RuleConstraints {
            after: self.after,
            before: self.before,
            affects_global_scope: false,
        }
    }

    fn build(
        &self,
        _options: &ParserOptions,
    ) -> Result<Box<dyn BlockStartRule>, OptionsError> {
        Ok(Box::new(InertStartRule))
    }
}

fn inert(id: RuleId, after: &'static [RuleId], before: &'static [RuleId]) -> Box<dyn BlockRule + Send + Sync> {
    Box::new(InertRule { id, after, before })
}

#[test]
fn test_assembly_with_registered_neighbors() {
    let rules: Vec<Box<dyn BlockRule + Send + Sync>> = vec![
        inert(RuleId::List, &[], &[]),
        Box::new(ThematicBreakRule),
        inert(RuleId::Heading, &[], &[]),
        inert(RuleId::IndentedCode, &[], &[]),
    ];

    let parser = DocumentParser::with_rules(&rules, &ParserOptions::new()).unwrap();
    let doc = parser.parse("---\n");
    assert_eq!(doc.blocks.len(), 1);
    assert!(matches!(doc.blocks[0], Block::ThematicBreak(_)));
}

#[test]
fn test_cyclic_constraints_are_fatal_at_assembly() {
    let rules: Vec<Box<dyn BlockRule + Send + Sync>> = vec![
        inert(RuleId::Heading, &[RuleId::List], &[]),
        inert(RuleId::List, &[RuleId::Heading], &[]),
    ];

    let err = DocumentParser::with_rules(&rules, &ParserOptions::new()).unwrap_err();
    assert_eq!(
        err,
        AssemblyError::Ordering(OrderingError::Cycle(vec![RuleId::Heading, RuleId::List]))
    );
}

#[test]
fn test_duplicate_registration_is_fatal_at_assembly() {
    let rules: Vec<Box<dyn BlockRule + Send + Sync>> = vec![
        Box::new(ThematicBreakRule),
        Box::new(ThematicBreakRule),
    ];

    let err = DocumentParser::with_rules(&rules, &ParserOptions::new()).unwrap_err();
    assert_eq!(
        err,
        AssemblyError::Ordering(OrderingError::Duplicate(RuleId::ThematicBreak))
    );
}

#[test]
fn test_missing_option_is_fatal_at_assembly_not_parse() {
    let rules: Vec<Box<dyn BlockRule + Send + Sync>> = vec![Box::new(ThematicBreakRule)];

    let err = DocumentParser::with_rules(&rules, &ParserOptions::empty()).unwrap_err();
    assert_eq!(
        err,
        AssemblyError::Options(OptionsError::Missing("relaxed_thematic_break"))
    );
}
