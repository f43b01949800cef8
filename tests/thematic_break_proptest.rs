//! Property-based tests for the thematic break scanner
//!
//! These pin down the whole input space of the scanner:
//! - any single pattern character repeated 3+ times with space/tab padding
//!   matches
//! - fewer than 3 occurrences never match
//! - one foreign character anywhere poisons the whole line
//! - mixing two distinct pattern characters never matches

use mark_parser::mark::ast::Block;
use mark_parser::mark::blocks::thematic_break::is_thematic_break;
use mark_parser::mark::options::ParserOptions;
use mark_parser::mark::parser::DocumentParser;
use proptest::prelude::*;

fn pattern_char_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('*'), Just('_'), Just('-')]
}

/// A line of `count` pattern characters with space/tab padding around each.
fn break_line(pattern: char, count: usize, pads: &[String]) -> String {
    let mut line = pads[0].clone();
    for pad in pads.iter().take(count + 1).skip(1) {
        line.push(pattern);
        line.push_str(pad);
    }
    line
}

fn valid_break_strategy() -> impl Strategy<Value = String> {
    (
        pattern_char_strategy(),
        3usize..12,
        proptest::collection::vec("[ \t]{0,2}", 13),
    )
        .prop_map(|(pattern, count, pads)| break_line(pattern, count, &pads))
}

fn short_run_strategy() -> impl Strategy<Value = String> {
    (
        pattern_char_strategy(),
        0usize..3,
        proptest::collection::vec("[ \t]{0,2}", 13),
    )
        .prop_map(|(pattern, count, pads)| break_line(pattern, count, &pads))
}

/// A valid break with one non-break, non-whitespace character inserted
/// somewhere. The character class deliberately excludes `*`, `_`, `-`,
/// space and tab.
fn poisoned_break_strategy() -> impl Strategy<Value = String> {
    (valid_break_strategy(), "[a-zA-Z0-9.#>=]").prop_flat_map(|(line, foreign)| {
        let len = line.len();
        (Just(line), Just(foreign), 0..=len)
    })
    .prop_map(|(line, foreign, index)| {
        let mut poisoned = line;
        poisoned.insert_str(index, &foreign);
        poisoned
    })
}

proptest! {
    #[test]
    fn prop_valid_breaks_match(line in valid_break_strategy()) {
        prop_assert!(is_thematic_break(&line), "should match: {:?}", line);
    }

    #[test]
    fn prop_short_runs_never_match(line in short_run_strategy()) {
        prop_assert!(!is_thematic_break(&line), "should not match: {:?}", line);
    }

    #[test]
    fn prop_one_foreign_character_poisons_the_line(line in poisoned_break_strategy()) {
        prop_assert!(!is_thematic_break(&line), "should not match: {:?}", line);
    }

    #[test]
    fn prop_mixed_pattern_characters_never_match(
        (a, b) in (pattern_char_strategy(), pattern_char_strategy())
            .prop_filter("distinct pattern chars", |(a, b)| a != b),
        count in 3usize..10,
        index in 0usize..10,
    ) {
        let mut line: String = std::iter::repeat(a).take(count).collect();
        line.insert(index.min(line.len()), b);
        prop_assert!(!is_thematic_break(&line), "should not match: {:?}", line);
    }

    #[test]
    fn prop_unindented_break_parses_to_one_closed_node(
        pattern in pattern_char_strategy(),
        count in 3usize..10,
        pads in proptest::collection::vec("[ ]{0,2}", 11),
    ) {
        let line = break_line(pattern, count, &pads);
        let source = format!("{line}\n");
        let parser = DocumentParser::new(&ParserOptions::new()).unwrap();
        let doc = parser.parse(&source);

        prop_assert_eq!(doc.blocks.len(), 1);
        match &doc.blocks[0] {
            Block::ThematicBreak(node) => {
                prop_assert!(node.is_closed());
                // Round-trip: the finalized span is the trimmed break content.
                let content = &source[node.span().as_range()];
                prop_assert_eq!(content, line.trim_matches(|c| c == ' ' || c == '\t'));
            }
            other => prop_assert!(false, "not a break: {:?}", other),
        }
    }
}
