//! Rule identity and priority order resolution
//!
//! Each block rule publishes two sets of opaque rule identifiers: rules it
//! must run after (their start syntax can visually overlap with its own, so
//! they get first refusal) and rules it must run before (it must claim the
//! line first). The sets are resolved once, at assembly time, into a total
//! order over the registered rules. A cycle across the registered constraints
//! is a fatal configuration error.
//!
//! Constraints may name rules that are not registered; those edges are
//! ignored, so a rule can publish its full constraint set without knowing
//! which neighbors the pipeline actually carries.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identifier of a block rule, used only for ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleId {
    BlockQuote,
    Heading,
    FencedCode,
    HtmlBlock,
    ThematicBreak,
    List,
    IndentedCode,
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuleId::BlockQuote => "block-quote",
            RuleId::Heading => "heading",
            RuleId::FencedCode => "fenced-code",
            RuleId::HtmlBlock => "html-block",
            RuleId::ThematicBreak => "thematic-break",
            RuleId::List => "list",
            RuleId::IndentedCode => "indented-code",
        };
        write!(f, "{}", name)
    }
}

/// Static ordering constraints a rule publishes about itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleConstraints {
    /// Rules that must get first refusal on a line before this one runs.
    pub after: &'static [RuleId],
    /// Rules this one must run before.
    pub before: &'static [RuleId],
    /// Whether the rule affects parsing beyond its own block.
    pub affects_global_scope: bool,
}

/// Assembly-time ordering failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingError {
    /// The registered constraints form a cycle over these rules.
    Cycle(Vec<RuleId>),
    /// The same rule was registered twice.
    Duplicate(RuleId),
}

impl fmt::Display for OrderingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingError::Cycle(rules) => {
                let names: Vec<String> = rules.iter().map(|r| r.to_string()).collect();
                write!(f, "Cyclic ordering constraints among: {}", names.join(", "))
            }
            OrderingError::Duplicate(rule) => {
                write!(f, "Rule '{}' registered more than once", rule)
            }
        }
    }
}

impl std::error::Error for OrderingError {}

/// Resolve the registered rules into a total evaluation order.
///
/// Kahn's algorithm over the after/before edges, restricted to registered
/// rules. Deterministic: ties are broken by registration order.
pub fn resolve_rule_order(
    rules: &[(RuleId, RuleConstraints)],
) -> Result<Vec<RuleId>, OrderingError> {
    let count = rules.len();
    for (i, (id, _)) in rules.iter().enumerate() {
        if rules[..i].iter().any(|(other, _)| other == id) {
            return Err(OrderingError::Duplicate(*id));
        }
    }
    let index_of = |id: RuleId| rules.iter().position(|(other, _)| *other == id);

    // edges[a] contains b iff a must run before b
    let mut edges: Vec<Vec<usize>> = vec![Vec::new(); count];
    let mut in_degree = vec![0usize; count];
    fn add_edge(edges: &mut [Vec<usize>], in_degree: &mut [usize], from: usize, to: usize) {
        if !edges[from].contains(&to) {
            edges[from].push(to);
            in_degree[to] += 1;
        }
    }

    for (i, (_, constraints)) in rules.iter().enumerate() {
        for dep in constraints.after {
            if let Some(j) = index_of(*dep) {
                add_edge(&mut edges, &mut in_degree, j, i);
            }
        }
        for dep in constraints.before {
            if let Some(j) = index_of(*dep) {
                add_edge(&mut edges, &mut in_degree, i, j);
            }
        }
    }

    let mut order = Vec::with_capacity(count);
    let mut placed = vec![false; count];
    while order.len() < count {
        let next = (0..count).find(|&i| !placed[i] && in_degree[i] == 0);
        let Some(next) = next else {
            let stuck: Vec<RuleId> = (0..count)
                .filter(|&i| !placed[i])
                .map(|i| rules[i].0)
                .collect();
            return Err(OrderingError::Cycle(stuck));
        };
        placed[next] = true;
        for &to in &edges[next] {
            in_degree[to] -= 1;
        }
        order.push(rules[next].0);
    }

    Ok(order)
}
