//! Parser configuration snapshot
//!
//! Options are captured once, when the rule table is assembled. Rules read
//! their options through accessors that fail fast on an unset value: a silent
//! default could misclassify documents, so an absent option is an assembly
//! error, never a runtime parsing failure.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Parser options offered to block rules at assembly time.
///
/// [`ParserOptions::new`] carries the standard values, all explicitly set.
/// [`ParserOptions::empty`] leaves every option unset; building a rule table
/// from it fails with [`OptionsError::Missing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserOptions {
    relaxed_thematic_break: Option<bool>,
}

impl ParserOptions {
    /// Standard options: thematic breaks do not interrupt paragraphs.
    pub fn new() -> Self {
        Self {
            relaxed_thematic_break: Some(false),
        }
    }

    /// All options unset. Useful for tests and for building up a custom set.
    pub fn empty() -> Self {
        Self {
            relaxed_thematic_break: None,
        }
    }

    /// Allow a thematic break to interrupt an in-progress paragraph.
    pub fn with_relaxed_thematic_break(mut self, enabled: bool) -> Self {
        self.relaxed_thematic_break = Some(enabled);
        self
    }

    pub fn relaxed_thematic_break(&self) -> Result<bool, OptionsError> {
        self.relaxed_thematic_break
            .ok_or(OptionsError::Missing("relaxed_thematic_break"))
    }
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Error raised when a rule reads an option that was never set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    Missing(&'static str),
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionsError::Missing(name) => write!(f, "Option '{}' is not set", name),
        }
    }
}

impl std::error::Error for OptionsError {}
