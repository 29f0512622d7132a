//! Report configuration

use serde::{Deserialize, Serialize};

/// Which decode issues a report collects, and how much detail it keeps
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportConfig {
    /// Count unrecognized basic plays
    pub basic_plays: bool,
    /// Count modifiers missing from the vocabulary
    pub unknown_modifiers: bool,
    /// Count advancement clauses that did not parse
    pub malformed_advancements: bool,
    /// Raw play strings kept per offending token
    pub max_examples_per_token: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            basic_plays: true,
            unknown_modifiers: true,
            malformed_advancements: true,
            max_examples_per_token: 3,
        }
    }
}

impl ReportConfig {
    /// Only grammar gaps: unrecognized plays and malformed clauses
    pub fn grammar_only() -> Self {
        Self {
            unknown_modifiers: false,
            ..Self::default()
        }
    }
}
