//! Runner advancement clauses: `2-H`, `1X3`, `B-2(E6/TH)`

use crate::types::base::Base;
use crate::types::play::{Advancement, RunnerAdvancement};
use regex::Regex;
use std::sync::LazyLock;

static CLAUSE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([123BH])([-X])([123H])?((?:\([^()]*\))*)$")
        .expect("advancement pattern is a valid regex")
});

static ANNOTATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(([^()]*)\)").expect("annotation pattern is a valid regex")
});

/// Parses `;`-separated runner clauses. The patterns are compiled once per
/// process and shared by every parser.
#[derive(Debug, Clone)]
pub struct AdvancementParser {
    clause: Regex,
    annotation: Regex,
}

impl AdvancementParser {
    pub fn new() -> Self {
        Self {
            clause: CLAUSE.clone(),
            annotation: ANNOTATION.clone(),
        }
    }

    /// Parse one clause. Anything that is not a well-formed base transition
    /// becomes `Advancement::Malformed` carrying the raw token.
    pub fn parse(&self, token: &str) -> Advancement {
        match self.parse_runner(token) {
            Some(runner) => Advancement::Runner(runner),
            None => {
                log::debug!("malformed advancement '{}'", token);
                Advancement::Malformed {
                    token: token.to_string(),
                }
            }
        }
    }

    pub fn parse_all(&self, tokens: &[&str]) -> Vec<Advancement> {
        tokens.iter().map(|token| self.parse(token)).collect()
    }

    fn parse_runner(&self, token: &str) -> Option<RunnerAdvancement> {
        let caps = self.clause.captures(token)?;

        let from_base = caps
            .get(1)
            .and_then(|m| m.as_str().chars().next())
            .and_then(Base::from_runner_code)?;
        let marked_out = caps.get(2).is_some_and(|m| m.as_str() == "X");
        let to_base = match caps.get(3) {
            Some(m) => Some(m.as_str().chars().next().and_then(Base::from_code)?),
            None => None,
        };

        let annotations: Vec<String> = caps
            .get(4)
            .map(|m| {
                self.annotation
                    .captures_iter(m.as_str())
                    .map(|c| c[1].to_string())
                    .collect()
            })
            .unwrap_or_default();

        // `1X3(E5)`: the out was negated by an error
        let is_out = marked_out && !annotations.iter().any(|note| records_error(note));

        if let Some(to) = to_base {
            if !from_base.can_reach(to, is_out) {
                return None;
            }
        }

        Some(RunnerAdvancement {
            from_base,
            to_base,
            is_out,
            annotations,
        })
    }
}

impl Default for AdvancementParser {
    fn default() -> Self {
        Self::new()
    }
}

/// An `E` followed by a position digit, as in `E5`, `5E3` or `E2/TH`
fn records_error(annotation: &str) -> bool {
    annotation
        .as_bytes()
        .windows(2)
        .any(|pair| pair[0] == b'E' && pair[1].is_ascii_digit())
}
