//! Decode summary reports
//!
//! A report separates plays that decoded completely from plays carrying one or
//! more markers, and tallies the offending tokens so grammar and vocabulary
//! gaps can be fixed without reprocessing everything.

use crate::error::DecodeIssue;
use crate::types::game::Game;
use crate::types::play::PlayEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub mod config;

pub use config::ReportConfig;

/// How often a token caused an issue, with a few plays that contained it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenTally {
    pub count: usize,
    pub examples: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodeReport {
    pub plays: usize,
    pub fully_decoded: usize,
    pub with_issues: usize,
    pub unrecognized_plays: BTreeMap<String, TokenTally>,
    pub unknown_modifiers: BTreeMap<String, TokenTally>,
    pub malformed_advancements: BTreeMap<String, TokenTally>,
}

impl DecodeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one decoded play to the report
    pub fn record(&mut self, event: &PlayEvent, config: &ReportConfig) {
        self.plays += 1;

        let issues: Vec<DecodeIssue> = event
            .issues()
            .into_iter()
            .filter(|issue| match issue {
                DecodeIssue::UnrecognizedBasicPlay { .. } => config.basic_plays,
                DecodeIssue::UnknownModifier { .. } => config.unknown_modifiers,
                DecodeIssue::MalformedAdvancement { .. } => config.malformed_advancements,
            })
            .collect();

        if issues.is_empty() {
            self.fully_decoded += 1;
            return;
        }

        self.with_issues += 1;
        for issue in issues {
            let tallies = match &issue {
                DecodeIssue::UnrecognizedBasicPlay { .. } => &mut self.unrecognized_plays,
                DecodeIssue::UnknownModifier { .. } => &mut self.unknown_modifiers,
                DecodeIssue::MalformedAdvancement { .. } => &mut self.malformed_advancements,
            };
            let tally = tallies.entry(issue.token().to_string()).or_default();
            tally.count += 1;
            if tally.examples.len() < config.max_examples_per_token
                && !tally.examples.contains(&event.raw_source)
            {
                tally.examples.push(event.raw_source.clone());
            }
        }
    }

    /// Fold another report into this one
    pub fn merge(&mut self, other: DecodeReport, config: &ReportConfig) {
        self.plays += other.plays;
        self.fully_decoded += other.fully_decoded;
        self.with_issues += other.with_issues;

        let pairs = [
            (&mut self.unrecognized_plays, other.unrecognized_plays),
            (&mut self.unknown_modifiers, other.unknown_modifiers),
            (&mut self.malformed_advancements, other.malformed_advancements),
        ];
        for (into, from) in pairs {
            for (token, tally) in from {
                let entry = into.entry(token).or_default();
                entry.count += tally.count;
                for example in tally.examples {
                    if entry.examples.len() < config.max_examples_per_token
                        && !entry.examples.contains(&example)
                    {
                        entry.examples.push(example);
                    }
                }
            }
        }
    }

    pub fn is_clean(&self) -> bool {
        self.with_issues == 0
    }

    /// Share of plays decoded without markers, 1.0 for an empty report
    pub fn decoded_ratio(&self) -> f64 {
        if self.plays == 0 {
            1.0
        } else {
            self.fully_decoded as f64 / self.plays as f64
        }
    }
}

/// Report over a sequence of events
pub fn report_events<'a>(
    events: impl IntoIterator<Item = &'a PlayEvent>,
    config: &ReportConfig,
) -> DecodeReport {
    let mut report = DecodeReport::new();
    for event in events {
        report.record(event, config);
    }
    report
}

/// Report over every play of every game
pub fn report_games(games: &[Game], config: &ReportConfig) -> DecodeReport {
    let report = report_events(
        games.iter().flat_map(|game| game.plays.iter().map(|play| &play.event)),
        config,
    );

    for (token, tally) in &report.unrecognized_plays {
        log::warn!("unrecognized play '{}' seen {} times", token, tally.count);
    }

    report
}

impl fmt::Display for DecodeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} plays: {} fully decoded, {} with issues ({:.1}%)",
            self.plays,
            self.fully_decoded,
            self.with_issues,
            self.decoded_ratio() * 100.0
        )?;

        let sections = [
            ("Unrecognized plays", &self.unrecognized_plays),
            ("Unknown modifiers", &self.unknown_modifiers),
            ("Malformed advancements", &self.malformed_advancements),
        ];
        for (title, tallies) in sections {
            if tallies.is_empty() {
                continue;
            }
            writeln!(f, "{title}:")?;
            let mut ordered: Vec<_> = tallies.iter().collect();
            ordered.sort_by(|a, b| b.1.count.cmp(&a.1.count).then_with(|| a.0.cmp(b.0)));
            for (token, tally) in ordered {
                writeln!(
                    f,
                    "  {token:<12} {:>6}  e.g. {}",
                    tally.count,
                    tally.examples.join(" | ")
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;

    fn decode_all(raws: &[&str]) -> Vec<PlayEvent> {
        let decoder = Decoder::standard();
        raws.iter().map(|raw| decoder.decode(raw)).collect()
    }

    #[test]
    fn separates_clean_plays_from_marked_ones() {
        let events = decode_all(&["K", "S9/L9S.2-H", "ZZ9", "ZZ9/G", "S8/QQ", "W.1~2"]);
        let report = report_events(&events, &ReportConfig::default());

        assert_eq!(report.plays, 6);
        assert_eq!(report.fully_decoded, 2);
        assert_eq!(report.with_issues, 4);
        assert_eq!(report.unrecognized_plays["ZZ9"].count, 2);
        assert_eq!(
            report.unrecognized_plays["ZZ9"].examples,
            vec!["ZZ9".to_string(), "ZZ9/G".to_string()]
        );
        assert_eq!(report.unknown_modifiers["QQ"].count, 1);
        assert_eq!(report.malformed_advancements["1~2"].count, 1);
        assert!(!report.is_clean());
    }

    #[test]
    fn disabled_kinds_count_as_decoded() {
        let events = decode_all(&["S8/QQ"]);
        let report = report_events(&events, &ReportConfig::grammar_only());
        assert_eq!(report.fully_decoded, 1);
        assert!(report.unknown_modifiers.is_empty());
    }

    #[test]
    fn examples_are_capped() {
        let events = decode_all(&["X1", "X1/G", "X1/F", "X1/L"]);
        let config = ReportConfig {
            max_examples_per_token: 2,
            ..ReportConfig::default()
        };
        let report = report_events(&events, &config);
        assert_eq!(report.unrecognized_plays["X1"].count, 4);
        assert_eq!(report.unrecognized_plays["X1"].examples.len(), 2);
    }

    #[test]
    fn merge_adds_counts() {
        let config = ReportConfig::default();
        let mut first = report_events(&decode_all(&["K", "ZZ9"]), &config);
        let second = report_events(&decode_all(&["ZZ9/G", "W"]), &config);
        first.merge(second, &config);

        assert_eq!(first.plays, 4);
        assert_eq!(first.fully_decoded, 2);
        assert_eq!(first.unrecognized_plays["ZZ9"].count, 2);
        assert_eq!(first.unrecognized_plays["ZZ9"].examples.len(), 2);
    }

    #[test]
    fn display_lists_sections() {
        let report = report_events(&decode_all(&["K", "ZZ9"]), &ReportConfig::default());
        let text = report.to_string();
        assert!(text.starts_with("2 plays: 1 fully decoded, 1 with issues (50.0%)"));
        assert!(text.contains("Unrecognized plays:"));
        assert!(text.contains("ZZ9"));
        assert!(!text.contains("Unknown modifiers:"));
    }

    #[test]
    fn empty_report_is_clean() {
        let report = DecodeReport::new();
        assert!(report.is_clean());
        assert_eq!(report.decoded_ratio(), 1.0);
    }
}
