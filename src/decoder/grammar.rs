//! Ordered grammar for basic play tokens
//!
//! Rules are held in an explicit `Vec` sorted by [`Tier`]. Classification walks
//! the list top to bottom and the first rule whose pattern matches the whole
//! token decides the play. Several shapes overlap (`64` vs `64(1)` vs
//! `64(1)3`), so a rule must sit in the tier matching its specificity.

use crate::reference::ReferenceTables;
use crate::types::base::{Base, FieldingPositionCode};
use crate::types::play::BasicPlay;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Priority tier of a grammar rule, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    Keyword,
    StolenBase,
    CaughtStealing,
    Hit,
    FieldersChoiceOrError,
    SingleFielder,
    FielderSequence,
    DoublePlay,
    Terminal,
}

/// Builds a play from the captures of a matched rule.
///
/// Returns `None` when a captured fielder is not in the reference tables.
pub type PlayBuilder = fn(&Captures<'_>, &ReferenceTables) -> Option<BasicPlay>;

#[derive(Debug, Clone)]
pub struct GrammarRule {
    name: &'static str,
    tier: Tier,
    pattern: Regex,
    build: PlayBuilder,
}

impl GrammarRule {
    /// Compile a rule. `pattern` must match the whole token to apply.
    pub fn new(
        name: &'static str,
        tier: Tier,
        pattern: &str,
        build: PlayBuilder,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            tier,
            pattern: Regex::new(pattern)?,
            build,
        })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// Captures only when the pattern spans the entire token
    fn full_match<'t>(&self, token: &'t str) -> Option<Captures<'t>> {
        self.pattern
            .captures(token)
            .filter(|caps| caps.get(0).is_some_and(|m| m.start() == 0 && m.end() == token.len()))
    }
}

/// The ordered rule list used by the classifier
#[derive(Debug, Clone)]
pub struct GrammarRules {
    rules: Vec<GrammarRule>,
}

const STANDARD_RULES: &[(&str, Tier, &str, PlayBuilder)] = &[
    ("strikeout", Tier::Keyword, r"^K\d*$", |_, _| Some(BasicPlay::StrikeOut)),
    ("no_play", Tier::Keyword, r"^NP$", |_, _| Some(BasicPlay::NoPlay)),
    ("wild_pitch", Tier::Keyword, r"^WP$", |_, _| Some(BasicPlay::WildPitch)),
    ("passed_ball", Tier::Keyword, r"^PB$", |_, _| Some(BasicPlay::PassedBall)),
    ("balk", Tier::Keyword, r"^BK$", |_, _| Some(BasicPlay::Balk)),
    ("walk", Tier::Keyword, r"^W$", |_, _| Some(BasicPlay::Walk)),
    ("hit_by_pitch", Tier::Keyword, r"^HP$", |_, _| Some(BasicPlay::HitByPitch)),
    ("intentional_walk", Tier::Keyword, r"^IW?$", |_, _| {
        Some(BasicPlay::IntentionalWalk)
    }),
    ("home_run", Tier::Keyword, r"^HR?(\d)?$", |caps, tables| {
        optional_fielder(caps, 1, tables).map(|_| BasicPlay::HomeRun)
    }),
    ("stolen_base", Tier::StolenBase, r"^SB[23H](?:;SB[23H])*$", |caps, _| {
        let bases = caps[0]
            .split(';')
            .map(|steal| steal.chars().nth(2).and_then(Base::from_code))
            .collect::<Option<Vec<_>>>()?;
        Some(BasicPlay::StolenBase { bases })
    }),
    (
        "picked_off_caught_stealing",
        Tier::CaughtStealing,
        r"^POCS([23H])(?:\([^()]*\))*$",
        |caps, _| {
            base_at(caps, 1).map(|base| BasicPlay::PickedOffCaughtStealing { base })
        },
    ),
    (
        "caught_stealing",
        Tier::CaughtStealing,
        r"^CS([23H])(?:\([^()]*\))*$",
        |caps, _| base_at(caps, 1).map(|base| BasicPlay::CaughtStealing { base }),
    ),
    (
        "picked_off_error",
        Tier::CaughtStealing,
        r"^PO([123])\([^()E]*E(\d)[^()]*\)(?:\([^()]*\))*$",
        |caps, tables| {
            Some(BasicPlay::PickedOff {
                base: base_at(caps, 1)?,
                error: Some(fielder_at(caps, 2, tables)?),
            })
        },
    ),
    (
        "picked_off",
        Tier::CaughtStealing,
        r"^PO([123])(?:\([^()]*\))*$",
        |caps, _| {
            base_at(caps, 1).map(|base| BasicPlay::PickedOff { base, error: None })
        },
    ),
    ("single", Tier::Hit, r"^S(\d)?$", |caps, tables| {
        optional_fielder(caps, 1, tables).map(|fielder| BasicPlay::Single { fielder })
    }),
    ("double", Tier::Hit, r"^D(\d)?$", |caps, tables| {
        optional_fielder(caps, 1, tables).map(|fielder| BasicPlay::Double { fielder })
    }),
    ("ground_rule_double", Tier::Hit, r"^DGR(\d)?$", |caps, tables| {
        optional_fielder(caps, 1, tables).map(|fielder| BasicPlay::Double { fielder })
    }),
    ("triple", Tier::Hit, r"^T(\d)?$", |caps, tables| {
        optional_fielder(caps, 1, tables).map(|fielder| BasicPlay::Triple { fielder })
    }),
    (
        "fielders_choice",
        Tier::FieldersChoiceOrError,
        r"^FC(\d)?$",
        |caps, tables| {
            optional_fielder(caps, 1, tables).map(|fielder| BasicPlay::FieldersChoice { fielder })
        },
    ),
    ("error", Tier::FieldersChoiceOrError, r"^E(\d)?$", |caps, tables| {
        optional_fielder(caps, 1, tables).map(|fielder| BasicPlay::Error { fielder })
    }),
    (
        "single_fielder",
        Tier::SingleFielder,
        r"^(\d)(?:\(([123])\))?$",
        |caps, tables| {
            let fielder = fielder_at(caps, 1, tables)?;
            if fielder.is_outfield() {
                return Some(BasicPlay::FlyOut { fielder });
            }
            Some(BasicPlay::InfieldOut {
                fielder,
                put_out_base: optional_base(caps, 2)?,
            })
        },
    ),
    (
        "fielder_sequence",
        Tier::FielderSequence,
        r"^(\d)(\d)(\d)?$",
        |caps, tables| {
            fielders_at(caps, &[1, 2, 3], tables).map(|fielders| BasicPlay::GroundOut { fielders })
        },
    ),
    (
        "force_double_play",
        Tier::DoublePlay,
        r"^(\d)(\d)\(([123])\)$",
        |caps, tables| double_play(caps, &[1, 2], 3, tables),
    ),
    (
        "double_play",
        Tier::DoublePlay,
        r"^(\d)(\d)\(([123])\)(\d)$",
        |caps, tables| double_play(caps, &[1, 2, 4], 3, tables),
    ),
    (
        "three_fielder_force",
        Tier::DoublePlay,
        r"^(\d)(\d)(\d)\(([123])\)$",
        |caps, tables| double_play(caps, &[1, 2, 3], 4, tables),
    ),
    (
        "unassisted_double_play",
        Tier::DoublePlay,
        r"^(\d)\(([123])\)(\d)$",
        |caps, tables| double_play(caps, &[1, 3], 2, tables),
    ),
    (
        "lined_into_double_play",
        Tier::DoublePlay,
        r"^(\d)\(B\)(\d)\(([123])\)$",
        |caps, tables| double_play(caps, &[1, 2], 3, tables),
    ),
    ("foul_fly_error", Tier::Terminal, r"^FLE(\d)$", |caps, tables| {
        fielder_at(caps, 1, tables).map(|fielder| BasicPlay::FoulFlyError { fielder })
    }),
    ("interference", Tier::Terminal, r"^C$", |_, _| Some(BasicPlay::Interference)),
    ("other_advance", Tier::Terminal, r"^OA$", |_, _| Some(BasicPlay::OtherAdvance)),
];

static STANDARD: LazyLock<GrammarRules> = LazyLock::new(|| {
    let rules = STANDARD_RULES
        .iter()
        .map(|&(name, tier, pattern, build)| {
            GrammarRule::new(name, tier, pattern, build)
                .expect("built-in grammar patterns are valid regexes")
        })
        .collect();
    GrammarRules { rules }
});

impl GrammarRules {
    /// The built-in Retrosheet grammar. Patterns are compiled on first use;
    /// later calls clone the compiled rules.
    pub fn standard() -> Self {
        STANDARD.clone()
    }

    /// Rules in classification order
    pub fn rules(&self) -> &[GrammarRule] {
        &self.rules
    }

    /// Insert a rule at the end of its tier, ahead of every lower-priority rule
    pub fn insert(&mut self, rule: GrammarRule) {
        let index = self
            .rules
            .iter()
            .position(|existing| existing.tier > rule.tier)
            .unwrap_or(self.rules.len());
        self.rules.insert(index, rule);
    }

    /// The first rule that fully matches `token`, if any
    pub fn matching_rule(&self, token: &str) -> Option<&GrammarRule> {
        self.rules
            .iter()
            .find(|rule| rule.full_match(token).is_some())
    }

    /// Classify a basic play token. Never fails: unmatched tokens and tokens
    /// whose fielders are not in the tables become `Unrecognized`.
    pub fn classify(&self, token: &str, tables: &ReferenceTables) -> BasicPlay {
        let unrecognized = || BasicPlay::Unrecognized {
            token: token.to_string(),
        };

        if token.is_empty() {
            return unrecognized();
        }

        for rule in &self.rules {
            let Some(caps) = rule.full_match(token) else {
                continue;
            };

            return match (rule.build)(&caps, tables) {
                Some(play) => {
                    log::debug!("rule '{}' ({:?}) matched '{}'", rule.name, rule.tier, token);
                    play
                }
                None => {
                    log::debug!(
                        "rule '{}' matched '{}' but a captured fielder is not in the reference tables",
                        rule.name,
                        token
                    );
                    unrecognized()
                }
            };
        }

        log::debug!("no grammar rule matched '{}'", token);
        unrecognized()
    }

    /// Classify a batter event that may pair a strikeout or walk with a second
    /// event, as in `K+SB2` or `W+WP`. Returns the play and its companion.
    pub fn classify_event(
        &self,
        token: &str,
        tables: &ReferenceTables,
    ) -> (BasicPlay, Option<BasicPlay>) {
        if let Some((head, tail)) = token.split_once('+') {
            let head_play = self.classify(head, tables);
            if matches!(
                head_play,
                BasicPlay::StrikeOut | BasicPlay::Walk | BasicPlay::IntentionalWalk
            ) {
                return (head_play, Some(self.classify(tail, tables)));
            }
        }

        (self.classify(token, tables), None)
    }
}

impl Default for GrammarRules {
    fn default() -> Self {
        Self::standard()
    }
}

fn base_at(caps: &Captures<'_>, group: usize) -> Option<Base> {
    caps.get(group)
        .and_then(|m| m.as_str().chars().next())
        .and_then(Base::from_code)
}

/// `Some(None)` when the group did not participate, `None` when it holds a bad base
fn optional_base(caps: &Captures<'_>, group: usize) -> Option<Option<Base>> {
    match caps.get(group) {
        None => Some(None),
        Some(_) => base_at(caps, group).map(Some),
    }
}

fn fielder_at(
    caps: &Captures<'_>,
    group: usize,
    tables: &ReferenceTables,
) -> Option<FieldingPositionCode> {
    caps.get(group)
        .and_then(|m| m.as_str().chars().next())
        .and_then(|digit| tables.fielder(digit))
}

/// `Some(None)` when the group did not participate, `None` when the fielder is invalid
fn optional_fielder(
    caps: &Captures<'_>,
    group: usize,
    tables: &ReferenceTables,
) -> Option<Option<FieldingPositionCode>> {
    match caps.get(group) {
        None => Some(None),
        Some(_) => fielder_at(caps, group, tables).map(Some),
    }
}

/// Fielders from the participating groups, in the order given
fn fielders_at(
    caps: &Captures<'_>,
    groups: &[usize],
    tables: &ReferenceTables,
) -> Option<Vec<FieldingPositionCode>> {
    groups
        .iter()
        .filter(|&&group| caps.get(group).is_some())
        .map(|&group| fielder_at(caps, group, tables))
        .collect()
}

fn double_play(
    caps: &Captures<'_>,
    fielder_groups: &[usize],
    base_group: usize,
    tables: &ReferenceTables,
) -> Option<BasicPlay> {
    Some(BasicPlay::DoublePlay {
        fielders: fielders_at(caps, fielder_groups, tables)?,
        put_out_base: Some(base_at(caps, base_group)?),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(token: &str) -> BasicPlay {
        GrammarRules::standard().classify(token, &ReferenceTables::standard())
    }

    fn fielders(codes: &[u8]) -> Vec<FieldingPositionCode> {
        codes
            .iter()
            .map(|&c| FieldingPositionCode::new(c).unwrap())
            .collect()
    }

    #[test]
    fn standard_rules_are_in_tier_order() {
        let rules = GrammarRules::standard();
        let tiers: Vec<Tier> = rules.rules().iter().map(GrammarRule::tier).collect();
        let mut sorted = tiers.clone();
        sorted.sort();
        assert_eq!(tiers, sorted);
    }

    #[test]
    fn keywords() {
        assert_eq!(classify("K"), BasicPlay::StrikeOut);
        assert_eq!(classify("K23"), BasicPlay::StrikeOut);
        assert_eq!(classify("NP"), BasicPlay::NoPlay);
        assert_eq!(classify("WP"), BasicPlay::WildPitch);
        assert_eq!(classify("PB"), BasicPlay::PassedBall);
        assert_eq!(classify("BK"), BasicPlay::Balk);
        assert_eq!(classify("W"), BasicPlay::Walk);
        assert_eq!(classify("HP"), BasicPlay::HitByPitch);
        assert_eq!(classify("I"), BasicPlay::IntentionalWalk);
        assert_eq!(classify("IW"), BasicPlay::IntentionalWalk);
        assert_eq!(classify("H"), BasicPlay::HomeRun);
        assert_eq!(classify("HR"), BasicPlay::HomeRun);
        assert_eq!(classify("HR9"), BasicPlay::HomeRun);
    }

    #[test]
    fn stolen_bases_keep_order() {
        assert_eq!(
            classify("SB2;SB3"),
            BasicPlay::StolenBase {
                bases: vec![Base::Second, Base::Third]
            }
        );
        assert_eq!(
            classify("SBH"),
            BasicPlay::StolenBase {
                bases: vec![Base::Home]
            }
        );
        assert!(!classify("SB1").is_recognized());
    }

    #[test]
    fn caught_stealing_and_pickoffs() {
        assert_eq!(
            classify("CS2(24)"),
            BasicPlay::CaughtStealing { base: Base::Second }
        );
        assert_eq!(
            classify("POCSH(1E2)"),
            BasicPlay::PickedOffCaughtStealing { base: Base::Home }
        );
        assert_eq!(
            classify("PO1(13)"),
            BasicPlay::PickedOff {
                base: Base::First,
                error: None
            }
        );
        assert_eq!(
            classify("PO2(E4)"),
            BasicPlay::PickedOff {
                base: Base::Second,
                error: FieldingPositionCode::new(4)
            }
        );
        assert_eq!(
            classify("PO1(1E3)"),
            BasicPlay::PickedOff {
                base: Base::First,
                error: FieldingPositionCode::new(3)
            }
        );
        assert_eq!(
            classify("PO2(14E4)"),
            BasicPlay::PickedOff {
                base: Base::Second,
                error: FieldingPositionCode::new(4)
            }
        );
        assert_eq!(
            classify("PO3(25)"),
            BasicPlay::PickedOff {
                base: Base::Third,
                error: None
            }
        );
    }

    #[test]
    fn hits_with_and_without_fielder() {
        assert_eq!(
            classify("S9"),
            BasicPlay::Single {
                fielder: FieldingPositionCode::new(9)
            }
        );
        assert_eq!(classify("D"), BasicPlay::Double { fielder: None });
        assert_eq!(
            classify("DGR8"),
            BasicPlay::Double {
                fielder: FieldingPositionCode::new(8)
            }
        );
        assert_eq!(classify("T"), BasicPlay::Triple { fielder: None });
    }

    #[test]
    fn single_digit_splits_outfield_from_infield() {
        assert_eq!(
            classify("8"),
            BasicPlay::FlyOut {
                fielder: FieldingPositionCode::CENTER_FIELD
            }
        );
        assert_eq!(
            classify("6"),
            BasicPlay::InfieldOut {
                fielder: FieldingPositionCode::new(6).unwrap(),
                put_out_base: None
            }
        );
        assert_eq!(
            classify("6(1)"),
            BasicPlay::InfieldOut {
                fielder: FieldingPositionCode::new(6).unwrap(),
                put_out_base: Some(Base::First)
            }
        );
    }

    #[test]
    fn fielder_sequences_are_ground_outs() {
        assert_eq!(
            classify("63"),
            BasicPlay::GroundOut {
                fielders: fielders(&[6, 3])
            }
        );
        assert_eq!(
            classify("143"),
            BasicPlay::GroundOut {
                fielders: fielders(&[1, 4, 3])
            }
        );
    }

    #[test]
    fn double_play_shapes() {
        assert_eq!(
            classify("64(1)3"),
            BasicPlay::DoublePlay {
                fielders: fielders(&[6, 4, 3]),
                put_out_base: Some(Base::First)
            }
        );
        assert_eq!(
            classify("54(1)"),
            BasicPlay::DoublePlay {
                fielders: fielders(&[5, 4]),
                put_out_base: Some(Base::First)
            }
        );
        assert_eq!(
            classify("6(1)3"),
            BasicPlay::DoublePlay {
                fielders: fielders(&[6, 3]),
                put_out_base: Some(Base::First)
            }
        );
        assert_eq!(
            classify("8(B)6(2)"),
            BasicPlay::DoublePlay {
                fielders: fielders(&[8, 6]),
                put_out_base: Some(Base::Second)
            }
        );
        assert_eq!(
            classify("366(1)"),
            BasicPlay::DoublePlay {
                fielders: fielders(&[3, 6, 6]),
                put_out_base: Some(Base::First)
            }
        );
    }

    #[test]
    fn terminal_outcomes() {
        assert_eq!(
            classify("FLE5"),
            BasicPlay::FoulFlyError {
                fielder: FieldingPositionCode::new(5).unwrap()
            }
        );
        assert_eq!(classify("C"), BasicPlay::Interference);
        assert_eq!(classify("OA"), BasicPlay::OtherAdvance);
    }

    #[test]
    fn unknown_and_invalid_tokens_are_unrecognized() {
        for token in ["ZZ9", "", "S0", "60", "K+", "SB2;", "64(1)3X"] {
            match classify(token) {
                BasicPlay::Unrecognized { token: kept } => assert_eq!(kept, token),
                other => panic!("Expected Unrecognized for '{token}', got {other:?}"),
            }
        }
    }

    #[test]
    fn matched_rule_does_not_fall_through() {
        // `S0` matches the single rule; the bad fielder must not let a later rule claim it
        let rules = GrammarRules::standard();
        assert_eq!(rules.matching_rule("S0").map(GrammarRule::name), Some("single"));
        assert!(!classify("S0").is_recognized());
    }

    #[test]
    fn inserted_rule_lands_at_end_of_its_tier() {
        let mut rules = GrammarRules::standard();
        let rule = GrammarRule::new("defensive_indifference", Tier::Keyword, r"^DI$", |_, _| {
            Some(BasicPlay::NoPlay)
        })
        .unwrap();
        rules.insert(rule);

        let position = rules
            .rules()
            .iter()
            .position(|r| r.name() == "defensive_indifference")
            .unwrap();
        assert_eq!(rules.rules()[position - 1].tier(), Tier::Keyword);
        assert_eq!(rules.rules()[position + 1].tier(), Tier::StolenBase);
        assert_eq!(
            rules.classify("DI", &ReferenceTables::standard()),
            BasicPlay::NoPlay
        );
    }

    #[test]
    fn compound_events_split_on_plus() {
        let rules = GrammarRules::standard();
        let tables = ReferenceTables::standard();

        let (play, companion) = rules.classify_event("K+SB2", &tables);
        assert_eq!(play, BasicPlay::StrikeOut);
        assert_eq!(
            companion,
            Some(BasicPlay::StolenBase {
                bases: vec![Base::Second]
            })
        );

        let (play, companion) = rules.classify_event("W+WP", &tables);
        assert_eq!(play, BasicPlay::Walk);
        assert_eq!(companion, Some(BasicPlay::WildPitch));

        let (play, companion) = rules.classify_event("S8+X", &tables);
        assert!(!play.is_recognized());
        assert!(companion.is_none());
    }

    #[test]
    fn standard_grammar_copies_are_independent() {
        let mut extended = GrammarRules::standard();
        let before = extended.rules().len();
        extended.insert(
            GrammarRule::new("defensive_indifference", Tier::Keyword, r"^DI$", |_, _| {
                Some(BasicPlay::OtherAdvance)
            })
            .unwrap(),
        );

        let fresh = GrammarRules::standard();
        assert_eq!(extended.rules().len(), before + 1);
        assert_eq!(fresh.rules().len(), before);
        assert!(fresh.matching_rule("DI").is_none());
    }
}
