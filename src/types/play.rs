//! Structured representation of a decoded play

use super::base::{Base, FieldingPositionCode};
use crate::error::DecodeIssue;
use serde::{Deserialize, Serialize};

/// The batter's primary outcome, classified from the basic play token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BasicPlay {
    StrikeOut,
    Walk,
    IntentionalWalk,
    HitByPitch,
    NoPlay,
    WildPitch,
    PassedBall,
    Balk,
    StolenBase {
        bases: Vec<Base>,
    },
    CaughtStealing {
        base: Base,
    },
    PickedOffCaughtStealing {
        base: Base,
    },
    PickedOff {
        base: Base,
        error: Option<FieldingPositionCode>,
    },
    FlyOut {
        fielder: FieldingPositionCode,
    },
    /// Single infielder out; whether it was a ground ball or a liner is not
    /// recorded by the notation, so only the digit is kept
    InfieldOut {
        fielder: FieldingPositionCode,
        put_out_base: Option<Base>,
    },
    GroundOut {
        fielders: Vec<FieldingPositionCode>,
    },
    DoublePlay {
        fielders: Vec<FieldingPositionCode>,
        /// Base recorded in the first parenthetical, the runner retired first
        put_out_base: Option<Base>,
    },
    Single {
        fielder: Option<FieldingPositionCode>,
    },
    Double {
        fielder: Option<FieldingPositionCode>,
    },
    Triple {
        fielder: Option<FieldingPositionCode>,
    },
    HomeRun,
    FieldersChoice {
        fielder: Option<FieldingPositionCode>,
    },
    Error {
        fielder: Option<FieldingPositionCode>,
    },
    FoulFlyError {
        fielder: FieldingPositionCode,
    },
    Interference,
    OtherAdvance,
    Unrecognized {
        token: String,
    },
}

impl BasicPlay {
    /// False only for `Unrecognized`
    pub fn is_recognized(&self) -> bool {
        !matches!(self, BasicPlay::Unrecognized { .. })
    }

    /// Fielders credited by this play, in notation order
    pub fn fielders(&self) -> Vec<FieldingPositionCode> {
        match self {
            BasicPlay::FlyOut { fielder }
            | BasicPlay::InfieldOut { fielder, .. }
            | BasicPlay::FoulFlyError { fielder } => vec![*fielder],
            BasicPlay::GroundOut { fielders } | BasicPlay::DoublePlay { fielders, .. } => {
                fielders.clone()
            }
            BasicPlay::Single { fielder }
            | BasicPlay::Double { fielder }
            | BasicPlay::Triple { fielder }
            | BasicPlay::FieldersChoice { fielder }
            | BasicPlay::Error { fielder } => fielder.iter().copied().collect(),
            BasicPlay::PickedOff { error, .. } => error.iter().copied().collect(),
            _ => Vec::new(),
        }
    }
}

/// Description attached to a modifier token
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", content = "text", rename_all = "snake_case")]
pub enum ModifierDescription {
    Known(String),
    Unknown,
}

/// A `/`-separated annotation on the basic play
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Modifier {
    pub code: String,
    pub description: ModifierDescription,
}

impl Modifier {
    pub fn is_known(&self) -> bool {
        matches!(self.description, ModifierDescription::Known(_))
    }
}

/// Movement of one runner on the play
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunnerAdvancement {
    pub from_base: Base,
    pub to_base: Option<Base>,
    pub is_out: bool,
    /// Parenthetical details trailing the clause, without the parentheses
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
}

/// One `;`-separated advancement clause
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advancement {
    Runner(RunnerAdvancement),
    Malformed { token: String },
}

impl Advancement {
    pub fn runner(&self) -> Option<&RunnerAdvancement> {
        match self {
            Advancement::Runner(runner) => Some(runner),
            Advancement::Malformed { .. } => None,
        }
    }
}

/// A fully decoded play
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlayEvent {
    /// The play string exactly as it was received
    pub raw_source: String,
    pub basic_play: BasicPlay,
    /// Second event recorded with a strikeout or walk (`K+SB2`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accompanying: Option<BasicPlay>,
    pub modifiers: Vec<Modifier>,
    pub advancements: Vec<Advancement>,
}

impl PlayEvent {
    /// Decode gaps embedded in this event, in source order
    pub fn issues(&self) -> Vec<DecodeIssue> {
        let mut issues = Vec::new();

        for play in std::iter::once(&self.basic_play).chain(self.accompanying.iter()) {
            if let BasicPlay::Unrecognized { token } = play {
                issues.push(DecodeIssue::UnrecognizedBasicPlay {
                    token: token.clone(),
                });
            }
        }

        issues.extend(
            self.modifiers
                .iter()
                .filter(|m| !m.is_known())
                .map(|m| DecodeIssue::UnknownModifier {
                    code: m.code.clone(),
                }),
        );

        issues.extend(self.advancements.iter().filter_map(|a| match a {
            Advancement::Malformed { token } => Some(DecodeIssue::MalformedAdvancement {
                token: token.clone(),
            }),
            Advancement::Runner(_) => None,
        }));

        issues
    }

    /// No markers anywhere in the event
    pub fn is_fully_decoded(&self) -> bool {
        self.issues().is_empty()
    }

    /// Runner advancements that parsed cleanly
    pub fn runners(&self) -> impl Iterator<Item = &RunnerAdvancement> {
        self.advancements.iter().filter_map(Advancement::runner)
    }
}
