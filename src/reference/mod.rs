//! Reference tables consumed by the decoder
//!
//! Tables are built once by the host application, validated, and shared
//! read-only between decoders. Nothing in the decoder mutates them.

use crate::error::ReferenceTableError;
use crate::types::base::{Base, FieldingPositionCode};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

mod standard;

/// A defensive position
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldingPosition {
    /// Scorekeeping abbreviation, e.g. `SS`
    pub short_code: String,
    pub name: String,
}

/// What kind of value trails a parameterized modifier code (`E6`, `TH2`, `L9S`)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModifierArgument {
    Fielder,
    Base,
    HitLocation,
}

/// Vocabulary entry for a modifier code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModifierEntry {
    pub description: String,
    /// Set when the code may be followed by an argument
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub argument: Option<ModifierArgument>,
}

impl ModifierEntry {
    pub fn plain(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            argument: None,
        }
    }

    pub fn with_argument(description: impl Into<String>, argument: ModifierArgument) -> Self {
        Self {
            description: description.into(),
            argument: Some(argument),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct League {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Team {
    pub name: String,
    /// Key into the league table
    pub league: String,
}

/// Immutable lookup tables shared by every decode call
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReferenceTables {
    pub positions: BTreeMap<FieldingPositionCode, FieldingPosition>,
    pub bases: BTreeMap<Base, String>,
    pub modifiers: HashMap<String, ModifierEntry>,
    #[serde(default)]
    pub leagues: BTreeMap<String, League>,
    #[serde(default)]
    pub teams: BTreeMap<String, Team>,
}

impl ReferenceTables {
    /// The built-in Retrosheet vocabulary
    pub fn standard() -> Self {
        standard::tables()
    }

    /// Parse tables from JSON and validate them
    pub fn from_json(json: &str) -> Result<Self, ReferenceTableError> {
        let tables: Self = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReferenceTableError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ReferenceTableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Check that every position and base the grammar can capture has an entry.
    ///
    /// Modifier vocabulary is open-ended and is not checked.
    pub fn validate(&self) -> Result<(), ReferenceTableError> {
        for code in FieldingPositionCode::all() {
            if !self.positions.contains_key(&code) {
                return Err(ReferenceTableError::missing("positions", code.to_string()));
            }
        }

        for base in Base::ALL {
            if !self.bases.contains_key(&base) {
                return Err(ReferenceTableError::missing("bases", base.code().to_string()));
            }
        }

        for (id, team) in &self.teams {
            if !self.leagues.contains_key(&team.league) {
                return Err(ReferenceTableError::missing(
                    "leagues",
                    format!("{} (league of team {id})", team.league),
                ));
            }
        }

        Ok(())
    }

    pub fn position(&self, code: FieldingPositionCode) -> Option<&FieldingPosition> {
        self.positions.get(&code)
    }

    /// Resolve a position digit against the table
    pub fn fielder(&self, digit: char) -> Option<FieldingPositionCode> {
        FieldingPositionCode::from_digit(digit).filter(|code| self.positions.contains_key(code))
    }

    pub fn base_label(&self, base: Base) -> &str {
        self.bases.get(&base).map(String::as_str).unwrap_or("unknown base")
    }

    pub fn modifier(&self, code: &str) -> Option<&ModifierEntry> {
        self.modifiers.get(code)
    }

    pub fn team(&self, id: &str) -> Option<&Team> {
        self.teams.get(id)
    }

    pub fn league(&self, id: &str) -> Option<&League> {
        self.leagues.get(id)
    }
}

impl Default for ReferenceTables {
    fn default() -> Self {
        Self::standard()
    }
}
