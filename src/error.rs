//! Error types
//!
//! `DecodeIssue` values are never returned as `Err`: they describe gaps that a
//! decoded `PlayEvent` carries inside itself. Table and event file errors are
//! ordinary failures for the host application to handle.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A non-fatal gap in a decoded play
#[derive(Debug, Error, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DecodeIssue {
    #[error("Unrecognized basic play '{token}'")]
    UnrecognizedBasicPlay { token: String },

    #[error("Unknown modifier '{code}'")]
    UnknownModifier { code: String },

    #[error("Malformed runner advancement '{token}'")]
    MalformedAdvancement { token: String },
}

impl DecodeIssue {
    /// The raw text the issue was raised for
    pub fn token(&self) -> &str {
        match self {
            DecodeIssue::UnrecognizedBasicPlay { token } => token,
            DecodeIssue::UnknownModifier { code } => code,
            DecodeIssue::MalformedAdvancement { token } => token,
        }
    }
}

/// Reference tables that cannot back a decoder
#[derive(Debug, Error)]
pub enum ReferenceTableError {
    #[error("Reference table '{table}' is missing entry '{key}'")]
    Missing { table: &'static str, key: String },

    #[error("Failed to parse reference tables: {source}")]
    Parse {
        #[from]
        source: serde_json::Error,
    },

    #[error("Failed to read reference tables from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ReferenceTableError {
    pub fn missing(table: &'static str, key: impl Into<String>) -> Self {
        Self::Missing {
            table,
            key: key.into(),
        }
    }
}

/// Problems with the records of an event file
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventFileError {
    #[error("Invalid game id '{id}' at line {line}")]
    InvalidGameId { id: String, line: usize },

    #[error("Malformed record at line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    #[error("Record at line {line} appears before any id record")]
    RecordBeforeId { line: usize },
}

impl EventFileError {
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}
