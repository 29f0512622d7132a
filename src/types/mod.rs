//! Core types for the retroplay library
//!
//! - Base, FieldingPositionCode: the vocabulary of the diamond
//! - PlayEvent: one decoded play with its modifiers and runner movement
//! - Game: a decoded event file game with lineups and plays

pub mod base;
pub mod game;
pub mod play;

pub use base::{Base, FieldingPositionCode};
pub use game::{Game, GameId, GamePlay, GameType, Lineup, LineupPosition, Player, TeamInfo, TeamSide};
pub use play::{Advancement, BasicPlay, Modifier, ModifierDescription, PlayEvent, RunnerAdvancement};
