//! Games assembled from event file records

use super::base::FieldingPositionCode;
use super::play::PlayEvent;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Whether a game stood alone or was part of a doubleheader
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    SingleGame,
    FirstOfDoubleheader,
    SecondOfDoubleheader,
}

impl GameType {
    /// Game number digit from the game id
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '0' => Some(GameType::SingleGame),
            '1' => Some(GameType::FirstOfDoubleheader),
            '2' => Some(GameType::SecondOfDoubleheader),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            GameType::SingleGame => "Single Game",
            GameType::FirstOfDoubleheader => "First Game of Doubleheader",
            GameType::SecondOfDoubleheader => "Second Game of Doubleheader",
        }
    }
}

/// A parsed game id such as `NYN198604140`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameId {
    pub raw: String,
    /// Home team code, e.g. `NYN`
    pub home_team: String,
    /// `YYYYMMDD`
    pub date: String,
    pub game_type: GameType,
}

impl GameId {
    /// Parse a twelve character game id; `None` if the shape is wrong
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.len() != 12 || !raw.is_ascii() {
            return None;
        }

        let (team, rest) = raw.split_at(3);
        let (date, number) = rest.split_at(8);
        if !team.chars().all(|c| c.is_ascii_alphanumeric())
            || !date.chars().all(|c| c.is_ascii_digit())
        {
            return None;
        }

        Some(Self {
            raw: raw.to_string(),
            home_team: team.to_string(),
            date: date.to_string(),
            game_type: GameType::from_digit(number.chars().next()?)?,
        })
    }
}

/// Which club a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Visitor,
    Home,
}

impl TeamSide {
    pub fn from_flag(flag: &str) -> Option<Self> {
        match flag {
            "0" => Some(TeamSide::Visitor),
            "1" => Some(TeamSide::Home),
            _ => None,
        }
    }
}

/// Defensive assignment of a starter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineupPosition {
    Fielder(FieldingPositionCode),
    DesignatedHitter,
}

impl LineupPosition {
    /// Position number from a start record; 10 is the designated hitter
    pub fn from_number(number: u8) -> Option<Self> {
        match number {
            10 => Some(LineupPosition::DesignatedHitter),
            n => FieldingPositionCode::new(n).map(LineupPosition::Fielder),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    /// 1 to 9; 0 for a pitcher who does not bat under the DH rule
    pub batting_position: u8,
    pub fielding_position: LineupPosition,
}

/// Starting lineups for both clubs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub visitor: Vec<Player>,
    pub home: Vec<Player>,
    pub uses_dh: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl Lineup {
    pub fn side(&self, side: TeamSide) -> &[Player] {
        match side {
            TeamSide::Visitor => &self.visitor,
            TeamSide::Home => &self.home,
        }
    }
}

/// A team resolved from the reference tables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamInfo {
    pub id: String,
    pub name: String,
    pub league_code: String,
    pub league_name: String,
}

/// One `play` record with its decoded event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GamePlay {
    pub inning: u8,
    pub side: TeamSide,
    pub batter_id: String,
    /// Balls and strikes, `None` when recorded as `??`
    pub count: Option<String>,
    pub pitches: String,
    pub event: PlayEvent,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub home_team: Option<TeamInfo>,
    pub info: BTreeMap<String, String>,
    pub lineup: Lineup,
    pub plays: Vec<GamePlay>,
    /// `sub` records seen; substitutions are not applied to the lineup
    pub substitutions: usize,
}
