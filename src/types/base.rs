//! Bases and fielding positions

use serde::{Deserialize, Serialize};
use std::fmt;

/// A base on the diamond
///
/// `Home` doubles as the batter's starting point: a runner leaving `Home`
/// is the batter, a runner arriving at `Home` has scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Base {
    First,
    Second,
    Third,
    Home,
}

impl Base {
    pub const ALL: [Base; 4] = [Base::First, Base::Second, Base::Third, Base::Home];

    /// Parse a base code: `1`, `2`, `3` or `H`
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '1' => Some(Base::First),
            '2' => Some(Base::Second),
            '3' => Some(Base::Third),
            'H' => Some(Base::Home),
            _ => None,
        }
    }

    /// Parse a from-base in an advancement clause, where `B` is the batter
    pub fn from_runner_code(code: char) -> Option<Self> {
        match code {
            'B' => Some(Base::Home),
            other => Self::from_code(other),
        }
    }

    pub fn code(self) -> char {
        match self {
            Base::First => '1',
            Base::Second => '2',
            Base::Third => '3',
            Base::Home => 'H',
        }
    }

    /// Index along the base path when a runner starts from this base
    fn departure_index(self) -> u8 {
        match self {
            Base::Home => 0,
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
        }
    }

    /// Index along the base path when a runner ends at this base
    fn arrival_index(self) -> u8 {
        match self {
            Base::First => 1,
            Base::Second => 2,
            Base::Third => 3,
            Base::Home => 4,
        }
    }

    /// Whether a runner starting at `self` can end at `to`.
    ///
    /// A runner put out may be retired at the base they started from
    /// (`1X1` on a pick-off), a runner reaching safely must move forward.
    pub fn can_reach(self, to: Base, is_out: bool) -> bool {
        let from = self.departure_index();
        let to = to.arrival_index();
        if is_out { to >= from.max(1) } else { to > from }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Standard defensive position number, 1 (pitcher) through 9 (right field)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct FieldingPositionCode(u8);

impl FieldingPositionCode {
    pub const PITCHER: Self = Self(1);
    pub const CATCHER: Self = Self(2);
    pub const LEFT_FIELD: Self = Self(7);
    pub const CENTER_FIELD: Self = Self(8);
    pub const RIGHT_FIELD: Self = Self(9);

    /// Position from its number, `None` outside 1-9.
    ///
    /// ```
    /// use retroplay::types::FieldingPositionCode;
    ///
    /// let shortstop = FieldingPositionCode::new(6).unwrap();
    /// assert_eq!(shortstop.value(), 6);
    /// assert!(!shortstop.is_outfield());
    /// assert_eq!(FieldingPositionCode::from_digit('8'), Some(FieldingPositionCode::CENTER_FIELD));
    /// assert_eq!(FieldingPositionCode::new(0), None);
    /// assert_eq!(FieldingPositionCode::from_digit('X'), None);
    /// ```
    pub fn new(code: u8) -> Option<Self> {
        (1..=9).contains(&code).then_some(Self(code))
    }

    /// Position from a notation digit such as the `9` in `S9`
    pub fn from_digit(digit: char) -> Option<Self> {
        digit
            .to_digit(10)
            .and_then(|d| Self::new(d as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Left, center or right field
    pub fn is_outfield(self) -> bool {
        self.0 >= 7
    }

    /// All nine positions in numeric order
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=9).map(Self)
    }
}

impl TryFrom<u8> for FieldingPositionCode {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| format!("fielding position out of range: {value}"))
    }
}

impl From<FieldingPositionCode> for u8 {
    fn from(code: FieldingPositionCode) -> Self {
        code.0
    }
}

impl fmt::Display for FieldingPositionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
