//! CSV record splitting for event files

use crate::error::EventFileError;
use crate::types::game::TeamSide;

/// A `start` or `sub` record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineupRecord {
    pub player_id: String,
    pub name: String,
    pub side: TeamSide,
    pub batting_position: u8,
    pub fielding_position: u8,
}

/// A `play` record before its event is decoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRecord {
    pub inning: u8,
    pub side: TeamSide,
    pub batter_id: String,
    pub count: String,
    pub pitches: String,
    pub event: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Id(String),
    Version(String),
    Info { key: String, value: String },
    Start(LineupRecord),
    Sub(LineupRecord),
    Play(PlayRecord),
    Comment(String),
    Other { kind: String, fields: Vec<String> },
}

/// A record with the 1-based line it started on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    pub line: usize,
    pub record: Record,
}

/// Split event file text into typed records.
///
/// Each item is either a record or the error for that line, so one bad line
/// never hides the rest of the file.
pub fn read_records(text: &str) -> Vec<Result<LineRecord, EventFileError>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let row = match result {
            Ok(row) => row,
            Err(err) => {
                let line = err
                    .position()
                    .map(|p| p.line() as usize)
                    .unwrap_or(index + 1);
                records.push(Err(EventFileError::malformed(line, err.to_string())));
                continue;
            }
        };

        let line = row
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(index + 1);
        let fields: Vec<&str> = row.iter().collect();
        records.push(parse_record(&fields, line).map(|record| LineRecord { line, record }));
    }

    records
}

/// Interpret the fields of one CSV row
pub fn parse_record(fields: &[&str], line: usize) -> Result<Record, EventFileError> {
    let Some((&kind, rest)) = fields.split_first() else {
        return Err(EventFileError::malformed(line, "empty record"));
    };

    let field = |index: usize, name: &str| -> Result<String, EventFileError> {
        rest.get(index)
            .map(|value| value.to_string())
            .ok_or_else(|| EventFileError::malformed(line, format!("{kind} record missing {name}")))
    };

    match kind {
        "id" => Ok(Record::Id(field(0, "game id")?)),
        "version" => Ok(Record::Version(field(0, "version")?)),
        "info" => Ok(Record::Info {
            key: field(0, "key")?,
            value: rest.get(1).map(|v| v.to_string()).unwrap_or_default(),
        }),
        "start" | "sub" => {
            let lineup = LineupRecord {
                player_id: field(0, "player id")?,
                name: field(1, "player name")?,
                side: side(&field(2, "team flag")?, line)?,
                batting_position: number(&field(3, "batting position")?, "batting position", line)?,
                fielding_position: number(
                    &field(4, "fielding position")?,
                    "fielding position",
                    line,
                )?,
            };
            Ok(if kind == "start" {
                Record::Start(lineup)
            } else {
                Record::Sub(lineup)
            })
        }
        "play" => Ok(Record::Play(PlayRecord {
            inning: number(&field(0, "inning")?, "inning", line)?,
            side: side(&field(1, "team flag")?, line)?,
            batter_id: field(2, "batter id")?,
            count: field(3, "count")?,
            pitches: field(4, "pitches")?,
            event: field(5, "event")?,
        })),
        "com" => Ok(Record::Comment(field(0, "comment")?)),
        other => Ok(Record::Other {
            kind: other.to_string(),
            fields: rest.iter().map(|f| f.to_string()).collect(),
        }),
    }
}

fn side(flag: &str, line: usize) -> Result<TeamSide, EventFileError> {
    TeamSide::from_flag(flag)
        .ok_or_else(|| EventFileError::malformed(line, format!("invalid team flag '{flag}'")))
}

fn number(value: &str, name: &str, line: usize) -> Result<u8, EventFileError> {
    value
        .parse()
        .map_err(|_| EventFileError::malformed(line, format!("invalid {name} '{value}'")))
}
