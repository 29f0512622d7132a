//! Event file reading
//!
//! Splits an event file into games, decodes every `play` record and builds
//! starting lineups. Problems with individual records are collected next to the
//! games rather than stopping the read.

pub mod lineup;
pub mod records;

use crate::decoder::Decoder;
use crate::error::EventFileError;
use crate::reference::ReferenceTables;
use crate::types::game::{Game, GameId, GamePlay, TeamInfo};
use records::{LineRecord, LineupRecord, Record};
use serde::Serialize;
use std::collections::BTreeMap;

/// Everything read from one event file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EventFile {
    pub games: Vec<Game>,
    #[serde(skip)]
    pub errors: Vec<EventFileError>,
}

impl EventFile {
    pub fn play_count(&self) -> usize {
        self.games.iter().map(|g| g.plays.len()).sum()
    }
}

/// Read every game in `text`, decoding plays with `decoder`
pub fn read_games(text: &str, decoder: &Decoder) -> EventFile {
    let mut file = EventFile::default();
    let mut current: Option<GameBuilder> = None;

    for item in records::read_records(text) {
        let LineRecord { line, record } = match item {
            Ok(record) => record,
            Err(err) => {
                log::warn!("{}", err);
                file.errors.push(err);
                continue;
            }
        };

        if let Record::Id(raw) = &record {
            if let Some(builder) = current.take() {
                file.games.push(builder.finish(decoder));
            }
            match GameId::parse(raw) {
                Some(id) => current = Some(GameBuilder::new(id)),
                None => {
                    let err = EventFileError::InvalidGameId {
                        id: raw.clone(),
                        line,
                    };
                    log::warn!("{}", err);
                    file.errors.push(err);
                }
            }
            continue;
        }

        match current.as_mut() {
            Some(builder) => builder.add(record),
            None => {
                let err = EventFileError::RecordBeforeId { line };
                log::warn!("{}", err);
                file.errors.push(err);
            }
        }
    }

    if let Some(builder) = current {
        file.games.push(builder.finish(decoder));
    }

    log::info!(
        "read {} games with {} plays ({} record errors)",
        file.games.len(),
        file.play_count(),
        file.errors.len()
    );
    file
}

struct GameBuilder {
    id: GameId,
    info: BTreeMap<String, String>,
    starts: Vec<LineupRecord>,
    plays: Vec<records::PlayRecord>,
    substitutions: usize,
}

impl GameBuilder {
    fn new(id: GameId) -> Self {
        Self {
            id,
            info: BTreeMap::new(),
            starts: Vec::new(),
            plays: Vec::new(),
            substitutions: 0,
        }
    }

    fn add(&mut self, record: Record) {
        match record {
            Record::Info { key, value } => {
                self.info.insert(key, value);
            }
            Record::Start(start) => self.starts.push(start),
            Record::Sub(_) => self.substitutions += 1,
            Record::Play(play) => self.plays.push(play),
            Record::Id(_) | Record::Version(_) | Record::Comment(_) | Record::Other { .. } => {}
        }
    }

    fn finish(self, decoder: &Decoder) -> Game {
        let uses_dh = self
            .info
            .get("usedh")
            .is_some_and(|value| value.eq_ignore_ascii_case("true"));
        let lineup = lineup::build_lineup(&self.starts, uses_dh);
        let home_team = resolve_team(&self.id.home_team, decoder.tables());

        let plays = self
            .plays
            .into_iter()
            .map(|play| GamePlay {
                inning: play.inning,
                side: play.side,
                count: (play.count != "??").then_some(play.count),
                pitches: play.pitches,
                event: decoder.decode(&play.event),
                batter_id: play.batter_id,
            })
            .collect();

        Game {
            id: self.id,
            home_team,
            info: self.info,
            lineup,
            plays,
            substitutions: self.substitutions,
        }
    }
}

fn resolve_team(id: &str, tables: &ReferenceTables) -> Option<TeamInfo> {
    let team = tables.team(id)?;
    let league = tables.league(&team.league)?;
    Some(TeamInfo {
        id: id.to_string(),
        name: team.name.clone(),
        league_code: league.code.clone(),
        league_name: league.name.clone(),
    })
}
