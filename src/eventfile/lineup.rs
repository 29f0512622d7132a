//! Starting lineups from `start` records

use super::records::LineupRecord;
use crate::types::game::{Lineup, LineupPosition, Player, TeamSide};

/// Build both starting lineups.
///
/// Starters are assigned by their team flag. Under the DH rule each club lists
/// ten starters (the pitcher bats `0`), otherwise nine; any other count is
/// kept as a warning on the lineup.
pub fn build_lineup(starts: &[LineupRecord], uses_dh: bool) -> Lineup {
    let mut lineup = Lineup {
        uses_dh,
        ..Lineup::default()
    };

    for start in starts {
        let Some(fielding_position) = LineupPosition::from_number(start.fielding_position) else {
            lineup.warnings.push(format!(
                "starter {} has invalid fielding position {}",
                start.player_id, start.fielding_position
            ));
            continue;
        };

        let player = Player {
            id: start.player_id.clone(),
            name: start.name.clone(),
            batting_position: start.batting_position,
            fielding_position,
        };

        match start.side {
            TeamSide::Visitor => lineup.visitor.push(player),
            TeamSide::Home => lineup.home.push(player),
        }
    }

    let expected = if uses_dh { 10 } else { 9 };
    for (side, name) in [(TeamSide::Visitor, "visitor"), (TeamSide::Home, "home")] {
        let count = lineup.side(side).len();
        if count != expected {
            lineup.warnings.push(format!(
                "{name} lineup has {count} starters, expected {expected}"
            ));
        }
    }

    for warning in &lineup.warnings {
        log::warn!("{}", warning);
    }

    lineup
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starter(id: &str, side: TeamSide, batting: u8, fielding: u8) -> LineupRecord {
        LineupRecord {
            player_id: id.to_string(),
            name: id.to_uppercase(),
            side,
            batting_position: batting,
            fielding_position: fielding,
        }
    }

    fn full_side(side: TeamSide, prefix: &str) -> Vec<LineupRecord> {
        (1..=9)
            .map(|n| starter(&format!("{prefix}{n}"), side, n, n))
            .collect()
    }

    #[test]
    fn nine_a_side_without_dh() {
        let mut starts = full_side(TeamSide::Visitor, "v");
        starts.extend(full_side(TeamSide::Home, "h"));

        let lineup = build_lineup(&starts, false);
        assert_eq!(lineup.visitor.len(), 9);
        assert_eq!(lineup.home.len(), 9);
        assert!(lineup.warnings.is_empty());
        assert_eq!(lineup.home[0].id, "h1");
    }

    #[test]
    fn designated_hitter_adds_a_starter() {
        let mut starts = full_side(TeamSide::Visitor, "v");
        starts.push(starter("vdh", TeamSide::Visitor, 0, 10));
        starts.extend(full_side(TeamSide::Home, "h"));
        starts.push(starter("hdh", TeamSide::Home, 0, 10));

        let lineup = build_lineup(&starts, true);
        assert!(lineup.warnings.is_empty());
        assert_eq!(
            lineup.visitor[9].fielding_position,
            LineupPosition::DesignatedHitter
        );
    }

    #[test]
    fn wrong_count_is_a_warning() {
        let starts = full_side(TeamSide::Visitor, "v");
        let lineup = build_lineup(&starts, true);
        assert_eq!(lineup.warnings.len(), 2);
        assert!(lineup.warnings[0].contains("visitor lineup has 9 starters"));
        assert!(lineup.warnings[1].contains("home lineup has 0 starters"));
    }

    #[test]
    fn invalid_position_is_skipped() {
        let starts = vec![starter("x", TeamSide::Home, 1, 12)];
        let lineup = build_lineup(&starts, false);
        assert!(lineup.home.is_empty());
        assert!(lineup.warnings[0].contains("invalid fielding position 12"));
    }
}
