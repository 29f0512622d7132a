//! Built-in Retrosheet vocabulary

use super::{FieldingPosition, League, ModifierArgument, ModifierEntry, ReferenceTables, Team};
use crate::types::base::{Base, FieldingPositionCode};

const POSITIONS: [(u8, &str, &str); 9] = [
    (1, "P", "pitcher"),
    (2, "C", "catcher"),
    (3, "1B", "first baseman"),
    (4, "2B", "second baseman"),
    (5, "3B", "third baseman"),
    (6, "SS", "shortstop"),
    (7, "LF", "left fielder"),
    (8, "CF", "center fielder"),
    (9, "RF", "right fielder"),
];

const BASES: [(Base, &str); 4] = [
    (Base::First, "first"),
    (Base::Second, "second"),
    (Base::Third, "third"),
    (Base::Home, "home"),
];

const PLAIN_MODIFIERS: &[(&str, &str)] = &[
    ("AP", "appeal play"),
    ("BGDP", "bunt grounded into double play"),
    ("BINT", "batter interference"),
    ("BOOT", "batting out of turn"),
    ("BPDP", "bunt popped into double play"),
    ("BR", "runner hit by batted ball"),
    ("C", "called third strike"),
    ("COUB", "courtesy batter"),
    ("COUF", "courtesy fielder"),
    ("COUR", "courtesy runner"),
    ("DP", "unspecified double play"),
    ("FDP", "fly ball double play"),
    ("FINT", "fan interference"),
    ("FL", "foul"),
    ("FO", "force out"),
    ("GDP", "ground ball double play"),
    ("GTP", "ground ball triple play"),
    ("IF", "infield fly rule"),
    ("INT", "interference"),
    ("IPHR", "inside the park home run"),
    ("LDP", "lined into double play"),
    ("LTP", "lined into triple play"),
    ("MREV", "manager challenge of call on the field"),
    ("NDP", "no double play credited"),
    ("OBS", "obstruction"),
    ("PASS", "runner passed another runner and was called out"),
    ("RINT", "runner interference"),
    ("SF", "sacrifice fly"),
    ("SH", "sacrifice hit"),
    ("TP", "unspecified triple play"),
    ("UINT", "umpire interference"),
    ("UREV", "umpire review of call on the field"),
];

const ARGUMENT_MODIFIERS: &[(&str, &str, ModifierArgument)] = &[
    ("B", "bunt", ModifierArgument::HitLocation),
    ("BG", "ground ball bunt", ModifierArgument::HitLocation),
    ("BL", "line drive bunt", ModifierArgument::HitLocation),
    ("BP", "bunt pop up", ModifierArgument::HitLocation),
    ("E", "error", ModifierArgument::Fielder),
    ("F", "fly ball", ModifierArgument::HitLocation),
    ("G", "ground ball", ModifierArgument::HitLocation),
    ("L", "line drive", ModifierArgument::HitLocation),
    ("P", "pop fly", ModifierArgument::HitLocation),
    ("R", "relay throw", ModifierArgument::Fielder),
    ("TH", "throw", ModifierArgument::Base),
];

const LEAGUES: [(&str, &str, &str); 2] = [
    ("A", "AL", "American League"),
    ("N", "NL", "National League"),
];

const TEAMS: &[(&str, &str, &str)] = &[
    ("ATL", "Atlanta Braves", "N"),
    ("CHN", "Chicago Cubs", "N"),
    ("CIN", "Cincinnati Reds", "N"),
    ("HOU", "Houston Astros", "N"),
    ("LAN", "Los Angeles Dodgers", "N"),
    ("MON", "Montreal Expos", "N"),
    ("NYN", "New York Mets", "N"),
    ("PHI", "Philadelphia Phillies", "N"),
    ("PIT", "Pittsburgh Pirates", "N"),
    ("SDN", "San Diego Padres", "N"),
    ("SFN", "San Francisco Giants", "N"),
    ("SLN", "St. Louis Cardinals", "N"),
    ("BAL", "Baltimore Orioles", "A"),
    ("BOS", "Boston Red Sox", "A"),
    ("CAL", "California Angels", "A"),
    ("CHA", "Chicago White Sox", "A"),
    ("CLE", "Cleveland Indians", "A"),
    ("DET", "Detroit Tigers", "A"),
    ("KCA", "Kansas City Royals", "A"),
    ("MIN", "Minnesota Twins", "A"),
    ("ML4", "Milwaukee Brewers", "A"),
    ("NYA", "New York Yankees", "A"),
    ("OAK", "Oakland Athletics", "A"),
    ("SEA", "Seattle Mariners", "A"),
    ("TEX", "Texas Rangers", "A"),
    ("TOR", "Toronto Blue Jays", "A"),
];

pub(super) fn tables() -> ReferenceTables {
    let positions = POSITIONS
        .iter()
        .filter_map(|&(code, short_code, name)| {
            FieldingPositionCode::new(code).map(|code| {
                (
                    code,
                    FieldingPosition {
                        short_code: short_code.to_string(),
                        name: name.to_string(),
                    },
                )
            })
        })
        .collect();

    let bases = BASES
        .iter()
        .map(|&(base, label)| (base, label.to_string()))
        .collect();

    let modifiers = PLAIN_MODIFIERS
        .iter()
        .map(|&(code, description)| (code.to_string(), ModifierEntry::plain(description)))
        .chain(
            ARGUMENT_MODIFIERS
                .iter()
                .map(|&(code, description, argument)| {
                    (
                        code.to_string(),
                        ModifierEntry::with_argument(description, argument),
                    )
                }),
        )
        .collect();

    let leagues = LEAGUES
        .iter()
        .map(|&(id, code, name)| {
            (
                id.to_string(),
                League {
                    code: code.to_string(),
                    name: name.to_string(),
                },
            )
        })
        .collect();

    let teams = TEAMS
        .iter()
        .map(|&(id, name, league)| {
            (
                id.to_string(),
                Team {
                    name: name.to_string(),
                    league: league.to_string(),
                },
            )
        })
        .collect();

    ReferenceTables {
        positions,
        bases,
        modifiers,
        leagues,
        teams,
    }
}
