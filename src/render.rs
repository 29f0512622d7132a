//! Human-readable rendering of decoded plays
//!
//! Kept apart from the decoder: the decoder produces structured data only, and
//! callers that want scorebook text render it here.

use crate::reference::ReferenceTables;
use crate::types::base::{Base, FieldingPositionCode};
use crate::types::play::{Advancement, BasicPlay, ModifierDescription, PlayEvent};

/// Compact scorebook code, e.g. `S9`, `DP 6-4-3(1)`, `SB2,3`
pub fn short_code(play: &BasicPlay) -> String {
    match play {
        BasicPlay::StrikeOut => "K".to_string(),
        BasicPlay::Walk => "W".to_string(),
        BasicPlay::IntentionalWalk => "IW".to_string(),
        BasicPlay::HitByPitch => "HP".to_string(),
        BasicPlay::NoPlay => "NP".to_string(),
        BasicPlay::WildPitch => "WP".to_string(),
        BasicPlay::PassedBall => "PB".to_string(),
        BasicPlay::Balk => "BK".to_string(),
        BasicPlay::StolenBase { bases } => {
            let bases: Vec<String> = bases.iter().map(Base::to_string).collect();
            let prefix = if bases.len() > 1 { "DSB" } else { "SB" };
            format!("{prefix}{}", bases.join(","))
        }
        BasicPlay::CaughtStealing { base } => format!("CS{base}"),
        BasicPlay::PickedOffCaughtStealing { base } => format!("POCS{base}"),
        BasicPlay::PickedOff { base, error: None } => format!("PO{base}"),
        BasicPlay::PickedOff {
            base,
            error: Some(fielder),
        } => format!("PO{base}-E{fielder}"),
        BasicPlay::FlyOut { fielder } | BasicPlay::InfieldOut { fielder, .. } => {
            format!("O{fielder}")
        }
        BasicPlay::GroundOut { fielders } => sequence(fielders),
        BasicPlay::DoublePlay {
            fielders,
            put_out_base,
        } => match put_out_base {
            Some(base) => format!("DP {}({base})", sequence(fielders)),
            None => format!("DP {}", sequence(fielders)),
        },
        BasicPlay::Single { fielder } => with_fielder("S", *fielder),
        BasicPlay::Double { fielder } => with_fielder("D", *fielder),
        BasicPlay::Triple { fielder } => with_fielder("T", *fielder),
        BasicPlay::HomeRun => "HR".to_string(),
        BasicPlay::FieldersChoice { fielder } => with_fielder("FC", *fielder),
        BasicPlay::Error { fielder } => with_fielder("E", *fielder),
        BasicPlay::FoulFlyError { fielder } => format!("FLE{fielder}"),
        BasicPlay::Interference => "C".to_string(),
        BasicPlay::OtherAdvance => "OA".to_string(),
        BasicPlay::Unrecognized { token } => format!("?{token}"),
    }
}

/// Plain-English description using position abbreviations from the tables
pub fn describe(play: &BasicPlay, tables: &ReferenceTables) -> String {
    let pos = |fielder: &FieldingPositionCode| position(*fielder, tables);
    let base = |base: &Base| tables.base_label(*base).to_string();

    match play {
        BasicPlay::StrikeOut => "strike out".to_string(),
        BasicPlay::Walk => "walk".to_string(),
        BasicPlay::IntentionalWalk => "intentional walk".to_string(),
        BasicPlay::HitByPitch => "hit by pitch".to_string(),
        BasicPlay::NoPlay => "no play".to_string(),
        BasicPlay::WildPitch => "wild pitch".to_string(),
        BasicPlay::PassedBall => "passed ball".to_string(),
        BasicPlay::Balk => "balk".to_string(),
        BasicPlay::StolenBase { bases } if bases.len() > 1 => {
            let bases: Vec<String> = bases.iter().map(base).collect();
            format!("double steal {}", bases.join(", "))
        }
        BasicPlay::StolenBase { bases } => {
            let bases: Vec<String> = bases.iter().map(base).collect();
            format!("stole {}", bases.join(", "))
        }
        BasicPlay::CaughtStealing { base: b } => format!("caught stealing {}", base(b)),
        BasicPlay::PickedOffCaughtStealing { base: b } => {
            format!("picked off at {} (caught stealing)", base(b))
        }
        BasicPlay::PickedOff { base: b, error: None } => format!("picked off at {}", base(b)),
        BasicPlay::PickedOff {
            base: b,
            error: Some(fielder),
        } => format!("pick off attempt at {}, error by {}", base(b), pos(fielder)),
        BasicPlay::FlyOut { fielder } => format!("fly out to {}", pos(fielder)),
        BasicPlay::InfieldOut {
            fielder,
            put_out_base: None,
        } => format!("out {}", pos(fielder)),
        BasicPlay::InfieldOut {
            fielder,
            put_out_base: Some(b),
        } => format!("out {}, runner from {} retired", pos(fielder), base(b)),
        BasicPlay::GroundOut { fielders } => {
            let names: Vec<String> = fielders.iter().map(pos).collect();
            format!("ground ball {}", names.join(" to "))
        }
        BasicPlay::DoublePlay {
            fielders,
            put_out_base,
        } => {
            let names: Vec<String> = fielders.iter().map(pos).collect();
            match put_out_base {
                Some(b) => format!(
                    "{} double play, runner from {} was the initial out",
                    names.join("-"),
                    base(b)
                ),
                None => format!("{} double play", names.join("-")),
            }
        }
        BasicPlay::Single { fielder } => hit("single to", *fielder, "single", tables),
        BasicPlay::Double { fielder } => hit("double to", *fielder, "double", tables),
        BasicPlay::Triple { fielder } => hit("triple to", *fielder, "triple", tables),
        BasicPlay::HomeRun => "home run".to_string(),
        BasicPlay::FieldersChoice { fielder } => {
            hit("fielder's choice to", *fielder, "fielder's choice", tables)
        }
        BasicPlay::Error { fielder } => hit("error by", *fielder, "error", tables),
        BasicPlay::FoulFlyError { fielder } => {
            format!("error by {} on foul fly ball", pos(fielder))
        }
        BasicPlay::Interference => "catcher's interference".to_string(),
        BasicPlay::OtherAdvance => "other runner advance".to_string(),
        BasicPlay::Unrecognized { token } => format!("unrecognized play '{token}'"),
    }
}

/// One-line summary of a whole event: play, modifiers and runner movement
pub fn summarize(event: &PlayEvent, tables: &ReferenceTables) -> String {
    let mut text = describe(&event.basic_play, tables);

    if let Some(companion) = &event.accompanying {
        text.push_str(" + ");
        text.push_str(&describe(companion, tables));
    }

    let modifiers: Vec<&str> = event
        .modifiers
        .iter()
        .map(|m| match &m.description {
            ModifierDescription::Known(description) => description.as_str(),
            ModifierDescription::Unknown => m.code.as_str(),
        })
        .collect();
    if !modifiers.is_empty() {
        text.push_str(&format!(" ({})", modifiers.join(", ")));
    }

    let runners: Vec<String> = event
        .advancements
        .iter()
        .map(|advancement| match advancement {
            Advancement::Runner(runner) => {
                let from = match runner.from_base {
                    Base::Home => "batter".to_string(),
                    other => format!("runner on {}", tables.base_label(other)),
                };
                match (runner.to_base, runner.is_out) {
                    (Some(to), false) => format!("{from} to {}", tables.base_label(to)),
                    (Some(to), true) => format!("{from} out at {}", tables.base_label(to)),
                    (None, true) => format!("{from} out"),
                    (None, false) => format!("{from} safe"),
                }
            }
            Advancement::Malformed { token } => format!("unparsed '{token}'"),
        })
        .collect();
    if !runners.is_empty() {
        text.push_str("; ");
        text.push_str(&runners.join("; "));
    }

    text
}

fn position(fielder: FieldingPositionCode, tables: &ReferenceTables) -> String {
    tables
        .position(fielder)
        .map(|p| p.short_code.clone())
        .unwrap_or_else(|| fielder.to_string())
}

fn sequence(fielders: &[FieldingPositionCode]) -> String {
    fielders
        .iter()
        .map(FieldingPositionCode::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

fn with_fielder(prefix: &str, fielder: Option<FieldingPositionCode>) -> String {
    match fielder {
        Some(fielder) => format!("{prefix}{fielder}"),
        None => prefix.to_string(),
    }
}

fn hit(
    with: &str,
    fielder: Option<FieldingPositionCode>,
    without: &str,
    tables: &ReferenceTables,
) -> String {
    match fielder {
        Some(fielder) => format!("{with} {}", position(fielder, tables)),
        None => without.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;

    fn render(raw: &str) -> (String, String) {
        let decoder = Decoder::standard();
        let event = decoder.decode(raw);
        (
            short_code(&event.basic_play),
            describe(&event.basic_play, decoder.tables()),
        )
    }

    #[test]
    fn short_codes_and_descriptions() {
        assert_eq!(render("S9"), ("S9".into(), "single to RF".into()));
        assert_eq!(render("D"), ("D".into(), "double".into()));
        assert_eq!(
            render("SB2;SB3"),
            ("DSB2,3".into(), "double steal second, third".into())
        );
        assert_eq!(
            render("63"),
            ("6-3".into(), "ground ball SS to 1B".into())
        );
        assert_eq!(
            render("64(1)3"),
            (
                "DP 6-4-3(1)".into(),
                "SS-2B-1B double play, runner from first was the initial out".into()
            )
        );
        assert_eq!(
            render("PO2(E4)"),
            (
                "PO2-E4".into(),
                "pick off attempt at second, error by 2B".into()
            )
        );
        assert_eq!(
            render("FLE9"),
            ("FLE9".into(), "error by RF on foul fly ball".into())
        );
        assert_eq!(
            render("ZZ9"),
            ("?ZZ9".into(), "unrecognized play 'ZZ9'".into())
        );
    }

    #[test]
    fn summary_includes_runners_and_modifiers() {
        let decoder = Decoder::standard();
        let event = decoder.decode("S9/L9S.2-H;1X3(95)");
        assert_eq!(
            summarize(&event, decoder.tables()),
            "single to RF (line drive (location 9S)); runner on second to home; runner on first out at third"
        );
    }

    #[test]
    fn summary_of_compound_play() {
        let decoder = Decoder::standard();
        let event = decoder.decode("K+WP.B-1");
        assert_eq!(
            summarize(&event, decoder.tables()),
            "strike out + wild pitch; batter to first"
        );
    }
}
