//! Modifier resolution against the reference vocabulary

use crate::reference::{ModifierArgument, ReferenceTables};
use crate::types::base::Base;
use crate::types::play::{Modifier, ModifierDescription};

/// Resolve one modifier token. Unresolvable codes are kept as `Unknown`.
pub fn resolve(code: &str, tables: &ReferenceTables) -> Modifier {
    let description = match describe(code, tables) {
        Some(text) => ModifierDescription::Known(text),
        None => {
            log::debug!("unknown modifier '{}'", code);
            ModifierDescription::Unknown
        }
    };

    Modifier {
        code: code.to_string(),
        description,
    }
}

/// Resolve modifier tokens, preserving their order
pub fn resolve_all(codes: &[&str], tables: &ReferenceTables) -> Vec<Modifier> {
    codes.iter().map(|code| resolve(code, tables)).collect()
}

fn describe(code: &str, tables: &ReferenceTables) -> Option<String> {
    let (body, contact) = split_contact(code);
    if body.is_empty() {
        return None;
    }

    let text = describe_body(body, tables)?;
    Some(match contact {
        Some(contact) => format!("{text}, {contact}"),
        None => text,
    })
}

fn describe_body(body: &str, tables: &ReferenceTables) -> Option<String> {
    if let Some(entry) = tables.modifier(body) {
        return Some(entry.description.clone());
    }

    // Longest vocabulary prefix whose argument parses wins: `BP5` before `B`
    let splits = body.char_indices().skip(1).map(|(index, _)| index);
    for index in splits.collect::<Vec<_>>().into_iter().rev() {
        let (prefix, argument) = body.split_at(index);
        let Some(entry) = tables.modifier(prefix) else {
            continue;
        };
        let Some(kind) = entry.argument else {
            continue;
        };
        if let Some(qualifier) = describe_argument(kind, argument, tables) {
            return Some(format!("{} ({qualifier})", entry.description));
        }
    }

    is_hit_location(body).then(|| format!("hit location {body}"))
}

fn describe_argument(
    kind: ModifierArgument,
    argument: &str,
    tables: &ReferenceTables,
) -> Option<String> {
    let mut chars = argument.chars();
    let single = match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    };

    match kind {
        ModifierArgument::Fielder => {
            let fielder = tables.fielder(single?)?;
            tables.position(fielder).map(|position| position.name.clone())
        }
        ModifierArgument::Base => {
            let base = Base::from_code(single?)?;
            Some(tables.base_label(base).to_string())
        }
        ModifierArgument::HitLocation => {
            is_hit_location(argument).then(|| format!("location {argument}"))
        }
    }
}

/// Trailing `+` / `-` grade how hard the ball was hit
fn split_contact(code: &str) -> (&str, Option<&'static str>) {
    if let Some(body) = code.strip_suffix('+') {
        (body, Some("hard hit"))
    } else if let Some(body) = code.strip_suffix('-') {
        (body, Some("soft hit"))
    } else {
        (code, None)
    }
}

/// One or two position digits followed by up to three zone letters, e.g. `9S`, `78XD`, `7LSF`
fn is_hit_location(text: &str) -> bool {
    let digits = text.chars().take_while(|c| ('1'..='9').contains(c)).count();
    let zones = &text[digits..];
    (1..=2).contains(&digits)
        && zones.len() <= 3
        && zones.chars().all(|c| matches!(c, 'L' | 'M' | 'S' | 'D' | 'X' | 'F'))
}
