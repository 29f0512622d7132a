//! Splits a raw play string into its basic play, modifier and advancement tokens.

/// The pieces of one play string, borrowed from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayTokens<'a> {
    pub basic_play: &'a str,
    pub modifiers: Vec<&'a str>,
    pub advancements: Vec<&'a str>,
}

/// Tokenize a play string such as `S9/L9S.2-H;1-3`.
///
/// The batter event is everything before the first `.`; the advancement
/// clause is everything after it. Separators inside parentheses never split,
/// so `PO1(E1/TH)` stays one token. Whitespace is not trimmed.
pub fn tokenize(raw: &str) -> PlayTokens<'_> {
    let (event, clause) = match find_top_level(raw, '.') {
        Some(index) => (&raw[..index], Some(&raw[index + 1..])),
        None => (raw, None),
    };

    let mut pieces = split_top_level(event, '/').into_iter();
    let basic_play = pieces.next().unwrap_or_default();
    let modifiers = pieces.collect();

    let advancements = clause
        .map(|clause| split_top_level(clause, ';'))
        .unwrap_or_default();

    log::trace!(
        "tokenized '{}' into basic play '{}', modifiers {:?}, advancements {:?}",
        raw,
        basic_play,
        modifiers,
        advancements
    );

    PlayTokens {
        basic_play,
        modifiers,
        advancements,
    }
}

fn find_top_level(text: &str, separator: char) -> Option<usize> {
    let unclosed = unclosed_parens(text);
    let mut depth = 0usize;
    for (index, ch) in text.char_indices() {
        match ch {
            '(' if !unclosed.contains(&index) => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            c if c == separator && depth == 0 => return Some(index),
            _ => {}
        }
    }
    None
}

/// Byte offsets of `(` that are never closed. They do not open a group, so a
/// stray `(` cannot hide the separators after it.
fn unclosed_parens(text: &str) -> Vec<usize> {
    let mut open = Vec::new();
    for (index, ch) in text.char_indices() {
        match ch {
            '(' => open.push(index),
            ')' => {
                open.pop();
            }
            _ => {}
        }
    }
    open
}

fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut rest = text;
    while let Some(index) = find_top_level(rest, separator) {
        pieces.push(&rest[..index]);
        rest = &rest[index + separator.len_utf8()..];
    }
    pieces.push(rest);
    pieces
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_all_three_parts() {
        let tokens = tokenize("S9/L9S.2-H;1-3");
        assert_eq!(tokens.basic_play, "S9");
        assert_eq!(tokens.modifiers, vec!["L9S"]);
        assert_eq!(tokens.advancements, vec!["2-H", "1-3"]);
    }

    #[test]
    fn missing_advancement_clause_is_empty() {
        let tokens = tokenize("K");
        assert_eq!(tokens.basic_play, "K");
        assert!(tokens.modifiers.is_empty());
        assert!(tokens.advancements.is_empty());
    }

    #[test]
    fn stolen_base_semicolon_stays_in_basic_play() {
        let tokens = tokenize("SB2;SB3");
        assert_eq!(tokens.basic_play, "SB2;SB3");
        assert!(tokens.advancements.is_empty());
    }

    #[test]
    fn modifiers_keep_source_order() {
        let tokens = tokenize("64(1)3/GDP/G6");
        assert_eq!(tokens.basic_play, "64(1)3");
        assert_eq!(tokens.modifiers, vec!["GDP", "G6"]);
    }

    #[test]
    fn slash_inside_parentheses_does_not_split() {
        let tokens = tokenize("PO1(E1/TH).1-2");
        assert_eq!(tokens.basic_play, "PO1(E1/TH)");
        assert!(tokens.modifiers.is_empty());
        assert_eq!(tokens.advancements, vec!["1-2"]);

        let tokens = tokenize("D7/L7LD.2-H(E5/TH);B-3");
        assert_eq!(tokens.advancements, vec!["2-H(E5/TH)", "B-3"]);
    }

    #[test]
    fn unclosed_parenthesis_does_not_swallow_separators() {
        let tokens = tokenize("S8(.1-2;2-3");
        assert_eq!(tokens.basic_play, "S8(");
        assert!(tokens.modifiers.is_empty());
        assert_eq!(tokens.advancements, vec!["1-2", "2-3"]);

        let tokens = tokenize("S8/G(.1-2");
        assert_eq!(tokens.basic_play, "S8");
        assert_eq!(tokens.modifiers, vec!["G("]);
        assert_eq!(tokens.advancements, vec!["1-2"]);
    }

    #[test]
    fn closed_group_after_stray_parenthesis_still_protects() {
        let tokens = tokenize("S8(.2-H(E5/TH);1-3");
        assert_eq!(tokens.basic_play, "S8(");
        assert_eq!(tokens.advancements, vec!["2-H(E5/TH)", "1-3"]);
    }

    #[test]
    fn empty_input_yields_empty_basic_play() {
        let tokens = tokenize("");
        assert_eq!(tokens.basic_play, "");
        assert!(tokens.modifiers.is_empty());
        assert!(tokens.advancements.is_empty());
    }

    #[test]
    fn empty_pieces_are_kept() {
        let tokens = tokenize("S8//.");
        assert_eq!(tokens.modifiers, vec!["", ""]);
        assert_eq!(tokens.advancements, vec![""]);
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let tokens = tokenize(" K ");
        assert_eq!(tokens.basic_play, " K ");
    }
}
