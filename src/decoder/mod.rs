//! Play notation decoder
//!
//! Turns one raw play string into a [`PlayEvent`]. Decoding is total: every
//! input produces an event, and anything the grammar or vocabulary cannot
//! explain is kept inside the event as an `Unrecognized`, `Unknown` or
//! `Malformed` marker instead of aborting.
//!
//! ```
//! use retroplay::decoder::Decoder;
//! use retroplay::types::BasicPlay;
//!
//! let decoder = Decoder::standard();
//! let event = decoder.decode("S9/L9S.2-H;1-3");
//! assert!(matches!(event.basic_play, BasicPlay::Single { .. }));
//! assert_eq!(event.advancements.len(), 2);
//! ```

pub mod advancement;
pub mod grammar;
pub mod modifiers;
pub mod tokenizer;


use crate::error::ReferenceTableError;
use crate::reference::ReferenceTables;
use crate::types::play::PlayEvent;
use advancement::AdvancementParser;
use grammar::GrammarRules;
use std::sync::Arc;

/// Decodes play strings against shared, read-only tables.
///
/// Cloning is cheap; clones share the same tables and grammar and may be
/// moved into parallel workers.
#[derive(Debug, Clone)]
pub struct Decoder {
    tables: Arc<ReferenceTables>,
    grammar: Arc<GrammarRules>,
    advancement: Arc<AdvancementParser>,
}

impl Decoder {
    /// Build a decoder with the standard grammar, validating the tables first
    pub fn new(tables: ReferenceTables) -> Result<Self, ReferenceTableError> {
        Self::with_grammar(Arc::new(tables), GrammarRules::standard())
    }

    pub fn with_grammar(
        tables: Arc<ReferenceTables>,
        grammar: GrammarRules,
    ) -> Result<Self, ReferenceTableError> {
        tables.validate()?;
        Ok(Self {
            tables,
            grammar: Arc::new(grammar),
            advancement: Arc::new(AdvancementParser::new()),
        })
    }

    /// Decoder over the built-in tables and grammar
    pub fn standard() -> Self {
        Self {
            tables: Arc::new(ReferenceTables::standard()),
            grammar: Arc::new(GrammarRules::standard()),
            advancement: Arc::new(AdvancementParser::new()),
        }
    }

    /// Tables this decoder resolves fielders and modifiers against
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    pub fn grammar(&self) -> &GrammarRules {
        &self.grammar
    }

    /// Decode one play string. Never fails; gaps are kept as markers on the
    /// returned event and `raw_source` holds `raw` unchanged.
    pub fn decode(&self, raw: &str) -> PlayEvent {
        let tokens = tokenizer::tokenize(raw);

        let (basic_play, accompanying) = self.grammar.classify_event(tokens.basic_play, &self.tables);
        let modifiers = modifiers::resolve_all(&tokens.modifiers, &self.tables);
        let advancements = self.advancement.parse_all(&tokens.advancements);

        PlayEvent {
            raw_source: raw.to_string(),
            basic_play,
            accompanying,
            modifiers,
            advancements,
        }
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::standard()
    }
}
