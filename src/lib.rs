//! # retroplay
//!
//! A Rust library that decodes Retrosheet play notation into structured play
//! events, and reads whole event files into games.
//!
//! Decoding never fails: plays, modifiers or runner clauses the decoder cannot
//! explain are kept inside the resulting [`PlayEvent`] as markers, so one odd
//! play never stops a season from being processed.
//!
//! ## Quick Start
//!
//! ```rust
//! use retroplay::types::{Base, BasicPlay};
//!
//! let event = retroplay::decode("64(1)3/GDP");
//! match &event.basic_play {
//!     BasicPlay::DoublePlay { fielders, put_out_base } => {
//!         assert_eq!(fielders.len(), 3);
//!         assert_eq!(*put_out_base, Some(Base::First));
//!     }
//!     other => panic!("Expected double play, got {other:?}"),
//! }
//! assert!(event.is_fully_decoded());
//! ```
//!
//! ## Event Files
//!
//! ```rust
//! use retroplay::{Decoder, eventfile::read_games};
//!
//! let text = "id,NYN198604140\ninfo,usedh,false\nplay,1,0,bondb001,12,CBFX,8/F8\n";
//! let file = read_games(text, &Decoder::standard());
//! assert_eq!(file.games.len(), 1);
//! assert_eq!(file.games[0].plays[0].event.raw_source, "8/F8");
//! ```

pub mod cli;
pub mod decoder;
pub mod error;
pub mod eventfile;
pub mod reference;
pub mod render;
pub mod report;
pub mod source;
pub mod storage;
pub mod types;

pub use decoder::Decoder;
pub use error::{DecodeIssue, EventFileError, ReferenceTableError};
pub use eventfile::{EventFile, read_games};
pub use reference::ReferenceTables;
pub use report::{DecodeReport, ReportConfig};
pub use storage::{load, save};
pub use types::{BasicPlay, Game, PlayEvent};

/// Decode one play string with the built-in tables
pub fn decode(raw: &str) -> PlayEvent {
    Decoder::standard().decode(raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Advancement, Base};

    #[test]
    fn decode_strikeout() {
        let event = decode("K");
        assert_eq!(event.basic_play, BasicPlay::StrikeOut);
        assert!(event.modifiers.is_empty());
        assert!(event.advancements.is_empty());
    }

    #[test]
    fn decode_single_with_advancements() {
        let event = decode("S9/L9S.2-H;1-3");
        match &event.basic_play {
            BasicPlay::Single { fielder } => assert_eq!(fielder.map(|f| f.value()), Some(9)),
            other => panic!("Expected Single, got {other:?}"),
        }
        assert_eq!(event.modifiers.len(), 1);
        assert!(event.modifiers[0].is_known());

        let runners: Vec<_> = event.runners().collect();
        assert_eq!(runners.len(), 2);
        assert_eq!(runners[0].from_base, Base::Second);
        assert_eq!(runners[0].to_base, Some(Base::Home));
        assert_eq!(runners[1].to_base, Some(Base::Third));
    }

    #[test]
    fn decode_malformed_clause_keeps_siblings() {
        let event = decode("S8.1~H;2-3");
        assert_eq!(event.advancements.len(), 2);
        match &event.advancements[0] {
            Advancement::Malformed { token } => assert_eq!(token, "1~H"),
            other => panic!("Expected Malformed, got {other:?}"),
        }
        assert!(event.advancements[1].runner().is_some());
    }
}
