//! Command-line front end for the decoder
//!
//! `decode` reads whole event files, `play` decodes a single play string.

pub mod decode;
pub mod play;

use crate::decoder::Decoder;
use crate::reference::ReferenceTables;
use anyhow::Context;
use std::path::Path;

/// Build a decoder from the standard tables or from a JSON tables file
pub fn load_decoder(tables: Option<&Path>) -> anyhow::Result<Decoder> {
    match tables {
        None => Ok(Decoder::standard()),
        Some(path) => {
            let tables = ReferenceTables::from_path(path)
                .with_context(|| format!("Failed to load reference tables from {}", path.display()))?;
            let decoder = Decoder::new(tables)?;
            log::info!("using reference tables from {}", path.display());
            Ok(decoder)
        }
    }
}
