//! Storage module for saving and loading decoded games
//!
//! Games are written as pretty-printed JSON, either as one document holding a
//! whole event file or as one file per game.

use crate::types::game::Game;
use anyhow::Context;
use std::path::{Path, PathBuf};

/// Save games to bytes using JSON serialization
pub fn save(games: &[Game]) -> anyhow::Result<Vec<u8>> {
    let json = serde_json::to_string_pretty(games)?;
    Ok(json.into_bytes())
}

/// Load games from bytes using JSON deserialization
pub fn load(bytes: &[u8]) -> anyhow::Result<Vec<Game>> {
    let json = std::str::from_utf8(bytes)?;
    let games = serde_json::from_str(json)?;
    Ok(games)
}

/// Write one game to `<dir>/<game id>.json` and return the path
pub fn write_game(dir: &Path, game: &Game) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory {}", dir.display()))?;

    let path = dir.join(format!("{}.json", game.id.raw));
    let json = serde_json::to_string_pretty(game)?;
    std::fs::write(&path, json)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    log::debug!("wrote game {} to {}", game.id.raw, path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::Decoder;
    use crate::eventfile::read_games;

    const GAME: &str = "id,NYN198604140
info,usedh,false
play,1,0,bondb001,12,CBFX,8/F8
play,1,1,dyksl001,??,,S9/L9S.1-2
play,2,0,bondb001,00,X,ZZ9
";

    fn games() -> Vec<Game> {
        read_games(GAME, &Decoder::standard()).games
    }

    #[test]
    fn save_then_load_restores_games() {
        let original = games();

        let bytes = save(&original).unwrap();
        let restored = load(&bytes).unwrap();

        assert_eq!(original, restored);
        assert_eq!(restored[0].plays.len(), 3);
        assert_eq!(restored[0].plays[2].event.raw_source, "ZZ9");
    }

    #[test]
    fn save_empty_list() {
        let bytes = save(&[]).unwrap();
        let restored = load(&bytes).unwrap();
        assert!(restored.is_empty());
    }

    #[test]
    fn load_invalid_data_returns_error() {
        let result = load(b"invalid json data");
        assert!(result.is_err());
    }

    #[test]
    fn write_game_uses_game_id_as_file_name() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("games");
        let game = &games()[0];

        let path = write_game(&out, game).unwrap();
        assert_eq!(path, out.join("NYN198604140.json"));

        let written = std::fs::read_to_string(&path).unwrap();
        let restored: Game = serde_json::from_str(&written).unwrap();
        assert_eq!(&restored, game);
    }
}
