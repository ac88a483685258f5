use game_types::{Clue, Game, GameDocument, LogEntry, Player, PlayerDocument, Tile};

use crate::store::StoreError;

/// Serialize/deserialize boundary between the typed model and the stored
/// record shape. The record store keeps nested collections (tiles, the
/// current clue, log entries) as JSON strings inside otherwise-flat
/// documents; this module is the only place those strings exist.

pub fn game_to_document(game: &Game) -> Result<GameDocument, StoreError> {
    Ok(GameDocument {
        id: game.id,
        code: game.code.clone(),
        status: game.status,
        current_turn: game.current_turn,
        current_phase: game.current_phase,
        current_clue: game
            .current_clue
            .as_ref()
            .map(|clue| serde_json::to_string(clue).map_err(corrupt))
            .transpose()?,
        guesses_remaining: game.guesses_remaining,
        tiles: serde_json::to_string(&game.tiles).map_err(corrupt)?,
        starting_team: game.starting_team,
        winner: game.winner,
        admin_player_id: game.admin_player_id,
        blue_score: game.blue_score,
        red_score: game.red_score,
        created_at: game.created_at.clone(),
        enable_meanings: game.enable_meanings,
        max_meanings_per_player: game.max_meanings_per_player,
        log: game
            .log
            .iter()
            .map(|entry| serde_json::to_string(entry).map_err(corrupt))
            .collect::<Result<_, _>>()?,
    })
}

pub fn game_from_document(doc: &GameDocument) -> Result<Game, StoreError> {
    let tiles: Vec<Tile> = serde_json::from_str(&doc.tiles).map_err(corrupt)?;
    let current_clue: Option<Clue> = doc
        .current_clue
        .as_deref()
        .map(|raw| serde_json::from_str(raw).map_err(corrupt))
        .transpose()?;
    let log: Vec<LogEntry> = doc
        .log
        .iter()
        .map(|raw| serde_json::from_str(raw).map_err(corrupt))
        .collect::<Result<_, _>>()?;

    Ok(Game {
        id: doc.id,
        code: doc.code.clone(),
        status: doc.status,
        current_turn: doc.current_turn,
        current_phase: doc.current_phase,
        current_clue,
        guesses_remaining: doc.guesses_remaining,
        tiles,
        starting_team: doc.starting_team,
        winner: doc.winner,
        admin_player_id: doc.admin_player_id,
        blue_score: doc.blue_score,
        red_score: doc.red_score,
        created_at: doc.created_at.clone(),
        enable_meanings: doc.enable_meanings,
        max_meanings_per_player: doc.max_meanings_per_player,
        log,
    })
}

pub fn player_to_document(player: &Player) -> PlayerDocument {
    PlayerDocument {
        id: player.id,
        game_id: player.game_id,
        identity_seed: player.identity_seed.clone(),
        username: player.username.clone(),
        team: player.team,
        role: player.role,
        is_admin: player.is_admin,
        joined_at: player.joined_at.clone(),
        meanings_used: player.meanings_used,
    }
}

pub fn player_from_document(doc: &PlayerDocument) -> Player {
    Player {
        id: doc.id,
        game_id: doc.game_id,
        identity_seed: doc.identity_seed.clone(),
        username: doc.username.clone(),
        team: doc.team,
        role: doc.role,
        is_admin: doc.is_admin,
        joined_at: doc.joined_at.clone(),
        meanings_used: doc.meanings_used,
    }
}

fn corrupt(err: serde_json::Error) -> StoreError {
    StoreError::Corrupt(err.to_string())
}
