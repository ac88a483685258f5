use serde::{Deserialize, Serialize};

use crate::game::{GamePhase, GameStatus, Role, Team};
use crate::{GameId, PlayerId};

/// Stored shape of a game record. The record store holds structured scalars
/// plus JSON strings for the nested collections (tiles, clue, log entries),
/// matching the per-document schema of the hosted database. Conversion to and
/// from the typed [`crate::Game`] happens only at the store adapter; the rest
/// of the system never touches these strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameDocument {
    pub id: GameId,
    pub code: String,
    pub status: GameStatus,
    pub current_turn: Team,
    pub current_phase: GamePhase,
    pub current_clue: Option<String>, // JSON string of Clue
    pub guesses_remaining: u8,
    pub tiles: String, // JSON string of Vec<Tile>
    pub starting_team: Team,
    pub winner: Option<Team>,
    pub admin_player_id: Option<PlayerId>,
    pub blue_score: u8,
    pub red_score: u8,
    pub created_at: String,
    pub enable_meanings: bool,
    pub max_meanings_per_player: u32,
    pub log: Vec<String>, // one JSON string per LogEntry
}

/// Stored shape of a player record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerDocument {
    pub id: PlayerId,
    pub game_id: GameId,
    pub identity_seed: String,
    pub username: String,
    pub team: Option<Team>,
    pub role: Option<Role>,
    pub is_admin: bool,
    pub joined_at: String,
    pub meanings_used: u32,
}
