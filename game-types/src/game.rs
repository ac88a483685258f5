use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::log::LogEntry;
use crate::{GameId, PlayerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Team {
    Blue,
    Red,
}

impl Team {
    /// The opposing team.
    pub fn other(self) -> Team {
        match self {
            Team::Blue => Team::Red,
            Team::Red => Team::Blue,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Spymaster,
    Operative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TileColor {
    Blue,
    Red,
    Neutral,
    Black,
}

impl From<Team> for TileColor {
    fn from(team: Team) -> Self {
        match team {
            Team::Blue => TileColor::Blue,
            Team::Red => TileColor::Red,
        }
    }
}

impl TileColor {
    /// The team that owns tiles of this color, if any.
    pub fn team(self) -> Option<Team> {
        match self {
            TileColor::Blue => Some(Team::Blue),
            TileColor::Red => Some(Team::Red),
            TileColor::Neutral | TileColor::Black => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GameStatus {
    Waiting,   // Lobby open, no seats picked yet
    Selecting, // At least one player has picked a seat
    Playing,   // Board live, turns in progress
    Finished,  // Won or ended by the admin; immutable from here
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GamePhase {
    GivingClue,
    Guessing,
}

/// One of the 25 board cells. `color` is only shown to spymasters until
/// `revealed` flips; `tentative_by` is ephemeral coordination state and may be
/// cleared unilaterally when the tile is revealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Tile {
    pub id: u8,
    pub word: String,
    pub color: TileColor,
    pub revealed: bool,
    pub revealed_by: Option<Team>,
    pub tentative_by: Vec<PlayerId>,
    pub image_slot: u8,
}

/// A spymaster's clue. Immutable once given; count 0 means "any number".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Clue {
    pub word: String,
    pub count: u8,
    pub given_by: Team,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Game {
    pub id: GameId,
    pub code: String,
    pub status: GameStatus,
    pub current_turn: Team,
    pub current_phase: GamePhase,
    pub current_clue: Option<Clue>,
    pub guesses_remaining: u8,
    pub tiles: Vec<Tile>,
    pub starting_team: Team,
    pub winner: Option<Team>,
    pub admin_player_id: Option<PlayerId>,
    pub blue_score: u8,
    pub red_score: u8,
    pub created_at: String, // ISO 8601 string
    pub enable_meanings: bool,
    pub max_meanings_per_player: u32,
    pub log: Vec<LogEntry>,
}

impl Game {
    pub fn tile(&self, tile_id: u8) -> Option<&Tile> {
        self.tiles.iter().find(|t| t.id == tile_id)
    }
}

/// Per-game options chosen by the admin at creation time.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameOptions {
    pub enable_meanings: bool,
    pub max_meanings_per_player: u32,
}
