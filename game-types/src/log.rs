use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::game::{Team, TileColor};

/// Append-only history entry. Written alongside every mutation, shown to
/// players as a readable feed, never read back into game logic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogEntry {
    pub id: uuid::Uuid,
    pub timestamp: String, // ISO 8601 string
    pub team: Team,
    pub player_name: String,
    pub player_seed: String,
    pub message: String,
    pub detail: LogDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum LogDetail {
    Clue {
        word: String,
        count: u8,
    },
    Guess {
        tile_word: String,
        tile_color: TileColor,
        correct: bool,
    },
    Pass,
}
