use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::game::Team;

/// Why a clue was rejected. Reported synchronously; nothing is mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ClueError {
    #[error("clue cannot be empty")]
    Empty,
    #[error("clue must be a single word")]
    MultiWord,
    #[error("clue cannot be a word on the board")]
    OnBoard,
}

/// Why a game cannot start yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum StartError {
    #[error("blue team needs at least 1 player")]
    BlueTeamEmpty,
    #[error("red team needs at least 1 player")]
    RedTeamEmpty,
}

impl StartError {
    pub fn for_team(team: Team) -> Self {
        match team {
            Team::Blue => StartError::BlueTeamEmpty,
            Team::Red => StartError::RedTeamEmpty,
        }
    }
}

/// Why a join attempt was rejected. State is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum JoinError {
    #[error("game not found")]
    GameNotFound,
    #[error("game has finished")]
    GameFinished,
    #[error("game is full")]
    GameFull,
}

/// Why a seat selection was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum SeatError {
    #[error("this position is already taken")]
    PositionTaken,
}
