use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::game::{Role, Team};
use crate::{GameId, PlayerId};

/// One seat at the table. A player with `team: None` is still in the lobby.
/// `identity_seed` is a stable per-browser pseudonymous id used for avatar
/// derivation; it survives rejoins while `id` does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Player {
    pub id: PlayerId,
    pub game_id: GameId,
    pub identity_seed: String,
    pub username: String,
    pub team: Option<Team>,
    pub role: Option<Role>,
    pub is_admin: bool,
    pub joined_at: String, // ISO 8601 string
    pub meanings_used: u32,
}

impl Player {
    pub fn is_on(&self, team: Team) -> bool {
        self.team == Some(team)
    }
}
