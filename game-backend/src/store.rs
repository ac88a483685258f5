use async_trait::async_trait;
use game_types::{
    Clue, Game, GameId, GameOptions, GamePhase, GameStatus, LogEntry, Player, PlayerId, Role,
    Team, Tile,
};
use thiserror::Error;

use crate::feed::ChangeFeed;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("game not found")]
    GameNotFound,
    #[error("player not found")]
    PlayerNotFound,
    #[error("game has finished and cannot be modified")]
    GameFinished,
    #[error("malformed record: {0}")]
    Corrupt(String),
}

/// Partial update of a game record. `None` means "leave the field alone";
/// the nested `Option` fields distinguish "clear" from "untouched".
#[derive(Debug, Clone, Default)]
pub struct GameUpdate {
    pub status: Option<GameStatus>,
    pub current_turn: Option<Team>,
    pub current_phase: Option<GamePhase>,
    pub current_clue: Option<Option<Clue>>,
    pub guesses_remaining: Option<u8>,
    pub tiles: Option<Vec<Tile>>,
    pub winner: Option<Option<Team>>,
    pub admin_player_id: Option<PlayerId>,
    pub blue_score: Option<u8>,
    pub red_score: Option<u8>,
    pub append_log: Vec<LogEntry>,
}

/// Partial update of a player record.
#[derive(Debug, Clone, Default)]
pub struct PlayerUpdate {
    pub team: Option<Option<Team>>,
    pub role: Option<Option<Role>>,
    pub username: Option<String>,
    pub meanings_used: Option<u32>,
}

/// The authoritative record store for games and players.
///
/// Every operation is atomic for a single document and last-writer-wins;
/// nothing here is transactional across documents. That is all the game
/// needs: concurrent guesses racing on one tile are serialized by whichever
/// update lands first, and the loser resolves to a no-op on its next read.
#[async_trait]
pub trait GameStore: Send + Sync {
    async fn create_game(
        &self,
        tiles: Vec<Tile>,
        starting_team: Team,
        options: GameOptions,
    ) -> Result<Game, StoreError>;

    async fn read_game(&self, game_id: GameId) -> Result<Option<Game>, StoreError>;

    /// Case-insensitive lookup by join code.
    async fn find_game_by_code(&self, code: &str) -> Result<Option<Game>, StoreError>;

    /// Rejects any update once the game is `Finished` (the write that sets
    /// `Finished` is itself the last accepted one).
    async fn update_game(&self, game_id: GameId, update: GameUpdate) -> Result<Game, StoreError>;

    async fn create_player(
        &self,
        game_id: GameId,
        username: String,
        is_admin: bool,
    ) -> Result<Player, StoreError>;

    async fn read_player(&self, player_id: PlayerId) -> Result<Option<Player>, StoreError>;

    async fn read_players(&self, game_id: GameId) -> Result<Vec<Player>, StoreError>;

    async fn update_player(
        &self,
        player_id: PlayerId,
        update: PlayerUpdate,
    ) -> Result<Player, StoreError>;

    async fn delete_player(&self, player_id: PlayerId) -> Result<(), StoreError>;

    /// Change notifications for one game and its players. Best-effort,
    /// at-least-once; consumers react by refetching, never by applying the
    /// event itself.
    fn subscribe(&self, game_id: GameId) -> ChangeFeed;
}
