use async_trait::async_trait;
use dashmap::DashMap;
use game_types::{
    Game, GameDocument, GameId, GameOptions, GamePhase, GameStatus, Player, PlayerDocument,
    PlayerId, Team, Tile,
};
use tokio::sync::broadcast;
use tracing::debug;
use uuid::Uuid;

use crate::documents::{
    game_from_document, game_to_document, player_from_document, player_to_document,
};
use crate::feed::{ChangeFeed, StateChange};
use crate::join_code::{generate_code, normalize_code};
use crate::store::{GameStore, GameUpdate, PlayerUpdate, StoreError};

const FEED_CAPACITY: usize = 64;

/// In-process record store: one document per game, one per player, a change
/// feed per game. Used by tests and local play; the hosted deployment swaps
/// in an adapter over the managed database behind the same trait.
#[derive(Default)]
pub struct MemoryStore {
    games: DashMap<GameId, GameDocument>,
    players: DashMap<PlayerId, PlayerDocument>,
    feeds: DashMap<GameId, broadcast::Sender<StateChange>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn publish(&self, game_id: GameId, change: StateChange) {
        if let Some(sender) = self.feeds.get(&game_id) {
            // Nobody listening is fine; polling covers them.
            let _ = sender.send(change);
        }
    }

    fn unique_code(&self) -> String {
        loop {
            let code = generate_code();
            let taken = self.games.iter().any(|entry| entry.value().code == code);
            if !taken {
                return code;
            }
        }
    }
}

#[async_trait]
impl GameStore for MemoryStore {
    async fn create_game(
        &self,
        tiles: Vec<Tile>,
        starting_team: Team,
        options: GameOptions,
    ) -> Result<Game, StoreError> {
        let game = Game {
            id: Uuid::new_v4(),
            code: self.unique_code(),
            status: GameStatus::Waiting,
            current_turn: starting_team,
            current_phase: GamePhase::GivingClue,
            current_clue: None,
            guesses_remaining: 0,
            tiles,
            starting_team,
            winner: None,
            admin_player_id: None,
            blue_score: 0,
            red_score: 0,
            created_at: chrono::Utc::now().to_rfc3339(),
            enable_meanings: options.enable_meanings,
            max_meanings_per_player: options.max_meanings_per_player,
            log: Vec::new(),
        };

        debug!(game_id = %game.id, code = %game.code, "creating game record");
        self.games.insert(game.id, game_to_document(&game)?);
        Ok(game)
    }

    async fn read_game(&self, game_id: GameId) -> Result<Option<Game>, StoreError> {
        self.games
            .get(&game_id)
            .map(|doc| game_from_document(&doc))
            .transpose()
    }

    async fn find_game_by_code(&self, code: &str) -> Result<Option<Game>, StoreError> {
        let code = normalize_code(code);
        self.games
            .iter()
            .find(|entry| entry.value().code == code)
            .map(|entry| game_from_document(entry.value()))
            .transpose()
    }

    async fn update_game(&self, game_id: GameId, update: GameUpdate) -> Result<Game, StoreError> {
        let mut entry = self
            .games
            .get_mut(&game_id)
            .ok_or(StoreError::GameNotFound)?;

        let mut game = game_from_document(&entry)?;
        if game.status == GameStatus::Finished {
            return Err(StoreError::GameFinished);
        }

        if let Some(status) = update.status {
            game.status = status;
        }
        if let Some(turn) = update.current_turn {
            game.current_turn = turn;
        }
        if let Some(phase) = update.current_phase {
            game.current_phase = phase;
        }
        if let Some(clue) = update.current_clue {
            game.current_clue = clue;
        }
        if let Some(guesses) = update.guesses_remaining {
            game.guesses_remaining = guesses;
        }
        if let Some(tiles) = update.tiles {
            game.tiles = tiles;
        }
        if let Some(winner) = update.winner {
            game.winner = winner;
        }
        if let Some(admin) = update.admin_player_id {
            game.admin_player_id = Some(admin);
        }
        if let Some(score) = update.blue_score {
            game.blue_score = score;
        }
        if let Some(score) = update.red_score {
            game.red_score = score;
        }
        game.log.extend(update.append_log);

        *entry = game_to_document(&game)?;
        drop(entry);

        self.publish(game_id, StateChange::Game);
        Ok(game)
    }

    async fn create_player(
        &self,
        game_id: GameId,
        username: String,
        is_admin: bool,
    ) -> Result<Player, StoreError> {
        if !self.games.contains_key(&game_id) {
            return Err(StoreError::GameNotFound);
        }

        let player = Player {
            id: Uuid::new_v4(),
            game_id,
            identity_seed: Uuid::new_v4().simple().to_string(),
            username,
            team: None,
            role: None,
            is_admin,
            joined_at: chrono::Utc::now().to_rfc3339(),
            meanings_used: 0,
        };

        self.players.insert(player.id, player_to_document(&player));
        self.publish(game_id, StateChange::Players);
        Ok(player)
    }

    async fn read_player(&self, player_id: PlayerId) -> Result<Option<Player>, StoreError> {
        Ok(self
            .players
            .get(&player_id)
            .map(|doc| player_from_document(&doc)))
    }

    async fn read_players(&self, game_id: GameId) -> Result<Vec<Player>, StoreError> {
        let mut players: Vec<Player> = self
            .players
            .iter()
            .filter(|entry| entry.value().game_id == game_id)
            .map(|entry| player_from_document(entry.value()))
            .collect();
        // Stable roster ordering for every viewer.
        players.sort_by(|a, b| a.joined_at.cmp(&b.joined_at).then(a.id.cmp(&b.id)));
        Ok(players)
    }

    async fn update_player(
        &self,
        player_id: PlayerId,
        update: PlayerUpdate,
    ) -> Result<Player, StoreError> {
        let mut entry = self
            .players
            .get_mut(&player_id)
            .ok_or(StoreError::PlayerNotFound)?;

        let mut player = player_from_document(&entry);
        if let Some(team) = update.team {
            player.team = team;
        }
        if let Some(role) = update.role {
            player.role = role;
        }
        if let Some(username) = update.username {
            player.username = username;
        }
        if let Some(used) = update.meanings_used {
            player.meanings_used = used;
        }

        *entry = player_to_document(&player);
        drop(entry);

        self.publish(player.game_id, StateChange::Players);
        Ok(player)
    }

    async fn delete_player(&self, player_id: PlayerId) -> Result<(), StoreError> {
        let (_, doc) = self
            .players
            .remove(&player_id)
            .ok_or(StoreError::PlayerNotFound)?;
        self.publish(doc.game_id, StateChange::Players);
        Ok(())
    }

    fn subscribe(&self, game_id: GameId) -> ChangeFeed {
        let sender = self
            .feeds
            .entry(game_id)
            .or_insert_with(|| broadcast::channel(FEED_CAPACITY).0);
        ChangeFeed::new(sender.subscribe())
    }
}
