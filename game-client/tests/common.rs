use std::sync::Arc;

use async_trait::async_trait;

use game_backend::{GameStore, MemoryStore};
use game_client::{
    Config, DefinitionLookup, GameSession, LookupError, MemorySessionStore, OfflineSupplier,
};
use game_types::{GameOptions, Role, Team};

/// Fixed-answer lookup so meaning tests never touch the network.
pub struct CannedLookup;

#[async_trait]
impl DefinitionLookup for CannedLookup {
    async fn lookup(&self, word: &str) -> Result<String, LookupError> {
        Ok(format!("a thing called {}", word.to_lowercase()))
    }
}

/// A lookup that always fails, for quota-refund behavior.
pub struct BrokenLookup;

#[async_trait]
impl DefinitionLookup for BrokenLookup {
    async fn lookup(&self, _word: &str) -> Result<String, LookupError> {
        Err(LookupError::NotFound)
    }
}

pub fn test_config(max_players: usize) -> Config {
    Config {
        max_players_per_game: max_players,
        poll_interval_ms: 5000,
        tentative_suppression_ms: 500,
        word_api_base_url: "http://unused.invalid".to_string(),
        dictionary_api_base_url: "http://unused.invalid".to_string(),
        default_max_meanings: 3,
    }
}

pub fn session(store: &Arc<MemoryStore>, config: &Config) -> GameSession {
    let store: Arc<dyn GameStore> = store.clone();
    GameSession::new(
        store,
        Arc::new(MemorySessionStore::new()),
        Arc::new(OfflineSupplier),
        Arc::new(CannedLookup),
        config.clone(),
    )
}

pub struct Table {
    pub blue_spymaster: GameSession,
    pub blue_operative: GameSession,
    pub red_spymaster: GameSession,
    pub red_operative: GameSession,
    pub code: String,
}

/// Create a lobby with four seated players, ready to start.
pub async fn seated_table(store: &Arc<MemoryStore>, options: GameOptions) -> Table {
    let config = test_config(8);
    let mut blue_spymaster = session(store, &config);
    let mut blue_operative = session(store, &config);
    let mut red_spymaster = session(store, &config);
    let mut red_operative = session(store, &config);

    let (_, code) = blue_spymaster
        .create_new_game("ada", &[], options)
        .await
        .unwrap();
    blue_operative.join_game(&code, "grace").await.unwrap();
    red_spymaster.join_game(&code, "alan").await.unwrap();
    red_operative.join_game(&code, "edsger").await.unwrap();

    blue_spymaster
        .select_team_and_role(Team::Blue, Role::Spymaster)
        .await
        .unwrap();
    blue_operative
        .select_team_and_role(Team::Blue, Role::Operative)
        .await
        .unwrap();
    red_spymaster
        .select_team_and_role(Team::Red, Role::Spymaster)
        .await
        .unwrap();
    red_operative
        .select_team_and_role(Team::Red, Role::Operative)
        .await
        .unwrap();

    Table {
        blue_spymaster,
        blue_operative,
        red_spymaster,
        red_operative,
        code,
    }
}

impl Table {
    pub async fn refresh_all(&mut self) {
        self.blue_spymaster.refresh().await;
        self.blue_operative.refresh().await;
        self.red_spymaster.refresh().await;
        self.red_operative.refresh().await;
    }

    /// The (spymaster, operative) pair for a team.
    pub fn team(&mut self, team: Team) -> (&mut GameSession, &mut GameSession) {
        match team {
            Team::Blue => (&mut self.blue_spymaster, &mut self.blue_operative),
            Team::Red => (&mut self.red_spymaster, &mut self.red_operative),
        }
    }
}

/// First unrevealed tile of the given color, in canonical order.
pub fn unrevealed_of_color(
    session: &GameSession,
    color: game_types::TileColor,
) -> u8 {
    session
        .game()
        .unwrap()
        .tiles
        .iter()
        .find(|t| t.color == color && !t.revealed)
        .map(|t| t.id)
        .unwrap()
}
