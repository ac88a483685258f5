use dashmap::DashMap;
use game_types::{GameId, PlayerId};

/// Local persistence of "which player am I" per game — an identity cache,
/// never a cache of game truth. The browser build keys this off
/// localStorage; tests and local play use the in-memory variant.
pub trait SessionStore: Send + Sync {
    fn save(&self, game_id: GameId, player_id: PlayerId);
    fn load(&self, game_id: GameId) -> Option<PlayerId>;
    fn clear(&self, game_id: GameId);
}

#[derive(Default)]
pub struct MemorySessionStore {
    entries: DashMap<GameId, PlayerId>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn save(&self, game_id: GameId, player_id: PlayerId) {
        self.entries.insert(game_id, player_id);
    }

    fn load(&self, game_id: GameId) -> Option<PlayerId> {
        self.entries.get(&game_id).map(|entry| *entry)
    }

    fn clear(&self, game_id: GameId) {
        self.entries.remove(&game_id);
    }
}
