use std::collections::HashMap;
use std::time::{Duration, Instant};

use game_types::{Game, PlayerId};

/// Short-lived local layer over the authoritative snapshot.
///
/// When a player toggles a tentative mark we write it to the store in the
/// background, but a refresh can arrive carrying the pre-write state and wipe
/// the mark off the screen mid-click. The overlay records the tile lists this
/// client just wrote and, until its deadline passes, those tiles keep the
/// local value when a snapshot is merged in. The overlay owns only the tiles
/// it touched; everything else always comes from the snapshot.
pub struct TentativeOverlay {
    window: Duration,
    marks: HashMap<u8, Vec<PlayerId>>,
    deadline: Option<Instant>,
}

impl TentativeOverlay {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            marks: HashMap::new(),
            deadline: None,
        }
    }

    /// Record the tentative list this client just wrote for one tile and arm
    /// the suppression window.
    pub fn record(&mut self, tile_id: u8, tentative_by: Vec<PlayerId>) {
        self.marks.insert(tile_id, tentative_by);
        self.deadline = Some(Instant::now() + self.window);
    }

    /// Merge an incoming snapshot: overlay wins for the tiles it owns while
    /// the window is open, the snapshot wins for everything else and after
    /// expiry.
    pub fn merge_into(&mut self, game: &mut Game) {
        self.merge_into_at(game, Instant::now());
    }

    fn merge_into_at(&mut self, game: &mut Game, now: Instant) {
        match self.deadline {
            Some(deadline) if now < deadline => {
                for tile in &mut game.tiles {
                    // Reveals always win over tentative coordination marks.
                    if tile.revealed {
                        continue;
                    }
                    if let Some(marks) = self.marks.get(&tile.id) {
                        tile.tentative_by = marks.clone();
                    }
                }
            }
            Some(_) => {
                self.marks.clear();
                self.deadline = None;
            }
            None => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::{GamePhase, GameStatus, Team, Tile, TileColor};
    use uuid::Uuid;

    fn game_with_tiles() -> Game {
        Game {
            id: Uuid::new_v4(),
            code: "TEST01".to_string(),
            status: GameStatus::Playing,
            current_turn: Team::Blue,
            current_phase: GamePhase::Guessing,
            current_clue: None,
            guesses_remaining: 1,
            tiles: (0..3)
                .map(|id| Tile {
                    id,
                    word: format!("WORD{}", id),
                    color: TileColor::Neutral,
                    revealed: false,
                    revealed_by: None,
                    tentative_by: Vec::new(),
                    image_slot: 20,
                })
                .collect(),
            starting_team: Team::Blue,
            winner: None,
            admin_player_id: None,
            blue_score: 0,
            red_score: 0,
            created_at: "2026-01-01T00:00:00Z".to_string(),
            enable_meanings: false,
            max_meanings_per_player: 0,
            log: Vec::new(),
        }
    }

    #[test]
    fn test_overlay_wins_inside_window() {
        let me = Uuid::new_v4();
        let mut overlay = TentativeOverlay::new(Duration::from_millis(500));
        overlay.record(1, vec![me]);

        let mut snapshot = game_with_tiles();
        overlay.merge_into(&mut snapshot);

        assert_eq!(snapshot.tiles[1].tentative_by, vec![me]);
        assert!(snapshot.tiles[0].tentative_by.is_empty());
    }

    #[test]
    fn test_snapshot_wins_after_expiry() {
        let me = Uuid::new_v4();
        let mut overlay = TentativeOverlay::new(Duration::from_millis(500));
        overlay.record(1, vec![me]);

        let mut snapshot = game_with_tiles();
        let later = Instant::now() + Duration::from_secs(1);
        overlay.merge_into_at(&mut snapshot, later);

        assert!(snapshot.tiles[1].tentative_by.is_empty());
        // Expired overlay is dropped entirely.
        let mut second = game_with_tiles();
        overlay.merge_into(&mut second);
        assert!(second.tiles[1].tentative_by.is_empty());
    }

    #[test]
    fn test_revealed_tile_never_takes_overlay() {
        let me = Uuid::new_v4();
        let mut overlay = TentativeOverlay::new(Duration::from_millis(500));
        overlay.record(2, vec![me]);

        let mut snapshot = game_with_tiles();
        snapshot.tiles[2].revealed = true;
        overlay.merge_into(&mut snapshot);

        assert!(snapshot.tiles[2].tentative_by.is_empty());
    }

    #[test]
    fn test_untouched_overlay_is_inert() {
        let mut overlay = TentativeOverlay::new(Duration::from_millis(500));
        let mut snapshot = game_with_tiles();
        let other = Uuid::new_v4();
        snapshot.tiles[0].tentative_by = vec![other];
        overlay.merge_into(&mut snapshot);
        assert_eq!(snapshot.tiles[0].tentative_by, vec![other]);
    }
}
