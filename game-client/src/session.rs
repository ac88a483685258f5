use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;

use game_backend::{ChangeFeed, GameStore, GameUpdate, PlayerUpdate, StoreError};
use game_core::{
    apply_clue, can_give_clue, can_guess, can_start_game, generate_board, pass_turn,
    resolve_guess, shuffle_for_viewer, validate_clue, BOARD_SIZE,
};
use game_types::{
    ClueError, Game, GameId, GameOptions, GamePhase, GameStatus, JoinError, LogDetail, LogEntry,
    Player, Role, SeatError, StartError, Team, Tile,
};

use crate::config::Config;
use crate::dictionary::{DefinitionLookup, LookupError};
use crate::identity::SessionStore;
use crate::overlay::TentativeOverlay;
use crate::supplier::WordSupplier;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no game loaded")]
    NoGame,
    #[error("game not found")]
    GameNotFound,
    #[error("tile not found")]
    TileNotFound,
    #[error("not your turn")]
    NotYourTurn,
    #[error("only the admin can end the game")]
    NotAdmin,
    #[error("game has already started")]
    AlreadyStarted,
    #[error("cannot start: {0}")]
    NotReady(#[from] StartError),
    #[error(transparent)]
    InvalidClue(#[from] ClueError),
    #[error(transparent)]
    Join(#[from] JoinError),
    #[error(transparent)]
    Seat(#[from] SeatError),
    #[error("meaning lookups are not enabled for this game")]
    MeaningsDisabled,
    #[error("all {0} meaning lookups used")]
    MeaningQuota(u32),
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One client's view of a game: the authoritative snapshot, the local
/// player's identity, and the short-lived tentative overlay.
///
/// All authoritative mutation happens at the record store; this type computes
/// state fragments with the pure game-core functions, writes them, and
/// replaces its snapshot with whatever comes back. Change-feed pushes and
/// interval polling both funnel into [`GameSession::refresh`], so the session
/// never cares which transport fired.
pub struct GameSession {
    store: Arc<dyn GameStore>,
    sessions: Arc<dyn SessionStore>,
    words: Arc<dyn WordSupplier>,
    definitions: Arc<dyn DefinitionLookup>,
    config: Config,
    game: Option<Game>,
    players: Vec<Player>,
    current_player: Option<Player>,
    overlay: TentativeOverlay,
}

impl GameSession {
    pub fn new(
        store: Arc<dyn GameStore>,
        sessions: Arc<dyn SessionStore>,
        words: Arc<dyn WordSupplier>,
        definitions: Arc<dyn DefinitionLookup>,
        config: Config,
    ) -> Self {
        let overlay = TentativeOverlay::new(Duration::from_millis(config.tentative_suppression_ms));
        Self {
            store,
            sessions,
            words,
            definitions,
            config,
            game: None,
            players: Vec::new(),
            current_player: None,
            overlay,
        }
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn current_player(&self) -> Option<&Player> {
        self.current_player.as_ref()
    }

    /// The board in the order this viewer should see it: canonical for
    /// spymasters, the game-seeded stable permutation for everyone else.
    pub fn visible_board(&self) -> Result<Vec<Tile>, SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let is_spymaster = self
            .current_player
            .as_ref()
            .is_some_and(|p| p.role == Some(Role::Spymaster));
        if is_spymaster {
            Ok(game.tiles.clone())
        } else {
            Ok(shuffle_for_viewer(&game.tiles, &game.id.to_string()))
        }
    }

    /// Create a game, its board, and the admin player in one go.
    pub async fn create_new_game(
        &mut self,
        username: &str,
        custom_words: &[String],
        options: GameOptions,
    ) -> Result<(GameId, String), SessionError> {
        let mut options = options;
        if options.enable_meanings && options.max_meanings_per_player == 0 {
            options.max_meanings_per_player = self.config.default_max_meanings;
        }
        let starting_team = if rand::random() { Team::Blue } else { Team::Red };

        let supplied = match self.words.supply_words(BOARD_SIZE).await {
            Ok(words) => words,
            Err(err) => {
                warn!(error = %err, "word supplier unreachable, using local pool");
                Vec::new()
            }
        };
        let tiles = generate_board(starting_team, custom_words, supplied);

        let game = self
            .store
            .create_game(tiles, starting_team, options)
            .await?;
        let player = self
            .store
            .create_player(game.id, username.to_string(), true)
            .await?;
        let game = self
            .store
            .update_game(
                game.id,
                GameUpdate {
                    admin_player_id: Some(player.id),
                    ..Default::default()
                },
            )
            .await?;

        self.sessions.save(game.id, player.id);
        info!(game_id = %game.id, code = %game.code, "created game");

        let result = (game.id, game.code.clone());
        self.players = vec![player.clone()];
        self.current_player = Some(player);
        self.game = Some(game);
        Ok(result)
    }

    /// Join by code. Finished games and full lobbies reject the attempt with
    /// state untouched.
    pub async fn join_game(
        &mut self,
        code: &str,
        username: &str,
    ) -> Result<GameId, SessionError> {
        let game = self
            .store
            .find_game_by_code(code)
            .await?
            .ok_or(JoinError::GameNotFound)?;

        if game.status == GameStatus::Finished {
            return Err(JoinError::GameFinished.into());
        }
        let roster = self.store.read_players(game.id).await?;
        if roster.len() >= self.config.max_players_per_game {
            return Err(JoinError::GameFull.into());
        }

        let player = self
            .store
            .create_player(game.id, username.to_string(), false)
            .await?;
        self.sessions.save(game.id, player.id);
        info!(game_id = %game.id, username, "joined game");

        let game_id = game.id;
        self.players = {
            let mut all = roster;
            all.push(player.clone());
            all
        };
        self.current_player = Some(player);
        self.game = Some(game);
        Ok(game_id)
    }

    /// Load a game by id and recover the local player from the session
    /// store, dropping a stale token if the seat no longer exists.
    pub async fn load_game(&mut self, game_id: GameId) -> Result<(), SessionError> {
        let game = self
            .store
            .read_game(game_id)
            .await?
            .ok_or(SessionError::GameNotFound)?;
        let players = self.store.read_players(game_id).await?;

        let current_player = match self.sessions.load(game_id) {
            Some(saved_id) => {
                let found = players.iter().find(|p| p.id == saved_id).cloned();
                if found.is_none() {
                    self.sessions.clear(game_id);
                }
                found
            }
            None => None,
        };

        self.game = Some(game);
        self.players = players;
        self.current_player = current_player;
        Ok(())
    }

    /// Replace the local snapshot with the latest authoritative state. This
    /// is the single reaction to both poll ticks and change-feed pushes;
    /// failures are swallowed because the next tick will try again.
    pub async fn refresh(&mut self) {
        let Some(game_id) = self.game.as_ref().map(|g| g.id) else {
            return;
        };

        match self.store.read_game(game_id).await {
            Ok(Some(mut game)) => {
                self.overlay.merge_into(&mut game);
                self.game = Some(game);
            }
            Ok(None) => return,
            Err(err) => {
                debug!(error = %err, "background refresh failed");
                return;
            }
        }

        if let Ok(players) = self.store.read_players(game_id).await {
            if let Some(me) = self.current_player.as_ref() {
                self.current_player = players.iter().find(|p| p.id == me.id).cloned();
            }
            self.players = players;
        }
    }

    /// Change notifications for the loaded game.
    pub fn subscribe(&self) -> Result<ChangeFeed, SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        Ok(self.store.subscribe(game.id))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.config.poll_interval_ms)
    }

    /// Pick a seat. At most one player per (team, role); the roster is
    /// refetched first so the check runs against the latest state.
    pub async fn select_team_and_role(
        &mut self,
        team: Team,
        role: Role,
    ) -> Result<(), SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let me = self.current_player.as_ref().ok_or(SessionError::NoGame)?;
        let game_id = game.id;
        let my_id = me.id;
        let game_status = game.status;

        let latest = self.store.read_players(game_id).await?;
        let taken = latest
            .iter()
            .any(|p| p.id != my_id && p.team == Some(team) && p.role == Some(role));
        if taken {
            self.players = latest;
            return Err(SeatError::PositionTaken.into());
        }

        let updated = self
            .store
            .update_player(
                my_id,
                PlayerUpdate {
                    team: Some(Some(team)),
                    role: Some(Some(role)),
                    ..Default::default()
                },
            )
            .await?;

        if game_status == GameStatus::Waiting {
            let game = self
                .store
                .update_game(
                    game_id,
                    GameUpdate {
                        status: Some(GameStatus::Selecting),
                        ..Default::default()
                    },
                )
                .await?;
            self.game = Some(game);
        }

        self.players = self.store.read_players(game_id).await?;
        self.current_player = Some(updated);
        Ok(())
    }

    /// Start play once both teams have at least one player. Only a lobby can
    /// start; re-sending the request mid-game must not reset the turn state.
    pub async fn start_game(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        if !matches!(game.status, GameStatus::Waiting | GameStatus::Selecting) {
            return Err(SessionError::AlreadyStarted);
        }
        let game_id = game.id;

        let roster = self.store.read_players(game_id).await?;
        can_start_game(&roster)?;

        let game = self
            .store
            .update_game(
                game_id,
                GameUpdate {
                    status: Some(GameStatus::Playing),
                    current_phase: Some(GamePhase::GivingClue),
                    ..Default::default()
                },
            )
            .await?;
        info!(game_id = %game_id, starting_team = ?game.starting_team, "game started");
        self.players = roster;
        self.game = Some(game);
        Ok(())
    }

    /// Validate and record a clue, opening the guessing phase with the
    /// count-plus-one budget.
    pub async fn give_clue(&mut self, word: &str, count: u8) -> Result<(), SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let me = self.current_player.as_ref().ok_or(SessionError::NoGame)?;

        if !can_give_clue(me, game) {
            return Err(SessionError::NotYourTurn);
        }
        let word = validate_clue(word, &game.tiles)?;
        let team = game.current_turn;
        let transition = apply_clue(word.clone(), count, team);

        let entry = log_entry(
            me,
            team,
            format!("gave clue \"{}\" for {}", word, count),
            LogDetail::Clue { word, count },
        );

        let game = self
            .store
            .update_game(
                game.id,
                GameUpdate {
                    current_clue: Some(Some(transition.clue)),
                    guesses_remaining: Some(transition.guesses_remaining),
                    current_phase: Some(transition.current_phase),
                    append_log: vec![entry],
                    ..Default::default()
                },
            )
            .await?;
        self.game = Some(game);
        Ok(())
    }

    /// Confirm a guess: resolve it, persist the resulting fragment, and log
    /// it. A tile that is already revealed is a silent no-op so racing
    /// guesses self-correct on the next refresh.
    pub async fn confirm_guess(&mut self, tile_id: u8) -> Result<(), SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let me = self.current_player.as_ref().ok_or(SessionError::NoGame)?;

        if !can_guess(me, game, &self.players) {
            return Err(SessionError::NotYourTurn);
        }
        let team = game.current_turn;
        let tile = game.tile(tile_id).ok_or(SessionError::TileNotFound)?;
        if tile.revealed {
            debug!(tile_id, "stale guess on a revealed tile, ignoring");
            return Ok(());
        }
        let tile_word = tile.word.clone();
        let tile_color = tile.color;

        let mut outcome = resolve_guess(game, tile_id, team);

        // The reveal invalidates everyone's tentative marks on this tile.
        if let Some(tile) = outcome.tiles.iter_mut().find(|t| t.id == tile_id) {
            tile.tentative_by.clear();
        }

        let entry = log_entry(
            me,
            team,
            format!("guessed \"{}\"", tile_word),
            LogDetail::Guess {
                tile_word,
                tile_color,
                correct: outcome.correct,
            },
        );

        let clears_clue = outcome.current_phase == GamePhase::GivingClue;
        let won = outcome.winner.is_some();
        let game = self
            .store
            .update_game(
                game.id,
                GameUpdate {
                    tiles: Some(outcome.tiles),
                    guesses_remaining: Some(outcome.guesses_remaining),
                    current_turn: Some(outcome.current_turn),
                    current_phase: Some(outcome.current_phase),
                    winner: Some(outcome.winner),
                    blue_score: Some(outcome.blue_score),
                    red_score: Some(outcome.red_score),
                    current_clue: clears_clue.then_some(None),
                    status: won.then_some(GameStatus::Finished),
                    append_log: vec![entry],
                    ..Default::default()
                },
            )
            .await?;
        if let Some(winner) = game.winner {
            info!(game_id = %game.id, winner = ?winner, "game over");
        }
        self.game = Some(game);
        Ok(())
    }

    /// Toggle this player's tentative mark on a tile. Applied to the local
    /// snapshot immediately, persisted in the background; never an error
    /// because the mark is pure coordination state.
    pub async fn toggle_tentative(&mut self, tile_id: u8) {
        let (Some(game), Some(me)) = (self.game.as_mut(), self.current_player.as_ref()) else {
            return;
        };
        if me.role != Some(Role::Operative) {
            return;
        }
        let Some(tile) = game.tiles.iter_mut().find(|t| t.id == tile_id && !t.revealed) else {
            return;
        };

        if let Some(pos) = tile.tentative_by.iter().position(|id| *id == me.id) {
            tile.tentative_by.remove(pos);
        } else {
            tile.tentative_by.push(me.id);
        }

        let marks = tile.tentative_by.clone();
        let tiles = game.tiles.clone();
        let game_id = game.id;
        self.overlay.record(tile_id, marks);

        if let Err(err) = self
            .store
            .update_game(
                game_id,
                GameUpdate {
                    tiles: Some(tiles),
                    ..Default::default()
                },
            )
            .await
        {
            // Ephemeral state: losing the write just loses the highlight.
            debug!(error = %err, "failed to persist tentative mark");
        }
    }

    /// Voluntarily end the active team's turn.
    pub async fn end_turn(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let me = self.current_player.as_ref().ok_or(SessionError::NoGame)?;

        if !can_guess(me, game, &self.players) {
            return Err(SessionError::NotYourTurn);
        }
        let team = game.current_turn;
        let pass = pass_turn(team);

        let entry = log_entry(me, team, "ended the turn".to_string(), LogDetail::Pass);

        let game = self
            .store
            .update_game(
                game.id,
                GameUpdate {
                    current_turn: Some(pass.current_turn),
                    current_phase: Some(pass.current_phase),
                    guesses_remaining: Some(pass.guesses_remaining),
                    current_clue: Some(None),
                    append_log: vec![entry],
                    ..Default::default()
                },
            )
            .await?;
        self.game = Some(game);
        Ok(())
    }

    /// Admin-only forced stop. No winner is recorded, which readers show as
    /// a draw.
    pub async fn end_game(&mut self) -> Result<(), SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let me = self.current_player.as_ref().ok_or(SessionError::NoGame)?;

        if !me.is_admin && game.admin_player_id != Some(me.id) {
            return Err(SessionError::NotAdmin);
        }

        let entry = log_entry(
            me,
            game.current_turn,
            "ended the game".to_string(),
            LogDetail::Pass,
        );

        let game = self
            .store
            .update_game(
                game.id,
                GameUpdate {
                    status: Some(GameStatus::Finished),
                    winner: Some(None),
                    append_log: vec![entry],
                    ..Default::default()
                },
            )
            .await?;
        info!(game_id = %game.id, "game ended by admin");
        self.game = Some(game);
        Ok(())
    }

    /// Delete this player's seat and forget the local session.
    pub async fn leave_game(&mut self) -> Result<(), SessionError> {
        let Some(me) = self.current_player.as_ref() else {
            return Ok(());
        };
        let game_id = me.game_id;

        self.store.delete_player(me.id).await?;
        self.sessions.clear(game_id);

        self.game = None;
        self.players = Vec::new();
        self.current_player = None;
        Ok(())
    }

    /// Look up a word's meaning, spending one unit of the per-player quota.
    /// A failed lookup costs nothing and may be retried.
    pub async fn word_meaning(&mut self, word: &str) -> Result<String, SessionError> {
        let game = self.game.as_ref().ok_or(SessionError::NoGame)?;
        let me = self.current_player.as_ref().ok_or(SessionError::NoGame)?;

        if !game.enable_meanings {
            return Err(SessionError::MeaningsDisabled);
        }
        if me.meanings_used >= game.max_meanings_per_player {
            return Err(SessionError::MeaningQuota(game.max_meanings_per_player));
        }

        let meaning = self.definitions.lookup(word).await?;

        let updated = self
            .store
            .update_player(
                me.id,
                PlayerUpdate {
                    meanings_used: Some(me.meanings_used + 1),
                    ..Default::default()
                },
            )
            .await?;
        self.current_player = Some(updated);
        Ok(meaning)
    }
}

fn log_entry(player: &Player, team: Team, message: String, detail: LogDetail) -> LogEntry {
    LogEntry {
        id: Uuid::new_v4(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        team,
        player_name: player.username.clone(),
        player_seed: player.identity_seed.clone(),
        message,
        detail,
    }
}
