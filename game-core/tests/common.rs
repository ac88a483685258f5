use game_types::{Game, GamePhase, GameStatus, Player, Role, Team, Tile, TileColor};
use uuid::Uuid;

/// Builds a canonical 25-tile board: 9 tiles for `starting_team` (ids 0-8),
/// 8 for the other team (9-16), 7 neutral (17-23) and the assassin at 24.
pub fn standard_board(starting_team: Team) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(25);
    let mut push = |id: u8, color: TileColor| {
        tiles.push(Tile {
            id,
            word: format!("WORD{:02}", id),
            color,
            revealed: false,
            revealed_by: None,
            tentative_by: Vec::new(),
            image_slot: id + 1,
        });
    };
    for id in 0..9 {
        push(id, TileColor::from(starting_team));
    }
    for id in 9..17 {
        push(id, TileColor::from(starting_team.other()));
    }
    for id in 17..24 {
        push(id, TileColor::Neutral);
    }
    push(24, TileColor::Black);
    tiles
}

pub fn playing_game(starting_team: Team) -> Game {
    Game {
        id: Uuid::new_v4(),
        code: "TEST01".to_string(),
        status: GameStatus::Playing,
        current_turn: starting_team,
        current_phase: GamePhase::GivingClue,
        current_clue: None,
        guesses_remaining: 0,
        tiles: standard_board(starting_team),
        starting_team,
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

pub fn seated_player(name: &str, team: Team, role: Role) -> Player {
    Player {
        id: Uuid::new_v4(),
        game_id: Uuid::new_v4(),
        identity_seed: format!("seed-{}", name.to_lowercase()),
        username: name.to_string(),
        team: Some(team),
        role: Some(role),
        is_admin: false,
        joined_at: "2026-01-01T00:00:00Z".to_string(),
        meanings_used: 0,
    }
}

/// Applies a validated clue to the game the way the session host does.
pub fn give_clue(game: &mut Game, word: &str, count: u8) {
    let transition = game_core::apply_clue(word.to_string(), count, game.current_turn);
    game.guesses_remaining = transition.guesses_remaining;
    game.current_phase = transition.current_phase;
    game.current_clue = Some(transition.clue);
}

/// Applies a guess outcome to the game the way the session host does.
pub fn apply_outcome(game: &mut Game, outcome: game_core::GuessOutcome) {
    game.tiles = outcome.tiles;
    game.guesses_remaining = outcome.guesses_remaining;
    game.current_turn = outcome.current_turn;
    game.current_phase = outcome.current_phase;
    game.winner = outcome.winner;
    game.blue_score = outcome.blue_score;
    game.red_score = outcome.red_score;
    if game.current_phase == GamePhase::GivingClue {
        game.current_clue = None;
    }
    if game.winner.is_some() {
        game.status = GameStatus::Finished;
    }
}
