use game_types::{Clue, Game, GamePhase, Team, TileColor};

use crate::scoring::{check_winner, team_score};

/// Guess budget granted when a clue's count is 0 ("any number"). No turn can
/// reveal more than the whole board, so this never binds.
const UNLIMITED_BUDGET: u8 = 25;

/// Everything a guess changes, as a fresh snapshot fragment. The session host
/// persists these fields wholesale; the resolver itself never mutates its
/// input.
#[derive(Debug, Clone, PartialEq)]
pub struct GuessOutcome {
    pub tiles: Vec<game_types::Tile>,
    pub guesses_remaining: u8,
    pub current_turn: Team,
    pub current_phase: GamePhase,
    pub winner: Option<Team>,
    pub blue_score: u8,
    pub red_score: u8,
    pub hit_assassin: bool,
    pub correct: bool,
}

/// Resolve a confirmed guess of `tile_id` by `guessing_team`.
///
/// Outcomes are evaluated in a fixed order: stale tile, assassin, full team
/// set, correct-guess continuation, turn pass. The order matters; a correct
/// guess that completes a team's set must report as a win, never as "keep
/// guessing", and the assassin outranks everything.
pub fn resolve_guess(game: &Game, tile_id: u8, guessing_team: Team) -> GuessOutcome {
    let mut tiles = game.tiles.clone();

    // Stale or duplicate request (two operatives racing on one tile): echo
    // the current state so the losing writer becomes a no-op.
    let Some(tile) = tiles.iter_mut().find(|t| t.id == tile_id && !t.revealed) else {
        return GuessOutcome {
            tiles,
            guesses_remaining: game.guesses_remaining,
            current_turn: game.current_turn,
            current_phase: game.current_phase,
            winner: game.winner,
            blue_score: game.blue_score,
            red_score: game.red_score,
            hit_assassin: false,
            correct: false,
        };
    };

    tile.revealed = true;
    tile.revealed_by = Some(guessing_team);
    let color = tile.color;

    let blue_score = team_score(&tiles, Team::Blue);
    let red_score = team_score(&tiles, Team::Red);

    // Assassin: the other team wins outright, before any other rule.
    if color == TileColor::Black {
        return GuessOutcome {
            tiles,
            guesses_remaining: 0,
            current_turn: game.current_turn,
            current_phase: GamePhase::GivingClue,
            winner: Some(guessing_team.other()),
            blue_score,
            red_score,
            hit_assassin: true,
            correct: false,
        };
    }

    // Full set revealed: checked before the continuation branch so a winning
    // final guess does not also grant a bonus guess.
    if let Some(winner) = check_winner(&tiles) {
        return GuessOutcome {
            tiles,
            guesses_remaining: 0,
            current_turn: game.current_turn,
            current_phase: GamePhase::GivingClue,
            winner: Some(winner),
            blue_score,
            red_score,
            hit_assassin: false,
            correct: color == TileColor::from(guessing_team),
        };
    }

    // Correct guess with budget left: same team keeps guessing.
    if color == TileColor::from(guessing_team) && game.guesses_remaining >= 1 {
        return GuessOutcome {
            tiles,
            guesses_remaining: game.guesses_remaining - 1,
            current_turn: game.current_turn,
            current_phase: GamePhase::Guessing,
            winner: None,
            blue_score,
            red_score,
            hit_assassin: false,
            correct: true,
        };
    }

    // Neutral, opponent tile, or an exhausted budget: turn passes.
    GuessOutcome {
        tiles,
        guesses_remaining: 0,
        current_turn: guessing_team.other(),
        current_phase: GamePhase::GivingClue,
        winner: None,
        blue_score,
        red_score,
        hit_assassin: false,
        correct: false,
    }
}

/// The guess budget for a clue: stated count plus one bonus guess, or
/// effectively unlimited for a count of 0.
pub fn guess_budget(count: u8) -> u8 {
    if count == 0 {
        UNLIMITED_BUDGET
    } else {
        count + 1
    }
}

/// State fragment written when a validated clue is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClueTransition {
    pub clue: Clue,
    pub guesses_remaining: u8,
    pub current_phase: GamePhase,
}

pub fn apply_clue(word: String, count: u8, given_by: Team) -> ClueTransition {
    ClueTransition {
        guesses_remaining: guess_budget(count),
        current_phase: GamePhase::Guessing,
        clue: Clue {
            word,
            count,
            given_by,
        },
    }
}

/// State fragment written when the active team voluntarily ends its turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnPass {
    pub current_turn: Team,
    pub current_phase: GamePhase,
    pub guesses_remaining: u8,
}

pub fn pass_turn(current_turn: Team) -> TurnPass {
    TurnPass {
        current_turn: current_turn.other(),
        current_phase: GamePhase::GivingClue,
        guesses_remaining: 0,
    }
}
