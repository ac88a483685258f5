mod common;

use common::*;
use game_core::{
    can_give_clue, can_guess, resolve_guess, shuffle_for_viewer, team_score, validate_clue,
};
use game_types::{ClueError, GamePhase, GameStatus, Role, Team};

#[test]
fn test_full_turn_scenario() {
    // Blue starts: 9 blue, 8 red, 7 neutral, 1 assassin.
    let mut game = playing_game(Team::Blue);
    let spymaster = seated_player("Ada", Team::Blue, Role::Spymaster);
    let operative = seated_player("Grace", Team::Blue, Role::Operative);
    let roster = vec![spymaster.clone(), operative.clone()];

    // Spymaster gives "ANIMAL" for 2.
    assert!(can_give_clue(&spymaster, &game));
    let word = validate_clue("animal", &game.tiles).unwrap();
    give_clue(&mut game, &word, 2);
    assert_eq!(game.guesses_remaining, 3);
    assert_eq!(game.current_phase, GamePhase::Guessing);
    assert!(!can_give_clue(&spymaster, &game));
    assert!(can_guess(&operative, &game, &roster));

    // First guess hits a blue tile: correct, turn continues.
    let outcome = resolve_guess(&game, 0, Team::Blue);
    assert!(outcome.correct);
    apply_outcome(&mut game, outcome);
    assert_eq!(game.guesses_remaining, 2);
    assert_eq!(game.current_phase, GamePhase::Guessing);
    assert_eq!(game.current_turn, Team::Blue);
    assert_eq!(game.blue_score, 1);

    // Second guess hits a neutral tile: turn passes to red.
    let outcome = resolve_guess(&game, 17, Team::Blue);
    assert!(!outcome.correct);
    apply_outcome(&mut game, outcome);
    assert_eq!(game.current_turn, Team::Red);
    assert_eq!(game.current_phase, GamePhase::GivingClue);
    assert_eq!(game.guesses_remaining, 0);
    assert!(game.current_clue.is_none());
    assert!(!can_guess(&operative, &game, &roster));
}

#[test]
fn test_game_plays_to_a_blue_win() {
    let mut game = playing_game(Team::Blue);
    give_clue(&mut game, "EVERYTHING", 0);
    assert_eq!(game.guesses_remaining, 25);

    for tile_id in 0..9 {
        assert_eq!(game.status, GameStatus::Playing);
        let outcome = resolve_guess(&game, tile_id, Team::Blue);
        apply_outcome(&mut game, outcome);
    }

    assert_eq!(game.winner, Some(Team::Blue));
    assert_eq!(game.status, GameStatus::Finished);
    assert_eq!(game.blue_score, 9);
    assert_eq!(team_score(&game.tiles, Team::Blue), 9);
}

#[test]
fn test_assassin_ends_the_game_mid_streak() {
    let mut game = playing_game(Team::Red);
    give_clue(&mut game, "TRAP", 3);

    // Two correct red guesses, then the assassin.
    for tile_id in [0, 1] {
        let outcome = resolve_guess(&game, tile_id, Team::Red);
        assert!(outcome.correct);
        apply_outcome(&mut game, outcome);
    }
    let outcome = resolve_guess(&game, 24, Team::Red);
    assert!(outcome.hit_assassin);
    apply_outcome(&mut game, outcome);

    assert_eq!(game.winner, Some(Team::Blue));
    assert_eq!(game.status, GameStatus::Finished);
}

#[test]
fn test_clue_rejection_against_generated_board() {
    let game = playing_game(Team::Blue);
    assert_eq!(
        validate_clue("RED FOX", &game.tiles),
        Err(ClueError::MultiWord)
    );
    // Any board word, case-insensitively.
    assert_eq!(
        validate_clue("word03", &game.tiles),
        Err(ClueError::OnBoard)
    );
    assert_eq!(
        validate_clue("ZEBRA", &game.tiles),
        Ok("ZEBRA".to_string())
    );
}

#[test]
fn test_viewer_shuffle_is_stable_per_game() {
    let game = playing_game(Team::Blue);
    let seed = game.id.to_string();

    let first = shuffle_for_viewer(&game.tiles, &seed);
    let second = shuffle_for_viewer(&game.tiles, &seed);
    assert_eq!(
        first.iter().map(|t| t.id).collect::<Vec<_>>(),
        second.iter().map(|t| t.id).collect::<Vec<_>>()
    );

    let other_game = shuffle_for_viewer(&game.tiles, "another-game-id");
    assert_ne!(
        first.iter().map(|t| t.id).collect::<Vec<_>>(),
        other_game.iter().map(|t| t.id).collect::<Vec<_>>()
    );
}

#[test]
fn test_scores_never_drift_across_a_long_exchange() {
    let mut game = playing_game(Team::Blue);

    // Alternate teams revealing one of their own tiles then a neutral.
    let script = [
        (Team::Blue, 0u8),
        (Team::Blue, 17),
        (Team::Red, 9),
        (Team::Red, 18),
        (Team::Blue, 1),
        (Team::Blue, 19),
    ];
    for (team, tile_id) in script {
        give_clue(&mut game, "SOMETHING", 1);
        game.current_turn = team;
        let outcome = resolve_guess(&game, tile_id, team);
        apply_outcome(&mut game, outcome);
        assert_eq!(game.blue_score, team_score(&game.tiles, Team::Blue));
        assert_eq!(game.red_score, team_score(&game.tiles, Team::Red));
    }
    assert_eq!(game.blue_score, 2);
    assert_eq!(game.red_score, 1);
}
