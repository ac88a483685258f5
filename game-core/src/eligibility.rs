use game_types::{Game, GamePhase, GameStatus, Player, Role, StartError, Team};

/// Whether this player may give a clue right now.
pub fn can_give_clue(player: &Player, game: &Game) -> bool {
    game.status == GameStatus::Playing
        && game.current_phase == GamePhase::GivingClue
        && player.role == Some(Role::Spymaster)
        && player.team == Some(game.current_turn)
}

/// Whether this player may submit a guess right now.
///
/// Operatives on the active team can always guess. A spymaster can guess only
/// when they are the sole player on their team, so a single human can play
/// both roles without any change to the state machine. There is deliberately
/// no matching relaxation for a lone operative giving clues.
pub fn can_guess(player: &Player, game: &Game, all_players: &[Player]) -> bool {
    if game.status != GameStatus::Playing
        || game.current_phase != GamePhase::Guessing
        || player.team != Some(game.current_turn)
    {
        return false;
    }

    match player.role {
        Some(Role::Operative) => true,
        Some(Role::Spymaster) => {
            let team_size = all_players
                .iter()
                .filter(|p| p.team == player.team)
                .count();
            team_size == 1
        }
        None => false,
    }
}

/// Whether the lobby can start a game. Each team needs at least one player;
/// full spymaster+operative seating is not required, so small groups can
/// still play.
pub fn can_start_game(players: &[Player]) -> Result<(), StartError> {
    for team in [Team::Blue, Team::Red] {
        if !players.iter().any(|p| p.is_on(team)) {
            return Err(StartError::for_team(team));
        }
    }
    Ok(())
}
