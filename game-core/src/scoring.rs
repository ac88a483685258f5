use game_types::{Team, Tile, TileColor};

/// Revealed tiles of a team's color. Scores are always derived from the board
/// rather than incremented, so they cannot drift.
pub fn team_score(tiles: &[Tile], team: Team) -> u8 {
    tiles
        .iter()
        .filter(|t| t.color == TileColor::from(team) && t.revealed)
        .count() as u8
}

/// Total tiles of a team's color (9 for the starting team, 8 otherwise).
pub fn team_target(tiles: &[Tile], team: Team) -> u8 {
    tiles
        .iter()
        .filter(|t| t.color == TileColor::from(team))
        .count() as u8
}

/// A team whose every tile is revealed has won. The assassin is handled
/// separately by the resolver and takes priority over this check.
pub fn check_winner(tiles: &[Tile]) -> Option<Team> {
    for team in [Team::Blue, Team::Red] {
        let target = team_target(tiles, team);
        if target > 0 && team_score(tiles, team) == target {
            return Some(team);
        }
    }
    None
}
