use game_types::{ClueError, Tile};

/// Check a spymaster's raw clue against the board and normalize it.
///
/// Rules, in order: trim and uppercase; reject empty; reject anything with
/// internal whitespace (a clue is one token); reject a case-insensitive match
/// with any board word. The rulebook's softer conventions (no acronyms, no
/// variants of board words) are social agreements and not enforced here.
pub fn validate_clue(raw_clue: &str, tiles: &[Tile]) -> Result<String, ClueError> {
    let clue = raw_clue.trim().to_uppercase();

    if clue.is_empty() {
        return Err(ClueError::Empty);
    }

    if clue.chars().any(char::is_whitespace) {
        return Err(ClueError::MultiWord);
    }

    if tiles.iter().any(|t| t.word.to_uppercase() == clue) {
        return Err(ClueError::OnBoard);
    }

    Ok(clue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_types::TileColor;

    fn board_with(words: &[&str]) -> Vec<Tile> {
        words
            .iter()
            .enumerate()
            .map(|(i, word)| Tile {
                id: i as u8,
                word: word.to_string(),
                color: TileColor::Neutral,
                revealed: false,
                revealed_by: None,
                tentative_by: Vec::new(),
                image_slot: 20,
            })
            .collect()
    }

    #[test]
    fn test_valid_clue_is_normalized() {
        let tiles = board_with(&["OCEAN", "DRAGON"]);
        assert_eq!(validate_clue("  zebra ", &tiles), Ok("ZEBRA".to_string()));
    }

    #[test]
    fn test_empty_clue_rejected() {
        let tiles = board_with(&["OCEAN"]);
        assert_eq!(validate_clue("", &tiles), Err(ClueError::Empty));
        assert_eq!(validate_clue("   ", &tiles), Err(ClueError::Empty));
    }

    #[test]
    fn test_multi_word_clue_rejected() {
        let tiles = board_with(&["OCEAN"]);
        assert_eq!(validate_clue("RED FOX", &tiles), Err(ClueError::MultiWord));
        assert_eq!(validate_clue("a\tb", &tiles), Err(ClueError::MultiWord));
    }

    #[test]
    fn test_board_word_rejected_case_insensitively() {
        let tiles = board_with(&["OCEAN", "DRAGON"]);
        assert_eq!(validate_clue("OCEAN", &tiles), Err(ClueError::OnBoard));
        assert_eq!(validate_clue("dragon", &tiles), Err(ClueError::OnBoard));
        assert_eq!(validate_clue(" Ocean ", &tiles), Err(ClueError::OnBoard));
    }
}
