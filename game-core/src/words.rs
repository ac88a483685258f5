use rand::seq::SliceRandom;
use rand::Rng;

/// Local word pool used whenever the remote supplier is unreachable or comes
/// up short. Organized in loose thematic clusters so spymasters still get
/// interesting clue connections on a fully offline board.
pub const FALLBACK_WORDS: &[&str] = &[
    // Nature
    "OCEAN", "RIVER", "MOUNTAIN", "FOREST", "DESERT", "GLACIER", "VOLCANO", "CANYON",
    // Fantasy
    "DRAGON", "KNIGHT", "WIZARD", "PIRATE", "PHOENIX", "GRIFFIN", "UNICORN", "QUEST",
    // Materials & gems
    "DIAMOND", "SILVER", "COPPER", "CRYSTAL", "PEARL", "MARBLE", "AMBER", "RUBY",
    // Weather & elements
    "THUNDER", "SHADOW", "FLAME", "FROST", "STORM", "BLIZZARD", "TORNADO", "ECLIPSE",
    // Space
    "ROCKET", "PLANET", "COMET", "GALAXY", "NEBULA", "ASTEROID", "ORBIT", "GRAVITY",
    // War & combat
    "FORTRESS", "CANNON", "SHIELD", "ARROW", "SIEGE", "ARMOR", "SWORD", "DAGGER",
    // Animals
    "FALCON", "PANTHER", "SERPENT", "DOLPHIN", "BUFFALO", "SCORPION", "JAGUAR", "HAWK",
    // Places
    "PALACE", "HARBOR", "VILLAGE", "KINGDOM", "EMPIRE", "TEMPLE", "CASTLE", "BRIDGE",
    // Objects & tools
    "ANCHOR", "COMPASS", "LANTERN", "SCROLL", "TELESCOPE", "WHISTLE", "PENDULUM", "LEVER",
    // Music & art
    "SYMPHONY", "CANVAS", "RHYTHM", "MELODY", "TRUMPET", "SCULPTURE", "PORTRAIT", "CHORUS",
];

/// Whether a token may appear on the board: 3-12 uppercase ASCII letters,
/// no spaces or hyphens.
pub fn is_valid_word(word: &str) -> bool {
    word.len() >= 3
        && word.len() <= 12
        && word.chars().all(|c| c.is_ascii_uppercase())
}

/// Draw `count` words from the fallback pool, skipping anything already in
/// `existing`. Returns fewer than `count` only if the pool itself runs dry.
pub fn fallback_words<R: Rng>(count: usize, existing: &[String], rng: &mut R) -> Vec<String> {
    let mut available: Vec<&str> = FALLBACK_WORDS
        .iter()
        .copied()
        .filter(|w| !existing.iter().any(|e| e == w))
        .collect();
    available.shuffle(rng);
    available
        .into_iter()
        .take(count)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    #[test]
    fn test_fallback_pool_is_valid_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for word in FALLBACK_WORDS {
            assert!(is_valid_word(word), "invalid fallback word: {}", word);
            assert!(seen.insert(*word), "duplicate fallback word: {}", word);
        }
        assert!(FALLBACK_WORDS.len() >= 25);
    }

    #[test]
    fn test_word_validity_rules() {
        assert!(is_valid_word("ZEBRA"));
        assert!(is_valid_word("CAT"));
        assert!(!is_valid_word("AB")); // too short
        assert!(!is_valid_word("EXTRAORDINARILY")); // too long
        assert!(!is_valid_word("RED FOX")); // space
        assert!(!is_valid_word("T-REX")); // hyphen
        assert!(!is_valid_word("zebra")); // not uppercased yet
        assert!(!is_valid_word(""));
    }

    #[test]
    fn test_fallback_words_skips_existing() {
        let existing = vec!["OCEAN".to_string(), "DRAGON".to_string()];
        let words = fallback_words(FALLBACK_WORDS.len(), &existing, &mut thread_rng());
        assert_eq!(words.len(), FALLBACK_WORDS.len() - 2);
        assert!(!words.contains(&"OCEAN".to_string()));
        assert!(!words.contains(&"DRAGON".to_string()));
    }
}
