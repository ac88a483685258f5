use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::thread_rng;
use serde::Deserialize;
use std::collections::HashSet;
use tracing::{debug, warn};

use game_core::words::is_valid_word;

/// External source of board words. Implementations may return fewer words
/// than asked for or fail outright; callers pad from the local fallback pool
/// either way.
#[async_trait]
pub trait WordSupplier: Send + Sync {
    async fn supply_words(&self, min_count: usize) -> anyhow::Result<Vec<String>>;
}

/// A supplier that never produces anything, so the board generator always
/// uses the local pool. Handy for tests and offline play.
pub struct OfflineSupplier;

#[async_trait]
impl WordSupplier for OfflineSupplier {
    async fn supply_words(&self, _min_count: usize) -> anyhow::Result<Vec<String>> {
        Ok(Vec::new())
    }
}

// Words below this corpus frequency are too obscure for a party game.
const MIN_FREQUENCY: f64 = 15.0;
// Take the seed plus at most this many related words per theme, so one theme
// cannot dominate the board.
const RELATED_PER_THEME: usize = 3;
const THEMES_PER_BOARD: usize = 8;

/// Theme seeds for clustered word generation. Boards built from a few loose
/// clusters give spymasters multi-tile clue opportunities that fully random
/// word sets rarely produce.
const THEME_SEEDS: &[&str] = &[
    // Nature & geography
    "ocean", "mountain", "jungle", "volcano", "glacier", "canyon", "meadow",
    // Space & science
    "planet", "rocket", "gravity", "galaxy", "telescope", "satellite",
    // Food & kitchen
    "chocolate", "kitchen", "spice", "bakery", "harvest", "feast",
    // War & conflict
    "sword", "battle", "siege", "armor", "cannon", "fortress",
    // Music & art
    "orchestra", "canvas", "melody", "sculpture", "theater", "rhythm",
    // Sports & games
    "stadium", "marathon", "trophy", "champion", "soccer", "tournament",
    // Animals
    "predator", "safari", "swarm", "herd", "falcon", "serpent",
    // Technology
    "circuit", "software", "antenna", "engine", "laser", "signal",
    // Fantasy & myth
    "dragon", "wizard", "phoenix", "legend", "quest", "treasure",
    // City & travel
    "harbor", "airport", "market", "bridge", "subway", "carnival",
    // Weather & elements
    "thunder", "blizzard", "tornado", "flame", "frost", "shadow",
    // Professions
    "detective", "surgeon", "captain", "architect", "merchant", "spy",
    // Emotions & abstract
    "courage", "mystery", "revenge", "silence", "chaos", "fortune",
];

#[derive(Debug, Deserialize)]
struct DatamuseWord {
    word: String,
    #[serde(default)]
    tags: Vec<String>,
}

impl DatamuseWord {
    // Tags carry corpus frequency as "f:123.456".
    fn frequency(&self) -> f64 {
        self.tags
            .iter()
            .find_map(|t| t.strip_prefix("f:"))
            .and_then(|f| f.parse().ok())
            .unwrap_or(0.0)
    }
}

/// Word supplier backed by the Datamuse API: a handful of theme clusters of
/// related words, padded with frequency-filtered random words.
pub struct DatamuseSupplier {
    client: reqwest::Client,
    base_url: String,
}

impl DatamuseSupplier {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn fetch_related(&self, seed: &str, count: usize) -> anyhow::Result<Vec<String>> {
        let url = format!(
            "{}/words?ml={}&max={}&md=f",
            self.base_url,
            seed,
            count * 3
        );
        let words: Vec<DatamuseWord> = self.client.get(&url).send().await?.json().await?;
        Ok(words
            .into_iter()
            // Related words get a slightly more lenient frequency bar.
            .filter(|w| w.frequency() > MIN_FREQUENCY / 2.0)
            .map(|w| w.word.to_uppercase())
            .filter(|w| is_valid_word(w) && w != &seed.to_uppercase())
            .take(count)
            .collect())
    }

    async fn fetch_random(&self, count: usize) -> anyhow::Result<Vec<String>> {
        // 5-7 letter pattern queries; common lengths for board words.
        let mut words = Vec::new();
        for pattern in ["?????", "??????", "???????"] {
            if words.len() >= count {
                break;
            }
            let url = format!(
                "{}/words?sp={}&max={}&md=f",
                self.base_url,
                pattern,
                count * 3
            );
            let batch: Vec<DatamuseWord> = self.client.get(&url).send().await?.json().await?;
            let keep = filter_batch(batch, MIN_FREQUENCY, &words);
            words.extend(keep);
        }
        words.truncate(count);
        Ok(words)
    }
}

#[async_trait]
impl WordSupplier for DatamuseSupplier {
    async fn supply_words(&self, min_count: usize) -> anyhow::Result<Vec<String>> {
        let mut chosen: Vec<String> = Vec::new();
        let mut seen = HashSet::new();

        let themes: Vec<&str> = {
            let mut pool: Vec<&str> = THEME_SEEDS.to_vec();
            pool.shuffle(&mut thread_rng());
            pool.truncate(THEMES_PER_BOARD);
            pool
        };

        for seed in themes {
            let seed_upper = seed.to_uppercase();
            if is_valid_word(&seed_upper) && seen.insert(seed_upper.clone()) {
                chosen.push(seed_upper.clone());
            }
            match self.fetch_related(seed, RELATED_PER_THEME * 2).await {
                Ok(related) => {
                    let picked: Vec<String> = related
                        .into_iter()
                        .filter(|w| !too_similar_to_any(w, &seen))
                        .take(RELATED_PER_THEME)
                        .collect();
                    for word in picked {
                        if seen.insert(word.clone()) {
                            chosen.push(word);
                        }
                    }
                }
                Err(err) => {
                    warn!(seed, error = %err, "related-word fetch failed, skipping theme");
                }
            }
        }

        // Pad with unrelated random words for variety.
        if chosen.len() < min_count + RELATED_PER_THEME {
            let needed = min_count + RELATED_PER_THEME - chosen.len();
            match self.fetch_random(needed + 5).await {
                Ok(random) => {
                    for word in random {
                        if !too_similar_to_any(&word, &seen) && seen.insert(word.clone()) {
                            chosen.push(word);
                        }
                    }
                }
                Err(err) => warn!(error = %err, "random-word fetch failed"),
            }
        }

        chosen.shuffle(&mut thread_rng());
        debug!(count = chosen.len(), requested = min_count, "word supply ready");
        Ok(chosen)
    }
}

/// Uppercase, frequency-filter, and validity-check one API batch, skipping
/// anything already collected.
fn filter_batch(batch: Vec<DatamuseWord>, min_frequency: f64, existing: &[String]) -> Vec<String> {
    batch
        .into_iter()
        .filter(|w| w.frequency() > min_frequency)
        .map(|w| w.word.to_uppercase())
        .filter(|w| is_valid_word(w) && !existing.contains(w))
        .collect()
}

/// Two words are too similar when one contains the other or they share a long
/// common prefix (THUNDER / THUNDERSTORM, EXPLODE / EXPLOSION). Such pairs on
/// one board make clues ambiguous.
fn too_similar(a: &str, b: &str) -> bool {
    let a = a.to_uppercase();
    let b = b.to_uppercase();
    if a == b || a.contains(&b) || b.contains(&a) {
        return true;
    }
    let min_len = a.len().min(b.len());
    let shared = a
        .bytes()
        .zip(b.bytes())
        .take_while(|(x, y)| x == y)
        .count();
    shared >= 4 && shared >= min_len.saturating_sub(2)
}

fn too_similar_to_any(word: &str, existing: &HashSet<String>) -> bool {
    existing.iter().any(|w| too_similar(word, w))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_catches_shared_roots() {
        assert!(too_similar("THUNDER", "THUNDERSTORM"));
        assert!(too_similar("EXPLODE", "EXPLOSION"));
        assert!(too_similar("OCEAN", "ocean"));
        assert!(!too_similar("OCEAN", "DRAGON"));
        assert!(!too_similar("CAT", "CART"));
    }

    #[test]
    fn test_frequency_parsing() {
        let word = DatamuseWord {
            word: "ocean".to_string(),
            tags: vec!["n".to_string(), "f:42.5".to_string()],
        };
        assert!((word.frequency() - 42.5).abs() < f64::EPSILON);

        let untagged = DatamuseWord {
            word: "rare".to_string(),
            tags: Vec::new(),
        };
        assert_eq!(untagged.frequency(), 0.0);
    }

    #[test]
    fn test_batch_filter_skips_collected_rare_and_invalid() {
        let batch = vec![
            DatamuseWord {
                word: "ocean".to_string(),
                tags: vec!["f:40.0".to_string()],
            },
            DatamuseWord {
                word: "harbor".to_string(),
                tags: vec!["f:30.0".to_string()],
            },
            DatamuseWord {
                word: "qat".to_string(),
                tags: vec!["f:0.1".to_string()], // too rare
            },
            DatamuseWord {
                word: "sea horse".to_string(), // invalid token
                tags: vec!["f:25.0".to_string()],
            },
        ];
        let existing = vec!["OCEAN".to_string()];
        let kept = filter_batch(batch, MIN_FREQUENCY, &existing);
        assert_eq!(kept, vec!["HARBOR".to_string()]);
    }

    #[tokio::test]
    async fn test_offline_supplier_defers_to_fallback() {
        let supplier = OfflineSupplier;
        let words = supplier.supply_words(25).await.unwrap();
        assert!(words.is_empty());
    }
}
