use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub max_players_per_game: usize,
    pub poll_interval_ms: u64,
    pub tentative_suppression_ms: u64,
    pub word_api_base_url: String,
    pub dictionary_api_base_url: String,
    pub default_max_meanings: u32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            max_players_per_game: env::var("MAX_PLAYERS_PER_GAME")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .expect("Invalid MAX_PLAYERS_PER_GAME"),
            poll_interval_ms: env::var("POLL_INTERVAL_MS")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .expect("Invalid POLL_INTERVAL_MS"),
            tentative_suppression_ms: env::var("TENTATIVE_SUPPRESSION_MS")
                .unwrap_or_else(|_| "500".to_string())
                .parse()
                .expect("Invalid TENTATIVE_SUPPRESSION_MS"),
            word_api_base_url: env::var("WORD_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.datamuse.com".to_string()),
            dictionary_api_base_url: env::var("DICTIONARY_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.dictionaryapi.dev/api/v2/entries/en".to_string()),
            default_max_meanings: env::var("DEFAULT_MAX_MEANINGS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()
                .expect("Invalid DEFAULT_MAX_MEANINGS"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
