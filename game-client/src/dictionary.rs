use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no definition found")]
    NotFound,
    #[error("definition service unavailable: {0}")]
    Unavailable(String),
}

/// External definition lookup for the "word meaning" feature. The quota that
/// gates it lives in the session, not here.
#[async_trait]
pub trait DefinitionLookup: Send + Sync {
    async fn lookup(&self, word: &str) -> Result<String, LookupError>;
}

#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    #[serde(default)]
    meanings: Vec<Meaning>,
}

#[derive(Debug, Deserialize)]
struct Meaning {
    #[serde(default)]
    definitions: Vec<Definition>,
}

#[derive(Debug, Deserialize)]
struct Definition {
    definition: String,
}

/// Client for the free dictionary API: first definition of the first meaning
/// of the first entry, which is all a quick in-game hint needs.
pub struct DictionaryApi {
    client: reqwest::Client,
    base_url: String,
}

impl DictionaryApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl DefinitionLookup for DictionaryApi {
    async fn lookup(&self, word: &str) -> Result<String, LookupError> {
        let url = format!("{}/{}", self.base_url, word.to_lowercase());
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::NotFound);
        }

        let entries: Vec<DictionaryEntry> = response
            .json()
            .await
            .map_err(|e| LookupError::Unavailable(e.to_string()))?;

        entries
            .first()
            .and_then(|entry| entry.meanings.first())
            .and_then(|meaning| meaning.definitions.first())
            .map(|d| d.definition.clone())
            .ok_or(LookupError::NotFound)
    }
}
