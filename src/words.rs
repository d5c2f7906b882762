//! Random word acquisition for single-player rounds.
//!
//! One best-effort call to the Wordnik random-word service, falling back
//! to a fixed local list on any failure. [`WordSupplier::random_word`]
//! never fails.

use derive_more::{Display, Error};
use rand::Rng;
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// Default random-word endpoint.
const DEFAULT_WORD_URL: &str = "https://api.wordnik.com/v4/words.json/randomWord";

/// Query-string API key inherited from the upstream client.
/// `WORDNIK_API_KEY` overrides it.
const DEFAULT_API_KEY: &str = "a2a73e7b926c924fad7001ca3111acd55af2ffabf50eb4ae5";

/// Words served when the remote fetch fails. All uppercase alphabetic.
pub const FALLBACK_WORDS: [&str; 48] = [
    "APPLE",
    "BANANA",
    "CHERRY",
    "DRAGON",
    "ELEPHANT",
    "FOREST",
    "GUITAR",
    "RAINBOW",
    "PIZZA",
    "SUNSET",
    "COMPUTER",
    "MOUNTAIN",
    "OCEAN",
    "BUTTERFLY",
    "SANDWICH",
    "BICYCLE",
    "PENGUIN",
    "CASTLE",
    "LIBRARY",
    "WIZARD",
    "SOCCER",
    "FLOWER",
    "ROCKET",
    "BRIDGE",
    "DOLPHIN",
    "JUNGLE",
    "THUNDER",
    "CRYSTAL",
    "VOLCANO",
    "TREASURE",
    "PLANET",
    "WARRIOR",
    "GARDEN",
    "MYSTERY",
    "ADVENTURE",
    "KEYBOARD",
    "LIGHTHOUSE",
    "TORNADO",
    "DIAMOND",
    "FIREWORKS",
    "CAROUSEL",
    "HELICOPTER",
    "SUBMARINE",
    "TELESCOPE",
    "BASKETBALL",
    "CHOCOLATE",
    "MAGAZINE",
    "TELEPHONE",
];

/// Response payload from the random-word endpoint.
#[derive(Debug, Deserialize)]
struct RandomWordPayload {
    word: Option<String>,
}

/// Word fetch error. Absorbed inside [`WordSupplier::random_word`].
#[derive(Debug, Clone, Display, Error)]
#[display("Word fetch error: {} at {}:{}", message, file, line)]
struct FetchError {
    message: String,
    line: u32,
    file: &'static str,
}

impl FetchError {
    /// Creates a new fetch error.
    #[track_caller]
    fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Supplies secret words for single-player rounds.
#[derive(Debug, Clone)]
pub struct WordSupplier {
    /// HTTP client, reused across fetches.
    client: reqwest::Client,
    /// Random-word endpoint.
    base_url: String,
    /// Key sent in the query string.
    api_key: String,
}

impl WordSupplier {
    /// Creates a supplier against the default Wordnik endpoint.
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_WORD_URL.to_string())
    }

    /// Creates a supplier against a custom endpoint.
    ///
    /// Used by tests and by the `--word-url` flag.
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            api_key: std::env::var("WORDNIK_API_KEY")
                .unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
        }
    }

    /// Produces an uppercase alphabetic word.
    ///
    /// One attempt against the remote service, no retry: any transport
    /// error, non-success status, or unusable payload selects uniformly
    /// from [`FALLBACK_WORDS`] instead. This call never fails.
    #[instrument(skip(self))]
    pub async fn random_word(&self) -> String {
        match self.fetch_remote().await {
            Ok(word) => {
                info!(word_length = word.len(), "Fetched word from remote service");
                word
            }
            Err(e) => {
                warn!(error = %e, "Word fetch failed, using fallback list");
                Self::fallback_word().to_string()
            }
        }
    }

    /// One GET against the random-word endpoint.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_remote(&self) -> Result<String, FetchError> {
        debug!("Requesting random word");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("hasDictionaryDef", "true"),
                ("minCorpusCount", "1000"),
                ("maxCorpusCount", "-1"),
                ("minDictionaryCount", "1"),
                ("maxDictionaryCount", "-1"),
                ("minLength", "4"),
                ("maxLength", "12"),
                ("api_key", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::new(format!("Request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(format!("Service returned {}", status)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| FetchError::new(format!("Failed to read response: {}", e)))?;

        debug!(response_length = text.len(), "Parsing random-word response");
        let payload: RandomWordPayload = serde_json::from_str(&text)
            .map_err(|e| FetchError::new(format!("Invalid response body: {}", e)))?;

        let word = payload
            .word
            .ok_or_else(|| FetchError::new("Response missing word field".to_string()))?
            .to_uppercase();

        if word.is_empty() || !word.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(FetchError::new(format!("Unusable word: {:?}", word)));
        }

        Ok(word)
    }

    /// Uniform pick from the fallback list. Cannot fail.
    fn fallback_word() -> &'static str {
        let index = rand::thread_rng().gen_range(0..FALLBACK_WORDS.len());
        FALLBACK_WORDS[index]
    }
}

impl Default for WordSupplier {
    fn default() -> Self {
        Self::new()
    }
}
