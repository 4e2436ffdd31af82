use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the search/chat API
    pub api_base_url: String,
    /// Shared secret for HMAC request signing
    pub signing_secret: String,
    /// Collection queried by both search and chat
    pub collection_name: String,
    /// Keywords shorter than this never hit the network
    pub min_query_len: usize,
    /// Quiet period before a keystroke burst triggers a search, in ms
    pub debounce_delay_ms: u64,
    /// Connect timeout for the HTTP client, in seconds
    pub connect_timeout_secs: u64,
    /// Overall request timeout for the HTTP client, in seconds
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8001".to_string(),
            signing_secret: String::new(),
            collection_name: "LLM-gym".to_string(),
            min_query_len: 3,
            debounce_delay_ms: 200,
            connect_timeout_secs: 10,
            request_timeout_secs: 30,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("GYM_API_BASE_URL") {
            config.api_base_url = url;
        }
        if let Ok(secret) = std::env::var("GYM_SIGNING_SECRET") {
            config.signing_secret = secret;
        }
        if let Ok(name) = std::env::var("GYM_COLLECTION_NAME") {
            config.collection_name = name;
        }
        if let Ok(val) = std::env::var("GYM_MIN_QUERY_LEN") {
            if let Ok(v) = val.parse() {
                config.min_query_len = v;
            }
        }
        if let Ok(val) = std::env::var("GYM_DEBOUNCE_DELAY_MS") {
            if let Ok(v) = val.parse() {
                config.debounce_delay_ms = v;
            }
        }
        if let Ok(val) = std::env::var("GYM_CONNECT_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.connect_timeout_secs = v;
            }
        }
        if let Ok(val) = std::env::var("GYM_REQUEST_TIMEOUT_SECS") {
            if let Ok(v) = val.parse() {
                config.request_timeout_secs = v;
            }
        }

        config
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_delay_ms)
    }
}
