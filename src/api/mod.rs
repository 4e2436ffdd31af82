pub mod chat;
pub mod search;

pub use chat::{context_messages, ChatMessage, ChatReply};

use std::sync::Arc;
use std::time::Duration;

use uuid::Uuid;

use crate::config::Config;
use crate::sign;

/// Header carrying the HMAC signature the backend verifies against.
pub const SIGNATURE_HEADER: &str = "X-Hub-Signature-256";
/// Header carrying the correlation id of the request.
pub const REQUEST_ID_HEADER: &str = "X-Request-ID";

/// Authenticated HTTP client for the search/chat API.
///
/// Cheap to clone; all clones share one connection pool. The configured
/// timeouts are the only bound on a hung request — the orchestration layer
/// itself never times out.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl ApiClient {
    pub fn new(config: Arc<Config>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Attach the two authentication headers: a signature over `body` (the
    /// empty string for GET requests) and the correlation id.
    fn signed(
        &self,
        req: reqwest::RequestBuilder,
        body: &str,
        request_id: Uuid,
    ) -> reqwest::RequestBuilder {
        req.header(
            SIGNATURE_HEADER,
            sign::signature_header(&self.config.signing_secret, body),
        )
        .header(REQUEST_ID_HEADER, request_id.to_string())
    }
}
