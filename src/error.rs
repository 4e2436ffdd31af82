use reqwest::StatusCode;
use thiserror::Error;

/// Failures a request can surface past the transport.
///
/// Too-short queries and empty messages are not errors — controllers skip
/// them silently before any request is constructed. Every variant here is
/// absorbed at the controller boundary (cleared results for search, a
/// synthetic error turn for chat) and never reaches the caller.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network unreachable, connection reset, or transport-level timeout.
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The server answered with a non-2xx status. Never retried.
    #[error("server returned {status}: {body}")]
    Server { status: StatusCode, body: String },

    /// A 2xx response whose body did not match the expected shape.
    #[error("malformed response: {0}")]
    Malformed(#[source] reqwest::Error),
}
