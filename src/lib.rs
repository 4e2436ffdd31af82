//! # gym-search
//!
//! Client-side query orchestration for the LLM-gym search and chat API:
//! raw keyword input and chat send actions become authenticated, debounced,
//! race-free HTTP requests. Rendering is someone else's problem — this crate
//! exposes plain state snapshots (results, transcript, mode, typing flag)
//! for any presentation layer to consume.
//!
//! ## Request flow
//!
//! ```text
//!   keystroke ──▶ Debouncer ──▶ SearchController ──▶ Signer ──▶ HTTP
//!                                      ▲                          │
//!                                      └── is_current? ◀──────────┘
//!
//!   send ──▶ ChatController (idle ⇄ awaiting) ──▶ Signer ──▶ HTTP
//!                   ▲                                          │
//!                   └────────── is_current? ◀──────────────────┘
//! ```
//!
//! Two invariants carry the design:
//!
//! - **Last request wins.** Every outbound request gets a correlation id from
//!   [`correlate::Correlator`]; a response is applied only if its id is still
//!   the authoritative one for its kind. Obsolete calls complete and are
//!   dropped — nothing is cancelled mid-flight.
//! - **At most one in-flight turn.** The chat transcript is append-only and
//!   sends are serialized by the idle/awaiting state machine; failures append
//!   a synthetic error turn instead of surfacing an error to the caller.
//!
//! ## Module overview
//!
//! - [`config`] - Environment-based configuration: API base URL, signing secret, gates and delays
//! - [`models`] - Shared data types: `SearchHit`, `ChatTurn`, `Role`, `Mode`
//! - [`sign`] - HMAC-SHA256 request signing (`X-Hub-Signature-256`)
//! - [`debounce`] - Trailing-edge coalescing of keystroke bursts
//! - [`correlate`] - Per-kind pending-request slot for stale-response discard
//! - [`api`] - Authenticated reqwest client for the two endpoints
//! - [`controller`] - Search and chat orchestration over the pieces above
//! - [`error`] - The transport/server/malformed taxonomy controllers absorb
//! - [`state`] - `Session`: mode toggle plus both controllers, wired together

pub mod api;
pub mod config;
pub mod controller;
pub mod correlate;
pub mod debounce;
pub mod error;
pub mod models;
pub mod sign;
pub mod state;

pub use config::Config;
pub use controller::chat::CHAT_FAILURE_MESSAGE;
pub use controller::{ChatController, SearchController};
pub use error::ApiError;
pub use models::{ChatTurn, Mode, Role, SearchHit};
pub use state::Session;
