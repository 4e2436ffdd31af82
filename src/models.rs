use serde::{Deserialize, Serialize};

/// Which interaction mode the session is in. Owned by the session; the search
/// controller reads it to decide whether debounced keystrokes issue traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Search,
    Chat,
}

/// A single keyword-search hit.
///
/// The backend indexes scraped documents and returns `parent_*`-prefixed
/// payload fields; the aliases accept both those and the plain names. Every
/// field defaults so sparse payloads still deserialize.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchHit {
    #[serde(default, alias = "parent_title")]
    pub title: String,
    #[serde(default, alias = "parent_link")]
    pub link: String,
    #[serde(default, alias = "parent_summary", alias = "parent_content")]
    pub summary: String,
    #[serde(default, alias = "parent_keywords")]
    pub keywords: Vec<String>,
}

/// Who produced a chat turn. `Error` turns are synthesized locally when a
/// request fails and are never sent back to the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Error,
}

/// One turn of the session transcript, append-only from the core's view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: Role,
    pub content: String,
    /// Source references for assistant turns; empty otherwise.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub citations: Vec<String>,
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            citations: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, citations: Vec<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            citations,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            role: Role::Error,
            content: content.into(),
            citations: Vec::new(),
        }
    }
}
