use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::ApiClient;
use crate::config::Config;
use crate::controller::{ChatController, SearchController};
use crate::correlate::Correlator;
use crate::models::Mode;

/// One browsing session: the mode toggle plus both controllers wired to a
/// shared HTTP client and correlator.
pub struct Session {
    config: Arc<Config>,
    mode: Arc<RwLock<Mode>>,
    pub search: SearchController,
    pub chat: ChatController,
}

impl Session {
    /// Must be called within a tokio runtime (the search controller spawns
    /// its debounce worker). Starts in search mode.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let config = Arc::new(config);
        let api = ApiClient::new(config.clone())?;
        let correlator = Arc::new(Correlator::new());
        let mode = Arc::new(RwLock::new(Mode::Search));

        let search = SearchController::new(api.clone(), correlator.clone(), mode.clone(), &config);
        let chat = ChatController::new(api, correlator);

        Ok(Self {
            config,
            mode,
            search,
            chat,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        *self.mode.read()
    }

    /// Toggling the mode never clears the transcript or the search results;
    /// it only decides which controller keystrokes feed.
    pub fn set_mode(&self, mode: Mode) {
        *self.mode.write() = mode;
    }

    /// Teardown notification from the presentation layer: in-flight chat
    /// responses are dropped on arrival. Pending debounced searches are
    /// cancelled when the session (and with it the search controller) drops.
    pub fn reset(&self) {
        self.chat.reset();
    }
}
