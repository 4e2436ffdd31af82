//! Keyword search orchestration: debounced input, minimum-length gate, and
//! last-request-wins application of responses.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::api::ApiClient;
use crate::config::Config;
use crate::correlate::{Correlator, RequestKind};
use crate::debounce::Debouncer;
use crate::models::{Mode, SearchHit};

pub struct SearchController {
    inner: Arc<SearchInner>,
    debouncer: Debouncer<String>,
}

struct SearchInner {
    api: ApiClient,
    correlator: Arc<Correlator>,
    mode: Arc<RwLock<Mode>>,
    results: RwLock<Vec<SearchHit>>,
    last_error: RwLock<Option<String>>,
    min_query_len: usize,
}

impl SearchController {
    /// Must be called within a tokio runtime: the debounce worker is spawned
    /// here. Dropping the controller cancels any pending debounced search.
    pub fn new(
        api: ApiClient,
        correlator: Arc<Correlator>,
        mode: Arc<RwLock<Mode>>,
        config: &Config,
    ) -> Self {
        let inner = Arc::new(SearchInner {
            api,
            correlator,
            mode,
            results: RwLock::new(Vec::new()),
            last_error: RwLock::new(None),
            min_query_len: config.min_query_len,
        });
        let debounced = inner.clone();
        let debouncer = Debouncer::new(config.debounce_delay(), move |term: String| {
            let inner = debounced.clone();
            async move { inner.run(&term).await }
        });
        Self { inner, debouncer }
    }

    /// Feed one keystroke's worth of input. In chat mode this is a no-op —
    /// the input box belongs to the chat controller there. A term below the
    /// minimum length clears the results synchronously; the trailing
    /// debounced call then re-hits the same gate and issues no traffic.
    pub fn on_keyword_changed(&self, term: &str) {
        if *self.inner.mode.read() != Mode::Search {
            return;
        }
        if self.inner.below_min(term) {
            self.inner.results.write().clear();
        }
        self.debouncer.call(term.to_string());
    }

    /// Explicit user-initiated search, bypassing the debounce. Subject to the
    /// same minimum-length gate as keystroke input.
    pub async fn search_now(&self, term: &str) {
        self.inner.run(term).await;
    }

    /// The latest completed search's hits, replaced wholesale on each
    /// accepted response.
    pub fn results(&self) -> Vec<SearchHit> {
        self.inner.results.read().clone()
    }

    /// The error that cleared the current results, if any.
    pub fn last_error(&self) -> Option<String> {
        self.inner.last_error.read().clone()
    }
}

impl SearchInner {
    fn below_min(&self, term: &str) -> bool {
        term.chars().count() < self.min_query_len
    }

    async fn run(&self, term: &str) {
        if self.below_min(term) {
            self.results.write().clear();
            return;
        }

        let id = self.correlator.begin(RequestKind::Search);
        tracing::debug!(%id, keyword = term, "issuing keyword search");
        let outcome = self.api.keyword_search(term, id).await;

        // A later request has taken over: drop this response outright,
        // success or failure.
        if self.correlator.is_current(RequestKind::Search, id) {
            match outcome {
                Ok(hits) => {
                    tracing::debug!(%id, hits = hits.len(), "applying search response");
                    *self.results.write() = hits;
                    *self.last_error.write() = None;
                }
                Err(e) => {
                    tracing::warn!(%id, "keyword search failed: {e}");
                    self.results.write().clear();
                    *self.last_error.write() = Some(e.to_string());
                }
            }
        } else {
            tracing::debug!(%id, "dropping superseded search response");
        }
        self.correlator.complete(RequestKind::Search, id);
    }
}
