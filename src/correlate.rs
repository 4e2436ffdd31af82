//! Request correlation: last-request-wins race protection.
//!
//! Every outbound request gets a fresh UUID via [`Correlator::begin`], which
//! also makes that id the sole authoritative pending request for its kind.
//! Response handlers must check [`Correlator::is_current`] before mutating any
//! state; a stale id (superseded by a later `begin`, or cleared by a reset)
//! means the response is dropped unconditionally. The obsolete network call is
//! never cancelled — it completes and its result is simply ignored.

use parking_lot::Mutex;
use uuid::Uuid;

/// The two request families tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Search,
    Chat,
}

/// One authoritative pending-request slot per [`RequestKind`].
#[derive(Debug, Default)]
pub struct Correlator {
    search: Mutex<Option<Uuid>>,
    chat: Mutex<Option<Uuid>>,
}

impl Correlator {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, kind: RequestKind) -> &Mutex<Option<Uuid>> {
        match kind {
            RequestKind::Search => &self.search,
            RequestKind::Chat => &self.chat,
        }
    }

    /// Generate a fresh request id and record it as the sole authoritative
    /// pending request for `kind`, invalidating any prior id.
    pub fn begin(&self, kind: RequestKind) -> Uuid {
        let id = Uuid::new_v4();
        *self.slot(kind).lock() = Some(id);
        id
    }

    /// True iff `id` is still the authoritative pending request for `kind`.
    pub fn is_current(&self, kind: RequestKind, id: Uuid) -> bool {
        *self.slot(kind).lock() == Some(id)
    }

    /// Clear the pending marker if `id` still holds it. Idempotent; a stale
    /// id leaves the slot untouched.
    pub fn complete(&self, kind: RequestKind, id: Uuid) {
        let mut slot = self.slot(kind).lock();
        if *slot == Some(id) {
            *slot = None;
        }
    }

    /// Drop the pending marker for `kind` outright, so any in-flight
    /// response fails its `is_current` check. Used on controller reset.
    pub fn invalidate(&self, kind: RequestKind) {
        *self.slot(kind).lock() = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_begin_makes_id_current() {
        let c = Correlator::new();
        let id = c.begin(RequestKind::Search);
        assert!(c.is_current(RequestKind::Search, id));
    }

    #[test]
    fn test_begin_invalidates_prior_id() {
        let c = Correlator::new();
        let a = c.begin(RequestKind::Search);
        let b = c.begin(RequestKind::Search);
        assert!(!c.is_current(RequestKind::Search, a));
        assert!(c.is_current(RequestKind::Search, b));
    }

    #[test]
    fn test_kinds_are_independent() {
        let c = Correlator::new();
        let s = c.begin(RequestKind::Search);
        let t = c.begin(RequestKind::Chat);
        assert!(c.is_current(RequestKind::Search, s));
        assert!(c.is_current(RequestKind::Chat, t));
        c.begin(RequestKind::Chat);
        assert!(c.is_current(RequestKind::Search, s));
        assert!(!c.is_current(RequestKind::Chat, t));
    }

    #[test]
    fn test_complete_clears_and_is_idempotent() {
        let c = Correlator::new();
        let id = c.begin(RequestKind::Chat);
        c.complete(RequestKind::Chat, id);
        assert!(!c.is_current(RequestKind::Chat, id));
        c.complete(RequestKind::Chat, id); // second call is a no-op
        assert!(!c.is_current(RequestKind::Chat, id));
    }

    #[test]
    fn test_stale_complete_leaves_current_untouched() {
        let c = Correlator::new();
        let old = c.begin(RequestKind::Search);
        let new = c.begin(RequestKind::Search);
        c.complete(RequestKind::Search, old);
        assert!(c.is_current(RequestKind::Search, new));
    }

    #[test]
    fn test_invalidate_drops_pending() {
        let c = Correlator::new();
        let id = c.begin(RequestKind::Chat);
        c.invalidate(RequestKind::Chat);
        assert!(!c.is_current(RequestKind::Chat, id));
    }
}
