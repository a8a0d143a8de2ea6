/// Upload sessions
///
/// Every decode is tagged with the session that spawned it. Clearing the
/// gallery ends the session: in-flight decodes see the cancelled token and
/// stop, and results that still arrive carry a stale id and are dropped.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Shared cancellation flag handed to background decode tasks
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionId(u64);

#[derive(Debug, Default)]
pub struct Session {
    id: u64,
    token: CancelToken,
    /// Decodes spawned by this session that haven't reported back
    pending: usize,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> SessionId {
        SessionId(self.id)
    }

    pub fn token(&self) -> CancelToken {
        self.token.clone()
    }

    /// Whether a result tagged `id` belongs to this session
    pub fn accepts(&self, id: SessionId) -> bool {
        id.0 == self.id && !self.token.is_cancelled()
    }

    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Record `count` newly spawned decodes
    pub fn begin(&mut self, count: usize) {
        self.pending += count;
    }

    /// Record one decode reporting back
    pub fn complete(&mut self) {
        self.pending = self.pending.saturating_sub(1);
    }

    /// Cancel this session and start its successor in place
    pub fn renew(&mut self) {
        self.token.cancel();
        self.id += 1;
        self.token = CancelToken::new();
        self.pending = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renew_cancels_previous_token() {
        let mut session = Session::new();
        let old_id = session.id();
        let old_token = session.token();

        session.renew();

        assert!(old_token.is_cancelled());
        assert!(!session.token().is_cancelled());
        assert!(!session.accepts(old_id));
        assert!(session.accepts(session.id()));
    }

    #[test]
    fn test_pending_counts_down_and_resets() {
        let mut session = Session::new();
        session.begin(3);
        session.complete();
        assert_eq!(session.pending(), 2);

        session.renew();
        assert_eq!(session.pending(), 0);
        session.complete();
        assert_eq!(session.pending(), 0);
    }
}
