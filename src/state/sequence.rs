//! Request Sequencing
//!
//! Polling requests overlap when the backend is slow: a 1h chart fetch can
//! resolve after the user already switched to 24h. Each polling loop owns a
//! sequencer, and a response is applied only while its token is still the
//! newest one issued.

use std::cell::Cell;

#[derive(Debug, Default)]
pub struct RequestSequencer {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand out the next request token.
    pub fn begin(&self) -> u64 {
        let next = self.issued.get() + 1;
        self.issued.set(next);
        next
    }

    /// True while `token` is the most recently issued request.
    pub fn is_current(&self, token: u64) -> bool {
        self.issued.get() == token
    }

    /// Record a response arriving. Returns true when the response may be
    /// applied to state; false means a newer request superseded it (or the
    /// token already committed).
    pub fn commit(&self, token: u64) -> bool {
        if self.is_current(token) && token > self.applied.get() {
            self.applied.set(token);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_increase() {
        let seq = RequestSequencer::new();
        assert_eq!(seq.begin(), 1);
        assert_eq!(seq.begin(), 2);
        assert_eq!(seq.begin(), 3);
    }

    #[test]
    fn test_current_response_commits_once() {
        let seq = RequestSequencer::new();
        let token = seq.begin();

        assert!(seq.is_current(token));
        assert!(seq.commit(token));
        assert!(!seq.commit(token));
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let seq = RequestSequencer::new();
        let slow = seq.begin();
        let fast = seq.begin();

        assert!(!seq.is_current(slow));
        assert!(seq.commit(fast));
        assert!(!seq.commit(slow));
    }

    #[test]
    fn test_superseded_then_reissued() {
        let seq = RequestSequencer::new();
        let first = seq.begin();
        let second = seq.begin();
        assert!(!seq.commit(first));

        let third = seq.begin();
        assert!(!seq.commit(second));
        assert!(seq.commit(third));
    }
}
