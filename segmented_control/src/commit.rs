// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracking of the commit animation in flight.
//!
//! Requesting a commit and seeing it complete are two separate points in time.
//! Every request gets a fresh [`AnimationTicket`] and replaces whatever was in
//! flight, so only the completion of the most recent request is honored.

/// Identifies one requested thumb animation.
///
/// The presenter hands it back once the animation has visually finished.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationTicket(u64);

impl AnimationTicket {
    /// Raw ticket value. Later requests have larger values.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A commit whose animation has not been reported complete yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingCommit {
    /// Ticket of the requested animation.
    pub ticket: AnimationTicket,
    /// Segment the thumb is animating to.
    pub index: usize,
    /// Whether the listener hears about the selection on completion.
    pub notify: bool,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct CommitTracker {
    next: u64,
    pending: Option<PendingCommit>,
}

impl CommitTracker {
    /// Start tracking a commit to `index`, superseding any commit in flight.
    pub(crate) fn request(&mut self, index: usize, notify: bool) -> PendingCommit {
        self.next += 1;
        let pending = PendingCommit {
            ticket: AnimationTicket(self.next),
            index,
            notify,
        };
        self.pending = Some(pending);
        pending
    }

    /// Resolve `ticket`. Stale or unknown tickets resolve to `None`.
    pub(crate) fn complete(&mut self, ticket: AnimationTicket) -> Option<PendingCommit> {
        self.pending.take_if(|pending| pending.ticket == ticket)
    }

    /// Forget the commit in flight so its completion is treated as stale.
    pub(crate) fn invalidate(&mut self) -> Option<PendingCommit> {
        self.pending.take()
    }

    pub(crate) fn pending(&self) -> Option<&PendingCommit> {
        self.pending.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::{AnimationTicket, CommitTracker};

    #[test]
    fn completion_returns_the_request() {
        let mut commits = CommitTracker::default();
        let pending = commits.request(2, true);
        assert_eq!(commits.pending(), Some(&pending));
        assert_eq!(commits.complete(pending.ticket), Some(pending));
        assert_eq!(commits.pending(), None);
        // A second completion for the same ticket is stale.
        assert_eq!(commits.complete(pending.ticket), None);
    }

    #[test]
    fn new_request_retargets() {
        let mut commits = CommitTracker::default();
        let first = commits.request(0, true);
        let second = commits.request(1, false);
        assert!(second.ticket > first.ticket);

        assert_eq!(commits.complete(first.ticket), None);
        assert_eq!(commits.complete(second.ticket), Some(second));
    }

    #[test]
    fn invalidate_makes_completion_stale() {
        let mut commits = CommitTracker::default();
        let pending = commits.request(1, true);
        assert_eq!(commits.invalidate(), Some(pending));
        assert_eq!(commits.complete(pending.ticket), None);
        assert_eq!(commits.complete(AnimationTicket(99)), None);
    }
}
