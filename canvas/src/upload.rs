//! Bookkeeping for optimistic creates that are still in flight.
//!
//! Every file drop (and every note create) inserts a placeholder item
//! immediately and kicks off asynchronous persistence. This module tracks
//! which placeholder ids are still unresolved and which were deleted by the
//! user mid-flight, so a late success can be told apart from a resurrection:
//! finalizing a cancelled create must discard the result (and clean up the
//! record the backend just assigned) instead of re-inserting a deleted item.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::collections::HashSet;

use uuid::Uuid;

/// How a finished create should be handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Finish {
    /// The placeholder is live: swap it for the committed item.
    Resolve,
    /// The placeholder was deleted while the create was in flight: drop the
    /// result and delete the backend record it produced.
    Discard,
    /// The id was never tracked (or already finished). Nothing to do.
    Unknown,
}

/// Set of in-flight optimistic creates, keyed by placeholder uuid.
#[derive(Debug, Default)]
pub struct PendingSet {
    in_flight: HashSet<Uuid>,
    cancelled: HashSet<Uuid>,
}

impl PendingSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a new in-flight create.
    pub fn begin(&mut self, temp: Uuid) {
        self.in_flight.insert(temp);
    }

    /// Mark an in-flight create as cancelled (its placeholder was deleted).
    /// Returns true if the id was in flight.
    pub fn cancel(&mut self, temp: &Uuid) -> bool {
        if self.in_flight.remove(temp) {
            self.cancelled.insert(*temp);
            return true;
        }
        false
    }

    /// Resolve a create that completed successfully.
    pub fn finish(&mut self, temp: &Uuid) -> Finish {
        if self.in_flight.remove(temp) {
            Finish::Resolve
        } else if self.cancelled.remove(temp) {
            Finish::Discard
        } else {
            Finish::Unknown
        }
    }

    /// Forget a create that failed; its placeholder is rolled back by the
    /// caller. A cancelled create that later fails needs no cleanup either.
    pub fn fail(&mut self, temp: &Uuid) {
        self.in_flight.remove(temp);
        self.cancelled.remove(temp);
    }

    #[must_use]
    pub fn is_in_flight(&self, temp: &Uuid) -> bool {
        self.in_flight.contains(temp)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.in_flight.is_empty() && self.cancelled.is_empty()
    }
}
