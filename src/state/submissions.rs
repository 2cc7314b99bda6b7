//! Submissions-list state for the active selector.
//!
//! DESIGN
//! ======
//! The list is always a full server snapshot, never a client-side patch.
//! Each fetch carries a sequence tag; a completion whose tag is no longer
//! the latest issued one is discarded, so an overlapping fetch for a
//! previous selector cannot overwrite a newer response.

#[cfg(test)]
#[path = "submissions_test.rs"]
mod submissions_test;

use crate::net::types::Submission;

/// Shared submissions-list state provided via context.
#[derive(Clone, Debug, Default)]
pub struct SubmissionsState {
    pub items: Vec<Submission>,
    pub loading: bool,
    issued_seq: u64,
    applied_seq: u64,
}

impl SubmissionsState {
    /// Register a new list fetch and return its sequence tag.
    pub fn begin_fetch(&mut self) -> u64 {
        self.issued_seq += 1;
        self.loading = true;
        self.issued_seq
    }

    /// Apply a completed fetch, replacing the list wholesale.
    ///
    /// Returns `false` (and changes nothing) when a newer fetch was issued
    /// after `seq` — the late completion loses.
    pub fn apply_fetch(&mut self, seq: u64, items: Vec<Submission>) -> bool {
        if seq != self.issued_seq {
            return false;
        }
        self.items = items;
        self.applied_seq = seq;
        self.loading = false;
        true
    }

    /// Record a failed fetch. The list is left as-is; the loading flag is
    /// only cleared when no newer fetch is still in flight.
    pub fn fail_fetch(&mut self, seq: u64) {
        if seq == self.issued_seq {
            self.loading = false;
        }
    }

    /// Tag of the most recently applied fetch.
    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }
}
