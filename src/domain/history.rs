//! Bounded, newest-first log of past draws.

use std::collections::VecDeque;

use super::draw::DrawRecord;

/// Default number of draw records retained.
pub const DEFAULT_HISTORY_CAPACITY: usize = 20;

/// Append-only bounded log of draw results.
///
/// Records are kept newest-first. Appending beyond the capacity evicts
/// the oldest entries. The log is independent of the player store: each
/// record snapshots the players as they were at draw time.
#[derive(Debug, Clone)]
pub struct DrawHistory {
    capacity: usize,
    entries: VecDeque<DrawRecord>,
}

impl DrawHistory {
    /// Creates an empty history retaining at most `capacity` records.
    ///
    /// A zero capacity is treated as 1 so that an append is never a no-op.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            entries: VecDeque::new(),
        }
    }

    /// Prepends a record, evicting the oldest entries past capacity.
    pub fn append(&mut self, record: DrawRecord) {
        self.entries.push_front(record);
        self.entries.truncate(self.capacity);
    }

    /// Current records, newest first.
    #[must_use]
    pub fn list(&self) -> Vec<DrawRecord> {
        self.entries.iter().cloned().collect()
    }

    /// Number of retained records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no draws have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for DrawHistory {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
