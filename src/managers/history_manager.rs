//! History Manager for passgen.
//!
//! Implements `HistoryManagerTrait`: a bounded, in-memory, most-recent-first
//! ledger of generated values. Nothing here is ever written to disk.

use std::time::{SystemTime, UNIX_EPOCH};

use uuid::Uuid;
use zeroize::Zeroize;

use crate::types::history::HistoryEntry;

/// Number of entries the ledger keeps.
pub const HISTORY_CAPACITY: usize = 5;

/// Trait defining history ledger operations.
pub trait HistoryManagerTrait {
    /// Prepends `entry`, evicting the oldest entries beyond capacity.
    fn record(&mut self, entry: HistoryEntry);
    /// Creates an entry for `value` with a fresh id and timestamp and records it.
    fn record_value(&mut self, value: &str) -> HistoryEntry;
    /// Entries, most recent first.
    fn list(&self) -> &[HistoryEntry];
    fn get(&self, id: &str) -> Option<&HistoryEntry>;
    fn clear(&mut self);
}

/// Fixed-capacity history ledger.
#[derive(Debug)]
pub struct HistoryManager {
    entries: Vec<HistoryEntry>,
    capacity: usize,
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryManager {
    /// Creates an empty ledger holding at most [`HISTORY_CAPACITY`] entries.
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(HISTORY_CAPACITY + 1),
            capacity: HISTORY_CAPACITY,
        }
    }

    /// Returns the current UNIX timestamp in milliseconds.
    fn now_millis() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl HistoryManagerTrait for HistoryManager {
    fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        while self.entries.len() > self.capacity {
            if let Some(mut evicted) = self.entries.pop() {
                evicted.zeroize();
            }
        }
    }

    fn record_value(&mut self, value: &str) -> HistoryEntry {
        let entry = HistoryEntry {
            id: Uuid::new_v4().to_string(),
            value: value.to_string(),
            created_at: Self::now_millis(),
        };
        self.record(entry.clone());
        entry
    }

    fn list(&self) -> &[HistoryEntry] {
        &self.entries
    }

    fn get(&self, id: &str) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Drops every entry, overwriting the stored values first.
    fn clear(&mut self) {
        self.entries.iter_mut().for_each(|e| e.zeroize());
        self.entries.clear();
    }
}
