//! Position-keyed cache of finished search results.

use std::collections::HashMap;

use crate::search::ScoredMove;

/// Transposition cache mapping position hashes to search results.
///
/// Entries carry no depth or bound tag, so a probe hit stands for the
/// exact position regardless of the window that produced it. The
/// deepening driver clears the cache between passes, which keeps results
/// of a shallower pass from answering probes of a deeper one.
#[derive(Debug, Default)]
pub struct TranspositionCache {
    entries: HashMap<u64, ScoredMove>,
}

impl TranspositionCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Look up the result stored for a position hash.
    pub fn probe(&self, hash: u64) -> Option<ScoredMove> {
        self.entries.get(&hash).copied()
    }

    /// Store the result computed for a position hash.
    ///
    /// A later store for the same hash replaces the earlier one.
    pub fn store(&mut self, hash: u64, result: ScoredMove) {
        self.entries.insert(hash, result);
    }

    /// Drop every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` if no entry is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
