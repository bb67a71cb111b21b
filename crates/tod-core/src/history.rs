//! Bounded recency history

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// The most recent picks, newest first, capped at `capacity` entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentHistory<T> {
    capacity: usize,
    entries: VecDeque<T>,
}

impl<T: PartialEq + Clone> RecentHistory<T> {
    /// Create an empty history. A capacity of zero records nothing.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    /// Record a pick as the newest entry, evicting the oldest past capacity.
    /// A value already present moves to the front.
    pub fn push(&mut self, value: T) {
        if self.capacity == 0 {
            return;
        }
        self.entries.retain(|v| *v != value);
        self.entries.push_front(value);
        self.entries.truncate(self.capacity);
    }

    pub fn contains(&self, value: &T) -> bool {
        self.entries.contains(value)
    }

    /// Entries, newest first
    pub fn to_vec(&self) -> Vec<T> {
        self.entries.iter().cloned().collect()
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

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
