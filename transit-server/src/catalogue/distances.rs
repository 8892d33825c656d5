//! Road distances between stops.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::domain::StopId;

/// Directed road distances in metres.
///
/// Setting `A -> B` also fills in `B -> A` unless that direction was
/// already given, so a single declaration describes a symmetric road
/// until the reverse is stated explicitly.
#[derive(Debug, Clone, Default)]
pub struct DistanceTable {
    distances: HashMap<(StopId, StopId), u32>,
}

impl DistanceTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the road distance from `from` to `to`.
    pub fn set(&mut self, from: StopId, to: StopId, metres: u32) {
        self.distances.insert((from, to), metres);
        if let Entry::Vacant(reverse) = self.distances.entry((to, from)) {
            reverse.insert(metres);
        }
    }

    /// Get the recorded distance, if any.
    pub fn get(&self, from: StopId, to: StopId) -> Option<u32> {
        self.distances.get(&(from, to)).copied()
    }

    /// Returns the number of directed entries.
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns true if no distance was recorded.
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }
}
