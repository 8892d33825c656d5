//! Stop type and its arena index.

use std::fmt;

use super::Coordinates;

/// Index of a stop in the catalogue's stop arena.
///
/// Indices are assigned in insertion order and stay valid for the
/// lifetime of the catalogue, since stops are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StopId(pub usize);

impl StopId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named bus stop.
#[derive(Debug, Clone, PartialEq)]
pub struct Stop {
    /// Unique stop name.
    pub name: String,

    /// Location of the stop.
    pub coordinates: Coordinates,
}

impl Stop {
    /// Create a new stop.
    pub fn new(name: impl Into<String>, coordinates: Coordinates) -> Self {
        Self {
            name: name.into(),
            coordinates,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_id_ordering() {
        assert!(StopId(1) < StopId(2));
        assert_eq!(StopId(3).index(), 3);
        assert_eq!(StopId(7).to_string(), "#7");
    }

    #[test]
    fn new_stop() {
        let stop = Stop::new("Biryulyovo Zapadnoye", Coordinates::new(55.574371, 37.6517));
        assert_eq!(stop.name, "Biryulyovo Zapadnoye");
        assert_eq!(stop.coordinates.lat, 55.574371);
    }
}
