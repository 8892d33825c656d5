//! Human-readable journey steps.

/// One step of a journey.
#[derive(Debug, Clone, PartialEq)]
pub enum ItineraryItem {
    /// Wait at a stop for the next bus.
    Wait { stop_name: String, time: f64 },

    /// Ride a bus for `span_count` stops.
    Ride {
        line: String,
        span_count: usize,
        time: f64,
    },
}

impl ItineraryItem {
    /// Returns the duration of this step in minutes.
    pub fn time(&self) -> f64 {
        match self {
            ItineraryItem::Wait { time, .. } | ItineraryItem::Ride { time, .. } => *time,
        }
    }

    /// Returns true for wait steps.
    pub fn is_wait(&self) -> bool {
        matches!(self, ItineraryItem::Wait { .. })
    }
}

/// A complete journey between two stops.
///
/// Items alternate wait, ride, wait, ride, ... since every ride starts
/// from a freshly boarded bus.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Itinerary {
    items: Vec<ItineraryItem>,
    total_time: f64,
}

impl Itinerary {
    /// Create an itinerary, summing the item durations.
    pub fn new(items: Vec<ItineraryItem>) -> Self {
        let total_time = items.iter().map(ItineraryItem::time).sum();
        Self { items, total_time }
    }

    /// Returns the steps in travel order.
    pub fn items(&self) -> &[ItineraryItem] {
        &self.items
    }

    /// Returns the total journey time in minutes.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    /// Returns the number of rides.
    pub fn ride_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_wait()).count()
    }

    /// Returns true if no travel is needed.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
