//! Aggregate statistics for a single line.

/// Summary of a line's stored route.
///
/// A `stop_count` of zero means the line was not found.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LineStatistics {
    /// Stops along the stored route, counting repeats.
    pub stop_count: usize,

    /// Distinct stops on the route.
    pub unique_stop_count: usize,

    /// Sum of road distances between consecutive stops (metres).
    pub route_length: f64,

    /// Sum of straight-line distances between consecutive stops (metres).
    pub geographic_length: f64,
}

impl LineStatistics {
    /// Returns true if these statistics describe an existing line.
    pub fn is_found(&self) -> bool {
        self.stop_count > 0
    }

    /// Ratio of road length to straight-line length.
    ///
    /// Returns `None` when the geographic length is zero, e.g. for a line
    /// whose stops all share one location.
    pub fn curvature(&self) -> Option<f64> {
        (self.geographic_length > 0.0).then(|| self.route_length / self.geographic_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_found() {
        let stats = LineStatistics::default();
        assert!(!stats.is_found());
        assert_eq!(stats.curvature(), None);
    }

    #[test]
    fn curvature() {
        let stats = LineStatistics {
            stop_count: 5,
            unique_stop_count: 3,
            route_length: 3000.0,
            geographic_length: 2000.0,
        };
        assert!(stats.is_found());
        assert_eq!(stats.curvature(), Some(1.5));
    }
}
