//! The transit catalogue.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::{debug, trace};

use super::distances::DistanceTable;
use super::stats::LineStatistics;
use crate::domain::{CatalogueError, Coordinates, Line, LineId, Stop, StopId, compute_distance};

/// In-memory store of stops, lines and road distances.
///
/// Stops must be added before the lines and distances that mention them.
/// Nothing is ever removed, so `StopId`s and `LineId`s handed out stay
/// valid for the catalogue's lifetime.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalogue {
    stops: Vec<Stop>,
    lines: Vec<Line>,
    stop_index: HashMap<String, StopId>,
    line_index: HashMap<String, LineId>,
    /// Lines serving each stop, indexed by `StopId`.
    lines_at_stop: Vec<BTreeSet<LineId>>,
    distances: DistanceTable,
}

impl TransportCatalogue {
    /// Create an empty catalogue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a stop.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::DuplicateStop`] if the name is taken.
    pub fn add_stop(
        &mut self,
        name: impl Into<String>,
        coordinates: Coordinates,
    ) -> Result<StopId, CatalogueError> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }

        let id = StopId(self.stops.len());
        trace!(stop = %name, id = id.0, "adding stop");
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop::new(name, coordinates));
        self.lines_at_stop.push(BTreeSet::new());
        Ok(id)
    }

    /// Add a line through the named stops.
    ///
    /// The stored route is materialised as described on [`Line::new`].
    ///
    /// # Errors
    ///
    /// - [`CatalogueError::DuplicateLine`] if the name is taken
    /// - [`CatalogueError::UnknownStop`] if any stop was never added
    /// - [`CatalogueError::EmptyLine`] if `stops` is empty
    pub fn add_line<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<LineId, CatalogueError> {
        let name = name.into();
        if self.line_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateLine(name));
        }

        let resolved = stops
            .iter()
            .map(|stop| {
                self.find_stop_id(stop.as_ref())
                    .ok_or_else(|| CatalogueError::UnknownStop(stop.as_ref().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let line = Line::new(name, &resolved, is_roundtrip)?;
        let id = LineId(self.lines.len());

        for stop in line.route() {
            self.lines_at_stop[stop.0].insert(id);
        }

        debug!(
            line = line.name(),
            stops = line.route().len(),
            roundtrip = is_roundtrip,
            "adding line"
        );
        self.line_index.insert(line.name().to_string(), id);
        self.lines.push(line);
        Ok(id)
    }

    /// Record the road distance between two stops.
    ///
    /// The reverse direction is filled in too, unless it was already set.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::InvalidDistance`] for negative distances
    /// or distances that do not fit in 32 bits.
    pub fn set_distance(
        &mut self,
        from: StopId,
        to: StopId,
        distance: i64,
    ) -> Result<(), CatalogueError> {
        let metres = u32::try_from(distance).map_err(|_| CatalogueError::InvalidDistance {
            from: self.stops[from.0].name.clone(),
            to: self.stops[to.0].name.clone(),
            distance,
        })?;
        self.distances.set(from, to, metres);
        Ok(())
    }

    /// Record the road distance between two stops given by name.
    ///
    /// # Errors
    ///
    /// [`CatalogueError::UnknownStop`] if either name is unknown, otherwise
    /// as [`TransportCatalogue::set_distance`].
    pub fn set_distance_by_name(
        &mut self,
        from: &str,
        to: &str,
        distance: i64,
    ) -> Result<(), CatalogueError> {
        let from_id = self
            .find_stop_id(from)
            .ok_or_else(|| CatalogueError::UnknownStop(from.to_string()))?;
        let to_id = self
            .find_stop_id(to)
            .ok_or_else(|| CatalogueError::UnknownStop(to.to_string()))?;
        self.set_distance(from_id, to_id, distance)
    }

    /// Road distance in metres, falling back to the great-circle distance
    /// when none was recorded.
    pub fn distance(&self, from: StopId, to: StopId) -> f64 {
        match self.distances.get(from, to) {
            Some(metres) => f64::from(metres),
            None => self.geographic_distance(from, to),
        }
    }

    /// Great-circle distance in metres between two stops.
    pub fn geographic_distance(&self, from: StopId, to: StopId) -> f64 {
        compute_distance(self.stops[from.0].coordinates, self.stops[to.0].coordinates)
    }

    /// Look up a stop by name.
    pub fn find_stop(&self, name: &str) -> Option<&Stop> {
        self.find_stop_id(name).map(|id| &self.stops[id.0])
    }

    /// Look up a stop's index by name.
    pub fn find_stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    /// Look up a line by name.
    pub fn find_line(&self, name: &str) -> Option<&Line> {
        self.find_line_id(name).map(|id| &self.lines[id.0])
    }

    /// Look up a line's index by name.
    pub fn find_line_id(&self, name: &str) -> Option<LineId> {
        self.line_index.get(name).copied()
    }

    /// Returns the stop with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn stop(&self, id: StopId) -> &Stop {
        &self.stops[id.0]
    }

    /// Returns the line with the given index.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not issued by this catalogue.
    pub fn line(&self, id: LineId) -> &Line {
        &self.lines[id.0]
    }

    /// All stops, in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> {
        self.stops.iter().enumerate().map(|(i, s)| (StopId(i), s))
    }

    /// All lines, in insertion order.
    pub fn lines(&self) -> impl Iterator<Item = (LineId, &Line)> {
        self.lines.iter().enumerate().map(|(i, l)| (LineId(i), l))
    }

    /// Returns the number of stops.
    pub fn stop_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns the number of lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Compute statistics for the named line.
    ///
    /// An unknown line yields `LineStatistics::default()`, whose
    /// `stop_count` of zero marks it as not found.
    pub fn line_statistics(&self, name: &str) -> LineStatistics {
        let Some(line) = self.find_line(name) else {
            return LineStatistics::default();
        };

        let route = line.route();
        let unique: HashSet<StopId> = route.iter().copied().collect();

        let (route_length, geographic_length) = route
            .windows(2)
            .map(|pair| {
                (
                    self.distance(pair[0], pair[1]),
                    self.geographic_distance(pair[0], pair[1]),
                )
            })
            .fold((0.0, 0.0), |(road, geo), (r, g)| (road + r, geo + g));

        LineStatistics {
            stop_count: route.len(),
            unique_stop_count: unique.len(),
            route_length,
            geographic_length,
        }
    }

    /// Names of the lines serving a stop, sorted.
    ///
    /// Unknown stops and stops no line calls at both yield an empty set;
    /// use [`TransportCatalogue::find_stop`] to tell them apart.
    pub fn lines_through_stop(&self, name: &str) -> BTreeSet<&str> {
        self.find_stop_id(name)
            .map(|id| {
                self.lines_at_stop[id.0]
                    .iter()
                    .map(|line| self.lines[line.0].name())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns true if at least one line calls at the stop.
    pub fn is_served(&self, id: StopId) -> bool {
        !self.lines_at_stop[id.0].is_empty()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn catalogue_with_stops(n: usize) -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        for i in 0..n {
            catalogue
                .add_stop(format!("S{i}"), Coordinates::new(i as f64 * 0.01, 0.0))
                .unwrap();
        }
        catalogue
    }

    proptest! {
        /// A stop is always zero metres from itself unless told otherwise
        #[test]
        fn self_distance_zero(n in 1usize..10) {
            let catalogue = catalogue_with_stops(n);
            for (id, _) in catalogue.stops() {
                prop_assert_eq!(catalogue.distance(id, id), 0.0);
            }
        }

        /// The first distance given for a pair answers both directions
        #[test]
        fn mirrored_default(a in 0usize..6, b in 0usize..6, d in 0i64..100_000) {
            prop_assume!(a != b);
            let mut catalogue = catalogue_with_stops(6);
            catalogue.set_distance(StopId(a), StopId(b), d).unwrap();
            prop_assert_eq!(catalogue.distance(StopId(b), StopId(a)), d as f64);
        }

        /// Stop counts match the stored route exactly
        #[test]
        fn stop_count_matches_route(
            stops in proptest::collection::vec(0usize..8, 1..10),
            roundtrip in any::<bool>(),
        ) {
            let mut catalogue = catalogue_with_stops(8);
            let names: Vec<String> = stops.iter().map(|i| format!("S{i}")).collect();
            catalogue.add_line("L", &names, roundtrip).unwrap();

            let stats = catalogue.line_statistics("L");
            let line = catalogue.find_line("L").unwrap();
            prop_assert_eq!(stats.stop_count, line.route().len());
            prop_assert!(stats.unique_stop_count <= stats.stop_count);
            prop_assert!(stats.route_length >= 0.0);
        }
    }
}
