//! Bus line type.
//!
//! A `Line` stores its full travelled path once. Roundtrip lines are
//! closed loops; other lines are materialised as out-and-back paths so
//! that consumers can walk the stored route without caring about the
//! line kind.

use std::fmt;

use super::{CatalogueError, StopId};

/// Index of a line in the catalogue's line arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(pub usize);

impl LineId {
    /// Returns the raw arena index.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A bus line.
///
/// # Invariants
///
/// - The stored route is non-empty
/// - A roundtrip route starts and ends on the same stop
/// - A non-roundtrip route of `n` raw stops has `2n - 1` stored stops and
///   reads the same forwards and backwards
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    name: String,
    route: Vec<StopId>,
    is_roundtrip: bool,
    terminals: Vec<StopId>,
}

impl Line {
    /// Build a line from the stops as they were declared.
    ///
    /// Roundtrip lines are closed by appending the first stop when the
    /// declaration does not already end on it. Other lines get the reverse
    /// run appended, so `A B C` is stored as `A B C B A`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogueError::EmptyLine`] if `stops` is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_server::domain::{Line, StopId};
    ///
    /// let (a, b, c) = (StopId(0), StopId(1), StopId(2));
    ///
    /// let there_and_back = Line::new("14", &[a, b, c], false).unwrap();
    /// assert_eq!(there_and_back.route(), &[a, b, c, b, a]);
    ///
    /// let circle = Line::new("297", &[a, b, c], true).unwrap();
    /// assert_eq!(circle.route(), &[a, b, c, a]);
    /// ```
    pub fn new(
        name: impl Into<String>,
        stops: &[StopId],
        is_roundtrip: bool,
    ) -> Result<Self, CatalogueError> {
        let name = name.into();
        let (&first, &last) = match (stops.first(), stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(CatalogueError::EmptyLine(name)),
        };

        let mut route = stops.to_vec();
        if is_roundtrip {
            if first != last {
                route.push(first);
            }
        } else {
            route.extend(stops.iter().rev().skip(1));
        }

        let mut terminals = vec![first];
        if !is_roundtrip && first != last {
            terminals.push(last);
        }

        Ok(Self {
            name,
            route,
            is_roundtrip,
            terminals,
        })
    }

    /// Returns the line name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the full stored route, including repeats.
    pub fn route(&self) -> &[StopId] {
        &self.route
    }

    /// Returns true for circular lines.
    pub fn is_roundtrip(&self) -> bool {
        self.is_roundtrip
    }

    /// Returns the terminal stops: the first declared stop, plus the last
    /// declared stop for non-roundtrip lines that end elsewhere.
    pub fn terminals(&self) -> &[StopId] {
        &self.terminals
    }

    /// Returns the number of leading stored stops that make up the forward
    /// run of a non-roundtrip line. For roundtrip lines this is the whole
    /// stored route.
    pub fn forward_len(&self) -> usize {
        let len = self.route.len();
        if self.is_roundtrip {
            len
        } else {
            len.div_ceil(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<StopId> {
        raw.iter().copied().map(StopId).collect()
    }

    #[test]
    fn empty_line_rejected() {
        let err = Line::new("1", &[], true).unwrap_err();
        assert_eq!(err, CatalogueError::EmptyLine("1".into()));
    }

    #[test]
    fn roundtrip_is_closed() {
        let line = Line::new("1", &ids(&[0, 1, 2]), true).unwrap();
        assert_eq!(line.route(), ids(&[0, 1, 2, 0]).as_slice());
        assert_eq!(line.terminals(), &[StopId(0)]);
        assert_eq!(line.forward_len(), 4);
    }

    #[test]
    fn roundtrip_already_closed_is_kept() {
        let line = Line::new("1", &ids(&[0, 1, 2, 0]), true).unwrap();
        assert_eq!(line.route(), ids(&[0, 1, 2, 0]).as_slice());
    }

    #[test]
    fn linear_is_mirrored() {
        let line = Line::new("2", &ids(&[0, 1, 2, 3]), false).unwrap();
        assert_eq!(line.route(), ids(&[0, 1, 2, 3, 2, 1, 0]).as_slice());
        assert_eq!(line.terminals(), &[StopId(0), StopId(3)]);
        assert_eq!(line.forward_len(), 4);
    }

    #[test]
    fn single_stop_lines() {
        let linear = Line::new("3", &ids(&[5]), false).unwrap();
        assert_eq!(linear.route(), &[StopId(5)]);
        assert_eq!(linear.forward_len(), 1);

        let circle = Line::new("4", &ids(&[5]), true).unwrap();
        assert_eq!(circle.route(), &[StopId(5)]);
    }

    #[test]
    fn linear_with_same_ends_has_one_terminal() {
        let line = Line::new("5", &ids(&[0, 1, 0]), false).unwrap();
        assert_eq!(line.terminals(), &[StopId(0)]);
        assert_eq!(line.route().len(), 5);
    }
}
