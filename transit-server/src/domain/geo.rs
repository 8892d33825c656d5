//! Geographic coordinates and great-circle distance.

use serde::{Deserialize, Serialize};

/// Mean earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A point on the earth's surface, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl Coordinates {
    /// Create coordinates from latitude and longitude in degrees.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance in metres between two points (haversine formula).
///
/// # Examples
///
/// ```
/// use transit_server::domain::{Coordinates, compute_distance};
///
/// let a = Coordinates::new(55.611087, 37.20829);
/// assert_eq!(compute_distance(a, a), 0.0);
///
/// // One degree of longitude on the equator is roughly 111 km.
/// let d = compute_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 1.0));
/// assert!((d - 111_195.0).abs() < 1.0);
/// ```
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }

    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();
    let d_lat = lat2 - lat1;
    let d_lng = (to.lng - from.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_M * h.sqrt().min(1.0).asin()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_point_is_zero() {
        let p = Coordinates::new(43.587795, 39.716901);
        assert_eq!(compute_distance(p, p), 0.0);
    }

    #[test]
    fn symmetric() {
        let a = Coordinates::new(55.611087, 37.20829);
        let b = Coordinates::new(55.595884, 37.209755);
        assert_eq!(compute_distance(a, b), compute_distance(b, a));
    }

    #[test]
    fn one_degree_latitude() {
        let d = compute_distance(Coordinates::new(0.0, 0.0), Coordinates::new(1.0, 0.0));
        assert!((d - 111_194.9).abs() < 1.0, "got {d}");
    }

    #[test]
    fn antipodal_points() {
        let d = compute_distance(Coordinates::new(0.0, 0.0), Coordinates::new(0.0, 180.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_M).abs() < 1e-6);
    }
}
