//! Read-only queries shared by the batch and HTTP front ends.
//!
//! Each query returns `None` for anything that should be reported as
//! "not found"; callers decide how to render that.

use super::dto::{BusStats, RouteAnswer, StopBuses};
use crate::catalogue::TransportCatalogue;
use crate::planner::TransportRouter;

/// Statistics for a bus line.
pub fn bus_stats(catalogue: &TransportCatalogue, name: &str) -> Option<BusStats> {
    let stats = catalogue.line_statistics(name);
    stats.is_found().then(|| BusStats {
        stop_count: stats.stop_count,
        unique_stop_count: stats.unique_stop_count,
        route_length: stats.route_length,
        curvature: stats.curvature(),
    })
}

/// Lines serving a stop. Unknown stops are not found; unserved stops
/// yield an empty list.
pub fn stop_buses(catalogue: &TransportCatalogue, name: &str) -> Option<StopBuses> {
    catalogue.find_stop(name)?;
    let buses = catalogue
        .lines_through_stop(name)
        .into_iter()
        .map(str::to_string)
        .collect();
    Some(StopBuses { buses })
}

/// Fastest journey between two stops.
pub fn route_answer(
    catalogue: &TransportCatalogue,
    router: &TransportRouter,
    from: &str,
    to: &str,
) -> Option<RouteAnswer> {
    router
        .find_route(catalogue, from, to)
        .map(|itinerary| RouteAnswer::from(&itinerary))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Coordinates;
    use crate::planner::RoutingSettings;
    use crate::requests::dto::RouteItem;

    fn catalogue() -> TransportCatalogue {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
        catalogue.add_stop("B", Coordinates::new(0.0, 1.0)).unwrap();
        catalogue.add_stop("Lonely", Coordinates::new(5.0, 5.0)).unwrap();
        catalogue.set_distance_by_name("A", "B", 1000).unwrap();
        catalogue.add_line("9", &["A", "B"], false).unwrap();
        catalogue.add_line("3", &["B", "A"], true).unwrap();
        catalogue
    }

    #[test]
    fn bus_stats_found() {
        let stats = bus_stats(&catalogue(), "9").unwrap();
        assert_eq!(stats.stop_count, 3);
        assert_eq!(stats.unique_stop_count, 2);
        assert_eq!(stats.route_length, 2000.0);
        assert!(stats.curvature.is_some());
    }

    #[test]
    fn bus_stats_not_found() {
        assert!(bus_stats(&catalogue(), "404").is_none());
    }

    #[test]
    fn stop_buses_sorted() {
        let buses = stop_buses(&catalogue(), "A").unwrap();
        assert_eq!(buses.buses, vec!["3", "9"]);
    }

    #[test]
    fn stop_buses_unserved_and_unknown() {
        let catalogue = catalogue();
        assert_eq!(stop_buses(&catalogue, "Lonely").unwrap().buses.len(), 0);
        assert!(stop_buses(&catalogue, "Nowhere").is_none());
    }

    #[test]
    fn route_answer_found_and_not_found() {
        let catalogue = catalogue();
        let router = TransportRouter::build(&catalogue, RoutingSettings::new(2, 30.0).unwrap());

        let answer = route_answer(&catalogue, &router, "A", "B").unwrap();
        // 1000 m at 30 km/h is 2 minutes
        assert_eq!(answer.total_time, 4.0);
        assert_eq!(
            answer.items[0],
            RouteItem::Wait {
                stop_name: "A".into(),
                time: 2.0
            }
        );

        assert!(route_answer(&catalogue, &router, "A", "Lonely").is_none());
        assert!(route_answer(&catalogue, &router, "A", "Nowhere").is_none());
    }
}
