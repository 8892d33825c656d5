//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::requests::{BusStats, RouteAnswer, StopBuses, bus_stats, route_answer, stop_buses};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/buses/:name", get(bus))
        .route("/stops/:name", get(stop))
        .route("/route", get(route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Statistics of one bus line.
async fn bus(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<BusStats>, AppError> {
    bus_stats(&state.catalogue, &name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("bus not found: {name}"),
        })
}

/// Lines serving one stop.
async fn stop(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StopBuses>, AppError> {
    stop_buses(&state.catalogue, &name)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("stop not found: {name}"),
        })
}

/// Fastest journey between two stops.
async fn route(
    State(state): State<AppState>,
    Query(query): Query<RouteQuery>,
) -> Result<Json<RouteAnswer>, AppError> {
    if query.from.is_empty() || query.to.is_empty() {
        return Err(AppError::BadRequest {
            message: "both from and to must be given".to_string(),
        });
    }

    route_answer(&state.catalogue, &state.router, &query.from, &query.to)
        .map(Json)
        .ok_or_else(|| AppError::NotFound {
            message: format!("no route from {} to {}", query.from, query.to),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::TransportCatalogue;
    use crate::domain::Coordinates;
    use crate::planner::RoutingSettings;
    use crate::requests::RouteItem;

    fn state() -> AppState {
        let mut catalogue = TransportCatalogue::new();
        catalogue.add_stop("A", Coordinates::new(0.0, 0.0)).unwrap();
        catalogue.add_stop("B", Coordinates::new(0.0, 1.0)).unwrap();
        catalogue.add_stop("C", Coordinates::new(0.0, 2.0)).unwrap();
        catalogue.add_stop("Depot", Coordinates::new(1.0, 1.0)).unwrap();
        catalogue.set_distance_by_name("A", "B", 1000).unwrap();
        catalogue.set_distance_by_name("B", "C", 1000).unwrap();
        catalogue.set_distance_by_name("C", "A", 1000).unwrap();
        catalogue.add_line("1", &["A", "B", "C", "A"], true).unwrap();
        AppState::new(catalogue, RoutingSettings::new(6, 60.0).unwrap())
    }

    fn route_query(from: &str, to: &str) -> Query<RouteQuery> {
        Query(RouteQuery {
            from: from.into(),
            to: to.into(),
        })
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn bus_found() {
        let Json(stats) = bus(State(state()), Path("1".into())).await.unwrap();
        assert_eq!(stats.stop_count, 4);
        assert_eq!(stats.unique_stop_count, 3);
        assert_eq!(stats.route_length, 3000.0);
    }

    #[tokio::test]
    async fn bus_not_found() {
        let err = bus(State(state()), Path("99".into())).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn stop_lists_buses() {
        let Json(buses) = stop(State(state()), Path("B".into())).await.unwrap();
        assert_eq!(buses.buses, vec!["1"]);

        let Json(unserved) = stop(State(state()), Path("Depot".into())).await.unwrap();
        assert!(unserved.buses.is_empty());

        assert!(stop(State(state()), Path("Nowhere".into())).await.is_err());
    }

    #[tokio::test]
    async fn route_found() {
        let Json(answer) = route(State(state()), route_query("A", "C")).await.unwrap();
        assert_eq!(answer.total_time, 8.0);
        assert_eq!(
            answer.items[1],
            RouteItem::Bus {
                bus: "1".into(),
                span_count: 2,
                time: 2.0
            }
        );
    }

    #[tokio::test]
    async fn route_errors() {
        let err = route(State(state()), route_query("A", "Depot"))
            .await
            .unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);

        let err = route(State(state()), route_query("", "C")).await.unwrap_err();
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
