//! JSON request and response documents.
//!
//! Input documents carry `base_requests` describing the network,
//! `routing_settings`, and `stat_requests` to answer. Unknown top-level
//! keys such as `render_settings` are ignored.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::planner::{Itinerary, ItineraryItem, RoutingSettings};

/// A complete request document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RequestDocument {
    /// Network description.
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,

    /// Settings for route queries; required only if a route is requested.
    #[serde(default)]
    pub routing_settings: Option<RoutingSettings>,

    /// Queries to answer, in order.
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// A network description entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop(StopDescription),
    Bus(BusDescription),
}

/// A stop with its outgoing road distances.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDescription {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// Road distance in metres to neighbouring stops, by name.
    #[serde(default)]
    pub road_distances: BTreeMap<String, i64>,
}

/// A bus line through named stops.
#[derive(Debug, Clone, Deserialize)]
pub struct BusDescription {
    pub name: String,
    pub stops: Vec<String>,
    pub is_roundtrip: bool,
}

/// A query against the network.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    /// Statistics of a bus line.
    Bus { id: i64, name: String },

    /// Lines serving a stop.
    Stop { id: i64, name: String },

    /// Fastest journey between two stops.
    Route { id: i64, from: String, to: String },

    /// Rendered network map.
    Map { id: i64 },
}

impl StatRequest {
    /// Returns the request id.
    pub fn id(&self) -> i64 {
        match self {
            StatRequest::Bus { id, .. }
            | StatRequest::Stop { id, .. }
            | StatRequest::Route { id, .. }
            | StatRequest::Map { id } => *id,
        }
    }
}

/// Answer to one stat request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatResponse {
    pub request_id: i64,

    #[serde(flatten)]
    pub body: ResponseBody,
}

/// Payload of a [`StatResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Bus(BusStats),
    Stop(StopBuses),
    Route(RouteAnswer),
    Error { error_message: String },
}

impl ResponseBody {
    /// The uniform "not found" answer.
    pub fn not_found() -> Self {
        ResponseBody::Error {
            error_message: "not found".to_string(),
        }
    }
}

/// Statistics of a bus line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BusStats {
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Road length in metres.
    pub route_length: f64,
    /// Road length over straight-line length; `null` if the line has no
    /// geographic extent.
    pub curvature: Option<f64>,
}

/// Lines serving a stop, sorted by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopBuses {
    pub buses: Vec<String>,
}

/// A journey, as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteAnswer {
    /// Minutes.
    pub total_time: f64,
    pub items: Vec<RouteItem>,
}

/// One journey step.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum RouteItem {
    Wait {
        stop_name: String,
        time: f64,
    },
    Bus {
        bus: String,
        span_count: usize,
        time: f64,
    },
}

impl From<&ItineraryItem> for RouteItem {
    fn from(item: &ItineraryItem) -> Self {
        match item {
            ItineraryItem::Wait { stop_name, time } => RouteItem::Wait {
                stop_name: stop_name.clone(),
                time: *time,
            },
            ItineraryItem::Ride {
                line,
                span_count,
                time,
            } => RouteItem::Bus {
                bus: line.clone(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

impl From<&Itinerary> for RouteAnswer {
    fn from(itinerary: &Itinerary) -> Self {
        Self {
            total_time: itinerary.total_time(),
            items: itinerary.items().iter().map(RouteItem::from).collect(),
        }
    }
}
