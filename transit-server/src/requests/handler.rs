//! Batch processing of request documents.

use std::io::Read;
use std::path::Path;

use tracing::{debug, info};

use super::dto::{BaseRequest, RequestDocument, ResponseBody, StatRequest, StatResponse};
use super::error::RequestError;
use super::queries::{bus_stats, route_answer, stop_buses};
use crate::catalogue::TransportCatalogue;
use crate::planner::{RoutingSettings, TransportRouter};

/// Message returned for map requests, which this server does not render.
pub const MAP_UNSUPPORTED: &str = "map rendering is not supported";

/// Parse a request document from a reader.
pub fn read_document<R: Read>(reader: R) -> Result<RequestDocument, RequestError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Parse a request document from a file.
pub fn load_document(path: &Path) -> Result<RequestDocument, RequestError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Populate a catalogue from base requests.
///
/// Stops are added first, then road distances, then buses, so entries
/// may refer to stops declared later in the list.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<TransportCatalogue, RequestError> {
    let mut catalogue = TransportCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            catalogue.add_stop(
                stop.name.as_str(),
                crate::domain::Coordinates::new(stop.latitude, stop.longitude),
            )?;
        }
    }

    for request in requests {
        if let BaseRequest::Stop(stop) = request {
            for (to, &distance) in &stop.road_distances {
                catalogue.set_distance_by_name(&stop.name, to, distance)?;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus(bus) = request {
            catalogue.add_line(bus.name.as_str(), bus.stops.as_slice(), bus.is_roundtrip)?;
        }
    }

    info!(
        stops = catalogue.stop_count(),
        lines = catalogue.line_count(),
        "catalogue loaded"
    );
    Ok(catalogue)
}

/// Answers stat requests against one catalogue.
///
/// The transport router is only built when the first route request
/// arrives, and then reused for the rest of the document.
pub struct RequestHandler {
    catalogue: TransportCatalogue,
    settings: Option<RoutingSettings>,
    router: Option<TransportRouter>,
}

impl RequestHandler {
    /// Create a handler over a populated catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError::Settings`] if the settings are unusable.
    pub fn new(
        catalogue: TransportCatalogue,
        settings: Option<RoutingSettings>,
    ) -> Result<Self, RequestError> {
        if let Some(settings) = &settings {
            settings.validate()?;
        }
        Ok(Self {
            catalogue,
            settings,
            router: None,
        })
    }

    /// Returns the catalogue.
    pub fn catalogue(&self) -> &TransportCatalogue {
        &self.catalogue
    }

    /// Returns true once a route request has forced the router build.
    pub fn has_router(&self) -> bool {
        self.router.is_some()
    }

    /// Answer a single request.
    pub fn answer(&mut self, request: &StatRequest) -> Result<StatResponse, RequestError> {
        let body = match request {
            StatRequest::Bus { name, .. } => bus_stats(&self.catalogue, name)
                .map(ResponseBody::Bus)
                .unwrap_or_else(ResponseBody::not_found),
            StatRequest::Stop { name, .. } => stop_buses(&self.catalogue, name)
                .map(ResponseBody::Stop)
                .unwrap_or_else(ResponseBody::not_found),
            StatRequest::Route { from, to, .. } => {
                let settings = self.settings.ok_or(RequestError::MissingRoutingSettings)?;
                let catalogue = &self.catalogue;
                let router = self
                    .router
                    .get_or_insert_with(|| TransportRouter::build(catalogue, settings));
                route_answer(catalogue, router, from, to)
                    .map(ResponseBody::Route)
                    .unwrap_or_else(ResponseBody::not_found)
            }
            StatRequest::Map { .. } => ResponseBody::Error {
                error_message: MAP_UNSUPPORTED.to_string(),
            },
        };

        debug!(request_id = request.id(), "request answered");
        Ok(StatResponse {
            request_id: request.id(),
            body,
        })
    }

    /// Answer requests in order.
    pub fn answer_all(
        &mut self,
        requests: &[StatRequest],
    ) -> Result<Vec<StatResponse>, RequestError> {
        requests.iter().map(|request| self.answer(request)).collect()
    }
}

/// Build the catalogue from a document and answer all its stat requests.
pub fn process_document(document: &RequestDocument) -> Result<Vec<StatResponse>, RequestError> {
    let catalogue = build_catalogue(&document.base_requests)?;
    let mut handler = RequestHandler::new(catalogue, document.routing_settings)?;
    let responses = handler.answer_all(&document.stat_requests)?;

    info!(responses = responses.len(), "document processed");
    Ok(responses)
}
