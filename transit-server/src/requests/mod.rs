//! JSON request documents and the queries they drive.

mod dto;
mod error;
mod handler;
mod queries;

pub use dto::*;
pub use error::RequestError;
pub use handler::{
    MAP_UNSUPPORTED, RequestHandler, build_catalogue, load_document, process_document,
    read_document,
};
pub use queries::{bus_stats, route_answer, stop_buses};
