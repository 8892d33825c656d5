//! Domain types for the transit catalogue.
//!
//! Stops and lines are addressed by arena indices (`StopId`, `LineId`)
//! rather than references, so the catalogue can grow without
//! invalidating anything that points into it.

mod error;
mod geo;
mod line;
mod stop;

pub use error::CatalogueError;
pub use geo::{Coordinates, EARTH_RADIUS_M, compute_distance};
pub use line::{Line, LineId};
pub use stop::{Stop, StopId};
