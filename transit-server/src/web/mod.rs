//! Web layer for the transit server.
//!
//! Serves bus, stop and route queries over HTTP against a catalogue
//! loaded at startup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
