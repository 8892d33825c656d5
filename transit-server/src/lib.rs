//! Transit catalogue and journey planner.
//!
//! Loads bus stops and lines from JSON request documents, answers line
//! and stop statistics, and finds the fastest journeys between stops.
//! Documents can be processed in batch or served over HTTP.

pub mod catalogue;
pub mod domain;
pub mod graph;
pub mod logging;
pub mod planner;
pub mod requests;
pub mod web;
