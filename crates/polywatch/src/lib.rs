//! Record linkage and aggregation over a public roster of elected officials.
//!
//! The crate consumes already-generated JSON feeds (roster, profiles, donor and
//! disclosure registers) and derives the data the home and profile screens show.

pub mod config;
pub mod dataset;
pub mod disclosures;
pub mod donors;
pub mod error;
pub mod roster;
pub mod telemetry;
pub mod views;
