//! This crate provides a small read-only analytics API over the historical Olympics dataset.
//! Two delimited source tables (athlete event records and the NOC to region mapping) are loaded
//! once at startup, joined and cleaned into a single immutable in-memory table, and served to a
//! dashboard client as pre-aggregated views: summary counts, the medal tally by nation and year,
//! nation participation over time, and the list of available years.
//!
//! There is no write path and no per-request mutation of shared state; the prepared table is
//! constructed before the server starts accepting requests and is read-only for the process
//! lifetime.
//!
//! The server is built on top of a number of open source components.
//!
//! * [Tokio](tokio), the most popular asynchronous Rust runtime.
//! * [Axum](axum) web framework, built by the Tokio team.
//! * [Serde](serde) performs (de)serialisation of JSON response data.
//! * [csv] reads the delimited source tables into typed rows.

pub mod app;
pub mod app_state;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod models;
pub mod prepare;
pub mod queries;
pub mod server;
#[cfg(test)]
pub mod test_utils;
pub mod tracing;
pub mod validated_query;
