//! This file defines the medalist binary entry point.

use std::error::Error;
use std::process::exit;
use std::sync::Arc;

use medalist::app;
use medalist::app_state::AppState;
use medalist::cli;
use medalist::metrics;
use medalist::server;
use medalist::tracing;

/// Application entry point
#[tokio::main]
async fn main() {
    let args = cli::parse();
    tracing::init_tracing();
    metrics::register_metrics();
    let state = match AppState::new(&args) {
        Ok(state) => Arc::new(state),
        Err(error) => {
            eprintln!("failed to load the Olympics dataset: {}", error);
            let mut current = error.source();
            while let Some(source) = current {
                eprintln!("caused by: {}", source);
                current = source.source();
            }
            exit(1)
        }
    };
    let service = app::service(state);
    server::serve(&args, service).await;
}
