use crate::cli::CommandLineArgs;
use crate::dataset;
use crate::error::MedalistError;
use crate::prepare::{self, PreparedTable};

use std::path::Path;
use std::sync::Arc;

/// Shared application state passed to each request handler.
pub struct AppState {
    /// Command line arguments.
    pub args: CommandLineArgs,

    /// The prepared Olympics table, immutable for the process lifetime.
    pub table: PreparedTable,
}

impl AppState {
    /// Load the source datasets, run the preparation pipeline and return an [AppState].
    ///
    /// # Arguments
    ///
    /// * `args`: Command line arguments
    pub fn new(args: &CommandLineArgs) -> Result<Self, MedalistError> {
        let events = dataset::load_events(Path::new(&args.events_file))?;
        let regions = dataset::load_regions(Path::new(&args.regions_file))?;
        let table = prepare::prepare(events, &regions);
        tracing::info!(
            rows = table.len(),
            "prepared the Olympics table from {} and {}",
            args.events_file,
            args.regions_file
        );
        Ok(Self {
            args: args.clone(),
            table,
        })
    }
}

/// AppState wrapped in an Atomic Reference Count (Arc) to allow multiple references.
pub type SharedAppState = Arc<AppState>;
