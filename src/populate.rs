//! Populate entry point: optional reset followed by initialization

use std::path::Path;
use crate::storage::SchemaManager;
use crate::Result;

/// Reset (when asked) and initialize the store at `db_path`, or `gamingai.db`.
pub fn run(reset: bool, db_path: Option<&Path>) -> Result<()> {
    let manager = db_path.map(SchemaManager::new).unwrap_or_default();
    run_with(&manager, reset)
}

/// Same as [`run`] with a preconfigured manager.
///
/// Failures are logged at error level and returned unchanged.
pub fn run_with(manager: &SchemaManager, reset: bool) -> Result<()> {
    populate(manager, reset).inspect_err(|e| {
        tracing::error!("Error during database population: {}", e);
    })
}

fn populate(manager: &SchemaManager, reset: bool) -> Result<()> {
    if reset {
        tracing::info!("Resetting database...");
        manager.reset()?;
    }

    tracing::info!("Initializing database...");
    manager.initialize()?;

    tracing::info!("Database population completed successfully.");
    Ok(())
}
