//! Local database bootstrap.

use anyhow::{Context, Result};
use vistoria_app::AppConfig;
use vistoria_store::{LocalStore, MigrationOutcome};

/// Open the configured database, migrating it on first use.
pub fn open_store(config: &AppConfig) -> Result<LocalStore> {
    let store = LocalStore::open(&config.database_path)
        .with_context(|| format!("opening {}", config.database_path.display()))?;
    match store.migration_outcome() {
        MigrationOutcome::Migrated { from, to } => {
            tracing::info!(from, to, "local database migrated");
        }
        MigrationOutcome::UpToDate { version } => {
            tracing::debug!(version, "local database up to date");
        }
    }
    Ok(store)
}

pub fn report(store: &LocalStore) -> Result<()> {
    match store.migration_outcome() {
        MigrationOutcome::Migrated { from, to } => println!("Migrated schema {from} -> {to}"),
        MigrationOutcome::UpToDate { version } => println!("Schema already at version {version}"),
    }
    println!("Schema version: {}", store.schema_version()?);
    println!("Journal mode: {}", store.journal_mode()?);
    for table in store.table_names()? {
        println!("  {table}: {}", store.column_names(&table)?.join(", "));
    }
    Ok(())
}
