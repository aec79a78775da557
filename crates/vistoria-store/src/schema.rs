//! Version-gated schema migration.

use crate::error::{StoreError, StoreResult};
use rusqlite::Connection;
use std::path::Path;

/// Schema version written to `PRAGMA user_version` by the migration.
pub const DATABASE_VERSION: i64 = 1;

const JOURNAL_MODE: &str = "wal";

const SCHEMA_V1: &str = "
    CREATE TABLE IF NOT EXISTS clients (
      id INTEGER PRIMARY KEY NOT NULL,
      nome TEXT NOT NULL,
      email TEXT,
      telefone TEXT
    );

    CREATE TABLE IF NOT EXISTS vistorias (
      id INTEGER PRIMARY KEY NOT NULL,
      dataHora TEXT NOT NULL,
      contemAnomalia INTEGER,
      anomalia_id INTEGER,
      tipo TEXT,
      categoria TEXT,
      observacao TEXT,
      fotos TEXT
    );
";

/// What [`migrate_if_needed`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationOutcome {
    /// The database was already at (or past) [`DATABASE_VERSION`].
    UpToDate { version: i64 },
    /// The schema was created.
    Migrated { from: i64, to: i64 },
}

fn user_version(conn: &Connection) -> StoreResult<i64> {
    Ok(conn.pragma_query_value(None, "user_version", |row| row.get(0))?)
}

/// Bring `conn` to [`DATABASE_VERSION`].
///
/// Idempotent: a database at or past the target version is left untouched.
pub fn migrate_if_needed(conn: &mut Connection) -> StoreResult<MigrationOutcome> {
    let current = user_version(conn)?;
    if current >= DATABASE_VERSION {
        tracing::debug!(version = current, "local schema up to date");
        return Ok(MigrationOutcome::UpToDate { version: current });
    }

    // journal_mode cannot change inside a transaction.
    let mode: String = conn
        .pragma_update_and_check(None, "journal_mode", JOURNAL_MODE, |row| row.get(0))
        .map_err(|source| StoreError::Migration {
            version: DATABASE_VERSION,
            source,
        })?;
    tracing::debug!(journal_mode = %mode, "journal mode set");

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_V1)
        .map_err(|source| StoreError::Migration {
            version: DATABASE_VERSION,
            source,
        })?;
    tx.pragma_update(None, "user_version", DATABASE_VERSION)?;
    tx.commit()?;

    tracing::info!(from = current, to = DATABASE_VERSION, "local schema migrated");
    Ok(MigrationOutcome::Migrated {
        from: current,
        to: DATABASE_VERSION,
    })
}

/// Handle to the migrated on-device database.
#[derive(Debug)]
pub struct LocalStore {
    conn: Connection,
    outcome: MigrationOutcome,
}

impl LocalStore {
    /// Open (creating if needed) the database at `path` and migrate it.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path).map_err(|source| StoreError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_connection(conn)
    }

    /// In-memory database, migrated. Journal mode stays `memory`.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(mut conn: Connection) -> StoreResult<Self> {
        let outcome = migrate_if_needed(&mut conn)?;
        Ok(Self { conn, outcome })
    }

    /// Outcome of the migration run when this handle was opened.
    pub fn migration_outcome(&self) -> MigrationOutcome {
        self.outcome
    }

    /// Current `PRAGMA user_version`.
    pub fn schema_version(&self) -> StoreResult<i64> {
        user_version(&self.conn)
    }

    /// Current `PRAGMA journal_mode`, lower-cased.
    pub fn journal_mode(&self) -> StoreResult<String> {
        let mode: String = self
            .conn
            .pragma_query_value(None, "journal_mode", |row| row.get(0))?;
        Ok(mode.to_ascii_lowercase())
    }

    /// Names of user tables, sorted.
    pub fn table_names(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )?;
        let names = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Column names of `table`, in declaration order.
    pub fn column_names(&self, table: &str) -> StoreResult<Vec<String>> {
        let mut stmt = self.conn.prepare("SELECT name FROM pragma_table_info(?1)")?;
        let names = stmt
            .query_map([table], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_store_is_migrated() {
        let store = LocalStore::open_in_memory().unwrap();
        assert_eq!(
            store.migration_outcome(),
            MigrationOutcome::Migrated { from: 0, to: 1 }
        );
        assert_eq!(store.schema_version().unwrap(), DATABASE_VERSION);
        assert_eq!(store.table_names().unwrap(), vec!["clients", "vistorias"]);
    }

    #[test]
    fn test_migration_is_noop_when_current() {
        let mut conn = Connection::open_in_memory().unwrap();
        migrate_if_needed(&mut conn).unwrap();
        assert_eq!(
            migrate_if_needed(&mut conn).unwrap(),
            MigrationOutcome::UpToDate { version: 1 }
        );
    }

    #[test]
    fn test_newer_database_is_left_alone() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.pragma_update(None, "user_version", 5).unwrap();
        assert_eq!(
            migrate_if_needed(&mut conn).unwrap(),
            MigrationOutcome::UpToDate { version: 5 }
        );
        let tables: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(tables, 0);
    }

    #[test]
    fn test_column_layout() {
        let store = LocalStore::open_in_memory().unwrap();
        assert_eq!(
            store.column_names("clients").unwrap(),
            vec!["id", "nome", "email", "telefone"]
        );
        assert_eq!(
            store.column_names("vistorias").unwrap(),
            vec![
                "id",
                "dataHora",
                "contemAnomalia",
                "anomalia_id",
                "tipo",
                "categoria",
                "observacao",
                "fotos"
            ]
        );
    }
}
