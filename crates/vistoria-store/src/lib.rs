//! # Vistoria Store
//!
//! On-device SQLite database mirroring the gateway's `clients` and
//! `vistorias` tables. The schema is created once, gated on
//! `PRAGMA user_version`:
//!
//! ```text
//! user_version 0 ──migrate──▶ user_version 1 (clients, vistorias, WAL)
//! user_version ≥ 1          ──▶ no-op
//! ```

mod error;
mod schema;

pub use error::{StoreError, StoreResult};
pub use schema::{migrate_if_needed, LocalStore, MigrationOutcome, DATABASE_VERSION};
