//! # Database State
//!
//! Wraps the `Database` connection for the storefront.
//!
//! ## Thread Safety
//! The `Database` struct from `aura-db` contains a `SqlitePool` which
//! is inherently thread-safe.
//!
//! ## Usage
//! ```rust,ignore
//! let products = db_state.inner().products().list_all().await?;
//! let session = SessionState::restore(db_state.inner().sessions(), latency).await;
//! ```

use aura_db::Database;

/// Wrapper around `Database`.
#[derive(Debug, Clone)]
pub struct DbState {
    db: Database,
}

impl DbState {
    pub fn new(db: Database) -> Self {
        DbState { db }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }
}
