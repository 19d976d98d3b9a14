//! Pooled access to the quote store.
//!
//! Uses r2d2 with r2d2_sqlite, following the same pooling discipline as any
//! external database collaborator: open, bootstrap once, read many.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use super::schema::{apply_pragmas, initialize_schema, seed_quotes};

/// Error type for quote store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to create connection pool: {0}")]
    PoolCreation(#[from] r2d2::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
}

/// One quote row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub name: String,
    pub quote: String,
}

/// Pooled handle to the quote store.
#[derive(Clone)]
pub struct QuoteStore {
    pool: Pool<SqliteConnectionManager>,
}

impl QuoteStore {
    /// Open (or create) the store at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be created.
    pub fn open<P: AsRef<Path>>(db_path: P) -> Result<Self, StoreError> {
        let manager = SqliteConnectionManager::file(db_path);
        let pool = Pool::builder()
            .max_size(4)
            .connection_customizer(Box::new(StoreConnectionCustomizer))
            .build(manager)?;
        Ok(Self { pool })
    }

    /// Get a connection from the pool.
    fn get(&self) -> Result<PooledConnection<SqliteConnectionManager>, StoreError> {
        Ok(self.pool.get()?)
    }

    /// Create the schema and seed the canonical rows.
    ///
    /// Returns the number of rows inserted (0 on re-bootstrap).
    pub fn bootstrap(&self) -> Result<usize, StoreError> {
        let conn = self.get()?;
        initialize_schema(&conn)?;
        Ok(seed_quotes(&conn)?)
    }

    /// List all quotes, ordered by author name for stable output.
    pub fn list_quotes(&self) -> Result<Vec<Quote>, StoreError> {
        let conn = self.get()?;
        let mut stmt = conn.prepare("SELECT name, quote FROM dune_quote ORDER BY name ASC")?;
        let rows = stmt
            .query_map([], |row| {
                Ok(Quote {
                    name: row.get(0)?,
                    quote: row.get(1)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Connection customizer that applies store pragmas.
#[derive(Debug)]
struct StoreConnectionCustomizer;

impl r2d2::CustomizeConnection<rusqlite::Connection, rusqlite::Error> for StoreConnectionCustomizer {
    fn on_acquire(&self, conn: &mut rusqlite::Connection) -> Result<(), rusqlite::Error> {
        apply_pragmas(conn)
    }
}
