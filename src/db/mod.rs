//! Database module providing connection management and queries.

pub mod games;
pub mod users;

use sea_orm::{ConnectOptions, Database, DatabaseConnection};

use crate::error::{AppError, AppResult};

/// Shared database handle.
///
/// Constructed once at startup and injected into handlers via `web::Data`.
/// All query modules add methods through `impl DbPool` blocks.
#[derive(Clone)]
pub struct DbPool {
    conn: DatabaseConnection,
}

impl DbPool {
    /// Connect to the SQLite database at the given URL.
    ///
    /// With `?mode=rwc` the database file is created on first use. The URL
    /// comes from configuration; a non-sqlite scheme is rejected there.
    pub async fn connect(database_url: &str) -> AppResult<Self> {
        let mut options = ConnectOptions::new(database_url.to_string());
        // A single connection serializes all statement execution.
        options.max_connections(1).sqlx_logging(false);

        let conn = Database::connect(options)
            .await
            .map_err(|e| AppError::Database(format!("Failed to open database: {e}")))?;

        Ok(DbPool { conn })
    }

    /// Get access to the connection for executing queries.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }
}
