//! Local persistent store backed by SQLite.
//!
//! The pool is opened explicitly from a [`Config`] and handed to whoever
//! needs it; nothing in the crate reaches for a global handle. Open failures
//! surface as [`StoreError::Unavailable`] so the caller can keep its draft
//! and retry.

pub mod migrations;

use crate::config::Config;
use crate::error::{StoreError, StoreResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Open (creating if missing) the contact database and run migrations.
///
/// The returned pool is ready for use: foreign keys are enabled so the
/// cascade ownership of tags and meeting places holds at the SQL level.
pub async fn connect(config: &Config) -> StoreResult<SqlitePool> {
    let path = Path::new(&config.database_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StoreError::Unavailable(e.to_string()))?;
        }
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .foreign_keys(true)
        .busy_timeout(Duration::from_secs(config.busy_timeout_secs));

    let pool = SqlitePoolOptions::new()
        .connect_with(options)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    migrations::migrate(&pool)
        .await
        .map_err(|e| StoreError::Unavailable(e.to_string()))?;

    info!(path = %config.database_path, "Contact store opened");
    Ok(pool)
}
