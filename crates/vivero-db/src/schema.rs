//! # Database Schema
//!
//! The single inventory table, created on demand.
//!
//! ## How Schema Setup Works
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Schema Setup                                       │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CREATE TABLE IF NOT EXISTS productos (...)                            │
//! │       │                                                                 │
//! │       ├── Table exists?  Nothing happens, rows untouched               │
//! │       └── Missing?       Empty table created                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  App continues startup                                                 │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There are no versioned migrations. The column layout is fixed so files
//! written by earlier builds of the app open unchanged.

use sqlx::SqlitePool;
use tracing::{error, info};

use crate::error::{DbError, DbResult};

/// DDL for the inventory table.
///
/// `AUTOINCREMENT` keeps ids from being reused after a delete.
pub const CREATE_PRODUCTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS productos (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    nombre TEXT NOT NULL,
    cantidad INTEGER,
    precio TEXT
)
"#;

/// Creates the `productos` table if it does not exist.
///
/// ## Safety
/// - Idempotent: safe to run on every startup
/// - Never alters or drops an existing table
pub async fn ensure_schema(pool: &SqlitePool) -> DbResult<()> {
    info!("Ensuring productos table exists");

    sqlx::query(CREATE_PRODUCTS_TABLE)
        .execute(pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create productos table");
            DbError::SchemaFailed(e.to_string())
        })?;

    Ok(())
}

/// Returns whether the `productos` table exists.
///
/// ## Usage
/// For diagnostics and health checks.
pub async fn products_table_exists(pool: &SqlitePool) -> DbResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'productos'",
    )
    .fetch_one(pool)
    .await?;

    Ok(count > 0)
}
