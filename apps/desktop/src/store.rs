//! # Inventory Store
//!
//! The data-access seam between the coordinator and the database.
//!
//! ## Why a Trait?
//! The coordinator only needs the four CRUD operations. Behind the trait it
//! can run against SQLite (`SqliteStore`) in the app, or against any other
//! implementation in tests, with no window present.
//!
//! ## Blocking Over Async
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  egui event loop (sync)                                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SqliteStore::insert(&draft)                                           │
//! │       │  runtime.block_on(...)    ← current-thread tokio runtime       │
//! │       ▼                                                                 │
//! │  ProductRepository::insert(&draft).await   (sqlx)                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  returns to the event loop, which repaints                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::runtime::{Builder, Runtime};
use tracing::{error, info};

use vivero_core::{Product, ProductDraft, ProductId};
use vivero_db::{Database, DbConfig, DbError, DbResult};

/// The CRUD operations the coordinator performs.
///
/// `delete` and `update` return whether a row matched; a missing id is not
/// an error.
pub trait InventoryStore {
    /// All products, ascending by id.
    fn list_all(&self) -> DbResult<Vec<Product>>;

    /// Appends a product and returns its new id.
    fn insert(&self, draft: &ProductDraft) -> DbResult<ProductId>;

    /// Removes the product with `id`.
    fn delete(&self, id: ProductId) -> DbResult<bool>;

    /// Overwrites every mutable field of the product with `id`.
    fn update(&self, id: ProductId, draft: &ProductDraft) -> DbResult<bool>;
}

/// `InventoryStore` backed by the SQLite database.
///
/// A database that could not be opened is kept as its error: every call
/// then fails with that error, so the window still opens on an empty list.
#[derive(Debug)]
pub struct SqliteStore {
    // Dropped before the runtime that drives it.
    db: Result<Database, DbError>,
    runtime: Runtime,
}

impl SqliteStore {
    /// Opens the database described by `config` and ensures its table.
    pub fn open(config: DbConfig) -> DbResult<Self> {
        let store = Self::open_tolerant(config)?;
        if let Err(e) = &store.db {
            return Err(unavailable(e));
        }
        Ok(store)
    }

    /// Like [`SqliteStore::open`], but an unusable database file is logged
    /// and kept instead of returned. Only a runtime that cannot start fails.
    pub fn open_tolerant(config: DbConfig) -> DbResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| DbError::Internal(format!("could not start runtime: {}", e)))?;

        let path = config.database_path.clone();
        let db = runtime.block_on(Database::new(config));
        match &db {
            Ok(_) => info!("Inventory store ready"),
            Err(e) => error!(path = %path.display(), error = %e, "Inventory store unavailable"),
        }

        Ok(SqliteStore { db, runtime })
    }

    /// Closes the pool. Later calls fail with a store error.
    pub fn close(&self) {
        if let Ok(db) = &self.db {
            self.runtime.block_on(db.close());
        }
    }

    fn database(&self) -> DbResult<&Database> {
        self.db.as_ref().map_err(unavailable)
    }
}

/// Fresh copy of the open failure for one call.
fn unavailable(err: &DbError) -> DbError {
    match err {
        DbError::ConnectionFailed(msg) => DbError::ConnectionFailed(msg.clone()),
        DbError::SchemaFailed(msg) => DbError::SchemaFailed(msg.clone()),
        other => DbError::ConnectionFailed(other.to_string()),
    }
}

impl InventoryStore for SqliteStore {
    fn list_all(&self) -> DbResult<Vec<Product>> {
        let db = self.database()?;
        self.runtime.block_on(db.products().list_all())
    }

    fn insert(&self, draft: &ProductDraft) -> DbResult<ProductId> {
        let db = self.database()?;
        self.runtime.block_on(db.products().insert(draft))
    }

    fn delete(&self, id: ProductId) -> DbResult<bool> {
        let db = self.database()?;
        self.runtime.block_on(db.products().delete(id))
    }

    fn update(&self, id: ProductId, draft: &ProductDraft) -> DbResult<bool> {
        let db = self.database()?;
        self.runtime.block_on(db.products().update(id, draft))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_store_crud() {
        let store = SqliteStore::open(DbConfig::in_memory()).unwrap();

        let id = store.insert(&ProductDraft::new("Rosa Roja", 10, "150")).unwrap();
        assert!(store.update(id, &ProductDraft::new("Rosa Blanca", 5, "200")).unwrap());
        assert_eq!(
            store.list_all().unwrap(),
            vec![ProductDraft::new("Rosa Blanca", 5, "200").with_id(id)]
        );

        assert!(store.delete(id).unwrap());
        assert!(!store.delete(id).unwrap());
        assert!(store.list_all().unwrap().is_empty());
    }

    #[test]
    fn test_closed_store_fails() {
        let store = SqliteStore::open(DbConfig::in_memory()).unwrap();
        store.close();

        assert!(store.list_all().is_err());
    }

    #[test]
    fn test_corrupt_file_keeps_store_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viverolaplace.db");
        std::fs::write(&path, b"this is not a sqlite database, just plain bytes").unwrap();

        assert!(SqliteStore::open(DbConfig::new(&path)).is_err());

        let store = SqliteStore::open_tolerant(DbConfig::new(&path)).unwrap();
        assert!(matches!(store.list_all(), Err(DbError::ConnectionFailed(_))));
        assert!(store.insert(&ProductDraft::new("Rosa", 1, "10")).is_err());
        assert!(store.delete(1).is_err());
        store.close();
    }
}
