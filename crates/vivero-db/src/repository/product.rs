//! # Product Repository
//!
//! Database operations for the `productos` table.
//!
//! ## Column Mapping
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    productos  ◄──►  Product                             │
//! │                                                                         │
//! │  id        INTEGER PK AUTOINCREMENT  ──►  id: i64                       │
//! │  nombre    TEXT NOT NULL             ──►  name: String                  │
//! │  cantidad  INTEGER (nullable)        ──►  quantity: i64  (NULL → 0)     │
//! │  precio    TEXT    (nullable)        ──►  price: Price   (NULL → "")    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Missing Ids
//! `update` and `delete` on an id that is not in the table are no-ops, not
//! errors. They report `false` so callers can log it.

use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use vivero_core::{Product, ProductDraft, ProductId};

/// Column list shared by every SELECT, with NULLs folded to defaults.
const SELECT_COLUMNS: &str = r#"
    id,
    nombre AS name,
    COALESCE(cantidad, 0) AS quantity,
    COALESCE(precio, '') AS price
"#;

/// Repository for product database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = ProductRepository::new(pool);
///
/// let id = repo.insert(&ProductDraft::new("Rosa Roja", 10, "150")).await?;
/// repo.update(id, &ProductDraft::new("Rosa Blanca", 5, "200")).await?;
/// repo.delete(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: SqlitePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(pool: SqlitePool) -> Self {
        ProductRepository { pool }
    }

    /// Returns every product, ordered by ascending id.
    pub async fn list_all(&self) -> DbResult<Vec<Product>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM productos ORDER BY id ASC");

        let products = sqlx::query_as::<_, Product>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Gets a product by its id.
    ///
    /// ## Returns
    /// * `Ok(Some(product))` - Product found
    /// * `Ok(None)` - No row with that id
    pub async fn get_by_id(&self, id: ProductId) -> DbResult<Option<Product>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM productos WHERE id = ?1");

        let product = sqlx::query_as::<_, Product>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(product)
    }

    /// Inserts a new product.
    ///
    /// ## Returns
    /// The id SQLite assigned to the row.
    pub async fn insert(&self, draft: &ProductDraft) -> DbResult<ProductId> {
        debug!(name = %draft.name, quantity = draft.quantity, "Inserting product");

        let result = sqlx::query(
            r#"
            INSERT INTO productos (nombre, cantidad, precio)
            VALUES (?1, ?2, ?3)
            "#,
        )
        .bind(&draft.name)
        .bind(draft.quantity)
        .bind(draft.price.as_str())
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Product inserted");
        Ok(id)
    }

    /// Overwrites name, quantity and price of an existing product.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row updated
    /// * `Ok(false)` - No row with that id (nothing changed)
    pub async fn update(&self, id: ProductId, draft: &ProductDraft) -> DbResult<bool> {
        debug!(id, name = %draft.name, "Updating product");

        let result = sqlx::query(
            r#"
            UPDATE productos SET
                nombre = ?2,
                cantidad = ?3,
                precio = ?4
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&draft.name)
        .bind(draft.quantity)
        .bind(draft.price.as_str())
        .execute(&self.pool)
        .await?;

        let updated = result.rows_affected() > 0;
        if !updated {
            debug!(id, "Update matched no product");
        }
        Ok(updated)
    }

    /// Hard-deletes a product.
    ///
    /// ## Returns
    /// * `Ok(true)` - Row removed
    /// * `Ok(false)` - No row with that id (nothing changed)
    pub async fn delete(&self, id: ProductId) -> DbResult<bool> {
        debug!(id, "Deleting product");

        let result = sqlx::query("DELETE FROM productos WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        let deleted = result.rows_affected() > 0;
        if !deleted {
            debug!(id, "Delete matched no product");
        }
        Ok(deleted)
    }

    /// Counts all products (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM productos")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    async fn repo() -> ProductRepository {
        Database::new(DbConfig::in_memory()).await.unwrap().products()
    }

    fn rose() -> ProductDraft {
        ProductDraft::new("Rosa Roja", 10, "150")
    }

    #[tokio::test]
    async fn test_insert_modify_delete_scenario() {
        let repo = repo().await;

        let id = repo.insert(&rose()).await.unwrap();
        assert_eq!(id, 1);
        assert_eq!(repo.list_all().await.unwrap(), vec![rose().with_id(1)]);

        let white = ProductDraft::new("Rosa Blanca", 5, "200");
        assert!(repo.update(1, &white).await.unwrap());
        assert_eq!(repo.list_all().await.unwrap(), vec![white.with_id(1)]);

        assert!(repo.delete(1).await.unwrap());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_are_never_reused() {
        let repo = repo().await;

        let first = repo.insert(&rose()).await.unwrap();
        let second = repo.insert(&rose()).await.unwrap();
        repo.delete(second).await.unwrap();

        let third = repo.insert(&rose()).await.unwrap();
        assert!(third > second);
        assert!(second > first);
    }

    #[tokio::test]
    async fn test_list_is_ordered_by_id_after_deletes() {
        let repo = repo().await;

        for name in ["Cactus", "Helecho", "Jazmin", "Lavanda"] {
            repo.insert(&ProductDraft::new(name, 1, "10")).await.unwrap();
        }
        repo.delete(2).await.unwrap();
        repo.insert(&ProductDraft::new("Ombu", 1, "10")).await.unwrap();
        repo.delete(1).await.unwrap();

        let ids: Vec<ProductId> = repo
            .list_all()
            .await
            .unwrap()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3, 4, 5]);
    }

    #[tokio::test]
    async fn test_delete_missing_id_is_noop() {
        let repo = repo().await;
        repo.insert(&rose()).await.unwrap();

        assert!(!repo.delete(99).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_noop() {
        let repo = repo().await;
        repo.insert(&rose()).await.unwrap();

        let changed = repo
            .update(99, &ProductDraft::new("Otra", 1, "1"))
            .await
            .unwrap();

        assert!(!changed);
        assert_eq!(repo.list_all().await.unwrap(), vec![rose().with_id(1)]);
    }

    #[tokio::test]
    async fn test_update_leaves_other_rows_alone() {
        let repo = repo().await;
        let a = repo.insert(&rose()).await.unwrap();
        let b = repo
            .insert(&ProductDraft::new("Helecho", 3, "80"))
            .await
            .unwrap();

        repo.update(a, &ProductDraft::new("Rosa Blanca", 5, "200"))
            .await
            .unwrap();

        let other = repo.get_by_id(b).await.unwrap().unwrap();
        assert_eq!(other.draft(), ProductDraft::new("Helecho", 3, "80"));
    }

    #[tokio::test]
    async fn test_get_by_id() {
        let repo = repo().await;
        let id = repo.insert(&rose()).await.unwrap();

        assert_eq!(repo.get_by_id(id).await.unwrap(), Some(rose().with_id(id)));
        assert_eq!(repo.get_by_id(id + 1).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_null_columns_read_as_defaults() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        sqlx::query("INSERT INTO productos (nombre) VALUES ('Cactus')")
            .execute(db.pool())
            .await
            .unwrap();

        let rows = db.products().list_all().await.unwrap();
        assert_eq!(rows, vec![ProductDraft::new("Cactus", 0, "").with_id(1)]);
    }

    #[tokio::test]
    async fn test_price_text_is_stored_verbatim() {
        let repo = repo().await;
        let id = repo
            .insert(&ProductDraft::new("Orquidea", 2, "$ 1.500,00"))
            .await
            .unwrap();

        let product = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(product.price.as_str(), "$ 1.500,00");
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.close().await;

        assert!(db.products().list_all().await.is_err());
        assert!(db.products().insert(&rose()).await.is_err());
    }
}
