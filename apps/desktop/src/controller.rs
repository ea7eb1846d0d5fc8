//! # Coordinator
//!
//! Turns button and menu intents into validated store calls, then rebuilds
//! the displayed list from the store.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Coordinator Action Flow                              │
//! │                                                                         │
//! │  Guardar / Eliminar / Modificar / Consultar / Guardar como              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  try_*()  ──► selection? ──► read form ──► validate ──► store call      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  finish(action, result)                                                 │
//! │  ├── Ok  ──► Info notice                                                │
//! │  └── Err ──► log + Warning/Error notice (no state change)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  refresh() after every successful mutation                              │
//! │  (the list is re-read; the selection is dropped)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Notices queue up in arrival order; the view shows the front one as a
//! modal dialog and pops it when dismissed.

use std::collections::VecDeque;
use std::path::{Path, PathBuf};

use tracing::{debug, error, info, warn};

use vivero_core::export::{render_csv, CSV_EXTENSION};
use vivero_core::validation::{validate_new_product, validate_product_update, ValidationPolicy};
use vivero_core::Product;

use crate::error::{Action, AppError, AppResult, Notice, RowAction};
use crate::state::AppState;
use crate::store::InventoryStore;

/// Owns the store, the window state and the pending notices.
pub struct Coordinator<S: InventoryStore> {
    store: S,
    state: AppState,
    policy: ValidationPolicy,
    notices: VecDeque<Notice>,
}

impl<S: InventoryStore> Coordinator<S> {
    /// Creates the coordinator and loads the list from the store.
    pub fn new(store: S, policy: ValidationPolicy) -> Self {
        let mut coordinator = Coordinator {
            store,
            state: AppState::new(),
            policy,
            notices: VecDeque::new(),
        };
        coordinator.refresh();
        coordinator
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Actions
    // =========================================================================

    /// Inserts the form contents as a new product.
    pub fn save(&mut self) -> AppResult<()> {
        let result = self.try_save();
        self.finish(Action::Save, result, || {
            Notice::info("Guardado", "Producto guardado exitosamente.")
        })
    }

    fn try_save(&mut self) -> AppResult<()> {
        let draft = self.state.form().read()?;
        validate_new_product(&draft)?;

        let id = self
            .store
            .insert(&draft)
            .map_err(|e| AppError::store(Action::Save, e))?;
        info!(id, name = %draft.name, "Product saved");

        self.clear_fields();
        self.refresh();
        Ok(())
    }

    /// Deletes the selected product.
    pub fn delete(&mut self) -> AppResult<()> {
        let result = self.try_delete();
        self.finish(Action::Delete, result, || {
            Notice::info("Eliminado", "Producto eliminado.")
        })
    }

    fn try_delete(&mut self) -> AppResult<()> {
        let id = self.require_selection(RowAction::Delete)?.id;

        let removed = self
            .store
            .delete(id)
            .map_err(|e| AppError::store(Action::Delete, e))?;
        if removed {
            info!(id, "Product deleted");
        } else {
            warn!(id, "Delete matched no row");
        }

        self.refresh();
        Ok(())
    }

    /// Overwrites the selected product with the form contents.
    pub fn modify(&mut self) -> AppResult<()> {
        let result = self.try_modify();
        self.finish(Action::Modify, result, || {
            Notice::info("Modificado", "Producto modificado correctamente.")
        })
    }

    fn try_modify(&mut self) -> AppResult<()> {
        let id = self.require_selection(RowAction::Modify)?.id;
        let draft = self.state.form().read()?;
        validate_product_update(&draft, self.policy)?;

        let updated = self
            .store
            .update(id, &draft)
            .map_err(|e| AppError::store(Action::Modify, e))?;
        if updated {
            info!(id, name = %draft.name, "Product modified");
        } else {
            warn!(id, "Modify matched no row");
        }

        self.refresh();
        Ok(())
    }

    /// Copies the selected row into the form. No store access.
    pub fn query(&mut self) -> AppResult<()> {
        let result = self
            .require_selection(RowAction::Query)
            .cloned()
            .map(|product| self.state.form_mut().load(&product));
        self.report(result)
    }

    /// Writes the displayed rows as CSV to `raw_path`.
    ///
    /// A blank path is a cancelled prompt and does nothing. A path with no
    /// extension gets `.csv`. Returns the path written, if any.
    pub fn export(&mut self, raw_path: &str) -> AppResult<Option<PathBuf>> {
        let raw_path = raw_path.trim();
        if raw_path.is_empty() {
            debug!("Export cancelled");
            return Ok(None);
        }

        let path = export_path(raw_path);
        let result = write_csv(&path, self.state.listing().rows());

        match result {
            Ok(()) => {
                info!(path = %path.display(), rows = self.state.listing().len(), "Inventory exported");
                self.notices.push_back(Notice::info(
                    "Guardado",
                    format!("Datos exportados correctamente a:\n{}", path.display()),
                ));
                Ok(Some(path))
            }
            Err(err) => {
                error!(error = %err, "Export failed");
                self.notices.push_back(err.notice());
                Err(err)
            }
        }
    }

    /// Resets the form to name empty, quantity zero, price empty.
    pub fn clear_fields(&mut self) {
        self.state.form_mut().clear();
    }

    /// Re-reads the list from the store.
    ///
    /// A read failure empties the list and queues an error notice.
    pub fn refresh(&mut self) {
        match self.store.list_all() {
            Ok(rows) => {
                debug!(count = rows.len(), "Product list refreshed");
                self.state.listing_mut().replace(rows);
            }
            Err(e) => {
                self.state.listing_mut().clear();
                let err = AppError::store(Action::Load, e);
                error!(error = %err, "Could not load products");
                self.notices.push_back(err.notice());
            }
        }
    }

    // =========================================================================
    // Notices
    // =========================================================================

    /// The notice to show now, if any.
    pub fn pending_notice(&self) -> Option<&Notice> {
        self.notices.front()
    }

    /// Drops the notice currently shown.
    pub fn dismiss_notice(&mut self) -> Option<Notice> {
        self.notices.pop_front()
    }

    /// Drains every queued notice.
    pub fn take_notices(&mut self) -> Vec<Notice> {
        self.notices.drain(..).collect()
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn require_selection(&self, action: RowAction) -> AppResult<&Product> {
        self.state
            .listing()
            .selected()
            .ok_or(AppError::NoSelection(action))
    }

    fn finish(
        &mut self,
        action: Action,
        result: AppResult<()>,
        success: impl FnOnce() -> Notice,
    ) -> AppResult<()> {
        if result.is_ok() {
            debug!(?action, "Action completed");
            self.notices.push_back(success());
        }
        self.report(result)
    }

    /// Queues the notice for a failed action.
    fn report(&mut self, result: AppResult<()>) -> AppResult<()> {
        if let Err(err) = &result {
            match err {
                AppError::Store { .. } | AppError::Export { .. } => {
                    error!(error = %err, "Action failed")
                }
                AppError::Validation(_) | AppError::NoSelection(_) => {
                    warn!(error = %err, "Action rejected")
                }
            }
            self.notices.push_back(err.notice());
        }
        result
    }
}

/// `raw` as a path, with `.csv` appended when it has no extension.
/// A trailing dot counts as no extension.
pub fn export_path(raw: &str) -> PathBuf {
    let mut path = PathBuf::from(raw);
    if path.extension().map_or(true, |ext| ext.is_empty()) {
        path.set_extension(CSV_EXTENSION);
    }
    path
}

fn write_csv(path: &Path, rows: &[Product]) -> AppResult<()> {
    std::fs::write(path, render_csv(rows)).map_err(|source| AppError::Export {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Severity;
    use crate::store::SqliteStore;
    use vivero_core::{ProductDraft, ProductId};
    use vivero_db::{DbConfig, DbError, DbResult};

    fn coordinator() -> Coordinator<SqliteStore> {
        let store = SqliteStore::open(DbConfig::in_memory()).unwrap();
        Coordinator::new(store, ValidationPolicy::default())
    }

    fn fill(c: &mut Coordinator<SqliteStore>, name: &str, quantity: &str, price: &str) {
        let form = c.state_mut().form_mut();
        form.set_name(name);
        form.set_quantity_text(quantity);
        form.set_price(price);
    }

    fn rows(c: &Coordinator<SqliteStore>) -> Vec<(ProductId, String, i64, String)> {
        c.state()
            .listing()
            .rows()
            .iter()
            .map(|p| (p.id, p.name.clone(), p.quantity, p.price.as_str().to_string()))
            .collect()
    }

    #[test]
    fn test_save_modify_delete_scenario() {
        let mut c = coordinator();
        assert!(c.state().listing().is_empty());

        fill(&mut c, "Rosa Roja", "10", "150");
        c.save().unwrap();
        assert_eq!(rows(&c), vec![(1, "Rosa Roja".into(), 10, "150".into())]);
        assert_eq!(c.state().form().name(), "");
        assert_eq!(c.state().form().quantity_text(), "0");

        c.state_mut().listing_mut().select(0);
        fill(&mut c, "Rosa Blanca", "5", "200");
        c.modify().unwrap();
        assert_eq!(rows(&c), vec![(1, "Rosa Blanca".into(), 5, "200".into())]);
        assert_eq!(c.state().listing().selected_index(), None);

        c.state_mut().listing_mut().select(0);
        c.delete().unwrap();
        assert!(rows(&c).is_empty());

        let titles: Vec<String> = c.take_notices().into_iter().map(|n| n.title).collect();
        assert_eq!(titles, vec!["Guardado", "Modificado", "Eliminado"]);
    }

    #[test]
    fn test_save_rejects_invalid_names() {
        let mut c = coordinator();

        for name in ["Rosa123", " Rosa", "Rosa ", "Rosa  Roja", "Rosa-", ""] {
            fill(&mut c, name, "1", "10");
            let err = c.save().unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{name:?}");
        }

        assert!(c.store().list_all().unwrap().is_empty());
        let notices = c.take_notices();
        assert!(notices
            .iter()
            .all(|n| n.severity == Severity::Warning && n.title == "Nombre inválido"));
    }

    #[test]
    fn test_save_requires_price_and_integer_quantity() {
        let mut c = coordinator();

        fill(&mut c, "Rosa", "1", "");
        assert!(c.save().is_err());
        assert_eq!(c.dismiss_notice().unwrap().title, "Faltan datos");

        fill(&mut c, "Rosa", "uno", "10");
        assert!(c.save().is_err());
        assert_eq!(c.dismiss_notice().unwrap().title, "Cantidad inválida");

        fill(&mut c, "Rosa", "", "10");
        c.save().unwrap();
        assert_eq!(rows(&c), vec![(1, "Rosa".into(), 0, "10".into())]);
    }

    #[test]
    fn test_actions_need_a_selection() {
        let mut c = coordinator();
        fill(&mut c, "Rosa", "1", "10");
        c.save().unwrap();
        c.take_notices();

        assert!(matches!(
            c.delete(),
            Err(AppError::NoSelection(RowAction::Delete))
        ));
        assert!(matches!(
            c.modify(),
            Err(AppError::NoSelection(RowAction::Modify))
        ));
        assert!(matches!(c.query(), Err(AppError::NoSelection(RowAction::Query))));

        let messages: Vec<String> = c.take_notices().into_iter().map(|n| n.message).collect();
        assert_eq!(
            messages,
            vec![
                "Seleccione un producto para eliminar.",
                "Seleccione un producto para modificar.",
                "Seleccione un producto para consultar.",
            ]
        );
        assert_eq!(c.state().listing().len(), 1);
    }

    #[test]
    fn test_delete_of_vanished_row_is_noop() {
        let mut c = coordinator();
        fill(&mut c, "Rosa", "1", "10");
        c.save().unwrap();
        fill(&mut c, "Cactus", "2", "20");
        c.save().unwrap();

        c.state_mut().listing_mut().select(0);
        assert!(c.store().delete(1).unwrap());

        c.delete().unwrap();
        assert_eq!(rows(&c), vec![(2, "Cactus".into(), 2, "20".into())]);
    }

    #[test]
    fn test_modify_leaves_other_rows_alone() {
        let mut c = coordinator();
        for (name, price) in [("Rosa", "10"), ("Cactus", "20"), ("Helecho", "30")] {
            fill(&mut c, name, "1", price);
            c.save().unwrap();
        }

        c.state_mut().listing_mut().select(1);
        fill(&mut c, "Cactus Grande", "7", "45");
        c.modify().unwrap();

        assert_eq!(
            rows(&c),
            vec![
                (1, "Rosa".into(), 1, "10".into()),
                (2, "Cactus Grande".into(), 7, "45".into()),
                (3, "Helecho".into(), 1, "30".into()),
            ]
        );
    }

    #[test]
    fn test_modify_name_check_follows_policy() {
        let store = SqliteStore::open(DbConfig::in_memory()).unwrap();
        store.insert(&ProductDraft::new("Rosa", 1, "10")).unwrap();

        let mut lenient = Coordinator::new(store, ValidationPolicy::default());
        lenient.state_mut().listing_mut().select(0);
        fill(&mut lenient, "Rosa 2", "1", "10");
        lenient.modify().unwrap();
        assert_eq!(rows(&lenient)[0].1, "Rosa 2");

        let store = SqliteStore::open(DbConfig::in_memory()).unwrap();
        store.insert(&ProductDraft::new("Rosa", 1, "10")).unwrap();

        let mut strict = Coordinator::new(store, ValidationPolicy::strict());
        strict.state_mut().listing_mut().select(0);
        fill(&mut strict, "Rosa 2", "1", "10");
        assert!(strict.modify().is_err());
        assert_eq!(rows(&strict)[0].1, "Rosa");
    }

    #[test]
    fn test_modify_still_requires_name_and_price() {
        let mut c = coordinator();
        fill(&mut c, "Rosa", "1", "10");
        c.save().unwrap();

        c.state_mut().listing_mut().select(0);
        fill(&mut c, "Rosa", "1", "");
        assert!(c.modify().is_err());
        assert_eq!(rows(&c), vec![(1, "Rosa".into(), 1, "10".into())]);
    }

    #[test]
    fn test_query_copies_selected_row() {
        let mut c = coordinator();
        fill(&mut c, "Helecho", "-3", "80");
        c.save().unwrap();

        c.state_mut().listing_mut().select(0);
        c.query().unwrap();

        let form = c.state().form();
        assert_eq!(form.name(), "Helecho");
        assert_eq!(form.quantity_text(), "-3");
        assert_eq!(form.price(), "80");
        assert_eq!(c.state().listing().selected_index(), Some(0));
    }

    #[test]
    fn test_export_writes_header_and_rows() {
        let mut c = coordinator();
        for name in ["Rosa", "Cactus", "Helecho"] {
            fill(&mut c, name, "2", "15");
            c.save().unwrap();
        }
        c.take_notices();

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("inventario.csv");
        let written = c.export(target.to_str().unwrap()).unwrap().unwrap();
        assert_eq!(written, target);

        let content = std::fs::read_to_string(&target).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID,Nombre,Cantidad,Precio");
        assert_eq!(lines[1], "1,Rosa,2,15");
        assert_eq!(c.dismiss_notice().unwrap().title, "Guardado");
    }

    #[test]
    fn test_export_appends_extension_and_ignores_blank() {
        let mut c = coordinator();
        let dir = tempfile::tempdir().unwrap();

        assert_eq!(c.export("   ").unwrap(), None);
        assert!(c.pending_notice().is_none());

        let written = c
            .export(dir.path().join("stock").to_str().unwrap())
            .unwrap()
            .unwrap();
        assert_eq!(written, dir.path().join("stock.csv"));
        assert_eq!(std::fs::read_to_string(written).unwrap(), "ID,Nombre,Cantidad,Precio\n");
    }

    #[test]
    fn test_export_failure_is_reported() {
        let mut c = coordinator();
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing").join("inventario.csv");

        let err = c.export(target.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, AppError::Export { .. }));
        assert_eq!(c.dismiss_notice().unwrap().title, "Error al exportar");
    }

    #[test]
    fn test_export_path_rules() {
        assert_eq!(export_path("stock"), PathBuf::from("stock.csv"));
        assert_eq!(export_path("stock.txt"), PathBuf::from("stock.txt"));
        assert_eq!(export_path("inventario."), PathBuf::from("inventario.csv"));
    }

    // =========================================================================
    // Failing store
    // =========================================================================

    struct FailingStore;

    impl InventoryStore for FailingStore {
        fn list_all(&self) -> DbResult<Vec<Product>> {
            Err(DbError::QueryFailed("disk I/O error".into()))
        }

        fn insert(&self, _draft: &ProductDraft) -> DbResult<ProductId> {
            Err(DbError::QueryFailed("database is locked".into()))
        }

        fn delete(&self, _id: ProductId) -> DbResult<bool> {
            Err(DbError::QueryFailed("database is locked".into()))
        }

        fn update(&self, _id: ProductId, _draft: &ProductDraft) -> DbResult<bool> {
            Err(DbError::QueryFailed("database is locked".into()))
        }
    }

    #[test]
    fn test_read_failure_degrades_to_empty_list() {
        let mut c = Coordinator::new(FailingStore, ValidationPolicy::default());

        assert!(c.state().listing().is_empty());
        let notice = c.dismiss_notice().unwrap();
        assert_eq!(notice.severity, Severity::Error);
        assert!(notice.message.starts_with("No se pudo cargar los productos"));
    }

    #[test]
    fn test_corrupt_database_starts_empty_with_one_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("viverolaplace.db");
        std::fs::write(&path, b"not a database at all, only some text bytes").unwrap();

        let store = SqliteStore::open_tolerant(DbConfig::new(&path)).unwrap();
        let mut c = Coordinator::new(store, ValidationPolicy::default());

        assert!(c.state().listing().is_empty());
        let notices = c.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Error);
        assert!(notices[0].message.starts_with("No se pudo cargar los productos"));

        fill(&mut c, "Rosa", "1", "10");
        assert!(matches!(
            c.save(),
            Err(AppError::Store {
                action: Action::Save,
                ..
            })
        ));
    }

    #[test]
    fn test_store_failure_keeps_form() {
        let mut c = Coordinator::new(FailingStore, ValidationPolicy::default());
        c.take_notices();

        let form = c.state_mut().form_mut();
        form.set_name("Rosa");
        form.set_price("10");

        let err = c.save().unwrap_err();
        assert!(matches!(
            err,
            AppError::Store {
                action: Action::Save,
                ..
            }
        ));
        assert_eq!(c.state().form().name(), "Rosa");

        let notices = c.take_notices();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Error al guardar");
    }
}
