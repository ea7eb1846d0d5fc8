//! # App Error Type
//!
//! Unified error type for coordinator actions, and the `Notice` the user
//! sees for it.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Vivero Stock                           │
//! │                                                                         │
//! │  Button click                                                           │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Coordinator action -> AppResult<()>                             │  │
//! │  │         │                                                        │  │
//! │  │  No row selected?   ─── AppError::NoSelection ──────┐            │  │
//! │  │  Bad form field?    ─── AppError::Validation ───────┤            │  │
//! │  │  Store failed?      ─── AppError::Store ────────────┼─► Notice   │  │
//! │  │  File write failed? ─── AppError::Export ───────────┘            │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Modal dialog (Warning or Error). The app stays usable.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;
use vivero_core::validation::{FIELD_NAME, FIELD_PRICE, FIELD_QUANTITY};
use vivero_core::ValidationError;
use vivero_db::DbError;

// =============================================================================
// Actions
// =============================================================================

/// Actions that reach the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Save,
    Delete,
    Modify,
    Load,
}

/// Actions that work on the selected row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    Delete,
    Modify,
    Query,
}

impl RowAction {
    /// Infinitive used in "Seleccione un producto para ..." prompts.
    fn verb(self) -> &'static str {
        match self {
            RowAction::Delete => "eliminar",
            RowAction::Modify => "modificar",
            RowAction::Query => "consultar",
        }
    }
}

// =============================================================================
// AppError
// =============================================================================

/// Failure of a coordinator action.
#[derive(Debug, Error)]
pub enum AppError {
    /// A form field failed validation.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The action needs a selected row and none is selected.
    #[error("no product selected to {}", .0.verb())]
    NoSelection(RowAction),

    /// The store rejected or failed the operation.
    #[error("store error during {action:?}: {source}")]
    Store {
        action: Action,
        #[source]
        source: DbError,
    },

    /// Writing the export file failed.
    #[error("could not write {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// Wraps a store error with the action that hit it.
    pub fn store(action: Action, source: DbError) -> Self {
        AppError::Store { action, source }
    }

    /// The dialog shown for this error.
    pub fn notice(&self) -> Notice {
        match self {
            AppError::Validation(err) => validation_notice(err),
            AppError::NoSelection(action) => Notice::warning(
                "Seleccionar",
                format!("Seleccione un producto para {}.", action.verb()),
            ),
            AppError::Store { action, source } => {
                let (title, lead) = match action {
                    Action::Save => ("Error al guardar", "Ocurrió un error al guardar"),
                    Action::Delete => ("Error al eliminar", "No se pudo eliminar el producto"),
                    Action::Modify => ("Error al modificar", "No se pudo modificar el producto"),
                    Action::Load => ("Error", "No se pudo cargar los productos"),
                };
                Notice::error(title, format!("{}:\n{}", lead, source))
            }
            AppError::Export { source, .. } => Notice::error(
                "Error al exportar",
                format!("No se pudo guardar el archivo:\n{}", source),
            ),
        }
    }
}

fn validation_notice(err: &ValidationError) -> Notice {
    match (err, err.field()) {
        (ValidationError::InvalidFormat { .. }, FIELD_NAME) => Notice::warning(
            "Nombre inválido",
            "El nombre debe contener solo letras, en palabras separadas por un espacio, '_' o '-'.",
        ),
        (ValidationError::InvalidFormat { .. }, FIELD_QUANTITY) => Notice::warning(
            "Cantidad inválida",
            "La cantidad debe ser un número entero.",
        ),
        (ValidationError::Required { .. }, FIELD_NAME | FIELD_PRICE) => {
            Notice::warning("Faltan datos", "Complete todos los campos.")
        }
        _ => Notice::warning("Datos inválidos", err.to_string()),
    }
}

/// Result type for coordinator actions.
pub type AppResult<T> = Result<T, AppError>;

// =============================================================================
// Notice
// =============================================================================

/// How a notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// A blocking message dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice::new(Severity::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice::new(Severity::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice::new(Severity::Error, title, message)
    }

    fn new(severity: Severity, title: impl Into<String>, message: impl Into<String>) -> Self {
        Notice {
            severity,
            title: title.into(),
            message: message.into(),
        }
    }
}

impl From<&AppError> for Notice {
    fn from(err: &AppError) -> Self {
        err.notice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_name_notice() {
        let err: AppError = ValidationError::invalid_format(FIELD_NAME, "letters only").into();
        let notice = err.notice();

        assert_eq!(notice.severity, Severity::Warning);
        assert_eq!(notice.title, "Nombre inválido");
    }

    #[test]
    fn test_missing_price_notice() {
        let err: AppError = ValidationError::required(FIELD_PRICE).into();
        assert_eq!(
            err.notice(),
            Notice::warning("Faltan datos", "Complete todos los campos.")
        );
    }

    #[test]
    fn test_no_selection_notice() {
        let notice = AppError::NoSelection(RowAction::Delete).notice();
        assert_eq!(notice.title, "Seleccionar");
        assert_eq!(notice.message, "Seleccione un producto para eliminar.");
    }

    #[test]
    fn test_load_error_notice() {
        let err = AppError::store(
            Action::Load,
            DbError::ConnectionFailed("file is not a database".into()),
        );
        let notice = err.notice();

        assert_eq!(notice.title, "Error");
        assert!(notice.message.starts_with("No se pudo cargar los productos:\n"));
    }

    #[test]
    fn test_store_error_notice_is_error() {
        let err = AppError::store(Action::Save, DbError::PoolExhausted);
        let notice = Notice::from(&err);

        assert_eq!(notice.severity, Severity::Error);
        assert_eq!(notice.title, "Error al guardar");
        assert!(notice.message.contains("Connection pool exhausted"));
    }

    #[test]
    fn test_export_error_notice() {
        let err = AppError::Export {
            path: PathBuf::from("/nope/inventario.csv"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing dir"),
        };
        assert_eq!(err.notice().title, "Error al exportar");
        assert!(err.to_string().contains("/nope/inventario.csv"));
    }
}
