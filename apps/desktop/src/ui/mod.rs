//! # View
//!
//! The egui window. Widgets render from `AppState` and report what the user
//! did as [`Intent`]s; the app applies them to the coordinator after the
//! frame is laid out, so no widget closure holds the coordinator mutably
//! while another reads it.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  Archivo ▾  (Guardar como, Salir)                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Nombre   [______________]                                   │
//! │  Cantidad [______________]                                   │
//! │  Precio $ [______________]                                   │
//! │  [Guardar] [Eliminar] [Modificar] [Consultar]                │
//! ├──────────────────────────────────────────────────────────────┤
//! │  ID │ Nombre        │ Cantidad │ Precio                      │
//! │   1 │ Rosa Roja     │       10 │ 150                         │
//! ├──────────────────────────────────────────────────────────────┤
//! │  1 productos · Valor del stock: $1500.00                     │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod dialogs;
mod main_window;

use eframe::egui;
use tracing::debug;

use crate::config::{export_file_name, AppConfig};
use crate::controller::Coordinator;
use crate::store::SqliteStore;

/// What the user asked for during one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Save,
    Delete,
    Modify,
    Query,
    Select(usize),
    OpenExport,
    Export(String),
    CancelExport,
    DismissNotice,
    Exit,
}

/// The eframe application.
pub struct InventoryApp {
    coordinator: Coordinator<SqliteStore>,
    config: AppConfig,
    /// Path being typed into the "Guardar como" prompt, while it is open.
    export_prompt: Option<String>,
}

impl InventoryApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        coordinator: Coordinator<SqliteStore>,
        config: AppConfig,
    ) -> Self {
        InventoryApp {
            coordinator,
            config,
            export_prompt: None,
        }
    }

    fn apply(&mut self, ctx: &egui::Context, intent: Intent) {
        debug!(?intent, "Applying intent");

        // Action outcomes reach the user through the notice queue.
        match intent {
            Intent::Save => {
                let _ = self.coordinator.save();
            }
            Intent::Delete => {
                let _ = self.coordinator.delete();
            }
            Intent::Modify => {
                let _ = self.coordinator.modify();
            }
            Intent::Query => {
                let _ = self.coordinator.query();
            }
            Intent::Select(index) => self.coordinator.state_mut().listing_mut().select(index),
            Intent::OpenExport => {
                let today = chrono::Local::now().date_naive();
                self.export_prompt = Some(export_file_name(today));
            }
            Intent::Export(path) => {
                self.export_prompt = None;
                let _ = self.coordinator.export(&path);
            }
            Intent::CancelExport => self.export_prompt = None,
            Intent::DismissNotice => {
                self.coordinator.dismiss_notice();
            }
            Intent::Exit => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
        }
    }
}

impl eframe::App for InventoryApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut intents = Vec::new();
        let blocked = self.coordinator.pending_notice().is_some() || self.export_prompt.is_some();

        main_window::render(ctx, &mut self.coordinator, &self.config, blocked, &mut intents);

        if let Some(notice) = self.coordinator.pending_notice() {
            dialogs::notice(ctx, notice, &mut intents);
        } else if let Some(path) = self.export_prompt.as_mut() {
            dialogs::export_prompt(ctx, path, &mut intents);
        }

        for intent in intents {
            self.apply(ctx, intent);
        }
    }
}
