//! # Vivero Desktop Library
//!
//! Core library for the Vivero Stock desktop application.
//! Wires configuration, the SQLite store and the coordinator into an egui
//! window.
//!
//! ## Module Organization
//! ```text
//! vivero_desktop_lib/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── AppConfig (env overrides + defaults)
//! ├── error.rs        ◄─── AppError and the Notice shown for it
//! ├── store.rs        ◄─── InventoryStore seam + SqliteStore
//! ├── controller.rs   ◄─── Coordinator: actions, refresh, notice queue
//! ├── state/
//! │   ├── mod.rs      ◄─── AppState
//! │   ├── form.rs     ◄─── Nombre / Cantidad / Precio fields
//! │   └── listing.rs  ◄─── Displayed rows + selection
//! └── ui/
//!     ├── mod.rs      ◄─── InventoryApp (eframe::App), Intent dispatch
//!     ├── main_window.rs
//!     └── dialogs.rs  ◄─── Notice dialog, "Guardar como" prompt
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod state;
pub mod store;
pub mod ui;

use std::error::Error;

use eframe::egui;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::AppConfig;
use controller::Coordinator;
use store::SqliteStore;
use ui::InventoryApp;
use vivero_db::DbConfig;

/// Runs the desktop application until the window closes.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter (RUST_LOG)                     │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • VIVERO_DB_PATH / VIVERO_STRICT_MODIFY, else defaults              │
/// │                                                                         │
/// │  3. Open Store ───────────────────────────────────────────────────────► │
/// │     • open SQLite, ensure `productos`; failures are logged, not fatal   │
/// │                                                                         │
/// │  4. Build Coordinator ────────────────────────────────────────────────► │
/// │     • first list refresh                                                │
/// │                                                                         │
/// │  5. Open Window ──────────────────────────────────────────────────────► │
/// │     • eframe event loop until "Salir" or the window is closed           │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();

    info!("Starting Vivero Stock");

    let config = AppConfig::from_env();
    info!(db_path = %config.database_path.display(), "Database path determined");

    if let Some(dir) = config.database_path.parent() {
        if !dir.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(dir) {
                error!(dir = %dir.display(), error = %e, "Could not create data directory");
            }
        }
    }

    // An unusable database file still opens the window, on an empty list
    // with an error notice.
    let store = SqliteStore::open_tolerant(DbConfig::new(config.database_path.clone()))?;
    let coordinator = Coordinator::new(store, config.validation);
    info!(
        products = coordinator.state().listing().len(),
        "Inventory loaded"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size([640.0, 520.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(InventoryApp::new(cc, coordinator, config)))),
    )?;

    info!("Vivero Stock closed");
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=vivero=trace` - Show trace for vivero crates only
/// - Default: INFO, DEBUG for vivero crates
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,vivero=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
