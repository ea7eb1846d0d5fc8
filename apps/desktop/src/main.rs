//! # Vivero Stock Entry Point
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Vivero Stock                                   │
//! │                                                                         │
//! │  main.rs ────► calls vivero_desktop_lib::run()                          │
//! │                                                                         │
//! │  lib.rs ─────► logging, config, store, coordinator, egui window         │
//! │                                                                         │
//! │  SQLite ─────► viverolaplace.db (one table: productos)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

// Prevents an additional console window on Windows in release
#![cfg_attr(
    all(not(debug_assertions), target_os = "windows"),
    windows_subsystem = "windows"
)]

use std::process::ExitCode;

fn main() -> ExitCode {
    match vivero_desktop_lib::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "Vivero Stock failed to start");
            eprintln!("vivero-stock: {}", err);
            ExitCode::FAILURE
        }
    }
}
