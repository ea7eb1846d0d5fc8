//! # Configuration
//!
//! Application configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`VIVERO_*`), for development
//! 2. Defaults (this file)
//!
//! With no variables set the app behaves exactly as shipped: an existing
//! `viverolaplace.db` in the working directory is used as is, otherwise the
//! database lives in the platform data directory. Modify does not re-check
//! the name pattern.
//!
//! Read-only after startup, so no locking.

use chrono::NaiveDate;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::warn;

use vivero_core::export::CSV_EXTENSION;
use vivero_core::price::format_cents;
use vivero_core::validation::ValidationPolicy;

/// Database file name, in the data directory or the working directory.
pub const DATABASE_FILE_NAME: &str = "viverolaplace.db";

/// Overrides the database path.
pub const ENV_DB_PATH: &str = "VIVERO_DB_PATH";

/// `1`/`true`/`yes` re-checks the name pattern on Modify.
pub const ENV_STRICT_MODIFY: &str = "VIVERO_STRICT_MODIFY";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite file holding the `productos` table.
    pub database_path: PathBuf,

    /// Main window title.
    pub window_title: String,

    /// Currency symbol for the stock value line.
    pub currency_symbol: String,

    /// Validation switches for Save / Modify.
    pub validation: ValidationPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            database_path: default_database_path(),
            window_title: "Vivero LaPlace Stock".to_string(),
            currency_symbol: "$".to_string(),
            validation: ValidationPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Creates a config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `VIVERO_DB_PATH`: Override the database file
    /// - `VIVERO_STRICT_MODIFY`: Apply the name pattern on Modify
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`AppConfig::from_env`] with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = AppConfig::default();

        if let Some(path) = lookup(ENV_DB_PATH).filter(|p| !p.trim().is_empty()) {
            config.database_path = PathBuf::from(path);
        }

        if let Some(flag) = lookup(ENV_STRICT_MODIFY) {
            match parse_flag(&flag) {
                Some(strict) => config.validation.check_name_on_modify = strict,
                None => warn!(value = %flag, "Ignoring unrecognized {}", ENV_STRICT_MODIFY),
            }
        }

        config
    }

    /// Formats a cent amount with the configured symbol.
    ///
    /// ## Example
    /// ```rust,ignore
    /// let config = AppConfig::default();
    /// assert_eq!(config.format_currency(1234), "$12.34");
    /// ```
    pub fn format_currency(&self, cents: i64) -> String {
        format_cents(cents, &self.currency_symbol)
    }
}

/// Suggested file name for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("inventario-{}.{}", date.format("%Y%m%d"), CSV_EXTENSION)
}

/// Where the database lives when `VIVERO_DB_PATH` is not set.
///
/// An existing [`DATABASE_FILE_NAME`] in the working directory wins, so
/// inventories kept next to the program keep loading. Otherwise the file
/// goes in the platform data directory.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/ar.laplace.vivero/viverolaplace.db`
/// - **Windows**: `%APPDATA%\laplace\vivero\data\viverolaplace.db`
/// - **Linux**: `~/.local/share/vivero/viverolaplace.db`
///
/// Falls back to the working directory when no home directory is known.
pub fn default_database_path() -> PathBuf {
    let working_dir = std::env::current_dir().unwrap_or_default();
    let dirs = ProjectDirs::from("ar", "laplace", "vivero");
    resolve_database_path(&working_dir, dirs.as_ref().map(|d| d.data_dir()))
}

fn resolve_database_path(working_dir: &Path, data_dir: Option<&Path>) -> PathBuf {
    let local = working_dir.join(DATABASE_FILE_NAME);
    if local.is_file() {
        return local;
    }

    match data_dir {
        Some(dir) => dir.join(DATABASE_FILE_NAME),
        None => PathBuf::from(DATABASE_FILE_NAME),
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
