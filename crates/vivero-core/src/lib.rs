//! # vivero-core: Pure Domain Logic for Vivero Stock
//!
//! Everything the inventory manager knows about a product that does not
//! touch a file, a database or a window.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Vivero Stock Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    egui window (apps/desktop)                   │   │
//! │  │    Form ──► Buttons ──► Product list ──► "Guardar como" CSV     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    Coordinator (apps/desktop)                   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ vivero-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   price   │  │ validation│  │  export   │  │   │
//! │  │   │  Product  │  │   Price   │  │ name rule │  │ CSV text  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO WINDOW • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    vivero-db (Database Layer)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - `Product` and `ProductDraft`
//! - [`price`] - `Price`, stored as text, parsed on demand
//! - [`error`] - Domain error types
//! - [`validation`] - Form rules (name pattern, required fields, quantity)
//! - [`export`] - CSV rendering of the displayed list
//!
//! ## Example Usage
//!
//! ```rust
//! use vivero_core::validation::validate_product_name;
//!
//! assert!(validate_product_name("Rosa Roja").is_ok());
//! assert!(validate_product_name("Rosa123").is_err());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod export;
pub mod price;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::ValidationError;
pub use price::Price;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Quantity used when the form leaves the field blank.
pub const DEFAULT_QUANTITY: i64 = 0;
