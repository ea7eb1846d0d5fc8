//! # CSV Export
//!
//! Renders the displayed product list as the "Guardar como" CSV text.
//!
//! ## Format
//! ```text
//! ID,Nombre,Cantidad,Precio      ← header, always first
//! 1,Rosa Roja,10,150             ← one line per displayed row
//! 3,Helecho,2,99.90
//! ```
//!
//! Fields are joined with `,` as-is: no quoting, no escaping. Every line,
//! the last one included, ends in `\n`, so `N` rows give `N + 1` lines.

use crate::types::Product;

/// Header line of the export file (without the line terminator).
pub const CSV_HEADER: &str = "ID,Nombre,Cantidad,Precio";

/// Extension appended to export paths that have none.
pub const CSV_EXTENSION: &str = "csv";

/// Renders one data line (without the line terminator).
pub fn csv_line(product: &Product) -> String {
    format!(
        "{},{},{},{}",
        product.id, product.name, product.quantity, product.price
    )
}

/// Renders the header plus one line per product, in the given order.
///
/// ## Example
/// ```rust
/// use vivero_core::export::render_csv;
/// use vivero_core::ProductDraft;
///
/// let rows = vec![ProductDraft::new("Rosa Roja", 10, "150").with_id(1)];
/// assert_eq!(render_csv(&rows), "ID,Nombre,Cantidad,Precio\n1,Rosa Roja,10,150\n");
/// ```
pub fn render_csv(products: &[Product]) -> String {
    let mut out = String::with_capacity(CSV_HEADER.len() + 1 + products.len() * 32);
    out.push_str(CSV_HEADER);
    out.push('\n');

    for product in products {
        out.push_str(&csv_line(product));
        out.push('\n');
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
