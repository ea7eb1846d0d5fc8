//! # Listing State
//!
//! The on-screen product list: a projection of the table that is thrown
//! away and rebuilt after every mutation. Never the source of truth.
//!
//! ## Selection
//! ```text
//! rows:     [ #1 Rosa Roja ][ #3 Helecho ][ #4 Cactus ]
//! selected:                  ▲ Some(1)  (row index, not product id)
//!
//! replace(rows) ──► selection cleared
//! ```

use vivero_core::{Product, ProductId};

/// Rows currently displayed, plus the selected row.
#[derive(Debug, Clone, Default)]
pub struct ListingState {
    rows: Vec<Product>,
    selected: Option<usize>,
}

impl ListingState {
    /// Rows in display order.
    pub fn rows(&self) -> &[Product] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Discards the projection and shows `rows` instead.
    pub fn replace(&mut self, rows: Vec<Product>) {
        self.rows = rows;
        self.selected = None;
    }

    /// Empties the list.
    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Selects the row at `index`. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: usize) {
        self.selected = (index < self.rows.len()).then_some(index);
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The selected row as displayed.
    pub fn selected(&self) -> Option<&Product> {
        self.selected.and_then(|i| self.rows.get(i))
    }

    pub fn selected_id(&self) -> Option<ProductId> {
        self.selected().map(|p| p.id)
    }

    /// Sum of quantity × price over rows whose price parses, in cents.
    ///
    /// Returns the total and the number of rows left out.
    pub fn stock_value_cents(&self) -> (i64, usize) {
        self.rows
            .iter()
            .fold((0i64, 0usize), |(total, skipped), p| match p.stock_value_cents() {
                Some(v) => (total.saturating_add(v), skipped),
                None => (total, skipped + 1),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vivero_core::ProductDraft;

    fn rows() -> Vec<Product> {
        vec![
            ProductDraft::new("Rosa Roja", 10, "150").with_id(1),
            ProductDraft::new("Helecho", 2, "a consultar").with_id(3),
            ProductDraft::new("Cactus", 4, "25.50").with_id(4),
        ]
    }

    #[test]
    fn test_select_and_read_back() {
        let mut listing = ListingState::default();
        listing.replace(rows());

        assert_eq!(listing.selected(), None);

        listing.select(1);
        assert_eq!(listing.selected_index(), Some(1));
        assert_eq!(listing.selected_id(), Some(3));

        listing.select(10);
        assert_eq!(listing.selected(), None);
    }

    #[test]
    fn test_replace_clears_selection() {
        let mut listing = ListingState::default();
        listing.replace(rows());
        listing.select(0);

        listing.replace(rows());
        assert_eq!(listing.selected_id(), None);
        assert_eq!(listing.len(), 3);
    }

    #[test]
    fn test_stock_value_skips_unparsable_prices() {
        let mut listing = ListingState::default();
        listing.replace(rows());

        assert_eq!(listing.stock_value_cents(), (150000 + 10200, 1));

        listing.clear();
        assert!(listing.is_empty());
        assert_eq!(listing.stock_value_cents(), (0, 0));
    }
}
