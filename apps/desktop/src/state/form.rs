//! # Form State
//!
//! The three input fields. The form doubles as the "new product" input and
//! the scratch buffer Query loads the selected row into.

use vivero_core::validation::{parse_quantity, ValidationResult};
use vivero_core::{Product, ProductDraft, DEFAULT_QUANTITY};

/// Current contents of the Nombre / Cantidad / Precio fields.
///
/// Quantity is kept as the text the user typed and parsed when an action
/// reads the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    name: String,
    quantity: String,
    price: String,
}

impl Default for FormState {
    fn default() -> Self {
        FormState {
            name: String::new(),
            quantity: DEFAULT_QUANTITY.to_string(),
            price: String::new(),
        }
    }
}

impl FormState {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity_text(&self) -> &str {
        &self.quantity
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity.to_string();
    }

    pub fn set_quantity_text(&mut self, quantity: impl Into<String>) {
        self.quantity = quantity.into();
    }

    pub fn set_price(&mut self, price: impl Into<String>) {
        self.price = price.into();
    }

    /// Text buffers for widget binding.
    pub fn name_mut(&mut self) -> &mut String {
        &mut self.name
    }

    pub fn quantity_mut(&mut self) -> &mut String {
        &mut self.quantity
    }

    pub fn price_mut(&mut self) -> &mut String {
        &mut self.price
    }

    /// Reads the form as a draft. Fails only if quantity is not an integer.
    pub fn read(&self) -> ValidationResult<ProductDraft> {
        Ok(ProductDraft::new(
            self.name.clone(),
            parse_quantity(&self.quantity)?,
            self.price.clone(),
        ))
    }

    /// Copies a product's fields into the form.
    pub fn load(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.set_quantity(product.quantity);
        self.price = product.price.as_str().to_string();
    }

    /// Name empty, quantity zero, price empty.
    pub fn clear(&mut self) {
        *self = FormState::default();
    }
}
