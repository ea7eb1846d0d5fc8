//! # Domain Types
//!
//! The single inventory entity and the field bundle used to write it.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────┐          ┌─────────────────────┐              │
//! │  │      Product        │          │    ProductDraft     │              │
//! │  │  ─────────────────  │          │  ─────────────────  │              │
//! │  │  id  (store-given)  │          │  name               │              │
//! │  │  name               │ ◄─────── │  quantity           │              │
//! │  │  quantity           │  insert/ │  price              │              │
//! │  │  price (text)       │  update  │                     │              │
//! │  └─────────────────────┘          └─────────────────────┘              │
//! │                                                                         │
//! │  Table: productos(id, nombre, cantidad, precio)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//! `id` is an SQLite `INTEGER PRIMARY KEY AUTOINCREMENT`: assigned on insert,
//! never changed, never reused after a delete.

use serde::{Deserialize, Serialize};

use crate::price::Price;

/// Surrogate key of a product row.
pub type ProductId = i64;

// =============================================================================
// Product
// =============================================================================

/// One inventory item as stored in `productos`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,

    /// Display name (`nombre`).
    pub name: String,

    /// Units in stock (`cantidad`). No range is enforced.
    pub quantity: i64,

    /// Price text (`precio`).
    pub price: Price,
}

impl Product {
    /// The mutable fields of this product.
    pub fn draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.clone(),
            quantity: self.quantity,
            price: self.price.clone(),
        }
    }

    /// Stock value in cents, if the price parses.
    pub fn stock_value_cents(&self) -> Option<i64> {
        crate::price::line_value_cents(&self.price, self.quantity)
    }
}

// =============================================================================
// Product Draft
// =============================================================================

/// Every field of a product except its id.
///
/// Insert and update both write a whole draft: an update overwrites all
/// mutable columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub quantity: i64,
    pub price: Price,
}

impl ProductDraft {
    /// Creates a draft from its three fields.
    pub fn new(name: impl Into<String>, quantity: i64, price: impl Into<Price>) -> Self {
        ProductDraft {
            name: name.into(),
            quantity,
            price: price.into(),
        }
    }

    /// Attaches a store-assigned id.
    pub fn with_id(self, id: ProductId) -> Product {
        Product {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
