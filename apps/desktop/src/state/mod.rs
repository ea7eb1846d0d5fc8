//! # State Module
//!
//! Everything the window shows, owned by one struct and handed to the
//! coordinator at construction.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Coordinator (owns AppState)                     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │               ┌──────────────┴──────────────┐                           │
//! │               ▼                             ▼                           │
//! │  ┌────────────────────────┐   ┌────────────────────────────┐           │
//! │  │      FormState         │   │      ListingState          │           │
//! │  │                        │   │                            │           │
//! │  │  name     (text)       │   │  rows: Vec<Product>        │           │
//! │  │  quantity (text → i64) │   │  selected: Option<usize>   │           │
//! │  │  price    (text)       │   │                            │           │
//! │  └────────────────────────┘   └────────────────────────────┘           │
//! │                                                                         │
//! │  SINGLE THREAD: only the event loop touches this state, no locks.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod form;
mod listing;

pub use form::FormState;
pub use listing::ListingState;

/// Form plus list projection.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    form: FormState,
    listing: ListingState,
}

impl AppState {
    pub fn new() -> Self {
        AppState::default()
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn listing(&self) -> &ListingState {
        &self.listing
    }

    pub fn listing_mut(&mut self) -> &mut ListingState {
        &mut self.listing
    }
}
