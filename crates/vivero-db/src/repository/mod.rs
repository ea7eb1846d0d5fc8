//! # Repository Module
//!
//! Database repository implementations for Vivero Stock.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Coordinator (through its InventoryStore adapter)                      │
//! │       │                                                                 │
//! │       │  db.products().list_all()                                      │
//! │       ▼                                                                 │
//! │  ProductRepository                                                     │
//! │  ├── list_all(&self)                                                   │
//! │  ├── insert(&self, draft)                                              │
//! │  ├── update(&self, id, draft)                                          │
//! │  ├── delete(&self, id)                                                 │
//! │  └── get_by_id(&self, id) / count(&self)                               │
//! │       │                                                                 │
//! │       │  One SQL statement per call                                    │
//! │       ▼                                                                 │
//! │  SQLite Database                                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`ProductRepository`](product::ProductRepository) - Product CRUD

pub mod product;
