//! # Repository Module
//!
//! Database repository implementations for the storefront.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern                                   │
//! │                                                                         │
//! │  Storefront state / bootstrap                                          │
//! │       │                                                                 │
//! │       │  db.products().list_all()        db.sessions().save(&user)     │
//! │       ▼                                   ▼                             │
//! │  ProductRepository                   SessionRepository                 │
//! │  ├── insert / update                 ├── load                          │
//! │  ├── get_by_id                       ├── save                          │
//! │  ├── list_all                        └── clear                         │
//! │  ├── list_by_category                                                  │
//! │  └── count                                                             │
//! │       │                                   │                             │
//! │       ▼                                   ▼                             │
//! │  products table                      local_storage table ('user' key)  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`product::ProductRepository`] - Catalog rows
//! - [`session::SessionRepository`] - The persisted session record

pub mod product;
pub mod session;
