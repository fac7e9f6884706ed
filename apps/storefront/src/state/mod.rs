//! # State Module
//!
//! Manages application state for the storefront.
//!
//! ## Why Multiple State Types?
//! Instead of a single global store containing everything, each store has
//! its own state type and commands declare exactly what they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront::bootstrap                      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │     ┌──────────────┬─────────┼─────────┬──────────────┐                │
//! │     ▼              ▼         ▼         ▼              ▼                │
//! │  ┌────────┐  ┌──────────┐ ┌────────┐ ┌──────────┐ ┌────────────┐       │
//! │  │DbState │  │Catalog   │ │Cart    │ │Wishlist  │ │Session     │       │
//! │  │        │  │State     │ │State   │ │State     │ │State<S>    │       │
//! │  │ pool   │  │read-only │ │Arc<    │ │Arc<      │ │RwLock<     │       │
//! │  │        │  │          │ │ Mutex> │ │ Mutex>   │ │ Option<    │       │
//! │  │        │  │          │ │        │ │          │ │  User>>    │       │
//! │  └────────┘  └──────────┘ └────────┘ └──────────┘ └────────────┘       │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • CatalogState, ConfigState: Read-only after initialization           │
//! │  • CartState, WishlistState: Arc<Mutex<T>>, poisoning recovered        │
//! │  • SessionState: async RwLock, held across the storage write           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod db;
mod session;
mod wishlist;

pub use cart::CartState;
pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
pub use db::DbState;
pub use session::{MemorySessionStorage, SessionError, SessionState, SessionStorage};
pub use wishlist::WishlistState;
