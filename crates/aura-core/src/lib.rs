//! # aura-core: Pure State Model for the Aura Storefront
//!
//! This crate holds the storefront's state model as plain data and pure
//! functions: the catalog, the cart, the wishlist and the mock credential
//! rules behind the session. Nothing in here touches a database, a clock-driven
//! timer or the network.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Aura Storefront Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Frontend (React)                             │   │
//! │  │    Products ──► Product Detail ──► Cart ──► Wishlist ──► Login │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (commands)                      │   │
//! │  │    add_to_cart, toggle_wishlist, login, search_products, ...    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ aura-core (THIS CRATE) ★                        │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │  types  │ │ catalog │ │  cart   │ │ wishlist │ │  auth  │  │   │
//! │  │   │ Product │ │ filter  │ │CartLine │ │ set by id│ │ mock   │  │   │
//! │  │   │  User   │ │ search  │ │ totals  │ │  toggle  │ │ login  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └──────────┘ └────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 aura-db (Database Layer)                        │   │
//! │  │          products table, persisted session record               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, User, Order, ...)
//! - [`money`] - Money type with integer arithmetic
//! - [`catalog`] - Product lookup, filtering, sorting and search
//! - [`cart`] - Cart lines and derived totals
//! - [`wishlist`] - Wishlist with set semantics keyed by product id
//! - [`auth`] - Mock credential rules and profile merging
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use aura_core::cart::Cart;
//! use aura_core::types::{Product, ProductFlags, Variant};
//!
//! let tee = Product {
//!     id: "1".to_string(),
//!     name: "Classic Black Tee".to_string(),
//!     price_cents: 4999,
//!     description: String::new(),
//!     category: "t-shirts".to_string(),
//!     image: String::new(),
//!     images: Vec::new(),
//!     colors: vec!["#000000".to_string()],
//!     sizes: vec!["M".to_string()],
//!     flags: ProductFlags::default(),
//! };
//!
//! let mut cart = Cart::new();
//! cart.add_item(&tee, 2, Variant::new("M", "#000000"));
//! cart.add_item(&tee, 1, Variant::new("M", "#000000"));
//!
//! assert_eq!(cart.lines().len(), 1);
//! assert_eq!(cart.item_count(), 3);
//! assert_eq!(cart.total().cents(), 14997);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals, ShippingPolicy};
pub use catalog::{Catalog, ProductFilter, SortOrder};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::Wishlist;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Cart subtotal at which shipping becomes free ($100.00).
pub const FREE_SHIPPING_THRESHOLD_CENTS: i64 = 10_000;

/// Flat shipping fee charged below the free-shipping threshold ($10.00).
pub const FLAT_SHIPPING_CENTS: i64 = 1_000;
