//! # Commands Module
//!
//! All operations exposed to the storefront UI.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog listings, search, filter
//! ├── cart.rs      ◄─── Cart manipulation
//! ├── wishlist.rs  ◄─── Wishlist manipulation
//! ├── session.rs   ◄─── Login, register, logout, profile
//! └── config.rs    ◄─── Configuration retrieval, price formatting
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  UI event (click "Add to Cart")                                         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  commands::cart::add_to_cart(                                           │
//! │      &storefront.catalog,   ◄── only the state it needs                │
//! │      &storefront.cart,                                                  │
//! │      &storefront.config,                                                │
//! │      "1", Some(2), Some("M"), Some("#000000"),                          │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  UI re-renders from the returned snapshot                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn search_products(catalog: &CatalogState, query: &str)
//!
//! // Only needs the cart and config (for shipping)
//! fn get_cart(cart: &CartState, config: &ConfigState)
//!
//! // Session commands are async (simulated latency)
//! async fn login<S: SessionStorage>(session: &SessionState<S>, ...)
//! ```

pub mod cart;
pub mod config;
pub mod product;
pub mod session;
pub mod wishlist;

#[cfg(test)]
pub(crate) mod test_support {
    use aura_core::{Product, ProductFlags};

    use crate::state::CatalogState;

    fn product(
        id: &str,
        name: &str,
        price_cents: i64,
        category: &str,
        flags: ProductFlags,
    ) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            price_cents,
            description: format!("{} from the Aura collection", name),
            category: category.to_string(),
            image: format!("/images/products/{}/main.jpg", id),
            images: vec![format!("/images/products/{}/main.jpg", id)],
            colors: vec!["#000000".to_string(), "#FFFFFF".to_string()],
            sizes: vec!["S".to_string(), "M".to_string(), "L".to_string()],
            flags,
        }
    }

    /// Two tees and a hoodie.
    pub fn demo_catalog() -> CatalogState {
        CatalogState::from_products(vec![
            product(
                "1",
                "Classic Black Tee",
                4999,
                "t-shirts",
                ProductFlags {
                    is_new: false,
                    featured: true,
                    bestseller: true,
                },
            ),
            product(
                "2",
                "Minimalist Logo Hoodie",
                7999,
                "hoodies",
                ProductFlags {
                    is_new: false,
                    featured: true,
                    bestseller: true,
                },
            ),
            product(
                "3",
                "Oversized Graphic Tee",
                5499,
                "t-shirts",
                ProductFlags {
                    is_new: true,
                    featured: false,
                    bestseller: true,
                },
            ),
        ])
        .expect("demo catalog is valid")
    }
}
