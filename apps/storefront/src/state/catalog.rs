//! # Catalog State
//!
//! The product catalog, loaded once from the database at startup.
//!
//! ## Thread Safety
//! Read-only after initialization, so no lock is needed.

use aura_core::{Catalog, CoreResult, Product};

/// Wrapper around the read-only [`Catalog`].
#[derive(Debug)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Validates `products` into a catalog.
    pub fn from_products(products: Vec<Product>) -> CoreResult<Self> {
        Ok(CatalogState::new(Catalog::new(products)?))
    }

    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}
