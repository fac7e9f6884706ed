//! # Product Commands
//!
//! Catalog browsing: listings, product detail, search and the shop filter.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  User types "Hoodie"                                                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products("Hoodie")                                             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  Blank query?       ──► []                │                         │
//! │  │  Otherwise: lowercase substring match     │                         │
//! │  │  over name, description, category         │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Return Vec<Product> in catalog order                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::CatalogState;
use aura_core::{Product, ProductFilter};

fn owned(products: Vec<&Product>) -> Vec<Product> {
    products.into_iter().cloned().collect()
}

/// Lists the whole catalog in catalog order.
pub fn list_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("list_products command");
    catalog.inner().products().to_vec()
}

/// Gets a single product for the detail page.
///
/// ## Returns
/// The product if found, or `NOT_FOUND`
pub fn get_product(catalog: &CatalogState, id: &str) -> Result<Product, ApiError> {
    debug!(id = %id, "get_product command");
    Ok(catalog.inner().require(id)?.clone())
}

pub fn get_products_by_category(catalog: &CatalogState, category: &str) -> Vec<Product> {
    debug!(category = %category, "get_products_by_category command");
    owned(catalog.inner().by_category(category))
}

/// Home page "featured" row.
pub fn get_featured_products(catalog: &CatalogState) -> Vec<Product> {
    debug!("get_featured_products command");
    owned(catalog.inner().featured())
}

pub fn get_bestsellers(catalog: &CatalogState) -> Vec<Product> {
    debug!("get_bestsellers command");
    owned(catalog.inner().bestsellers())
}

pub fn get_new_arrivals(catalog: &CatalogState) -> Vec<Product> {
    debug!("get_new_arrivals command");
    owned(catalog.inner().new_arrivals())
}

/// Distinct categories in first-seen order (the shop sidebar).
pub fn get_categories(catalog: &CatalogState) -> Vec<String> {
    debug!("get_categories command");
    catalog
        .inner()
        .categories()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Case-insensitive search over name, description and category.
///
/// ## Arguments
/// * `query` - Search term of any length; blank returns no results
pub fn search_products(catalog: &CatalogState, query: &str) -> Vec<Product> {
    let start = Instant::now();
    debug!(query = %query, "search_products command");

    let results = owned(catalog.inner().search(query));

    info!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = results.len(),
        query = %query,
        "search_products complete"
    );

    results
}

/// Applies the shop page filter: category, price range, sort order.
pub fn filter_products(catalog: &CatalogState, filter: &ProductFilter) -> Vec<Product> {
    debug!(?filter, "filter_products command");
    owned(catalog.inner().filter(filter))
}
