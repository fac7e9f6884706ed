//! # Catalog
//!
//! The product list and every read-only query the storefront runs against it.
//!
//! ## Query Surface
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Queries                                  │
//! │                                                                         │
//! │  Product detail page ────► get(id)                                     │
//! │  Home page rails ────────► featured() / bestsellers() / new_arrivals() │
//! │  Category nav ───────────► by_category(slug), categories()             │
//! │  Search modal ───────────► search(query)                               │
//! │  Products page ──────────► filter(&ProductFilter)                      │
//! │                             ├── category (optional)                    │
//! │                             ├── price range (inclusive, cents)         │
//! │                             └── sort: newest | price ↑ | price ↓       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog is small (tens of products), so every query is a linear scan.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;
use crate::validation::{normalize_search_query, validate_product};

// =============================================================================
// Filter
// =============================================================================

/// Sort order offered on the products page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Catalog order.
    #[default]
    Newest,
    PriceLowHigh,
    PriceHighLow,
}

/// Products page filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductFilter {
    /// Restrict to one category slug.
    pub category: Option<String>,
    /// Inclusive lower bound in cents.
    pub min_price_cents: i64,
    /// Inclusive upper bound in cents.
    pub max_price_cents: i64,
    pub sort: SortOrder,
}

impl Default for ProductFilter {
    /// All categories, $0 to $200, newest first.
    fn default() -> Self {
        ProductFilter {
            category: None,
            min_price_cents: 0,
            max_price_cents: 20_000,
            sort: SortOrder::Newest,
        }
    }
}

impl ProductFilter {
    fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if &product.category != category {
                return false;
            }
        }
        (self.min_price_cents..=self.max_price_cents).contains(&product.price_cents)
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable, validated product list.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog, rejecting the first product that breaks an invariant.
    ///
    /// ## Errors
    /// - [`CoreError::DuplicateProduct`] when two products share an id
    /// - [`CoreError::Validation`] for empty option lists, negative prices
    ///   or missing names
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());

        for product in &products {
            validate_product(product)?;
            if !seen.insert(product.id.as_str()) {
                return Err(CoreError::DuplicateProduct(product.id.clone()));
            }
        }

        Ok(Catalog { products })
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// All products in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Looks up a product by id.
    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but a miss is an error.
    pub fn require(&self, id: &str) -> CoreResult<&Product> {
        self.get(id)
            .ok_or_else(|| CoreError::ProductNotFound(id.to_string()))
    }

    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .collect()
    }

    pub fn featured(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.flags.featured).collect()
    }

    pub fn bestsellers(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.flags.bestseller).collect()
    }

    pub fn new_arrivals(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.flags.is_new).collect()
    }

    /// Distinct category slugs, in the order they first appear.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category.as_str()) {
                categories.push(&product.category);
            }
        }
        categories
    }

    /// Case-insensitive substring search over name, description and category.
    ///
    /// A blank query returns nothing (the search modal shows no results
    /// until something is typed). Queries of any length are accepted.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = normalize_search_query(query);
        if needle.is_empty() {
            return Vec::new();
        }

        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.description.to_lowercase().contains(&needle)
                    || p.category.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Applies the products page filter. Sorting is stable, so products with
    /// equal prices keep their catalog order.
    pub fn filter(&self, filter: &ProductFilter) -> Vec<&Product> {
        let mut result: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .collect();

        match filter.sort {
            SortOrder::Newest => {}
            SortOrder::PriceLowHigh => result.sort_by_key(|p| p.price_cents),
            SortOrder::PriceHighLow => {
                result.sort_by(|a, b| b.price_cents.cmp(&a.price_cents))
            }
        }

        result
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
