//! # Wishlist
//!
//! A set of product snapshots keyed by product id.
//!
//! ```text
//!   heart icon ──► toggle(product) ──► present? ──yes──► remove(id)
//!                                          │
//!                                          no
//!                                          ▼
//!                                       add(product)
//! ```
//!
//! Membership checks are linear; a wishlist holds a handful of products.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::Cart;
use crate::types::Product;

/// The wishlist.
///
/// ## Invariants
/// - At most one entry per product id
/// - Entries keep insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Wishlist {
    items: Vec<Product>,
}

impl Wishlist {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a product unless one with the same id is already present.
    ///
    /// ## Returns
    /// Whether the product was added.
    pub fn add(&mut self, product: &Product) -> bool {
        if self.contains(&product.id) {
            return false;
        }
        self.items.push(product.clone());
        true
    }

    /// Removes a product by id. Unknown ids are ignored.
    pub fn remove(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|p| p.id != product_id);
        self.items.len() != initial_len
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|p| p.id == product_id)
    }

    /// Flips membership.
    ///
    /// ## Returns
    /// `true` if the product is in the wishlist afterwards.
    pub fn toggle(&mut self, product: &Product) -> bool {
        if self.remove(&product.id) {
            false
        } else {
            self.add(product)
        }
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Adds every wishlist product to the cart, one of each, in its default
    /// variant. The wishlist itself is left as is.
    ///
    /// ## Returns
    /// Number of products added. Products without a default variant are
    /// skipped.
    pub fn move_all_to(&self, cart: &mut Cart) -> usize {
        self.items
            .iter()
            .filter_map(|product| {
                let variant = product.default_variant()?;
                cart.add_item(product, 1, variant)
            })
            .count()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ProductFlags, Variant};

    fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents: 5999,
            description: String::new(),
            category: "hoodies".to_string(),
            image: String::new(),
            images: Vec::new(),
            colors: vec!["#556B2F".to_string(), "#000000".to_string()],
            sizes: vec!["L".to_string(), "XL".to_string()],
            flags: ProductFlags::default(),
        }
    }

    #[test]
    fn test_add_is_idempotent() {
        let mut wishlist = Wishlist::new();
        assert!(wishlist.add(&product("1")));
        assert!(!wishlist.add(&product("1")));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_remove_and_contains() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&product("1"));
        wishlist.add(&product("2"));

        assert!(wishlist.contains("2"));
        assert!(wishlist.remove("2"));
        assert!(!wishlist.contains("2"));
        assert!(!wishlist.remove("2"));
        assert_eq!(wishlist.len(), 1);
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&product("1"));
        let before = wishlist.clone();

        assert!(wishlist.toggle(&product("2")));
        assert!(!wishlist.toggle(&product("2")));
        assert_eq!(wishlist, before);

        assert!(!wishlist.toggle(&product("1")));
        assert!(wishlist.toggle(&product("1")));
        assert!(wishlist.contains("1"));
    }

    #[test]
    fn test_move_all_uses_default_variant() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&product("1"));
        wishlist.add(&product("2"));

        let mut cart = Cart::new();
        assert_eq!(wishlist.move_all_to(&mut cart), 2);

        assert_eq!(cart.item_count(), 2);
        for line in cart.lines() {
            assert_eq!(line.quantity, 1);
            assert_eq!(line.variant(), Variant::new("L", "#556B2F"));
        }
        assert_eq!(wishlist.len(), 2);
    }

    #[test]
    fn test_move_all_merges_with_existing_lines() {
        let mut wishlist = Wishlist::new();
        wishlist.add(&product("1"));

        let mut cart = Cart::new();
        cart.add_item(&product("1"), 2, Variant::new("L", "#556B2F"));
        wishlist.move_all_to(&mut cart);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 3);
    }
}
