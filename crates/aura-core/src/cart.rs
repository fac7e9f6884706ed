//! # Cart
//!
//! The shopping cart: lines keyed by (product, size, color) and the totals
//! derived from them.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Cart Method               Line Change         │
//! │  ───────────────          ───────────               ───────────         │
//! │                                                                         │
//! │  Add to cart ────────────► add_item() ────────────► qty += n or push    │
//! │                                                                         │
//! │  Change quantity ────────► update_quantity() ─────► qty = n  (n >= 1)   │
//! │                                                                         │
//! │  Click remove ───────────► remove_item() ─────────► retain(id != ..)    │
//! │                                                                         │
//! │  Clear cart ─────────────► clear() ───────────────► lines.clear()       │
//! │                                                                         │
//! │  View cart ──────────────► totals() ──────────────► (read only)         │
//! │                                                                         │
//! │  NOTE: No operation here fails. Bad input leaves the cart unchanged.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Values
//! `item_count`, `total` and shipping are recomputed on every read. Nothing
//! is cached, so they cannot drift from the lines.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Product, Variant};
use crate::{FLAT_SHIPPING_CENTS, FREE_SHIPPING_THRESHOLD_CENTS};

// =============================================================================
// Cart Line
// =============================================================================

/// One line in the cart.
///
/// ## Design Notes
/// `product` is a snapshot taken when the line was created, so the cart keeps
/// rendering the same name and price even if the catalog is reloaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// `{product_id}-{size}-{color}-{unix_millis}`
    pub id: String,

    pub product: Product,

    /// Always >= 1.
    pub quantity: i64,

    pub size: String,

    pub color: String,

    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: &Product, quantity: i64, variant: Variant) -> Self {
        let added_at = Utc::now();
        CartLine {
            id: format!(
                "{}-{}-{}-{}",
                product.id,
                variant.size,
                variant.color,
                added_at.timestamp_millis()
            ),
            product: product.clone(),
            quantity,
            size: variant.size,
            color: variant.color,
            added_at,
        }
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.product.price().multiply_quantity(self.quantity)
    }

    pub fn variant(&self) -> Variant {
        Variant::new(self.size.clone(), self.color.clone())
    }

    fn matches(&self, product_id: &str, variant: &Variant) -> bool {
        self.product.id == product_id && self.size == variant.size && self.color == variant.color
    }
}

// =============================================================================
// Shipping
// =============================================================================

/// Shipping rule shown on the cart page: free above a threshold, otherwise
/// a flat fee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingPolicy {
    /// Subtotal at which shipping becomes free (inclusive).
    pub free_threshold: Money,
    pub flat_fee: Money,
}

impl Default for ShippingPolicy {
    fn default() -> Self {
        ShippingPolicy {
            free_threshold: Money::from_cents(FREE_SHIPPING_THRESHOLD_CENTS),
            flat_fee: Money::from_cents(FLAT_SHIPPING_CENTS),
        }
    }
}

impl ShippingPolicy {
    /// Shipping charged on a non-empty cart with the given subtotal.
    pub fn shipping_for(&self, subtotal: Money) -> Money {
        if subtotal >= self.free_threshold {
            Money::zero()
        } else {
            self.flat_fee
        }
    }
}

/// Cart totals summary for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,
    /// Sum of quantities (the cart badge number).
    pub item_count: i64,
    pub total: Money,
    pub shipping: Money,
    pub grand_total: Money,
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// ## Invariants
/// - At most one line per (product id, size, color)
/// - Every line has quantity >= 1
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<CartLine>,

    /// When the cart was created/last cleared
    #[ts(as = "String")]
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Adds `quantity` of a product variant.
    ///
    /// ## Behavior
    /// - Same product, size and color already in cart: quantity increases
    /// - Otherwise: a new line is appended
    /// - `quantity < 1`: nothing happens
    ///
    /// ## Returns
    /// The id of the line that now holds the variant, or `None` when the
    /// call was ignored.
    pub fn add_item(&mut self, product: &Product, quantity: i64, variant: Variant) -> Option<String> {
        if quantity < 1 {
            return None;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|l| l.matches(&product.id, &variant))
        {
            line.quantity = line.quantity.saturating_add(quantity);
            return Some(line.id.clone());
        }

        let line = CartLine::new(product, quantity, variant);
        let id = line.id.clone();
        self.lines.push(line);
        Some(id)
    }

    /// Removes a line. Unknown ids are ignored.
    ///
    /// ## Returns
    /// Whether a line was removed.
    pub fn remove_item(&mut self, line_id: &str) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        self.lines.len() != initial_len
    }

    /// Replaces a line's quantity.
    ///
    /// Ignored when `quantity < 1` or the line does not exist; removing a
    /// line is always an explicit [`Cart::remove_item`].
    pub fn update_quantity(&mut self, line_id: &str, quantity: i64) -> bool {
        if quantity < 1 {
            return false;
        }

        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn line(&self, line_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == line_id)
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sum of quantities across all lines.
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, l| acc.saturating_add(l.quantity))
    }

    /// Sum of unit price × quantity across all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Derives every displayed total. An empty cart ships for free.
    pub fn totals(&self, policy: &ShippingPolicy) -> CartTotals {
        let total = self.total();
        let shipping = if self.is_empty() {
            Money::zero()
        } else {
            policy.shipping_for(total)
        };

        CartTotals {
            line_count: self.lines.len(),
            item_count: self.item_count(),
            total,
            shipping,
            grand_total: total + shipping,
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProductFlags;

    fn test_product(id: &str, price_cents: i64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            price_cents,
            description: String::new(),
            category: "t-shirts".to_string(),
            image: String::new(),
            images: Vec::new(),
            colors: vec!["#000000".to_string(), "#FFFFFF".to_string()],
            sizes: vec!["S".to_string(), "M".to_string()],
            flags: ProductFlags::default(),
        }
    }

    fn black_m() -> Variant {
        Variant::new("M", "#000000")
    }

    #[test]
    fn test_cart_add_item() {
        let mut cart = Cart::new();
        let product = test_product("1", 4999);

        let id = cart.add_item(&product, 2, black_m()).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.total().cents(), 9998);
        assert!(id.starts_with("1-M-#000000-"));
    }

    #[test]
    fn test_cart_add_same_variant_increases_quantity() {
        let mut cart = Cart::new();
        let product = test_product("1", 4999);

        let first = cart.add_item(&product, 2, black_m()).unwrap();
        let second = cart.add_item(&product, 3, black_m()).unwrap();

        assert_eq!(first, second);
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_cart_different_variant_is_separate_line() {
        let mut cart = Cart::new();
        let product = test_product("1", 4999);

        cart.add_item(&product, 1, black_m());
        cart.add_item(&product, 1, Variant::new("S", "#000000"));
        cart.add_item(&product, 1, Variant::new("M", "#FFFFFF"));

        assert_eq!(cart.lines().len(), 3);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_cart_add_non_positive_quantity_is_ignored() {
        let mut cart = Cart::new();
        let product = test_product("1", 4999);

        assert!(cart.add_item(&product, 0, black_m()).is_none());
        assert!(cart.add_item(&product, -3, black_m()).is_none());
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_remove_item() {
        let mut cart = Cart::new();
        let id = cart.add_item(&test_product("1", 4999), 1, black_m()).unwrap();

        assert!(!cart.remove_item("no-such-line"));
        assert_eq!(cart.lines().len(), 1);

        assert!(cart.remove_item(&id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_cart_update_quantity() {
        let mut cart = Cart::new();
        let id = cart.add_item(&test_product("1", 4999), 2, black_m()).unwrap();

        assert!(cart.update_quantity(&id, 5));
        assert_eq!(cart.line(&id).unwrap().quantity, 5);

        assert!(!cart.update_quantity(&id, 0));
        assert!(!cart.update_quantity(&id, -1));
        assert_eq!(cart.line(&id).unwrap().quantity, 5);

        assert!(!cart.update_quantity("missing", 3));
    }

    #[test]
    fn test_cart_aggregates_match_lines() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 4999), 2, black_m());
        cart.add_item(&test_product("2", 7999), 1, black_m());
        cart.add_item(&test_product("3", 5499), 3, Variant::new("S", "#FFFFFF"));

        let expected_count: i64 = cart.lines().iter().map(|l| l.quantity).sum();
        let expected_total: i64 = cart
            .lines()
            .iter()
            .map(|l| l.product.price_cents * l.quantity)
            .sum();

        assert_eq!(cart.item_count(), expected_count);
        assert_eq!(cart.total().cents(), expected_total);
        assert_eq!(cart.total().cents(), 4999 * 2 + 7999 + 5499 * 3);
    }

    #[test]
    fn test_cart_clear() {
        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 4999), 2, black_m());
        assert!(!cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total().is_zero());
    }

    #[test]
    fn test_shipping_threshold() {
        let policy = ShippingPolicy::default();

        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 10_000), 1, black_m());
        let totals = cart.totals(&policy);
        assert!(totals.shipping.is_zero());
        assert_eq!(totals.grand_total.cents(), 10_000);

        let mut cart = Cart::new();
        cart.add_item(&test_product("1", 9_999), 1, black_m());
        let totals = cart.totals(&policy);
        assert_eq!(totals.shipping.cents(), 1_000);
        assert_eq!(totals.grand_total.cents(), 10_999);
    }

    #[test]
    fn test_empty_cart_totals() {
        let totals = Cart::new().totals(&ShippingPolicy::default());
        assert_eq!(totals.line_count, 0);
        assert_eq!(totals.item_count, 0);
        assert!(totals.shipping.is_zero());
        assert!(totals.grand_total.is_zero());
    }

    #[test]
    fn test_line_snapshot_survives_product_change() {
        let mut cart = Cart::new();
        let mut product = test_product("1", 4999);
        cart.add_item(&product, 1, black_m());

        product.price_cents = 1;
        assert_eq!(cart.total().cents(), 4999);
    }
}
