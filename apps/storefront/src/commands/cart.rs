//! # Cart Commands
//!
//! Commands for cart manipulation. Every command returns the full cart
//! snapshot with freshly derived totals.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐                                         │
//! │  │  Empty   │────►│ In Cart  │◄──── move_wishlist_to_cart              │
//! │  │  Cart    │     │          │      (wishlist.rs)                      │
//! │  └──────────┘     └──────────┘                                         │
//! │       ▲                │                                                │
//! │       │           add_to_cart                                           │
//! │       │           update_cart_quantity                                  │
//! │       │           remove_from_cart                                      │
//! │       │                │                                                │
//! │       └──── clear_cart ┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState};
use aura_core::{Cart, CartLine, CartTotals, ShippingPolicy, Variant};

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
}

impl CartResponse {
    pub fn new(cart: &Cart, policy: &ShippingPolicy) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: cart.totals(policy),
        }
    }
}

/// Snapshot of the cart under the configured shipping policy.
pub(crate) fn snapshot(cart: &Cart, config: &ConfigState) -> CartResponse {
    CartResponse::new(cart, &config.shipping_policy())
}

/// Gets the current cart contents.
///
/// ## Cart Page
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  SHOPPING CART                                      3 items    │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Classic Black Tee   M / #000000    x2              $99.98     │
/// │  Oversized Graphic Tee  L / #FFFFFF x1              $54.99     │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Subtotal                                          $154.97     │
/// │  Shipping                                             Free     │
/// │  ──────────────────────────────────────────────────────        │
/// │  TOTAL                                             $154.97     │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| snapshot(c, config))
}

/// Adds a product variant to the cart.
///
/// ## Behavior
/// - Same product, size and color already in cart: quantity increases
/// - Otherwise: added as a new line
/// - Missing size/color: the product's first size/color
/// - `quantity` defaults to 1; below 1 leaves the cart unchanged
///
/// ## Errors
/// - `NOT_FOUND` for an unknown product
/// - `VALIDATION_ERROR` when the product is not offered in that size/color
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    config: &ConfigState,
    product_id: &str,
    quantity: Option<i64>,
    size: Option<String>,
    color: Option<String>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(product_id = %product_id, quantity = %quantity, "add_to_cart command");

    let product = catalog.inner().require(product_id)?;

    let default = product
        .default_variant()
        .ok_or_else(|| ApiError::internal(format!("Product {} has no options", product.id)))?;
    let variant = Variant::new(
        size.unwrap_or(default.size),
        color.unwrap_or(default.color),
    );

    if !product.offers(&variant) {
        return Err(ApiError::validation(format!(
            "{} is not available in size {} / color {}",
            product.name, variant.size, variant.color
        )));
    }

    Ok(cart.with_cart_mut(|c| {
        match c.add_item(product, quantity, variant) {
            Some(line_id) => debug!(line_id = %line_id, "Cart line updated"),
            None => debug!("Ignored add with quantity below 1"),
        }
        snapshot(c, config)
    }))
}

/// Replaces a line's quantity. Quantities below 1 and unknown lines are
/// ignored.
pub fn update_cart_quantity(
    cart: &CartState,
    config: &ConfigState,
    line_id: &str,
    quantity: i64,
) -> CartResponse {
    debug!(line_id = %line_id, quantity = %quantity, "update_cart_quantity command");

    cart.with_cart_mut(|c| {
        if !c.update_quantity(line_id, quantity) {
            debug!(line_id = %line_id, "Quantity update ignored");
        }
        snapshot(c, config)
    })
}

/// Removes a line. Unknown lines are ignored.
pub fn remove_from_cart(cart: &CartState, config: &ConfigState, line_id: &str) -> CartResponse {
    debug!(line_id = %line_id, "remove_from_cart command");

    cart.with_cart_mut(|c| {
        c.remove_item(line_id);
        snapshot(c, config)
    })
}

pub fn clear_cart(cart: &CartState, config: &ConfigState) -> CartResponse {
    debug!("clear_cart command");

    cart.with_cart_mut(|c| {
        c.clear();
        snapshot(c, config)
    })
}
