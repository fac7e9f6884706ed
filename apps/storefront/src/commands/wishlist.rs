//! # Wishlist Commands
//!
//! Saved products, keyed by product id.

use serde::Serialize;
use tracing::debug;

use crate::commands::cart::{snapshot, CartResponse};
use crate::error::ApiError;
use crate::state::{CartState, CatalogState, ConfigState, WishlistState};
use aura_core::{Product, Wishlist};

/// Wishlist response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub items: Vec<Product>,
    pub count: usize,
}

impl From<&Wishlist> for WishlistResponse {
    fn from(wishlist: &Wishlist) -> Self {
        WishlistResponse {
            items: wishlist.items().to_vec(),
            count: wishlist.len(),
        }
    }
}

pub fn get_wishlist(wishlist: &WishlistState) -> WishlistResponse {
    debug!("get_wishlist command");
    wishlist.with_wishlist(|w| WishlistResponse::from(w))
}

/// Saves a product. Already-saved products are left as they are.
///
/// ## Errors
/// `NOT_FOUND` for an unknown product
pub fn add_to_wishlist(
    catalog: &CatalogState,
    wishlist: &WishlistState,
    product_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_wishlist command");
    let product = catalog.inner().require(product_id)?;

    Ok(wishlist.with_wishlist_mut(|w| {
        w.add(product);
        WishlistResponse::from(&*w)
    }))
}

/// Unsaves a product. Unknown ids are ignored.
pub fn remove_from_wishlist(wishlist: &WishlistState, product_id: &str) -> WishlistResponse {
    debug!(product_id = %product_id, "remove_from_wishlist command");

    wishlist.with_wishlist_mut(|w| {
        w.remove(product_id);
        WishlistResponse::from(&*w)
    })
}

pub fn is_in_wishlist(wishlist: &WishlistState, product_id: &str) -> bool {
    wishlist.with_wishlist(|w| w.contains(product_id))
}

/// The heart button: saves or unsaves.
///
/// ## Returns
/// Whether the product is saved afterwards
pub fn toggle_wishlist(
    catalog: &CatalogState,
    wishlist: &WishlistState,
    product_id: &str,
) -> Result<bool, ApiError> {
    debug!(product_id = %product_id, "toggle_wishlist command");
    let product = catalog.inner().require(product_id)?;

    Ok(wishlist.with_wishlist_mut(|w| w.toggle(product)))
}

/// Adds every saved product to the cart (quantity 1, first size and color).
/// The wishlist itself is kept.
pub fn move_wishlist_to_cart(
    wishlist: &WishlistState,
    cart: &CartState,
    config: &ConfigState,
) -> CartResponse {
    debug!("move_wishlist_to_cart command");

    let saved = wishlist.with_wishlist(Wishlist::clone);

    cart.with_cart_mut(|c| {
        let moved = saved.move_all_to(c);
        debug!(moved, "Moved wishlist items to cart");
        snapshot(c, config)
    })
}
