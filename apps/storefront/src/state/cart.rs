//! # Cart State
//!
//! Holds the shopping cart for the running storefront.
//!
//! ## Thread Safety
//! The cart is wrapped in `Arc<Mutex<T>>` because:
//! 1. Multiple commands may access/modify the cart
//! 2. Only one command should modify the cart at a time
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Command                  Cart State Change    │
//! │  ───────────────          ───────                  ─────────────────    │
//! │                                                                         │
//! │  Add To Cart ────────────► add_to_cart() ────────► merge or push line  │
//! │                                                                         │
//! │  Change Quantity ────────► update_cart_quantity() ► lines[i].qty = n   │
//! │                                                                         │
//! │  Click Remove ───────────► remove_from_cart() ───► lines.remove(i)     │
//! │                                                                         │
//! │  Click Clear ────────────► clear_cart() ─────────► lines.clear()       │
//! │                                                                         │
//! │  View Cart ──────────────► get_cart() ───────────► (read only)         │
//! │                                                                         │
//! │  NOTE: Totals are derived from the lines on every read.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use aura_core::Cart;

/// Shared cart state.
///
/// A panic while the lock is held poisons the mutex; the cart data is
/// still structurally valid, so the guard is recovered and a warning logged.
#[derive(Debug, Clone)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState {
            cart: Arc::new(Mutex::new(Cart::new())),
        }
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let totals = cart_state.with_cart(|cart| cart.totals(&policy));
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self.lock();
        f(&cart)
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(&product, 1, variant));
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self.lock();
        f(&mut cart)
    }

    fn lock(&self) -> MutexGuard<'_, Cart> {
        self.cart.lock().unwrap_or_else(|poisoned| {
            warn!("Cart mutex poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl Default for CartState {
    fn default() -> Self {
        Self::new()
    }
}
