//! # Wishlist State
//!
//! Holds the saved-products list. Same locking scheme as
//! [`super::CartState`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::warn;

use aura_core::Wishlist;

/// Shared wishlist state.
#[derive(Debug, Clone, Default)]
pub struct WishlistState {
    wishlist: Arc<Mutex<Wishlist>>,
}

impl WishlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Wishlist) -> R,
    {
        let wishlist = self.lock();
        f(&wishlist)
    }

    pub fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Wishlist) -> R,
    {
        let mut wishlist = self.lock();
        f(&mut wishlist)
    }

    fn lock(&self) -> MutexGuard<'_, Wishlist> {
        self.wishlist.lock().unwrap_or_else(|poisoned| {
            warn!("Wishlist mutex poisoned, recovering");
            PoisonError::into_inner(poisoned)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aura_core::{Product, ProductFlags};

    #[test]
    fn test_shared_between_clones() {
        let state = WishlistState::new();
        let handle = state.clone();

        let product = Product {
            id: "2".to_string(),
            name: "Minimalist Logo Hoodie".to_string(),
            price_cents: 7999,
            description: String::new(),
            category: "hoodies".to_string(),
            image: String::new(),
            images: Vec::new(),
            colors: vec!["#000000".to_string()],
            sizes: vec!["L".to_string()],
            flags: ProductFlags::default(),
        };

        assert!(handle.with_wishlist_mut(|w| w.toggle(&product)));
        assert!(state.with_wishlist(|w| w.contains("2")));
    }
}
