//! Wishlist collaborator contract.
//!
//! Persistence lives outside the storefront; views only ask for membership
//! and forward toggles.

use std::collections::HashSet;

use storefront_core::ProductId;

/// Per-user set of saved products.
pub trait WishlistStore {
    fn is_in_wishlist(&self, product_id: &ProductId) -> bool;

    /// Add the product when absent, remove it when present.
    fn toggle_wishlist(&mut self, product_id: &ProductId);
}

/// In-memory wishlist for tests/dev.
#[derive(Debug, Clone, Default)]
pub struct InMemoryWishlist {
    saved: HashSet<ProductId>,
}

impl InMemoryWishlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.saved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

impl FromIterator<ProductId> for InMemoryWishlist {
    fn from_iter<I: IntoIterator<Item = ProductId>>(iter: I) -> Self {
        Self {
            saved: iter.into_iter().collect(),
        }
    }
}

impl WishlistStore for InMemoryWishlist {
    fn is_in_wishlist(&self, product_id: &ProductId) -> bool {
        self.saved.contains(product_id)
    }

    fn toggle_wishlist(&mut self, product_id: &ProductId) {
        if !self.saved.remove(product_id) {
            self.saved.insert(product_id.clone());
        }
    }
}
