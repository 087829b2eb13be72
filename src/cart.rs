//! CartLedger - Quantity-State Transitions
//!
//! The ledger reads the current count and picks the store primitive that
//! keeps the invariant: a stored line item always has count >= 1, and a
//! mutation that would reach zero deletes the item instead.
//!
//! The read-then-write sequence is not atomic; concurrent calls against the
//! same dish id can race. This mirrors the collaborator contract and is not
//! coordinated here.

use crate::constants::CART_ITEM_COUNT_MIN;
use crate::store::{CartItem, CartStore, StoreResult};

/// Cart line-item maintenance over a [`CartStore`].
#[derive(Debug, Clone)]
pub struct CartLedger<C: CartStore> {
    cart: C,
}

impl<C: CartStore> CartLedger<C> {
    /// Create a ledger over the given store.
    #[must_use]
    pub fn new(cart: C) -> Self {
        Self { cart }
    }

    /// Add `count` units of a dish to the cart.
    ///
    /// An existing line item (count > 0) is updated to `current + count`;
    /// otherwise a new line item is inserted with `count`.
    #[tracing::instrument(skip(self))]
    pub async fn add_to_cart(&self, dish_id: &str, count: u32) -> StoreResult<()> {
        // Precondition
        debug_assert!(count >= CART_ITEM_COUNT_MIN, "count must be at least 1");

        let current = self.cart.item_count(dish_id).await?.unwrap_or(0);
        if current > 0 {
            self.cart.set_count(dish_id, current + count).await
        } else {
            self.cart.insert(&CartItem::new(dish_id, count)).await
        }
    }

    /// Remove one unit of a dish from the cart.
    ///
    /// A line item above 1 is decremented by exactly 1; at 1 (or absent,
    /// which reads as 0) the line item is deleted entirely. Removing an
    /// absent id is a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn remove_from_cart(&self, dish_id: &str) -> StoreResult<()> {
        let current = self.cart.item_count(dish_id).await?.unwrap_or(0);
        if current > 1 {
            self.cart.decrement(dish_id).await
        } else {
            self.cart.remove(dish_id).await
        }
    }

    /// Total units across all line items; 0 for an empty cart.
    pub async fn cart_count(&self) -> StoreResult<u32> {
        Ok(self.cart.total_count().await?.unwrap_or(0))
    }
}

// =============================================================================
// Tests
// =============================================================================
