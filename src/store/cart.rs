//! Cart Store Trait
//!
//! Abstract contract for the persisted cart collection. Quantity-state
//! transitions (when to insert, update, or delete) live in
//! [`CartLedger`](crate::cart::CartLedger); the store only executes the
//! primitive it is handed.

use async_trait::async_trait;

use super::error::StoreResult;
use super::records::CartItem;

/// Local persisted collection of cart line items keyed by dish id.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Count on the line item for `dish_id`.
    ///
    /// Returns `None` when no line item exists.
    async fn item_count(&self, dish_id: &str) -> StoreResult<Option<u32>>;

    /// Insert a new line item.
    async fn insert(&self, item: &CartItem) -> StoreResult<()>;

    /// Overwrite the count on an existing line item.
    async fn set_count(&self, dish_id: &str, count: u32) -> StoreResult<()>;

    /// Decrement an existing line item's count by 1.
    ///
    /// Callers maintain the count >= 1 invariant by removing the item
    /// instead when the count would reach zero.
    async fn decrement(&self, dish_id: &str) -> StoreResult<()>;

    /// Delete the line item for `dish_id`, if any.
    async fn remove(&self, dish_id: &str) -> StoreResult<()>;

    /// Sum of all line item counts.
    ///
    /// Returns `None` when the aggregate yields no value (empty cart).
    async fn total_count(&self) -> StoreResult<Option<u32>>;
}
