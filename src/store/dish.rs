//! Dish Store Trait
//!
//! Abstract contract for the local catalog collection. The bundled
//! [`MemoryDishStore`](super::MemoryDishStore) satisfies it for tests and
//! embedded use; persistent backends implement the same contract.

use async_trait::async_trait;

use super::error::StoreResult;
use super::records::Dish;

/// Local persisted collection of dish records.
///
/// Results are ordered stably enough for deterministic test comparison;
/// callers must not read any ranking into the order.
#[async_trait]
pub trait DishStore: Send + Sync {
    /// Insert or update dishes, keyed on dish id (upsert).
    ///
    /// An empty batch is a no-op that leaves existing records untouched.
    async fn insert_batch(&self, dishes: &[Dish]) -> StoreResult<()>;

    /// Get a dish by id.
    ///
    /// Returns `None` if the dish does not exist.
    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Dish>>;

    /// Full scan of the catalog.
    async fn find_all(&self) -> StoreResult<Vec<Dish>>;

    /// Dishes whose name contains `query`, case-insensitively.
    async fn find_by_title(&self, query: &str) -> StoreResult<Vec<Dish>>;

    /// Number of dishes in the catalog.
    async fn count(&self) -> StoreResult<usize>;
}
