//! Delivery - Main Interface
//!
//! Composes the sync engine, search index, cart ledger, and review gateway
//! over injected collaborators and exposes the client-facing operations.
//!
//! # Example
//!
//! ```rust
//! use plateful::clock::SimClock;
//! use plateful::delivery::Delivery;
//! use plateful::remote::{DishPayload, SimDeliveryApi};
//! use plateful::store::{MemoryCartStore, MemoryDishStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let api = SimDeliveryApi::new()
//!     .with_dish_page(vec![DishPayload::new("d1", "Greek Salad", 270)]);
//! let delivery = Delivery::new(
//!     api,
//!     MemoryDishStore::new(),
//!     MemoryCartStore::new(),
//!     SimClock::new(),
//! );
//!
//! delivery.sync_catalog().await?;
//! let found = delivery.search("greek").await?;
//! assert_eq!(found.len(), 1);
//!
//! delivery.add_to_cart("d1").await?;
//! assert_eq!(delivery.cart_count().await?, 1);
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use crate::cart::CartLedger;
use crate::clock::Clock;
use crate::remote::{DeliveryApi, Review};
use crate::reviews::ReviewGateway;
use crate::search::SearchIndex;
use crate::store::{CartStore, Dish, DishItem, DishStore, StoreResult};
use crate::sync::SyncEngine;

/// Main interface for the delivery client core.
///
/// # Type Parameters
/// - `A`: remote service (`SimDeliveryApi` for testing, `HttpDeliveryApi`
///   in production)
/// - `D`: dish store backend
/// - `C`: cart store backend
/// - `K`: clock (`SimClock` for testing)
///
/// Store errors propagate unchanged; remote failures are handled per
/// operation (absorbed by sync and reviews, see the component docs).
#[derive(Debug, Clone)]
pub struct Delivery<A, D, C, K>
where
    A: DeliveryApi + Clone,
    D: DishStore + Clone,
    C: CartStore + Clone,
    K: Clock,
{
    dishes: D,
    sync: SyncEngine<A, D>,
    search: SearchIndex<D>,
    cart: CartLedger<C>,
    reviews: ReviewGateway<A, K>,
}

impl<A, D, C, K> Delivery<A, D, C, K>
where
    A: DeliveryApi + Clone,
    D: DishStore + Clone,
    C: CartStore + Clone,
    K: Clock,
{
    /// Create a delivery core over the given collaborators.
    #[must_use]
    pub fn new(api: A, dishes: D, cart: C, clock: K) -> Self {
        let sync = SyncEngine::new(api.clone(), dishes.clone());
        let search = SearchIndex::new(dishes.clone());
        let cart = CartLedger::new(cart);
        let reviews = ReviewGateway::new(api, clock);

        Self {
            dishes,
            sync,
            search,
            cart,
            reviews,
        }
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// Synchronize the local catalog with the remote service.
    ///
    /// See [`SyncEngine::sync_catalog`] for the pagination and
    /// absorb-and-truncate semantics.
    pub async fn sync_catalog(&self) -> StoreResult<()> {
        self.sync.sync_catalog().await
    }

    /// Whether the local catalog holds no dishes.
    pub async fn is_catalog_empty(&self) -> StoreResult<bool> {
        Ok(self.dishes.count().await? == 0)
    }

    /// Look up a single dish by id.
    pub async fn find_dish(&self, id: &str) -> StoreResult<Option<Dish>> {
        self.dishes.find_by_id(id).await
    }

    // =========================================================================
    // Search
    // =========================================================================

    /// Full catalog as display items.
    pub async fn find_dishes(&self) -> StoreResult<Vec<DishItem>> {
        self.search.find_all().await
    }

    /// Dishes whose title contains `query`; the full catalog for an empty
    /// query.
    pub async fn search(&self, query: &str) -> StoreResult<Vec<DishItem>> {
        self.search.search(query).await
    }

    /// Suggestion tokens for `query`. See [`SearchIndex::suggestions`].
    pub async fn suggestions(&self, query: &str) -> StoreResult<HashMap<String, usize>> {
        self.search.suggestions(query).await
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Add one unit of a dish to the cart.
    pub async fn add_to_cart(&self, dish_id: &str) -> StoreResult<()> {
        self.cart.add_to_cart(dish_id, 1).await
    }

    /// Add `count` units of a dish to the cart.
    pub async fn add_to_cart_many(&self, dish_id: &str, count: u32) -> StoreResult<()> {
        self.cart.add_to_cart(dish_id, count).await
    }

    /// Remove one unit of a dish; deletes the line item at count 1.
    pub async fn remove_from_cart(&self, dish_id: &str) -> StoreResult<()> {
        self.cart.remove_from_cart(dish_id).await
    }

    /// Total units across all cart line items.
    pub async fn cart_count(&self) -> StoreResult<u32> {
        self.cart.cart_count().await
    }

    // =========================================================================
    // Reviews
    // =========================================================================

    /// Load reviews for a dish; stub fixture on any remote failure.
    pub async fn load_reviews(&self, dish_id: &str) -> Vec<Review> {
        self.reviews.load_reviews(dish_id).await
    }

    /// Submit a review; locally synthesized echo on any remote failure.
    pub async fn send_review(&self, dish_id: &str, rating: u8, text: &str) -> Review {
        self.reviews.send_review(dish_id, rating, text).await
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::SimClock;
    use crate::remote::{DishPayload, SimDeliveryApi};
    use crate::store::{MemoryCartStore, MemoryDishStore};

    fn delivery(
        api: SimDeliveryApi,
    ) -> Delivery<SimDeliveryApi, MemoryDishStore, MemoryCartStore, SimClock> {
        Delivery::new(
            api,
            MemoryDishStore::new(),
            MemoryCartStore::new(),
            SimClock::new(),
        )
    }

    #[tokio::test]
    async fn test_is_catalog_empty_flips_after_sync() {
        let api = SimDeliveryApi::new().with_dish_page(vec![DishPayload::new("d1", "Pizza", 400)]);
        let delivery = delivery(api);

        assert!(delivery.is_catalog_empty().await.unwrap());

        delivery.sync_catalog().await.unwrap();

        assert!(!delivery.is_catalog_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_find_dish_after_sync() {
        let api =
            SimDeliveryApi::new().with_dish_page(vec![DishPayload::new("d1", "Borscht", 180)]);
        let delivery = delivery(api);
        delivery.sync_catalog().await.unwrap();

        let dish = delivery.find_dish("d1").await.unwrap().unwrap();
        assert_eq!(dish.name, "Borscht");

        assert!(delivery.find_dish("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_add_to_cart_defaults_to_one_unit() {
        let delivery = delivery(SimDeliveryApi::new());

        delivery.add_to_cart("d1").await.unwrap();
        delivery.add_to_cart("d1").await.unwrap();
        delivery.add_to_cart_many("d2", 3).await.unwrap();

        assert_eq!(delivery.cart_count().await.unwrap(), 5);
    }
}
