//! In-Memory Store Backends
//!
//! Primary implementations for tests and embedded use. Results are sorted
//! for determinism; the locks protect each map individually and add no
//! cross-operation atomicity.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use super::cart::CartStore;
use super::dish::DishStore;
use super::error::StoreResult;
use super::records::{CartItem, Dish};

// =============================================================================
// MemoryDishStore
// =============================================================================

/// In-memory dish store.
///
/// Thread-safe with `RwLock`; clones share the same catalog.
#[derive(Debug, Clone, Default)]
pub struct MemoryDishStore {
    /// Dishes indexed by id
    dishes: Arc<RwLock<HashMap<String, Dish>>>,
    /// Number of `insert_batch` calls, for test assertions on commit shape
    batch_writes: Arc<AtomicUsize>,
}

impl MemoryDishStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get dish count without going through the trait (for testing).
    #[must_use]
    pub fn dish_count(&self) -> usize {
        self.dishes.read().unwrap().len()
    }

    /// Number of batch writes performed (for testing).
    #[must_use]
    pub fn batch_writes(&self) -> usize {
        self.batch_writes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DishStore for MemoryDishStore {
    #[tracing::instrument(skip(self, dishes), fields(batch_len = dishes.len()))]
    async fn insert_batch(&self, dishes: &[Dish]) -> StoreResult<()> {
        self.batch_writes.fetch_add(1, Ordering::SeqCst);

        let mut map = self.dishes.write().unwrap();
        for dish in dishes {
            map.insert(dish.id.clone(), dish.clone());
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> StoreResult<Option<Dish>> {
        let map = self.dishes.read().unwrap();
        Ok(map.get(id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Dish>> {
        let map = self.dishes.read().unwrap();

        let mut results: Vec<Dish> = map.values().cloned().collect();

        // Sort by name then id for determinism
        results.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        Ok(results)
    }

    #[tracing::instrument(skip(self), fields(query_len = query.len()))]
    async fn find_by_title(&self, query: &str) -> StoreResult<Vec<Dish>> {
        let map = self.dishes.read().unwrap();
        let query_lower = query.to_lowercase();

        let mut results: Vec<Dish> = map
            .values()
            .filter(|d| d.name.to_lowercase().contains(&query_lower))
            .cloned()
            .collect();

        results.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));

        Ok(results)
    }

    async fn count(&self) -> StoreResult<usize> {
        Ok(self.dishes.read().unwrap().len())
    }
}

// =============================================================================
// MemoryCartStore
// =============================================================================

/// In-memory cart store.
///
/// Thread-safe with `RwLock`; clones share the same cart.
#[derive(Debug, Clone, Default)]
pub struct MemoryCartStore {
    /// Line item counts indexed by dish id
    items: Arc<RwLock<HashMap<String, u32>>>,
}

impl MemoryCartStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of line items (for testing).
    #[must_use]
    pub fn item_len(&self) -> usize {
        self.items.read().unwrap().len()
    }
}

#[async_trait]
impl CartStore for MemoryCartStore {
    async fn item_count(&self, dish_id: &str) -> StoreResult<Option<u32>> {
        let items = self.items.read().unwrap();
        Ok(items.get(dish_id).copied())
    }

    #[tracing::instrument(skip(self, item), fields(dish_id = %item.dish_id))]
    async fn insert(&self, item: &CartItem) -> StoreResult<()> {
        let mut items = self.items.write().unwrap();
        items.insert(item.dish_id.clone(), item.count);
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn set_count(&self, dish_id: &str, count: u32) -> StoreResult<()> {
        let mut items = self.items.write().unwrap();
        items.insert(dish_id.to_string(), count);
        Ok(())
    }

    async fn decrement(&self, dish_id: &str) -> StoreResult<()> {
        let mut items = self.items.write().unwrap();
        if let Some(count) = items.get_mut(dish_id) {
            *count = count.saturating_sub(1);
        }
        Ok(())
    }

    async fn remove(&self, dish_id: &str) -> StoreResult<()> {
        let mut items = self.items.write().unwrap();
        items.remove(dish_id);
        Ok(())
    }

    async fn total_count(&self) -> StoreResult<Option<u32>> {
        let items = self.items.read().unwrap();
        if items.is_empty() {
            Ok(None)
        } else {
            Ok(Some(items.values().sum()))
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod dish_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_batch_and_find() {
        let store = MemoryDishStore::new();

        store
            .insert_batch(&[Dish::new("d1", "Greek Salad", 270)])
            .await
            .unwrap();

        let found = store.find_by_id("d1").await.unwrap();
        assert_eq!(found.unwrap().name, "Greek Salad");
    }

    #[tokio::test]
    async fn test_find_missing_is_none() {
        let store = MemoryDishStore::new();

        let found = store.find_by_id("nope").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_insert_batch_upserts_by_id() {
        let store = MemoryDishStore::new();

        store
            .insert_batch(&[Dish::new("d1", "Greek Salad", 270)])
            .await
            .unwrap();
        store
            .insert_batch(&[Dish::new("d1", "Greek Salad XL", 320)])
            .await
            .unwrap();

        // Updated in place, no duplicate
        assert_eq!(store.dish_count(), 1);
        let found = store.find_by_id("d1").await.unwrap().unwrap();
        assert_eq!(found.name, "Greek Salad XL");
        assert_eq!(found.price, 320);
    }

    #[tokio::test]
    async fn test_empty_batch_is_noop() {
        let store = MemoryDishStore::new();
        store
            .insert_batch(&[Dish::new("d1", "Borscht", 180)])
            .await
            .unwrap();

        store.insert_batch(&[]).await.unwrap();

        assert_eq!(store.dish_count(), 1);
    }

    #[tokio::test]
    async fn test_find_all_sorted() {
        let store = MemoryDishStore::new();
        store
            .insert_batch(&[
                Dish::new("d2", "Pizza", 400),
                Dish::new("d1", "Borscht", 180),
            ])
            .await
            .unwrap();

        let all = store.find_all().await.unwrap();

        let names: Vec<&str> = all.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["Borscht", "Pizza"]);
    }

    #[tokio::test]
    async fn test_find_by_title_case_insensitive() {
        let store = MemoryDishStore::new();
        store
            .insert_batch(&[
                Dish::new("d1", "Greek Salad", 270),
                Dish::new("d2", "Caesar Salad", 250),
                Dish::new("d3", "Borscht", 180),
            ])
            .await
            .unwrap();

        let matched = store.find_by_title("SALAD").await.unwrap();
        assert_eq!(matched.len(), 2);

        let matched = store.find_by_title("greek").await.unwrap();
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "d1");
    }

    #[tokio::test]
    async fn test_count() {
        let store = MemoryDishStore::new();
        assert_eq!(store.count().await.unwrap(), 0);

        store
            .insert_batch(&[
                Dish::new("d1", "Borscht", 180),
                Dish::new("d2", "Pizza", 400),
            ])
            .await
            .unwrap();

        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_batch_writes_counter() {
        let store = MemoryDishStore::new();
        assert_eq!(store.batch_writes(), 0);

        store.insert_batch(&[]).await.unwrap();
        store
            .insert_batch(&[Dish::new("d1", "Borscht", 180)])
            .await
            .unwrap();

        assert_eq!(store.batch_writes(), 2);
    }

    #[tokio::test]
    async fn test_clone_shares_catalog() {
        let store = MemoryDishStore::new();
        let clone = store.clone();

        store
            .insert_batch(&[Dish::new("d1", "Borscht", 180)])
            .await
            .unwrap();

        assert_eq!(clone.dish_count(), 1);
    }
}

#[cfg(test)]
mod cart_tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_item_count() {
        let store = MemoryCartStore::new();

        store.insert(&CartItem::new("d1", 2)).await.unwrap();

        assert_eq!(store.item_count("d1").await.unwrap(), Some(2));
        assert_eq!(store.item_count("d2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_count_overwrites() {
        let store = MemoryCartStore::new();
        store.insert(&CartItem::new("d1", 1)).await.unwrap();

        store.set_count("d1", 5).await.unwrap();

        assert_eq!(store.item_count("d1").await.unwrap(), Some(5));
        assert_eq!(store.item_len(), 1);
    }

    #[tokio::test]
    async fn test_decrement() {
        let store = MemoryCartStore::new();
        store.insert(&CartItem::new("d1", 3)).await.unwrap();

        store.decrement("d1").await.unwrap();

        assert_eq!(store.item_count("d1").await.unwrap(), Some(2));
    }

    #[tokio::test]
    async fn test_decrement_absent_is_noop() {
        let store = MemoryCartStore::new();
        store.decrement("ghost").await.unwrap();
        assert_eq!(store.item_len(), 0);
    }

    #[tokio::test]
    async fn test_remove() {
        let store = MemoryCartStore::new();
        store.insert(&CartItem::new("d1", 1)).await.unwrap();

        store.remove("d1").await.unwrap();

        assert_eq!(store.item_count("d1").await.unwrap(), None);
        // Removing again is a no-op
        store.remove("d1").await.unwrap();
    }

    #[tokio::test]
    async fn test_total_count() {
        let store = MemoryCartStore::new();
        assert_eq!(store.total_count().await.unwrap(), None);

        store.insert(&CartItem::new("d1", 2)).await.unwrap();
        store.insert(&CartItem::new("d2", 3)).await.unwrap();

        assert_eq!(store.total_count().await.unwrap(), Some(5));
    }
}
