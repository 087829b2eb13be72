//! Integration tests for the delivery facade.
//!
//! Exercises the full flow over simulation collaborators: sync the catalog,
//! search it, maintain the cart, and read/submit reviews with the remote
//! failing partway through.

use plateful::clock::SimClock;
use plateful::delivery::Delivery;
use plateful::remote::{ApiError, DishPayload, Review, SimDeliveryApi};
use plateful::reviews::stub_reviews;
use plateful::store::{MemoryCartStore, MemoryDishStore};

type SimDelivery = Delivery<SimDeliveryApi, MemoryDishStore, MemoryCartStore, SimClock>;

fn delivery_with(api: SimDeliveryApi, clock: SimClock) -> (SimDelivery, MemoryDishStore) {
    let dishes = MemoryDishStore::new();
    let delivery = Delivery::new(api, dishes.clone(), MemoryCartStore::new(), clock);
    (delivery, dishes)
}

fn menu_page() -> Vec<DishPayload> {
    vec![
        DishPayload::new("d1", "Greek Salad", 270),
        DishPayload::new("d2", "Caesar Salad", 250),
        DishPayload::new("d3", "Greek Yogurt", 150),
    ]
}

#[tokio::test]
async fn test_full_flow_sync_search_cart_reviews() {
    let api = SimDeliveryApi::new()
        .with_dish_page(menu_page())
        .with_reviews(vec![Review::new("Ann", 1000, 5, "great salad")]);
    let clock = SimClock::at_ms(1_700_000_000_000);
    let (delivery, _) = delivery_with(api, clock);

    // Sync: one page, then the script runs out (remote "fails")
    delivery.sync_catalog().await.unwrap();
    assert!(!delivery.is_catalog_empty().await.unwrap());

    // Search and suggestions over the synced catalog
    let matched = delivery.search("greek").await.unwrap();
    let titles: Vec<&str> = matched.iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Greek Salad", "Greek Yogurt"]);

    let suggestions = delivery.suggestions("greek").await.unwrap();
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions.get("greek"), Some(&2));

    // Cart transitions
    delivery.add_to_cart("d1").await.unwrap();
    delivery.add_to_cart("d1").await.unwrap();
    delivery.add_to_cart_many("d3", 3).await.unwrap();
    assert_eq!(delivery.cart_count().await.unwrap(), 5);

    delivery.remove_from_cart("d3").await.unwrap();
    assert_eq!(delivery.cart_count().await.unwrap(), 4);

    // Reviews: the scripted page succeeds once...
    let reviews = delivery.load_reviews("d1").await;
    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].author, "Ann");

    // ...then the remote is down and the stub fixture takes over
    let reviews = delivery.load_reviews("d1").await;
    assert_eq!(reviews, stub_reviews());

    // Submission failure echoes the input at the injected clock time
    let echoed = delivery.send_review("d1", 5, "great").await;
    assert_eq!(echoed.author, "stubName");
    assert_eq!(echoed.date, 1_700_000_000_000);
    assert_eq!(echoed.rating, 5);
    assert_eq!(echoed.text, "great");
}

#[tokio::test]
async fn test_sync_twice_is_idempotent() {
    // Each pass sees the same single page; the scripted error ends pass one
    let api = SimDeliveryApi::new()
        .with_dish_page(menu_page())
        .with_dish_page_error(ApiError::Timeout)
        .with_dish_page(menu_page());
    let (delivery, dishes) = delivery_with(api, SimClock::new());

    delivery.sync_catalog().await.unwrap();
    let first = delivery.find_dishes().await.unwrap();

    delivery.sync_catalog().await.unwrap();
    let second = delivery.find_dishes().await.unwrap();

    // Upsert by id: same records, no duplication
    assert_eq!(first, second);
    assert_eq!(dishes.dish_count(), 3);
}

#[tokio::test]
async fn test_search_empty_query_is_full_scan() {
    let api = SimDeliveryApi::new().with_dish_page(menu_page());
    let (delivery, _) = delivery_with(api, SimClock::new());
    delivery.sync_catalog().await.unwrap();

    let all = delivery.search("").await.unwrap();
    let scan = delivery.find_dishes().await.unwrap();

    assert_eq!(all, scan);
    assert_eq!(all.len(), 3);
}

#[tokio::test]
async fn test_sync_batches_twenty_records_from_two_pages() {
    let first: Vec<DishPayload> = (0..10)
        .map(|i| DishPayload::new(format!("a{i}"), format!("Dish A{i}"), 100))
        .collect();
    let second: Vec<DishPayload> = (0..10)
        .map(|i| DishPayload::new(format!("b{i}"), format!("Dish B{i}"), 100))
        .collect();
    let api = SimDeliveryApi::new()
        .with_dish_page(first)
        .with_dish_page(second);
    let (delivery, dishes) = delivery_with(api.clone(), SimClock::new());

    delivery.sync_catalog().await.unwrap();

    assert_eq!(dishes.dish_count(), 20);
    assert_eq!(dishes.batch_writes(), 1);
    assert_eq!(api.dish_requests(), vec![(0, 10), (10, 10), (20, 10)]);
}

#[tokio::test]
async fn test_cart_survives_resync() {
    let api = SimDeliveryApi::new()
        .with_dish_page(menu_page())
        .with_dish_page_error(ApiError::Timeout)
        .with_dish_page(menu_page());
    let (delivery, _) = delivery_with(api, SimClock::new());

    delivery.sync_catalog().await.unwrap();
    delivery.add_to_cart("d1").await.unwrap();

    // Cart stores only dish ids; a resync does not touch it
    delivery.sync_catalog().await.unwrap();
    assert_eq!(delivery.cart_count().await.unwrap(), 1);
}
