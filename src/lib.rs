//! # Plateful
//!
//! A delivery-client core: catalog sync, local search, a cart ledger, and
//! resilient reviews, built for deterministic simulation testing.
//!
//! ## Features
//!
//! - **Catalog sync**: cursor-paginated pull from the remote service,
//!   committed as a single upsert batch
//! - **Local search + suggestions**: substring search over the synced
//!   catalog with word-occurrence suggestion tokens
//! - **Cart ledger**: quantity-state transitions with collapse-to-zero
//!   semantics (no line item below count 1)
//! - **Resilient reviews**: remote failures are absorbed and replaced with
//!   deterministic stub data, never surfaced
//! - **Simulation-first**: every collaborator ships a deterministic
//!   implementation (`SimDeliveryApi`, in-memory stores, `SimClock`)
//!
//! ## Quick Start
//!
//! ```rust
//! use plateful::clock::SimClock;
//! use plateful::delivery::Delivery;
//! use plateful::remote::{DishPayload, SimDeliveryApi};
//! use plateful::store::{MemoryCartStore, MemoryDishStore};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Scripted remote: one page, then the service "goes down"
//! let api = SimDeliveryApi::new().with_dish_page(vec![
//!     DishPayload::new("d1", "Greek Salad", 270),
//!     DishPayload::new("d2", "Greek Yogurt", 150),
//! ]);
//!
//! let delivery = Delivery::new(
//!     api,
//!     MemoryDishStore::new(),
//!     MemoryCartStore::new(),
//!     SimClock::new(),
//! );
//!
//! delivery.sync_catalog().await?;
//!
//! let matched = delivery.search("greek").await?;
//! assert_eq!(matched.len(), 2);
//!
//! let suggestions = delivery.suggestions("greek").await?;
//! assert_eq!(suggestions.get("greek"), Some(&2));
//!
//! delivery.add_to_cart("d1").await?;
//!
//! // The remote is down by now: reviews fall back to the stub fixture
//! let reviews = delivery.load_reviews("d1").await;
//! assert_eq!(reviews.len(), 3);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                    Delivery Facade                       │
//! ├──────────────┬──────────────┬─────────────┬─────────────┤
//! │  SyncEngine  │  SearchIndex │  CartLedger │ ReviewGate- │
//! │  (paginate,  │  (substring, │  (quantity  │ way (stub   │
//! │   one batch) │ suggestions) │ transitions)│  fallback)  │
//! ├──────────────┴──────────────┼─────────────┴─────────────┤
//! │  DeliveryApi (trait)        │  DishStore / CartStore    │
//! │  Sim | Http                 │  (traits) Memory backends │
//! └─────────────────────────────┴───────────────────────────┘
//! ```
//!
//! ## Failure Policies
//!
//! Two policies coexist and are never conflated:
//!
//! - **Absorb-and-stub** ([`reviews::ReviewGateway`]): any remote failure is
//!   replaced with deterministic local data; the operations are infallible.
//! - **Absorb-and-truncate** ([`sync::SyncEngine`]): the first failing page
//!   silently ends the sync pass; everything fetched before it still
//!   commits. No retries, no partial-failure signal.
//!
//! Store errors are neither: they propagate to the caller unchanged.
//!
//! ## Concurrency
//!
//! All operations are async and uncoordinated: the read-count-then-write
//! sequences in the cart ledger and the page loop in the sync engine are
//! not atomic across concurrent calls. Run conflicting mutations from one
//! task at a time, as a UI event loop naturally does.
//!
//! ## Feature Flags
//!
//! - `http` (default) - `HttpDeliveryApi` production remote via reqwest

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cart;
pub mod clock;
pub mod constants;
pub mod delivery;
pub mod remote;
pub mod reviews;
pub mod search;
pub mod store;
pub mod sync;

// Re-export common types
pub use cart::CartLedger;
pub use clock::{Clock, SimClock, SystemClock};
pub use delivery::Delivery;
pub use remote::{
    ApiError, ApiResult, DeliveryApi, DishPayload, Review, ReviewSubmission, SimDeliveryApi,
};
pub use reviews::{stub_reviews, ReviewGateway};
pub use search::SearchIndex;
pub use store::{
    CartItem, CartStore, Dish, DishItem, DishStore, MemoryCartStore, MemoryDishStore, StoreError,
    StoreResult,
};
pub use sync::SyncEngine;

#[cfg(feature = "http")]
pub use remote::HttpDeliveryApi;
