//! Local Store - Traits, Records, and In-Memory Backends
//!
//! The core never talks to a concrete database; it is handed a
//! [`DishStore`] and a [`CartStore`]. The in-memory backends here are the
//! primary implementations for tests and embedded use, and double as the
//! reference semantics for persistent backends.

mod cart;
mod dish;
mod error;
mod memory;
mod records;

pub use cart::CartStore;
pub use dish::DishStore;
pub use error::{StoreError, StoreResult};
pub use memory::{MemoryCartStore, MemoryDishStore};
pub use records::{CartItem, Dish, DishItem};
