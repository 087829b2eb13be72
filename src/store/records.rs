//! Persisted Records - Dish and Cart Line Item

use serde::{Deserialize, Serialize};

// =============================================================================
// Dish
// =============================================================================

/// A catalog entry as persisted by the dish store.
///
/// Created and overwritten only by catalog sync (upsert keyed on `id`).
/// Everything past `id` and `name` is display data carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    /// Unique identifier, assigned by the remote service
    pub id: String,
    /// Display title; the only field search operates on
    pub name: String,
    /// Display description
    pub description: String,
    /// Image URL
    pub image: String,
    /// Current price
    pub price: u32,
    /// Pre-discount price, when the dish is on sale
    pub old_price: Option<u32>,
    /// Aggregate rating
    pub rating: f32,
    /// Like count
    pub likes: u32,
    /// Category identifier
    pub category: String,
}

impl Dish {
    /// Create a dish with display fields defaulted.
    ///
    /// Mostly useful in tests; synced dishes come from
    /// [`DishPayload`](crate::remote::DishPayload) conversion.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
            price,
            old_price: None,
            rating: 0.0,
            likes: 0,
            category: String::new(),
        }
    }

    /// Project into the display item returned by search operations.
    #[must_use]
    pub fn to_item(&self) -> DishItem {
        DishItem {
            id: self.id.clone(),
            title: self.name.clone(),
            image: self.image.clone(),
            price: self.price,
        }
    }
}

// =============================================================================
// DishItem
// =============================================================================

/// Display projection of a [`Dish`] handed to callers of search operations.
///
/// Transient; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DishItem {
    /// Dish identifier (cart operations key on this)
    pub id: String,
    /// Display title
    pub title: String,
    /// Image URL
    pub image: String,
    /// Current price
    pub price: u32,
}

// =============================================================================
// CartItem
// =============================================================================

/// A cart line item keyed by dish id.
///
/// Invariant: a stored line item always has `count >= 1`. A mutation that
/// would bring the count to zero or below deletes the item instead; the
/// ledger enforces this, the store holds whatever it is told.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Dish identifier (unique key)
    pub dish_id: String,
    /// Quantity, at least 1
    pub count: u32,
}

impl CartItem {
    /// Create a line item.
    #[must_use]
    pub fn new(dish_id: impl Into<String>, count: u32) -> Self {
        Self {
            dish_id: dish_id.into(),
            count,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
