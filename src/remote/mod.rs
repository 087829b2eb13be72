//! Remote Service - Unified Interface for Sim and Production
//!
//! # Architecture
//!
//! ```text
//! DeliveryApi (trait)
//! ├── SimDeliveryApi     (always available, scripted outcomes)
//! └── HttpDeliveryApi    (feature: http)
//! ```
//!
//! The remote service is a collaborator: the core consumes whatever the
//! trait reports and applies its own failure policy per operation
//! (absorb-and-truncate for sync, absorb-and-stub for reviews).

mod sim;

#[cfg(feature = "http")]
mod http;

pub use sim::SimDeliveryApi;

#[cfg(feature = "http")]
pub use http::HttpDeliveryApi;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::store::Dish;

// =============================================================================
// Error Types
// =============================================================================

/// Unified error type for remote service calls.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    /// Request timed out
    #[error("request timed out")]
    Timeout,

    /// Authentication failed
    #[error("authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("rate limit exceeded")]
    RateLimit,

    /// Service unavailable
    #[error("service unavailable: {message}")]
    ServiceUnavailable {
        /// Reason for unavailability
        message: String,
    },

    /// Unsuccessful HTTP status
    #[error("unsuccessful status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body, as far as it was readable
        body: String,
    },

    /// Network/transport error
    #[error("network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// Response body failed to decode
    #[error("decode error: {message}")]
    Decode {
        /// Description of the decode failure
        message: String,
    },
}

impl ApiError {
    /// Create a service unavailable error.
    #[must_use]
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::ServiceUnavailable {
            message: message.into(),
        }
    }

    /// Create an unsuccessful status error.
    #[must_use]
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self::Status {
            status,
            body: body.into(),
        }
    }

    /// Create a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

/// Result type for remote service calls.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Wire Types
// =============================================================================

/// A dish as served by the catalog endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DishPayload {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub name: String,
    /// Display description
    #[serde(default)]
    pub description: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Current price
    pub price: u32,
    /// Pre-discount price, when on sale
    #[serde(default)]
    pub old_price: Option<u32>,
    /// Aggregate rating
    #[serde(default)]
    pub rating: f32,
    /// Like count
    #[serde(default)]
    pub likes: u32,
    /// Category identifier
    #[serde(default)]
    pub category: String,
}

impl DishPayload {
    /// Create a payload with display fields defaulted (tests and sims).
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
}

impl From<DishPayload> for Dish {
    fn from(payload: DishPayload) -> Self {
        Self {
            id: payload.id,
            name: payload.name,
            description: payload.description,
            image: payload.image,
            price: payload.price,
            old_price: payload.old_price,
            rating: payload.rating,
            likes: payload.likes,
            category: payload.category,
        }
    }
}

/// A review as served (and echoed) by the review endpoints.
///
/// Transient read/response model; never persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    /// Author display name
    pub author: String,
    /// Creation time, epoch milliseconds
    pub date: i64,
    /// Rating, expected 1-5 (not validated)
    pub rating: u8,
    /// Review text
    pub text: String,
}

impl Review {
    /// Create a review record.
    #[must_use]
    pub fn new(author: impl Into<String>, date: i64, rating: u8, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            date,
            rating,
            text: text.into(),
        }
    }
}

/// Body of a review submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSubmission {
    /// Rating, expected 1-5 (not validated)
    pub rating: u8,
    /// Review text
    pub text: String,
}

// =============================================================================
// DeliveryApi Trait
// =============================================================================

/// Remote catalog/order service.
///
/// Unsuccessful statuses and transport failures both surface as `Err`;
/// callers apply their own failure policy.
#[async_trait]
pub trait DeliveryApi: Send + Sync {
    /// Fetch one catalog page.
    async fn get_dishes(&self, offset: u32, limit: u32) -> ApiResult<Vec<DishPayload>>;

    /// Fetch one page of reviews for a dish.
    async fn get_reviews(&self, dish_id: &str, offset: u32, limit: u32) -> ApiResult<Vec<Review>>;

    /// Submit a review for a dish; the service echoes the stored record.
    async fn send_review(&self, dish_id: &str, review: &ReviewSubmission) -> ApiResult<Review>;
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = ApiError::status(502, "bad gateway");
        assert!(matches!(err, ApiError::Status { status: 502, .. }));

        let err = ApiError::network("connection refused");
        assert!(matches!(err, ApiError::Network { .. }));
    }

    #[test]
    fn test_payload_to_dish_mapping() {
        let payload = DishPayload {
            id: "d1".to_string(),
            name: "Greek Salad".to_string(),
            description: "feta, olives".to_string(),
            image: "http://img/d1.png".to_string(),
            price: 270,
            old_price: Some(320),
            rating: 4.5,
            likes: 12,
            category: "salads".to_string(),
        };

        let dish: Dish = payload.into();

        assert_eq!(dish.id, "d1");
        assert_eq!(dish.name, "Greek Salad");
        assert_eq!(dish.price, 270);
        assert_eq!(dish.old_price, Some(320));
        assert_eq!(dish.category, "salads");
    }

    #[test]
    fn test_dish_payload_decodes_camel_case() {
        let json = r#"{
            "id": "d1",
            "name": "Greek Salad",
            "price": 270,
            "oldPrice": 320,
            "commentsCount": 3
        }"#;

        let payload: DishPayload = serde_json::from_str(json).unwrap();

        assert_eq!(payload.old_price, Some(320));
        assert_eq!(payload.rating, 0.0);
        assert!(payload.image.is_empty());
    }

    #[test]
    fn test_review_round_trip() {
        let review = Review::new("Ann", 1_631_232_000_000, 5, "great");
        let json = serde_json::to_string(&review).unwrap();
        let back: Review = serde_json::from_str(&json).unwrap();
        assert_eq!(back, review);
    }
}
