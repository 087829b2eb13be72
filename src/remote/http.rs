//! HttpDeliveryApi - Production Remote Client
//!
//! Feature-gated:
//! ```toml
//! plateful = { version = "0.1", features = ["http"] }
//! ```

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{ApiError, ApiResult, DeliveryApi, DishPayload, Review, ReviewSubmission};

// =============================================================================
// HttpDeliveryApi
// =============================================================================

/// HTTP client for the delivery service.
///
/// No retries, no backoff, no timeouts beyond what the underlying client
/// enforces: calls run to completion or failure, and callers apply policy.
///
/// # Example
///
/// ```rust,ignore
/// use plateful::remote::{DeliveryApi, HttpDeliveryApi};
///
/// #[tokio::main]
/// async fn main() {
///     let api = HttpDeliveryApi::new("https://delivery.example.com/api/v1");
///     let page = api.get_dishes(0, 10).await.unwrap();
///     println!("{} dishes", page.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct HttpDeliveryApi {
    /// HTTP client
    client: reqwest::Client,
    /// Service base URL, no trailing slash
    base_url: String,
}

impl HttpDeliveryApi {
    /// Create a new client for the service at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Use a preconfigured `reqwest::Client` (proxies, default headers).
    #[must_use]
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Get the service base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Map a non-success status and its body to an [`ApiError`].
    fn parse_error(status: reqwest::StatusCode, body: &str) -> ApiError {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                ApiError::Unauthorized
            }
            reqwest::StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimit,
            reqwest::StatusCode::SERVICE_UNAVAILABLE | reqwest::StatusCode::BAD_GATEWAY => {
                ApiError::service_unavailable(format!("HTTP {status}"))
            }
            reqwest::StatusCode::REQUEST_TIMEOUT | reqwest::StatusCode::GATEWAY_TIMEOUT => {
                ApiError::Timeout
            }
            _ => ApiError::status(status.as_u16(), body),
        }
    }

    /// Map a transport failure to an [`ApiError`].
    fn transport_error(err: &reqwest::Error) -> ApiError {
        if err.is_timeout() {
            ApiError::Timeout
        } else if err.is_connect() {
            ApiError::network("connection failed")
        } else {
            ApiError::network(err.to_string())
        }
    }

    /// Execute a request and decode the JSON body.
    async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        if !status.is_success() {
            return Err(Self::parse_error(status, &body));
        }

        serde_json::from_str(&body).map_err(|e| ApiError::decode(e.to_string()))
    }
}

#[async_trait]
impl DeliveryApi for HttpDeliveryApi {
    #[tracing::instrument(skip(self))]
    async fn get_dishes(&self, offset: u32, limit: u32) -> ApiResult<Vec<DishPayload>> {
        let response = self
            .client
            .get(format!("{}/dishes", self.base_url))
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        Self::decode_response(response).await
    }

    #[tracing::instrument(skip(self))]
    async fn get_reviews(&self, dish_id: &str, offset: u32, limit: u32) -> ApiResult<Vec<Review>> {
        let response = self
            .client
            .get(format!("{}/reviews/{dish_id}", self.base_url))
            .query(&[("offset", offset), ("limit", limit)])
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        Self::decode_response(response).await
    }

    #[tracing::instrument(skip(self, review), fields(rating = review.rating))]
    async fn send_review(&self, dish_id: &str, review: &ReviewSubmission) -> ApiResult<Review> {
        let response = self
            .client
            .post(format!("{}/reviews/{dish_id}", self.base_url))
            .json(review)
            .send()
            .await
            .map_err(|e| Self::transport_error(&e))?;

        Self::decode_response(response).await
    }
}

// =============================================================================
// Tests
// =============================================================================
