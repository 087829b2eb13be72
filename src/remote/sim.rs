//! SimDeliveryApi - Scripted Remote Service
//!
//! Primary implementation for tests and development. Each endpoint drains a
//! queue of scripted outcomes; an exhausted queue reports the service as
//! unavailable, so an unscripted api is a remote that always fails.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use super::{ApiError, ApiResult, DeliveryApi, DishPayload, Review, ReviewSubmission};

/// Scripted remote service for deterministic tests.
///
/// Clones share the same script and recorded requests.
///
/// # Example
///
/// ```
/// use plateful::remote::{DeliveryApi, DishPayload, SimDeliveryApi};
///
/// # #[tokio::main]
/// # async fn main() {
/// let api = SimDeliveryApi::new()
///     .with_dish_page(vec![DishPayload::new("d1", "Borscht", 180)]);
///
/// assert_eq!(api.get_dishes(0, 10).await.unwrap().len(), 1);
/// // Script exhausted: the next page fails
/// assert!(api.get_dishes(10, 10).await.is_err());
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct SimDeliveryApi {
    /// Outcomes for `get_dishes`, drained per call
    dish_pages: Arc<Mutex<VecDeque<ApiResult<Vec<DishPayload>>>>>,
    /// Outcomes for `get_reviews`, drained per call
    review_pages: Arc<Mutex<VecDeque<ApiResult<Vec<Review>>>>>,
    /// Outcomes for `send_review`, drained per call
    review_posts: Arc<Mutex<VecDeque<ApiResult<Review>>>>,
    /// Recorded `(offset, limit)` of every `get_dishes` call
    dish_requests: Arc<Mutex<Vec<(u32, u32)>>>,
    /// Recorded submissions of every `send_review` call
    post_requests: Arc<Mutex<Vec<(String, ReviewSubmission)>>>,
}

impl SimDeliveryApi {
    /// Create an api with an empty script (every call fails).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a successful catalog page.
    #[must_use]
    pub fn with_dish_page(self, page: Vec<DishPayload>) -> Self {
        self.dish_pages.lock().unwrap().push_back(Ok(page));
        self
    }

    /// Script a failing catalog page.
    #[must_use]
    pub fn with_dish_page_error(self, err: ApiError) -> Self {
        self.dish_pages.lock().unwrap().push_back(Err(err));
        self
    }

    /// Script a successful review fetch.
    #[must_use]
    pub fn with_reviews(self, reviews: Vec<Review>) -> Self {
        self.review_pages.lock().unwrap().push_back(Ok(reviews));
        self
    }

    /// Script a failing review fetch.
    #[must_use]
    pub fn with_reviews_error(self, err: ApiError) -> Self {
        self.review_pages.lock().unwrap().push_back(Err(err));
        self
    }

    /// Script a successful review submission echo.
    #[must_use]
    pub fn with_post_echo(self, review: Review) -> Self {
        self.review_posts.lock().unwrap().push_back(Ok(review));
        self
    }

    /// Script a failing review submission.
    #[must_use]
    pub fn with_post_error(self, err: ApiError) -> Self {
        self.review_posts.lock().unwrap().push_back(Err(err));
        self
    }

    /// `(offset, limit)` pairs of catalog pages requested so far.
    #[must_use]
    pub fn dish_requests(&self) -> Vec<(u32, u32)> {
        self.dish_requests.lock().unwrap().clone()
    }

    /// `(dish_id, submission)` pairs posted so far.
    #[must_use]
    pub fn post_requests(&self) -> Vec<(String, ReviewSubmission)> {
        self.post_requests.lock().unwrap().clone()
    }

    fn exhausted() -> ApiError {
        ApiError::service_unavailable("no scripted response")
    }
}

#[async_trait]
impl DeliveryApi for SimDeliveryApi {
    async fn get_dishes(&self, offset: u32, limit: u32) -> ApiResult<Vec<DishPayload>> {
        self.dish_requests.lock().unwrap().push((offset, limit));

        self.dish_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::exhausted()))
    }

    async fn get_reviews(
        &self,
        _dish_id: &str,
        _offset: u32,
        _limit: u32,
    ) -> ApiResult<Vec<Review>> {
        self.review_pages
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::exhausted()))
    }

    async fn send_review(&self, dish_id: &str, review: &ReviewSubmission) -> ApiResult<Review> {
        self.post_requests
            .lock()
            .unwrap()
            .push((dish_id.to_string(), review.clone()));

        self.review_posts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Self::exhausted()))
    }
}

// =============================================================================
// Tests
// =============================================================================
