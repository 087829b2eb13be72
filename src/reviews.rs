//! ReviewGateway - Resilient Review Retrieval and Submission
//!
//! Every remote failure is absorbed and replaced with deterministic local
//! data (absorb-and-stub): `load_reviews` serves a fixed fixture,
//! `send_review` echoes the submission under a stub author. Neither
//! operation can fail, and a caller cannot tell a stubbed record from a
//! remote one by its shape.

use tracing::debug;

use crate::clock::Clock;
use crate::constants::{
    REVIEWS_PAGE_OFFSET_DEFAULT, REVIEWS_PAGE_SIZE_COUNT, REVIEW_STUB_ANCHOR_MS,
    REVIEW_STUB_AUTHOR, TIME_MS_PER_HOUR,
};
use crate::remote::{DeliveryApi, Review, ReviewSubmission};

/// Fetches and submits reviews, falling back to stub data on any failure.
#[derive(Debug, Clone)]
pub struct ReviewGateway<A: DeliveryApi, K: Clock> {
    api: A,
    clock: K,
}

impl<A: DeliveryApi, K: Clock> ReviewGateway<A, K> {
    /// Create a gateway over the given remote service and clock.
    ///
    /// The clock only stamps locally synthesized `send_review` echoes;
    /// inject a `SimClock` to pin it in tests.
    #[must_use]
    pub fn new(api: A, clock: K) -> Self {
        Self { api, clock }
    }

    /// Load the first page of reviews for a dish.
    ///
    /// A successful response is returned verbatim. Any failure yields the
    /// fixed [`stub_reviews`] fixture instead; no error ever surfaces.
    #[tracing::instrument(skip(self))]
    pub async fn load_reviews(&self, dish_id: &str) -> Vec<Review> {
        match self
            .api
            .get_reviews(dish_id, REVIEWS_PAGE_OFFSET_DEFAULT, REVIEWS_PAGE_SIZE_COUNT)
            .await
        {
            Ok(reviews) => reviews,
            Err(err) => {
                debug!(%err, dish_id, "review fetch failed, serving stub reviews");
                stub_reviews()
            }
        }
    }

    /// Submit a review and return the service's echo of it.
    ///
    /// On any failure, returns a locally synthesized record with author
    /// [`REVIEW_STUB_AUTHOR`], the clock's current time, and the submitted
    /// rating/text echoed back; no error ever surfaces.
    #[tracing::instrument(skip(self, text))]
    pub async fn send_review(&self, dish_id: &str, rating: u8, text: &str) -> Review {
        let submission = ReviewSubmission {
            rating,
            text: text.to_string(),
        };

        match self.api.send_review(dish_id, &submission).await {
            Ok(review) => review,
            Err(err) => {
                debug!(%err, dish_id, "review submission failed, echoing stub");
                Review::new(REVIEW_STUB_AUTHOR, self.clock.now_ms(), rating, text)
            }
        }
    }
}

/// The fixed review fixture served when the remote fetch fails.
///
/// Three records around the 2021-09-10 anchor at -5h/0/+2h. The author and
/// text literals are opaque placeholder strings carried over byte-for-byte
/// from the upstream fixture.
#[must_use]
pub fn stub_reviews() -> Vec<Review> {
    vec![
        Review::new(
            "????????",
            REVIEW_STUB_ANCHOR_MS,
            4,
            "??????????????????????",
        ),
        Review::new(
            "??????????",
            REVIEW_STUB_ANCHOR_MS - 5 * TIME_MS_PER_HOUR,
            1,
            "???? ????????????",
        ),
        Review::new(
            "????????",
            REVIEW_STUB_ANCHOR_MS + 2 * TIME_MS_PER_HOUR,
            3,
            "??????-???? ??????????????",
        ),
    ]
}

// =============================================================================
// Tests
// =============================================================================
