//! SyncEngine - Full-Catalog Synchronization
//!
//! Pages through the remote catalog until the first failing page, then
//! commits everything fetched so far as one upsert batch. Remote failures
//! never reach the caller (absorb-and-truncate); store failures do.

use tracing::debug;

use crate::constants::SYNC_PAGE_SIZE_COUNT;
use crate::remote::{DeliveryApi, DishPayload};
use crate::store::{Dish, DishStore, StoreResult};

/// Pulls dish pages from the remote service and persists them locally.
#[derive(Debug, Clone)]
pub struct SyncEngine<A: DeliveryApi, D: DishStore> {
    api: A,
    dishes: D,
}

impl<A: DeliveryApi, D: DishStore> SyncEngine<A, D> {
    /// Create a sync engine over the given collaborators.
    #[must_use]
    pub fn new(api: A, dishes: D) -> Self {
        Self { api, dishes }
    }

    /// Synchronize the local catalog with the remote service.
    ///
    /// Requests pages of [`SYNC_PAGE_SIZE_COUNT`] starting at offset 0,
    /// advancing by the page size per successful page, until a request
    /// returns an error. An empty successful page does not stop the loop.
    /// Everything fetched is committed in a single batch upsert after the
    /// loop exits; no page is retried and nothing is written incrementally.
    ///
    /// The first failing page silently truncates the pass: callers must not
    /// assume full catalog coverage after a call returns. If the very first
    /// page fails, the empty batch leaves existing records untouched.
    ///
    /// # Errors
    /// Returns an error only if the final batch write fails; remote
    /// failures are absorbed.
    #[tracing::instrument(skip(self))]
    pub async fn sync_catalog(&self) -> StoreResult<()> {
        let mut fetched: Vec<DishPayload> = Vec::new();
        let mut offset = 0;

        loop {
            match self.api.get_dishes(offset, SYNC_PAGE_SIZE_COUNT).await {
                Ok(page) => {
                    offset += SYNC_PAGE_SIZE_COUNT;
                    fetched.extend(page);
                }
                Err(err) => {
                    debug!(%err, offset, fetched = fetched.len(), "page failed, ending sync pass");
                    break;
                }
            }
        }

        let dishes: Vec<Dish> = fetched.into_iter().map(Dish::from).collect();
        self.dishes.insert_batch(&dishes).await
    }
}

// =============================================================================
// Tests
// =============================================================================
