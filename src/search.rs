//! SearchIndex - Local Catalog Search and Suggestions
//!
//! Search is a thin wrapper over the store's title query; suggestions
//! tokenize the matched titles and count the words that themselves contain
//! the query.

use std::collections::HashMap;

use crate::constants::{SEARCH_QUERY_BYTES_MAX, SEARCH_TITLE_STRIP_CHARS};
use crate::store::{DishItem, DishStore, StoreResult};

/// Query-driven search over the local catalog.
#[derive(Debug, Clone)]
pub struct SearchIndex<D: DishStore> {
    dishes: D,
}

impl<D: DishStore> SearchIndex<D> {
    /// Create a search index over the given store.
    #[must_use]
    pub fn new(dishes: D) -> Self {
        Self { dishes }
    }

    /// Full catalog as display items.
    pub async fn find_all(&self) -> StoreResult<Vec<DishItem>> {
        let dishes = self.dishes.find_all().await?;
        Ok(dishes.iter().map(|d| d.to_item()).collect())
    }

    /// Dishes whose title contains `query` case-insensitively.
    ///
    /// An empty query returns the full catalog, equivalent to an
    /// unfiltered scan. Order carries no ranking.
    #[tracing::instrument(skip(self))]
    pub async fn search(&self, query: &str) -> StoreResult<Vec<DishItem>> {
        // Precondition
        debug_assert!(query.len() <= SEARCH_QUERY_BYTES_MAX, "query exceeds limit");

        if query.is_empty() {
            return self.find_all().await;
        }

        let dishes = self.dishes.find_by_title(query).await?;
        Ok(dishes.iter().map(|d| d.to_item()).collect())
    }

    /// Suggestion tokens for `query`: occurrence counts of the words in
    /// matched titles that contain the query.
    ///
    /// Each matched title is stripped of `. , ! ? " -`, lowercased, and
    /// split on single spaces; tokens that do not contain the query
    /// case-insensitively are dropped. Titles match on the whole-title
    /// substring first, so a matched title still only contributes the words
    /// that carry the query themselves. Map order is not significant.
    #[tracing::instrument(skip(self))]
    pub async fn suggestions(&self, query: &str) -> StoreResult<HashMap<String, usize>> {
        let matched = self.search(query).await?;
        let query_lower = query.to_lowercase();

        let mut counts: HashMap<String, usize> = HashMap::new();
        for item in &matched {
            let stripped: String = item
                .title
                .chars()
                .filter(|c| !SEARCH_TITLE_STRIP_CHARS.contains(c))
                .collect();

            for token in stripped.to_lowercase().split(' ') {
                if token.contains(&query_lower) {
                    *counts.entry(token.to_string()).or_insert(0) += 1;
                }
            }
        }

        Ok(counts)
    }
}

// =============================================================================
// Tests
// =============================================================================
