//! Crate constants
//!
//! All limits use big-endian naming: `CATEGORY_SPECIFICS_UNIT_LIMIT`
//! Example: `SYNC_PAGE_SIZE_COUNT` (not `MAX_PAGE_SIZE`)
//!
//! Every constant includes units in the name:
//! - _COUNT for quantities
//! - _MS for milliseconds
//! - _`BYTES_MAX` for size limits

// =============================================================================
// Catalog Sync
// =============================================================================

/// Dishes requested per catalog page; offsets advance by this amount
pub const SYNC_PAGE_SIZE_COUNT: u32 = 10;

// =============================================================================
// Reviews
// =============================================================================

/// Reviews requested per fetch
pub const REVIEWS_PAGE_SIZE_COUNT: u32 = 10;

/// Offset used for review fetches (only the first page is read)
pub const REVIEWS_PAGE_OFFSET_DEFAULT: u32 = 0;

/// Author name on locally synthesized review echoes
pub const REVIEW_STUB_AUTHOR: &str = "stubName";

/// Anchor for the stub review fixture: 2021-09-10T00:00:00Z
pub const REVIEW_STUB_ANCHOR_MS: i64 = 1_631_232_000_000;

// =============================================================================
// Cart
// =============================================================================

/// Smallest count a stored cart line item may carry
pub const CART_ITEM_COUNT_MIN: u32 = 1;

// =============================================================================
// Search
// =============================================================================

/// Maximum length of a search query
pub const SEARCH_QUERY_BYTES_MAX: usize = 10_000;

/// Punctuation removed from titles before suggestion tokenization
pub const SEARCH_TITLE_STRIP_CHARS: &[char] = &['.', ',', '!', '?', '"', '-'];

// =============================================================================
// Time Constants
// =============================================================================

/// Milliseconds per second
pub const TIME_MS_PER_SEC: i64 = 1000;

/// Milliseconds per minute
pub const TIME_MS_PER_MIN: i64 = 60 * TIME_MS_PER_SEC;

/// Milliseconds per hour
pub const TIME_MS_PER_HOUR: i64 = 60 * TIME_MS_PER_MIN;

// =============================================================================
// Tests
// =============================================================================
