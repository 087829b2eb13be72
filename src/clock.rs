//! Clock - Injectable Time Source
//!
//! Review stubs carry the current wall-clock time, so the gateway takes its
//! clock as a capability: `SystemClock` in production, `SimClock` in tests.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};

// =============================================================================
// Clock Trait
// =============================================================================

/// Source of "now" in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Get current time in milliseconds.
    fn now_ms(&self) -> i64;
}

// =============================================================================
// SystemClock
// =============================================================================

/// Wall-clock time source.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

// =============================================================================
// SimClock
// =============================================================================

/// A simulated clock for deterministic testing.
///
/// - Time only moves forward
/// - All time operations are explicit
/// - No reliance on system time
///
/// Thread-safe via `Arc<AtomicI64>`; clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    /// Current time in milliseconds since epoch (thread-safe)
    current_ms: Arc<AtomicI64>,
}

impl SimClock {
    /// Create a new clock starting at time zero.
    ///
    /// # Example
    /// ```
    /// use plateful::clock::SimClock;
    /// let clock = SimClock::new();
    /// assert_eq!(clock.now_ms(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_ms: Arc::new(AtomicI64::new(0)),
        }
    }

    /// Create a clock starting at the given millisecond timestamp.
    #[must_use]
    pub fn at_ms(start_ms: i64) -> Self {
        Self {
            current_ms: Arc::new(AtomicI64::new(start_ms)),
        }
    }

    /// Create a clock starting at the given `DateTime`.
    #[must_use]
    pub fn at_datetime(dt: DateTime<Utc>) -> Self {
        Self::at_ms(dt.timestamp_millis())
    }

    /// Get current time in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> i64 {
        self.current_ms.load(Ordering::SeqCst)
    }

    /// Get current time as `DateTime<Utc>`.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(self.now_ms())
            .unwrap_or_else(|| DateTime::from_timestamp(0, 0).unwrap())
    }

    /// Advance time by the given milliseconds.
    ///
    /// # Panics
    /// Panics if ms is negative.
    ///
    /// # Returns
    /// The new current time.
    pub fn advance_ms(&self, ms: i64) -> i64 {
        // Precondition
        assert!(ms >= 0, "advance_ms({ms}) must be non-negative");

        let old_time = self.current_ms.fetch_add(ms, Ordering::SeqCst);
        let new_time = old_time + ms;

        // Postcondition
        assert!(new_time >= old_time, "time must not go backwards");

        new_time
    }

    /// Set time to an absolute value.
    ///
    /// # Panics
    /// Panics if the new time is less than the current time.
    pub fn set_ms(&self, ms: i64) {
        let current = self.now_ms();
        // Precondition
        assert!(ms >= current, "cannot set time backwards: {ms} < {current}");

        self.current_ms.store(ms, Ordering::SeqCst);
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> i64 {
        Self::now_ms(self)
    }
}

// =============================================================================
// Tests
// =============================================================================
