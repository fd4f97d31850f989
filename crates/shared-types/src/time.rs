//! # Time Source
//!
//! Abstract clock so expiry logic can be tested without sleeping.

use crate::entities::Timestamp;
use std::sync::atomic::{AtomicU64, Ordering};

/// Abstract interface for time operations (for testability).
pub trait TimeSource: Send + Sync {
    /// Current timestamp in milliseconds since epoch.
    fn now(&self) -> Timestamp;
}

/// Default time source using system time.
#[derive(Debug, Default)]
pub struct SystemTimeSource;

impl TimeSource for SystemTimeSource {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Controllable time source for unit tests.
///
/// Starts at a fixed instant and only moves when `advance` is called.
#[derive(Debug)]
pub struct FixedTimeSource {
    now_ms: AtomicU64,
}

impl FixedTimeSource {
    /// Create a clock frozen at `now_ms`.
    pub fn new(now_ms: Timestamp) -> Self {
        Self {
            now_ms: AtomicU64::new(now_ms),
        }
    }

    /// Advance the clock by `delta_ms` milliseconds.
    pub fn advance(&self, delta_ms: u64) {
        self.now_ms.fetch_add(delta_ms, Ordering::SeqCst);
    }

    /// Jump the clock to an absolute instant.
    pub fn set(&self, now_ms: Timestamp) {
        self.now_ms.store(now_ms, Ordering::SeqCst);
    }
}

impl TimeSource for FixedTimeSource {
    fn now(&self) -> Timestamp {
        self.now_ms.load(Ordering::SeqCst)
    }
}
