//! Core rate limiter implementation.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::error::{MarkgateError, Result};

/// A shared permit pool admitting at most `capacity` operations per
/// `interval`.
///
/// Permits are consumed by [`RateLimiter::acquire`] and only return
/// through a background reset task that restores the pool to full
/// capacity once per interval. The reset is unconditional: permits left
/// over from the previous window are not carried forward, so callers
/// queued across several resets observe bursts of up to `capacity` per
/// window.
///
/// This struct is thread-safe and can be shared across multiple tasks.
pub struct RateLimiter {
    /// Permit pool; permits return only through the reset task
    permits: Arc<Semaphore>,
    /// Admissions granted since the last reset
    used: Arc<AtomicU64>,
    /// Maximum admissions per interval
    capacity: usize,
    /// Wall-clock period between resets
    interval: Duration,
    /// Background task restoring the pool once per interval
    reset_task: JoinHandle<()>,
}

impl RateLimiter {
    /// Create a new rate limiter and spawn its reset task.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn new(capacity: usize, interval: Duration) -> Self {
        assert!(capacity > 0, "rate limiter capacity must be positive");

        let permits = Arc::new(Semaphore::new(capacity));
        let used = Arc::new(AtomicU64::new(0));

        let reset_task = tokio::spawn({
            let permits = Arc::clone(&permits);
            let used = Arc::clone(&used);
            async move {
                let mut ticker = tokio::time::interval(interval);
                // The first tick completes immediately; consume it so the
                // first reset lands one full interval after construction.
                ticker.tick().await;
                loop {
                    ticker.tick().await;
                    let missing = capacity.saturating_sub(permits.available_permits());
                    if missing > 0 {
                        permits.add_permits(missing);
                    }
                    used.store(0, Ordering::SeqCst);
                    trace!(restored = missing, "Permit pool reset to capacity");
                }
            }
        });

        Self {
            permits,
            used,
            capacity,
            interval,
            reset_task,
        }
    }

    /// Wait until a permit is available, then consume it.
    ///
    /// Blocks the calling task without bound; the permit comes back to the
    /// pool only through the periodic reset. Dropping the returned future
    /// before it completes consumes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`MarkgateError::Canceled`] if the limiter was shut down
    /// while waiting (or before the call).
    pub async fn acquire(&self) -> Result<()> {
        trace!("Waiting for submission permit");
        let permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| MarkgateError::Canceled)?;
        permit.forget();
        let used = self.used.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(used, capacity = self.capacity, "Submission admitted");
        Ok(())
    }

    /// Tear the limiter down: wake all blocked callers with `Canceled`
    /// and stop the reset task.
    pub fn shutdown(&self) {
        debug!("Shutting down rate limiter");
        self.permits.close();
        self.reset_task.abort();
    }

    /// Maximum admissions per interval.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The wall-clock period between resets.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Permits currently available without waiting.
    pub fn available(&self) -> usize {
        self.permits.available_permits()
    }

    /// Admissions granted since the last reset.
    pub fn used_in_window(&self) -> u64 {
        self.used.load(Ordering::SeqCst)
    }
}

impl Drop for RateLimiter {
    fn drop(&mut self) {
        self.reset_task.abort();
    }
}
