//! Cross-thread access to one [`Statistics`] value.
//!
//! The driver thread owns a [`SharedStatistics`] handle and mutates counters
//! through [`SharedStatistics::update`]. Observer threads hold a
//! [`StatisticsReader`] and take whole-struct snapshots, so a reader never
//! sees one counter half written.

use std::sync::{Arc, Mutex, MutexGuard};

use infinint::BigUint;

use crate::debug_stats::trace_published;
use crate::statistics::Statistics;

/// Mutex-guarded statistics shared between a driver and its observers.
///
/// Cloning the handle shares the same counters.
///
/// # Examples
///
/// ```
/// use std::thread;
///
/// use statistics::SharedStatistics;
///
/// let shared = SharedStatistics::new();
/// let reader = shared.reader();
///
/// let driver = {
///     let shared = shared.clone();
///     thread::spawn(move || {
///         for _ in 0..10 {
///             shared.update(|stats| stats.incr_treated());
///         }
///     })
/// };
/// driver.join().expect("driver thread");
///
/// assert_eq!(reader.snapshot().treated_str(), "10");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedStatistics {
    inner: Arc<Mutex<Statistics>>,
}

impl SharedStatistics {
    /// Shared handle over zeroed counters.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` with exclusive access to the counters.
    pub fn update<R>(&self, f: impl FnOnce(&mut Statistics) -> R) -> R {
        f(&mut lock(&self.inner))
    }

    /// Replaces the shared counters with a copy of `stats`.
    ///
    /// Suits a driver that accumulates into a private [`Statistics`] and
    /// publishes it periodically.
    pub fn publish(&self, stats: &Statistics) {
        let mut guard = lock(&self.inner);
        guard.clone_from(stats);
        trace_published(&guard.total().to_string());
    }

    /// Copy of the current counters.
    #[must_use]
    pub fn snapshot(&self) -> Statistics {
        lock(&self.inner).clone()
    }

    /// Read-only handle for an observer thread.
    #[must_use]
    pub fn reader(&self) -> StatisticsReader {
        StatisticsReader {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl From<Statistics> for SharedStatistics {
    fn from(stats: Statistics) -> Self {
        Self {
            inner: Arc::new(Mutex::new(stats)),
        }
    }
}

/// Read-only view of a [`SharedStatistics`].
#[derive(Clone, Debug)]
pub struct StatisticsReader {
    inner: Arc<Mutex<Statistics>>,
}

impl StatisticsReader {
    /// Copy of the current counters.
    #[must_use]
    pub fn snapshot(&self) -> Statistics {
        lock(&self.inner).clone()
    }

    /// Current [`Statistics::total`].
    #[must_use]
    pub fn total(&self) -> BigUint {
        lock(&self.inner).total()
    }
}

/// Counters stay usable after a panic in another holder; every update
/// leaves them in a consistent state.
fn lock(inner: &Mutex<Statistics>) -> MutexGuard<'_, Statistics> {
    inner.lock().unwrap_or_else(|poison| poison.into_inner())
}
