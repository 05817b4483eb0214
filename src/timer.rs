//! Elapsed wall-clock time accumulation.

use std::fmt;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::{Platform, PlatformFacade};
use crate::{ERR_POISONED_LOCK, ScopedTimer, TimerError, TimerMetrics};

/// Accumulates elapsed-duration samples and derives statistics from them.
///
/// A `Timer` is a handle over a shared sample store. Every handle obtained
/// from [`Registry::named_timer()`](crate::Registry::named_timer) with the
/// same name observes and extends the same sample sequence.
///
/// One sample is recorded per completed `start`/`stop` pair, per completed
/// [`scope()`](Self::scope) guard, or per [`time()`](Self::time) invocation
/// that returns normally.
///
/// # Examples
///
/// ```
/// use wall_time_tracker::Registry;
///
/// let registry = Registry::new();
/// let timer = registry.named_timer("request_handling");
///
/// for _ in 0..3 {
///     let _scope = timer.scope();
///     // Perform the work being measured
///     let mut sum = 0;
///     for i in 0..1000 {
///         sum += i;
///     }
///     std::hint::black_box(sum);
/// }
///
/// assert_eq!(timer.count(), 3);
/// println!("average: {:?}", timer.average());
/// ```
#[derive(Debug)]
pub struct Timer {
    metrics: Arc<Mutex<TimerMetrics>>,
    platform: PlatformFacade,
}

impl Timer {
    pub(crate) fn new(metrics: Arc<Mutex<TimerMetrics>>, platform: PlatformFacade) -> Self {
        Self { metrics, platform }
    }

    /// Returns a reference to the platform facade for creating scope guards.
    pub(crate) fn platform(&self) -> &PlatformFacade {
        &self.platform
    }

    /// Returns a clone of the shared sample store for use by scope guards.
    pub(crate) fn metrics(&self) -> Arc<Mutex<TimerMetrics>> {
        Arc::clone(&self.metrics)
    }

    /// Records the current monotonic instant as the pending start marker.
    ///
    /// Calling `start()` again without an intervening [`stop()`](Self::stop)
    /// silently discards the previous marker; nested measurement is not
    /// supported.
    pub fn start(&self) {
        let now = self.platform.monotonic_time();
        self.metrics.lock().expect(ERR_POISONED_LOCK).pending_start = Some(now);
    }

    /// Completes the pending measurement and appends it as a sample.
    ///
    /// Returns the recorded sample.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NotStarted`] when no unmatched [`start()`](Self::start)
    /// preceded this call.
    pub fn stop(&self) -> Result<Duration, TimerError> {
        let now = self.platform.monotonic_time();
        let mut metrics = self.metrics.lock().expect(ERR_POISONED_LOCK);
        let started = metrics.pending_start.take().ok_or(TimerError::NotStarted)?;

        let sample = now.saturating_sub(started);
        metrics.record(sample);
        Ok(sample)
    }

    /// Creates a guard that records exactly one sample when it is dropped.
    ///
    /// The sample spans from this call to the drop of the guard. Drop also
    /// runs during panic unwind, so a sample is recorded even when the guarded
    /// body panics.
    pub fn scope(&self) -> ScopedTimer {
        ScopedTimer::new(self)
    }

    /// Invokes the callable and records its elapsed time as one sample.
    ///
    /// The callable's return value is passed through unchanged. If the
    /// callable panics, no sample is recorded for that invocation - unlike
    /// [`scope()`](Self::scope), which always records on unwind.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time_tracker::Registry;
    ///
    /// let registry = Registry::new();
    /// let timer = registry.named_timer("checksum");
    ///
    /// let sum: u32 = timer.time(|| (0..100).sum());
    /// assert_eq!(sum, 4950);
    /// assert_eq!(timer.count(), 1);
    /// ```
    pub fn time<R>(&self, f: impl FnOnce() -> R) -> R {
        self.start();
        let result = f();
        self.stop()
            .expect("stop cannot fail immediately after start");
        result
    }

    /// Returns the number of recorded samples.
    #[must_use]
    pub fn count(&self) -> usize {
        self.metrics.lock().expect(ERR_POISONED_LOCK).count()
    }

    /// Returns the sum of all recorded samples.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.metrics.lock().expect(ERR_POISONED_LOCK).total()
    }

    /// Returns the most recently recorded sample.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NoSamples`] when no samples have been recorded.
    pub fn elapsed(&self) -> Result<Duration, TimerError> {
        self.metrics
            .lock()
            .expect(ERR_POISONED_LOCK)
            .last()
            .ok_or(TimerError::NoSamples)
    }

    /// Returns the mean duration across all recorded samples.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NoSamples`] when no samples have been recorded.
    pub fn average(&self) -> Result<Duration, TimerError> {
        self.metrics
            .lock()
            .expect(ERR_POISONED_LOCK)
            .average()
            .ok_or(TimerError::NoSamples)
    }

    /// Returns the shortest recorded sample.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NoSamples`] when no samples have been recorded.
    pub fn min(&self) -> Result<Duration, TimerError> {
        self.metrics
            .lock()
            .expect(ERR_POISONED_LOCK)
            .min()
            .ok_or(TimerError::NoSamples)
    }

    /// Returns the longest recorded sample.
    ///
    /// # Errors
    ///
    /// Returns [`TimerError::NoSamples`] when no samples have been recorded.
    pub fn max(&self) -> Result<Duration, TimerError> {
        self.metrics
            .lock()
            .expect(ERR_POISONED_LOCK)
            .max()
            .ok_or(TimerError::NoSamples)
    }
}

impl fmt::Display for Timer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.average() {
            Ok(average) => write!(f, "{average:?} (average)"),
            Err(_) => write!(f, "no samples"),
        }
    }
}
