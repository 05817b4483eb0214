//! Scope guards that record one sample per guarded scope.

use std::marker::PhantomData;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::pal::{Platform, PlatformFacade};
use crate::{ERR_POISONED_LOCK, Timer, TimerMetrics};

/// A guard that records exactly one elapsed-time sample for the scope it
/// lives in.
///
/// The sample spans from the guard's creation until it is dropped. Drop also
/// runs during panic unwind, so once a scope has been entered a sample is
/// always recorded - this is the guaranteed-stop contract that
/// [`Timer::time()`] deliberately does not provide.
///
/// The guard carries its own start instant and does not touch the owning
/// timer's pending start marker, so manual `start()`/`stop()` pairs on the
/// same timer can coexist with scope guards.
///
/// # Examples
///
/// ```
/// use wall_time_tracker::Registry;
///
/// let registry = Registry::new();
/// let timer = registry.named_timer("load");
/// {
///     let _scope = timer.scope();
///     // Perform the work being measured
///     let mut sum = 0;
///     for i in 0..1000 {
///         sum += i;
///     }
///     std::hint::black_box(sum);
/// } // One sample is recorded here
///
/// assert_eq!(timer.count(), 1);
/// ```
#[derive(Debug)]
#[must_use = "a sample is recorded between creation and drop"]
pub struct ScopedTimer {
    metrics: Arc<Mutex<TimerMetrics>>,
    platform: PlatformFacade,
    start_time: Duration,
    recorded: bool,

    _single_threaded: PhantomData<*const ()>,
}

impl ScopedTimer {
    pub(crate) fn new(timer: &Timer) -> Self {
        let platform = timer.platform().clone();
        let start_time = platform.monotonic_time();

        Self {
            metrics: timer.metrics(),
            platform,
            start_time,
            recorded: false,
            _single_threaded: PhantomData,
        }
    }

    /// Time elapsed since this guard was created.
    ///
    /// The sample recorded on drop will be at least this long.
    #[must_use]
    pub fn elapsed_so_far(&self) -> Duration {
        self.platform
            .monotonic_time()
            .saturating_sub(self.start_time)
    }

    /// Ends the scope now, recording the sample and returning it.
    ///
    /// This is equivalent to dropping the guard, except the caller also
    /// learns the recorded sample. Useful for anonymous timers whose sample
    /// store is not reachable through a registry.
    pub fn finish(mut self) -> Duration {
        self.record_now()
    }

    fn record_now(&mut self) -> Duration {
        let sample = self.elapsed_so_far();
        self.metrics.lock().expect(ERR_POISONED_LOCK).record(sample);
        self.recorded = true;
        sample
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        if !self.recorded {
            self.record_now();
        }
    }
}
