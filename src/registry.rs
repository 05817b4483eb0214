//! Timer registry management.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

use crate::pal::PlatformFacade;
use crate::{ERR_POISONED_LOCK, Report, ScopedTimer, Timer, TimerMetrics, WrappedFn};

/// Hands out timers keyed by name, ensuring at most one sample store per
/// tracked name, and reports their statistics.
///
/// A registry is an explicit value owned by whoever needs timing - there is
/// no process-wide state, and multiple registries track independently.
///
/// # Examples
///
/// ```
/// use wall_time_tracker::Registry;
///
/// let registry = Registry::new();
///
/// for _ in 0..3 {
///     let timer = registry.named_timer("indexing");
///     let _scope = timer.scope();
///     // Perform the work being measured
///     let mut sum = 0;
///     for i in 0..1000 {
///         sum += i;
///     }
///     std::hint::black_box(sum);
/// }
///
/// // Print the statistics of all registered timers. Prints nothing if no
/// // samples were recorded, not even an empty line, which matters when the
/// // process output is consumed by a harness.
/// registry.print_summary();
/// ```
#[derive(Debug)]
pub struct Registry {
    timers: Arc<Mutex<RegisteredTimers>>,
    platform: PlatformFacade,
}

/// Name-keyed sample stores plus the order in which names first appeared.
/// Summary output follows registration order, not alphabetical order.
#[derive(Debug, Default)]
struct RegisteredTimers {
    by_name: HashMap<String, Arc<Mutex<TimerMetrics>>>,
    order: Vec<String>,
}

impl RegisteredTimers {
    fn get_or_insert(&mut self, name: &str) -> Arc<Mutex<TimerMetrics>> {
        if let Some(existing) = self.by_name.get(name) {
            return Arc::clone(existing);
        }

        let metrics = Arc::new(Mutex::new(TimerMetrics::default()));
        self.by_name.insert(name.to_owned(), Arc::clone(&metrics));
        self.order.push(name.to_owned());
        metrics
    }
}

impl Registry {
    /// Creates a new timer registry backed by the real monotonic clock.
    #[expect(
        clippy::new_without_default,
        reason = "to avoid ambiguity with the notion of a 'default registry' that is not actually a default registry"
    )]
    #[must_use]
    pub fn new() -> Self {
        Self {
            timers: Arc::new(Mutex::new(RegisteredTimers::default())),
            platform: PlatformFacade::real(),
        }
    }

    /// Creates a new registry with a specific platform.
    ///
    /// This method is primarily used for testing purposes to inject a fake
    /// clock that does not rely on real time passing.
    #[cfg(test)]
    pub(crate) fn with_platform(platform: PlatformFacade) -> Self {
        Self {
            timers: Arc::new(Mutex::new(RegisteredTimers::default())),
            platform,
        }
    }

    /// Creates or retrieves the timer registered under the given name.
    ///
    /// The first use of a name creates its sample store; every later use
    /// returns a handle over that same store, so statistics accumulated
    /// through different handles merge.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time_tracker::Registry;
    ///
    /// let registry = Registry::new();
    ///
    /// registry.named_timer("parse").time(|| ());
    /// registry.named_timer("parse").time(|| ());
    ///
    /// assert_eq!(registry.named_timer("parse").count(), 2);
    /// ```
    pub fn named_timer(&self, name: impl Into<String>) -> Timer {
        let name = name.into();

        let metrics = self
            .timers
            .lock()
            .expect(ERR_POISONED_LOCK)
            .get_or_insert(&name);

        Timer::new(metrics, self.platform.clone())
    }

    /// Creates a fresh anonymous scope guard that is not registered.
    ///
    /// The recorded sample is reachable only through the guard itself (via
    /// [`ScopedTimer::finish()`]) and never appears in the summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time_tracker::Registry;
    ///
    /// let registry = Registry::new();
    ///
    /// let scope = registry.scoped_timer();
    /// // Perform the work being measured
    /// let elapsed = scope.finish();
    /// println!("took {elapsed:?}");
    ///
    /// assert!(registry.is_empty());
    /// ```
    pub fn scoped_timer(&self) -> ScopedTimer {
        let timer = Timer::new(
            Arc::new(Mutex::new(TimerMetrics::default())),
            self.platform.clone(),
        );
        timer.scope()
    }

    /// Registers a timer under the given name and bundles it with the
    /// callable, timing every invocation.
    ///
    /// The name follows the same get-or-create rule as
    /// [`named_timer()`](Self::named_timer).
    pub fn wrap<F>(&self, name: impl Into<String>, f: F) -> WrappedFn<F> {
        WrappedFn::new(f, self.named_timer(name))
    }

    /// Creates a thread-safe report from this registry.
    ///
    /// The report contains a snapshot of all registered timers' statistics in
    /// registration order. Reports can be safely sent to other threads for
    /// processing.
    #[must_use]
    pub fn to_report(&self) -> Report {
        let timers = self.timers.lock().expect(ERR_POISONED_LOCK);

        let snapshots = timers
            .order
            .iter()
            .map(|name| {
                let metrics = timers
                    .by_name
                    .get(name)
                    .expect("every ordered name has an entry")
                    .lock()
                    .expect(ERR_POISONED_LOCK)
                    .clone();
                (name.clone(), metrics)
            })
            .collect::<Vec<_>>();

        Report::from_snapshots(snapshots)
    }

    /// Prints the statistics of all registered timers to stdout.
    ///
    /// This is a convenience method equivalent to
    /// `self.to_report().print_to_stdout()`. Prints nothing if no samples
    /// were recorded.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_summary(&self) {
        self.to_report().print_to_stdout();
    }

    /// Whether no registered timer has recorded any sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let timers = self.timers.lock().expect(ERR_POISONED_LOCK);
        timers
            .by_name
            .values()
            .all(|metrics| metrics.lock().expect(ERR_POISONED_LOCK).count() == 0)
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate to Report's Display implementation for consistency.
        write!(f, "{}", self.to_report())
    }
}
