//! Callable wrappers that time every invocation.

use std::fmt;

use crate::Timer;

/// A callable bundled with the [`Timer`] that measures its invocations.
///
/// Every call is routed through [`Timer::time()`]: the elapsed time of the
/// inner callable is recorded as one sample and its return value is passed
/// through unchanged. If the callable panics, no sample is recorded for that
/// invocation.
///
/// The underlying timer is exposed via [`timer()`](Self::timer) so statistics
/// can be inspected without going back to the registry.
///
/// # Examples
///
/// ```
/// use wall_time_tracker::Registry;
///
/// let registry = Registry::new();
/// let mut fibonacci = registry.wrap("fibonacci", |n: u64| {
///     let (mut a, mut b) = (0_u64, 1_u64);
///     for _ in 0..n {
///         (a, b) = (b, a.wrapping_add(b));
///     }
///     a
/// });
///
/// for n in [10, 20, 30] {
///     let _ = fibonacci.call_with(n);
/// }
///
/// assert_eq!(fibonacci.timer().count(), 3);
/// ```
pub struct WrappedFn<F> {
    inner: F,
    timer: Timer,
}

impl<F> WrappedFn<F> {
    pub(crate) fn new(inner: F, timer: Timer) -> Self {
        Self { inner, timer }
    }

    /// Returns the timer that accumulates this callable's samples.
    #[must_use]
    pub fn timer(&self) -> &Timer {
        &self.timer
    }

    /// Invokes the wrapped callable, recording its elapsed time.
    pub fn call<R>(&mut self) -> R
    where
        F: FnMut() -> R,
    {
        let Self { inner, timer } = self;
        timer.time(|| inner())
    }

    /// Invokes the wrapped callable with one argument, recording its elapsed
    /// time.
    ///
    /// Callables with several parameters take them as a tuple.
    pub fn call_with<A, R>(&mut self, arg: A) -> R
    where
        F: FnMut(A) -> R,
    {
        let Self { inner, timer } = self;
        timer.time(|| inner(arg))
    }
}

impl<F> fmt::Debug for WrappedFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WrappedFn")
            .field("timer", &self.timer)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::pal::{FakePlatform, PlatformFacade};
    use crate::{Registry, TimerError};

    fn test_registry() -> (Registry, FakePlatform) {
        let platform = FakePlatform::new();
        let registry = Registry::with_platform(PlatformFacade::fake(platform.clone()));
        (registry, platform)
    }

    #[test]
    fn call_passes_through_return_value() {
        let (registry, _platform) = test_registry();
        let mut wrapped = registry.wrap("test", || "result");

        assert_eq!(wrapped.call(), "result");
        assert_eq!(wrapped.timer().count(), 1);
    }

    #[test]
    fn call_with_forwards_the_argument() {
        let (registry, _platform) = test_registry();
        let mut wrapped = registry.wrap("test", |(a, b): (u32, u32)| a + b);

        assert_eq!(wrapped.call_with((2, 3)), 5);
        assert_eq!(wrapped.timer().count(), 1);
    }

    #[test]
    fn each_call_records_one_sample() {
        let (registry, platform) = test_registry();
        let fake = platform.clone();
        let mut wrapped = registry.wrap("test", move |ms: u64| {
            fake.advance(Duration::from_millis(ms));
        });

        wrapped.call_with(10);
        wrapped.call_with(30);

        assert_eq!(wrapped.timer().count(), 2);
        assert_eq!(wrapped.timer().total(), Duration::from_millis(40));
        assert_eq!(wrapped.timer().average(), Ok(Duration::from_millis(20)));
    }

    #[test]
    fn panicking_call_records_no_sample() {
        let (registry, platform) = test_registry();
        let fake = platform.clone();
        let mut wrapped = registry.wrap("test", move || {
            fake.advance(Duration::from_millis(10));
            panic!("boom");
        });

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            wrapped.call::<()>();
        }));

        assert!(result.is_err());
        assert_eq!(wrapped.timer().count(), 0);
        assert_eq!(wrapped.timer().elapsed(), Err(TimerError::NoSamples));
    }

    #[test]
    fn captures_mutable_state() {
        let (registry, _platform) = test_registry();
        let mut calls = 0_u32;
        {
            let mut wrapped = registry.wrap("test", || calls += 1);
            wrapped.call::<()>();
            wrapped.call::<()>();
        }

        assert_eq!(calls, 2);
        assert_eq!(registry.named_timer("test").count(), 2);
    }

    #[test]
    fn shares_samples_with_the_named_timer() {
        let (registry, _platform) = test_registry();
        let mut wrapped = registry.wrap("shared", || ());
        wrapped.call::<()>();

        // The registry hands out a handle over the same sample store.
        assert_eq!(registry.named_timer("shared").count(), 1);
    }
}
