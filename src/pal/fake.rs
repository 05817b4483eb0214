//! Fake platform implementation for testing.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::ERR_POISONED_LOCK;
use crate::pal::abstractions::Platform;

/// Fake implementation of the platform abstraction for testing.
///
/// This implementation allows tests to control the clock instead of relying
/// on the real monotonic clock. Multiple clones of the same `FakePlatform`
/// share the same underlying time state, allowing tests to modify time values
/// after platform creation to simulate time progression.
#[derive(Clone, Debug)]
pub(crate) struct FakePlatform {
    now: Arc<Mutex<Duration>>,
}

impl FakePlatform {
    /// Creates a new fake platform with the clock at zero.
    pub(crate) fn new() -> Self {
        Self {
            now: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    /// Sets the current time value.
    ///
    /// This affects all clones of this platform, allowing tests to simulate
    /// time progression during measurement.
    pub(crate) fn set_time(&self, time: Duration) {
        *self.now.lock().expect(ERR_POISONED_LOCK) = time;
    }

    /// Advances the current time value by the given amount.
    pub(crate) fn advance(&self, by: Duration) {
        let mut now = self.now.lock().expect(ERR_POISONED_LOCK);
        *now = now
            .checked_add(by)
            .expect("fake clock advanced beyond the maximum Duration value");
    }
}

impl Platform for FakePlatform {
    fn monotonic_time(&self) -> Duration {
        *self.now.lock().expect(ERR_POISONED_LOCK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initializes_with_zero_time() {
        let platform = FakePlatform::new();
        assert_eq!(platform.monotonic_time(), Duration::ZERO);
    }

    #[test]
    fn sets_time() {
        let platform = FakePlatform::new();
        platform.set_time(Duration::from_millis(150));

        assert_eq!(platform.monotonic_time(), Duration::from_millis(150));
    }

    #[test]
    fn advances_time() {
        let platform = FakePlatform::new();
        platform.set_time(Duration::from_millis(100));
        platform.advance(Duration::from_millis(50));

        assert_eq!(platform.monotonic_time(), Duration::from_millis(150));
    }

    #[test]
    fn shared_state_between_clones() {
        let platform1 = FakePlatform::new();
        let platform2 = platform1.clone();

        // Setting time on one clone affects the other.
        platform1.set_time(Duration::from_millis(100));
        assert_eq!(platform2.monotonic_time(), Duration::from_millis(100));

        platform2.advance(Duration::from_millis(100));
        assert_eq!(platform1.monotonic_time(), Duration::from_millis(200));
    }
}
