//! Real platform implementation backed by the operating system clock.

use std::time::{Duration, Instant};

use crate::pal::abstractions::Platform;

/// Real monotonic clock implementation.
///
/// Readings are expressed as the time elapsed since this platform instance
/// was created, which keeps all values relative to a common epoch.
#[derive(Clone, Debug)]
pub(crate) struct RealPlatform {
    epoch: Instant,
}

impl RealPlatform {
    pub(crate) fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Platform for RealPlatform {
    fn monotonic_time(&self) -> Duration {
        self.epoch.elapsed()
    }
}
