//! Facade over the real and fake platform implementations.

use std::time::Duration;

use crate::pal::abstractions::Platform;
#[cfg(test)]
use crate::pal::fake::FakePlatform;
use crate::pal::real::RealPlatform;

/// Enum facade that dispatches to either the real or the fake platform.
///
/// This keeps the platform pluggable for testing without requiring dynamic
/// dispatch or generic parameters on the public types.
#[derive(Clone, Debug)]
pub(crate) enum PlatformFacade {
    Real(RealPlatform),

    #[cfg(test)]
    Fake(FakePlatform),
}

impl PlatformFacade {
    /// Creates a facade over the real operating system clock.
    pub(crate) fn real() -> Self {
        Self::Real(RealPlatform::new())
    }

    /// Creates a facade over a fake platform with test-controlled time.
    #[cfg(test)]
    pub(crate) fn fake(fake: FakePlatform) -> Self {
        Self::Fake(fake)
    }
}

impl Platform for PlatformFacade {
    fn monotonic_time(&self) -> Duration {
        match self {
            Self::Real(platform) => platform.monotonic_time(),
            #[cfg(test)]
            Self::Fake(platform) => platform.monotonic_time(),
        }
    }
}
