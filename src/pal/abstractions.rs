//! Platform abstraction trait definitions.

use std::fmt::Debug;
use std::time::Duration;

/// Provides monotonic clock readings.
///
/// This trait abstracts the underlying clock source, allowing for both the
/// real implementation (using the operating system's monotonic clock) and
/// fake implementations (for testing).
pub(crate) trait Platform: Debug + Send + Sync + 'static {
    /// Gets the current monotonic time.
    ///
    /// Readings are only meaningful relative to other readings from the same
    /// platform instance. The reported value never goes backwards and is not
    /// affected by system clock adjustments.
    fn monotonic_time(&self) -> Duration;
}
