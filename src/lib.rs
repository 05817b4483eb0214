//! Wall-clock time tracking utilities for benchmarks and performance analysis.
//!
//! This package provides utilities to accumulate elapsed wall-clock time per
//! named operation, enabling analysis of where the time goes in benchmarks,
//! tests and development tooling.
//!
//! The core functionality includes:
//! - [`Registry`] - Hands out timers keyed by name and reports their statistics
//! - [`Timer`] - Accumulates elapsed-duration samples with derived statistics
//! - [`ScopedTimer`] - Records one sample per scope, even on panic unwind
//! - [`WrappedFn`] - Instruments a callable so every invocation is timed
//! - [`Report`] - Immutable snapshot of registry statistics
//!
//! All readings come from a monotonic clock, never the system clock, so the
//! recorded durations are immune to clock adjustments.
//!
//! This package is not meant for use in production, serving only as a
//! development tool.
//!
//! # Simple Usage
//!
//! Time a block of code with a scope guard:
//!
//! ```
//! use wall_time_tracker::Registry;
//!
//! # fn main() {
//! let registry = Registry::new();
//!
//! // Record one sample per pass through this scope.
//! for _ in 0..3 {
//!     let timer = registry.named_timer("my_operation");
//!     let _scope = timer.scope();
//!     // Perform some work
//!     let mut sum = 0;
//!     for i in 0..10000 {
//!         sum += i;
//!     }
//!     std::hint::black_box(sum);
//! }
//!
//! // Print results
//! registry.print_summary();
//! # }
//! ```
//!
//! # Timing Functions
//!
//! Wrap a callable so every invocation is timed:
//!
//! ```
//! use wall_time_tracker::Registry;
//!
//! # fn main() {
//! let registry = Registry::new();
//! let mut wrapped = registry.wrap("parse", |input: &str| input.len());
//!
//! let len = wrapped.call_with("hello");
//! assert_eq!(len, 5);
//! assert_eq!(wrapped.timer().count(), 1);
//!
//! registry.print_summary();
//! # }
//! ```
//!
//! # Manual Start/Stop
//!
//! The underlying [`Timer`] can also be driven directly:
//!
//! ```
//! use wall_time_tracker::Registry;
//!
//! # fn main() -> Result<(), wall_time_tracker::TimerError> {
//! let registry = Registry::new();
//! let timer = registry.named_timer("manual");
//!
//! timer.start();
//! // Perform some work
//! let sample = timer.stop()?;
//!
//! assert_eq!(timer.count(), 1);
//! assert_eq!(timer.elapsed()?, sample);
//! # Ok(())
//! # }
//! ```
//!
//! # Threading
//!
//! The timing types are intended for single-threaded use cases. The registry
//! and its timers can be shared, but interleaving `start`/`stop` pairs on the
//! same timer from multiple threads produces samples that do not correspond to
//! any one caller's elapsed time. Single-threaded measurement is recommended
//! to ensure meaningful data.
//!
//! # Registry management
//!
//! Multiple [`Registry`] instances can be used concurrently as they track time
//! independently. Each registry maintains its own set of timers and statistics.

mod error;
mod pal;
mod registry;
mod report;
mod scoped_timer;
mod timer;
mod timer_metrics;
mod wrapped_fn;

pub use error::TimerError;
pub use registry::Registry;
pub use report::{Report, ReportEntry};
pub use scoped_timer::ScopedTimer;
pub use timer::Timer;
pub(crate) use timer_metrics::TimerMetrics;
pub use wrapped_fn::WrappedFn;

pub(crate) const ERR_POISONED_LOCK: &str =
    "lock was poisoned by a panic on another thread - recorded samples may be incomplete";
