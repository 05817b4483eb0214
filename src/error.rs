//! Error types for timer operations.

use thiserror::Error;

/// Errors returned by [`Timer`](crate::Timer) operations.
///
/// These are caller mistakes, not recoverable runtime conditions, so nothing
/// is retried or logged. The error propagates directly to the caller of the
/// offending operation.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum TimerError {
    /// `stop()` was called without a matching `start()`.
    #[error("timer was stopped without a matching start")]
    NotStarted,

    /// A statistic that requires at least one sample was requested from a
    /// timer that has recorded none.
    #[error("timer has no recorded samples")]
    NoSamples,
}
