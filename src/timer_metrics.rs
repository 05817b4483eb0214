use std::time::Duration;

/// Sample store shared by every handle to the same timer.
///
/// Samples are append-only; all derived statistics are computed on demand from
/// the sequence. The pending start marker exists only between a `start` and
/// the matching `stop`.
#[derive(Clone, Debug, Default)]
pub(crate) struct TimerMetrics {
    samples: Vec<Duration>,
    pub(crate) pending_start: Option<Duration>,
}

impl TimerMetrics {
    /// Appends one completed sample to the sequence.
    pub(crate) fn record(&mut self, sample: Duration) {
        self.samples.push(sample);
    }

    pub(crate) fn count(&self) -> usize {
        self.samples.len()
    }

    pub(crate) fn total(&self) -> Duration {
        self.samples.iter().fold(Duration::ZERO, |total, sample| {
            total.checked_add(*sample).expect(
                "sample accumulation overflows Duration - this indicates an unrealistic scenario",
            )
        })
    }

    /// The most recent sample, if any.
    pub(crate) fn last(&self) -> Option<Duration> {
        self.samples.last().copied()
    }

    pub(crate) fn min(&self) -> Option<Duration> {
        self.samples.iter().copied().min()
    }

    pub(crate) fn max(&self) -> Option<Duration> {
        self.samples.iter().copied().max()
    }

    /// Mean sample duration, or `None` when no samples exist.
    pub(crate) fn average(&self) -> Option<Duration> {
        if self.samples.is_empty() {
            None
        } else {
            let count = u128::try_from(self.samples.len()).expect("usize always fits in u128");
            Some(Duration::from_nanos(
                self.total()
                    .as_nanos()
                    .checked_div(count)
                    .expect("guarded by if condition")
                    .try_into()
                    .expect("all realistic values fit in u64"),
            ))
        }
    }
}
