//! Wall-clock time tracking reports.

use std::fmt;
use std::time::Duration;

use crate::TimerMetrics;

/// Thread-safe snapshot of the statistics captured by a
/// [`Registry`](crate::Registry).
///
/// A `Report` is immutable and can be safely sent to other threads for
/// processing. Entries appear in registration order, the same order the
/// summary is printed in.
///
/// # Examples
///
/// ```
/// use wall_time_tracker::Registry;
///
/// # fn main() {
/// let registry = Registry::new();
/// registry.named_timer("test_work").time(|| {
///     std::hint::black_box(42 * 2);
/// });
///
/// let report = registry.to_report();
/// report.print_to_stdout();
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Report {
    entries: Vec<ReportEntry>,
}

/// Statistics for a single registered timer in a report.
#[derive(Clone, Debug)]
pub struct ReportEntry {
    name: String,
    count: usize,
    total: Duration,
    last: Option<Duration>,
    average: Option<Duration>,
    min: Option<Duration>,
    max: Option<Duration>,
}

impl Report {
    /// Creates a report from per-name sample store snapshots, preserving
    /// their order.
    pub(crate) fn from_snapshots(snapshots: Vec<(String, TimerMetrics)>) -> Self {
        let entries = snapshots
            .into_iter()
            .map(|(name, metrics)| ReportEntry {
                name,
                count: metrics.count(),
                total: metrics.total(),
                last: metrics.last(),
                average: metrics.average(),
                min: metrics.min(),
                max: metrics.max(),
            })
            .collect();

        Self { entries }
    }

    /// Prints the summary to stdout.
    ///
    /// Prints nothing if no samples were captured, not even an empty line.
    /// This matters when the process output is consumed by a harness that
    /// assigns meaning to every printed line.
    #[cfg_attr(test, mutants::skip)] // Too difficult to test stdout output reliably - manually tested.
    pub fn print_to_stdout(&self) {
        if self.is_empty() {
            return;
        }
        print!("{self}");
    }

    /// Whether no entry in this report has any recorded sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|entry| entry.count == 0)
    }

    /// Returns an iterator over the entries in registration order.
    ///
    /// This allows programmatic access to the same data that would be printed
    /// by [`print_to_stdout()`](Self::print_to_stdout).
    ///
    /// # Examples
    ///
    /// ```
    /// use wall_time_tracker::Registry;
    ///
    /// # fn main() {
    /// let registry = Registry::new();
    /// registry.named_timer("test_work").time(|| ());
    ///
    /// let report = registry.to_report();
    /// for entry in report.entries() {
    ///     println!("{} ran {} times", entry.name(), entry.count());
    /// }
    /// # }
    /// ```
    pub fn entries(&self) -> impl Iterator<Item = &ReportEntry> {
        self.entries.iter()
    }
}

impl ReportEntry {
    /// The name the timer was registered under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of samples recorded at snapshot time.
    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    /// The sum of all recorded samples.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.total
    }

    /// The most recent sample, or `None` when no samples were recorded.
    #[must_use]
    pub fn last(&self) -> Option<Duration> {
        self.last
    }

    /// The mean sample duration, or `None` when no samples were recorded.
    #[must_use]
    pub fn average(&self) -> Option<Duration> {
        self.average
    }

    /// The shortest sample, or `None` when no samples were recorded.
    #[must_use]
    pub fn min(&self) -> Option<Duration> {
        self.min
    }

    /// The longest sample, or `None` when no samples were recorded.
    #[must_use]
    pub fn max(&self) -> Option<Duration> {
        self.max
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.entries.is_empty() {
            return writeln!(f, "No wall-clock statistics captured.");
        }

        // Names are left-padded to the longest name's width so the columns
        // line up. Durations print as seconds in scientific notation with two
        // digits after the point.
        let width = self
            .entries
            .iter()
            .map(|entry| entry.name.len())
            .max()
            .unwrap_or(0);

        for entry in &self.entries {
            match (entry.last, entry.average) {
                (Some(last), Some(average)) => writeln!(
                    f,
                    "{name:<width$}: elapsed={last:.2e} s, calls={count}, avg={average:.2e} s",
                    name = entry.name,
                    last = last.as_secs_f64(),
                    count = entry.count,
                    average = average.as_secs_f64(),
                )?,
                _ => writeln!(f, "{name:<width$}: no samples", name = entry.name)?,
            }
        }

        Ok(())
    }
}
