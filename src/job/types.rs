//! Job result types

use std::time::Duration;

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobReport {
    /// Records read from the source
    pub records_read: usize,
    /// Records submitted to the stream
    pub records_sent: usize,
    /// Batches submitted
    pub batches_sent: usize,
    /// Wall-clock duration of the run
    pub elapsed: Duration,
}
