//! Dispatcher implementation

use crate::batch::Batch;
use crate::error::{Error, Result};
use async_trait::async_trait;

// ============================================================================
// StreamSink Trait
// ============================================================================

/// Submission endpoint for one batch.
///
/// A successful call is an irreversible external state change; there is no
/// compensating action.
#[async_trait]
pub trait StreamSink: Send + Sync {
    /// Submit one batch to `stream`, returning the number of records accepted
    async fn submit(&self, stream: &str, batch: &Batch) -> Result<usize>;
}

// ============================================================================
// Dispatcher
// ============================================================================

/// Submits batches sequentially and accumulates the running total
pub struct Dispatcher<'a> {
    sink: &'a dyn StreamSink,
    stream: &'a str,
}

impl<'a> Dispatcher<'a> {
    /// Create a dispatcher for one destination stream
    pub fn new(sink: &'a dyn StreamSink, stream: &'a str) -> Self {
        Self { sink, stream }
    }

    /// Submit every batch in order, one call per batch.
    ///
    /// Returns the total number of records submitted. A failed submission is
    /// fatal: it is not retried, remaining batches are never attempted, and
    /// the error carries the count of records submitted before the failure
    /// (batches already sent stay sent).
    pub async fn dispatch(
        &self,
        batches: impl Iterator<Item = Result<Batch>>,
    ) -> Result<usize> {
        let mut total = 0usize;
        let mut batch_no = 0usize;

        for batch in batches {
            let batch = batch?;
            batch_no += 1;

            let sent = self
                .sink
                .submit(self.stream, &batch)
                .await
                .map_err(|e| Error::submission(self.stream, total, e.to_string()))?;

            total += sent;
            tracing::debug!(
                stream = self.stream,
                batch = batch_no,
                entries = batch.len(),
                total,
                "batch submitted"
            );
        }

        tracing::info!(stream = self.stream, batches = batch_no, total, "dispatch complete");
        Ok(total)
    }
}
