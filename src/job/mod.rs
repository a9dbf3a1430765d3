//! Job orchestration
//!
//! Wires source → batcher → dispatcher for one run: read the full record
//! set, chunk it, submit batch by batch, report totals. Strictly linear and
//! single-threaded; the first error aborts the run.

mod types;


pub use types::JobReport;

use crate::batch::Batcher;
use crate::config::JobConfig;
use crate::dispatch::{Dispatcher, StreamSink};
use crate::error::Result;
use crate::source::RecordSource;
use std::time::Instant;

/// One ingestion run over a source and a sink
pub struct IngestJob<'a> {
    config: &'a JobConfig,
    source: &'a dyn RecordSource,
    sink: &'a dyn StreamSink,
}

impl<'a> IngestJob<'a> {
    /// Create a job from explicit collaborators
    pub fn new(
        config: &'a JobConfig,
        source: &'a dyn RecordSource,
        sink: &'a dyn StreamSink,
    ) -> Self {
        Self {
            config,
            source,
            sink,
        }
    }

    /// Execute the run: load → batch → send
    pub async fn run(&self) -> Result<JobReport> {
        let start = Instant::now();

        tracing::info!(
            input = self.source.location(),
            stream = %self.config.stream,
            region = %self.config.region,
            "starting ingestion run"
        );

        let records = self.source.read_all().await?;
        tracing::info!(records = records.len(), "records loaded");

        let batcher = Batcher::from_config(self.config)?;
        let dispatcher = Dispatcher::new(self.sink, &self.config.stream);
        let records_sent = dispatcher.dispatch(batcher.batches(&records)).await?;

        Ok(JobReport {
            records_read: records.len(),
            records_sent,
            batches_sent: batcher.batch_count(records.len()),
            elapsed: start.elapsed(),
        })
    }
}
