// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # Kinesis Feeder
//!
//! A single-purpose batch loader: read a JSON document from cloud or local
//! storage, serialize its records, and push them to an AWS Kinesis stream in
//! fixed-size batches.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ RecordSource │ ──▶ │   Batcher    │ ──▶ │  Dispatcher  │
//! │ (JSON file)  │     │ (500/batch)  │     │ (PutRecords) │
//! └──────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! Execution is strictly linear and sequential: the source reads the full
//! record set eagerly, the batcher chunks it preserving order, and the
//! dispatcher submits one batch at a time. There is no retry, no rollback,
//! and no concurrency; any failure aborts the run.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kinesis_feeder::config::JobConfig;
//! use kinesis_feeder::dispatch::KinesisSink;
//! use kinesis_feeder::job::IngestJob;
//! use kinesis_feeder::secrets::EnvSecretStore;
//! use kinesis_feeder::source::JsonFileSource;
//!
//! #[tokio::main]
//! async fn main() -> kinesis_feeder::Result<()> {
//!     let config = JobConfig::load("job.yaml")?;
//!     let source = JsonFileSource::parse(&config.input)?;
//!     let sink = KinesisSink::connect(&config, &EnvSecretStore::new()).await?;
//!
//!     let report = IngestJob::new(&config, &source, &sink).run().await?;
//!     println!("Total records sent: {}", report.records_sent);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Job configuration
pub mod config;

/// Secret store abstraction
pub mod secrets;

/// Record sources (JSON file read)
pub mod source;

/// Fixed-size batching of records
pub mod batch;

/// Batch submission to the streaming endpoint
pub mod dispatch;

/// Job orchestration
pub mod job;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
