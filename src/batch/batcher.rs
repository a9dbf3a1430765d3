//! Batcher implementation
//!
//! Iterates records in order, serializes each to JSON text, derives its
//! partition key, and emits full batches of `batch_size` entries plus one
//! trailing partial batch for any remainder.

use super::types::{Batch, Entry};
use crate::config::JobConfig;
use crate::error::{Error, Result};
use crate::types::{JsonValue, Record, DEFAULT_PARTITION_FIELD, DEFAULT_PARTITION_KEY, MAX_BATCH_SIZE};

// ============================================================================
// Batcher
// ============================================================================

/// Groups records into fixed-size batches of wire-ready entries
#[derive(Debug, Clone)]
pub struct Batcher {
    /// Entries per emitted batch
    batch_size: usize,
    /// Record field the partition key is derived from
    partition_field: String,
}

impl Batcher {
    /// Create a batcher emitting batches of `batch_size` entries
    ///
    /// `batch_size` must be between 1 and the per-call cap of 500.
    pub fn new(batch_size: usize) -> Result<Self> {
        if batch_size == 0 || batch_size > MAX_BATCH_SIZE {
            return Err(Error::invalid_value(
                "batch_size",
                format!("must be between 1 and {MAX_BATCH_SIZE}"),
            ));
        }

        Ok(Self {
            batch_size,
            partition_field: DEFAULT_PARTITION_FIELD.to_string(),
        })
    }

    /// Create a batcher from a job config
    pub fn from_config(config: &JobConfig) -> Result<Self> {
        Ok(Self::new(config.batch_size)?.with_partition_field(&config.partition_field))
    }

    /// Set the record field the partition key is derived from
    #[must_use]
    pub fn with_partition_field(mut self, field: impl Into<String>) -> Self {
        self.partition_field = field.into();
        self
    }

    /// Entries per emitted batch
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches `record_count` records will produce
    pub fn batch_count(&self, record_count: usize) -> usize {
        record_count.div_ceil(self.batch_size)
    }

    /// Lazily batch a slice of records.
    ///
    /// Entries across all emitted batches reproduce the input order exactly;
    /// nothing is dropped or duplicated. An empty slice yields no batches.
    pub fn batches<'a>(&'a self, records: &'a [Record]) -> Batches<'a> {
        Batches {
            batcher: self,
            records: records.iter().enumerate(),
        }
    }

    /// Build the wire entry for one record
    fn entry(&self, index: usize, record: &Record) -> Result<Entry> {
        let data = serde_json::to_string(record)
            .map_err(|e| Error::serialization(index, e.to_string()))?;
        Ok(Entry::new(data, self.partition_key(record)))
    }

    /// Derive the partition key for a record.
    ///
    /// String values are used as-is; any other value uses its compact JSON
    /// text. An absent or null field falls back to the literal `"default"`.
    pub fn partition_key(&self, record: &Record) -> String {
        match record.get(&self.partition_field) {
            None | Some(JsonValue::Null) => DEFAULT_PARTITION_KEY.to_string(),
            Some(JsonValue::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

// ============================================================================
// Batches iterator
// ============================================================================

/// Lazy iterator of batches over a record slice
pub struct Batches<'a> {
    batcher: &'a Batcher,
    records: std::iter::Enumerate<std::slice::Iter<'a, Record>>,
}

impl Iterator for Batches<'_> {
    type Item = Result<Batch>;

    fn next(&mut self) -> Option<Self::Item> {
        let size = self.batcher.batch_size;
        let mut batch = Batch::with_capacity(size.min(self.records.len()));

        for (index, record) in self.records.by_ref() {
            match self.batcher.entry(index, record) {
                Ok(entry) => batch.push(entry),
                Err(e) => return Some(Err(e)),
            }

            if batch.len() == size {
                break;
            }
        }

        if batch.is_empty() {
            None
        } else {
            Some(Ok(batch))
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.batcher.batch_count(self.records.len());
        (remaining, Some(remaining))
    }
}
