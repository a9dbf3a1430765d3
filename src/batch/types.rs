//! Batch data types

// ============================================================================
// Entry
// ============================================================================

/// One wire-ready entry: a serialized record paired with its partition key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Lossless JSON text of the record
    pub data: String,
    /// Routing key for the streaming endpoint
    pub partition_key: String,
}

impl Entry {
    /// Create a new entry
    pub fn new(data: impl Into<String>, partition_key: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            partition_key: partition_key.into(),
        }
    }
}

// ============================================================================
// Batch
// ============================================================================

/// An ordered group of entries submitted together in one call.
///
/// Every batch a `Batcher` emits holds between 1 and `batch_size` entries;
/// only the final batch of a run may be short.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    entries: Vec<Entry>,
}

impl Batch {
    /// Create an empty batch with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry
    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Number of entries in the batch
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the batch holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in input order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Consume the batch, yielding its entries
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

impl FromIterator<Entry> for Batch {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
