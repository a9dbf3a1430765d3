//! Common types used throughout kinesis-feeder
//!
//! Shared type aliases and constants used across multiple modules.

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// A single input record: field name to JSON value, no fixed schema.
///
/// Records are read once, held for the duration of one run, and never
/// mutated.
pub type Record = JsonObject;

// ============================================================================
// Constants
// ============================================================================

/// Maximum entries per submission call (the Kinesis `PutRecords` cap).
///
/// Also the default batch size.
pub const MAX_BATCH_SIZE: usize = 500;

/// Record field the partition key is derived from by default.
pub const DEFAULT_PARTITION_FIELD: &str = "City";

/// Partition key used when the partition field is absent or null.
pub const DEFAULT_PARTITION_KEY: &str = "default";
