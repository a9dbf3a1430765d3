//! Record sources
//!
//! A source produces the full record set for one run. The concrete
//! implementation reads a JSON document through `object_store`, so the same
//! code path covers S3, GCS, Azure and local files.

mod json;

#[cfg(test)]
mod tests;

pub use json::{parse_records, JsonFileSource, RecordSource};
