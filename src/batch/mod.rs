//! Fixed-size batching
//!
//! The one real algorithm in this crate: turn an ordered sequence of records
//! into wire-ready batches of bounded size, preserving order, with a
//! partition key derived per record.

mod batcher;
mod types;

#[cfg(test)]
mod tests;

pub use batcher::{Batcher, Batches};
pub use types::{Batch, Entry};
