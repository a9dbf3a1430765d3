//! Batch dispatch
//!
//! Submits batches to the streaming endpoint, one at a time and in order,
//! keeping a running total of records sent. The endpoint sits behind the
//! `StreamSink` trait so the dispatcher is testable without the network.

mod dispatcher;
mod kinesis;


pub use dispatcher::{Dispatcher, StreamSink};
pub use kinesis::KinesisSink;
