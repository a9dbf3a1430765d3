//! Tests for the batch module

use super::*;
use crate::types::Record;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn record(value: serde_json::Value) -> Record {
    match value {
        serde_json::Value::Object(obj) => obj,
        _ => panic!("test records must be objects"),
    }
}

fn numbered_records(n: usize) -> Vec<Record> {
    (0..n).map(|i| record(json!({ "n": i }))).collect()
}

fn collect_batches(batcher: &Batcher, records: &[Record]) -> Vec<Batch> {
    batcher
        .batches(records)
        .collect::<crate::Result<Vec<_>>>()
        .unwrap()
}

// ============================================================================
// Batch size / shape
// ============================================================================

#[test_case(0, 500, 0; "empty input emits no batches")]
#[test_case(1, 500, 1; "single record")]
#[test_case(499, 500, 1; "one short of full")]
#[test_case(500, 500, 1; "exactly one full batch")]
#[test_case(501, 500, 2; "one record spills over")]
#[test_case(1000, 500, 2; "two full batches")]
#[test_case(1001, 500, 3; "two full plus remainder")]
#[test_case(7, 3, 3; "small batch size")]
fn test_batch_count(n: usize, batch_size: usize, expected: usize) {
    let batcher = Batcher::new(batch_size).unwrap();
    let records = numbered_records(n);
    let batches = collect_batches(&batcher, &records);

    assert_eq!(batches.len(), expected);
    assert_eq!(batcher.batch_count(n), expected);
}

#[test]
fn test_all_batches_full_except_last() {
    let batcher = Batcher::new(500).unwrap();
    let records = numbered_records(1001);
    let batches = collect_batches(&batcher, &records);

    assert_eq!(batches[0].len(), 500);
    assert_eq!(batches[1].len(), 500);
    assert_eq!(batches[2].len(), 1);
}

#[test]
fn test_exact_multiple_has_no_partial_batch() {
    let batcher = Batcher::new(5).unwrap();
    let records = numbered_records(15);
    let batches = collect_batches(&batcher, &records);

    assert_eq!(batches.len(), 3);
    assert!(batches.iter().all(|b| b.len() == 5));
}

#[test]
fn test_order_preserved_no_loss_no_duplication() {
    let batcher = Batcher::new(4).unwrap();
    let records = numbered_records(11);
    let batches = collect_batches(&batcher, &records);

    let all: Vec<&Entry> = batches.iter().flat_map(Batch::entries).collect();
    assert_eq!(all.len(), 11);

    for (i, entry) in all.iter().enumerate() {
        let parsed: serde_json::Value = serde_json::from_str(&entry.data).unwrap();
        assert_eq!(parsed["n"], i);
    }
}

#[test]
fn test_batcher_rejects_invalid_sizes() {
    assert!(Batcher::new(0).is_err());
    assert!(Batcher::new(501).is_err());
    assert!(Batcher::new(1).is_ok());
    assert!(Batcher::new(500).is_ok());
}

#[test]
fn test_batches_size_hint() {
    let batcher = Batcher::new(500).unwrap();
    let records = numbered_records(501);
    assert_eq!(batcher.batches(&records).size_hint(), (2, Some(2)));
}

// ============================================================================
// Partition key derivation
// ============================================================================

#[test]
fn test_partition_key_from_city_field() {
    let batcher = Batcher::new(500).unwrap();
    let rec = record(json!({ "City": "Mumbai", "temp": 31 }));
    assert_eq!(batcher.partition_key(&rec), "Mumbai");
}

#[test]
fn test_partition_key_missing_city_defaults() {
    let batcher = Batcher::new(500).unwrap();
    let rec = record(json!({ "temp": 31 }));
    assert_eq!(batcher.partition_key(&rec), "default");
}

#[test]
fn test_partition_key_null_city_defaults() {
    let batcher = Batcher::new(500).unwrap();
    let rec = record(json!({ "City": null }));
    assert_eq!(batcher.partition_key(&rec), "default");
}

#[test]
fn test_partition_key_non_string_uses_json_text() {
    let batcher = Batcher::new(500).unwrap();

    let rec = record(json!({ "City": 42 }));
    assert_eq!(batcher.partition_key(&rec), "42");

    let rec = record(json!({ "City": true }));
    assert_eq!(batcher.partition_key(&rec), "true");
}

#[test]
fn test_custom_partition_field() {
    let batcher = Batcher::new(500)
        .unwrap()
        .with_partition_field("Country");
    let rec = record(json!({ "City": "Mumbai", "Country": "India" }));
    assert_eq!(batcher.partition_key(&rec), "India");
}

// ============================================================================
// Entry serialization
// ============================================================================

#[test]
fn test_entries_carry_lossless_json() {
    let batcher = Batcher::new(500).unwrap();
    let records = vec![record(json!({
        "City": "Mumbai",
        "temp": 31.5,
        "tags": ["humid", "coastal"],
        "ok": true
    }))];
    let batches = collect_batches(&batcher, &records);

    let entry = &batches[0].entries()[0];
    assert_eq!(entry.partition_key, "Mumbai");

    let round: serde_json::Value = serde_json::from_str(&entry.data).unwrap();
    assert_eq!(round, json!(records[0]));
}

#[test]
fn test_from_config() {
    let config = crate::config::JobConfig {
        batch_size: 7,
        partition_field: "Region".to_string(),
        ..crate::config::JobConfig::default()
    };

    let batcher = Batcher::from_config(&config).unwrap();
    assert_eq!(batcher.batch_size(), 7);

    let rec = record(json!({ "Region": "south" }));
    assert_eq!(batcher.partition_key(&rec), "south");
}
