//! Tests for the source module

use super::*;
use pretty_assertions::assert_eq;
use std::io::Write;

// ============================================================================
// Document parsing tests
// ============================================================================

#[test]
fn test_parse_array_of_objects() {
    let text = r#"[{"City": "Mumbai", "temp": 31}, {"City": "Pune", "temp": 27}]"#;
    let records = parse_records("test.json", text).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["City"], "Mumbai");
    assert_eq!(records[1]["temp"], 27);
}

#[test]
fn test_parse_single_object() {
    let records = parse_records("test.json", r#"{"City": "Delhi"}"#).unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["City"], "Delhi");
}

#[test]
fn test_parse_empty_array() {
    let records = parse_records("test.json", "[]").unwrap();
    assert!(records.is_empty());
}

#[test]
fn test_parse_ndjson() {
    let text = "{\"City\": \"Mumbai\"}\n\n{\"City\": \"Pune\"}\n";
    let records = parse_records("test.json", text).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["City"], "Mumbai");
    assert_eq!(records[1]["City"], "Pune");
}

#[test]
fn test_parse_rejects_scalar_document() {
    let err = parse_records("test.json", "42").unwrap_err();
    assert!(err.to_string().contains("got a number"));
}

#[test]
fn test_parse_rejects_non_object_array_element() {
    let err = parse_records("test.json", r#"[{"a": 1}, "oops"]"#).unwrap_err();
    assert!(err.to_string().contains("record 1 is not an object"));
}

#[test]
fn test_parse_rejects_malformed_json() {
    let err = parse_records("test.json", "{not json at all").unwrap_err();
    assert!(err.to_string().contains("malformed JSON"));
}

#[test]
fn test_parse_preserves_order() {
    let text = r#"[{"n": 0}, {"n": 1}, {"n": 2}, {"n": 3}]"#;
    let records = parse_records("test.json", text).unwrap();

    for (i, record) in records.iter().enumerate() {
        assert_eq!(record["n"], i);
    }
}

// ============================================================================
// JsonFileSource tests
// ============================================================================

#[test]
fn test_parse_local_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, "[]").unwrap();

    let source = JsonFileSource::parse(path.to_str().unwrap()).unwrap();
    assert_eq!(source.location(), path.to_str().unwrap());
}

#[test]
fn test_parse_s3_url_requires_key() {
    // A bucket with no object key is a configuration error
    let err = JsonFileSource::parse("s3://bucket-only").unwrap_err();
    assert!(err.to_string().contains("must name an object"));

    let err = JsonFileSource::parse("s3://bucket-only/").unwrap_err();
    assert!(err.to_string().contains("must name an object"));
}

#[tokio::test]
async fn test_read_all_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather.json");
    let mut file = std::fs::File::create(&path).unwrap();
    write!(
        file,
        r#"[{{"City": "Mumbai", "temp": 31}}, {{"City": "Pune"}}]"#
    )
    .unwrap();

    let source = JsonFileSource::parse(path.to_str().unwrap()).unwrap();
    let records = source.read_all().await.unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["City"], "Mumbai");
}

#[tokio::test]
async fn test_read_all_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.json");

    let source = JsonFileSource::parse(path.to_str().unwrap()).unwrap();
    let err = source.read_all().await.unwrap_err();
    assert!(err.to_string().contains("Failed to read"));
}

#[tokio::test]
async fn test_read_all_file_url_scheme() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data.json");
    std::fs::write(&path, r#"{"City": "Delhi"}"#).unwrap();

    let url = format!("file://{}", path.display());
    let source = JsonFileSource::parse(&url).unwrap();
    let records = source.read_all().await.unwrap();
    assert_eq!(records.len(), 1);
}
