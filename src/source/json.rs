//! JSON file record source
//!
//! Reads one JSON document from cloud or local storage and converts it to
//! in-memory records. Accepted document shapes: an array of objects, a
//! single object, or newline-delimited JSON.

use crate::error::{Error, Result};
use crate::types::{JsonValue, Record};
use async_trait::async_trait;
use object_store::aws::AmazonS3Builder;
use object_store::azure::MicrosoftAzureBuilder;
use object_store::gcp::GoogleCloudStorageBuilder;
use object_store::local::LocalFileSystem;
use object_store::path::Path as ObjectPath;
use object_store::ObjectStore;
use std::sync::Arc;

// ============================================================================
// RecordSource Trait
// ============================================================================

/// Bulk read of the full record set for one run.
///
/// The read is eager: the whole document is materialized before any batch
/// is built, matching the single-pass shape of the job.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Read all records from the source
    async fn read_all(&self) -> Result<Vec<Record>>;

    /// Human-readable location for logging
    fn location(&self) -> &str;
}

// ============================================================================
// JsonFileSource
// ============================================================================

/// Record source backed by a JSON file in an object store
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    /// The object store implementation
    store: Arc<dyn ObjectStore>,
    /// Location of the document within the store
    path: ObjectPath,
    /// Original URL for logging and error messages
    url: String,
}

impl JsonFileSource {
    /// Parse an input URL and create the appropriate object store
    ///
    /// Supported formats:
    /// - `s3://bucket/key.json` - AWS S3
    /// - `gs://bucket/key.json` - Google Cloud Storage
    /// - `az://container/key.json` - Azure Blob Storage
    /// - `file:///path/data.json` or a plain local path
    pub fn parse(url: &str) -> Result<Self> {
        if url.starts_with("s3://") {
            Self::parse_s3(url)
        } else if url.starts_with("gs://") {
            Self::parse_gcs(url)
        } else if url.starts_with("az://") {
            Self::parse_azure(url)
        } else {
            Self::parse_local(url)
        }
    }

    /// Split `scheme://bucket/key` into bucket and key
    fn split_bucket(url: &str, scheme: &str) -> Result<(String, String)> {
        let without_scheme = url
            .strip_prefix(&format!("{scheme}://"))
            .ok_or_else(|| Error::config(format!("Invalid {scheme} URL: {url}")))?;

        match without_scheme.find('/') {
            Some(idx) if idx + 1 < without_scheme.len() => Ok((
                without_scheme[..idx].to_string(),
                without_scheme[idx + 1..].to_string(),
            )),
            _ => Err(Error::config(format!(
                "{scheme} URL must name an object within a bucket: {url}"
            ))),
        }
    }

    /// Parse S3 URL
    fn parse_s3(url: &str) -> Result<Self> {
        let (bucket, key) = Self::split_bucket(url, "s3")?;

        let store = AmazonS3Builder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| Error::config(format!("Failed to create s3 client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            path: ObjectPath::from(key),
            url: url.to_string(),
        })
    }

    /// Parse GCS URL
    fn parse_gcs(url: &str) -> Result<Self> {
        let (bucket, key) = Self::split_bucket(url, "gs")?;

        let store = GoogleCloudStorageBuilder::from_env()
            .with_bucket_name(bucket)
            .build()
            .map_err(|e| Error::config(format!("Failed to create GCS client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            path: ObjectPath::from(key),
            url: url.to_string(),
        })
    }

    /// Parse Azure Blob URL
    fn parse_azure(url: &str) -> Result<Self> {
        let (container, key) = Self::split_bucket(url, "az")?;

        let store = MicrosoftAzureBuilder::from_env()
            .with_container_name(container)
            .build()
            .map_err(|e| Error::config(format!("Failed to create Azure client: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            path: ObjectPath::from(key),
            url: url.to_string(),
        })
    }

    /// Parse local filesystem path
    fn parse_local(path: &str) -> Result<Self> {
        let trimmed = path.strip_prefix("file://").unwrap_or(path);
        let fs_path = std::path::Path::new(trimmed);

        let parent = match fs_path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => std::path::Path::new("."),
        };
        let file_name = fs_path
            .file_name()
            .ok_or_else(|| Error::config(format!("Input path has no file name: {path}")))?;

        let store = LocalFileSystem::new_with_prefix(parent)
            .map_err(|e| Error::config(format!("Failed to open directory for {path}: {e}")))?;

        Ok(Self {
            store: Arc::new(store),
            path: ObjectPath::from(file_name.to_string_lossy().as_ref()),
            url: path.to_string(),
        })
    }
}

#[async_trait]
impl RecordSource for JsonFileSource {
    async fn read_all(&self) -> Result<Vec<Record>> {
        let result = self
            .store
            .get(&self.path)
            .await
            .map_err(|e| Error::read(&self.url, e.to_string()))?;

        let bytes = result
            .bytes()
            .await
            .map_err(|e| Error::read(&self.url, e.to_string()))?;

        let text = std::str::from_utf8(&bytes)
            .map_err(|e| Error::read(&self.url, format!("not valid UTF-8: {e}")))?;

        parse_records(&self.url, text)
    }

    fn location(&self) -> &str {
        &self.url
    }
}

// ============================================================================
// Document parsing
// ============================================================================

/// Parse a JSON document into records
///
/// Accepts an array of objects, a single object, or newline-delimited JSON.
/// Any other shape is a read error; nothing is skipped or cleansed.
pub fn parse_records(location: &str, text: &str) -> Result<Vec<Record>> {
    match serde_json::from_str::<JsonValue>(text) {
        Ok(JsonValue::Array(values)) => values
            .into_iter()
            .enumerate()
            .map(|(i, v)| into_record(location, i, v))
            .collect(),
        Ok(JsonValue::Object(obj)) => Ok(vec![obj]),
        Ok(other) => Err(Error::read(
            location,
            format!("expected an object or array of objects, got {}", kind(&other)),
        )),
        // Whole-document parse failed: try newline-delimited JSON
        Err(parse_err) => parse_ndjson(location, text, &parse_err),
    }
}

/// Parse newline-delimited JSON, one object per non-empty line
fn parse_ndjson(location: &str, text: &str, doc_err: &serde_json::Error) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let value: JsonValue = serde_json::from_str(line).map_err(|_| {
            // Neither a document nor NDJSON; report the document-level error
            Error::read(location, format!("malformed JSON: {doc_err}"))
        })?;
        records.push(into_record(location, line_no, value)?);
    }

    if records.is_empty() {
        return Err(Error::read(location, format!("malformed JSON: {doc_err}")));
    }

    Ok(records)
}

/// Require a JSON value to be an object record
fn into_record(location: &str, index: usize, value: JsonValue) -> Result<Record> {
    match value {
        JsonValue::Object(obj) => Ok(obj),
        other => Err(Error::read(
            location,
            format!("record {index} is not an object, got {}", kind(&other)),
        )),
    }
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}
