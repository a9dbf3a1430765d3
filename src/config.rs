//! Job configuration
//!
//! Loads and validates the `JobConfig` that drives a run. Configuration is
//! an explicit struct passed into the source and sink at construction time,
//! so both stay testable with in-memory implementations.
//!
//! Defaults mirror the job this tool replaces: region `ap-south-1`, stream
//! `data_stream_weather`, batches of 500, partition key from the `City`
//! field, credentials from the `kinesis-proj` secret scope.

use crate::error::{Error, Result};
use crate::types::{DEFAULT_PARTITION_FIELD, MAX_BATCH_SIZE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

// ============================================================================
// Job Config
// ============================================================================

/// Configuration for one ingestion run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobConfig {
    /// AWS region of the destination stream
    #[serde(default = "default_region")]
    pub region: String,

    /// Name of the destination Kinesis stream
    #[serde(default = "default_stream")]
    pub stream: String,

    /// Input document URL: `s3://`, `gs://`, `az://`, `file://` or local path
    #[serde(default = "default_input")]
    pub input: String,

    /// Entries per submission call (1..=500)
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Record field the partition key is derived from
    #[serde(default = "default_partition_field")]
    pub partition_field: String,

    /// Secret-store lookups for stream credentials.
    ///
    /// When absent, the sink falls back to the ambient AWS credential chain.
    #[serde(default = "default_secrets")]
    pub secrets: Option<SecretsConfig>,
}

/// Secret-store lookup coordinates for the stream credentials
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecretsConfig {
    /// Secret scope holding both keys
    pub scope: String,

    /// Key name for the access key id
    #[serde(default = "default_access_key")]
    pub access_key: String,

    /// Key name for the secret access key
    #[serde(default = "default_secret_key")]
    pub secret_key: String,
}

fn default_region() -> String {
    "ap-south-1".to_string()
}

fn default_stream() -> String {
    "data_stream_weather".to_string()
}

fn default_input() -> String {
    "messy_weather_data.json".to_string()
}

fn default_batch_size() -> usize {
    MAX_BATCH_SIZE
}

fn default_partition_field() -> String {
    DEFAULT_PARTITION_FIELD.to_string()
}

fn default_secrets() -> Option<SecretsConfig> {
    Some(SecretsConfig::default())
}

fn default_access_key() -> String {
    "access_key".to_string()
}

fn default_secret_key() -> String {
    "secret_key".to_string()
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            stream: default_stream(),
            input: default_input(),
            batch_size: default_batch_size(),
            partition_field: default_partition_field(),
            secrets: default_secrets(),
        }
    }
}

impl Default for SecretsConfig {
    fn default() -> Self {
        Self {
            scope: "kinesis-proj".to_string(),
            access_key: default_access_key(),
            secret_key: default_secret_key(),
        }
    }
}

impl JobConfig {
    /// Load a job config from a YAML file and validate it
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_str(&content)
    }

    /// Load a job config from a YAML string and validate it
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(yaml: &str) -> Result<Self> {
        let config: JobConfig = serde_yaml::from_str(yaml)
            .map_err(|e| Error::config(format!("Failed to parse config YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration before any I/O happens
    pub fn validate(&self) -> Result<()> {
        if self.region.is_empty() {
            return Err(Error::invalid_value("region", "cannot be empty"));
        }

        if self.stream.is_empty() {
            return Err(Error::invalid_value("stream", "cannot be empty"));
        }

        if self.input.is_empty() {
            return Err(Error::invalid_value("input", "cannot be empty"));
        }

        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(Error::invalid_value(
                "batch_size",
                format!("must be between 1 and {MAX_BATCH_SIZE}"),
            ));
        }

        if self.partition_field.is_empty() {
            return Err(Error::invalid_value("partition_field", "cannot be empty"));
        }

        if let Some(secrets) = &self.secrets {
            if secrets.scope.is_empty() {
                return Err(Error::invalid_value("secrets.scope", "cannot be empty"));
            }
            if secrets.access_key.is_empty() || secrets.secret_key.is_empty() {
                return Err(Error::invalid_value(
                    "secrets",
                    "access_key and secret_key names cannot be empty",
                ));
            }
        }

        Ok(())
    }
}
