//! Secret store implementations

use crate::error::{Error, Result};
use std::collections::HashMap;

// ============================================================================
// SecretStore Trait
// ============================================================================

/// Read-only access to secrets by scope and key.
///
/// Implementations return the stored value with surrounding whitespace
/// trimmed; secret values pasted into stores routinely pick up stray
/// newlines.
pub trait SecretStore: Send + Sync {
    /// Fetch the secret stored under `scope`/`key`
    fn get(&self, scope: &str, key: &str) -> Result<String>;
}

// ============================================================================
// Env Secret Store
// ============================================================================

/// Secret store backed by environment variables.
///
/// A secret `scope`/`key` maps to the variable `{SCOPE}_{KEY}`, uppercased,
/// with non-alphanumeric characters replaced by underscores. The scope
/// `kinesis-proj` with key `access_key` resolves `KINESIS_PROJ_ACCESS_KEY`.
#[derive(Debug, Clone, Default)]
pub struct EnvSecretStore;

impl EnvSecretStore {
    /// Create a new environment-backed secret store
    pub fn new() -> Self {
        Self
    }

    /// Environment variable name for a scope/key pair
    pub fn var_name(scope: &str, key: &str) -> String {
        format!("{scope}_{key}")
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() {
                    c.to_ascii_uppercase()
                } else {
                    '_'
                }
            })
            .collect()
    }
}

impl SecretStore for EnvSecretStore {
    fn get(&self, scope: &str, key: &str) -> Result<String> {
        let var = Self::var_name(scope, key);
        match std::env::var(&var) {
            Ok(value) => Ok(value.trim().to_string()),
            Err(_) => Err(Error::missing_secret(scope, key)),
        }
    }
}

// ============================================================================
// Static Secret Store
// ============================================================================

/// In-memory secret store for tests and local development
#[derive(Debug, Clone, Default)]
pub struct StaticSecretStore {
    values: HashMap<(String, String), String>,
}

impl StaticSecretStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret value
    #[must_use]
    pub fn with_secret(
        mut self,
        scope: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.values.insert((scope.into(), key.into()), value.into());
        self
    }
}

impl SecretStore for StaticSecretStore {
    fn get(&self, scope: &str, key: &str) -> Result<String> {
        self.values
            .get(&(scope.to_string(), key.to_string()))
            .map(|v| v.trim().to_string())
            .ok_or_else(|| Error::missing_secret(scope, key))
    }
}
