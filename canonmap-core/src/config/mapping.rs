//! Mapping configuration.
//!
//! Loaded from JSON; every field is optional and falls back to its default.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CanonMapError;
use crate::models::DialectId;

/// How schema mapping reacts to an unmappable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureMode {
    /// Stop at the first unmappable column
    #[default]
    FailFast,
    /// Map every column and report all failures together
    CollectAll,
}

/// Startup configuration for the dialect registry and schema mapping.
///
/// # Example
/// ```rust
/// use canonmap_core::config::{FailureMode, MappingConfig};
/// use canonmap_core::models::DialectId;
///
/// let config = MappingConfig::from_json_str(r#"{"enabled_dialects": ["dolphindb"]}"#).unwrap();
///
/// assert_eq!(config.enabled_dialects, vec![DialectId::DolphinDb]);
/// assert_eq!(config.failure_mode, FailureMode::FailFast);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MappingConfig {
    /// Dialects registered at startup
    pub enabled_dialects: Vec<DialectId>,
    /// Behavior on unmappable columns
    pub failure_mode: FailureMode,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            enabled_dialects: DialectId::ALL.to_vec(),
            failure_mode: FailureMode::FailFast,
        }
    }
}

impl MappingConfig {
    /// Creates a configuration with every built-in dialect enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the enabled dialects.
    pub fn with_dialects(mut self, dialects: Vec<DialectId>) -> Self {
        self.enabled_dialects = dialects;
        self
    }

    /// Sets the failure mode.
    pub fn with_failure_mode(mut self, failure_mode: FailureMode) -> Self {
        self.failure_mode = failure_mode;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns a configuration error if no dialect is enabled or a dialect
    /// is listed twice
    pub fn validate(&self) -> crate::Result<()> {
        if self.enabled_dialects.is_empty() {
            return Err(CanonMapError::configuration(
                "enabled_dialects must list at least one dialect",
            ));
        }

        let mut seen = HashSet::new();
        for dialect in &self.enabled_dialects {
            if !seen.insert(dialect) {
                return Err(CanonMapError::configuration(format!(
                    "enabled_dialects lists '{}' more than once",
                    dialect
                )));
            }
        }

        Ok(())
    }

    /// Parses and validates a JSON configuration document.
    ///
    /// # Errors
    /// Returns a serialization error for malformed JSON or unknown dialect
    /// tokens, and a configuration error if validation fails
    pub fn from_json_str(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| CanonMapError::serialization("Failed to parse mapping configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    /// Returns an I/O error if the file cannot be read, otherwise as
    /// [`MappingConfig::from_json_str`]
    pub fn from_file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            CanonMapError::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;

        let config = Self::from_json_str(&contents)?;
        tracing::debug!(
            path = %path.display(),
            dialects = ?config.enabled_dialects,
            failure_mode = ?config.failure_mode,
            "Loaded mapping configuration"
        );
        Ok(config)
    }
}
