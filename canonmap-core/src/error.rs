//! Error types for canonical type mapping.
//!
//! Two error kinds belong to the mapping domain itself:
//! - [`UnmappableTypeError`]: one column's vendor type has no canonical
//!   equivalent (data-level, per column)
//! - [`UnsupportedDialectError`]: the dialect is not registered
//!   (configuration-level, surfaced before any query runs)
//!
//! [`CanonMapError`] wraps both together with the ambient failure kinds
//! (configuration, I/O, serialization) so callers can use a single
//! [`Result`] alias.

use crate::models::DialectId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A column's vendor type has no canonical equivalent in the active dialect.
///
/// Retrying is pointless: mapping is a pure function of the column
/// metadata, so the same descriptor always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error(
    "{dialect} type '{vendor_type_name}' of column '{column_name}' has no canonical equivalent"
)]
pub struct UnmappableTypeError {
    /// Dialect whose mapper rejected the column
    pub dialect: DialectId,
    /// Normalized vendor type identifier, e.g. `IPADDR`
    pub vendor_type_name: String,
    /// Name of the offending column
    pub column_name: String,
}

impl UnmappableTypeError {
    /// Creates an unmappable-type error for a column.
    pub fn new(
        dialect: DialectId,
        vendor_type_name: impl Into<String>,
        column_name: impl Into<String>,
    ) -> Self {
        Self {
            dialect,
            vendor_type_name: vendor_type_name.into(),
            column_name: column_name.into(),
        }
    }
}

/// The requested dialect has no registered mapper.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Unsupported dialect: '{dialect}' is not registered")]
pub struct UnsupportedDialectError {
    /// Dialect token as requested by the caller
    pub dialect: String,
}

impl UnsupportedDialectError {
    /// Creates an unsupported-dialect error.
    pub fn new(dialect: impl Into<String>) -> Self {
        Self {
            dialect: dialect.into(),
        }
    }
}

/// Main error type for canonmap operations.
#[derive(Debug, Error)]
pub enum CanonMapError {
    /// A column's vendor type could not be mapped
    #[error(transparent)]
    UnmappableType(#[from] UnmappableTypeError),

    /// The dialect is unknown to the registry
    #[error(transparent)]
    UnsupportedDialect(#[from] UnsupportedDialectError),

    /// Schema mapping finished with one or more unmappable columns
    #[error("Schema for {dialect} has {} unmappable column(s)", failures.len())]
    IncompleteSchema {
        dialect: DialectId,
        failures: Vec<UnmappableTypeError>,
    },

    /// A mapper for this dialect is already registered
    #[error("Dialect '{dialect}' is already registered")]
    DuplicateDialect { dialect: DialectId },

    /// A dialect's static type table is malformed
    #[error("Invalid type table for {dialect}: {message}")]
    InvalidTypeTable { dialect: DialectId, message: String },

    /// Configuration or validation error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Conformance harness failure (not a mapping result)
    #[error("Conformance harness error: {message}")]
    Harness { message: String },

    /// I/O operation failed
    #[error("I/O operation failed: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization or deserialization failed
    #[error("Serialization failed: {context}")]
    Serialization {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with CanonMapError
pub type Result<T> = std::result::Result<T, CanonMapError>;

impl CanonMapError {
    /// Creates a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Creates a type table definition error
    pub fn invalid_type_table(dialect: DialectId, message: impl Into<String>) -> Self {
        Self::InvalidTypeTable {
            dialect,
            message: message.into(),
        }
    }

    /// Creates a conformance harness error
    pub fn harness(message: impl Into<String>) -> Self {
        Self::Harness {
            message: message.into(),
        }
    }

    /// Creates an I/O error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Creates a serialization error with context
    pub fn serialization(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            context: context.into(),
            source,
        }
    }

    /// Returns true for errors caused by configuration rather than column data.
    ///
    /// Configuration errors are fatal before any query runs; data errors are
    /// reported per column.
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedDialect(_)
                | Self::DuplicateDialect { .. }
                | Self::InvalidTypeTable { .. }
                | Self::Configuration { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmappable_error_names_column_and_type() {
        let error = UnmappableTypeError::new(DialectId::DolphinDb, "IPADDR", "col22");
        let message = error.to_string();

        assert!(message.contains("dolphindb"));
        assert!(message.contains("IPADDR"));
        assert!(message.contains("col22"));
    }

    #[test]
    fn test_unsupported_dialect_message() {
        let error = UnsupportedDialectError::new("oracle");
        assert_eq!(
            error.to_string(),
            "Unsupported dialect: 'oracle' is not registered"
        );
    }

    #[test]
    fn test_wrapped_errors_are_transparent() {
        let inner = UnmappableTypeError::new(DialectId::MySql, "BLOB", "payload");
        let wrapped = CanonMapError::from(inner.clone());
        assert_eq!(wrapped.to_string(), inner.to_string());
        assert!(!wrapped.is_configuration_error());

        let wrapped = CanonMapError::from(UnsupportedDialectError::new("db2"));
        assert!(wrapped.is_configuration_error());
    }

    #[test]
    fn test_error_creation() {
        let error = CanonMapError::configuration("enabled_dialects must not be empty");
        assert!(error.to_string().contains("enabled_dialects"));

        let error = CanonMapError::IncompleteSchema {
            dialect: DialectId::PostgreSql,
            failures: vec![
                UnmappableTypeError::new(DialectId::PostgreSql, "BYTEA", "a"),
                UnmappableTypeError::new(DialectId::PostgreSql, "INET", "b"),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Schema for postgresql has 2 unmappable column(s)"
        );
    }
}
