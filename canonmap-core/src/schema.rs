//! Result-set schema mapping.
//!
//! Runs every column of one result set through a dialect mapper and
//! assembles the canonical schema used for all subsequent rows.

use serde::{Deserialize, Serialize};

use crate::config::FailureMode;
use crate::dialects::DialectTypeMapper;
use crate::error::{CanonMapError, Result, UnmappableTypeError};
use crate::models::{CanonicalType, ColumnDescriptor, DialectId};

/// One successfully mapped column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappedColumn {
    /// Column name as reported by the vendor
    pub name: String,
    /// Canonical type of the column
    pub canonical_type: CanonicalType,
}

/// Fully mapped schema of a result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalSchema {
    /// Dialect the columns came from
    pub dialect: DialectId,
    /// Columns in result-set order
    pub columns: Vec<MappedColumn>,
}

impl CanonicalSchema {
    /// Canonical types in column order.
    pub fn types(&self) -> Vec<CanonicalType> {
        self.columns.iter().map(|c| c.canonical_type).collect()
    }
}

/// Outcome of mapping a column list.
///
/// With [`FailureMode::CollectAll`] this may hold failures next to mapped
/// columns; an unmappable column never hides its siblings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaReport {
    /// Dialect of the mapper used
    pub dialect: DialectId,
    /// Mapped columns in input order
    pub columns: Vec<MappedColumn>,
    /// Unmappable columns in input order
    pub failures: Vec<UnmappableTypeError>,
}

impl SchemaReport {
    /// Whether every column mapped
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts to a schema if every column mapped.
    ///
    /// # Errors
    /// Returns [`CanonMapError::IncompleteSchema`] carrying every failure
    pub fn into_schema(self) -> Result<CanonicalSchema> {
        if self.failures.is_empty() {
            Ok(CanonicalSchema {
                dialect: self.dialect,
                columns: self.columns,
            })
        } else {
            Err(CanonMapError::IncompleteSchema {
                dialect: self.dialect,
                failures: self.failures,
            })
        }
    }
}

/// Maps every column through `mapper`.
///
/// # Errors
/// With [`FailureMode::FailFast`], returns the first column's
/// [`UnmappableTypeError`] wrapped in [`CanonMapError::UnmappableType`].
/// With [`FailureMode::CollectAll`] this never fails; check the report.
///
/// # Example
/// ```rust
/// use canonmap_core::{ColumnDescriptor, DialectId, DialectRegistry, FailureMode, map_columns};
///
/// let registry = DialectRegistry::with_builtins().unwrap();
/// let mapper = registry.lookup(DialectId::DolphinDb).unwrap();
/// let columns = vec![
///     ColumnDescriptor::new("SYMBOL", 0, 0, "sym"),
///     ColumnDescriptor::new("IPADDR", 0, 0, "addr"),
/// ];
///
/// let report = map_columns(mapper.as_ref(), &columns, FailureMode::CollectAll).unwrap();
/// assert_eq!(report.columns.len(), 1);
/// assert_eq!(report.failures[0].vendor_type_name, "IPADDR");
/// ```
pub fn map_columns(
    mapper: &dyn DialectTypeMapper,
    columns: &[ColumnDescriptor],
    failure_mode: FailureMode,
) -> Result<SchemaReport> {
    let mut report = SchemaReport {
        dialect: mapper.dialect(),
        columns: Vec::with_capacity(columns.len()),
        failures: Vec::new(),
    };

    for column in columns {
        match mapper.map(column) {
            Ok(canonical_type) => report.columns.push(MappedColumn {
                name: column.column_name().to_string(),
                canonical_type,
            }),
            Err(error) => match failure_mode {
                FailureMode::FailFast => return Err(error.into()),
                FailureMode::CollectAll => report.failures.push(error),
            },
        }
    }

    tracing::debug!(
        dialect = %report.dialect,
        mapped = report.columns.len(),
        failed = report.failures.len(),
        "Mapped result-set schema"
    );
    Ok(report)
}
