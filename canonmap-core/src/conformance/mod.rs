//! Conformance harness for dialect mappers.
//!
//! A conformance run describes a test table through a [`MetadataSource`],
//! maps each column with the registered mapper and compares the result with
//! a hand-written oracle. The source may be a live database or the in-memory
//! [`StaticMetadataSource`], which lets the mapping contract be checked
//! without any database at all.
//!
//! # Module Structure
//! - `oracle`: expected mappings per dialect
//! - `fixtures`: edge values for populating test tables
//! - `postgres`: live PostgreSQL source (feature `postgresql`)

pub mod fixtures;
pub mod oracle;

#[cfg(feature = "postgresql")]
pub mod postgres;

use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{CanonMapError, Result, UnmappableTypeError};
use crate::models::{CanonicalType, ColumnDescriptor, DialectId};
use crate::registry::DialectRegistry;

pub use oracle::{OracleEntry, oracle_for};

#[cfg(feature = "postgresql")]
pub use postgres::PostgresMetadataSource;

/// Column metadata provider for a conformance run.
#[async_trait]
pub trait MetadataSource: Send + Sync {
    /// Dialect of the described tables
    fn dialect(&self) -> DialectId;

    /// Describes a table's columns in declaration order.
    ///
    /// # Errors
    /// Returns a harness error if the table does not exist or metadata
    /// cannot be read
    async fn describe_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>>;
}

/// In-memory source standing in for a database.
#[derive(Debug, Clone)]
pub struct StaticMetadataSource {
    dialect: DialectId,
    tables: HashMap<String, Vec<ColumnDescriptor>>,
}

impl StaticMetadataSource {
    /// Creates a source with no tables.
    pub fn new(dialect: DialectId) -> Self {
        Self {
            dialect,
            tables: HashMap::new(),
        }
    }

    /// Adds or replaces a table.
    pub fn with_table(mut self, table: impl Into<String>, columns: Vec<ColumnDescriptor>) -> Self {
        self.tables.insert(table.into(), columns);
        self
    }

    /// Creates a source holding one table built from an oracle.
    ///
    /// Columns are named `col1`, `col2`, ... in oracle order and report the
    /// oracle's declared type, precision and scale.
    pub fn from_oracle(
        dialect: DialectId,
        table: impl Into<String>,
        oracle: &[OracleEntry],
    ) -> Self {
        let columns = oracle
            .iter()
            .zip(1..)
            .map(|(entry, ordinal): (&OracleEntry, u32)| {
                ColumnDescriptor::new(
                    entry.vendor_type,
                    entry.precision,
                    entry.scale,
                    format!("col{}", ordinal),
                )
            })
            .collect();
        Self::new(dialect).with_table(table, columns)
    }
}

#[async_trait]
impl MetadataSource for StaticMetadataSource {
    fn dialect(&self) -> DialectId {
        self.dialect
    }

    async fn describe_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        self.tables.get(table).cloned().ok_or_else(|| {
            CanonMapError::harness(format!("Table '{}' does not exist in static source", table))
        })
    }
}

/// Result of mapping one column during a conformance run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnOutcome {
    /// Column name
    pub column: String,
    /// Vendor type the source reported
    pub vendor_type: String,
    /// Oracle expectation; `None` means the type must be rejected
    pub expected: Option<CanonicalType>,
    /// What the mapper returned
    pub actual: std::result::Result<CanonicalType, UnmappableTypeError>,
    /// Whether `actual` agrees with `expected`
    pub passed: bool,
}

/// Outcome of a conformance run over one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConformanceReport {
    /// Dialect under test
    pub dialect: DialectId,
    /// Table that was described
    pub table: String,
    /// One outcome per column, in column order
    pub outcomes: Vec<ColumnOutcome>,
}

impl ConformanceReport {
    /// Whether every column matched the oracle
    pub fn all_passed(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    /// Columns that did not match the oracle
    pub fn failures(&self) -> Vec<&ColumnOutcome> {
        self.outcomes.iter().filter(|o| !o.passed).collect()
    }
}

/// Runs one table through the registered mapper and checks it against `oracle`.
///
/// Columns are paired with oracle entries by position. A mapped column
/// passes when it equals the expected type; a rejected column passes only
/// when the oracle expects rejection.
///
/// # Errors
/// Returns an error if the source's dialect is not registered, the table
/// cannot be described, or its column count differs from the oracle's
pub async fn run_conformance(
    source: &dyn MetadataSource,
    registry: &DialectRegistry,
    table: &str,
    oracle: &[OracleEntry],
) -> Result<ConformanceReport> {
    let dialect = source.dialect();
    let mapper = registry.lookup(dialect)?;
    let columns = source.describe_columns(table).await?;

    if columns.len() != oracle.len() {
        return Err(CanonMapError::harness(format!(
            "Table '{}' has {} column(s) but the {} oracle lists {}",
            table,
            columns.len(),
            dialect,
            oracle.len()
        )));
    }

    let outcomes: Vec<ColumnOutcome> = columns
        .iter()
        .zip(oracle)
        .map(|(column, entry)| {
            let actual = mapper.map(column);
            let passed = match (&actual, entry.expected) {
                (Ok(mapped), Some(expected)) => *mapped == expected,
                (Err(_), None) => true,
                _ => false,
            };
            ColumnOutcome {
                column: column.column_name().to_string(),
                vendor_type: column.type_name().to_string(),
                expected: entry.expected,
                actual,
                passed,
            }
        })
        .collect();

    let report = ConformanceReport {
        dialect,
        table: table.to_string(),
        outcomes,
    };

    for failure in report.failures() {
        tracing::warn!(
            %dialect,
            column = %failure.column,
            vendor_type = %failure.vendor_type,
            expected = ?failure.expected,
            actual = ?failure.actual,
            "Conformance mismatch"
        );
    }
    tracing::info!(
        %dialect,
        table,
        columns = report.outcomes.len(),
        passed = report.all_passed(),
        "Conformance run finished"
    );

    Ok(report)
}
