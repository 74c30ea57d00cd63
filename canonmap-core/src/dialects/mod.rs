//! Dialect type mappers.
//!
//! Each supported database dialect implements [`DialectTypeMapper`], a pure
//! function from vendor column metadata to a [`CanonicalType`]. Mappers hold
//! only an immutable lookup table, so a single instance can be shared by any
//! number of threads.
//!
//! # Module Structure
//! - `table`: validated static type tables, decimal rules and the
//!   table-backed mapper every dialect uses
//! - `dolphindb`, `postgres`, `mysql`: one table declaration per dialect
//!
//! Adding a dialect means adding a [`DialectId`] variant and a module here;
//! the canonical type set does not change.

pub mod dolphindb;
pub mod mysql;
pub mod postgres;
pub mod table;

use std::sync::Arc;

use crate::Result;
use crate::error::UnmappableTypeError;
use crate::models::{CanonicalType, ColumnDescriptor, DialectId};

pub use dolphindb::DolphinDbTypeMapper;
pub use mysql::MySqlTypeMapper;
pub use postgres::PostgresTypeMapper;
pub use table::{DialectTable, TableMapper, TypeRule, TypeTable};

/// Maps one dialect's column metadata to canonical types.
///
/// # Object Safety
/// This trait is object-safe; the registry stores mappers as
/// `Arc<dyn DialectTypeMapper>`.
pub trait DialectTypeMapper: Send + Sync + std::fmt::Debug {
    /// Dialect this mapper handles
    fn dialect(&self) -> DialectId;

    /// Maps one column to its canonical type.
    ///
    /// The result depends only on `column`: no I/O, no shared state.
    ///
    /// # Errors
    /// Returns [`UnmappableTypeError`] when the vendor type has no canonical
    /// equivalent. The error names this mapper's dialect, the normalized
    /// vendor type and the column.
    fn map(
        &self,
        column: &ColumnDescriptor,
    ) -> std::result::Result<CanonicalType, UnmappableTypeError>;

    /// Vendor identifiers this mapper accepts, in table order
    fn vendor_type_names(&self) -> Vec<&'static str>;
}

/// Constructs the built-in mapper for a dialect.
///
/// # Errors
/// Returns [`crate::CanonMapError::InvalidTypeTable`] if the dialect's table fails validation
pub fn builtin_mapper(dialect: DialectId) -> Result<Arc<dyn DialectTypeMapper>> {
    let mapper: Arc<dyn DialectTypeMapper> = match dialect {
        DialectId::DolphinDb => Arc::new(DolphinDbTypeMapper::new()?),
        DialectId::PostgreSql => Arc::new(PostgresTypeMapper::new()?),
        DialectId::MySql => Arc::new(MySqlTypeMapper::new()?),
    };
    Ok(mapper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_are_valid() {
        for dialect in DialectId::ALL {
            let mapper = builtin_mapper(dialect).unwrap();
            assert_eq!(mapper.dialect(), dialect);
            assert!(!mapper.vendor_type_names().is_empty());
        }
    }

    #[test]
    fn test_builtin_mappers_map_every_declared_identifier() {
        for dialect in DialectId::ALL {
            let mapper = builtin_mapper(dialect).unwrap();
            for name in mapper.vendor_type_names() {
                let column = ColumnDescriptor::new(name, 10, 2, "c");
                assert!(
                    mapper.map(&column).is_ok(),
                    "{} rejected its own identifier {}",
                    dialect,
                    name
                );
            }
        }
    }

    #[test]
    fn test_unknown_is_rejected_everywhere() {
        for dialect in DialectId::ALL {
            let mapper = builtin_mapper(dialect).unwrap();
            let error = mapper
                .map(&ColumnDescriptor::new("UNKNOWN", 0, 0, "mystery"))
                .unwrap_err();
            assert_eq!(error.dialect, dialect);
            assert_eq!(error.vendor_type_name, "UNKNOWN");
        }
    }
}
