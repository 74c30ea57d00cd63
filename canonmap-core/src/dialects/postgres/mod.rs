//! PostgreSQL dialect mapper.
//!
//! # Module Structure
//! - `type_mapping`: PostgreSQL vendor type table

pub mod type_mapping;

#[cfg(test)]
mod tests;

use crate::dialects::table::{DialectTable, TableMapper, TypeRule};
use crate::models::DialectId;

pub use type_mapping::POSTGRES_TYPES;

/// PostgreSQL type table declaration.
#[derive(Debug, Clone, Copy)]
pub struct PostgresTable;

impl DialectTable for PostgresTable {
    const DIALECT: DialectId = DialectId::PostgreSql;

    fn entries() -> &'static [(&'static str, TypeRule)] {
        POSTGRES_TYPES
    }
}

/// Maps PostgreSQL column metadata to canonical types.
pub type PostgresTypeMapper = TableMapper<PostgresTable>;
