//! DolphinDB dialect mapper.
//!
//! # Module Structure
//! - `type_mapping`: the DolphinDB vendor type table and decimal family scales

pub mod type_mapping;

#[cfg(test)]
mod tests;

use crate::dialects::table::{DialectTable, TableMapper, TypeRule};
use crate::models::DialectId;

pub use type_mapping::{DECIMAL32_SCALE, DECIMAL64_SCALE, DECIMAL128_SCALE, DOLPHINDB_TYPES};

/// DolphinDB type table declaration.
#[derive(Debug, Clone, Copy)]
pub struct DolphinDbTable;

impl DialectTable for DolphinDbTable {
    const DIALECT: DialectId = DialectId::DolphinDb;

    fn entries() -> &'static [(&'static str, TypeRule)] {
        DOLPHINDB_TYPES
    }
}

/// Maps DolphinDB column metadata to canonical types.
pub type DolphinDbTypeMapper = TableMapper<DolphinDbTable>;
