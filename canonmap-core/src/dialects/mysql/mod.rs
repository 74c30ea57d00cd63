//! MySQL dialect mapper.
//!
//! # Module Structure
//! - `type_mapping`: MySQL vendor type table

pub mod type_mapping;


use crate::dialects::table::{DialectTable, TableMapper, TypeRule};
use crate::models::DialectId;

pub use type_mapping::MYSQL_TYPES;

/// MySQL type table declaration.
#[derive(Debug, Clone, Copy)]
pub struct MySqlTable;

impl DialectTable for MySqlTable {
    const DIALECT: DialectId = DialectId::MySql;

    fn entries() -> &'static [(&'static str, TypeRule)] {
        MYSQL_TYPES
    }
}

/// Maps MySQL column metadata to canonical types.
pub type MySqlTypeMapper = TableMapper<MySqlTable>;
