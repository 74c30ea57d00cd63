//! MySQL vendor types to canonical types.
//!
//! Unsigned integers widen to the next canonical integer so every value
//! fits; `BIGINT UNSIGNED` has no wider integer and becomes `Decimal(20,0)`.
//! Display widths such as `int(11)` are modifiers and do not affect matching.

use crate::dialects::table::TypeRule;
use crate::models::CanonicalType;

use TypeRule::{DecimalFromColumn, Fixed};

/// MySQL default precision for `DECIMAL` without arguments
pub const DEFAULT_DECIMAL_PRECISION: u32 = 10;

const DECIMAL: TypeRule = DecimalFromColumn {
    default_precision: DEFAULT_DECIMAL_PRECISION,
    default_scale: 0,
};

/// MySQL type table.
pub static MYSQL_TYPES: &[(&str, TypeRule)] = &[
    // Integer types
    ("TINYINT", Fixed(CanonicalType::Short)),
    ("SMALLINT", Fixed(CanonicalType::Short)),
    ("MEDIUMINT", Fixed(CanonicalType::Int)),
    ("INT", Fixed(CanonicalType::Int)),
    ("INTEGER", Fixed(CanonicalType::Int)),
    ("BIGINT", Fixed(CanonicalType::Long)),
    ("YEAR", Fixed(CanonicalType::Int)),
    ("TINYINT UNSIGNED", Fixed(CanonicalType::Short)),
    ("SMALLINT UNSIGNED", Fixed(CanonicalType::Int)),
    ("MEDIUMINT UNSIGNED", Fixed(CanonicalType::Int)),
    ("INT UNSIGNED", Fixed(CanonicalType::Long)),
    ("INTEGER UNSIGNED", Fixed(CanonicalType::Long)),
    ("BIGINT UNSIGNED", Fixed(CanonicalType::decimal(20, 0))),
    // Floating point and exact numeric
    ("FLOAT", Fixed(CanonicalType::Float)),
    ("DOUBLE", Fixed(CanonicalType::Double)),
    ("DOUBLE PRECISION", Fixed(CanonicalType::Double)),
    ("REAL", Fixed(CanonicalType::Double)),
    ("DECIMAL", DECIMAL),
    ("NUMERIC", DECIMAL),
    ("DEC", DECIMAL),
    ("FIXED", DECIMAL),
    // String types
    ("CHAR", Fixed(CanonicalType::String)),
    ("VARCHAR", Fixed(CanonicalType::String)),
    ("TINYTEXT", Fixed(CanonicalType::String)),
    ("TEXT", Fixed(CanonicalType::String)),
    ("MEDIUMTEXT", Fixed(CanonicalType::String)),
    ("LONGTEXT", Fixed(CanonicalType::String)),
    ("ENUM", Fixed(CanonicalType::String)),
    ("SET", Fixed(CanonicalType::String)),
    ("JSON", Fixed(CanonicalType::String)),
    // Boolean
    ("BOOL", Fixed(CanonicalType::Boolean)),
    ("BOOLEAN", Fixed(CanonicalType::Boolean)),
    // Date/Time types
    ("DATE", Fixed(CanonicalType::LocalDate)),
    ("TIME", Fixed(CanonicalType::LocalTime)),
    ("DATETIME", Fixed(CanonicalType::LocalDateTime)),
    ("TIMESTAMP", Fixed(CanonicalType::LocalDateTime)),
];
