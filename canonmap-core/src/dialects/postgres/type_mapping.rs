//! PostgreSQL vendor types to canonical types.
//!
//! Identifiers cover the `data_type` values reported by
//! `information_schema.columns` plus the common `udt_name` aliases
//! (`int4`, `float8`, `timestamptz`, ...). Time zone information has no
//! canonical counterpart, so zoned and unzoned temporal types map alike.

use crate::dialects::table::TypeRule;
use crate::models::CanonicalType;

use TypeRule::{DecimalFromColumn, Fixed};

/// Precision used for unconstrained `numeric` columns
pub const UNCONSTRAINED_NUMERIC_PRECISION: u32 = 38;
/// Scale used for unconstrained `numeric` columns
pub const UNCONSTRAINED_NUMERIC_SCALE: u32 = 18;

const NUMERIC: TypeRule = DecimalFromColumn {
    default_precision: UNCONSTRAINED_NUMERIC_PRECISION,
    default_scale: UNCONSTRAINED_NUMERIC_SCALE,
};

/// PostgreSQL type table.
pub static POSTGRES_TYPES: &[(&str, TypeRule)] = &[
    // Integer types
    ("SMALLINT", Fixed(CanonicalType::Short)),
    ("INT2", Fixed(CanonicalType::Short)),
    ("SMALLSERIAL", Fixed(CanonicalType::Short)),
    ("INTEGER", Fixed(CanonicalType::Int)),
    ("INT", Fixed(CanonicalType::Int)),
    ("INT4", Fixed(CanonicalType::Int)),
    ("SERIAL", Fixed(CanonicalType::Int)),
    ("BIGINT", Fixed(CanonicalType::Long)),
    ("INT8", Fixed(CanonicalType::Long)),
    ("BIGSERIAL", Fixed(CanonicalType::Long)),
    // Floating point and exact numeric
    ("REAL", Fixed(CanonicalType::Float)),
    ("FLOAT4", Fixed(CanonicalType::Float)),
    ("DOUBLE PRECISION", Fixed(CanonicalType::Double)),
    ("FLOAT8", Fixed(CanonicalType::Double)),
    ("NUMERIC", NUMERIC),
    ("DECIMAL", NUMERIC),
    // Character and text-encoded types
    ("CHARACTER VARYING", Fixed(CanonicalType::String)),
    ("VARCHAR", Fixed(CanonicalType::String)),
    ("CHARACTER", Fixed(CanonicalType::String)),
    ("CHAR", Fixed(CanonicalType::String)),
    ("BPCHAR", Fixed(CanonicalType::String)),
    ("TEXT", Fixed(CanonicalType::String)),
    ("NAME", Fixed(CanonicalType::String)),
    ("UUID", Fixed(CanonicalType::String)),
    ("JSON", Fixed(CanonicalType::String)),
    ("JSONB", Fixed(CanonicalType::String)),
    ("XML", Fixed(CanonicalType::String)),
    // Boolean
    ("BOOLEAN", Fixed(CanonicalType::Boolean)),
    ("BOOL", Fixed(CanonicalType::Boolean)),
    // Date and time
    ("DATE", Fixed(CanonicalType::LocalDate)),
    ("TIME", Fixed(CanonicalType::LocalTime)),
    ("TIME WITHOUT TIME ZONE", Fixed(CanonicalType::LocalTime)),
    ("TIME WITH TIME ZONE", Fixed(CanonicalType::LocalTime)),
    ("TIMETZ", Fixed(CanonicalType::LocalTime)),
    ("TIMESTAMP", Fixed(CanonicalType::LocalDateTime)),
    ("TIMESTAMP WITHOUT TIME ZONE", Fixed(CanonicalType::LocalDateTime)),
    ("TIMESTAMP WITH TIME ZONE", Fixed(CanonicalType::LocalDateTime)),
    ("TIMESTAMPTZ", Fixed(CanonicalType::LocalDateTime)),
    // Pseudo-types
    ("VOID", Fixed(CanonicalType::Void)),
];
