//! DolphinDB vendor types to canonical types.
//!
//! Identifiers follow the DolphinDB data type reference. Decimal families
//! carry their scale in the `(S)` modifier, which the JDBC metadata does not
//! surface separately, so each family maps to a fixed scale: DECIMAL32 → 9,
//! DECIMAL64 → 18, DECIMAL128 → 38. Precision is taken from the column.

use crate::dialects::table::TypeRule;
use crate::models::CanonicalType;

use TypeRule::{DecimalWithScale, Fixed};

/// Scale assumed for `DECIMAL32(S)` columns
pub const DECIMAL32_SCALE: u32 = 9;
/// Scale assumed for `DECIMAL64(S)` columns
pub const DECIMAL64_SCALE: u32 = 18;
/// Scale assumed for `DECIMAL128(S)` columns
pub const DECIMAL128_SCALE: u32 = 38;

/// DolphinDB type table.
///
/// `UNKNOWN` is deliberately absent, as are ANY, ANY DICTIONARY, IPADDR,
/// BLOB and every other type without a canonical equivalent.
pub static DOLPHINDB_TYPES: &[(&str, TypeRule)] = &[
    // Numeric
    ("SHORT", Fixed(CanonicalType::Short)),
    ("INT", Fixed(CanonicalType::Int)),
    ("INT128", Fixed(CanonicalType::Int)),
    ("LONG", Fixed(CanonicalType::Long)),
    ("FLOAT", Fixed(CanonicalType::Float)),
    ("DOUBLE", Fixed(CanonicalType::Double)),
    ("DECIMAL32", DecimalWithScale(DECIMAL32_SCALE)),
    ("DECIMAL64", DecimalWithScale(DECIMAL64_SCALE)),
    ("DECIMAL128", DecimalWithScale(DECIMAL128_SCALE)),
    // String
    ("CHAR", Fixed(CanonicalType::String)),
    ("STRING", Fixed(CanonicalType::String)),
    ("SYMBOL", Fixed(CanonicalType::String)),
    ("UUID", Fixed(CanonicalType::String)),
    // Temporal
    ("DATE", Fixed(CanonicalType::LocalDate)),
    ("MONTH", Fixed(CanonicalType::LocalDate)),
    ("DATEHOUR", Fixed(CanonicalType::LocalDate)),
    ("DATETIME", Fixed(CanonicalType::LocalDateTime)),
    ("TIMESTAMP", Fixed(CanonicalType::LocalDateTime)),
    ("NANOTIME", Fixed(CanonicalType::LocalDateTime)),
    ("NANOTIMESTAMP", Fixed(CanonicalType::LocalDateTime)),
    ("TIME", Fixed(CanonicalType::LocalTime)),
    ("MINUTE", Fixed(CanonicalType::LocalTime)),
    ("SECOND", Fixed(CanonicalType::LocalTime)),
    // Other
    ("BOOL", Fixed(CanonicalType::Boolean)),
    ("VOID", Fixed(CanonicalType::Void)),
];
