//! Expected mappings for conformance runs.
//!
//! Each oracle lists column types as they appear in a test table's DDL, in
//! declaration order, with the canonical type a correct mapper must produce
//! or `None` where the type must be rejected. These tables are written out
//! by hand and never consult a mapper table.

use crate::models::{CanonicalType, DialectId};

use CanonicalType::{Boolean, Double, Float, Int, LocalDate, LocalDateTime, LocalTime, Long, Short};

/// One column of a conformance test table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OracleEntry {
    /// Type as declared in DDL, e.g. `DECIMAL64(3)`
    pub vendor_type: &'static str,
    /// Precision the vendor reports for the column
    pub precision: i32,
    /// Scale the vendor reports for the column
    pub scale: i32,
    /// Expected canonical type; `None` means the type must be rejected
    pub expected: Option<CanonicalType>,
}

impl OracleEntry {
    /// Column that must map to `expected`.
    pub const fn maps_to(vendor_type: &'static str, expected: CanonicalType) -> Self {
        Self {
            vendor_type,
            precision: 0,
            scale: 0,
            expected: Some(expected),
        }
    }

    /// Column whose type must be rejected.
    pub const fn unsupported(vendor_type: &'static str) -> Self {
        Self {
            vendor_type,
            precision: 0,
            scale: 0,
            expected: None,
        }
    }

    /// Sets the reported precision and scale.
    pub const fn reported(mut self, precision: i32, scale: i32) -> Self {
        self.precision = precision;
        self.scale = scale;
        self
    }
}

/// DolphinDB end-to-end table.
///
/// Mirrors the vendor's integration DDL. Decimal columns report the family's
/// maximum precision, which is what the DolphinDB JDBC driver returns.
pub static DOLPHINDB_ORACLE: &[OracleEntry] = &[
    OracleEntry::maps_to("STRING", CanonicalType::String),
    OracleEntry::maps_to("BOOL", Boolean),
    OracleEntry::maps_to("CHAR", CanonicalType::String),
    OracleEntry::maps_to("SHORT", Short),
    OracleEntry::maps_to("INT", Int),
    OracleEntry::maps_to("LONG", Long),
    OracleEntry::maps_to("DATE", LocalDate),
    OracleEntry::maps_to("MONTH", LocalDate),
    OracleEntry::maps_to("TIME", LocalTime),
    OracleEntry::maps_to("MINUTE", LocalTime),
    OracleEntry::maps_to("SECOND", LocalTime),
    OracleEntry::maps_to("DATETIME", LocalDateTime),
    OracleEntry::maps_to("TIMESTAMP", LocalDateTime),
    OracleEntry::maps_to("NANOTIME", LocalDateTime),
    OracleEntry::maps_to("NANOTIMESTAMP", LocalDateTime),
    OracleEntry::maps_to("FLOAT", Float),
    OracleEntry::maps_to("DOUBLE", Double),
    OracleEntry::maps_to("SYMBOL", CanonicalType::String),
    OracleEntry::maps_to("UUID", CanonicalType::String),
    OracleEntry::unsupported("ANY"),
    OracleEntry::unsupported("ANY DICTIONARY"),
    OracleEntry::maps_to("DATEHOUR", LocalDate),
    OracleEntry::unsupported("IPADDR"),
    OracleEntry::maps_to("INT128", Int),
    OracleEntry::unsupported("BLOB"),
    OracleEntry::maps_to("DECIMAL32(3)", CanonicalType::decimal(9, 9)).reported(9, 3),
    OracleEntry::maps_to("DECIMAL64(3)", CanonicalType::decimal(18, 18)).reported(18, 3),
    OracleEntry::maps_to("DECIMAL128(3)", CanonicalType::decimal(38, 38)).reported(38, 3),
];

/// PostgreSQL table, using the `data_type` spelling `information_schema`
/// reports.
pub static POSTGRES_ORACLE: &[OracleEntry] = &[
    OracleEntry::maps_to("smallint", Short),
    OracleEntry::maps_to("integer", Int),
    OracleEntry::maps_to("bigint", Long),
    OracleEntry::maps_to("real", Float),
    OracleEntry::maps_to("double precision", Double),
    OracleEntry::maps_to("numeric", CanonicalType::decimal(10, 2)).reported(10, 2),
    OracleEntry::maps_to("numeric", CanonicalType::decimal(38, 18)),
    OracleEntry::maps_to("character varying", CanonicalType::String).reported(20, 0),
    OracleEntry::maps_to("character", CanonicalType::String).reported(3, 0),
    OracleEntry::maps_to("text", CanonicalType::String),
    OracleEntry::maps_to("uuid", CanonicalType::String),
    OracleEntry::maps_to("jsonb", CanonicalType::String),
    OracleEntry::maps_to("boolean", Boolean),
    OracleEntry::maps_to("date", LocalDate),
    OracleEntry::maps_to("time without time zone", LocalTime).reported(6, 0),
    OracleEntry::maps_to("time with time zone", LocalTime).reported(6, 0),
    OracleEntry::maps_to("timestamp without time zone", LocalDateTime).reported(6, 0),
    OracleEntry::maps_to("timestamp with time zone", LocalDateTime).reported(6, 0),
    OracleEntry::unsupported("bytea"),
    OracleEntry::unsupported("inet"),
];

/// DDL for a PostgreSQL table whose columns line up with [`POSTGRES_ORACLE`].
pub const POSTGRES_ORACLE_DDL: &str = r"
CREATE TABLE conformance_types (
    c_smallint smallint,
    c_integer integer,
    c_bigint bigint,
    c_real real,
    c_double double precision,
    c_numeric_bounded numeric(10, 2),
    c_numeric numeric,
    c_varchar varchar(20),
    c_char char(3),
    c_text text,
    c_uuid uuid,
    c_jsonb jsonb,
    c_boolean boolean,
    c_date date,
    c_time time,
    c_timetz timetz,
    c_timestamp timestamp,
    c_timestamptz timestamptz,
    c_bytea bytea,
    c_inet inet
)";

/// MySQL table, as declared in DDL.
pub static MYSQL_ORACLE: &[OracleEntry] = &[
    OracleEntry::maps_to("tinyint(1)", Short).reported(3, 0),
    OracleEntry::maps_to("smallint unsigned", Int).reported(5, 0),
    OracleEntry::maps_to("int(11)", Int).reported(10, 0),
    OracleEntry::maps_to("int unsigned", Long).reported(10, 0),
    OracleEntry::maps_to("bigint", Long).reported(19, 0),
    OracleEntry::maps_to("bigint unsigned", CanonicalType::decimal(20, 0)).reported(20, 0),
    OracleEntry::maps_to("year", Int),
    OracleEntry::maps_to("float", Float),
    OracleEntry::maps_to("double", Double),
    OracleEntry::maps_to("decimal(12,4)", CanonicalType::decimal(12, 4)).reported(12, 4),
    OracleEntry::maps_to("decimal", CanonicalType::decimal(10, 0)),
    OracleEntry::maps_to("varchar(255)", CanonicalType::String).reported(255, 0),
    OracleEntry::maps_to("enum('a','b')", CanonicalType::String),
    OracleEntry::maps_to("json", CanonicalType::String),
    OracleEntry::maps_to("boolean", Boolean),
    OracleEntry::maps_to("date", LocalDate),
    OracleEntry::maps_to("time", LocalTime),
    OracleEntry::maps_to("datetime(6)", LocalDateTime),
    OracleEntry::maps_to("timestamp", LocalDateTime),
    OracleEntry::unsupported("blob"),
    OracleEntry::unsupported("bit(1)"),
    OracleEntry::unsupported("geometry"),
];

/// Oracle for a dialect.
pub fn oracle_for(dialect: DialectId) -> &'static [OracleEntry] {
    match dialect {
        DialectId::DolphinDb => DOLPHINDB_ORACLE,
        DialectId::PostgreSql => POSTGRES_ORACLE,
        DialectId::MySql => MYSQL_ORACLE,
    }
}
