//! Unit tests for the PostgreSQL mapper.

use crate::dialects::DialectTypeMapper;
use crate::models::{CanonicalType, ColumnDescriptor, DialectId};

use super::PostgresTypeMapper;

fn map_column(type_name: &str, precision: i32, scale: i32) -> Option<CanonicalType> {
    let mapper = PostgresTypeMapper::new().unwrap();
    mapper
        .map(&ColumnDescriptor::new(type_name, precision, scale, "c"))
        .ok()
}

#[test]
fn test_map_postgresql_type_basic_types() {
    assert_eq!(map_column("smallint", 16, 0), Some(CanonicalType::Short));
    assert_eq!(map_column("integer", 32, 0), Some(CanonicalType::Int));
    assert_eq!(map_column("bigint", 64, 0), Some(CanonicalType::Long));
    assert_eq!(map_column("real", 24, 0), Some(CanonicalType::Float));
    assert_eq!(
        map_column("double precision", 53, 0),
        Some(CanonicalType::Double)
    );
    assert_eq!(map_column("boolean", 0, 0), Some(CanonicalType::Boolean));
    assert_eq!(map_column("text", 0, 0), Some(CanonicalType::String));
    assert_eq!(
        map_column("character varying", 255, 0),
        Some(CanonicalType::String)
    );
    assert_eq!(map_column("uuid", 0, 0), Some(CanonicalType::String));
    assert_eq!(map_column("jsonb", 0, 0), Some(CanonicalType::String));
}

#[test]
fn test_map_postgresql_udt_aliases() {
    assert_eq!(map_column("int2", 0, 0), Some(CanonicalType::Short));
    assert_eq!(map_column("int4", 0, 0), Some(CanonicalType::Int));
    assert_eq!(map_column("int8", 0, 0), Some(CanonicalType::Long));
    assert_eq!(map_column("float4", 0, 0), Some(CanonicalType::Float));
    assert_eq!(map_column("float8", 0, 0), Some(CanonicalType::Double));
    assert_eq!(map_column("bpchar", 1, 0), Some(CanonicalType::String));
}

#[test]
fn test_map_postgresql_temporal_types() {
    assert_eq!(map_column("date", 0, 0), Some(CanonicalType::LocalDate));
    assert_eq!(
        map_column("time without time zone", 6, 0),
        Some(CanonicalType::LocalTime)
    );
    assert_eq!(map_column("timetz", 6, 0), Some(CanonicalType::LocalTime));
    assert_eq!(
        map_column("timestamp(3) without time zone", 3, 0),
        Some(CanonicalType::LocalDateTime)
    );
    assert_eq!(
        map_column("timestamp with time zone", 6, 0),
        Some(CanonicalType::LocalDateTime)
    );
}

#[test]
fn test_map_postgresql_numeric() {
    assert_eq!(
        map_column("numeric", 12, 4),
        Some(CanonicalType::decimal(12, 4))
    );
    assert_eq!(
        map_column("NUMERIC(12,4)", 12, 4),
        Some(CanonicalType::decimal(12, 4))
    );
    // Unconstrained numeric reports no precision
    assert_eq!(
        map_column("numeric", 0, 0),
        Some(CanonicalType::decimal(38, 18))
    );
}

#[test]
fn test_map_postgresql_unsupported_types() {
    let mapper = PostgresTypeMapper::new().unwrap();

    for name in ["bytea", "ARRAY", "inet", "USER-DEFINED", "tsvector", "interval"] {
        let error = mapper
            .map(&ColumnDescriptor::new(name, 0, 0, "payload"))
            .unwrap_err();
        assert_eq!(error.dialect, DialectId::PostgreSql);
        assert_eq!(error.vendor_type_name, name.to_uppercase());
        assert_eq!(error.column_name, "payload");
    }
}
