//! Unit tests for the DolphinDB mapper.

use crate::dialects::DialectTypeMapper;
use crate::models::{CanonicalType, ColumnDescriptor, DialectId};

use super::DolphinDbTypeMapper;

fn map_type(type_name: &str) -> Result<CanonicalType, crate::UnmappableTypeError> {
    let mapper = DolphinDbTypeMapper::new().unwrap();
    mapper.map(&ColumnDescriptor::new(type_name, 0, 0, "col"))
}

// =============================================================================
// Declared table
// =============================================================================

#[test]
fn test_map_dolphindb_numeric_types() {
    assert_eq!(map_type("SHORT"), Ok(CanonicalType::Short));
    assert_eq!(map_type("INT"), Ok(CanonicalType::Int));
    assert_eq!(map_type("INT128"), Ok(CanonicalType::Int));
    assert_eq!(map_type("LONG"), Ok(CanonicalType::Long));
    assert_eq!(map_type("FLOAT"), Ok(CanonicalType::Float));
    assert_eq!(map_type("DOUBLE"), Ok(CanonicalType::Double));
}

#[test]
fn test_map_dolphindb_string_types() {
    for name in ["CHAR", "STRING", "SYMBOL", "UUID"] {
        assert_eq!(map_type(name), Ok(CanonicalType::String), "Failed for {}", name);
    }
}

#[test]
fn test_map_dolphindb_temporal_types() {
    for name in ["DATE", "MONTH", "DATEHOUR"] {
        assert_eq!(map_type(name), Ok(CanonicalType::LocalDate), "Failed for {}", name);
    }
    for name in ["DATETIME", "TIMESTAMP", "NANOTIME", "NANOTIMESTAMP"] {
        assert_eq!(
            map_type(name),
            Ok(CanonicalType::LocalDateTime),
            "Failed for {}",
            name
        );
    }
    for name in ["TIME", "MINUTE", "SECOND"] {
        assert_eq!(map_type(name), Ok(CanonicalType::LocalTime), "Failed for {}", name);
    }
}

#[test]
fn test_map_dolphindb_bool_and_void() {
    assert_eq!(map_type("BOOL"), Ok(CanonicalType::Boolean));
    assert_eq!(map_type("VOID"), Ok(CanonicalType::Void));
}

// =============================================================================
// Decimal families
// =============================================================================

#[test]
fn test_decimal_scale_comes_from_family() {
    let mapper = DolphinDbTypeMapper::new().unwrap();

    let cases = [
        ("DECIMAL32(S)", 9),
        ("DECIMAL64(S)", 18),
        ("DECIMAL128(S)", 38),
        ("DECIMAL32(3)", 9),
        ("decimal64(3)", 18),
        ("Decimal128", 38),
    ];

    for (type_name, expected_scale) in cases {
        let column = ColumnDescriptor::new(type_name, 38, 3, "amount");
        assert_eq!(
            mapper.map(&column),
            Ok(CanonicalType::decimal(38, expected_scale)),
            "Failed for {}",
            type_name
        );
    }
}

#[test]
fn test_decimal_precision_is_verbatim() {
    let mapper = DolphinDbTypeMapper::new().unwrap();

    let column = ColumnDescriptor::new("DECIMAL64(S)", 20, 3, "amount");
    assert_eq!(mapper.map(&column), Ok(CanonicalType::decimal(20, 18)));

    let column = ColumnDescriptor::new("DECIMAL32(S)", 0, 0, "amount");
    assert_eq!(mapper.map(&column), Ok(CanonicalType::decimal(0, 9)));
}

// =============================================================================
// Rejection
// =============================================================================

#[test]
fn test_unknown_and_unlisted_types_are_rejected() {
    for name in ["UNKNOWN", "BLOB", "IPADDR", "ANY", "ANY DICTIONARY", "INT256", ""] {
        let error = map_type(name).unwrap_err();
        assert_eq!(error.vendor_type_name, name, "Failed for {:?}", name);
        assert_eq!(error.column_name, "col");
    }
}

#[test]
fn test_unmappable_error_carries_active_dialect() {
    let error = map_type("IPADDR").unwrap_err();
    assert_eq!(error.dialect, DialectId::DolphinDb);
}

#[test]
fn test_prefix_of_declared_type_is_not_matched() {
    assert!(map_type("DECIMAL").is_err());
    assert!(map_type("NANO").is_err());
    assert!(map_type("DATE TIME").is_err());
}

// =============================================================================
// Normalization
// =============================================================================

#[test]
fn test_map_dolphindb_case_insensitivity() {
    let upper = map_type("INT");
    let lower = map_type("int");
    let mixed = map_type("Int");

    assert_eq!(upper, Ok(CanonicalType::Int));
    assert_eq!(lower, upper);
    assert_eq!(mixed, upper);
}

#[test]
fn test_vendor_type_names_follow_table() {
    let mapper = DolphinDbTypeMapper::new().unwrap();
    let names = mapper.vendor_type_names();

    assert_eq!(names.len(), 25);
    assert_eq!(names.first(), Some(&"SHORT"));
    assert!(names.contains(&"DECIMAL128"));
    assert!(!names.contains(&"UNKNOWN"));
}

#[test]
fn test_end_to_end_scenarios() {
    let mapper = DolphinDbTypeMapper::new().unwrap();

    let amount = ColumnDescriptor::new("DECIMAL64(S)", 20, 3, "amount");
    assert_eq!(mapper.map(&amount), Ok(CanonicalType::decimal(20, 18)));

    let sym = ColumnDescriptor::new("SYMBOL", 0, 0, "sym");
    assert_eq!(mapper.map(&sym), Ok(CanonicalType::String));

    let ip = ColumnDescriptor::new("IPADDR", 0, 0, "client_ip");
    let error = mapper.map(&ip).unwrap_err();
    assert_eq!(error.vendor_type_name, "IPADDR");
    assert_eq!(error.column_name, "client_ip");
}
