//! Representative values for populating conformance test tables.
//!
//! Values sit on the edges a type conversion is most likely to get wrong:
//! integer limits, float extremes, maximum-precision decimals, leap days,
//! nanosecond timestamps and empty strings.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::CanonicalType;

/// A fixture value tagged with its canonical kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum SampleValue {
    /// SQL NULL
    Null,
    /// Boolean value
    Boolean(bool),
    /// 16-bit integer
    Short(i16),
    /// 32-bit integer
    Int(i32),
    /// 64-bit integer
    Long(i64),
    /// 32-bit float
    Float(f32),
    /// 64-bit float
    Double(f64),
    /// Decimal rendered as a plain digit string, e.g. `-999.99`
    Decimal(String),
    /// Character data
    String(String),
    /// Calendar date
    Date(NaiveDate),
    /// Time of day
    Time(NaiveTime),
    /// Date and time
    DateTime(NaiveDateTime),
}

/// Edge values for one canonical type, suitable for an INSERT.
///
/// # Example
/// ```rust
/// use canonmap_core::conformance::fixtures::{SampleValue, representative_values};
/// use canonmap_core::models::CanonicalType;
///
/// let values = representative_values(&CanonicalType::Short);
/// assert!(values.contains(&SampleValue::Short(i16::MIN)));
/// ```
pub fn representative_values(canonical: &CanonicalType) -> Vec<SampleValue> {
    match *canonical {
        CanonicalType::Void => vec![SampleValue::Null],
        CanonicalType::Boolean => vec![SampleValue::Boolean(true), SampleValue::Boolean(false)],
        CanonicalType::Short => [i16::MIN, -1, 0, 1, i16::MAX]
            .into_iter()
            .map(SampleValue::Short)
            .collect(),
        CanonicalType::Int => [i32::MIN, -1, 0, 1, i32::MAX]
            .into_iter()
            .map(SampleValue::Int)
            .collect(),
        CanonicalType::Long => [i64::MIN, -1, 0, 1, i64::MAX]
            .into_iter()
            .map(SampleValue::Long)
            .collect(),
        CanonicalType::Float => [f32::MIN, -1.5, 0.0, f32::MIN_POSITIVE, f32::MAX]
            .into_iter()
            .map(SampleValue::Float)
            .collect(),
        CanonicalType::Double => [f64::MIN, -1.5, 0.0, f64::MIN_POSITIVE, f64::MAX]
            .into_iter()
            .map(SampleValue::Double)
            .collect(),
        CanonicalType::Decimal { precision, scale } => decimal_values(precision, scale),
        CanonicalType::String => vec![
            SampleValue::String(String::new()),
            SampleValue::String("f1_symbol_0".to_string()),
            SampleValue::String("O'Brien \"quoted\"".to_string()),
            SampleValue::String("Grüße, 世界".to_string()),
            SampleValue::String(Uuid::nil().to_string()),
            SampleValue::String(Uuid::new_v4().to_string()),
        ],
        CanonicalType::LocalDate => [
            (1970, 1, 1),
            (1900, 2, 28),
            (2000, 2, 29),
            (2024, 2, 29),
            (9999, 12, 31),
        ]
        .into_iter()
        .filter_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .map(SampleValue::Date)
        .collect(),
        CanonicalType::LocalTime => [
            (0, 0, 0, 0),
            (12, 30, 15, 500_000_000),
            (23, 59, 59, 999_999_999),
        ]
        .into_iter()
        .filter_map(|(h, m, s, nano)| NaiveTime::from_hms_nano_opt(h, m, s, nano))
        .map(SampleValue::Time)
        .collect(),
        CanonicalType::LocalDateTime => [
            ((1970, 1, 1), (0, 0, 0, 0)),
            ((1900, 2, 28), (0, 0, 0, 0)),
            ((2000, 2, 29), (12, 0, 0, 123_456_789)),
            ((2024, 2, 29), (23, 59, 59, 999_999_999)),
        ]
        .into_iter()
        .filter_map(|((y, mo, d), (h, mi, s, nano))| {
            NaiveDate::from_ymd_opt(y, mo, d)?.and_hms_nano_opt(h, mi, s, nano)
        })
        .map(SampleValue::DateTime)
        .collect(),
    }
}

/// Widest decimal any supported dialect stores
const MAX_DECIMAL_DIGITS: u32 = 38;

/// Zero and the largest magnitude both signs allow.
///
/// When scale exceeds precision the column can only hold fractions, so the
/// integer part is `0` and only `precision` fractional digits are filled.
/// Precision and scale are capped at [`MAX_DECIMAL_DIGITS`].
fn decimal_values(precision: u32, scale: u32) -> Vec<SampleValue> {
    let precision = precision.min(MAX_DECIMAL_DIGITS);
    let scale = scale.min(MAX_DECIMAL_DIGITS);
    let digits = |n: u32| "9".repeat(usize::try_from(n).unwrap_or(0));

    let integer_digits = precision.saturating_sub(scale);
    let fraction_digits = scale.min(precision);

    let integer_part = if integer_digits == 0 {
        "0".to_string()
    } else {
        digits(integer_digits)
    };
    let max = if fraction_digits == 0 {
        integer_part
    } else {
        format!("{}.{}", integer_part, digits(fraction_digits))
    };

    let mut values = vec![SampleValue::Decimal("0".to_string())];
    if max != "0" {
        values.push(SampleValue::Decimal(format!("-{}", max)));
        values.push(SampleValue::Decimal(max));
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_values() {
        let all = [
            CanonicalType::Void,
            CanonicalType::Boolean,
            CanonicalType::Short,
            CanonicalType::Int,
            CanonicalType::Long,
            CanonicalType::Float,
            CanonicalType::Double,
            CanonicalType::decimal(10, 2),
            CanonicalType::String,
            CanonicalType::LocalDate,
            CanonicalType::LocalTime,
            CanonicalType::LocalDateTime,
        ];
        for canonical in all {
            assert!(
                !representative_values(&canonical).is_empty(),
                "No fixtures for {}",
                canonical
            );
        }
    }

    #[test]
    fn test_leap_days_present() {
        let dates = representative_values(&CanonicalType::LocalDate);
        for (y, m, d) in [(2000, 2, 29), (2024, 2, 29), (1900, 2, 28)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert!(dates.contains(&SampleValue::Date(date)), "missing {}", date);
        }
        assert_eq!(dates.len(), 5);
    }

    #[test]
    fn test_nanosecond_resolution() {
        let times = representative_values(&CanonicalType::LocalTime);
        let last = NaiveTime::from_hms_nano_opt(23, 59, 59, 999_999_999).unwrap();
        assert!(times.contains(&SampleValue::Time(last)));

        let timestamps = representative_values(&CanonicalType::LocalDateTime);
        assert_eq!(timestamps.len(), 4);
    }

    #[test]
    fn test_decimal_edges() {
        assert_eq!(
            representative_values(&CanonicalType::decimal(5, 2)),
            vec![
                SampleValue::Decimal("0".to_string()),
                SampleValue::Decimal("-999.99".to_string()),
                SampleValue::Decimal("999.99".to_string()),
            ]
        );
        assert_eq!(
            decimal_values(9, 9),
            vec![
                SampleValue::Decimal("0".to_string()),
                SampleValue::Decimal("-0.999999999".to_string()),
                SampleValue::Decimal("0.999999999".to_string()),
            ]
        );
        assert_eq!(decimal_values(20, 0).len(), 3);
        assert_eq!(
            decimal_values(0, 9),
            vec![SampleValue::Decimal("0".to_string())]
        );
    }

    #[test]
    fn test_decimal_digits_are_capped() {
        let max = format!("{}.{}", "9".repeat(20), "9".repeat(18));
        assert_eq!(
            representative_values(&CanonicalType::decimal(u32::MAX, 18)),
            vec![
                SampleValue::Decimal("0".to_string()),
                SampleValue::Decimal(format!("-{}", max)),
                SampleValue::Decimal(max),
            ]
        );

        let values = decimal_values(i32::MAX.unsigned_abs(), u32::MAX);
        assert_eq!(
            values[2],
            SampleValue::Decimal(format!("0.{}", "9".repeat(38)))
        );
    }

    #[test]
    fn test_strings_include_empty_and_uuids() {
        let values = representative_values(&CanonicalType::String);
        assert!(values.contains(&SampleValue::String(String::new())));
        assert!(values.contains(&SampleValue::String(
            "00000000-0000-0000-0000-000000000000".to_string()
        )));
    }

    #[test]
    fn test_sample_value_serde_shape() {
        let json = serde_json::to_value(SampleValue::Short(-1)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "short", "value": -1}));

        let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let json = serde_json::to_value(SampleValue::Date(date)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "date", "value": "2024-02-29"}));

        let json = serde_json::to_value(SampleValue::Null).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "null"}));
    }
}
