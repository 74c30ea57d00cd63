//! Core data models for canonical type mapping.
//!
//! This module defines the dialect identifiers, the closed canonical type
//! vocabulary shared by every pipeline stage, and the column descriptor that
//! carries vendor metadata into a mapper.

use crate::error::{CanonMapError, Result, UnsupportedDialectError};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Supported database dialects
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DialectId {
    /// DolphinDB time-series database
    DolphinDb,
    /// PostgreSQL
    #[serde(alias = "postgres")]
    PostgreSql,
    /// MySQL and MariaDB
    #[serde(alias = "mariadb")]
    MySql,
}

impl DialectId {
    /// Every dialect with a built-in mapper, in registration order.
    pub const ALL: [Self; 3] = [Self::DolphinDb, Self::PostgreSql, Self::MySql];

    /// Stable lower-case token for this dialect.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DolphinDb => "dolphindb",
            Self::PostgreSql => "postgresql",
            Self::MySql => "mysql",
        }
    }

    /// Detects the dialect from a connection URL scheme.
    ///
    /// A leading `jdbc:` prefix is accepted, so both `postgres://host/db` and
    /// `jdbc:dolphindb://host:8848` resolve.
    ///
    /// # Errors
    /// Returns a configuration error if the string is not a URL, or
    /// [`CanonMapError::UnsupportedDialect`] if the scheme names no known dialect.
    ///
    /// # Example
    /// ```rust
    /// use canonmap_core::models::DialectId;
    ///
    /// let dialect = DialectId::from_connection_url("jdbc:dolphindb://localhost:8848").unwrap();
    /// assert_eq!(dialect, DialectId::DolphinDb);
    /// ```
    pub fn from_connection_url(connection_string: &str) -> Result<Self> {
        let trimmed = connection_string.trim();
        let without_jdbc = trimmed
            .get(..5)
            .filter(|prefix| prefix.eq_ignore_ascii_case("jdbc:"))
            .and_then(|_| trimmed.get(5..))
            .unwrap_or(trimmed);

        // Credentials never reach the error message.
        let parsed = url::Url::parse(without_jdbc).map_err(|_| {
            CanonMapError::configuration("Unrecognized database connection string format")
        })?;

        Ok(parsed.scheme().parse::<Self>()?)
    }
}

impl std::fmt::Display for DialectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DialectId {
    type Err = UnsupportedDialectError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dolphindb" => Ok(Self::DolphinDb),
            "postgres" | "postgresql" => Ok(Self::PostgreSql),
            "mysql" | "mariadb" => Ok(Self::MySql),
            _ => Err(UnsupportedDialectError::new(s.trim())),
        }
    }
}

/// Engine-wide logical type of a column.
///
/// This set is closed. Every vendor type maps onto one of these variants or
/// is rejected; adding a variant is a versioned change to the whole engine,
/// never a per-dialect decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CanonicalType {
    /// Absence of a value
    Void,
    /// Boolean
    Boolean,
    /// 16-bit signed integer
    Short,
    /// 32-bit signed integer
    Int,
    /// 64-bit signed integer
    Long,
    /// 32-bit floating point
    Float,
    /// 64-bit floating point
    Double,
    /// Exact decimal with total digits and fractional digits
    Decimal {
        /// Total number of digits
        precision: u32,
        /// Digits after the decimal point
        scale: u32,
    },
    /// Character data
    String,
    /// Calendar date without time zone
    LocalDate,
    /// Time of day without time zone
    LocalTime,
    /// Date and time without time zone
    LocalDateTime,
}

impl CanonicalType {
    /// Creates a decimal type.
    pub const fn decimal(precision: u32, scale: u32) -> Self {
        Self::Decimal { precision, scale }
    }

    /// Returns true for the decimal variant.
    pub const fn is_decimal(&self) -> bool {
        matches!(self, Self::Decimal { .. })
    }

    /// Variant name without parameters.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Void => "Void",
            Self::Boolean => "Boolean",
            Self::Short => "Short",
            Self::Int => "Int",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
            Self::Decimal { .. } => "Decimal",
            Self::String => "String",
            Self::LocalDate => "LocalDate",
            Self::LocalTime => "LocalTime",
            Self::LocalDateTime => "LocalDateTime",
        }
    }
}

impl std::fmt::Display for CanonicalType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Decimal { precision, scale } => write!(f, "Decimal({},{})", precision, scale),
            other => f.write_str(other.name()),
        }
    }
}

/// Vendor metadata for one result-set column.
///
/// Produced by the query layer's introspection interface and handed to a
/// mapper read-only. Fields are private so a descriptor cannot change after
/// construction.
///
/// # Example
/// ```rust
/// use canonmap_core::models::ColumnDescriptor;
///
/// let column = ColumnDescriptor::new("decimal64(3)", 20, 3, "amount");
/// assert_eq!(column.normalized_type_name(), "DECIMAL64");
/// assert_eq!(column.type_modifier(), Some("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    type_name: String,
    #[serde(default)]
    precision: i32,
    #[serde(default)]
    scale: i32,
    column_name: String,
}

impl ColumnDescriptor {
    /// Creates a descriptor from raw introspection values.
    pub fn new(
        type_name: impl Into<String>,
        precision: i32,
        scale: i32,
        column_name: impl Into<String>,
    ) -> Self {
        Self {
            type_name: type_name.into(),
            precision,
            scale,
            column_name: column_name.into(),
        }
    }

    /// Vendor type name exactly as reported
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Vendor-reported precision or length; 0 when not applicable
    pub const fn precision(&self) -> i32 {
        self.precision
    }

    /// Vendor-reported scale
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Column name, for diagnostics only
    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// Precision as an unsigned digit count; negative reports become 0.
    pub fn precision_digits(&self) -> u32 {
        u32::try_from(self.precision).unwrap_or(0)
    }

    /// Scale as an unsigned digit count; negative reports become 0.
    pub fn scale_digits(&self) -> u32 {
        u32::try_from(self.scale).unwrap_or(0)
    }

    /// Type identifier used for table lookup.
    ///
    /// See [`normalize_type_name`].
    pub fn normalized_type_name(&self) -> String {
        normalize_type_name(&self.type_name)
    }

    /// Content of the first parenthesized modifier, trimmed.
    ///
    /// `DECIMAL64(3)` yields `Some("3")`; `INT` yields `None`. Parentheses
    /// inside quoted literals do not end the modifier, so
    /// `enum('x','(y)')` yields `Some("'x','(y)'")`.
    pub fn type_modifier(&self) -> Option<&str> {
        split_type_name(&self.type_name).1.map(str::trim)
    }
}

/// Splits a raw type name into its text outside parentheses and the
/// content of its first top-level parenthesized group.
///
/// Groups nest, and `'...'` or `"..."` literals inside a group are skipped,
/// including backslash escapes and doubled quotes. Each group is replaced by
/// a single space. An unclosed group runs to the end of the input.
fn split_type_name(raw: &str) -> (String, Option<&str>) {
    let mut outside = String::with_capacity(raw.len());
    let mut modifier = None;
    let mut depth = 0usize;
    let mut group_start = 0;
    let mut quote: Option<char> = None;
    let mut escaped = false;

    for (index, c) in raw.char_indices() {
        if depth == 0 {
            if c == '(' {
                depth = 1;
                group_start = index + c.len_utf8();
                outside.push(' ');
            } else {
                outside.push(c);
            }
            continue;
        }

        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }

        match c {
            '\'' | '"' => quote = Some(c),
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 && modifier.is_none() {
                    modifier = raw.get(group_start..index);
                }
            }
            _ => {}
        }
    }

    if depth > 0 && modifier.is_none() {
        modifier = raw.get(group_start..);
    }
    (outside, modifier)
}

/// Normalizes a vendor type identifier for exact-match lookup.
///
/// Parenthesized modifiers are removed, runs of whitespace collapse to a
/// single space and the result is upper-cased:
/// `"int(10)  unsigned"` becomes `"INT UNSIGNED"`.
pub fn normalize_type_name(raw: &str) -> String {
    let (outside, _) = split_type_name(raw);
    outside
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
