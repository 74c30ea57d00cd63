//! Static vendor type tables.
//!
//! Every dialect declares its vendor identifiers as data: an array of
//! `(identifier, rule)` pairs. [`TypeTable`] validates that array once, when
//! the mapper is constructed, and then answers exact-match lookups.
//! [`TableMapper`] turns such a declaration into a [`DialectTypeMapper`].

use std::collections::HashMap;
use std::marker::PhantomData;

use crate::dialects::DialectTypeMapper;
use crate::error::{CanonMapError, Result, UnmappableTypeError};
use crate::models::{CanonicalType, ColumnDescriptor, DialectId, normalize_type_name};

/// How a matched vendor identifier becomes a canonical type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeRule {
    /// Always the same canonical type
    Fixed(CanonicalType),
    /// Decimal with precision from the column and a scale fixed by the
    /// vendor type family. The column's own scale is ignored.
    DecimalWithScale(u32),
    /// Decimal with precision and scale from the column. A reported
    /// precision of 0 means "unconstrained" and selects the defaults.
    DecimalFromColumn {
        /// Precision used when the column reports none
        default_precision: u32,
        /// Scale used when the column reports no precision
        default_scale: u32,
    },
}

impl TypeRule {
    /// Resolves this rule against one column.
    pub fn resolve(&self, column: &ColumnDescriptor) -> CanonicalType {
        match *self {
            Self::Fixed(canonical) => canonical,
            Self::DecimalWithScale(scale) => {
                CanonicalType::decimal(column.precision_digits(), scale)
            }
            Self::DecimalFromColumn {
                default_precision,
                default_scale,
            } => {
                let precision = column.precision_digits();
                if precision == 0 {
                    CanonicalType::decimal(default_precision, default_scale)
                } else {
                    CanonicalType::decimal(precision, column.scale_digits().min(precision))
                }
            }
        }
    }
}

/// Validated, immutable lookup table for one dialect.
#[derive(Debug, Clone)]
pub struct TypeTable {
    dialect: DialectId,
    rules: HashMap<&'static str, TypeRule>,
    identifiers: Vec<&'static str>,
}

impl TypeTable {
    /// Builds a table from a static declaration.
    ///
    /// # Errors
    /// Returns [`CanonMapError::InvalidTypeTable`] if the declaration is empty,
    /// or if any identifier is blank, not in normalized form, or listed twice.
    pub fn new(dialect: DialectId, entries: &'static [(&'static str, TypeRule)]) -> Result<Self> {
        if entries.is_empty() {
            return Err(CanonMapError::invalid_type_table(
                dialect,
                "type table has no entries",
            ));
        }

        let mut rules = HashMap::with_capacity(entries.len());
        let mut identifiers = Vec::with_capacity(entries.len());

        for (identifier, rule) in entries {
            if identifier.trim().is_empty() {
                return Err(CanonMapError::invalid_type_table(
                    dialect,
                    "blank vendor identifier",
                ));
            }
            if normalize_type_name(identifier) != *identifier {
                return Err(CanonMapError::invalid_type_table(
                    dialect,
                    format!("identifier '{}' is not in normalized form", identifier),
                ));
            }
            if rules.insert(*identifier, *rule).is_some() {
                return Err(CanonMapError::invalid_type_table(
                    dialect,
                    format!("identifier '{}' is declared more than once", identifier),
                ));
            }
            identifiers.push(*identifier);
        }

        Ok(Self {
            dialect,
            rules,
            identifiers,
        })
    }

    /// Dialect this table belongs to
    pub const fn dialect(&self) -> DialectId {
        self.dialect
    }

    /// Rule for an already-normalized identifier
    pub fn rule(&self, normalized: &str) -> Option<&TypeRule> {
        self.rules.get(normalized)
    }

    /// Identifiers in declaration order
    pub fn identifiers(&self) -> &[&'static str] {
        &self.identifiers
    }

    /// Maps one column by exact match on its normalized type name.
    ///
    /// # Errors
    /// Returns [`UnmappableTypeError`] naming this table's dialect when the
    /// identifier is absent.
    pub fn map(
        &self,
        column: &ColumnDescriptor,
    ) -> std::result::Result<CanonicalType, UnmappableTypeError> {
        let vendor_type = column.normalized_type_name();

        match self.rules.get(vendor_type.as_str()) {
            Some(rule) => {
                let canonical = rule.resolve(column);
                tracing::debug!(
                    dialect = %self.dialect,
                    column = column.column_name(),
                    vendor_type = %vendor_type,
                    canonical = %canonical,
                    "Mapped column type"
                );
                Ok(canonical)
            }
            None => {
                tracing::warn!(
                    dialect = %self.dialect,
                    column = column.column_name(),
                    vendor_type = %vendor_type,
                    "No canonical type for vendor type"
                );
                Err(UnmappableTypeError::new(
                    self.dialect,
                    vendor_type,
                    column.column_name(),
                ))
            }
        }
    }
}

/// A dialect's static type table declaration.
pub trait DialectTable {
    /// Dialect the table describes
    const DIALECT: DialectId;

    /// `(identifier, rule)` pairs in declaration order
    fn entries() -> &'static [(&'static str, TypeRule)];
}

/// Mapper backed by one dialect's [`DialectTable`].
#[derive(Debug, Clone)]
pub struct TableMapper<T> {
    table: TypeTable,
    declaration: PhantomData<fn() -> T>,
}

impl<T: DialectTable> TableMapper<T> {
    /// Builds the mapper and validates its type table.
    ///
    /// # Errors
    /// Returns [`CanonMapError::InvalidTypeTable`] if the static table is malformed
    pub fn new() -> Result<Self> {
        Ok(Self {
            table: TypeTable::new(T::DIALECT, T::entries())?,
            declaration: PhantomData,
        })
    }

    /// Validated table behind this mapper
    pub const fn table(&self) -> &TypeTable {
        &self.table
    }
}

impl<T: DialectTable + std::fmt::Debug> DialectTypeMapper for TableMapper<T> {
    fn dialect(&self) -> DialectId {
        self.table.dialect()
    }

    fn map(
        &self,
        column: &ColumnDescriptor,
    ) -> std::result::Result<CanonicalType, UnmappableTypeError> {
        self.table.map(column)
    }

    fn vendor_type_names(&self) -> Vec<&'static str> {
        self.table.identifiers().to_vec()
    }
}
