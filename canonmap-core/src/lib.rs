//! Canonical type mapping for multi-database pipelines.
//!
//! This crate translates the column metadata a database reports for a
//! result set into a closed, engine-wide set of canonical types, so that
//! every downstream stage works against one vocabulary no matter which
//! database produced the rows.
//!
//! # Architecture
//! - One flat trait, [`DialectTypeMapper`], implemented once per dialect
//! - Vendor type tables declared as static data and validated at construction
//! - A [`DialectRegistry`] that binds each [`DialectId`] to exactly one mapper
//! - Mapping is pure and synchronous; mappers are shared freely across threads
//!
//! # Example
//! ```rust
//! use canonmap_core::{CanonicalType, ColumnDescriptor, DialectId, DialectRegistry};
//!
//! let registry = DialectRegistry::with_builtins().unwrap();
//! let mapper = registry.lookup(DialectId::DolphinDb).unwrap();
//!
//! let amount = ColumnDescriptor::new("DECIMAL64(S)", 20, 3, "amount");
//! assert_eq!(mapper.map(&amount), Ok(CanonicalType::decimal(20, 18)));
//! ```

pub mod config;
pub mod conformance;
pub mod dialects;
pub mod error;
pub mod logging;
pub mod models;
pub mod registry;
pub mod schema;

// Re-export commonly used types
pub use config::{FailureMode, MappingConfig};
pub use dialects::DialectTypeMapper;
pub use error::{CanonMapError, Result, UnmappableTypeError, UnsupportedDialectError};
pub use logging::init_logging;
pub use models::{CanonicalType, ColumnDescriptor, DialectId};
pub use registry::{DialectRegistry, SharedRegistry};
pub use schema::{CanonicalSchema, MappedColumn, SchemaReport, map_columns};
