//! Configuration types for canonical type mapping.
//!
//! - `MappingConfig`: which dialects are registered at startup and how
//!   schema mapping reacts to unmappable columns
//! - `FailureMode`: fail on the first unmappable column or collect them all

mod mapping;

pub use mapping::{FailureMode, MappingConfig};
