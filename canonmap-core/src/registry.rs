//! Dialect registry and dispatcher.
//!
//! The [`DialectRegistry`] binds each [`DialectId`] to exactly one mapper.
//! It is built once at startup through `&mut self` registration and then
//! shared immutably (`Arc<DialectRegistry>`); lookups take no locks.
//!
//! When dialects must be registered after readers already exist, use
//! [`SharedRegistry`], which guards the same table with a reader-writer lock.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::config::MappingConfig;
use crate::dialects::{DialectTypeMapper, builtin_mapper};
use crate::error::{CanonMapError, Result, UnsupportedDialectError};
use crate::models::DialectId;

/// Registry of dialect mappers.
///
/// # Example
/// ```rust
/// use canonmap_core::{ColumnDescriptor, DialectId, DialectRegistry, CanonicalType};
///
/// let registry = DialectRegistry::with_builtins().unwrap();
/// let mapper = registry.lookup(DialectId::DolphinDb).unwrap();
///
/// let column = ColumnDescriptor::new("SYMBOL", 0, 0, "sym");
/// assert_eq!(mapper.map(&column), Ok(CanonicalType::String));
/// ```
#[derive(Debug, Default, Clone)]
pub struct DialectRegistry {
    mappers: HashMap<DialectId, Arc<dyn DialectTypeMapper>>,
}

impl DialectRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in dialect registered.
    ///
    /// # Errors
    /// Returns an error if a built-in type table fails validation
    pub fn with_builtins() -> Result<Self> {
        let mut registry = Self::new();
        for dialect in DialectId::ALL {
            registry.register_builtin(dialect)?;
        }
        tracing::info!(
            dialects = registry.mappers.len(),
            "Initialized dialect registry with built-in mappers"
        );
        Ok(registry)
    }

    /// Creates a registry holding only the dialects enabled in `config`.
    ///
    /// # Errors
    /// Returns a configuration error if `config` is invalid, or a table
    /// error if a built-in type table fails validation
    pub fn from_config(config: &MappingConfig) -> Result<Self> {
        config.validate()?;

        let mut registry = Self::new();
        for dialect in &config.enabled_dialects {
            registry.register_builtin(*dialect)?;
        }
        tracing::info!(
            dialects = ?registry.dialects(),
            "Initialized dialect registry from configuration"
        );
        Ok(registry)
    }

    /// Registers a mapper under its own dialect id.
    ///
    /// # Errors
    /// Returns [`CanonMapError::DuplicateDialect`] if the dialect is already bound
    pub fn register(&mut self, mapper: Arc<dyn DialectTypeMapper>) -> Result<()> {
        let dialect = mapper.dialect();
        if self.mappers.contains_key(&dialect) {
            return Err(CanonMapError::DuplicateDialect { dialect });
        }

        tracing::debug!(%dialect, "Registered dialect mapper");
        self.mappers.insert(dialect, mapper);
        Ok(())
    }

    /// Registers the built-in mapper for `dialect`.
    ///
    /// # Errors
    /// Returns an error if the dialect is already bound or its table is invalid
    pub fn register_builtin(&mut self, dialect: DialectId) -> Result<()> {
        self.register(builtin_mapper(dialect)?)
    }

    /// Looks up the mapper bound to `dialect`.
    ///
    /// # Errors
    /// Returns [`UnsupportedDialectError`] if nothing is registered for it
    pub fn lookup(
        &self,
        dialect: DialectId,
    ) -> std::result::Result<Arc<dyn DialectTypeMapper>, UnsupportedDialectError> {
        self.mappers
            .get(&dialect)
            .cloned()
            .ok_or_else(|| UnsupportedDialectError::new(dialect.as_str()))
    }

    /// Looks up a mapper by dialect token, e.g. `"dolphindb"`.
    ///
    /// # Errors
    /// Returns [`UnsupportedDialectError`] if the token names no known dialect
    /// or the dialect is not registered
    pub fn lookup_name(
        &self,
        token: &str,
    ) -> std::result::Result<Arc<dyn DialectTypeMapper>, UnsupportedDialectError> {
        self.lookup(token.parse::<DialectId>()?)
    }

    /// Fails on the first dialect in `required` that is not registered.
    ///
    /// Call this during startup so a misconfigured dialect is reported before
    /// any query runs, not lazily on the first column.
    ///
    /// # Errors
    /// Returns [`UnsupportedDialectError`] for the first missing dialect
    pub fn ensure_supported(
        &self,
        required: &[DialectId],
    ) -> std::result::Result<(), UnsupportedDialectError> {
        match required.iter().find(|d| !self.contains(**d)) {
            Some(missing) => Err(UnsupportedDialectError::new(missing.as_str())),
            None => Ok(()),
        }
    }

    /// Whether a mapper is bound to `dialect`
    pub fn contains(&self, dialect: DialectId) -> bool {
        self.mappers.contains_key(&dialect)
    }

    /// Registered dialects, sorted
    pub fn dialects(&self) -> Vec<DialectId> {
        let mut dialects: Vec<_> = self.mappers.keys().copied().collect();
        dialects.sort();
        dialects
    }

    /// Number of registered dialects
    pub fn len(&self) -> usize {
        self.mappers.len()
    }

    /// Whether no dialect is registered
    pub fn is_empty(&self) -> bool {
        self.mappers.is_empty()
    }
}

/// Registry that accepts registrations while lookups are in flight.
///
/// Lookups take the read lock and hand back a cloned `Arc`, so mapping itself
/// runs outside the lock. A poisoned lock is recovered: the map is only ever
/// mutated by a single `insert`, which cannot leave it half-written.
#[derive(Debug, Default, Clone)]
pub struct SharedRegistry {
    inner: Arc<RwLock<DialectRegistry>>,
}

impl SharedRegistry {
    /// Wraps an initialized registry.
    pub fn new(registry: DialectRegistry) -> Self {
        Self {
            inner: Arc::new(RwLock::new(registry)),
        }
    }

    /// Registers a mapper under its own dialect id.
    ///
    /// # Errors
    /// Returns [`CanonMapError::DuplicateDialect`] if the dialect is already bound
    pub fn register(&self, mapper: Arc<dyn DialectTypeMapper>) -> Result<()> {
        self.inner
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .register(mapper)
    }

    /// Looks up the mapper bound to `dialect`.
    ///
    /// # Errors
    /// Returns [`UnsupportedDialectError`] if nothing is registered for it
    pub fn lookup(
        &self,
        dialect: DialectId,
    ) -> std::result::Result<Arc<dyn DialectTypeMapper>, UnsupportedDialectError> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .lookup(dialect)
    }

    /// Looks up a mapper by dialect token.
    ///
    /// # Errors
    /// Returns [`UnsupportedDialectError`] if the token is unknown or unregistered
    pub fn lookup_name(
        &self,
        token: &str,
    ) -> std::result::Result<Arc<dyn DialectTypeMapper>, UnsupportedDialectError> {
        self.lookup(token.parse::<DialectId>()?)
    }

    /// Registered dialects, sorted
    pub fn dialects(&self) -> Vec<DialectId> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .dialects()
    }

    /// Point-in-time copy of the registry
    pub fn snapshot(&self) -> DialectRegistry {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl From<DialectRegistry> for SharedRegistry {
    fn from(registry: DialectRegistry) -> Self {
        Self::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FailureMode;
    use crate::dialects::{DolphinDbTypeMapper, PostgresTypeMapper};
    use crate::models::ColumnDescriptor;

    fn two_dialect_registry() -> DialectRegistry {
        let mut registry = DialectRegistry::new();
        registry
            .register(Arc::new(DolphinDbTypeMapper::new().unwrap()))
            .unwrap();
        registry
            .register(Arc::new(PostgresTypeMapper::new().unwrap()))
            .unwrap();
        registry
    }

    #[test]
    fn test_lookup_returns_bound_mapper() {
        let registry = two_dialect_registry();

        let dolphin = registry.lookup(DialectId::DolphinDb).unwrap();
        assert_eq!(dolphin.dialect(), DialectId::DolphinDb);

        let postgres = registry.lookup(DialectId::PostgreSql).unwrap();
        assert_eq!(postgres.dialect(), DialectId::PostgreSql);

        // SYMBOL exists only in the DolphinDB table
        let column = ColumnDescriptor::new("SYMBOL", 0, 0, "sym");
        assert!(dolphin.map(&column).is_ok());
        assert!(postgres.map(&column).is_err());
    }

    #[test]
    fn test_lookup_unregistered_dialect_fails() {
        let registry = two_dialect_registry();

        let error = registry.lookup(DialectId::MySql).unwrap_err();
        assert_eq!(error.dialect, "mysql");

        let error = registry.lookup_name("oracle").unwrap_err();
        assert_eq!(error.dialect, "oracle");
    }

    #[test]
    fn test_duplicate_registration_is_rejected() {
        let mut registry = two_dialect_registry();
        let error = registry
            .register(Arc::new(DolphinDbTypeMapper::new().unwrap()))
            .unwrap_err();

        assert!(matches!(
            error,
            CanonMapError::DuplicateDialect {
                dialect: DialectId::DolphinDb
            }
        ));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_ensure_supported_reports_first_missing() {
        let registry = two_dialect_registry();
        assert!(
            registry
                .ensure_supported(&[DialectId::DolphinDb, DialectId::PostgreSql])
                .is_ok()
        );

        let error = registry
            .ensure_supported(&[DialectId::DolphinDb, DialectId::MySql])
            .unwrap_err();
        assert_eq!(error.dialect, "mysql");
    }

    #[test]
    fn test_with_builtins_registers_all() {
        let registry = DialectRegistry::with_builtins().unwrap();
        assert_eq!(registry.dialects(), DialectId::ALL.to_vec());
        assert!(registry.lookup_name("Postgres").is_ok());
    }

    #[test]
    fn test_from_config_registers_enabled_only() {
        let config = MappingConfig {
            enabled_dialects: vec![DialectId::MySql],
            failure_mode: FailureMode::CollectAll,
        };
        let registry = DialectRegistry::from_config(&config).unwrap();

        assert_eq!(registry.dialects(), vec![DialectId::MySql]);
        assert!(registry.lookup(DialectId::DolphinDb).is_err());
    }

    #[test]
    fn test_from_config_rejects_invalid_config() {
        let config = MappingConfig {
            enabled_dialects: Vec::new(),
            failure_mode: FailureMode::FailFast,
        };
        let error = DialectRegistry::from_config(&config).unwrap_err();
        assert!(error.is_configuration_error());
    }

    #[test]
    fn test_shared_registry_dynamic_registration() {
        let mut initial = DialectRegistry::new();
        initial.register_builtin(DialectId::DolphinDb).unwrap();
        let shared = SharedRegistry::from(initial);

        assert!(shared.lookup(DialectId::MySql).is_err());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let reader = shared.clone();
                std::thread::spawn(move || {
                    let mapper = reader.lookup(DialectId::DolphinDb).unwrap();
                    mapper.map(&ColumnDescriptor::new("LONG", 0, 0, "id"))
                })
            })
            .collect();

        shared
            .register(crate::dialects::builtin_mapper(DialectId::MySql).unwrap())
            .unwrap();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                Ok(crate::models::CanonicalType::Long)
            );
        }

        assert_eq!(
            shared.dialects(),
            vec![DialectId::DolphinDb, DialectId::MySql]
        );
        assert_eq!(shared.lookup_name("mysql").unwrap().dialect(), DialectId::MySql);
        assert_eq!(shared.snapshot().len(), 2);
    }
}
