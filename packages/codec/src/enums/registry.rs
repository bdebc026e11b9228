//! Registry of enum mappings keyed by schema type.

use std::collections::HashMap;

use super::{EnumMapping, SchemaEnum};
use crate::error::{CodecError, Result};
use crate::qname::SchemaType;

/// Lookup table from schema type to its [`EnumMapping`].
///
/// Built once at startup and only read afterwards, so a shared reference
/// can be used from many threads at once.
#[derive(Debug, Clone, Default)]
pub struct EnumRegistry {
    mappings: HashMap<SchemaType, EnumMapping>,
}

impl EnumRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the token table of a [`SchemaEnum`].
    pub fn register<E: SchemaEnum>(&mut self) {
        self.insert(EnumMapping::of::<E>());
    }

    /// Register a prebuilt mapping, replacing any previous one for the
    /// same schema type.
    pub fn insert(&mut self, mapping: EnumMapping) {
        self.mappings.insert(mapping.schema_type().clone(), mapping);
    }

    #[must_use]
    pub fn get(&self, schema_type: &SchemaType) -> Option<&EnumMapping> {
        self.mappings.get(schema_type)
    }

    /// Look up a mapping that a record schema depends on.
    ///
    /// # Errors
    /// Returns [`CodecError::UnknownSchemaType`] if nothing is registered.
    pub fn lookup(&self, schema_type: &SchemaType) -> Result<&EnumMapping> {
        self.get(schema_type)
            .ok_or_else(|| CodecError::UnknownSchemaType(schema_type.clone()))
    }

    #[must_use]
    pub fn contains(&self, schema_type: &SchemaType) -> bool {
        self.mappings.contains_key(schema_type)
    }

    /// Find a mapping by the local part of its schema type.
    #[must_use]
    pub fn find_by_local_name(&self, local: &str) -> Option<&EnumMapping> {
        self.mappings
            .iter()
            .find(|(name, _)| name.local_name() == local)
            .map(|(_, mapping)| mapping)
    }

    /// All registered schema types, sorted.
    #[must_use]
    pub fn schema_types(&self) -> Vec<&SchemaType> {
        let mut types: Vec<&SchemaType> = self.mappings.keys().collect();
        types.sort();
        types
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{SessionType, TransAttribute};
    use crate::qname::QName;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = EnumRegistry::new();
        registry.register::<TransAttribute>();
        registry.register::<SessionType>();

        assert_eq!(registry.len(), 2);
        let mapping = registry.lookup(&TransAttribute::SCHEMA_TYPE).unwrap();
        assert_eq!(mapping.tokens().len(), 6);
        assert!(registry.find_by_local_name("session-typeType").is_some());
    }

    #[test]
    fn test_lookup_unknown_is_error() {
        let registry = EnumRegistry::new();
        let err = registry.lookup(&QName::local("colorType")).unwrap_err();
        assert!(matches!(err, CodecError::UnknownSchemaType(_)));
    }

    #[test]
    fn test_insert_replaces() {
        let mut registry = EnumRegistry::new();
        registry.insert(
            EnumMapping::from_tokens(TransAttribute::SCHEMA_TYPE, vec!["Required"]).unwrap(),
        );
        registry.register::<TransAttribute>();
        assert_eq!(registry.len(), 1);
        assert_eq!(
            registry.get(&TransAttribute::SCHEMA_TYPE).unwrap().tokens().len(),
            6
        );
    }
}
