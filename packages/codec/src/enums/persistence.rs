//! Enumerations of the JPA `persistence.xml` schema.

use strum::{Display, EnumIter, IntoStaticStr};

use super::SchemaEnum;
use crate::config::PERSISTENCE_NAMESPACE;
use crate::qname::{QName, SchemaType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum PersistenceUnitTransactionType {
    #[strum(serialize = "JTA")]
    Jta,
    #[strum(serialize = "RESOURCE_LOCAL")]
    ResourceLocal,
}

impl SchemaEnum for PersistenceUnitTransactionType {
    const SCHEMA_TYPE: SchemaType =
        QName::from_static(PERSISTENCE_NAMESPACE, "persistence-unit-transaction-type");
}

/// Second-level cache mode of a persistence unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum SharedCacheMode {
    #[strum(serialize = "ALL")]
    All,
    #[strum(serialize = "NONE")]
    None,
    #[strum(serialize = "ENABLE_SELECTIVE")]
    EnableSelective,
    #[strum(serialize = "DISABLE_SELECTIVE")]
    DisableSelective,
    #[strum(serialize = "UNSPECIFIED")]
    Unspecified,
}

impl SchemaEnum for SharedCacheMode {
    const SCHEMA_TYPE: SchemaType =
        QName::from_static(PERSISTENCE_NAMESPACE, "persistence-unit-caching-type");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum ValidationMode {
    #[strum(serialize = "AUTO")]
    Auto,
    #[strum(serialize = "CALLBACK")]
    Callback,
    #[strum(serialize = "NONE")]
    None,
}

impl SchemaEnum for ValidationMode {
    const SCHEMA_TYPE: SchemaType =
        QName::from_static(PERSISTENCE_NAMESPACE, "persistence-unit-validation-mode-type");
}
