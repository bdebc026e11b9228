//! Registry configuration for the supported deployment descriptors.

use super::codec::RecordCodec;
use super::core::RootRegistry;
use super::engine::BindingEngine;
use crate::config::{JAVAEE_NAMESPACE, PERSISTENCE_NAMESPACE};
use crate::enums::{
    BodyContent, CmpVersion, CmrFieldType, ConcurrencyManagementType, ConcurrentLockType,
    DispatcherType, EjbRefType, EnumRegistry, GenericBoolean, IsolationLevel,
    MessageDestinationUsage, MethodIntf, Multiplicity, PersistenceContextType, PersistenceType,
    PersistenceUnitTransactionType, ResAuth, ResSharingScope, ResultTypeMapping, SessionType,
    SharedCacheMode, TrackingMode, TransAttribute, TransactionType, TransportGuarantee,
    ValidationMode,
};
use crate::qname::QName;
use crate::record::schemas::{EJB_JAR, PERSISTENCE, WEB_APP};

/// Document element of `ejb-jar.xml`.
pub const EJB_JAR_ELEMENT: QName = QName::from_static(JAVAEE_NAMESPACE, "ejb-jar");

/// Document element of `web.xml`.
pub const WEB_APP_ELEMENT: QName = QName::from_static(JAVAEE_NAMESPACE, "web-app");

/// Document element of `persistence.xml`.
pub const PERSISTENCE_ELEMENT: QName = QName::from_static(PERSISTENCE_NAMESPACE, "persistence");

/// Create an enum registry with every descriptor enumeration.
#[must_use]
pub fn create_enum_registry() -> EnumRegistry {
    let mut registry = EnumRegistry::new();

    // EJB
    registry.register::<TransAttribute>();
    registry.register::<SessionType>();
    registry.register::<TransactionType>();
    registry.register::<PersistenceType>();
    registry.register::<CmpVersion>();
    registry.register::<ConcurrencyManagementType>();
    registry.register::<ConcurrentLockType>();
    registry.register::<MethodIntf>();
    registry.register::<Multiplicity>();
    registry.register::<CmrFieldType>();
    registry.register::<ResultTypeMapping>();

    // Environment references
    registry.register::<IsolationLevel>();
    registry.register::<ResAuth>();
    registry.register::<ResSharingScope>();
    registry.register::<EjbRefType>();
    registry.register::<MessageDestinationUsage>();
    registry.register::<PersistenceContextType>();

    // Web and JSP
    registry.register::<DispatcherType>();
    registry.register::<TransportGuarantee>();
    registry.register::<TrackingMode>();
    registry.register::<BodyContent>();
    registry.register::<GenericBoolean>();

    // JPA
    registry.register::<PersistenceUnitTransactionType>();
    registry.register::<SharedCacheMode>();
    registry.register::<ValidationMode>();

    registry
}

/// Create a root registry for `ejb-jar.xml`, `web.xml` and
/// `persistence.xml`.
#[must_use]
pub fn create_root_registry() -> RootRegistry {
    let mut registry = RootRegistry::new();
    registry.register(EJB_JAR_ELEMENT, RecordCodec::new(&EJB_JAR));
    registry.register(WEB_APP_ELEMENT, RecordCodec::new(&WEB_APP));
    registry.register(PERSISTENCE_ELEMENT, RecordCodec::new(&PERSISTENCE));
    registry
}

/// Create a binding engine with the default tables and options.
#[must_use]
pub fn create_binding_engine() -> BindingEngine {
    BindingEngine::new(create_enum_registry(), create_root_registry())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_registry_is_complete() {
        let registry = create_enum_registry();
        assert_eq!(registry.len(), 25);
        assert!(registry.contains(&QName::from_static(
            PERSISTENCE_NAMESPACE,
            "persistence-unit-caching-type"
        )));
    }

    #[test]
    fn test_root_registry_roots() {
        let registry = create_root_registry();
        assert_eq!(
            registry.registered_roots(),
            vec![&EJB_JAR_ELEMENT, &WEB_APP_ELEMENT, &PERSISTENCE_ELEMENT]
        );
    }
}
