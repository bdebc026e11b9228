//! Enumerations of the Java EE deployment descriptor schemas.

use strum::{Display, EnumIter, IntoStaticStr};

use super::SchemaEnum;
use crate::config::JAVAEE_NAMESPACE;
use crate::qname::{QName, SchemaType};

const fn javaee_type(local: &'static str) -> SchemaType {
    QName::from_static(JAVAEE_NAMESPACE, local)
}

/// Container-managed transaction attribute of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum TransAttribute {
    NotSupported,
    Supports,
    Required,
    RequiresNew,
    Mandatory,
    Never,
}

impl SchemaEnum for TransAttribute {
    const SCHEMA_TYPE: SchemaType = javaee_type("trans-attributeType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum SessionType {
    Stateful,
    Stateless,
    Singleton,
}

impl SchemaEnum for SessionType {
    const SCHEMA_TYPE: SchemaType = javaee_type("session-typeType");
}

/// JDBC isolation level of a data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum IsolationLevel {
    #[strum(serialize = "TRANSACTION_READ_UNCOMMITTED")]
    ReadUncommitted,
    #[strum(serialize = "TRANSACTION_READ_COMMITTED")]
    ReadCommitted,
    #[strum(serialize = "TRANSACTION_REPEATABLE_READ")]
    RepeatableRead,
    #[strum(serialize = "TRANSACTION_SERIALIZABLE")]
    Serializable,
}

impl SchemaEnum for IsolationLevel {
    const SCHEMA_TYPE: SchemaType = javaee_type("isolation-levelType");
}

/// Who demarcates transactions of a bean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum TransactionType {
    Bean,
    Container,
}

impl SchemaEnum for TransactionType {
    const SCHEMA_TYPE: SchemaType = javaee_type("transaction-typeType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum PersistenceType {
    Bean,
    Container,
}

impl SchemaEnum for PersistenceType {
    const SCHEMA_TYPE: SchemaType = javaee_type("persistence-typeType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum CmpVersion {
    #[strum(serialize = "1.x")]
    Cmp1,
    #[strum(serialize = "2.x")]
    Cmp2,
}

impl SchemaEnum for CmpVersion {
    const SCHEMA_TYPE: SchemaType = javaee_type("cmp-versionType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum ConcurrencyManagementType {
    Bean,
    Container,
}

impl SchemaEnum for ConcurrencyManagementType {
    const SCHEMA_TYPE: SchemaType = javaee_type("concurrency-management-typeType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum ConcurrentLockType {
    Read,
    Write,
}

impl SchemaEnum for ConcurrentLockType {
    const SCHEMA_TYPE: SchemaType = javaee_type("concurrent-lock-typeType");
}

/// Interface a method element applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum MethodIntf {
    Home,
    Remote,
    LocalHome,
    Local,
    ServiceEndpoint,
    Timer,
    MessageEndpoint,
    LifecycleCallback,
}

impl SchemaEnum for MethodIntf {
    const SCHEMA_TYPE: SchemaType = javaee_type("method-intfType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum ResAuth {
    Application,
    Container,
}

impl SchemaEnum for ResAuth {
    const SCHEMA_TYPE: SchemaType = javaee_type("res-authType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum ResSharingScope {
    Shareable,
    Unshareable,
}

impl SchemaEnum for ResSharingScope {
    const SCHEMA_TYPE: SchemaType = javaee_type("res-sharing-scopeType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum EjbRefType {
    Entity,
    Session,
}

impl SchemaEnum for EjbRefType {
    const SCHEMA_TYPE: SchemaType = javaee_type("ejb-ref-typeType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum MessageDestinationUsage {
    Consumes,
    Produces,
    ConsumesProduces,
}

impl SchemaEnum for MessageDestinationUsage {
    const SCHEMA_TYPE: SchemaType = javaee_type("message-destination-usageType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum PersistenceContextType {
    Transaction,
    Extended,
}

impl SchemaEnum for PersistenceContextType {
    const SCHEMA_TYPE: SchemaType = javaee_type("persistence-context-typeType");
}

/// Cardinality of one side of a container-managed relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum Multiplicity {
    One,
    Many,
}

impl SchemaEnum for Multiplicity {
    const SCHEMA_TYPE: SchemaType = javaee_type("multiplicityType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum CmrFieldType {
    #[strum(serialize = "java.util.Collection")]
    Collection,
    #[strum(serialize = "java.util.Set")]
    Set,
}

impl SchemaEnum for CmrFieldType {
    const SCHEMA_TYPE: SchemaType = javaee_type("cmr-field-typeType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum ResultTypeMapping {
    Local,
    Remote,
}

impl SchemaEnum for ResultTypeMapping {
    const SCHEMA_TYPE: SchemaType = javaee_type("result-type-mappingType");
}

/// Request dispatch a servlet filter mapping applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum DispatcherType {
    #[strum(serialize = "FORWARD")]
    Forward,
    #[strum(serialize = "INCLUDE")]
    Include,
    #[strum(serialize = "REQUEST")]
    Request,
    #[strum(serialize = "ASYNC")]
    Async,
    #[strum(serialize = "ERROR")]
    Error,
}

impl SchemaEnum for DispatcherType {
    const SCHEMA_TYPE: SchemaType = javaee_type("dispatcherType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum TransportGuarantee {
    #[strum(serialize = "NONE")]
    None,
    #[strum(serialize = "INTEGRAL")]
    Integral,
    #[strum(serialize = "CONFIDENTIAL")]
    Confidential,
}

impl SchemaEnum for TransportGuarantee {
    const SCHEMA_TYPE: SchemaType = javaee_type("transport-guaranteeType");
}

/// How the container tracks HTTP sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum TrackingMode {
    #[strum(serialize = "COOKIE")]
    Cookie,
    #[strum(serialize = "URL")]
    Url,
    #[strum(serialize = "SSL")]
    Ssl,
}

impl SchemaEnum for TrackingMode {
    const SCHEMA_TYPE: SchemaType = javaee_type("tracking-modeType");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum BodyContent {
    #[strum(serialize = "tagdependent")]
    TagDependent,
    #[strum(serialize = "JSP")]
    Jsp,
    #[strum(serialize = "empty")]
    Empty,
    #[strum(serialize = "scriptless")]
    Scriptless,
}

impl SchemaEnum for BodyContent {
    const SCHEMA_TYPE: SchemaType = javaee_type("body-contentType");
}

/// Boolean spelled the JSP way, `yes` and `no` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
pub enum GenericBoolean {
    #[strum(serialize = "true")]
    True,
    #[strum(serialize = "false")]
    False,
    #[strum(serialize = "yes")]
    Yes,
    #[strum(serialize = "no")]
    No,
}

impl SchemaEnum for GenericBoolean {
    const SCHEMA_TYPE: SchemaType = javaee_type("generic-booleanType");
}

impl GenericBoolean {
    /// Truth value regardless of spelling.
    #[must_use]
    pub fn as_bool(self) -> bool {
        matches!(self, Self::True | Self::Yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::EnumCodec;

    #[test]
    fn test_tokens_with_custom_spelling() {
        assert_eq!(IsolationLevel::ReadCommitted.token(), "TRANSACTION_READ_COMMITTED");
        assert_eq!(CmrFieldType::Set.token(), "java.util.Set");
        assert_eq!(BodyContent::TagDependent.token(), "tagdependent");
        assert_eq!(TransportGuarantee::None.to_string(), "NONE");
    }

    #[test]
    fn test_same_tokens_in_distinct_types() {
        // Bean/Container appear in several tables but belong to different schema types
        assert_ne!(TransactionType::SCHEMA_TYPE, PersistenceType::SCHEMA_TYPE);
        assert_eq!(
            EnumCodec::<PersistenceType>::new().decode("Bean").unwrap(),
            PersistenceType::Bean
        );
    }

    #[test]
    fn test_generic_boolean() {
        let codec = EnumCodec::<GenericBoolean>::new();
        assert!(codec.decode("yes").unwrap().as_bool());
        assert!(!codec.decode("false").unwrap().as_bool());
        assert!(codec.decode("YES").is_err());
    }

    #[test]
    fn test_method_intf_table_order() {
        assert_eq!(
            MethodIntf::tokens(),
            vec![
                "Home",
                "Remote",
                "LocalHome",
                "Local",
                "ServiceEndpoint",
                "Timer",
                "MessageEndpoint",
                "LifecycleCallback"
            ]
        );
    }
}
