//! Record schemas of the supported deployment descriptors.
//!
//! Covers the parts of `ejb-jar.xml`, `web.xml` and `persistence.xml`
//! that deployments usually carry: session, entity and message-driven
//! beans, relationships, transactions and security, environment
//! references, data sources, filters, servlets and persistence units.

use super::{AttributeSpec, FieldSpec, RecordSchema, ValueKind};
use crate::adapter::AdapterKind;
use crate::config::{JAVAEE_NAMESPACE, PERSISTENCE_NAMESPACE, XSD_NAMESPACE};
use crate::enums::{
    CmpVersion, CmrFieldType, ConcurrencyManagementType, ConcurrentLockType, DispatcherType,
    EjbRefType, IsolationLevel, MessageDestinationUsage, MethodIntf, Multiplicity,
    PersistenceContextType, PersistenceType, PersistenceUnitTransactionType, ResAuth,
    ResSharingScope, ResultTypeMapping, SchemaEnum, SessionType, SharedCacheMode, TrackingMode,
    TransAttribute, TransactionType, TransportGuarantee, ValidationMode,
};
use crate::qname::{QName, SchemaType};

const fn javaee(local: &'static str) -> SchemaType {
    QName::from_static(JAVAEE_NAMESPACE, local)
}

const fn persistence(local: &'static str) -> SchemaType {
    QName::from_static(PERSISTENCE_NAMESPACE, local)
}

const fn adapted(schema_type: SchemaType, adapter: AdapterKind) -> ValueKind {
    ValueKind::Adapted {
        schema_type,
        adapter,
    }
}

const STRING: ValueKind = adapted(javaee("string"), AdapterKind::CollapsedString);
const CLASS_NAME: ValueKind = adapted(
    javaee("fully-qualified-classType"),
    AdapterKind::CollapsedString,
);
const JNDI_NAME: ValueKind = adapted(javaee("jndi-nameType"), AdapterKind::CollapsedString);
const URL_PATTERN: ValueKind = adapted(javaee("url-patternType"), AdapterKind::TrimString);
const TRUE_FALSE: ValueKind = adapted(javaee("true-falseType"), AdapterKind::Boolean);
const INTEGER: ValueKind = adapted(javaee("xsdIntegerType"), AdapterKind::Integer);
const LONG: ValueKind = adapted(javaee("xsdLongType"), AdapterKind::Integer);
const ROLE_NAME: ValueKind = adapted(javaee("role-nameType"), AdapterKind::CollapsedString);
const WAR_PATH: ValueKind = adapted(javaee("war-pathType"), AdapterKind::CollapsedString);
const XSD_STRING_TYPE: ValueKind = adapted(javaee("xsdStringType"), AdapterKind::CollapsedString);
const LOAD_ON_STARTUP: ValueKind = adapted(javaee("load-on-startupType"), AdapterKind::LoadOnStartup);

const XSD_STRING: ValueKind = adapted(
    QName::from_static(XSD_NAMESPACE, "string"),
    AdapterKind::CollapsedString,
);
const XSD_BOOLEAN: ValueKind = adapted(
    QName::from_static(XSD_NAMESPACE, "boolean"),
    AdapterKind::Boolean,
);

// Shared Java EE types

pub static PROPERTY: RecordSchema = RecordSchema {
    schema_type: javaee("propertyType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("name", STRING).required(),
        FieldSpec::value("value", STRING).required(),
    ],
};

pub static DATA_SOURCE: RecordSchema = RecordSchema {
    schema_type: javaee("data-sourceType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("name", JNDI_NAME).required(),
        FieldSpec::value("class-name", CLASS_NAME),
        FieldSpec::value("server-name", STRING),
        FieldSpec::value("port-number", INTEGER),
        FieldSpec::value("database-name", STRING),
        FieldSpec::value("url", JNDI_NAME),
        FieldSpec::value("user", STRING),
        FieldSpec::value("password", STRING),
        FieldSpec::record("property", &PROPERTY).repeated(),
        FieldSpec::value("login-timeout", INTEGER),
        FieldSpec::value("transactional", TRUE_FALSE),
        FieldSpec::value("isolation-level", ValueKind::Enum(IsolationLevel::SCHEMA_TYPE)),
        FieldSpec::value("initial-pool-size", INTEGER),
        FieldSpec::value("max-pool-size", INTEGER),
        FieldSpec::value("min-pool-size", INTEGER),
        FieldSpec::value("max-idle-time", INTEGER),
        FieldSpec::value("max-statements", INTEGER),
    ],
};

pub static RESOURCE_REF: RecordSchema = RecordSchema {
    schema_type: javaee("resource-refType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("res-ref-name", JNDI_NAME).required(),
        FieldSpec::value("res-type", CLASS_NAME),
        FieldSpec::value("res-auth", ValueKind::Enum(ResAuth::SCHEMA_TYPE)),
        FieldSpec::value(
            "res-sharing-scope",
            ValueKind::Enum(ResSharingScope::SCHEMA_TYPE),
        ),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::value("lookup-name", JNDI_NAME),
    ],
};

/// Elements whose presence is the whole value, such as `<unchecked/>`.
pub static EMPTY: RecordSchema = RecordSchema {
    schema_type: javaee("emptyType"),
    attributes: &[],
    fields: &[],
};

pub static INJECTION_TARGET: RecordSchema = RecordSchema {
    schema_type: javaee("injection-targetType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("injection-target-class", CLASS_NAME).required(),
        FieldSpec::value("injection-target-name", STRING).required(),
    ],
};

pub static ENV_ENTRY: RecordSchema = RecordSchema {
    schema_type: javaee("env-entryType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("env-entry-name", JNDI_NAME).required(),
        FieldSpec::value("env-entry-type", CLASS_NAME),
        FieldSpec::value("env-entry-value", XSD_STRING_TYPE),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::record("injection-target", &INJECTION_TARGET).repeated(),
        FieldSpec::value("lookup-name", JNDI_NAME),
    ],
};

pub static EJB_REF: RecordSchema = RecordSchema {
    schema_type: javaee("ejb-refType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("ejb-ref-name", JNDI_NAME).required(),
        FieldSpec::value("ejb-ref-type", ValueKind::Enum(EjbRefType::SCHEMA_TYPE)),
        FieldSpec::value("home", CLASS_NAME),
        FieldSpec::value("remote", CLASS_NAME),
        FieldSpec::value("ejb-link", STRING),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::record("injection-target", &INJECTION_TARGET).repeated(),
        FieldSpec::value("lookup-name", JNDI_NAME),
    ],
};

pub static EJB_LOCAL_REF: RecordSchema = RecordSchema {
    schema_type: javaee("ejb-local-refType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("ejb-ref-name", JNDI_NAME).required(),
        FieldSpec::value("ejb-ref-type", ValueKind::Enum(EjbRefType::SCHEMA_TYPE)),
        FieldSpec::value("local-home", CLASS_NAME),
        FieldSpec::value("local", CLASS_NAME),
        FieldSpec::value("ejb-link", STRING),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::record("injection-target", &INJECTION_TARGET).repeated(),
        FieldSpec::value("lookup-name", JNDI_NAME),
    ],
};

pub static MESSAGE_DESTINATION_REF: RecordSchema = RecordSchema {
    schema_type: javaee("message-destination-refType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("message-destination-ref-name", JNDI_NAME).required(),
        FieldSpec::value("message-destination-type", CLASS_NAME),
        FieldSpec::value(
            "message-destination-usage",
            ValueKind::Enum(MessageDestinationUsage::SCHEMA_TYPE),
        ),
        FieldSpec::value("message-destination-link", STRING),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::record("injection-target", &INJECTION_TARGET).repeated(),
        FieldSpec::value("lookup-name", JNDI_NAME),
    ],
};

pub static PERSISTENCE_CONTEXT_REF: RecordSchema = RecordSchema {
    schema_type: javaee("persistence-context-refType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("persistence-context-ref-name", JNDI_NAME).required(),
        FieldSpec::value("persistence-unit-name", STRING),
        FieldSpec::value(
            "persistence-context-type",
            ValueKind::Enum(PersistenceContextType::SCHEMA_TYPE),
        ),
        FieldSpec::record("persistence-property", &PROPERTY).repeated(),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::record("injection-target", &INJECTION_TARGET).repeated(),
    ],
};

pub static SECURITY_ROLE: RecordSchema = RecordSchema {
    schema_type: javaee("security-roleType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("role-name", ROLE_NAME).required(),
    ],
};

pub static SECURITY_ROLE_REF: RecordSchema = RecordSchema {
    schema_type: javaee("security-role-refType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("role-name", ROLE_NAME).required(),
        FieldSpec::value("role-link", ROLE_NAME),
    ],
};

pub static RUN_AS: RecordSchema = RecordSchema {
    schema_type: javaee("run-asType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("role-name", ROLE_NAME).required(),
    ],
};

pub static SECURITY_IDENTITY: RecordSchema = RecordSchema {
    schema_type: javaee("security-identityType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::record("use-caller-identity", &EMPTY),
        FieldSpec::record("run-as", &RUN_AS),
    ],
};

pub static MESSAGE_DESTINATION: RecordSchema = RecordSchema {
    schema_type: javaee("message-destinationType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::value("message-destination-name", STRING).required(),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::value("lookup-name", JNDI_NAME),
    ],
};

// ejb-jar.xml

pub static NAMED_METHOD: RecordSchema = RecordSchema {
    schema_type: javaee("named-methodType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("method-name", STRING).required(),
        FieldSpec::record("method-params", &METHOD_PARAMS),
    ],
};

pub static CONCURRENT_METHOD: RecordSchema = RecordSchema {
    schema_type: javaee("concurrent-methodType"),
    attributes: &[],
    fields: &[
        FieldSpec::record("method", &NAMED_METHOD).required(),
        FieldSpec::value("lock", ValueKind::Enum(ConcurrentLockType::SCHEMA_TYPE)),
    ],
};

pub static SESSION_BEAN: RecordSchema = RecordSchema {
    schema_type: javaee("session-beanType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::value("ejb-name", STRING).required(),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::value("home", CLASS_NAME),
        FieldSpec::value("remote", CLASS_NAME),
        FieldSpec::value("local-home", CLASS_NAME),
        FieldSpec::value("local", CLASS_NAME),
        FieldSpec::value("business-local", CLASS_NAME).repeated(),
        FieldSpec::value("business-remote", CLASS_NAME).repeated(),
        FieldSpec::value("ejb-class", CLASS_NAME),
        FieldSpec::value("session-type", ValueKind::Enum(SessionType::SCHEMA_TYPE)),
        FieldSpec::value("init-on-startup", TRUE_FALSE),
        FieldSpec::value(
            "concurrency-management-type",
            ValueKind::Enum(ConcurrencyManagementType::SCHEMA_TYPE),
        ),
        FieldSpec::record("concurrent-method", &CONCURRENT_METHOD).repeated(),
        FieldSpec::value(
            "transaction-type",
            ValueKind::Enum(TransactionType::SCHEMA_TYPE),
        ),
        FieldSpec::record("env-entry", &ENV_ENTRY).repeated(),
        FieldSpec::record("ejb-ref", &EJB_REF).repeated(),
        FieldSpec::record("ejb-local-ref", &EJB_LOCAL_REF).repeated(),
        FieldSpec::record("resource-ref", &RESOURCE_REF).repeated(),
        FieldSpec::record("message-destination-ref", &MESSAGE_DESTINATION_REF).repeated(),
        FieldSpec::record("persistence-context-ref", &PERSISTENCE_CONTEXT_REF).repeated(),
        FieldSpec::record("data-source", &DATA_SOURCE).repeated(),
        FieldSpec::record("security-role-ref", &SECURITY_ROLE_REF).repeated(),
        FieldSpec::record("security-identity", &SECURITY_IDENTITY),
        FieldSpec::value("passivation-capable", TRUE_FALSE),
    ],
};

pub static MESSAGE_DRIVEN_BEAN: RecordSchema = RecordSchema {
    schema_type: javaee("message-driven-beanType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::value("ejb-name", STRING).required(),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::value("ejb-class", CLASS_NAME),
        FieldSpec::value("messaging-type", CLASS_NAME),
        FieldSpec::value(
            "transaction-type",
            ValueKind::Enum(TransactionType::SCHEMA_TYPE),
        ),
        FieldSpec::value("message-destination-type", CLASS_NAME),
        FieldSpec::value("message-destination-link", STRING),
        FieldSpec::record("env-entry", &ENV_ENTRY).repeated(),
        FieldSpec::record("ejb-ref", &EJB_REF).repeated(),
        FieldSpec::record("ejb-local-ref", &EJB_LOCAL_REF).repeated(),
        FieldSpec::record("resource-ref", &RESOURCE_REF).repeated(),
        FieldSpec::record("message-destination-ref", &MESSAGE_DESTINATION_REF).repeated(),
        FieldSpec::record("persistence-context-ref", &PERSISTENCE_CONTEXT_REF).repeated(),
        FieldSpec::record("data-source", &DATA_SOURCE).repeated(),
        FieldSpec::record("security-role-ref", &SECURITY_ROLE_REF).repeated(),
        FieldSpec::record("security-identity", &SECURITY_IDENTITY),
    ],
};

pub static CMP_FIELD: RecordSchema = RecordSchema {
    schema_type: javaee("cmp-fieldType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("field-name", STRING).required(),
    ],
};

pub static QUERY_METHOD: RecordSchema = RecordSchema {
    schema_type: javaee("query-methodType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("method-name", STRING).required(),
        FieldSpec::record("method-params", &METHOD_PARAMS).required(),
    ],
};

pub static QUERY: RecordSchema = RecordSchema {
    schema_type: javaee("queryType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING),
        FieldSpec::record("query-method", &QUERY_METHOD).required(),
        FieldSpec::value(
            "result-type-mapping",
            ValueKind::Enum(ResultTypeMapping::SCHEMA_TYPE),
        ),
        FieldSpec::value("ejb-ql", XSD_STRING_TYPE).required(),
    ],
};

pub static ENTITY_BEAN: RecordSchema = RecordSchema {
    schema_type: javaee("entity-beanType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::value("ejb-name", STRING).required(),
        FieldSpec::value("mapped-name", STRING),
        FieldSpec::value("home", CLASS_NAME),
        FieldSpec::value("remote", CLASS_NAME),
        FieldSpec::value("local-home", CLASS_NAME),
        FieldSpec::value("local", CLASS_NAME),
        FieldSpec::value("ejb-class", CLASS_NAME).required(),
        FieldSpec::value(
            "persistence-type",
            ValueKind::Enum(PersistenceType::SCHEMA_TYPE),
        )
        .required(),
        FieldSpec::value("prim-key-class", CLASS_NAME).required(),
        FieldSpec::value("reentrant", TRUE_FALSE).required(),
        FieldSpec::value("cmp-version", ValueKind::Enum(CmpVersion::SCHEMA_TYPE)),
        FieldSpec::value("abstract-schema-name", STRING),
        FieldSpec::record("cmp-field", &CMP_FIELD).repeated(),
        FieldSpec::value("primkey-field", STRING),
        FieldSpec::record("env-entry", &ENV_ENTRY).repeated(),
        FieldSpec::record("ejb-ref", &EJB_REF).repeated(),
        FieldSpec::record("ejb-local-ref", &EJB_LOCAL_REF).repeated(),
        FieldSpec::record("resource-ref", &RESOURCE_REF).repeated(),
        FieldSpec::record("message-destination-ref", &MESSAGE_DESTINATION_REF).repeated(),
        FieldSpec::record("persistence-context-ref", &PERSISTENCE_CONTEXT_REF).repeated(),
        FieldSpec::record("data-source", &DATA_SOURCE).repeated(),
        FieldSpec::record("security-role-ref", &SECURITY_ROLE_REF).repeated(),
        FieldSpec::record("security-identity", &SECURITY_IDENTITY),
        FieldSpec::record("query", &QUERY).repeated(),
    ],
};

pub static ENTERPRISE_BEANS: RecordSchema = RecordSchema {
    schema_type: javaee("enterprise-beansType"),
    attributes: &[],
    fields: &[
        FieldSpec::record("session", &SESSION_BEAN).repeated(),
        FieldSpec::record("entity", &ENTITY_BEAN).repeated(),
        FieldSpec::record("message-driven", &MESSAGE_DRIVEN_BEAN).repeated(),
    ],
};

pub static RELATIONSHIP_ROLE_SOURCE: RecordSchema = RecordSchema {
    schema_type: javaee("relationship-role-sourceType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("ejb-name", STRING).required(),
    ],
};

pub static CMR_FIELD: RecordSchema = RecordSchema {
    schema_type: javaee("cmr-fieldType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("cmr-field-name", STRING).required(),
        FieldSpec::value("cmr-field-type", ValueKind::Enum(CmrFieldType::SCHEMA_TYPE)),
    ],
};

pub static EJB_RELATIONSHIP_ROLE: RecordSchema = RecordSchema {
    schema_type: javaee("ejb-relationship-roleType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("ejb-relationship-role-name", STRING),
        FieldSpec::value("multiplicity", ValueKind::Enum(Multiplicity::SCHEMA_TYPE)).required(),
        FieldSpec::record("cascade-delete", &EMPTY),
        FieldSpec::record("relationship-role-source", &RELATIONSHIP_ROLE_SOURCE).required(),
        FieldSpec::record("cmr-field", &CMR_FIELD),
    ],
};

pub static EJB_RELATION: RecordSchema = RecordSchema {
    schema_type: javaee("ejb-relationType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("ejb-relation-name", STRING),
        FieldSpec::record("ejb-relationship-role", &EJB_RELATIONSHIP_ROLE)
            .repeated()
            .required(),
    ],
};

pub static RELATIONSHIPS: RecordSchema = RecordSchema {
    schema_type: javaee("relationshipsType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::record("ejb-relation", &EJB_RELATION).repeated().required(),
    ],
};

pub static METHOD_PARAMS: RecordSchema = RecordSchema {
    schema_type: javaee("method-paramsType"),
    attributes: &[],
    fields: &[FieldSpec::value("method-param", CLASS_NAME).repeated()],
};

pub static METHOD: RecordSchema = RecordSchema {
    schema_type: javaee("methodType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("ejb-name", STRING).required(),
        FieldSpec::value("method-intf", ValueKind::Enum(MethodIntf::SCHEMA_TYPE)),
        FieldSpec::value("method-name", STRING).required(),
        FieldSpec::record("method-params", &METHOD_PARAMS),
    ],
};

pub static CONTAINER_TRANSACTION: RecordSchema = RecordSchema {
    schema_type: javaee("container-transactionType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::record("method", &METHOD).repeated().required(),
        FieldSpec::value(
            "trans-attribute",
            ValueKind::Enum(TransAttribute::SCHEMA_TYPE),
        )
        .required(),
    ],
};

pub static METHOD_PERMISSION: RecordSchema = RecordSchema {
    schema_type: javaee("method-permissionType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("role-name", ROLE_NAME).repeated(),
        FieldSpec::record("unchecked", &EMPTY),
        FieldSpec::record("method", &METHOD).repeated().required(),
    ],
};

pub static ASSEMBLY_DESCRIPTOR: RecordSchema = RecordSchema {
    schema_type: javaee("assembly-descriptorType"),
    attributes: &[],
    fields: &[
        FieldSpec::record("security-role", &SECURITY_ROLE).repeated(),
        FieldSpec::record("method-permission", &METHOD_PERMISSION).repeated(),
        FieldSpec::record("container-transaction", &CONTAINER_TRANSACTION).repeated(),
        FieldSpec::record("message-destination", &MESSAGE_DESTINATION).repeated(),
    ],
};

pub static EJB_JAR: RecordSchema = RecordSchema {
    schema_type: javaee("ejb-jarType"),
    attributes: &[
        AttributeSpec {
            name: "version",
            kind: STRING,
        },
        AttributeSpec {
            name: "metadata-complete",
            kind: XSD_BOOLEAN,
        },
    ],
    fields: &[
        FieldSpec::value("module-name", STRING),
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::record("enterprise-beans", &ENTERPRISE_BEANS),
        FieldSpec::record("relationships", &RELATIONSHIPS),
        FieldSpec::record("assembly-descriptor", &ASSEMBLY_DESCRIPTOR),
        FieldSpec::value("ejb-client-jar", STRING),
    ],
};

// web.xml

pub static PARAM_VALUE: RecordSchema = RecordSchema {
    schema_type: javaee("param-valueType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("param-name", STRING).required(),
        FieldSpec::value("param-value", STRING).required(),
    ],
};

pub static FILTER: RecordSchema = RecordSchema {
    schema_type: javaee("filterType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::value("filter-name", STRING).required(),
        FieldSpec::value("filter-class", CLASS_NAME),
        FieldSpec::value("async-supported", TRUE_FALSE),
        FieldSpec::record("init-param", &PARAM_VALUE).repeated(),
    ],
};

pub static FILTER_MAPPING: RecordSchema = RecordSchema {
    schema_type: javaee("filter-mappingType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("filter-name", STRING).required(),
        FieldSpec::value("url-pattern", URL_PATTERN).repeated(),
        FieldSpec::value("servlet-name", STRING).repeated(),
        FieldSpec::value("dispatcher", ValueKind::Enum(DispatcherType::SCHEMA_TYPE)).repeated(),
    ],
};

pub static LISTENER: RecordSchema = RecordSchema {
    schema_type: javaee("listenerType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::value("listener-class", CLASS_NAME).required(),
    ],
};

pub static MULTIPART_CONFIG: RecordSchema = RecordSchema {
    schema_type: javaee("multipart-configType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("location", STRING),
        FieldSpec::value("max-file-size", LONG),
        FieldSpec::value("max-request-size", LONG),
        FieldSpec::value("file-size-threshold", INTEGER),
    ],
};

pub static SERVLET: RecordSchema = RecordSchema {
    schema_type: javaee("servletType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::value("servlet-name", STRING).required(),
        FieldSpec::value("servlet-class", CLASS_NAME),
        FieldSpec::value("jsp-file", STRING),
        FieldSpec::record("init-param", &PARAM_VALUE).repeated(),
        FieldSpec::value("load-on-startup", LOAD_ON_STARTUP),
        FieldSpec::value("enabled", TRUE_FALSE),
        FieldSpec::value("async-supported", TRUE_FALSE),
        FieldSpec::record("run-as", &RUN_AS),
        FieldSpec::record("security-role-ref", &SECURITY_ROLE_REF).repeated(),
        FieldSpec::record("multipart-config", &MULTIPART_CONFIG),
    ],
};

pub static SERVLET_MAPPING: RecordSchema = RecordSchema {
    schema_type: javaee("servlet-mappingType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("servlet-name", STRING).required(),
        FieldSpec::value("url-pattern", URL_PATTERN).repeated().required(),
    ],
};

pub static SESSION_CONFIG: RecordSchema = RecordSchema {
    schema_type: javaee("session-configType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("session-timeout", INTEGER),
        FieldSpec::value("tracking-mode", ValueKind::Enum(TrackingMode::SCHEMA_TYPE)).repeated(),
    ],
};

pub static WELCOME_FILE_LIST: RecordSchema = RecordSchema {
    schema_type: javaee("welcome-file-listType"),
    attributes: &[],
    fields: &[FieldSpec::value("welcome-file", XSD_STRING_TYPE).repeated().required()],
};

pub static ERROR_PAGE: RecordSchema = RecordSchema {
    schema_type: javaee("error-pageType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("error-code", INTEGER),
        FieldSpec::value("exception-type", CLASS_NAME),
        FieldSpec::value("location", WAR_PATH).required(),
    ],
};

pub static JSP_PROPERTY_GROUP: RecordSchema = RecordSchema {
    schema_type: javaee("jsp-property-groupType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::value("url-pattern", URL_PATTERN).repeated(),
        FieldSpec::value("el-ignored", TRUE_FALSE),
        FieldSpec::value("page-encoding", STRING),
        FieldSpec::value("scripting-invalid", TRUE_FALSE),
        FieldSpec::value("is-xml", TRUE_FALSE),
        FieldSpec::value("include-prelude", STRING).repeated(),
        FieldSpec::value("include-coda", STRING).repeated(),
        FieldSpec::value("deferred-syntax-allowed-as-literal", TRUE_FALSE),
        FieldSpec::value("trim-directive-whitespaces", TRUE_FALSE),
        FieldSpec::value("default-content-type", STRING),
        FieldSpec::value("buffer", STRING),
        FieldSpec::value("error-on-undeclared-namespace", TRUE_FALSE),
    ],
};

pub static JSP_CONFIG: RecordSchema = RecordSchema {
    schema_type: javaee("jsp-configType"),
    attributes: &[],
    fields: &[FieldSpec::record("jsp-property-group", &JSP_PROPERTY_GROUP).repeated()],
};

pub static WEB_RESOURCE_COLLECTION: RecordSchema = RecordSchema {
    schema_type: javaee("web-resource-collectionType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("web-resource-name", STRING).required(),
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("url-pattern", URL_PATTERN).repeated(),
        FieldSpec::value("http-method", STRING).repeated(),
        FieldSpec::value("http-method-omission", STRING).repeated(),
    ],
};

pub static AUTH_CONSTRAINT: RecordSchema = RecordSchema {
    schema_type: javaee("auth-constraintType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("role-name", ROLE_NAME).repeated(),
    ],
};

pub static USER_DATA_CONSTRAINT: RecordSchema = RecordSchema {
    schema_type: javaee("user-data-constraintType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value(
            "transport-guarantee",
            ValueKind::Enum(TransportGuarantee::SCHEMA_TYPE),
        )
        .required(),
    ],
};

pub static SECURITY_CONSTRAINT: RecordSchema = RecordSchema {
    schema_type: javaee("security-constraintType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::record("web-resource-collection", &WEB_RESOURCE_COLLECTION)
            .repeated()
            .required(),
        FieldSpec::record("auth-constraint", &AUTH_CONSTRAINT),
        FieldSpec::record("user-data-constraint", &USER_DATA_CONSTRAINT),
    ],
};

pub static LOGIN_CONFIG: RecordSchema = RecordSchema {
    schema_type: javaee("login-configType"),
    attributes: &[],
    fields: &[
        FieldSpec::value("auth-method", STRING),
        FieldSpec::value("realm-name", STRING),
    ],
};

pub static WEB_APP: RecordSchema = RecordSchema {
    schema_type: javaee("web-appType"),
    attributes: &[
        AttributeSpec {
            name: "version",
            kind: STRING,
        },
        AttributeSpec {
            name: "metadata-complete",
            kind: XSD_BOOLEAN,
        },
    ],
    fields: &[
        FieldSpec::value("module-name", STRING),
        FieldSpec::value("description", STRING).repeated(),
        FieldSpec::value("display-name", STRING).repeated(),
        FieldSpec::record("distributable", &EMPTY),
        FieldSpec::record("context-param", &PARAM_VALUE).repeated(),
        FieldSpec::record("filter", &FILTER).repeated(),
        FieldSpec::record("filter-mapping", &FILTER_MAPPING).repeated(),
        FieldSpec::record("listener", &LISTENER).repeated(),
        FieldSpec::record("servlet", &SERVLET).repeated(),
        FieldSpec::record("servlet-mapping", &SERVLET_MAPPING).repeated(),
        FieldSpec::record("session-config", &SESSION_CONFIG),
        FieldSpec::record("welcome-file-list", &WELCOME_FILE_LIST),
        FieldSpec::record("error-page", &ERROR_PAGE).repeated(),
        FieldSpec::record("jsp-config", &JSP_CONFIG),
        FieldSpec::record("security-constraint", &SECURITY_CONSTRAINT).repeated(),
        FieldSpec::record("login-config", &LOGIN_CONFIG),
        FieldSpec::record("security-role", &SECURITY_ROLE).repeated(),
        FieldSpec::record("env-entry", &ENV_ENTRY).repeated(),
        FieldSpec::record("ejb-ref", &EJB_REF).repeated(),
        FieldSpec::record("ejb-local-ref", &EJB_LOCAL_REF).repeated(),
        FieldSpec::record("resource-ref", &RESOURCE_REF).repeated(),
        FieldSpec::record("message-destination-ref", &MESSAGE_DESTINATION_REF).repeated(),
        FieldSpec::record("persistence-context-ref", &PERSISTENCE_CONTEXT_REF).repeated(),
        FieldSpec::record("data-source", &DATA_SOURCE).repeated(),
        FieldSpec::record("message-destination", &MESSAGE_DESTINATION).repeated(),
    ],
};

// persistence.xml

pub static PERSISTENCE_PROPERTY: RecordSchema = RecordSchema {
    schema_type: persistence("propertyType"),
    attributes: &[
        AttributeSpec {
            name: "name",
            kind: XSD_STRING,
        },
        AttributeSpec {
            name: "value",
            kind: XSD_STRING,
        },
    ],
    fields: &[],
};

pub static PERSISTENCE_PROPERTIES: RecordSchema = RecordSchema {
    schema_type: persistence("propertiesType"),
    attributes: &[],
    fields: &[FieldSpec::record("property", &PERSISTENCE_PROPERTY).repeated()],
};

pub static PERSISTENCE_UNIT: RecordSchema = RecordSchema {
    schema_type: persistence("persistence-unitType"),
    attributes: &[
        AttributeSpec {
            name: "name",
            kind: XSD_STRING,
        },
        AttributeSpec {
            name: "transaction-type",
            kind: ValueKind::Enum(PersistenceUnitTransactionType::SCHEMA_TYPE),
        },
    ],
    fields: &[
        FieldSpec::value("description", XSD_STRING),
        FieldSpec::value("provider", XSD_STRING),
        FieldSpec::value("jta-data-source", XSD_STRING),
        FieldSpec::value("non-jta-data-source", XSD_STRING),
        FieldSpec::value("mapping-file", XSD_STRING).repeated(),
        FieldSpec::value("jar-file", XSD_STRING).repeated(),
        FieldSpec::value("class", XSD_STRING).repeated(),
        FieldSpec::value("exclude-unlisted-classes", XSD_BOOLEAN),
        FieldSpec::value(
            "shared-cache-mode",
            ValueKind::Enum(SharedCacheMode::SCHEMA_TYPE),
        ),
        FieldSpec::value(
            "validation-mode",
            ValueKind::Enum(ValidationMode::SCHEMA_TYPE),
        ),
        FieldSpec::record("properties", &PERSISTENCE_PROPERTIES),
    ],
};

pub static PERSISTENCE: RecordSchema = RecordSchema {
    schema_type: persistence("persistenceType"),
    attributes: &[AttributeSpec {
        name: "version",
        kind: XSD_STRING,
    }],
    fields: &[FieldSpec::record("persistence-unit", &PERSISTENCE_UNIT).repeated()],
};
