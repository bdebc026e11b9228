//! Configuration constants and decode options.

/// Java EE deployment descriptor namespace.
pub const JAVAEE_NAMESPACE: &str = "http://java.sun.com/xml/ns/javaee";

/// JPA `persistence.xml` namespace.
pub const PERSISTENCE_NAMESPACE: &str = "http://java.sun.com/xml/ns/persistence";

/// XML Schema namespace, used for built-in simple types.
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema";

/// XML Schema Instance namespace (`xsi:nil`, `xsi:type`).
pub const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Descriptor namespaces that are read as [`JAVAEE_NAMESPACE`] when
/// legacy normalization is enabled.
///
/// The empty string covers DTD-based (J2EE 1.2/1.3) documents, which
/// carry no namespace at all.
pub const LEGACY_JAVAEE_NAMESPACES: &[&str] = &[
    "",
    "http://java.sun.com/xml/ns/j2ee",
    "http://xmlns.jcp.org/xml/ns/javaee",
    "https://jakarta.ee/xml/ns/jakartaee",
];

/// Map a legacy descriptor namespace onto the Java EE namespace.
///
/// Namespaces that are not in [`LEGACY_JAVAEE_NAMESPACES`] are returned
/// unchanged.
///
/// # Examples
/// ```
/// use descriptor_codec::config::{normalize_namespace, JAVAEE_NAMESPACE};
///
/// assert_eq!(normalize_namespace("http://java.sun.com/xml/ns/j2ee"), JAVAEE_NAMESPACE);
/// assert_eq!(normalize_namespace("urn:other"), "urn:other");
/// ```
#[must_use]
pub fn normalize_namespace(namespace: &str) -> &str {
    if LEGACY_JAVAEE_NAMESPACES.contains(&namespace) {
        JAVAEE_NAMESPACE
    } else {
        namespace
    }
}

/// Options applied when reading a document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Read elements and `xsi:type` values in legacy descriptor namespaces
    /// as if they were in the Java EE namespace.
    pub normalize_legacy_namespaces: bool,
}

impl DecodeOptions {
    /// Create the default options (no namespace rewriting).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable legacy namespace normalization.
    #[must_use]
    pub fn with_legacy_namespaces(mut self, enabled: bool) -> Self {
        self.normalize_legacy_namespaces = enabled;
        self
    }
}
