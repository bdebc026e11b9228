//! Qualified names and schema type identifiers.

use std::borrow::Cow;
use std::fmt;

use serde::{Serialize, Serializer};

/// A `(namespace URI, local name)` pair identifying an XML element,
/// attribute or schema type.
///
/// Names built from static tables borrow their strings; names read from a
/// document own them. Equality and hashing compare the string values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QName {
    namespace: Cow<'static, str>,
    local: Cow<'static, str>,
}

/// A schema type is identified by its qualified name.
pub type SchemaType = QName;

impl QName {
    /// Create a qualified name from owned or borrowed parts.
    #[must_use]
    pub fn new(namespace: impl Into<Cow<'static, str>>, local: impl Into<Cow<'static, str>>) -> Self {
        Self {
            namespace: namespace.into(),
            local: local.into(),
        }
    }

    /// Create a qualified name from static strings, usable in `static` tables.
    #[must_use]
    pub const fn from_static(namespace: &'static str, local: &'static str) -> Self {
        Self {
            namespace: Cow::Borrowed(namespace),
            local: Cow::Borrowed(local),
        }
    }

    /// Create a name without a namespace (unqualified attributes).
    #[must_use]
    pub const fn local(local: &'static str) -> Self {
        Self::from_static("", local)
    }

    /// Namespace URI, empty when the name is unqualified.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Local part of the name.
    #[must_use]
    pub fn local_name(&self) -> &str {
        &self.local
    }

    /// Check whether this name has no namespace.
    #[must_use]
    pub fn is_unqualified(&self) -> bool {
        self.namespace.is_empty()
    }

    /// Check both parts against borrowed strings without allocating.
    #[must_use]
    pub fn matches(&self, namespace: &str, local: &str) -> bool {
        self.namespace == namespace && self.local == local
    }
}

/// Renders in Clark notation: `{namespace}local`, or just `local`.
impl fmt::Display for QName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.namespace.is_empty() {
            write!(f, "{}", self.local)
        } else {
            write!(f, "{{{}}}{}", self.namespace, self.local)
        }
    }
}

impl Serialize for QName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
