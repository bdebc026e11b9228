//! Root-element dispatch table.

use std::collections::HashMap;

use super::codec::RootCodec;
use crate::qname::QName;

/// Registry mapping document element names to root codecs.
///
/// Populated once at startup and read-only afterwards.
pub struct RootRegistry {
    codecs: HashMap<QName, Box<dyn RootCodec>>,
}

impl RootRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            codecs: HashMap::new(),
        }
    }

    /// Register a codec for a document element name.
    pub fn register(&mut self, root: QName, codec: impl RootCodec + 'static) {
        self.codecs.insert(root, Box::new(codec));
    }

    /// Get the codec for a document element.
    ///
    /// Returns `None` for names that were never registered.
    #[must_use]
    pub fn resolve(&self, root: &QName) -> Option<&dyn RootCodec> {
        self.codecs.get(root).map(|codec| codec.as_ref())
    }

    /// Check if a codec is registered for a name.
    #[must_use]
    pub fn has_root(&self, root: &QName) -> bool {
        self.codecs.contains_key(root)
    }

    /// Return all registered names, sorted.
    #[must_use]
    pub fn registered_roots(&self) -> Vec<&QName> {
        let mut roots: Vec<&QName> = self.codecs.keys().collect();
        roots.sort();
        roots
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.codecs.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }
}

impl Default for RootRegistry {
    fn default() -> Self {
        Self::new()
    }
}
