//! Read side of the element abstraction, backed by `roxmltree`.

use roxmltree::Node;

use crate::adapter::collapse_whitespace;
use crate::config::{normalize_namespace, DecodeOptions, XSI_NAMESPACE};
use crate::diagnostics::Location;
use crate::qname::QName;

/// An attribute as seen by a codec.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: QName,
    pub value: String,
}

impl Attribute {
    /// Check whether this is an `xsi:*` attribute.
    #[must_use]
    pub fn is_xsi(&self) -> bool {
        self.name.namespace() == XSI_NAMESPACE
    }
}

/// Positioned view of one element in the input.
///
/// Codecs only see elements through this trait, so they do not depend on
/// the parser in use.
pub trait ElementReader: Sized {
    /// Qualified name of the element.
    fn name(&self) -> QName;

    /// Attributes in document order, namespace declarations excluded.
    fn attributes(&self) -> Vec<Attribute>;

    /// Child elements in document order.
    fn children(&self) -> Vec<Self>;

    /// Concatenated character content of the element.
    fn text(&self) -> String;

    /// Check for `xsi:nil="true"`.
    fn is_xsi_nil(&self) -> bool;

    /// The `xsi:type` annotation, with its prefix resolved.
    fn xsi_type(&self) -> Option<QName>;

    /// Source position for diagnostics.
    fn location(&self) -> Option<Location>;
}

/// [`ElementReader`] over a `roxmltree` element node.
#[derive(Debug, Clone, Copy)]
pub struct NodeReader<'a, 'input> {
    node: Node<'a, 'input>,
    options: DecodeOptions,
}

impl<'a, 'input> NodeReader<'a, 'input> {
    #[must_use]
    pub fn new(node: Node<'a, 'input>, options: DecodeOptions) -> Self {
        Self { node, options }
    }

    /// Reader for the document element.
    #[must_use]
    pub fn root(document: &'a roxmltree::Document<'input>, options: DecodeOptions) -> Self {
        Self::new(document.root_element(), options)
    }

    #[must_use]
    pub fn node(&self) -> Node<'a, 'input> {
        self.node
    }

    fn element_namespace(&self, namespace: &str) -> String {
        if self.options.normalize_legacy_namespaces {
            normalize_namespace(namespace).to_string()
        } else {
            namespace.to_string()
        }
    }
}

impl ElementReader for NodeReader<'_, '_> {
    fn name(&self) -> QName {
        let tag = self.node.tag_name();
        QName::new(
            self.element_namespace(tag.namespace().unwrap_or("")),
            tag.name().to_string(),
        )
    }

    fn attributes(&self) -> Vec<Attribute> {
        self.node
            .attributes()
            .map(|attr| Attribute {
                name: QName::new(
                    attr.namespace().unwrap_or("").to_string(),
                    attr.name().to_string(),
                ),
                value: attr.value().to_string(),
            })
            .collect()
    }

    fn children(&self) -> Vec<Self> {
        self.node
            .children()
            .filter(|child| child.is_element())
            .map(|child| Self::new(child, self.options))
            .collect()
    }

    fn text(&self) -> String {
        self.node
            .children()
            .filter(|child| child.is_text())
            .filter_map(|child| child.text())
            .collect()
    }

    fn is_xsi_nil(&self) -> bool {
        self.node
            .attribute((XSI_NAMESPACE, "nil"))
            .is_some_and(|value| matches!(collapse_whitespace(value).as_str(), "true" | "1"))
    }

    fn xsi_type(&self) -> Option<QName> {
        let raw = self.node.attribute((XSI_NAMESPACE, "type"))?;
        let raw = collapse_whitespace(raw);
        let (prefix, local) = match raw.split_once(':') {
            Some((prefix, local)) => (Some(prefix), local),
            None => (None, raw.as_str()),
        };
        // An unbound prefix leaves the type unqualified; it will not match.
        let namespace = self
            .node
            .namespaces()
            .find(|ns| ns.name() == prefix)
            .map_or("", |ns| ns.uri());
        Some(QName::new(
            self.element_namespace(namespace),
            local.to_string(),
        ))
    }

    fn location(&self) -> Option<Location> {
        let pos = self.node.document().text_pos_at(self.node.range().start);
        Some(Location {
            line: pos.row,
            column: pos.col,
        })
    }
}
