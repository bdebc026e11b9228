//! Write side of the element abstraction, backed by `quick-xml`.

use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::config::XSI_NAMESPACE;
use crate::error::{CodecError, Result};
use crate::qname::QName;

/// Sink for elements being encoded.
///
/// Calls must nest: every `start_element` is closed by one `end_element`,
/// and attributes come before any text or child element.
pub trait ElementWriter {
    fn start_element(&mut self, name: &QName) -> Result<()>;

    fn write_attribute(&mut self, name: &QName, value: &str) -> Result<()>;

    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Mark the current element `xsi:nil="true"`.
    fn write_xsi_nil(&mut self) -> Result<()>;

    fn end_element(&mut self) -> Result<()>;
}

#[derive(Debug, Clone)]
struct OpenElement {
    tag: String,
    default_namespace: String,
    xsi_declared: bool,
}

/// A start tag whose attributes are still being collected.
#[derive(Debug)]
struct PendingStart {
    element: OpenElement,
    attributes: Vec<(String, String)>,
}

impl PendingStart {
    fn to_bytes_start(&self) -> BytesStart<'_> {
        let mut start = BytesStart::new(self.element.tag.as_str());
        for (key, value) in &self.attributes {
            start.push_attribute((key.as_str(), value.as_str()));
        }
        start
    }
}

/// [`ElementWriter`] producing indented XML.
///
/// Elements are written unprefixed; a default namespace declaration is
/// emitted whenever an element's namespace differs from its parent's. The
/// `xsi` prefix is declared on the first element that needs it.
pub struct XmlWriter<W: Write> {
    writer: Writer<W>,
    open: Vec<OpenElement>,
    pending: Option<PendingStart>,
    prefix_counter: usize,
}

impl<W: Write> XmlWriter<W> {
    #[must_use]
    pub fn new(inner: W) -> Self {
        Self {
            writer: Writer::new_with_indent(inner, b' ', 2),
            open: Vec::new(),
            pending: None,
            prefix_counter: 0,
        }
    }

    /// Write the `<?xml version="1.0" encoding="UTF-8"?>` declaration.
    ///
    /// # Errors
    /// Returns an error if called after an element was started or if the
    /// underlying writer fails.
    pub fn write_declaration(&mut self) -> Result<()> {
        if self.pending.is_some() || !self.open.is_empty() {
            return Err(CodecError::WriterState(
                "XML declaration must come before the document element".to_string(),
            ));
        }
        self.writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(())
    }

    /// Finish writing and return the underlying sink.
    ///
    /// # Errors
    /// Returns [`CodecError::WriterState`] if elements are still open.
    pub fn into_inner(self) -> Result<W> {
        if self.pending.is_some() || !self.open.is_empty() {
            return Err(CodecError::WriterState(format!(
                "{} element(s) left open",
                self.open.len() + usize::from(self.pending.is_some())
            )));
        }
        Ok(self.writer.into_inner())
    }

    fn flush_pending(&mut self) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            self.writer.write_event(Event::Start(pending.to_bytes_start()))?;
            self.open.push(pending.element);
        }
        Ok(())
    }

    fn pending_mut(&mut self, what: &str) -> Result<&mut PendingStart> {
        self.pending.as_mut().ok_or_else(|| {
            CodecError::WriterState(format!("{what} written outside a start tag"))
        })
    }
}

impl<W: Write> ElementWriter for XmlWriter<W> {
    fn start_element(&mut self, name: &QName) -> Result<()> {
        self.flush_pending()?;

        let (parent_namespace, xsi_declared) = self
            .open
            .last()
            .map_or(("", false), |parent| {
                (parent.default_namespace.as_str(), parent.xsi_declared)
            });

        let mut attributes = Vec::new();
        if name.namespace() != parent_namespace {
            attributes.push(("xmlns".to_string(), name.namespace().to_string()));
        }

        self.pending = Some(PendingStart {
            element: OpenElement {
                tag: name.local_name().to_string(),
                default_namespace: name.namespace().to_string(),
                xsi_declared,
            },
            attributes,
        });
        Ok(())
    }

    fn write_attribute(&mut self, name: &QName, value: &str) -> Result<()> {
        let key = if name.is_unqualified() {
            name.local_name().to_string()
        } else if name.namespace() == XSI_NAMESPACE {
            let pending = self.pending_mut("attribute")?;
            if !pending.element.xsi_declared {
                pending
                    .attributes
                    .push(("xmlns:xsi".to_string(), XSI_NAMESPACE.to_string()));
                pending.element.xsi_declared = true;
            }
            format!("xsi:{}", name.local_name())
        } else {
            self.prefix_counter += 1;
            let prefix = format!("ns{}", self.prefix_counter);
            self.pending_mut("attribute")?
                .attributes
                .push((format!("xmlns:{prefix}"), name.namespace().to_string()));
            format!("{prefix}:{}", name.local_name())
        };

        self.pending_mut("attribute")?
            .attributes
            .push((key, value.to_string()));
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        if self.pending.is_none() && self.open.is_empty() {
            return Err(CodecError::WriterState(
                "text written outside an element".to_string(),
            ));
        }
        if text.is_empty() {
            return Ok(());
        }
        self.flush_pending()?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        Ok(())
    }

    fn write_xsi_nil(&mut self) -> Result<()> {
        self.write_attribute(&QName::from_static(XSI_NAMESPACE, "nil"), "true")
    }

    fn end_element(&mut self) -> Result<()> {
        if let Some(pending) = self.pending.take() {
            self.writer.write_event(Event::Empty(pending.to_bytes_start()))?;
            return Ok(());
        }
        let element = self.open.pop().ok_or_else(|| {
            CodecError::WriterState("end_element without an open element".to_string())
        })?;
        self.writer
            .write_event(Event::End(BytesEnd::new(element.tag.as_str())))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const NS: &str = "urn:test";

    fn finish(writer: XmlWriter<Vec<u8>>) -> String {
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_nested_elements_with_default_namespace() {
        let mut w = XmlWriter::new(Vec::new());
        w.start_element(&QName::from_static(NS, "root")).unwrap();
        w.write_attribute(&QName::local("id"), "r1").unwrap();
        w.start_element(&QName::from_static(NS, "name")).unwrap();
        w.write_text("a & b").unwrap();
        w.end_element().unwrap();
        w.start_element(&QName::from_static(NS, "empty")).unwrap();
        w.end_element().unwrap();
        w.end_element().unwrap();

        assert_eq!(
            finish(w),
            "<root xmlns=\"urn:test\" id=\"r1\">\n  <name>a &amp; b</name>\n  <empty/>\n</root>"
        );
    }

    #[test]
    fn test_xsi_nil_declares_prefix_once() {
        let mut w = XmlWriter::new(Vec::new());
        w.start_element(&QName::from_static(NS, "root")).unwrap();
        w.write_xsi_nil().unwrap();
        w.end_element().unwrap();

        assert_eq!(
            finish(w),
            "<root xmlns=\"urn:test\" xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" xsi:nil=\"true\"/>"
        );
    }

    #[test]
    fn test_namespace_switch_is_declared() {
        let mut w = XmlWriter::new(Vec::new());
        w.start_element(&QName::from_static(NS, "root")).unwrap();
        w.start_element(&QName::local("plain")).unwrap();
        w.end_element().unwrap();
        w.end_element().unwrap();

        assert_eq!(finish(w), "<root xmlns=\"urn:test\">\n  <plain xmlns=\"\"/>\n</root>");
    }

    #[test]
    fn test_attribute_after_content_is_rejected() {
        let mut w = XmlWriter::new(Vec::new());
        w.start_element(&QName::local("root")).unwrap();
        w.write_text("x").unwrap();
        let err = w.write_attribute(&QName::local("id"), "a").unwrap_err();
        assert!(matches!(err, CodecError::WriterState(_)));
    }

    #[test]
    fn test_unbalanced_end_is_rejected() {
        let mut w = XmlWriter::new(Vec::new());
        assert!(w.end_element().is_err());
        w.start_element(&QName::local("root")).unwrap();
        assert!(matches!(
            w.into_inner(),
            Err(CodecError::WriterState(_))
        ));
    }
}
