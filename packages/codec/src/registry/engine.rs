//! Binding engine that dispatches whole documents to root codecs.

use std::path::Path;

use roxmltree::{Document, ParsingOptions};
use serde::Serialize;

use super::core::RootRegistry;
use crate::config::DecodeOptions;
use crate::context::CodecContext;
use crate::diagnostics::DiagnosticSink;
use crate::enums::EnumRegistry;
use crate::error::{CodecError, Result};
use crate::qname::QName;
use crate::record::Record;
use crate::xml::{ElementReader, ElementWriter, NodeReader, XmlWriter};

/// A decoded deployment descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    /// Name of the document element.
    pub root: QName,
    /// Body of the document element; `None` when it was nil or mistyped.
    pub record: Option<Record>,
}

/// Engine that owns the read-only tables and runs document calls.
///
/// Each call builds its own [`CodecContext`], so one engine can serve any
/// number of threads at once.
pub struct BindingEngine {
    enums: EnumRegistry,
    roots: RootRegistry,
    options: DecodeOptions,
}

impl BindingEngine {
    /// Create a new engine with the given registries.
    #[must_use]
    pub fn new(enums: EnumRegistry, roots: RootRegistry) -> Self {
        Self {
            enums,
            roots,
            options: DecodeOptions::default(),
        }
    }

    /// Replace the decode options.
    #[must_use]
    pub fn with_options(mut self, options: DecodeOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn options(&self) -> DecodeOptions {
        self.options
    }

    #[must_use]
    pub fn enums(&self) -> &EnumRegistry {
        &self.enums
    }

    #[must_use]
    pub fn roots(&self) -> &RootRegistry {
        &self.roots
    }

    /// Decode a descriptor document.
    ///
    /// # Arguments
    /// * `xml` - Document text; a DOCTYPE is allowed
    /// * `sink` - Receives every diagnostic of the document
    ///
    /// # Returns
    /// The document element name and its decoded record
    ///
    /// # Errors
    /// Returns `XmlParse` for malformed XML, `UnrecognizedDocument` when no
    /// codec is registered for the document element, or the sink's
    /// escalation.
    pub fn decode_document(&self, xml: &str, sink: &mut dyn DiagnosticSink) -> Result<Descriptor> {
        let options = ParsingOptions {
            allow_dtd: true,
            ..ParsingOptions::default()
        };
        let document = Document::parse_with_options(xml, options)?;
        let reader = NodeReader::root(&document, self.options);
        let root = reader.name();

        let Some(codec) = self.roots.resolve(&root) else {
            return Err(CodecError::UnrecognizedDocument { root });
        };
        tracing::debug!(root = %root, schema_type = %codec.schema_type(), "Decoding descriptor");

        let mut ctx = CodecContext::new(&self.enums, sink);
        let record = codec.decode(&reader, &mut ctx)?;
        Ok(Descriptor { root, record })
    }

    /// Read and decode a descriptor file.
    ///
    /// # Errors
    /// Returns `Io` if the file cannot be read, otherwise as
    /// [`BindingEngine::decode_document`].
    pub fn decode_file(&self, path: &Path, sink: &mut dyn DiagnosticSink) -> Result<Descriptor> {
        let xml = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Read descriptor file");
        self.decode_document(&xml, sink)
    }

    /// Encode a descriptor as an XML document with declaration.
    ///
    /// # Errors
    /// Returns `UnrecognizedDocument` when no codec is registered for the
    /// root name, writer errors, or the sink's escalation.
    pub fn encode_document(
        &self,
        descriptor: &Descriptor,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<String> {
        let Some(codec) = self.roots.resolve(&descriptor.root) else {
            return Err(CodecError::UnrecognizedDocument {
                root: descriptor.root.clone(),
            });
        };
        tracing::debug!(root = %descriptor.root, "Encoding descriptor");

        let mut ctx = CodecContext::new(&self.enums, sink);
        let mut writer = XmlWriter::new(Vec::new());
        writer.write_declaration()?;
        writer.start_element(&descriptor.root)?;
        match &descriptor.record {
            Some(record) => codec.encode(&mut writer, record, &mut ctx)?,
            None => writer.write_xsi_nil()?,
        }
        writer.end_element()?;

        Ok(String::from_utf8(writer.into_inner()?)?)
    }
}
