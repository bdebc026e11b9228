//! Error types for the descriptor codecs.
//!
//! Uses the dual-error pattern: `CodecError` covers hard faults that stop
//! a document call, while recoverable schema problems travel as
//! [`Diagnostic`](crate::diagnostics::Diagnostic) values through a sink.

use thiserror::Error;

use crate::diagnostics::Diagnostic;
use crate::qname::{QName, SchemaType};

/// Main error type for the codec library.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The input is not well-formed XML.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// Writing XML events failed.
    #[error("XML writing failed: {0}")]
    XmlWrite(#[from] quick_xml::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No root codec is registered for the document element.
    #[error("Unrecognized document: no codec registered for root element <{root}>")]
    UnrecognizedDocument { root: QName },

    /// A record schema refers to an enumeration that is not registered.
    #[error("No enum mapping registered for schema type {0}")]
    UnknownSchemaType(SchemaType),

    /// An enum mapping declares the same token twice.
    #[error("Duplicate token '{token}' in enum mapping for {schema_type}")]
    DuplicateToken {
        schema_type: SchemaType,
        token: String,
    },

    /// The writer was driven out of order (e.g. attribute after content).
    #[error("Invalid writer state: {0}")]
    WriterState(String),

    /// A diagnostic sink decided to abort the document call.
    #[error("Aborted on diagnostic: {0}")]
    Escalated(Box<Diagnostic>),

    /// A document was processed but produced diagnostics.
    #[error("Document has {0} diagnostic(s)")]
    Invalid(usize),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    YamlSerialization(#[from] serde_yaml_ng::Error),

    /// Encoded output was not valid UTF-8.
    #[error("Encoded output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias for codec operations.
pub type Result<T> = std::result::Result<T, CodecError>;
