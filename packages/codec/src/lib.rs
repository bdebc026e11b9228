//! Descriptor Codec - Schema-value codecs for Java EE deployment descriptors.
//!
//! This crate maps the closed enumerations and simple values of
//! `ejb-jar.xml`, `web.xml` and `persistence.xml` to and from their XML
//! lexical form, validates `xsi:nil` and `xsi:type` annotations, and
//! dispatches whole documents to a codec by their root element.
//!
//! # Example
//!
//! ```
//! use descriptor_codec::{create_binding_engine, Diagnostics};
//! use descriptor_codec::enums::TransAttribute;
//!
//! let xml = r#"<ejb-jar xmlns="http://java.sun.com/xml/ns/javaee" version="3.0">
//!   <assembly-descriptor>
//!     <container-transaction>
//!       <method><ejb-name>Cart</ejb-name><method-name>*</method-name></method>
//!       <trans-attribute>RequiresNew</trans-attribute>
//!     </container-transaction>
//!   </assembly-descriptor>
//! </ejb-jar>"#;
//!
//! let engine = create_binding_engine();
//! let mut diagnostics = Diagnostics::lenient();
//! let descriptor = engine.decode_document(xml, &mut diagnostics).unwrap();
//!
//! let record = descriptor.record.unwrap();
//! let transaction = record
//!     .record("assembly-descriptor")
//!     .and_then(|a| a.record("container-transaction"))
//!     .unwrap();
//! assert_eq!(
//!     transaction.enum_value::<TransAttribute>("trans-attribute"),
//!     Some(TransAttribute::RequiresNew)
//! );
//! assert!(diagnostics.is_empty());
//! ```
//!
//! # Architecture
//!
//! The codec is organized into several modules:
//!
//! - [`config`]: Namespace constants and decode options
//! - [`qname`]: Qualified names and schema types
//! - [`error`]: Error types and Result alias
//! - [`diagnostics`]: Recoverable problems and the sinks that receive them
//! - [`adapter`]: Lexical adapters for strings, booleans, integers and durations
//! - [`enums`]: Enumeration tables and the generic enum codec
//! - [`xml`]: Element reader and writer boundaries
//! - [`context`]: Per-document codec state
//! - [`leaf`]: Leaf-element codec
//! - [`record`]: Declarative complex-type schemas and their codec
//! - [`registry`]: Root-element dispatch and the binding engine
//! - [`cli`]: Command-line interface

pub mod adapter;
pub mod cli;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod enums;
pub mod error;
pub mod leaf;
pub mod qname;
pub mod record;
pub mod registry;
pub mod xml;

// Re-export the binding engine
pub use registry::{create_binding_engine, BindingEngine, Descriptor};

// Re-export commonly used items
pub use diagnostics::{Diagnostic, DiagnosticKind, DiagnosticSink, Diagnostics, Policy};
pub use enums::{EnumCodec, SchemaEnum};
pub use error::{CodecError, Result};
pub use leaf::{LeafCodec, LeafValue};
pub use qname::{QName, SchemaType};
pub use record::Record;
