//! Root-element dispatch for whole descriptor documents.
//!
//! Root codecs are registered by qualified element name. The binding
//! engine parses a document, resolves the codec for its document element
//! and runs it with a fresh per-document context.

mod codec;
mod config;
mod core;
mod engine;

pub use codec::{RecordCodec, RootCodec};
pub use config::{
    create_binding_engine, create_enum_registry, create_root_registry, EJB_JAR_ELEMENT,
    PERSISTENCE_ELEMENT, WEB_APP_ELEMENT,
};
pub use core::RootRegistry;
pub use engine::{BindingEngine, Descriptor};
