//! Element-level XML access.
//!
//! The codecs read and write through [`ElementReader`] and
//! [`ElementWriter`]. [`NodeReader`] and [`XmlWriter`] bind them to
//! `roxmltree` and `quick-xml`.

mod reader;
mod writer;

pub use reader::{Attribute, ElementReader, NodeReader};
pub use writer::{ElementWriter, XmlWriter};
