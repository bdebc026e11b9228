//! Root codec trait definition.

use crate::context::CodecContext;
use crate::error::Result;
use crate::qname::SchemaType;
use crate::record::{decode_record, encode_record, Record, RecordSchema};
use crate::xml::{ElementWriter, NodeReader};

/// Trait for codecs that handle a whole document.
///
/// Codecs are stateless and shared between threads; all per-document state
/// lives in the [`CodecContext`].
pub trait RootCodec: Send + Sync {
    /// Schema type of the document element.
    fn schema_type(&self) -> &SchemaType;

    /// Decode the document element.
    ///
    /// # Arguments
    /// * `reader` - Reader positioned on the document element
    /// * `ctx` - Context of the current document
    ///
    /// # Returns
    /// The decoded record, or `None` for an `xsi:nil` or mistyped root
    fn decode(
        &self,
        reader: &NodeReader<'_, '_>,
        ctx: &mut CodecContext<'_>,
    ) -> Result<Option<Record>>;

    /// Encode `record` into the document element the writer has started.
    fn encode(
        &self,
        writer: &mut dyn ElementWriter,
        record: &Record,
        ctx: &mut CodecContext<'_>,
    ) -> Result<()>;
}

/// [`RootCodec`] backed by a static [`RecordSchema`].
#[derive(Debug, Clone, Copy)]
pub struct RecordCodec {
    schema: &'static RecordSchema,
}

impl RecordCodec {
    #[must_use]
    pub fn new(schema: &'static RecordSchema) -> Self {
        Self { schema }
    }

    #[must_use]
    pub fn schema(&self) -> &'static RecordSchema {
        self.schema
    }
}

impl RootCodec for RecordCodec {
    fn schema_type(&self) -> &SchemaType {
        &self.schema.schema_type
    }

    fn decode(
        &self,
        reader: &NodeReader<'_, '_>,
        ctx: &mut CodecContext<'_>,
    ) -> Result<Option<Record>> {
        decode_record(reader, self.schema, ctx)
    }

    fn encode(
        &self,
        writer: &mut dyn ElementWriter,
        record: &Record,
        ctx: &mut CodecContext<'_>,
    ) -> Result<()> {
        encode_record(writer, record, self.schema, ctx)
    }
}
