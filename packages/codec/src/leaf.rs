//! Leaf-element codec: one adapted scalar in an element body.
//!
//! The helpers here are shared with the record codec, which handles its
//! text-only fields the same way.

use serde::Serialize;

use crate::adapter::{collapse_whitespace, AdaptResult, LexicalAdapter};
use crate::context::CodecContext;
use crate::diagnostics::DiagnosticKind;
use crate::enums::{EnumCodec, SchemaEnum};
use crate::error::Result;
use crate::qname::{QName, SchemaType};
use crate::xml::{ElementReader, ElementWriter};

/// Name of the XML ID attribute allowed on every descriptor element.
pub const ID_ATTRIBUTE: QName = QName::local("id");

/// A decoded leaf element.
///
/// `value` is `None` when the element was present but its text could not be
/// adapted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeafValue<T> {
    pub value: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl<T> LeafValue<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value: Some(value),
            id: None,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

/// Check the `xsi:nil` and `xsi:type` markers of an element.
///
/// Returns `false` when decoding must stop with an absent value: the
/// element is nil, or it declares a type other than `schema_type`.
pub(crate) fn accept_instance<R: ElementReader>(
    reader: &R,
    schema_type: &SchemaType,
    ctx: &mut CodecContext<'_>,
) -> Result<bool> {
    if reader.is_xsi_nil() {
        return Ok(false);
    }
    if let Some(actual) = reader.xsi_type() {
        if &actual != schema_type {
            ctx.report(
                DiagnosticKind::UnexpectedType {
                    expected: schema_type.clone(),
                    actual,
                },
                reader.location(),
            )?;
            return Ok(false);
        }
    }
    Ok(true)
}

/// Read and register the value of an `id` attribute.
///
/// An `id` is an `xs:ID`, so its whitespace is collapsed like any other
/// token. Valid ids contain no whitespace and come back unchanged; a
/// padded id is written back in its collapsed form.
pub(crate) fn read_id<R: ElementReader>(
    raw: &str,
    reader: &R,
    ctx: &mut CodecContext<'_>,
) -> Result<String> {
    let id = collapse_whitespace(raw);
    ctx.register_id(&id, reader.location())?;
    Ok(id)
}

/// Decode a text-only element with `parse`.
pub(crate) fn decode_leaf<R, T, F>(
    reader: &R,
    schema_type: &SchemaType,
    ctx: &mut CodecContext<'_>,
    parse: F,
) -> Result<Option<LeafValue<T>>>
where
    R: ElementReader,
    F: FnOnce(&str) -> AdaptResult<T>,
{
    if !accept_instance(reader, schema_type, ctx)? {
        return Ok(None);
    }

    let mut id = None;
    for attribute in reader.attributes() {
        if attribute.name == ID_ATTRIBUTE {
            id = Some(read_id(&attribute.value, reader, ctx)?);
        } else if !attribute.is_xsi() {
            ctx.report(
                DiagnosticKind::UnexpectedAttribute {
                    attribute: attribute.name,
                    expected: vec![ID_ATTRIBUTE],
                },
                reader.location(),
            )?;
        }
    }

    for child in reader.children() {
        ctx.report(
            DiagnosticKind::UnexpectedElement {
                element: child.name(),
                expected: Vec::new(),
            },
            child.location(),
        )?;
    }

    let value = match parse(&reader.text()) {
        Ok(value) => Some(value),
        Err(kind) => {
            ctx.report(kind, reader.location())?;
            None
        }
    };
    Ok(Some(LeafValue { value, id }))
}

/// Write the body of a leaf element; the caller starts and ends it.
pub(crate) fn encode_leaf<T, F>(
    writer: &mut dyn ElementWriter,
    value: Option<&LeafValue<T>>,
    ctx: &mut CodecContext<'_>,
    format: F,
) -> Result<()>
where
    F: FnOnce(&T) -> AdaptResult<String>,
{
    let Some(leaf) = value else {
        return writer.write_xsi_nil();
    };
    if let Some(id) = &leaf.id {
        writer.write_attribute(&ID_ATTRIBUTE, id)?;
    }
    if let Some(inner) = &leaf.value {
        match format(inner) {
            Ok(text) => writer.write_text(&text)?,
            Err(kind) => ctx.report(kind, None)?,
        }
    }
    Ok(())
}

/// Codec for an element whose body is one value adapted by `A`.
#[derive(Debug, Clone)]
pub struct LeafCodec<A> {
    schema_type: SchemaType,
    adapter: A,
}

impl<A: LexicalAdapter> LeafCodec<A> {
    #[must_use]
    pub fn new(schema_type: SchemaType, adapter: A) -> Self {
        Self {
            schema_type,
            adapter,
        }
    }

    #[must_use]
    pub fn schema_type(&self) -> &SchemaType {
        &self.schema_type
    }

    /// Decode the element `reader` is positioned on.
    ///
    /// Returns `Ok(None)` for `xsi:nil` elements and for elements whose
    /// `xsi:type` does not match. All schema and lexical problems are
    /// reported to the context's sink.
    ///
    /// # Errors
    /// Only when the sink escalates a diagnostic.
    pub fn decode_element<R: ElementReader>(
        &self,
        reader: &R,
        ctx: &mut CodecContext<'_>,
    ) -> Result<Option<LeafValue<A::Value>>> {
        decode_leaf(reader, &self.schema_type, ctx, |raw| self.adapter.parse(raw))
    }

    /// Encode `value` into the element the writer has just started.
    ///
    /// `None` is written as `xsi:nil="true"`.
    ///
    /// # Errors
    /// When the writer fails or the sink escalates a diagnostic.
    pub fn encode_element(
        &self,
        writer: &mut dyn ElementWriter,
        value: Option<&LeafValue<A::Value>>,
        ctx: &mut CodecContext<'_>,
    ) -> Result<()> {
        encode_leaf(writer, value, ctx, |v| self.adapter.format(v))
    }
}

impl<E: SchemaEnum> LeafCodec<EnumCodec<E>> {
    /// Leaf codec for an element holding one token of `E`.
    #[must_use]
    pub fn enumeration() -> Self {
        Self::new(E::SCHEMA_TYPE, EnumCodec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::{BooleanAdapter, CollapsedStringAdapter, TrimStringAdapter};
    use crate::config::{DecodeOptions, JAVAEE_NAMESPACE, XSD_NAMESPACE};
    use crate::diagnostics::Diagnostic;
    use crate::enums::{EnumRegistry, TransAttribute};
    use crate::xml::{NodeReader, XmlWriter};
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const XSI: &str = r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance""#;

    fn string_type() -> SchemaType {
        QName::from_static(XSD_NAMESPACE, "string")
    }

    fn decode<A: LexicalAdapter>(
        codec: &LeafCodec<A>,
        xml: &str,
    ) -> (Option<LeafValue<A::Value>>, Vec<Diagnostic>) {
        let doc = Document::parse(xml).unwrap();
        let reader = NodeReader::root(&doc, DecodeOptions::new());
        let enums = EnumRegistry::new();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let value = {
            let mut ctx = CodecContext::new(&enums, &mut sink);
            codec.decode_element(&reader, &mut ctx).unwrap()
        };
        (value, sink)
    }

    fn encode<A: LexicalAdapter>(
        codec: &LeafCodec<A>,
        value: Option<&LeafValue<A::Value>>,
    ) -> String {
        let enums = EnumRegistry::new();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let mut writer = XmlWriter::new(Vec::new());
        {
            let mut ctx = CodecContext::new(&enums, &mut sink);
            writer.start_element(&QName::local("e")).unwrap();
            codec.encode_element(&mut writer, value, &mut ctx).unwrap();
            writer.end_element().unwrap();
        }
        assert!(sink.is_empty());
        String::from_utf8(writer.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_decode_collapses_text() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let (value, diagnostics) = decode(&codec, "<e>  jdbc/Shop \n DS </e>");
        assert_eq!(value, Some(LeafValue::new("jdbc/Shop DS".to_string())));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_nil_yields_absence_regardless_of_text() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let xml = format!(r#"<e {XSI} xsi:nil="true">ignored</e>"#);
        let (value, diagnostics) = decode(&codec, &xml);
        assert_eq!(value, None);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_child_element_is_reported_not_fatal() {
        let codec = LeafCodec::new(string_type(), TrimStringAdapter);
        let (value, diagnostics) = decode(&codec, "<e>/a/*<b>x</b></e>");
        assert_eq!(value, Some(LeafValue::new("/a/*".to_string())));
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            &diagnostics[0].kind,
            DiagnosticKind::UnexpectedElement { element, .. } if element.local_name() == "b"
        ));
    }

    #[test]
    fn test_unexpected_attribute_is_reported() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let (value, diagnostics) = decode(&codec, r#"<e lang="nl">x</e>"#);
        assert_eq!(value, Some(LeafValue::new("x".to_string())));
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::UnexpectedAttribute {
                attribute: QName::local("lang"),
                expected: vec![ID_ATTRIBUTE],
            }
        );
    }

    #[test]
    fn test_xsi_type_mismatch() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let xml = format!(
            r#"<e {XSI} xmlns:xs="http://www.w3.org/2001/XMLSchema" xsi:type="xs:int">1</e>"#
        );
        let (value, diagnostics) = decode(&codec, &xml);
        assert_eq!(value, None);
        assert!(matches!(
            &diagnostics[0].kind,
            DiagnosticKind::UnexpectedType { actual, .. } if actual.local_name() == "int"
        ));
    }

    #[test]
    fn test_matching_xsi_type_is_accepted() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let xml = format!(
            r#"<e {XSI} xmlns:xs="http://www.w3.org/2001/XMLSchema" xsi:type="xs:string">ok</e>"#
        );
        let (value, diagnostics) = decode(&codec, &xml);
        assert_eq!(value, Some(LeafValue::new("ok".to_string())));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_adapter_failure_leaves_value_unset() {
        let codec = LeafCodec::new(QName::from_static(XSD_NAMESPACE, "boolean"), BooleanAdapter);
        let (value, diagnostics) = decode(&codec, r#"<e id="x1">maybe</e>"#);
        assert_eq!(
            value,
            Some(LeafValue {
                value: None,
                id: Some("x1".to_string()),
            })
        );
        assert!(matches!(
            diagnostics[0].kind,
            DiagnosticKind::AdapterError { adapter: "BooleanAdapter", .. }
        ));
    }

    #[test]
    fn test_unknown_enum_token() {
        let codec = LeafCodec::<EnumCodec<TransAttribute>>::enumeration();
        assert_eq!(
            codec.schema_type(),
            &QName::from_static(JAVAEE_NAMESPACE, "trans-attributeType")
        );
        let (value, diagnostics) = decode(&codec, "<e>BOGUS</e>");
        assert_eq!(value.unwrap().value, None);
        match &diagnostics[0].kind {
            DiagnosticKind::UnexpectedValue { allowed, .. } => assert_eq!(
                allowed,
                &["NotSupported", "Supports", "Required", "RequiresNew", "Mandatory", "Never"]
            ),
            other => panic!("unexpected diagnostic {other:?}"),
        }
    }

    #[test]
    fn test_id_round_trip() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let leaf = LeafValue::new("Shop".to_string()).with_id("name-1");

        let xml = encode(&codec, Some(&leaf));
        assert_eq!(xml, r#"<e id="name-1">Shop</e>"#);
        let (decoded, _) = decode(&codec, &xml);
        assert_eq!(decoded, Some(leaf));
    }

    #[test]
    fn test_padded_id_is_collapsed_once() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let (decoded, diagnostics) = decode(&codec, r#"<e id="  name-1 ">Shop</e>"#);
        assert!(diagnostics.is_empty());
        let decoded = decoded.unwrap();
        assert_eq!(decoded.id.as_deref(), Some("name-1"));

        let xml = encode(&codec, Some(&decoded));
        assert_eq!(xml, r#"<e id="name-1">Shop</e>"#);
        let (again, _) = decode(&codec, &xml);
        assert_eq!(again, Some(decoded));
    }

    #[test]
    fn test_absent_id_writes_no_attribute() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let xml = encode(&codec, Some(&LeafValue::new("Shop".to_string())));
        assert_eq!(xml, "<e>Shop</e>");
    }

    #[test]
    fn test_encode_none_writes_nil() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let xml = encode(&codec, None);
        assert_eq!(
            xml,
            r#"<e xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:nil="true"/>"#
        );
        let (decoded, _) = decode(&codec, &xml);
        assert_eq!(decoded, None);
    }

    #[test]
    fn test_duplicate_id_in_one_context() {
        let codec = LeafCodec::new(string_type(), CollapsedStringAdapter);
        let doc = Document::parse(r#"<r><e id="a">1</e><e id=" a ">2</e></r>"#).unwrap();
        let root = NodeReader::root(&doc, DecodeOptions::new());
        let enums = EnumRegistry::new();
        let mut sink: Vec<Diagnostic> = Vec::new();
        {
            let mut ctx = CodecContext::new(&enums, &mut sink);
            for child in root.children() {
                codec.decode_element(&child, &mut ctx).unwrap();
            }
        }
        assert_eq!(
            sink.iter().map(|d| d.kind.clone()).collect::<Vec<_>>(),
            vec![DiagnosticKind::DuplicateId { id: "a".to_string() }]
        );
    }
}
