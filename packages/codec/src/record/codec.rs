//! Generic reader and writer for [`RecordSchema`] types.

use super::{FieldKind, FieldValue, Record, RecordSchema, ValueKind};
use crate::adapter::{AdaptResult, AdapterKind, Scalar};
use crate::config::XSD_NAMESPACE;
use crate::context::CodecContext;
use crate::diagnostics::DiagnosticKind;
use crate::enums::{EnumMapping, EnumRegistry};
use crate::error::Result;
use crate::leaf::{accept_instance, decode_leaf, read_id, ID_ATTRIBUTE};
use crate::qname::QName;
use crate::xml::{ElementReader, ElementWriter};

/// Converter for one [`ValueKind`], with its enum mapping looked up.
#[derive(Debug, Clone, Copy)]
enum ValueCodec<'r> {
    Adapter(AdapterKind),
    Enum(&'r EnumMapping),
}

impl<'r> ValueCodec<'r> {
    fn resolve(kind: &ValueKind, enums: &'r EnumRegistry) -> Result<Self> {
        match kind {
            ValueKind::Adapted { adapter, .. } => Ok(Self::Adapter(*adapter)),
            ValueKind::Enum(schema_type) => enums.lookup(schema_type).map(Self::Enum),
        }
    }

    fn parse(self, raw: &str) -> AdaptResult<Scalar> {
        match self {
            Self::Adapter(adapter) => adapter.parse(raw),
            Self::Enum(mapping) => mapping
                .decode(raw)
                .map(|token| Scalar::Token(token.to_string())),
        }
    }

    fn format(self, value: &Scalar) -> AdaptResult<String> {
        match (self, value) {
            (Self::Adapter(adapter), _) => adapter.format(value),
            (Self::Enum(mapping), Scalar::Token(token) | Scalar::Text(token)) => {
                mapping.encode(token).map(String::from)
            }
            (Self::Enum(mapping), other) => Err(DiagnosticKind::UnexpectedVariant {
                schema_type: mapping.schema_type().clone(),
                variant: other.to_string(),
            }),
        }
    }
}

/// Decode the element `reader` is positioned on as an instance of `schema`.
///
/// Returns `Ok(None)` for `xsi:nil` elements and for elements whose
/// `xsi:type` names another type. Children that fail to decode are left
/// out of the record; every problem is reported to the context's sink.
///
/// # Errors
/// Returns [`CodecError::UnknownSchemaType`](crate::error::CodecError::UnknownSchemaType)
/// if the schema uses an enumeration missing from the registry, or the
/// sink's escalation.
pub fn decode_record<R: ElementReader>(
    reader: &R,
    schema: &RecordSchema,
    ctx: &mut CodecContext<'_>,
) -> Result<Option<Record>> {
    if !accept_instance(reader, &schema.schema_type, ctx)? {
        return Ok(None);
    }
    let enums = ctx.enums();
    let mut record = Record::new(schema.schema_type.clone());

    for attribute in reader.attributes() {
        if attribute.name == ID_ATTRIBUTE {
            record.id = Some(read_id(&attribute.value, reader, ctx)?);
            continue;
        }
        if attribute.is_xsi() {
            continue;
        }
        let spec = if attribute.name.is_unqualified() {
            schema.attribute(attribute.name.local_name())
        } else {
            None
        };
        let Some(spec) = spec else {
            ctx.report(
                DiagnosticKind::UnexpectedAttribute {
                    attribute: attribute.name,
                    expected: schema.attribute_names(),
                },
                reader.location(),
            )?;
            continue;
        };
        match ValueCodec::resolve(&spec.kind, enums)?.parse(&attribute.value) {
            Ok(value) => record.set_attribute(spec.name, value),
            Err(kind) => ctx.report(kind, reader.location())?,
        }
    }

    for child in reader.children() {
        let name = child.name();
        let spec = if name.namespace() == schema.namespace() {
            schema.field(name.local_name())
        } else {
            None
        };
        let Some(spec) = spec else {
            ctx.report(
                DiagnosticKind::UnexpectedElement {
                    element: name,
                    expected: schema.field_names(),
                },
                child.location(),
            )?;
            continue;
        };

        let value = match &spec.kind {
            FieldKind::Value(kind) => {
                let codec = ValueCodec::resolve(kind, enums)?;
                decode_leaf(&child, kind.schema_type(), ctx, |raw| codec.parse(raw))?
                    .filter(|leaf| leaf.value.is_some())
                    .map(FieldValue::Leaf)
            }
            FieldKind::Record(nested) => decode_record(&child, nested, ctx)?.map(FieldValue::Record),
        };
        let Some(value) = value else {
            continue;
        };

        // A single-valued field keeps the last occurrence.
        if !spec.repeated {
            if let Some(existing) = record.fields.iter_mut().find(|f| f.name == spec.name) {
                existing.value = value;
                continue;
            }
        }
        record.push(spec.name, value);
    }

    Ok(Some(record))
}

/// Write the attributes and children of `record` into the element the
/// writer has just started.
///
/// Fields are written in schema order. When a single-valued field holds
/// several values the last one is written and each earlier one is
/// reported as [`DiagnosticKind::UnexpectedElement`]. A record of another type than the
/// schema's is reported as [`DiagnosticKind::UnexpectedSubclass`] and
/// leaves the element empty.
///
/// # Errors
/// When the writer fails, an enumeration is not registered, or the sink
/// escalates a diagnostic.
pub fn encode_record(
    writer: &mut dyn ElementWriter,
    record: &Record,
    schema: &RecordSchema,
    ctx: &mut CodecContext<'_>,
) -> Result<()> {
    if record.schema_type != schema.schema_type {
        return ctx.report(
            DiagnosticKind::UnexpectedSubclass {
                expected: schema.schema_type.clone(),
                actual: record.schema_type.clone(),
            },
            None,
        );
    }
    let enums = ctx.enums();

    if let Some(id) = &record.id {
        writer.write_attribute(&ID_ATTRIBUTE, id)?;
    }
    for attribute in &record.attributes {
        let Some(spec) = schema.attribute(&attribute.name) else {
            ctx.report(
                DiagnosticKind::UnexpectedAttribute {
                    attribute: QName::new("", attribute.name.clone()),
                    expected: schema.attribute_names(),
                },
                None,
            )?;
            continue;
        };
        match ValueCodec::resolve(&spec.kind, enums)?.format(&attribute.value) {
            Ok(text) => writer.write_attribute(&QName::new("", spec.name), &text)?,
            Err(kind) => ctx.report(kind, None)?,
        }
    }

    for field in &record.fields {
        if schema.field(&field.name).is_none() {
            ctx.report(
                DiagnosticKind::UnexpectedElement {
                    element: QName::new(schema.namespace().to_string(), field.name.clone()),
                    expected: schema.field_names(),
                },
                None,
            )?;
        }
    }

    for spec in schema.fields {
        let element = QName::new(schema.namespace().to_string(), spec.name);
        let mut values: Vec<&FieldValue> = record.values(spec.name).collect();
        // A single-valued field keeps the last value, as decoding does.
        if !spec.repeated && values.len() > 1 {
            for _ in 1..values.len() {
                ctx.report(
                    DiagnosticKind::UnexpectedElement {
                        element: element.clone(),
                        expected: schema.field_names(),
                    },
                    None,
                )?;
            }
            let extra = values.len() - 1;
            values.drain(..extra);
        }

        let mut written = 0usize;
        for value in values {
            match (&spec.kind, value) {
                (FieldKind::Value(kind), FieldValue::Leaf(leaf)) => {
                    let Some(inner) = &leaf.value else {
                        continue;
                    };
                    // Format first so a failure skips the whole element.
                    let text = match ValueCodec::resolve(kind, enums)?.format(inner) {
                        Ok(text) => text,
                        Err(diagnostic) => {
                            ctx.report(diagnostic, None)?;
                            continue;
                        }
                    };
                    writer.start_element(&element)?;
                    if let Some(id) = &leaf.id {
                        writer.write_attribute(&ID_ATTRIBUTE, id)?;
                    }
                    writer.write_text(&text)?;
                    writer.end_element()?;
                }
                (FieldKind::Record(nested), FieldValue::Record(inner)) => {
                    writer.start_element(&element)?;
                    encode_record(writer, inner, nested, ctx)?;
                    writer.end_element()?;
                }
                (FieldKind::Value(kind), FieldValue::Record(inner)) => {
                    ctx.report(
                        DiagnosticKind::UnexpectedSubclass {
                            expected: kind.schema_type().clone(),
                            actual: inner.schema_type.clone(),
                        },
                        None,
                    )?;
                    continue;
                }
                (FieldKind::Record(nested), FieldValue::Leaf(_)) => {
                    ctx.report(
                        DiagnosticKind::UnexpectedSubclass {
                            expected: nested.schema_type.clone(),
                            actual: QName::from_static(XSD_NAMESPACE, "anySimpleType"),
                        },
                        None,
                    )?;
                    continue;
                }
            }
            written += 1;
        }

        if written == 0 && spec.required {
            ctx.report(DiagnosticKind::MissingValue { field: element }, None)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DecodeOptions, JAVAEE_NAMESPACE};
    use crate::diagnostics::{Diagnostic, Diagnostics};
    use crate::enums::{SchemaEnum, TransAttribute};
    use crate::error::CodecError;
    use crate::record::{AttributeSpec, FieldSpec};
    use crate::xml::{NodeReader, XmlWriter};
    use pretty_assertions::assert_eq;
    use roxmltree::Document;

    const STRING: ValueKind = ValueKind::Adapted {
        schema_type: QName::from_static(JAVAEE_NAMESPACE, "string"),
        adapter: AdapterKind::CollapsedString,
    };
    const FLAG: ValueKind = ValueKind::Adapted {
        schema_type: QName::from_static(JAVAEE_NAMESPACE, "true-falseType"),
        adapter: AdapterKind::Boolean,
    };
    const TRANS: ValueKind = ValueKind::Enum(<TransAttribute as SchemaEnum>::SCHEMA_TYPE);

    static PART: RecordSchema = RecordSchema {
        schema_type: QName::from_static(JAVAEE_NAMESPACE, "partType"),
        attributes: &[],
        fields: &[FieldSpec::value("name", STRING).required()],
    };

    static ITEM: RecordSchema = RecordSchema {
        schema_type: QName::from_static(JAVAEE_NAMESPACE, "itemType"),
        attributes: &[AttributeSpec {
            name: "mode",
            kind: TRANS,
        }],
        fields: &[
            FieldSpec::value("description", STRING).repeated(),
            FieldSpec::value("name", STRING).required(),
            FieldSpec::value("active", FLAG),
            FieldSpec::value("trans-attribute", TRANS),
            FieldSpec::record("part", &PART).repeated(),
        ],
    };

    fn registry() -> EnumRegistry {
        let mut enums = EnumRegistry::new();
        enums.register::<TransAttribute>();
        enums
    }

    fn decode(xml: &str) -> (Option<Record>, Vec<Diagnostic>) {
        let doc = Document::parse(xml).unwrap();
        let reader = NodeReader::root(&doc, DecodeOptions::new());
        let enums = registry();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let record = {
            let mut ctx = CodecContext::new(&enums, &mut sink);
            decode_record(&reader, &ITEM, &mut ctx).unwrap()
        };
        (record, sink)
    }

    fn encode(record: &Record) -> (String, Vec<Diagnostic>) {
        let enums = registry();
        let mut sink: Vec<Diagnostic> = Vec::new();
        let mut writer = XmlWriter::new(Vec::new());
        {
            let mut ctx = CodecContext::new(&enums, &mut sink);
            writer
                .start_element(&QName::from_static(JAVAEE_NAMESPACE, "item"))
                .unwrap();
            encode_record(&mut writer, record, &ITEM, &mut ctx).unwrap();
            writer.end_element().unwrap();
        }
        (String::from_utf8(writer.into_inner().unwrap()).unwrap(), sink)
    }

    const ITEM_XML: &str = r#"<item xmlns="http://java.sun.com/xml/ns/javaee" id="i1" mode="Never">
  <description>first</description>
  <description>second</description>
  <name> Cart </name>
  <active>1</active>
  <trans-attribute>Required</trans-attribute>
  <part><name>a</name></part>
  <part><name>b</name></part>
</item>"#;

    #[test]
    fn test_decode_full_record() {
        let (record, diagnostics) = decode(ITEM_XML);
        let record = record.unwrap();

        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        assert_eq!(record.id.as_deref(), Some("i1"));
        assert_eq!(record.attribute("mode"), Some(&Scalar::Token("Never".to_string())));
        assert_eq!(record.texts("description"), vec!["first", "second"]);
        assert_eq!(record.text("name"), Some("Cart"));
        assert_eq!(record.boolean("active"), Some(true));
        assert_eq!(
            record.enum_value::<TransAttribute>("trans-attribute"),
            Some(TransAttribute::Required)
        );
        let parts: Vec<&str> = record
            .records("part")
            .iter()
            .filter_map(|p| p.text("name"))
            .collect();
        assert_eq!(parts, vec!["a", "b"]);
    }

    #[test]
    fn test_decode_collects_all_problems() {
        let xml = r#"<item xmlns="http://java.sun.com/xml/ns/javaee" color="red">
  <name>Cart</name>
  <active>maybe</active>
  <trans-attribute>BOGUS</trans-attribute>
  <colour>red</colour>
</item>"#;
        let (record, diagnostics) = decode(xml);
        let record = record.unwrap();

        let kinds: Vec<&str> = diagnostics
            .iter()
            .map(|d| match d.kind {
                DiagnosticKind::UnexpectedAttribute { .. } => "attribute",
                DiagnosticKind::AdapterError { .. } => "adapter",
                DiagnosticKind::UnexpectedValue { .. } => "value",
                DiagnosticKind::UnexpectedElement { .. } => "element",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["attribute", "adapter", "value", "element"]);

        // failed fields are left out, the rest survives
        assert_eq!(record.text("name"), Some("Cart"));
        assert_eq!(record.boolean("active"), None);
        assert_eq!(record.token("trans-attribute"), None);
        assert_eq!(diagnostics[3].location.map(|l| l.line), Some(5));
    }

    #[test]
    fn test_unexpected_element_lists_expected_names() {
        let (_, diagnostics) = decode(
            r#"<item xmlns="http://java.sun.com/xml/ns/javaee"><other/></item>"#,
        );
        match &diagnostics[0].kind {
            DiagnosticKind::UnexpectedElement { element, expected } => {
                assert_eq!(element, &QName::from_static(JAVAEE_NAMESPACE, "other"));
                assert_eq!(expected.len(), ITEM.fields.len());
                assert_eq!(expected[1], QName::from_static(JAVAEE_NAMESPACE, "name"));
            }
            other => panic!("unexpected diagnostic {other:?}"),
        }
    }

    #[test]
    fn test_foreign_namespace_child_is_unexpected() {
        let (record, diagnostics) = decode(
            r#"<item xmlns="http://java.sun.com/xml/ns/javaee"><name xmlns="urn:other">x</name></item>"#,
        );
        assert_eq!(record.unwrap().text("name"), None);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_nil_record_is_absent() {
        let (record, diagnostics) = decode(
            r#"<item xmlns="http://java.sun.com/xml/ns/javaee" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" xsi:nil="true"><name>x</name></item>"#,
        );
        assert_eq!(record, None);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_single_valued_field_keeps_last() {
        let (record, _) = decode(
            r#"<item xmlns="http://java.sun.com/xml/ns/javaee"><name>a</name><name>b</name></item>"#,
        );
        let record = record.unwrap();
        assert_eq!(record.texts("name"), vec!["b"]);
    }

    #[test]
    fn test_round_trip() {
        let (record, _) = decode(ITEM_XML);
        let record = record.unwrap();

        let (xml, diagnostics) = encode(&record);
        assert!(diagnostics.is_empty(), "{diagnostics:?}");
        let (again, _) = decode(&xml);
        assert_eq!(again.unwrap(), record);
    }

    #[test]
    fn test_encode_writes_schema_order() {
        let record = Record::new(ITEM.schema_type.clone())
            .with_value("trans-attribute", Scalar::Token("Mandatory".to_string()))
            .with_value("name", Scalar::Text("Cart".to_string()));
        let (xml, diagnostics) = encode(&record);
        assert!(diagnostics.is_empty());
        assert_eq!(
            xml,
            "<item xmlns=\"http://java.sun.com/xml/ns/javaee\">\n  <name>Cart</name>\n  <trans-attribute>Mandatory</trans-attribute>\n</item>"
        );
    }

    #[test]
    fn test_encode_single_valued_field_writes_last() {
        let record = Record::new(ITEM.schema_type.clone())
            .with_value("name", Scalar::Text("a".to_string()))
            .with_value("name", Scalar::Text("b".to_string()));
        let (xml, diagnostics) = encode(&record);
        assert_eq!(
            xml,
            "<item xmlns=\"http://java.sun.com/xml/ns/javaee\">\n  <name>b</name>\n</item>"
        );
        assert_eq!(diagnostics.len(), 1);
        assert!(matches!(
            &diagnostics[0].kind,
            DiagnosticKind::UnexpectedElement { element, .. }
                if *element == QName::from_static(JAVAEE_NAMESPACE, "name")
        ));

        let (again, _) = decode(&xml);
        assert_eq!(again.unwrap().text("name"), Some("b"));
    }

    #[test]
    fn test_encode_reports_missing_required() {
        let record = Record::new(ITEM.schema_type.clone());
        let (_, diagnostics) = encode(&record);
        assert_eq!(
            diagnostics[0].kind,
            DiagnosticKind::MissingValue {
                field: QName::from_static(JAVAEE_NAMESPACE, "name"),
            }
        );
    }

    #[test]
    fn test_encode_subclass_mismatch_writes_nothing() {
        let record = Record::new(PART.schema_type.clone())
            .with_value("name", Scalar::Text("x".to_string()));
        let (xml, diagnostics) = encode(&record);
        assert_eq!(xml, "<item xmlns=\"http://java.sun.com/xml/ns/javaee\"/>");
        assert!(matches!(
            diagnostics[0].kind,
            DiagnosticKind::UnexpectedSubclass { .. }
        ));
    }

    #[test]
    fn test_encode_invalid_variant_skips_element() {
        let record = Record::new(ITEM.schema_type.clone())
            .with_value("name", Scalar::Text("Cart".to_string()))
            .with_value("trans-attribute", Scalar::Token("Sometimes".to_string()))
            .with_value("colour", Scalar::Text("red".to_string()));
        let (xml, diagnostics) = encode(&record);
        assert!(!xml.contains("trans-attribute"));
        assert!(!xml.contains("colour"));
        let kinds: Vec<_> = diagnostics.iter().map(|d| d.category()).collect();
        assert_eq!(kinds.len(), 2);
        assert!(diagnostics.iter().any(|d| matches!(
            d.kind,
            DiagnosticKind::UnexpectedVariant { ref variant, .. } if variant == "Sometimes"
        )));
    }

    #[test]
    fn test_unregistered_enum_is_hard_error() {
        let doc = Document::parse(
            r#"<item xmlns="http://java.sun.com/xml/ns/javaee"><trans-attribute>Never</trans-attribute></item>"#,
        )
        .unwrap();
        let reader = NodeReader::root(&doc, DecodeOptions::new());
        let enums = EnumRegistry::new();
        let mut sink = Diagnostics::lenient();
        let mut ctx = CodecContext::new(&enums, &mut sink);
        let err = decode_record(&reader, &ITEM, &mut ctx).unwrap_err();
        assert!(matches!(err, CodecError::UnknownSchemaType(_)));
    }

    #[test]
    fn test_strict_sink_aborts_decode() {
        let doc = Document::parse(
            r#"<item xmlns="http://java.sun.com/xml/ns/javaee"><active>maybe</active><name>x</name></item>"#,
        )
        .unwrap();
        let reader = NodeReader::root(&doc, DecodeOptions::new());
        let enums = registry();
        let mut sink = Diagnostics::strict();
        {
            let mut ctx = CodecContext::new(&enums, &mut sink);
            let err = decode_record(&reader, &ITEM, &mut ctx).unwrap_err();
            assert!(matches!(err, CodecError::Escalated(_)));
        }
        assert_eq!(sink.len(), 1);
    }
}
