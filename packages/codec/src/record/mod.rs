//! Complex-type records and the declarative schemas that drive them.
//!
//! A [`RecordSchema`] lists the attributes and child elements of one
//! descriptor type. The generic codec in [`codec`] reads and writes any
//! schema, producing dynamically typed [`Record`] values.

pub mod codec;
pub mod schemas;

use serde::Serialize;

use crate::adapter::{AdapterKind, Scalar};
use crate::enums::{EnumCodec, SchemaEnum};
use crate::leaf::LeafValue;
use crate::qname::{QName, SchemaType};

pub use codec::{decode_record, encode_record};

/// How the text of an attribute or leaf element is typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueKind {
    /// Text converted by a lexical adapter.
    Adapted {
        schema_type: SchemaType,
        adapter: AdapterKind,
    },
    /// A token of the enumeration registered for the schema type.
    Enum(SchemaType),
}

impl ValueKind {
    #[must_use]
    pub fn schema_type(&self) -> &SchemaType {
        match self {
            Self::Adapted { schema_type, .. } | Self::Enum(schema_type) => schema_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Value(ValueKind),
    Record(&'static RecordSchema),
}

/// One child element of a record type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Local name; the namespace is that of the owning schema type.
    pub name: &'static str,
    pub kind: FieldKind,
    pub repeated: bool,
    pub required: bool,
}

impl FieldSpec {
    #[must_use]
    pub const fn value(name: &'static str, kind: ValueKind) -> Self {
        Self {
            name,
            kind: FieldKind::Value(kind),
            repeated: false,
            required: false,
        }
    }

    #[must_use]
    pub const fn record(name: &'static str, schema: &'static RecordSchema) -> Self {
        Self {
            name,
            kind: FieldKind::Record(schema),
            repeated: false,
            required: false,
        }
    }

    #[must_use]
    pub const fn repeated(mut self) -> Self {
        self.repeated = true;
        self
    }

    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// An unqualified attribute other than `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: ValueKind,
}

/// Layout of one complex descriptor type.
#[derive(Debug, PartialEq, Eq)]
pub struct RecordSchema {
    pub schema_type: SchemaType,
    pub attributes: &'static [AttributeSpec],
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Namespace of the child elements.
    #[must_use]
    pub fn namespace(&self) -> &str {
        self.schema_type.namespace()
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&'static FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeSpec> {
        self.attributes.iter().find(|spec| spec.name == name)
    }

    /// Qualified names of all child elements, for diagnostics.
    #[must_use]
    pub fn field_names(&self) -> Vec<QName> {
        self.fields
            .iter()
            .map(|spec| QName::new(self.namespace().to_string(), spec.name))
            .collect()
    }

    /// Names of all allowed attributes, `id` included.
    #[must_use]
    pub fn attribute_names(&self) -> Vec<QName> {
        std::iter::once(crate::leaf::ID_ATTRIBUTE)
            .chain(self.attributes.iter().map(|spec| QName::new("", spec.name)))
            .collect()
    }
}

/// Value of one child element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Leaf(LeafValue<Scalar>),
    Record(Record),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttributeValue {
    pub name: String,
    pub value: Scalar,
}

/// A decoded instance of a [`RecordSchema`].
///
/// Fields keep document order; repeated elements appear once per
/// occurrence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub attributes: Vec<AttributeValue>,
    pub fields: Vec<Field>,
}

impl Record {
    #[must_use]
    pub fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            id: None,
            attributes: Vec::new(),
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn push(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push(Field {
            name: name.into(),
            value,
        });
    }

    /// Append a leaf field holding `value`.
    pub fn push_value(&mut self, name: impl Into<String>, value: Scalar) {
        self.push(name, FieldValue::Leaf(LeafValue::new(value)));
    }

    pub fn push_record(&mut self, name: impl Into<String>, record: Record) {
        self.push(name, FieldValue::Record(record));
    }

    /// Builder form of [`Record::push_value`].
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: Scalar) -> Self {
        self.push_value(name, value);
        self
    }

    /// Builder form of [`Record::push_record`].
    #[must_use]
    pub fn with_record(mut self, name: impl Into<String>, record: Record) -> Self {
        self.push_record(name, record);
        self
    }

    /// Set an attribute, replacing an earlier value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: Scalar) {
        let name = name.into();
        match self.attributes.iter_mut().find(|a| a.name == name) {
            Some(existing) => existing.value = value,
            None => self.attributes.push(AttributeValue { name, value }),
        }
    }

    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&Scalar> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| &a.value)
    }

    /// All values of a field, in document order.
    pub fn values(&self, name: &str) -> impl Iterator<Item = &FieldValue> + '_ {
        let name = name.to_owned();
        self.fields
            .iter()
            .filter(move |field| field.name == name)
            .map(|field| &field.value)
    }

    /// First value of a field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.values(name).next()
    }

    /// Scalar of the first leaf field with this name.
    #[must_use]
    pub fn scalar(&self, name: &str) -> Option<&Scalar> {
        self.values(name).find_map(|value| match value {
            FieldValue::Leaf(leaf) => leaf.value.as_ref(),
            FieldValue::Record(_) => None,
        })
    }

    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.scalar(name).and_then(Scalar::as_text)
    }

    /// Texts of a repeated leaf field.
    #[must_use]
    pub fn texts(&self, name: &str) -> Vec<&str> {
        self.values(name)
            .filter_map(|value| match value {
                FieldValue::Leaf(leaf) => leaf.value.as_ref().and_then(Scalar::as_text),
                FieldValue::Record(_) => None,
            })
            .collect()
    }

    #[must_use]
    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.scalar(name).and_then(Scalar::as_bool)
    }

    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.scalar(name).and_then(Scalar::as_int)
    }

    #[must_use]
    pub fn token(&self, name: &str) -> Option<&str> {
        self.scalar(name).and_then(Scalar::as_token)
    }

    /// Typed value of an enumerated field.
    #[must_use]
    pub fn enum_value<E: SchemaEnum>(&self, name: &str) -> Option<E> {
        self.token(name)
            .and_then(|token| EnumCodec::<E>::new().decode(token).ok())
    }

    /// Typed values of a repeated enumerated field.
    #[must_use]
    pub fn enum_values<E: SchemaEnum>(&self, name: &str) -> Vec<E> {
        let codec = EnumCodec::<E>::new();
        self.values(name)
            .filter_map(|value| match value {
                FieldValue::Leaf(leaf) => leaf.value.as_ref().and_then(Scalar::as_token),
                FieldValue::Record(_) => None,
            })
            .filter_map(|token| codec.decode(token).ok())
            .collect()
    }

    #[must_use]
    pub fn record(&self, name: &str) -> Option<&Record> {
        self.records(name).into_iter().next()
    }

    /// Nested records of a repeated field.
    #[must_use]
    pub fn records(&self, name: &str) -> Vec<&Record> {
        self.values(name)
            .filter_map(|value| match value {
                FieldValue::Record(record) => Some(record),
                FieldValue::Leaf(_) => None,
            })
            .collect()
    }
}
