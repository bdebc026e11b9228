//! Structured diagnostics reported while decoding or encoding.
//!
//! Codecs never unwind on schema, lexical or enumeration problems. They
//! describe the problem as a [`Diagnostic`], hand it to a
//! [`DiagnosticSink`] and carry on with the offending value left unset.
//! The sink decides whether the surrounding document call continues
//! (`Ok`) or aborts (`Err(CodecError::Escalated)`).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

use crate::error::{CodecError, Result};
use crate::qname::{QName, SchemaType};

/// Position of a node in the source document (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    pub line: u32,
    pub column: u32,
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Error taxonomy for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Raw text could not be adapted into the target type.
    Lexical,
    /// Element, attribute, type or subclass not allowed by the schema.
    Schema,
    /// Token or variant outside a closed enumeration.
    Enumeration,
}

fn expected_suffix(expected: &[QName]) -> String {
    if expected.is_empty() {
        return String::new();
    }
    let names: Vec<String> = expected.iter().map(ToString::to_string).collect();
    format!(", expected one of: {}", names.join(", "))
}

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A lexical token that is not in the enumeration.
    #[error("unexpected value '{token}' for {schema_type}, expected one of: {}", .allowed.join(", "))]
    UnexpectedValue {
        schema_type: SchemaType,
        token: String,
        allowed: Vec<String>,
    },

    /// A value to encode that is not in the enumeration.
    #[error("'{variant}' is not a value of {schema_type}")]
    UnexpectedVariant {
        schema_type: SchemaType,
        variant: String,
    },

    /// An `xsi:type` annotation that does not match the expected type.
    #[error("unexpected xsi:type {actual}, expected {expected}")]
    UnexpectedType { expected: SchemaType, actual: QName },

    /// A child element the schema does not allow here.
    #[error("unexpected element {element}{}", expected_suffix(.expected))]
    UnexpectedElement { element: QName, expected: Vec<QName> },

    /// An attribute the schema does not allow here.
    #[error("unexpected attribute {attribute}{}", expected_suffix(.expected))]
    UnexpectedAttribute {
        attribute: QName,
        expected: Vec<QName>,
    },

    /// A lexical adapter rejected its input.
    #[error("{adapter} could not adapt '{raw}': {reason}")]
    AdapterError {
        adapter: &'static str,
        raw: String,
        reason: String,
    },

    /// A value of a different concrete type than the slot expects.
    #[error("{actual} is not a {expected}")]
    UnexpectedSubclass {
        expected: SchemaType,
        actual: SchemaType,
    },

    /// A required field has no value.
    #[error("required element {field} has no value")]
    MissingValue { field: QName },

    /// The same XML ID was declared twice in one document.
    #[error("duplicate XML ID '{id}'")]
    DuplicateId { id: String },
}

impl DiagnosticKind {
    /// Convenience constructor for adapter failures.
    #[must_use]
    pub fn adapter(adapter: &'static str, raw: &str, reason: impl Into<String>) -> Self {
        Self::AdapterError {
            adapter,
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }

    /// Category of this diagnostic in the error taxonomy.
    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Self::AdapterError { .. } => Category::Lexical,
            Self::UnexpectedValue { .. } | Self::UnexpectedVariant { .. } => Category::Enumeration,
            Self::UnexpectedType { .. }
            | Self::UnexpectedElement { .. }
            | Self::UnexpectedAttribute { .. }
            | Self::UnexpectedSubclass { .. }
            | Self::MissingValue { .. }
            | Self::DuplicateId { .. } => Category::Schema,
        }
    }
}

/// A diagnostic with its source position, if known.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    #[serde(flatten)]
    pub kind: DiagnosticKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl Diagnostic {
    #[must_use]
    pub fn new(kind: DiagnosticKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    #[must_use]
    pub fn at(kind: DiagnosticKind, location: Option<Location>) -> Self {
        Self { kind, location }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.kind.category()
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(location) => write!(f, "{location}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

/// Collaborator that receives diagnostics and decides whether to go on.
pub trait DiagnosticSink {
    /// Accept a diagnostic.
    ///
    /// # Errors
    /// Returns [`CodecError::Escalated`] when the diagnostic must abort the
    /// surrounding document call.
    fn report(&mut self, diagnostic: Diagnostic) -> Result<()>;
}

/// Collects everything, never aborts.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) -> Result<()> {
        self.push(diagnostic);
        Ok(())
    }
}

/// When a diagnostic turns into a hard fault.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Policy {
    /// Collect every diagnostic and keep going.
    #[default]
    Lenient,
    /// Abort on the first diagnostic.
    Strict,
    /// Abort only on diagnostics of the listed categories.
    Escalate(Vec<Category>),
}

impl Policy {
    /// Check whether a diagnostic of `category` aborts under this policy.
    #[must_use]
    pub fn escalates(&self, category: Category) -> bool {
        match self {
            Self::Lenient => false,
            Self::Strict => true,
            Self::Escalate(categories) => categories.contains(&category),
        }
    }
}

/// Default sink: records diagnostics and applies a [`Policy`].
#[derive(Debug, Default)]
pub struct Diagnostics {
    policy: Policy,
    collected: Vec<Diagnostic>,
}

impl Diagnostics {
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            collected: Vec::new(),
        }
    }

    /// Sink that collects all diagnostics of a document in one pass.
    #[must_use]
    pub fn lenient() -> Self {
        Self::new(Policy::Lenient)
    }

    /// Sink that aborts on the first diagnostic.
    #[must_use]
    pub fn strict() -> Self {
        Self::new(Policy::Strict)
    }

    #[must_use]
    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.collected
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.collected.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.collected.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.collected.is_empty()
    }

    /// Count collected diagnostics of one category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.collected
            .iter()
            .filter(|d| d.category() == category)
            .count()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.collected
    }
}

impl DiagnosticSink for Diagnostics {
    fn report(&mut self, diagnostic: Diagnostic) -> Result<()> {
        let category = diagnostic.category();
        self.collected.push(diagnostic.clone());

        if self.policy.escalates(category) {
            tracing::debug!(?category, "Escalating diagnostic");
            return Err(CodecError::Escalated(Box::new(diagnostic)));
        }

        tracing::warn!(
            kind = %diagnostic.kind,
            location = ?diagnostic.location,
            "Descriptor diagnostic, continuing"
        );
        Ok(())
    }
}
