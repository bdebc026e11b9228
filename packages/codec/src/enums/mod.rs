//! Enum codecs: closed sets of schema values and their lexical tokens.
//!
//! Every enumeration is a plain Rust enum whose token table is declared
//! with `strum` attributes. [`SchemaEnum`] attaches the schema type, and a
//! single generic [`EnumCodec`] decodes and encodes all of them. For the
//! dynamic record codec, [`EnumMapping`] is the same table with the type
//! erased.

mod javaee;
mod persistence;
mod registry;

use std::collections::HashSet;
use std::fmt;
use std::marker::PhantomData;

use strum::IntoEnumIterator;

use crate::adapter::{AdaptResult, LexicalAdapter};
use crate::diagnostics::DiagnosticKind;
use crate::error::{CodecError, Result};
use crate::qname::SchemaType;

pub use javaee::{
    BodyContent, CmpVersion, CmrFieldType, ConcurrencyManagementType, ConcurrentLockType,
    DispatcherType, EjbRefType, GenericBoolean, IsolationLevel, MessageDestinationUsage,
    MethodIntf, Multiplicity, PersistenceContextType, PersistenceType, ResAuth,
    ResSharingScope, ResultTypeMapping, SessionType, TrackingMode, TransAttribute,
    TransactionType, TransportGuarantee,
};
pub use persistence::{PersistenceUnitTransactionType, SharedCacheMode, ValidationMode};
pub use registry::EnumRegistry;

/// A closed enumeration bound to a schema type.
///
/// The declaration order of the variants is the order of the token table.
pub trait SchemaEnum:
    Copy + PartialEq + fmt::Debug + IntoEnumIterator + Into<&'static str> + Send + Sync + 'static
{
    /// Schema type the token table belongs to.
    const SCHEMA_TYPE: SchemaType;

    /// Canonical lexical token of this variant.
    fn token(self) -> &'static str {
        self.into()
    }

    /// All tokens in declaration order.
    fn tokens() -> Vec<&'static str> {
        Self::iter().map(Into::into).collect()
    }
}

/// Stateless codec for one [`SchemaEnum`].
pub struct EnumCodec<E>(PhantomData<fn() -> E>);

impl<E: SchemaEnum> EnumCodec<E> {
    #[must_use]
    pub const fn new() -> Self {
        Self(PhantomData)
    }

    /// Decode a token by exact, case-sensitive comparison.
    ///
    /// # Examples
    /// ```
    /// use descriptor_codec::enums::{EnumCodec, TransAttribute};
    ///
    /// let codec = EnumCodec::<TransAttribute>::new();
    /// assert_eq!(codec.decode("RequiresNew").unwrap(), TransAttribute::RequiresNew);
    /// assert!(codec.decode("requiresnew").is_err());
    /// ```
    pub fn decode(&self, token: &str) -> AdaptResult<E> {
        E::iter()
            .find(|variant| variant.token() == token)
            .ok_or_else(|| DiagnosticKind::UnexpectedValue {
                schema_type: E::SCHEMA_TYPE,
                token: token.to_string(),
                allowed: E::tokens().into_iter().map(String::from).collect(),
            })
    }

    /// Encode a variant to its token.
    pub fn encode(&self, variant: E) -> AdaptResult<&'static str> {
        E::iter()
            .find(|candidate| *candidate == variant)
            .map(SchemaEnum::token)
            .ok_or_else(|| DiagnosticKind::UnexpectedVariant {
                schema_type: E::SCHEMA_TYPE,
                variant: format!("{variant:?}"),
            })
    }
}

impl<E: SchemaEnum> Default for EnumCodec<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for EnumCodec<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for EnumCodec<E> {}

impl<E> fmt::Debug for EnumCodec<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EnumCodec")
            .field(&std::any::type_name::<E>())
            .finish()
    }
}

impl<E: SchemaEnum> LexicalAdapter for EnumCodec<E> {
    type Value = E;

    fn name(&self) -> &'static str {
        "EnumCodec"
    }

    fn parse(&self, raw: &str) -> AdaptResult<E> {
        self.decode(raw)
    }

    fn format(&self, value: &E) -> AdaptResult<String> {
        self.encode(*value).map(String::from)
    }
}

/// Type-erased token table of one schema type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumMapping {
    schema_type: SchemaType,
    tokens: Vec<&'static str>,
}

impl EnumMapping {
    /// Build the mapping of a [`SchemaEnum`].
    #[must_use]
    pub fn of<E: SchemaEnum>() -> Self {
        Self {
            schema_type: E::SCHEMA_TYPE,
            tokens: E::tokens(),
        }
    }

    /// Build a mapping from an explicit token list.
    ///
    /// # Errors
    /// Returns [`CodecError::DuplicateToken`] if a token appears twice.
    pub fn from_tokens(schema_type: SchemaType, tokens: Vec<&'static str>) -> Result<Self> {
        let mut seen = HashSet::new();
        for token in &tokens {
            if !seen.insert(*token) {
                return Err(CodecError::DuplicateToken {
                    schema_type,
                    token: (*token).to_string(),
                });
            }
        }
        Ok(Self {
            schema_type,
            tokens,
        })
    }

    #[must_use]
    pub fn schema_type(&self) -> &SchemaType {
        &self.schema_type
    }

    #[must_use]
    pub fn tokens(&self) -> &[&'static str] {
        &self.tokens
    }

    fn find(&self, token: &str) -> Option<&'static str> {
        self.tokens.iter().copied().find(|t| *t == token)
    }

    /// Decode a token read from a document.
    pub fn decode(&self, token: &str) -> AdaptResult<&'static str> {
        self.find(token)
            .ok_or_else(|| DiagnosticKind::UnexpectedValue {
                schema_type: self.schema_type.clone(),
                token: token.to_string(),
                allowed: self.tokens.iter().map(|t| (*t).to_string()).collect(),
            })
    }

    /// Check a value about to be written.
    pub fn encode(&self, token: &str) -> AdaptResult<&'static str> {
        self.find(token)
            .ok_or_else(|| DiagnosticKind::UnexpectedVariant {
                schema_type: self.schema_type.clone(),
                variant: token.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::JAVAEE_NAMESPACE;
    use crate::qname::QName;

    #[test]
    fn test_unknown_trans_attribute_lists_allowed_tokens() {
        let err = EnumCodec::<TransAttribute>::new().decode("BOGUS").unwrap_err();
        match err {
            DiagnosticKind::UnexpectedValue {
                schema_type,
                token,
                allowed,
            } => {
                assert_eq!(schema_type, QName::from_static(JAVAEE_NAMESPACE, "trans-attributeType"));
                assert_eq!(token, "BOGUS");
                assert_eq!(
                    allowed,
                    vec!["NotSupported", "Supports", "Required", "RequiresNew", "Mandatory", "Never"]
                );
            }
            other => panic!("unexpected diagnostic {other:?}"),
        }
    }

    fn assert_round_trips<E: SchemaEnum>() {
        let codec = EnumCodec::<E>::new();
        for token in E::tokens() {
            let variant = codec.decode(token).unwrap();
            assert_eq!(codec.encode(variant).unwrap(), token, "{}", E::SCHEMA_TYPE);
        }
        for variant in E::iter() {
            assert_eq!(codec.decode(codec.encode(variant).unwrap()).unwrap(), variant);
        }
    }

    #[test]
    fn test_every_enum_round_trips() {
        assert_round_trips::<TransAttribute>();
        assert_round_trips::<SessionType>();
        assert_round_trips::<IsolationLevel>();
        assert_round_trips::<TransactionType>();
        assert_round_trips::<PersistenceType>();
        assert_round_trips::<CmpVersion>();
        assert_round_trips::<ConcurrencyManagementType>();
        assert_round_trips::<ConcurrentLockType>();
        assert_round_trips::<MethodIntf>();
        assert_round_trips::<ResAuth>();
        assert_round_trips::<ResSharingScope>();
        assert_round_trips::<EjbRefType>();
        assert_round_trips::<MessageDestinationUsage>();
        assert_round_trips::<PersistenceContextType>();
        assert_round_trips::<Multiplicity>();
        assert_round_trips::<CmrFieldType>();
        assert_round_trips::<ResultTypeMapping>();
        assert_round_trips::<DispatcherType>();
        assert_round_trips::<TransportGuarantee>();
        assert_round_trips::<TrackingMode>();
        assert_round_trips::<BodyContent>();
        assert_round_trips::<GenericBoolean>();
        assert_round_trips::<PersistenceUnitTransactionType>();
        assert_round_trips::<SharedCacheMode>();
        assert_round_trips::<ValidationMode>();
    }

    #[test]
    fn test_registered_mappings_round_trip() {
        let enums = crate::registry::create_enum_registry();
        assert_eq!(enums.len(), 25);
        for schema_type in enums.schema_types() {
            let mapping = enums.lookup(schema_type).unwrap();
            assert!(!mapping.tokens().is_empty(), "{schema_type}");
            for token in mapping.tokens() {
                let decoded = mapping.decode(token).unwrap();
                assert_eq!(mapping.encode(decoded).unwrap(), *token, "{schema_type}");
            }
        }
    }

    #[test]
    fn test_decode_is_case_sensitive() {
        let codec = EnumCodec::<SessionType>::new();
        assert_eq!(codec.decode("Stateless").unwrap(), SessionType::Stateless);
        assert!(codec.decode("stateless").is_err());
        assert!(codec.decode(" Stateless").is_err());
    }

    #[test]
    fn test_enum_codec_as_lexical_adapter() {
        let codec = EnumCodec::<CmpVersion>::new();
        assert_eq!(codec.parse("2.x").unwrap(), CmpVersion::Cmp2);
        assert_eq!(codec.format(&CmpVersion::Cmp1).unwrap(), "1.x");
    }

    #[test]
    fn test_mapping_of_matches_codec() {
        let mapping = EnumMapping::of::<TransAttribute>();
        assert_eq!(mapping.tokens(), TransAttribute::tokens().as_slice());
        assert_eq!(mapping.decode("Never").unwrap(), "Never");
        assert!(matches!(
            mapping.decode("never"),
            Err(DiagnosticKind::UnexpectedValue { .. })
        ));
    }

    #[test]
    fn test_mapping_encode_outside_set() {
        let mapping = EnumMapping::of::<ResAuth>();
        assert!(matches!(
            mapping.encode("Bean"),
            Err(DiagnosticKind::UnexpectedVariant { ref variant, .. }) if variant == "Bean"
        ));
    }

    #[test]
    fn test_mapping_rejects_duplicate_tokens() {
        let result = EnumMapping::from_tokens(QName::local("t"), vec!["a", "b", "a"]);
        assert!(matches!(
            result,
            Err(CodecError::DuplicateToken { ref token, .. }) if token == "a"
        ));
    }
}
