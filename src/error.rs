//! Error types for attribute value codecs.

use thiserror::Error;

/// Errors raised while parsing or decoding an attribute value.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A required value is missing or empty
    #[error("{type_name} value is empty")]
    Empty {
        /// Name of the value type that was being parsed
        type_name: &'static str,
    },
    /// The input does not match the syntax of the value type
    #[error("malformed value '{value}': {reason}")]
    Malformed {
        /// The offending input
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },
    /// The input is syntactically valid but semantically impossible
    #[error("value '{value}' out of range: {reason}")]
    OutOfRange {
        /// The offending input
        value: String,
        /// Why it was rejected
        reason: &'static str,
    },
    /// A structured address contained a child element it does not know
    #[error("unrecognized child element '{name}'")]
    UnrecognizedChild {
        /// Qualified name of the child element
        name: String,
    },
    /// Base64, UTF-8 or embedded XML conversion failed
    #[error("encoding failure: {0}")]
    EncodingFailure(#[from] EncodingError),
}

impl ParseError {
    pub(crate) fn malformed(value: impl Into<String>, reason: &'static str) -> Self {
        Self::Malformed {
            value: value.into(),
            reason,
        }
    }

    pub(crate) fn out_of_range(value: impl Into<String>, reason: &'static str) -> Self {
        Self::OutOfRange {
            value: value.into(),
            reason,
        }
    }
}

/// The underlying failure of a wire conversion.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// The payload is not valid Base64
    #[error("invalid base64 payload")]
    Base64(#[source] base64::DecodeError),
    /// The decoded payload is not valid UTF-8
    #[error("decoded payload is not UTF-8")]
    Utf8(#[source] std::string::FromUtf8Error),
    /// The decoded payload is not well-formed XML
    #[error("decoded payload is not well-formed XML")]
    Xml(#[source] eidas_xml::XmlError),
}

impl From<base64::DecodeError> for ParseError {
    fn from(err: base64::DecodeError) -> Self {
        Self::EncodingFailure(EncodingError::Base64(err))
    }
}

impl From<std::string::FromUtf8Error> for ParseError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        Self::EncodingFailure(EncodingError::Utf8(err))
    }
}

impl From<eidas_xml::XmlError> for ParseError {
    fn from(err: eidas_xml::XmlError) -> Self {
        Self::EncodingFailure(EncodingError::Xml(err))
    }
}

/// Errors raised when mapping an `AttributeValue` element to a codec.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// The element carries no `xsi:type` attribute
    #[error("attribute value has no xsi:type")]
    MissingType,
    /// The `xsi:type` prefix is not bound in scope
    #[error("prefix '{prefix}' of xsi:type is not bound")]
    UnboundPrefix {
        /// The unbound prefix
        prefix: String,
    },
    /// The `xsi:type` resolves to a namespace other than the natural person one
    #[error("xsi:type '{type_name}' is in foreign namespace '{namespace}'")]
    ForeignNamespace {
        /// The type as written
        type_name: String,
        /// The namespace it resolved to
        namespace: String,
    },
    /// The type is in the right namespace but has no codec
    #[error("no codec registered for type '{type_name}'")]
    UnknownType {
        /// Local name of the type
        type_name: String,
    },
    /// The element is not a `saml:AttributeValue`
    #[error("element '{name}' is not a SAML attribute value")]
    NotAnAttributeValue {
        /// Qualified name of the element
        name: String,
    },
    /// The element is not a `saml:Attribute`
    #[error("element '{name}' is not a SAML attribute")]
    NotAnAttribute {
        /// Qualified name of the element
        name: String,
    },
    /// The attribute has no `Name`
    #[error("attribute has no Name")]
    MissingName,
    /// The codec rejected the value
    #[error("invalid attribute value: {0}")]
    Value(#[from] ParseError),
}
