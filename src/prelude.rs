//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use eidas_attributes::prelude::*;
//!
//! let code = CountryCode::parse("se").unwrap();
//! assert_eq!(code.to_canonical_string().as_deref(), Some("SE"));
//! ```
//!
//! Namespace and attribute name constants stay in
//! [`constants`](crate::constants).

pub use crate::{
    // Value types
    AddressAttributeValue, AddressField, BirthDate, CountryCode, Gender, KnownGender,
    PersonIdentifier, PlaceOfBirth, StructuredAddress, TransliteratedName,
    // Contracts
    CanonicalString, XmlValueCodec,
    // Registry and attributes
    AttributeDefinition, AttributeValue, AttributeValueType, EidasAttribute,
    decode_attribute_value, encode_attribute_value,
    // Errors
    EncodingError, ParseError, RegistryError,
};
