//! Typed codecs for eIDAS natural person SAML attribute values.
//!
//! Each attribute value type of the eIDAS SAML attribute profile is a
//! validated Rust value that can be read from, and written back to, the
//! `saml:AttributeValue` element carrying it.
//!
//! # Overview
//!
//! Every value type implements two contracts:
//!
//! - [`CanonicalString`]: the string each type commits to for round-tripping
//!   (`SE`, `1969-11-29`, `ES/AT/02635542Y`)
//! - [`XmlValueCodec`]: reading from and writing to an element of an
//!   [`eidas_xml`] tree
//!
//! The [`registry`](decode_attribute_value) picks the codec from the
//! element's declared `xsi:type`.
//!
//! # Quick Start
//!
//! ```rust
//! use eidas_attributes::{decode_attribute_value, AttributeValue};
//! use eidas_xml::{parse_str, ElementRef};
//!
//! let doc = parse_str(
//!     r#"<saml:AttributeValue
//!          xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
//!          xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
//!          xmlns:eidas="http://eidas.europa.eu/attributes/naturalperson"
//!          xsi:type="eidas:PersonIdentifierType">ES/AT/02635542Y</saml:AttributeValue>"#,
//! ).unwrap();
//!
//! let value = decode_attribute_value(&ElementRef::root(doc.root())).unwrap();
//! let AttributeValue::PersonIdentifier(id) = value else { panic!() };
//! assert_eq!(id.origin_country(), Some("ES"));
//! assert_eq!(id.identifier(), Some("02635542Y"));
//! ```
//!
//! # Addresses
//!
//! A current address travels in one of two shapes. As
//! `CurrentAddressStructuredType` each field is a child element
//! ([`StructuredAddress`]). As `CurrentAddressType` the same field elements
//! are serialized, Base64-encoded and sent as the element's text
//! ([`AddressAttributeValue`]):
//!
//! ```rust
//! use eidas_attributes::{
//!     AddressAttributeValue, AddressField, StructuredAddress, XmlValueCodec,
//! };
//! use eidas_xml::{Element, ElementRef, NamespaceBindings};
//!
//! let address = StructuredAddress::new()
//!     .with(AddressField::Thoroughfare, "Korta gatan")
//!     .with(AddressField::PostCode, "19174");
//!
//! let mut element = Element::new("saml:AttributeValue");
//! AddressAttributeValue::new(address.clone())
//!     .marshal(&mut element, &NamespaceBindings::new())
//!     .unwrap();
//!
//! let decoded = AddressAttributeValue::unmarshal(&ElementRef::root(&element)).unwrap();
//! assert_eq!(decoded.address(), &address);
//! ```
//!
//! # Value Types
//!
//! | Schema type | Rust type |
//! |-------------|-----------|
//! | `PersonIdentifierType` | [`PersonIdentifier`] |
//! | `CurrentFamilyNameType`, `CurrentGivenNameType`, `BirthNameType` | [`TransliteratedName`] |
//! | `PlaceOfBirthType` | [`PlaceOfBirth`] |
//! | `DateOfBirthType` | [`BirthDate`] |
//! | `GenderType` | [`Gender`] |
//! | `CurrentAddressType` | [`AddressAttributeValue`] |
//! | `CurrentAddressStructuredType` | [`StructuredAddress`] |
//! | `CountryOfResidenceType` | [`CountryCode`] |

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod address;
mod address_value;
mod attribute;
mod birth_date;
mod codec;
pub mod constants;
mod country_code;
mod error;
mod gender;
#[cfg(kani)]
mod kani_impls;
mod person_identifier;
mod place_of_birth;
pub mod prelude;
mod registry;
mod transliterated_name;

pub use address::{AddressField, StructuredAddress};
pub use address_value::AddressAttributeValue;
pub use attribute::{AttributeDefinition, EidasAttribute, NATURAL_PERSON_ATTRIBUTES};
pub use birth_date::BirthDate;
pub use codec::{CanonicalString, XmlValueCodec, parse_optional};
pub use constants::{
    BASE64_LINE_WIDTH, EIDAS_NATURAL_PERSON_NS, EIDAS_NATURAL_PERSON_PREFIX, EIDAS_PREFIX,
    SAML_ASSERTION_NS, URI_NAME_FORMAT, XSI_NS,
};
pub use country_code::CountryCode;
pub use error::{EncodingError, ParseError, RegistryError};
pub use gender::{Gender, KnownGender};
pub use person_identifier::PersonIdentifier;
pub use place_of_birth::PlaceOfBirth;
pub use registry::{
    AttributeValue, AttributeValueType, decode_attribute_value, encode_attribute_value,
};
pub use transliterated_name::TransliteratedName;

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn public_types_are_send_and_sync() {
        assert_send_sync::<CountryCode>();
        assert_send_sync::<BirthDate>();
        assert_send_sync::<Gender>();
        assert_send_sync::<TransliteratedName>();
        assert_send_sync::<PersonIdentifier>();
        assert_send_sync::<PlaceOfBirth>();
        assert_send_sync::<StructuredAddress>();
        assert_send_sync::<AddressAttributeValue>();
        assert_send_sync::<AttributeValue>();
        assert_send_sync::<EidasAttribute>();
        assert_send_sync::<ParseError>();
        assert_send_sync::<RegistryError>();
    }
}
