//! Mapping declared `xsi:type` names to value codecs.

use std::fmt;

use eidas_xml::{Element, ElementRef, NamespaceBindings, split_qname};

use crate::address::StructuredAddress;
use crate::address_value::AddressAttributeValue;
use crate::birth_date::BirthDate;
use crate::codec::XmlValueCodec;
use crate::constants::{
    ATTRIBUTE_VALUE_LOCAL_NAME, EIDAS_NATURAL_PERSON_NS, EIDAS_NATURAL_PERSON_PREFIX,
    SAML_ASSERTION_NS, SAML_ASSERTION_PREFIX, XSI_NS, XSI_PREFIX, type_names,
};
use crate::country_code::CountryCode;
use crate::error::{ParseError, RegistryError};
use crate::gender::Gender;
use crate::person_identifier::PersonIdentifier;
use crate::place_of_birth::PlaceOfBirth;
use crate::transliterated_name::TransliteratedName;

/// The schema types a natural person attribute value can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeValueType {
    /// `PersonIdentifierType`
    PersonIdentifier,
    /// `CurrentFamilyNameType`
    CurrentFamilyName,
    /// `CurrentGivenNameType`
    CurrentGivenName,
    /// `BirthNameType`
    BirthName,
    /// `PlaceOfBirthType`
    PlaceOfBirth,
    /// `DateOfBirthType`
    DateOfBirth,
    /// `GenderType`
    Gender,
    /// `CurrentAddressType`
    CurrentAddress,
    /// `CurrentAddressStructuredType`
    CurrentAddressStructured,
    /// `CountryOfResidenceType`
    CountryOfResidence,
}

type Decoder = fn(&ElementRef<'_>) -> Result<AttributeValue, ParseError>;

struct Registration {
    type_name: &'static str,
    value_type: AttributeValueType,
    decode: Decoder,
}

static REGISTRY: [Registration; 10] = [
    Registration {
        type_name: type_names::PERSON_IDENTIFIER,
        value_type: AttributeValueType::PersonIdentifier,
        decode: |e| PersonIdentifier::unmarshal(e).map(AttributeValue::PersonIdentifier),
    },
    Registration {
        type_name: type_names::CURRENT_FAMILY_NAME,
        value_type: AttributeValueType::CurrentFamilyName,
        decode: |e| TransliteratedName::unmarshal(e).map(AttributeValue::CurrentFamilyName),
    },
    Registration {
        type_name: type_names::CURRENT_GIVEN_NAME,
        value_type: AttributeValueType::CurrentGivenName,
        decode: |e| TransliteratedName::unmarshal(e).map(AttributeValue::CurrentGivenName),
    },
    Registration {
        type_name: type_names::BIRTH_NAME,
        value_type: AttributeValueType::BirthName,
        decode: |e| TransliteratedName::unmarshal(e).map(AttributeValue::BirthName),
    },
    Registration {
        type_name: type_names::PLACE_OF_BIRTH,
        value_type: AttributeValueType::PlaceOfBirth,
        decode: |e| PlaceOfBirth::unmarshal(e).map(AttributeValue::PlaceOfBirth),
    },
    Registration {
        type_name: type_names::DATE_OF_BIRTH,
        value_type: AttributeValueType::DateOfBirth,
        decode: |e| BirthDate::unmarshal(e).map(AttributeValue::DateOfBirth),
    },
    Registration {
        type_name: type_names::GENDER,
        value_type: AttributeValueType::Gender,
        decode: |e| Gender::unmarshal(e).map(AttributeValue::Gender),
    },
    Registration {
        type_name: type_names::CURRENT_ADDRESS,
        value_type: AttributeValueType::CurrentAddress,
        decode: |e| AddressAttributeValue::unmarshal(e).map(AttributeValue::CurrentAddress),
    },
    Registration {
        type_name: type_names::CURRENT_ADDRESS_STRUCTURED,
        value_type: AttributeValueType::CurrentAddressStructured,
        decode: |e| StructuredAddress::unmarshal(e).map(AttributeValue::CurrentAddressStructured),
    },
    Registration {
        type_name: type_names::COUNTRY_OF_RESIDENCE,
        value_type: AttributeValueType::CountryOfResidence,
        decode: |e| CountryCode::unmarshal(e).map(AttributeValue::CountryOfResidence),
    },
];

impl AttributeValueType {
    /// Returns the `xsi:type` local name.
    #[must_use]
    pub fn type_name(self) -> &'static str {
        registration_for(self).type_name
    }

    /// Looks up a type by its `xsi:type` local name.
    #[must_use]
    pub fn from_type_name(name: &str) -> Option<Self> {
        REGISTRY
            .iter()
            .find(|r| r.type_name == name)
            .map(|r| r.value_type)
    }
}

impl fmt::Display for AttributeValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

fn registration_for(value_type: AttributeValueType) -> &'static Registration {
    // Every variant has exactly one entry; the table is indexed by variant order.
    &REGISTRY[value_type as usize]
}

/// A decoded attribute value of any supported type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `PersonIdentifierType`
    PersonIdentifier(PersonIdentifier),
    /// `CurrentFamilyNameType`
    CurrentFamilyName(TransliteratedName),
    /// `CurrentGivenNameType`
    CurrentGivenName(TransliteratedName),
    /// `BirthNameType`
    BirthName(TransliteratedName),
    /// `PlaceOfBirthType`
    PlaceOfBirth(PlaceOfBirth),
    /// `DateOfBirthType`
    DateOfBirth(BirthDate),
    /// `GenderType`
    Gender(Gender),
    /// `CurrentAddressType`, the Base64-wrapped form
    CurrentAddress(AddressAttributeValue),
    /// `CurrentAddressStructuredType`, fields as child elements
    CurrentAddressStructured(StructuredAddress),
    /// `CountryOfResidenceType`
    CountryOfResidence(CountryCode),
}

impl AttributeValue {
    /// Returns the schema type of this value.
    #[must_use]
    pub const fn value_type(&self) -> AttributeValueType {
        match self {
            Self::PersonIdentifier(_) => AttributeValueType::PersonIdentifier,
            Self::CurrentFamilyName(_) => AttributeValueType::CurrentFamilyName,
            Self::CurrentGivenName(_) => AttributeValueType::CurrentGivenName,
            Self::BirthName(_) => AttributeValueType::BirthName,
            Self::PlaceOfBirth(_) => AttributeValueType::PlaceOfBirth,
            Self::DateOfBirth(_) => AttributeValueType::DateOfBirth,
            Self::Gender(_) => AttributeValueType::Gender,
            Self::CurrentAddress(_) => AttributeValueType::CurrentAddress,
            Self::CurrentAddressStructured(_) => AttributeValueType::CurrentAddressStructured,
            Self::CountryOfResidence(_) => AttributeValueType::CountryOfResidence,
        }
    }

    fn marshal(&self, target: &mut Element, scope: &NamespaceBindings) -> Result<(), ParseError> {
        match self {
            Self::PersonIdentifier(v) => v.marshal(target, scope),
            Self::CurrentFamilyName(v) | Self::CurrentGivenName(v) | Self::BirthName(v) => {
                v.marshal(target, scope)
            }
            Self::PlaceOfBirth(v) => v.marshal(target, scope),
            Self::DateOfBirth(v) => v.marshal(target, scope),
            Self::Gender(v) => v.marshal(target, scope),
            Self::CurrentAddress(v) => v.marshal(target, scope),
            Self::CurrentAddressStructured(v) => v.marshal(target, scope),
            Self::CountryOfResidence(v) => v.marshal(target, scope),
        }
    }
}

/// Returns the prefix bound to `uri` in `scope`. If there is none,
/// `canonical` is declared on `target` and added to `scope`.
pub(crate) fn ensure_prefix(
    target: &mut Element,
    scope: &mut NamespaceBindings,
    uri: &str,
    canonical: &str,
) -> String {
    if let Some(prefix) = scope.prefix_for(uri) {
        return prefix.to_string();
    }
    target.declare_namespace(canonical, uri);
    scope.bind(canonical, uri);
    canonical.to_string()
}

/// Decodes a `saml:AttributeValue` element by its declared `xsi:type`.
///
/// The type's prefix is resolved in the scope of the element and must map
/// to the natural person namespace.
///
/// # Errors
///
/// Returns `RegistryError` if:
/// - The element is not an `AttributeValue` in the SAML assertion namespace
/// - It has no `xsi:type`, or the type's prefix is unbound
/// - The type is in another namespace or has no registered codec
/// - The codec rejects the content (`RegistryError::Value`)
///
/// # Examples
///
/// ```
/// use eidas_attributes::{decode_attribute_value, AttributeValue};
/// use eidas_xml::{parse_str, ElementRef};
///
/// let doc = parse_str(
///     r#"<saml:AttributeValue
///          xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
///          xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
///          xmlns:eidas-natural="http://eidas.europa.eu/attributes/naturalperson"
///          xsi:type="eidas-natural:DateOfBirthType">1965-01-01</saml:AttributeValue>"#,
/// ).unwrap();
///
/// let value = decode_attribute_value(&ElementRef::root(doc.root())).unwrap();
/// let AttributeValue::DateOfBirth(date) = value else { panic!() };
/// assert_eq!(date.year(), 1965);
/// ```
pub fn decode_attribute_value(element: &ElementRef<'_>) -> Result<AttributeValue, RegistryError> {
    if element.local_name() != ATTRIBUTE_VALUE_LOCAL_NAME
        || element.namespace_uri() != Some(SAML_ASSERTION_NS)
    {
        return Err(RegistryError::NotAnAttributeValue {
            name: element.element().name().to_string(),
        });
    }

    let declared = element
        .attribute_ns(Some(XSI_NS), "type")
        .ok_or(RegistryError::MissingType)?
        .trim();
    let (prefix, local) = split_qname(declared);
    let namespace = element
        .lookup_namespace(prefix.unwrap_or(""))
        .ok_or_else(|| RegistryError::UnboundPrefix {
            prefix: prefix.unwrap_or("").to_string(),
        })?;
    if namespace != EIDAS_NATURAL_PERSON_NS {
        tracing::warn!(xsi_type = declared, namespace, "attribute value type in foreign namespace");
        return Err(RegistryError::ForeignNamespace {
            type_name: declared.to_string(),
            namespace: namespace.to_string(),
        });
    }

    let registration = REGISTRY
        .iter()
        .find(|r| r.type_name == local)
        .ok_or_else(|| {
            tracing::warn!(xsi_type = declared, "no codec for attribute value type");
            RegistryError::UnknownType {
                type_name: local.to_string(),
            }
        })?;
    Ok((registration.decode)(element)?)
}

/// Encodes a value as a new `saml:AttributeValue` element.
///
/// `scope` holds the bindings in effect where the element will be placed.
/// The element declares the SAML, XSI and natural person namespaces unless
/// `scope` already binds them, and uses whichever prefix is in scope.
///
/// # Errors
///
/// Returns `RegistryError::Value` if the codec cannot represent the value.
///
/// # Examples
///
/// ```
/// use eidas_attributes::{encode_attribute_value, AttributeValue, CountryCode};
/// use eidas_xml::NamespaceBindings;
///
/// let value = AttributeValue::CountryOfResidence(CountryCode::parse("se").unwrap());
/// let element = encode_attribute_value(&value, &NamespaceBindings::new()).unwrap();
///
/// assert_eq!(element.name(), "saml:AttributeValue");
/// assert_eq!(element.attribute("xsi:type"), Some("eidas-natural:CountryOfResidenceType"));
/// assert_eq!(element.text(), "SE");
/// ```
pub fn encode_attribute_value(
    value: &AttributeValue,
    scope: &NamespaceBindings,
) -> Result<Element, RegistryError> {
    let mut element_scope = scope.clone();
    let saml = scope
        .prefix_for(SAML_ASSERTION_NS)
        .unwrap_or(SAML_ASSERTION_PREFIX);
    let mut element = Element::new(format!("{saml}:{ATTRIBUTE_VALUE_LOCAL_NAME}"));
    ensure_prefix(&mut element, &mut element_scope, SAML_ASSERTION_NS, SAML_ASSERTION_PREFIX);
    let xsi = ensure_prefix(&mut element, &mut element_scope, XSI_NS, XSI_PREFIX);
    let np = ensure_prefix(
        &mut element,
        &mut element_scope,
        EIDAS_NATURAL_PERSON_NS,
        EIDAS_NATURAL_PERSON_PREFIX,
    );
    element.set_attribute(
        format!("{xsi}:type"),
        format!("{np}:{}", value.value_type().type_name()),
    );

    value.marshal(&mut element, &element_scope)?;
    Ok(element)
}
