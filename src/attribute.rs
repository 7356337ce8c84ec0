//! SAML attributes holding natural person values.

use eidas_xml::{Element, ElementRef, NamespaceBindings};

use crate::constants::{
    ATTRIBUTE_LOCAL_NAME, ATTRIBUTE_VALUE_LOCAL_NAME, SAML_ASSERTION_NS, SAML_ASSERTION_PREFIX,
    URI_NAME_FORMAT, attribute_names,
};
use crate::error::RegistryError;
use crate::registry::{
    AttributeValue, AttributeValueType, decode_attribute_value, encode_attribute_value,
    ensure_prefix,
};

/// A known natural person attribute: its name, friendly name and the type
/// its values carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeDefinition {
    name: &'static str,
    friendly_name: &'static str,
    value_type: AttributeValueType,
}

const fn definition(
    name: &'static str,
    friendly_name: &'static str,
    value_type: AttributeValueType,
) -> AttributeDefinition {
    AttributeDefinition {
        name,
        friendly_name,
        value_type,
    }
}

/// The natural person attributes, followed by their representative variants.
pub static NATURAL_PERSON_ATTRIBUTES: [AttributeDefinition; 17] = [
    definition(
        attribute_names::PERSON_IDENTIFIER,
        "PersonIdentifier",
        AttributeValueType::PersonIdentifier,
    ),
    definition(
        attribute_names::CURRENT_FAMILY_NAME,
        "FamilyName",
        AttributeValueType::CurrentFamilyName,
    ),
    definition(
        attribute_names::CURRENT_GIVEN_NAME,
        "FirstName",
        AttributeValueType::CurrentGivenName,
    ),
    definition(
        attribute_names::DATE_OF_BIRTH,
        "DateOfBirth",
        AttributeValueType::DateOfBirth,
    ),
    definition(attribute_names::GENDER, "Gender", AttributeValueType::Gender),
    definition(
        attribute_names::CURRENT_ADDRESS,
        "CurrentAddress",
        AttributeValueType::CurrentAddress,
    ),
    definition(
        attribute_names::BIRTH_NAME,
        "BirthName",
        AttributeValueType::BirthName,
    ),
    definition(
        attribute_names::PLACE_OF_BIRTH,
        "PlaceOfBirth",
        AttributeValueType::PlaceOfBirth,
    ),
    definition(
        attribute_names::COUNTRY_OF_RESIDENCE,
        "CountryOfResidence",
        AttributeValueType::CountryOfResidence,
    ),
    definition(
        attribute_names::REPRESENTATIVE_PERSON_IDENTIFIER,
        "RepresentativePersonIdentifier",
        AttributeValueType::PersonIdentifier,
    ),
    definition(
        attribute_names::REPRESENTATIVE_CURRENT_FAMILY_NAME,
        "RepresentativeFamilyName",
        AttributeValueType::CurrentFamilyName,
    ),
    definition(
        attribute_names::REPRESENTATIVE_CURRENT_GIVEN_NAME,
        "RepresentativeFirstName",
        AttributeValueType::CurrentGivenName,
    ),
    definition(
        attribute_names::REPRESENTATIVE_DATE_OF_BIRTH,
        "RepresentativeDateOfBirth",
        AttributeValueType::DateOfBirth,
    ),
    definition(
        attribute_names::REPRESENTATIVE_GENDER,
        "RepresentativeGender",
        AttributeValueType::Gender,
    ),
    definition(
        attribute_names::REPRESENTATIVE_CURRENT_ADDRESS,
        "RepresentativeCurrentAddress",
        AttributeValueType::CurrentAddress,
    ),
    definition(
        attribute_names::REPRESENTATIVE_BIRTH_NAME,
        "RepresentativeBirthName",
        AttributeValueType::BirthName,
    ),
    definition(
        attribute_names::REPRESENTATIVE_PLACE_OF_BIRTH,
        "RepresentativePlaceOfBirth",
        AttributeValueType::PlaceOfBirth,
    ),
];

impl AttributeDefinition {
    /// Finds a definition by attribute name (URI).
    #[must_use]
    pub fn by_name(name: &str) -> Option<&'static Self> {
        NATURAL_PERSON_ATTRIBUTES.iter().find(|d| d.name == name)
    }

    /// Finds a definition by friendly name.
    #[must_use]
    pub fn by_friendly_name(friendly_name: &str) -> Option<&'static Self> {
        NATURAL_PERSON_ATTRIBUTES
            .iter()
            .find(|d| d.friendly_name == friendly_name)
    }

    /// Returns the attribute name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the friendly name.
    #[must_use]
    pub const fn friendly_name(&self) -> &'static str {
        self.friendly_name
    }

    /// Returns the type of the attribute's values.
    #[must_use]
    pub const fn value_type(&self) -> AttributeValueType {
        self.value_type
    }

    /// Returns true for attributes describing a legal representative.
    #[must_use]
    pub fn is_representative(&self) -> bool {
        self.name
            .starts_with(attribute_names::REPRESENTATIVE_NATURAL_PERSON_PREFIX)
    }
}

/// A `saml:Attribute` with its typed values.
///
/// # Examples
///
/// ```
/// use eidas_attributes::{AttributeDefinition, AttributeValue, EidasAttribute, Gender};
/// use eidas_xml::NamespaceBindings;
///
/// let definition = AttributeDefinition::by_friendly_name("Gender").unwrap();
/// let attribute = EidasAttribute::from_definition(definition)
///     .with_value(AttributeValue::Gender(Gender::parse("Female").unwrap()));
///
/// let element = attribute.to_element(&NamespaceBindings::new()).unwrap();
/// assert_eq!(element.name(), "saml:Attribute");
/// assert_eq!(element.attribute("FriendlyName"), Some("Gender"));
/// assert_eq!(element.child_elements().count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EidasAttribute {
    name: String,
    friendly_name: Option<String>,
    name_format: Option<String>,
    values: Vec<AttributeValue>,
}

impl EidasAttribute {
    /// Creates an attribute with a name and nothing else.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            friendly_name: None,
            name_format: None,
            values: Vec::new(),
        }
    }

    /// Creates an empty attribute from a definition, with the URI name format.
    #[must_use]
    pub fn from_definition(definition: &AttributeDefinition) -> Self {
        Self {
            name: definition.name.to_string(),
            friendly_name: Some(definition.friendly_name.to_string()),
            name_format: Some(URI_NAME_FORMAT.to_string()),
            values: Vec::new(),
        }
    }

    /// Sets the friendly name.
    #[must_use]
    pub fn with_friendly_name(mut self, friendly_name: impl Into<String>) -> Self {
        self.friendly_name = Some(friendly_name.into());
        self
    }

    /// Sets the name format.
    #[must_use]
    pub fn with_name_format(mut self, name_format: impl Into<String>) -> Self {
        self.name_format = Some(name_format.into());
        self
    }

    /// Appends a value.
    #[must_use]
    pub fn with_value(mut self, value: AttributeValue) -> Self {
        self.values.push(value);
        self
    }

    /// Appends a value.
    pub fn push_value(&mut self, value: AttributeValue) {
        self.values.push(value);
    }

    /// Returns the attribute name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the friendly name.
    #[must_use]
    pub fn friendly_name(&self) -> Option<&str> {
        self.friendly_name.as_deref()
    }

    /// Returns the name format.
    #[must_use]
    pub fn name_format(&self) -> Option<&str> {
        self.name_format.as_deref()
    }

    /// Returns the values in document order.
    #[must_use]
    pub fn values(&self) -> &[AttributeValue] {
        &self.values
    }

    /// Returns the definition matching the attribute name, if it is a known one.
    #[must_use]
    pub fn definition(&self) -> Option<&'static AttributeDefinition> {
        AttributeDefinition::by_name(&self.name)
    }

    /// Decodes a `saml:Attribute` element and all of its values.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError` if the element is not a SAML attribute, has
    /// no `Name`, or any value fails to decode.
    pub fn from_element(element: &ElementRef<'_>) -> Result<Self, RegistryError> {
        if element.local_name() != ATTRIBUTE_LOCAL_NAME
            || element.namespace_uri() != Some(SAML_ASSERTION_NS)
        {
            return Err(RegistryError::NotAnAttribute {
                name: element.element().name().to_string(),
            });
        }
        let xml = element.element();
        let name = xml.attribute("Name").ok_or(RegistryError::MissingName)?;
        let mut attribute = Self::new(name);
        attribute.friendly_name = xml.attribute("FriendlyName").map(str::to_string);
        attribute.name_format = xml.attribute("NameFormat").map(str::to_string);

        let expected = attribute.definition().map(AttributeDefinition::value_type);
        for child in element.child_elements() {
            if child.local_name() != ATTRIBUTE_VALUE_LOCAL_NAME {
                tracing::debug!(
                    element = child.element().name(),
                    "skipping non-value child of attribute"
                );
                continue;
            }
            let value = decode_attribute_value(&child)?;
            if let Some(expected) = expected.filter(|t| *t != value.value_type()) {
                tracing::warn!(
                    attribute = name,
                    expected = %expected,
                    found = %value.value_type(),
                    "attribute value type differs from the attribute definition"
                );
            }
            attribute.values.push(value);
        }
        Ok(attribute)
    }

    /// Encodes the attribute as a `saml:Attribute` element.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::Value` if any value cannot be encoded.
    pub fn to_element(&self, scope: &NamespaceBindings) -> Result<Element, RegistryError> {
        let mut element_scope = scope.clone();
        let saml = scope
            .prefix_for(SAML_ASSERTION_NS)
            .unwrap_or(SAML_ASSERTION_PREFIX);
        let mut element = Element::new(format!("{saml}:{ATTRIBUTE_LOCAL_NAME}"));
        ensure_prefix(&mut element, &mut element_scope, SAML_ASSERTION_NS, SAML_ASSERTION_PREFIX);

        element.set_attribute("Name", self.name.as_str());
        if let Some(friendly_name) = &self.friendly_name {
            element.set_attribute("FriendlyName", friendly_name.as_str());
        }
        if let Some(name_format) = &self.name_format {
            element.set_attribute("NameFormat", name_format.as_str());
        }
        for value in &self.values {
            element.push_element(encode_attribute_value(value, &element_scope)?);
        }
        Ok(element)
    }
}

#[cfg(test)]
mod tests {
    use eidas_xml::parse_str;

    use super::*;
    use crate::transliterated_name::TransliteratedName;

    const TRANSLITERATION_EXAMPLE: &str = r#"<saml:Attribute
        xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xmlns:eidas-natural="http://eidas.europa.eu/attributes/naturalperson"
        FriendlyName="FamilyName"
        Name="http://eidas.europa.eu/attributes/naturalperson/CurrentFamilyName"
        NameFormat="urn:oasis:names:tc:SAML:2.0:attrname-format:uri">
      <saml:AttributeValue xsi:type="eidas-natural:CurrentFamilyNameType">Onasis</saml:AttributeValue>
      <saml:AttributeValue xsi:type="eidas-natural:CurrentFamilyNameType" LatinScript="false">Ωνασης</saml:AttributeValue>
    </saml:Attribute>"#;

    #[test]
    fn definitions_lookup() {
        let def = AttributeDefinition::by_friendly_name("FirstName").unwrap();
        assert_eq!(def.name(), attribute_names::CURRENT_GIVEN_NAME);
        assert_eq!(def.value_type(), AttributeValueType::CurrentGivenName);
        assert!(!def.is_representative());

        let rep = AttributeDefinition::by_name(attribute_names::REPRESENTATIVE_GENDER).unwrap();
        assert_eq!(rep.friendly_name(), "RepresentativeGender");
        assert!(rep.is_representative());

        assert!(AttributeDefinition::by_name("urn:unknown").is_none());
    }

    #[test]
    fn friendly_names_unique() {
        for (i, a) in NATURAL_PERSON_ATTRIBUTES.iter().enumerate() {
            for b in &NATURAL_PERSON_ATTRIBUTES[i + 1..] {
                assert_ne!(a.friendly_name(), b.friendly_name());
                assert_ne!(a.name(), b.name());
            }
        }
    }

    #[test]
    fn decodes_transliterated_family_name() {
        let doc = parse_str(TRANSLITERATION_EXAMPLE).unwrap();
        let attribute = EidasAttribute::from_element(&ElementRef::root(doc.root())).unwrap();

        assert_eq!(attribute.name(), attribute_names::CURRENT_FAMILY_NAME);
        assert_eq!(attribute.friendly_name(), Some("FamilyName"));
        assert_eq!(attribute.name_format(), Some(URI_NAME_FORMAT));
        assert_eq!(attribute.values().len(), 2);

        let AttributeValue::CurrentFamilyName(first) = &attribute.values()[0] else {
            panic!("expected a family name");
        };
        assert_eq!(first.value(), "Onasis");
        assert!(first.latin_script());
        assert_eq!(first.explicit_latin_script(), None);

        let AttributeValue::CurrentFamilyName(second) = &attribute.values()[1] else {
            panic!("expected a family name");
        };
        assert_eq!(second.value(), "Ωνασης");
        assert!(!second.latin_script());
    }

    #[test]
    fn element_round_trip() {
        let attribute = EidasAttribute::from_definition(
            AttributeDefinition::by_name(attribute_names::CURRENT_FAMILY_NAME).unwrap(),
        )
        .with_value(AttributeValue::CurrentFamilyName(
            TransliteratedName::parse("Onasis").unwrap(),
        ))
        .with_value(AttributeValue::CurrentFamilyName(
            TransliteratedName::parse("Ωνασης")
                .unwrap()
                .with_latin_script(false),
        ));

        let element = attribute.to_element(&NamespaceBindings::new()).unwrap();
        assert_eq!(element.attribute("xmlns:saml"), Some(SAML_ASSERTION_NS));
        for value in element.child_elements() {
            assert_eq!(value.attribute("xmlns:saml"), None);
        }

        let decoded = EidasAttribute::from_element(&ElementRef::root(&element)).unwrap();
        assert_eq!(decoded, attribute);
    }

    #[test]
    fn mismatched_value_type_still_decoded() {
        let attribute = EidasAttribute::new(attribute_names::GENDER)
            .with_value(AttributeValue::CurrentFamilyName(
                TransliteratedName::parse("Onasis").unwrap(),
            ));
        let element = attribute.to_element(&NamespaceBindings::new()).unwrap();
        let decoded = EidasAttribute::from_element(&ElementRef::root(&element)).unwrap();
        assert_eq!(decoded.values().len(), 1);
    }

    #[test]
    fn missing_name_rejected() {
        let doc = parse_str(
            r#"<saml:Attribute xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"/>"#,
        )
        .unwrap();
        assert!(matches!(
            EidasAttribute::from_element(&ElementRef::root(doc.root())),
            Err(RegistryError::MissingName)
        ));
    }

    #[test]
    fn wrong_element_rejected() {
        let doc = parse_str("<Attribute Name=\"x\"/>").unwrap();
        assert!(matches!(
            EidasAttribute::from_element(&ElementRef::root(doc.root())),
            Err(RegistryError::NotAnAttribute { .. })
        ));
    }

    #[test]
    fn bad_value_fails_attribute() {
        let doc = parse_str(
            r#"<saml:Attribute xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
                 xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
                 xmlns:np="http://eidas.europa.eu/attributes/naturalperson"
                 Name="http://eidas.europa.eu/attributes/naturalperson/Gender">
               <saml:AttributeValue xsi:type="np:GenderType"> </saml:AttributeValue>
             </saml:Attribute>"#,
        )
        .unwrap();
        let result = EidasAttribute::from_element(&ElementRef::root(doc.root()));
        assert!(matches!(result, Err(RegistryError::Value(_))));
    }
}
