//! Namespaces, schema type names and attribute names for eIDAS attributes.

/// Namespace of the eIDAS natural person attribute value types and of the
/// structured address field elements.
pub const EIDAS_NATURAL_PERSON_NS: &str = "http://eidas.europa.eu/attributes/naturalperson";

/// Canonical prefix for [`EIDAS_NATURAL_PERSON_NS`] used in `xsi:type` values.
pub const EIDAS_NATURAL_PERSON_PREFIX: &str = "eidas-natural";

/// Prefix that producers commonly use for address field elements. It is
/// bound to [`EIDAS_NATURAL_PERSON_NS`] when decoding.
pub const EIDAS_PREFIX: &str = "eidas";

/// SAML 2.0 assertion namespace.
pub const SAML_ASSERTION_NS: &str = "urn:oasis:names:tc:SAML:2.0:assertion";

/// Canonical prefix for [`SAML_ASSERTION_NS`].
pub const SAML_ASSERTION_PREFIX: &str = "saml";

/// XML Schema instance namespace (carrier of `xsi:type`).
pub const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";

/// Canonical prefix for [`XSI_NS`].
pub const XSI_PREFIX: &str = "xsi";

/// Local name of the `AttributeValue` element.
pub const ATTRIBUTE_VALUE_LOCAL_NAME: &str = "AttributeValue";

/// Local name of the `Attribute` element.
pub const ATTRIBUTE_LOCAL_NAME: &str = "Attribute";

/// Name of the attribute carrying the transliteration flag.
pub const LATIN_SCRIPT_ATTRIBUTE: &str = "LatinScript";

/// Line width of wrapped Base64 in address attribute values.
pub const BASE64_LINE_WIDTH: usize = 76;

/// Name format for attributes named by URI.
pub const URI_NAME_FORMAT: &str = "urn:oasis:names:tc:SAML:2.0:attrname-format:uri";

/// `xsi:type` local names of the supported value types.
pub mod type_names {
    /// `PersonIdentifierType`
    pub const PERSON_IDENTIFIER: &str = "PersonIdentifierType";
    /// `CurrentFamilyNameType`
    pub const CURRENT_FAMILY_NAME: &str = "CurrentFamilyNameType";
    /// `CurrentGivenNameType`
    pub const CURRENT_GIVEN_NAME: &str = "CurrentGivenNameType";
    /// `BirthNameType`
    pub const BIRTH_NAME: &str = "BirthNameType";
    /// `PlaceOfBirthType`
    pub const PLACE_OF_BIRTH: &str = "PlaceOfBirthType";
    /// `DateOfBirthType`
    pub const DATE_OF_BIRTH: &str = "DateOfBirthType";
    /// `GenderType`
    pub const GENDER: &str = "GenderType";
    /// `CurrentAddressType` (Base64-wrapped address)
    pub const CURRENT_ADDRESS: &str = "CurrentAddressType";
    /// `CurrentAddressStructuredType` (address fields as child elements)
    pub const CURRENT_ADDRESS_STRUCTURED: &str = "CurrentAddressStructuredType";
    /// `CountryOfResidenceType`
    pub const COUNTRY_OF_RESIDENCE: &str = "CountryOfResidenceType";
}

/// Attribute names (URIs) of the natural person profiles.
pub mod attribute_names {
    /// Level of assurance, carried as a requested authentication context.
    pub const LEVEL_OF_ASSURANCE: &str = "http://eidas.europa.eu/LoA";

    /// Name prefix of natural person attributes.
    pub const NATURAL_PERSON_PREFIX: &str = "http://eidas.europa.eu/attributes/naturalperson/";
    /// Name prefix of representative natural person attributes.
    pub const REPRESENTATIVE_NATURAL_PERSON_PREFIX: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/";

    /// `PersonIdentifier`
    pub const PERSON_IDENTIFIER: &str =
        "http://eidas.europa.eu/attributes/naturalperson/PersonIdentifier";
    /// `CurrentFamilyName`
    pub const CURRENT_FAMILY_NAME: &str =
        "http://eidas.europa.eu/attributes/naturalperson/CurrentFamilyName";
    /// `CurrentGivenName`
    pub const CURRENT_GIVEN_NAME: &str =
        "http://eidas.europa.eu/attributes/naturalperson/CurrentGivenName";
    /// `DateOfBirth`
    pub const DATE_OF_BIRTH: &str = "http://eidas.europa.eu/attributes/naturalperson/DateOfBirth";
    /// `Gender`
    pub const GENDER: &str = "http://eidas.europa.eu/attributes/naturalperson/Gender";
    /// `CurrentAddress`
    pub const CURRENT_ADDRESS: &str =
        "http://eidas.europa.eu/attributes/naturalperson/CurrentAddress";
    /// `BirthName`
    pub const BIRTH_NAME: &str = "http://eidas.europa.eu/attributes/naturalperson/BirthName";
    /// `PlaceOfBirth`
    pub const PLACE_OF_BIRTH: &str = "http://eidas.europa.eu/attributes/naturalperson/PlaceOfBirth";
    /// `CountryOfResidence`
    pub const COUNTRY_OF_RESIDENCE: &str =
        "http://eidas.europa.eu/attributes/naturalperson/CountryOfResidence";
    /// `Nationality`
    pub const NATIONALITY: &str = "http://eidas.europa.eu/attributes/naturalperson/Nationality";
    /// `CountryOfBirth`
    pub const COUNTRY_OF_BIRTH: &str =
        "http://eidas.europa.eu/attributes/naturalperson/CountryOfBirth";
    /// `TownOfBirth`
    pub const TOWN_OF_BIRTH: &str = "http://eidas.europa.eu/attributes/naturalperson/TownOfBirth";
    /// `PhoneNumber`
    pub const PHONE_NUMBER: &str = "http://eidas.europa.eu/attributes/naturalperson/PhoneNumber";
    /// `EmailAddress`
    pub const EMAIL_ADDRESS: &str =
        "http://eidas.europa.eu/attributes/naturalperson/EmailAddress";

    /// Representative `PersonIdentifier`
    pub const REPRESENTATIVE_PERSON_IDENTIFIER: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/PersonIdentifier";
    /// Representative `CurrentFamilyName`
    pub const REPRESENTATIVE_CURRENT_FAMILY_NAME: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/CurrentFamilyName";
    /// Representative `CurrentGivenName`
    pub const REPRESENTATIVE_CURRENT_GIVEN_NAME: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/CurrentGivenName";
    /// Representative `DateOfBirth`
    pub const REPRESENTATIVE_DATE_OF_BIRTH: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/DateOfBirth";
    /// Representative `Gender`
    pub const REPRESENTATIVE_GENDER: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/Gender";
    /// Representative `CurrentAddress`
    pub const REPRESENTATIVE_CURRENT_ADDRESS: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/CurrentAddress";
    /// Representative `BirthName`
    pub const REPRESENTATIVE_BIRTH_NAME: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/BirthName";
    /// Representative `PlaceOfBirth`
    pub const REPRESENTATIVE_PLACE_OF_BIRTH: &str =
        "http://eidas.europa.eu/attributes/naturalperson/representative/PlaceOfBirth";
}
