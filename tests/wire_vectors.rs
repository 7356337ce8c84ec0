//! Attribute values as they appear in real eIDAS assertions.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use eidas_attributes::constants::attribute_names;
use eidas_attributes::{
    AddressAttributeValue, AddressField, AttributeValue, AttributeValueType,
    EIDAS_NATURAL_PERSON_NS, EidasAttribute, ParseError, RegistryError, StructuredAddress,
    XmlValueCodec, decode_attribute_value, encode_attribute_value,
};
use eidas_xml::{Element, ElementRef, NamespaceBindings, parse_str, to_xml_string};

/// Current address from a UK test node, with the `eidas` prefix declared.
const LONDON_ADDRESS: &str = r#"<saml:Attribute
    xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
    xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
    FriendlyName="CurrentAddress"
    Name="http://eidas.europa.eu/attributes/naturalperson/CurrentAddress"
    NameFormat="urn:oasis:names:tc:SAML:2.0:attrname-format:uri">
  <saml:AttributeValue xmlns:eidas="http://eidas.europa.eu/attributes/naturalperson"
      xsi:type="eidas:CurrentAddressType">PGVpZGFzOkxvY2F0b3JEZXNpZ25hdG9yPjIyPC9laWRhczpMb2NhdG9yRGVzaWduYX
Rvcj48ZWlkYXM6VGhvcm91Z2hmYXJlPkFyY2FjaWEgQXZlbnVlPC9laWRhczpUaG9y
b3VnaGZhcmU+DQo8ZWlkYXM6UG9zdE5hbWU+TG9uZG9uPC9laWRhczpQb3N0TmFtZT
4NCjxlaWRhczpQb3N0Q29kZT5TVzFBIDFBQTwvZWlkYXM6UG9zdENvZGU+</saml:AttributeValue>
</saml:Attribute>"#;

/// Current address from a Czech test node. The payload uses the `eidas`
/// prefix, which the assertion never declares.
const ARNOLTICE_ADDRESS: &str = r#"<saml:Attribute
    xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
    xmlns:a="http://schemas.xmlsoap.org/ws/2009/09/identity/claims"
    a:OriginalIssuer="urn:microsoft:cgg2010:fpsts"
    FriendlyName="CurrentAddress"
    Name="http://eidas.europa.eu/attributes/naturalperson/CurrentAddress"
    NameFormat="urn:oasis:names:tc:SAML:2.0:attrname-format:uri">
  <saml:AttributeValue xmlns:b="http://www.w3.org/2001/XMLSchema-instance"
      xmlns:tn="http://eidas.europa.eu/attributes/naturalperson"
      b:type="tn:CurrentAddressType">PGVpZGFzOkxvY2F0b3JEZXNpZ25hdG9yPjEzMTwvZWlkYXM6TG9jYXRvckRlc2lnbmF0b3I+DQo8ZWlkYXM6VGhvcm91Z2hmYXJlPjwvZWlkYXM6VGhvcm91Z2hmYXJlPg0KPGVpZGFzOlBvc3ROYW1lPkFybm9sdGljZSB1IETEm8SNw61uYTwvZWlkYXM6UG9zdE5hbWU+DQo8ZWlkYXM6UG9zdENvZGU+NDA3MTQ8L2VpZGFzOlBvc3RDb2RlPg0KPGVpZGFzOkN2YWRkcmVzc0FyZWE+QXJub2x0aWNlPC9laWRhczpDdmFkZHJlc3NBcmVhPg0K</saml:AttributeValue>
</saml:Attribute>"#;

fn solna() -> StructuredAddress {
    StructuredAddress::new()
        .with(AddressField::LocatorDesignator, "6 tr")
        .with(AddressField::LocatorName, "10")
        .with(AddressField::Thoroughfare, "Korta gatan")
        .with(AddressField::PostName, "Solna")
        .with(AddressField::PostCode, "19174")
        .with(AddressField::AdminunitFirstline, "SE")
        .with(AddressField::AdminunitSecondline, "Uppland")
}

fn decode_first_value(xml: &str) -> Result<AttributeValue, RegistryError> {
    let doc = parse_str(xml).unwrap();
    let attribute = ElementRef::root(doc.root());
    let value = attribute.child_elements().next().unwrap();
    decode_attribute_value(&value)
}

fn current_address(value: AttributeValue) -> StructuredAddress {
    match value {
        AttributeValue::CurrentAddress(address) => address.into_address(),
        other => panic!("expected a current address, got {other:?}"),
    }
}

#[test]
fn decodes_address_with_declared_prefix() {
    let address = current_address(decode_first_value(LONDON_ADDRESS).unwrap());

    assert_eq!(address.locator_designator(), Some("22"));
    assert_eq!(address.thoroughfare(), Some("Arcacia Avenue"));
    assert_eq!(address.post_name(), Some("London"));
    assert_eq!(address.post_code(), Some("SW1A 1AA"));
    assert_eq!(address.po_box(), None);
    assert_eq!(address.locator_name(), None);
    assert_eq!(address.cvaddress_area(), None);
    assert_eq!(address.adminunit_first_line(), None);
    assert_eq!(address.adminunit_second_line(), None);
}

#[test]
fn decodes_address_with_undeclared_prefix() {
    let address = current_address(decode_first_value(ARNOLTICE_ADDRESS).unwrap());

    assert_eq!(address.locator_designator(), Some("131"));
    assert_eq!(address.thoroughfare(), None);
    assert_eq!(address.post_name(), Some("Arnoltice u Děčína"));
    assert_eq!(address.post_code(), Some("40714"));
    assert_eq!(address.cvaddress_area(), Some("Arnoltice"));
    assert_eq!(address.fields().count(), 4);
}

#[test]
fn decodes_whole_address_attribute() {
    let doc = parse_str(LONDON_ADDRESS).unwrap();
    let attribute = EidasAttribute::from_element(&ElementRef::root(doc.root())).unwrap();

    assert_eq!(attribute.name(), attribute_names::CURRENT_ADDRESS);
    assert_eq!(attribute.friendly_name(), Some("CurrentAddress"));
    assert_eq!(attribute.values().len(), 1);
    assert_eq!(
        attribute.definition().map(|d| d.value_type()),
        Some(AttributeValueType::CurrentAddress)
    );
}

#[test]
fn address_round_trips_with_bound_prefix() {
    let mut element = Element::new("saml:AttributeValue");
    element.declare_namespace("eidas", EIDAS_NATURAL_PERSON_NS);

    AddressAttributeValue::new(solna())
        .marshal(&mut element, &NamespaceBindings::new())
        .unwrap();

    assert_eq!(element.children().len(), 1);
    assert_eq!(element.child_elements().count(), 0);

    let payload: String = element
        .text()
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let fragment = String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap();
    assert!(fragment.starts_with("<eidas:"));

    let decoded = AddressAttributeValue::unmarshal(&ElementRef::root(&element)).unwrap();
    assert_eq!(decoded.address(), &solna());
    assert_eq!(
        decoded.address().to_flattened_string(),
        "LocatorDesignator=6%20tr;LocatorName=10;Thoroughfare=Korta%20gatan;PostName=Solna;AdminunitFirstline=SE;AdminunitSecondline=Uppland;PostCode=19174"
    );
}

#[test]
fn structured_address_with_unknown_child_is_rejected() {
    let xml = r#"<saml:AttributeValue
        xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xmlns:eidas-natural="http://eidas.europa.eu/attributes/naturalperson"
        xsi:type="eidas-natural:CurrentAddressStructuredType">
      <eidas-natural:PostCode>19174</eidas-natural:PostCode>
      <eidas-natural:Street>Korta gatan</eidas-natural:Street>
    </saml:AttributeValue>"#;
    let doc = parse_str(xml).unwrap();
    let result = decode_attribute_value(&ElementRef::root(doc.root()));

    assert!(matches!(
        result,
        Err(RegistryError::Value(ParseError::UnrecognizedChild { name }))
            if name == "eidas-natural:Street"
    ));
}

#[test]
fn base64_address_with_bad_payload_is_encoding_failure() {
    let xml = r#"<saml:AttributeValue
        xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xmlns:eidas="http://eidas.europa.eu/attributes/naturalperson"
        xsi:type="eidas:CurrentAddressType">not*base64</saml:AttributeValue>"#;
    let doc = parse_str(xml).unwrap();
    let result = decode_attribute_value(&ElementRef::root(doc.root()));

    assert!(matches!(
        result,
        Err(RegistryError::Value(ParseError::EncodingFailure(_)))
    ));
}

#[test]
fn type_in_foreign_namespace_is_rejected() {
    let xml = r#"<saml:AttributeValue
        xmlns:saml="urn:oasis:names:tc:SAML:2.0:assertion"
        xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance"
        xmlns:xs="http://www.w3.org/2001/XMLSchema"
        xsi:type="xs:string">hello</saml:AttributeValue>"#;
    let doc = parse_str(xml).unwrap();
    let result = decode_attribute_value(&ElementRef::root(doc.root()));

    assert!(matches!(
        result,
        Err(RegistryError::ForeignNamespace { namespace, .. })
            if namespace == "http://www.w3.org/2001/XMLSchema"
    ));
}

#[test]
fn encoded_attribute_decodes_after_serialization() {
    let value = AttributeValue::CurrentAddressStructured(solna());
    let element = encode_attribute_value(&value, &NamespaceBindings::new()).unwrap();
    let xml = to_xml_string(&element);

    assert!(xml.contains(r#"xsi:type="eidas-natural:CurrentAddressStructuredType""#));
    assert!(xml.contains("<eidas-natural:Thoroughfare>Korta gatan</eidas-natural:Thoroughfare>"));

    let doc = parse_str(&xml).unwrap();
    let decoded = decode_attribute_value(&ElementRef::root(doc.root())).unwrap();
    assert_eq!(decoded, value);
}

#[cfg(feature = "serde")]
mod serde_tests {
    use eidas_attributes::{BirthDate, CountryCode, Gender, KnownGender, PersonIdentifier};

    #[test]
    fn scalars_serialize_as_canonical_strings() {
        let code = CountryCode::parse("se").unwrap();
        assert_eq!(serde_json::to_string(&code).unwrap(), r#""SE""#);

        let date = BirthDate::from_ymd(1969, 11, 29).unwrap();
        assert_eq!(serde_json::to_string(&date).unwrap(), r#""1969-11-29""#);

        let id = PersonIdentifier::parse("ES/AT/02635542Y").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), r#""ES/AT/02635542Y""#);
    }

    #[test]
    fn deserialize_validates() {
        let gender: Gender = serde_json::from_str(r#""Female""#).unwrap();
        assert_eq!(gender, Gender::Known(KnownGender::Female));

        let code: CountryCode = serde_json::from_str(r#""de""#).unwrap();
        assert_eq!(code.as_str(), "DE");

        assert!(serde_json::from_str::<CountryCode>(r#""SWE""#).is_err());
        assert!(serde_json::from_str::<BirthDate>(r#""1969-02-30""#).is_err());
    }
}
