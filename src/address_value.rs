//! The `CurrentAddressType` attribute value: an address carried as Base64.
//!
//! On the wire the structural address fragment is serialized to text,
//! Base64-encoded and placed as the only content of the attribute value
//! element:
//!
//! ```text
//! <saml:AttributeValue xsi:type="eidas-natural:CurrentAddressType">
//!   PGVpZGFzOkxvY2F0b3JEZXNpZ25hdG9yPjIyPC9laWRhczpMb2NhdG9yRGVzaWduYX...
//! </saml:AttributeValue>
//! ```
//!
//! The decoded fragment has no root element and relies on namespace
//! prefixes declared (or not declared at all) in the enclosing document, so
//! decoding rebuilds a root carrying every binding in scope before handing
//! the fields to the structural decoder.

use std::fmt;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use eidas_xml::{Element, ElementRef, NamespaceBindings, Node, parse_fragment, to_xml_string};

use crate::address::{StructuredAddress, field_element, field_prefix};
use crate::codec::{CanonicalString, XmlValueCodec};
use crate::constants::{
    BASE64_LINE_WIDTH, EIDAS_NATURAL_PERSON_NS, EIDAS_NATURAL_PERSON_PREFIX, EIDAS_PREFIX,
};
use crate::error::ParseError;

/// A [`StructuredAddress`] in its Base64-wrapped attribute value form.
///
/// # Examples
///
/// ```
/// use eidas_attributes::{AddressAttributeValue, AddressField, StructuredAddress, XmlValueCodec};
/// use eidas_xml::{Element, ElementRef, NamespaceBindings};
///
/// let value = AddressAttributeValue::new(
///     StructuredAddress::new().with(AddressField::PostCode, "19174"),
/// );
///
/// let mut element = Element::new("saml:AttributeValue");
/// value.marshal(&mut element, &NamespaceBindings::new()).unwrap();
/// assert_eq!(element.child_elements().count(), 0);
///
/// let decoded = AddressAttributeValue::unmarshal(&ElementRef::root(&element)).unwrap();
/// assert_eq!(decoded.address().post_code(), Some("19174"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct AddressAttributeValue {
    address: StructuredAddress,
}

impl AddressAttributeValue {
    /// Wraps an address.
    #[must_use]
    pub const fn new(address: StructuredAddress) -> Self {
        Self { address }
    }

    /// Returns the address.
    #[must_use]
    pub const fn address(&self) -> &StructuredAddress {
        &self.address
    }

    /// Returns the address mutably.
    pub fn address_mut(&mut self) -> &mut StructuredAddress {
        &mut self.address
    }

    /// Consumes the value, returning the address.
    #[must_use]
    pub fn into_address(self) -> StructuredAddress {
        self.address
    }

    /// Serializes the non-blank fields as a rootless fragment, in wire order.
    ///
    /// With `declare` set every field element carries its own namespace
    /// declaration.
    fn fragment(&self, prefix: &str, declare: bool) -> String {
        self.address
            .non_blank_fields()
            .map(|(field, value)| {
                let mut element = field_element(prefix, field, value);
                if declare {
                    element.declare_namespace(prefix, EIDAS_NATURAL_PERSON_NS);
                }
                to_xml_string(&element)
            })
            .collect()
    }
}

impl From<StructuredAddress> for AddressAttributeValue {
    fn from(address: StructuredAddress) -> Self {
        Self::new(address)
    }
}

impl From<AddressAttributeValue> for StructuredAddress {
    fn from(value: AddressAttributeValue) -> Self {
        value.address
    }
}

/// Base64-encodes `bytes` with lines of at most [`BASE64_LINE_WIDTH`]
/// characters separated by `\n`.
fn encode_wrapped(bytes: &[u8]) -> String {
    let encoded = STANDARD.encode(bytes);
    let mut wrapped = String::with_capacity(encoded.len() + encoded.len() / BASE64_LINE_WIDTH);
    for (i, c) in encoded.chars().enumerate() {
        if i > 0 && i % BASE64_LINE_WIDTH == 0 {
            wrapped.push('\n');
        }
        wrapped.push(c);
    }
    wrapped
}

/// Decodes Base64 that may be wrapped or padded with whitespace anywhere.
fn decode_lenient(text: &str) -> Result<Vec<u8>, ParseError> {
    let compact: String = text.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(STANDARD.decode(compact)?)
}

/// Collects the bindings in scope at `element` and adds the two canonical
/// prefixes for the natural person namespace if they are missing.
fn decoding_bindings(element: &ElementRef<'_>) -> NamespaceBindings {
    let mut bindings = element.in_scope_namespaces();
    for prefix in [EIDAS_NATURAL_PERSON_PREFIX, EIDAS_PREFIX] {
        if bindings.bind_if_absent(prefix, EIDAS_NATURAL_PERSON_NS) {
            tracing::debug!(prefix, "binding undeclared prefix to the natural person namespace");
        }
    }
    bindings
}

impl XmlValueCodec for AddressAttributeValue {
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError> {
        let outer = element.element();

        let mut payload = None;
        for node in outer.children() {
            match node {
                Node::Text(text) => {
                    payload = Some(text.as_str());
                    break;
                }
                Node::Element(skipped) => {
                    tracing::debug!(
                        element = skipped.name(),
                        "skipping element while looking for the base64 payload"
                    );
                }
            }
        }
        let Some(payload) = payload else {
            return Err(ParseError::malformed(
                outer.name(),
                "expected base64 content",
            ));
        };

        let fragment = String::from_utf8(decode_lenient(payload)?)?;

        let mut root = Element::new(outer.name());
        for (prefix, uri) in decoding_bindings(element).iter() {
            root.declare_namespace(prefix, uri);
        }
        let root = parse_fragment(&fragment, &root)?;

        let address = StructuredAddress::unmarshal(&ElementRef::root(&root))?;
        Ok(Self { address })
    }

    fn marshal(&self, target: &mut Element, scope: &NamespaceBindings) -> Result<(), ParseError> {
        // Undeclared canonical prefixes are bound again on decode; any other
        // fallback prefix travels with its declaration.
        let (prefix, needs_declaration) = field_prefix(target, scope);
        let declare = needs_declaration
            && prefix != EIDAS_NATURAL_PERSON_PREFIX
            && prefix != EIDAS_PREFIX;
        let fragment = self.fragment(&prefix, declare);

        target.clear_children();
        if !fragment.is_empty() {
            target.push_text(encode_wrapped(fragment.as_bytes()));
        }
        Ok(())
    }
}

impl CanonicalString for AddressAttributeValue {
    const TYPE_NAME: &'static str = "CurrentAddress";

    fn to_canonical_string(&self) -> Option<String> {
        self.address.to_canonical_string()
    }

    fn parse_canonical_string(value: &str) -> Result<Self, ParseError> {
        StructuredAddress::parse_canonical_string(value).map(Self::new)
    }
}

impl fmt::Display for AddressAttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.address, f)
    }
}
