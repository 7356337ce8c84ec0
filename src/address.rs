//! Structured postal addresses and their structural XML form.

use std::fmt;

use eidas_xml::{Element, ElementRef, NamespaceBindings, Node};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::codec::{CanonicalString, XmlValueCodec};
use crate::constants::{EIDAS_NATURAL_PERSON_NS, EIDAS_NATURAL_PERSON_PREFIX, EIDAS_PREFIX};
use crate::error::ParseError;

/// Bytes left as they are in flattened values: ASCII letters, digits and
/// `.-*_`. Everything else, space included, is percent-encoded as UTF-8.
const FLATTENED_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'.')
    .remove(b'-')
    .remove(b'*')
    .remove(b'_');

/// The fields of a [`StructuredAddress`], in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AddressField {
    /// `PoBox`
    PoBox,
    /// `LocatorDesignator`, such as a building number
    LocatorDesignator,
    /// `LocatorName`, such as a building name
    LocatorName,
    /// `CvaddressArea`
    CvaddressArea,
    /// `Thoroughfare`, the street
    Thoroughfare,
    /// `PostName`, the post town
    PostName,
    /// `AdminunitFirstline`, usually the country
    AdminunitFirstline,
    /// `AdminunitSecondline`, usually a region
    AdminunitSecondline,
    /// `PostCode`
    PostCode,
}

impl AddressField {
    /// Every field, in the order they are written.
    pub const ALL: [Self; 9] = [
        Self::PoBox,
        Self::LocatorDesignator,
        Self::LocatorName,
        Self::CvaddressArea,
        Self::Thoroughfare,
        Self::PostName,
        Self::AdminunitFirstline,
        Self::AdminunitSecondline,
        Self::PostCode,
    ];

    /// Returns the local name of the field element.
    #[must_use]
    pub const fn local_name(self) -> &'static str {
        match self {
            Self::PoBox => "PoBox",
            Self::LocatorDesignator => "LocatorDesignator",
            Self::LocatorName => "LocatorName",
            Self::CvaddressArea => "CvaddressArea",
            Self::Thoroughfare => "Thoroughfare",
            Self::PostName => "PostName",
            Self::AdminunitFirstline => "AdminunitFirstline",
            Self::AdminunitSecondline => "AdminunitSecondline",
            Self::PostCode => "PostCode",
        }
    }

    /// Looks up a field by element local name. Matching is exact.
    #[must_use]
    pub fn from_local_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.local_name() == name)
    }

    const fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for AddressField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.local_name())
    }
}

/// A postal address made of nine independent optional fields.
///
/// # Examples
///
/// ```
/// use eidas_attributes::{AddressField, StructuredAddress};
///
/// let address = StructuredAddress::new()
///     .with(AddressField::Thoroughfare, "Korta gatan")
///     .with(AddressField::LocatorDesignator, "6 tr")
///     .with(AddressField::PostName, "Solna");
///
/// assert_eq!(address.thoroughfare(), Some("Korta gatan"));
/// assert_eq!(address.po_box(), None);
/// assert_eq!(
///     address.to_flattened_string(),
///     "LocatorDesignator=6%20tr;Thoroughfare=Korta%20gatan;PostName=Solna"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StructuredAddress {
    fields: [Option<String>; 9],
}

impl StructuredAddress {
    /// Creates an address with every field absent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style variant of [`set`](Self::set).
    #[must_use]
    pub fn with(mut self, field: AddressField, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Sets a field, replacing any previous value.
    pub fn set(&mut self, field: AddressField, value: impl Into<String>) {
        self.fields[field.index()] = Some(value.into());
    }

    /// Removes a field, returning its previous value.
    pub fn remove(&mut self, field: AddressField) -> Option<String> {
        self.fields[field.index()].take()
    }

    /// Returns a field value.
    #[must_use]
    pub fn get(&self, field: AddressField) -> Option<&str> {
        self.fields[field.index()].as_deref()
    }

    /// Returns the present fields in wire order.
    pub fn fields(&self) -> impl Iterator<Item = (AddressField, &str)> {
        AddressField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    /// Returns the present fields whose value is not blank, in wire order.
    pub(crate) fn non_blank_fields(&self) -> impl Iterator<Item = (AddressField, &str)> {
        self.fields().filter(|(_, value)| !value.trim().is_empty())
    }

    /// Returns true if no field is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Option::is_none)
    }

    /// Returns the `PoBox` field.
    #[must_use]
    pub fn po_box(&self) -> Option<&str> {
        self.get(AddressField::PoBox)
    }

    /// Returns the `LocatorDesignator` field.
    #[must_use]
    pub fn locator_designator(&self) -> Option<&str> {
        self.get(AddressField::LocatorDesignator)
    }

    /// Returns the `LocatorName` field.
    #[must_use]
    pub fn locator_name(&self) -> Option<&str> {
        self.get(AddressField::LocatorName)
    }

    /// Returns the `CvaddressArea` field.
    #[must_use]
    pub fn cvaddress_area(&self) -> Option<&str> {
        self.get(AddressField::CvaddressArea)
    }

    /// Returns the `Thoroughfare` field.
    #[must_use]
    pub fn thoroughfare(&self) -> Option<&str> {
        self.get(AddressField::Thoroughfare)
    }

    /// Returns the `PostName` field.
    #[must_use]
    pub fn post_name(&self) -> Option<&str> {
        self.get(AddressField::PostName)
    }

    /// Returns the `AdminunitFirstline` field.
    #[must_use]
    pub fn adminunit_first_line(&self) -> Option<&str> {
        self.get(AddressField::AdminunitFirstline)
    }

    /// Returns the `AdminunitSecondline` field.
    #[must_use]
    pub fn adminunit_second_line(&self) -> Option<&str> {
        self.get(AddressField::AdminunitSecondline)
    }

    /// Returns the `PostCode` field.
    #[must_use]
    pub fn post_code(&self) -> Option<&str> {
        self.get(AddressField::PostCode)
    }

    /// Renders the address as `Field=value;Field=value`.
    ///
    /// Values are percent-encoded as UTF-8 with only letters, digits and
    /// `.-*_` left bare (a space becomes `%20`, `~` becomes `%7E`). Fields
    /// come in wire order and blank fields are left out. Meant for logging
    /// and matching; nothing parses it back.
    #[must_use]
    pub fn to_flattened_string(&self) -> String {
        self.non_blank_fields()
            .map(|(field, value)| {
                format!(
                    "{}={}",
                    field.local_name(),
                    utf8_percent_encode(value, FLATTENED_VALUE)
                )
            })
            .collect::<Vec<_>>()
            .join(";")
    }
}

impl CanonicalString for StructuredAddress {
    const TYPE_NAME: &'static str = "StructuredAddress";

    /// Returns the flattened string, or `None` for an address without
    /// fields. The projection is one-way.
    fn to_canonical_string(&self) -> Option<String> {
        let flattened = self.to_flattened_string();
        (!flattened.is_empty()).then_some(flattened)
    }

    /// Always fails: an address cannot be rebuilt from its flattened string.
    fn parse_canonical_string(value: &str) -> Result<Self, ParseError> {
        Err(ParseError::malformed(
            value,
            "structured addresses have no string form to parse",
        ))
    }
}

/// Returns the prefix to use for address field elements, and whether it
/// still has to be declared.
///
/// A prefix declared on `target` wins over one bound in `scope`. If neither
/// binds the address namespace, the first of `eidas-natural`, `eidas`,
/// `eidas-natural1`, `eidas-natural2`, ... that is free in both is returned.
pub(crate) fn field_prefix(target: &Element, scope: &NamespaceBindings) -> (String, bool) {
    let declared = target
        .namespace_declarations()
        .find(|(prefix, uri)| !prefix.is_empty() && *uri == EIDAS_NATURAL_PERSON_NS)
        .map(|(prefix, _)| prefix);
    if let Some(prefix) = declared.or_else(|| scope.prefix_for(EIDAS_NATURAL_PERSON_NS)) {
        return (prefix.to_string(), false);
    }

    let is_free = |candidate: &str| {
        scope.uri_for(candidate).is_none()
            && target
                .namespace_declarations()
                .all(|(prefix, _)| prefix != candidate)
    };
    let prefix = [EIDAS_NATURAL_PERSON_PREFIX, EIDAS_PREFIX]
        .into_iter()
        .map(str::to_string)
        .chain((1..).map(|n| format!("{EIDAS_NATURAL_PERSON_PREFIX}{n}")))
        .find(|candidate| is_free(candidate))
        .unwrap_or_else(|| EIDAS_NATURAL_PERSON_PREFIX.to_string());
    if prefix != EIDAS_NATURAL_PERSON_PREFIX {
        tracing::debug!(prefix = %prefix, "canonical address prefix is bound elsewhere");
    }
    (prefix, true)
}

/// Builds the element for one address field.
pub(crate) fn field_element(prefix: &str, field: AddressField, value: &str) -> Element {
    Element::new(format!("{prefix}:{}", field.local_name())).with_text(value)
}

/// Reads one field element, returning `None` for a blank value.
fn read_field(child: &ElementRef<'_>) -> Result<(AddressField, Option<String>), ParseError> {
    let element = child.element();
    let uri = match child.namespace_uri() {
        Some(uri) => uri,
        None => {
            if element.prefix().is_some() {
                return Err(ParseError::malformed(
                    element.name(),
                    "undeclared namespace prefix",
                ));
            }
            return Err(ParseError::UnrecognizedChild {
                name: element.name().to_string(),
            });
        }
    };
    let field = if uri == EIDAS_NATURAL_PERSON_NS {
        AddressField::from_local_name(element.local_name())
    } else {
        None
    };
    let Some(field) = field else {
        return Err(ParseError::UnrecognizedChild {
            name: element.name().to_string(),
        });
    };

    if let Some(nested) = element.child_elements().next() {
        return Err(ParseError::UnrecognizedChild {
            name: nested.name().to_string(),
        });
    }
    let value = element.text();
    Ok((field, (!value.trim().is_empty()).then_some(value)))
}

/// Structural form: each present field is a child element of the address
/// element.
impl XmlValueCodec for StructuredAddress {
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError> {
        let stray = element
            .element()
            .children()
            .iter()
            .filter_map(Node::as_text)
            .find(|text| !text.trim().is_empty());
        if let Some(text) = stray {
            return Err(ParseError::malformed(
                text,
                "unexpected text between address fields",
            ));
        }

        let mut address = Self::new();
        let mut seen = [false; 9];
        for child in element.child_elements() {
            let (field, value) = read_field(&child)?;
            if std::mem::replace(&mut seen[field.index()], true) {
                return Err(ParseError::malformed(
                    child.element().name(),
                    "address field occurs more than once",
                ));
            }
            match value {
                Some(value) => address.set(field, value),
                None => tracing::debug!(field = %field, "blank address field left absent"),
            }
        }
        Ok(address)
    }

    fn marshal(&self, target: &mut Element, scope: &NamespaceBindings) -> Result<(), ParseError> {
        let (prefix, needs_declaration) = field_prefix(target, scope);
        if needs_declaration {
            target.declare_namespace(&prefix, EIDAS_NATURAL_PERSON_NS);
        }
        target.clear_children();
        for (field, value) in self.non_blank_fields() {
            target.push_element(field_element(&prefix, field, value));
        }
        Ok(())
    }
}

impl fmt::Display for StructuredAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_flattened_string())
    }
}
