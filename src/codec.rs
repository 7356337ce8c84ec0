//! The two contracts every attribute value type implements.
//!
//! [`CanonicalString`] is the string-level wire format: the text a value
//! commits to for round-tripping. [`XmlValueCodec`] moves a value in and out
//! of the element that carries it in an assertion.

use eidas_xml::{Element, ElementRef, NamespaceBindings};

use crate::error::ParseError;

/// Conversion between a value and its canonical string.
///
/// For every valid value `v`,
/// `T::parse_canonical_string(&v.to_canonical_string().unwrap())` yields a
/// value equal to `v`, unless the type documents that its projection is
/// lossy.
pub trait CanonicalString: Sized {
    /// Name of the value type, used in [`ParseError::Empty`].
    const TYPE_NAME: &'static str;

    /// Returns the canonical string, or `None` if the value has no
    /// meaningful string projection.
    fn to_canonical_string(&self) -> Option<String>;

    /// Parses a canonical string.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Empty`] for empty input,
    /// [`ParseError::Malformed`] when the syntax is wrong and
    /// [`ParseError::OutOfRange`] for semantically invalid values.
    fn parse_canonical_string(value: &str) -> Result<Self, ParseError>;
}

/// Parses an optional canonical string, treating `None` as empty input.
///
/// # Errors
///
/// Returns [`ParseError::Empty`] for `None`, otherwise whatever
/// [`CanonicalString::parse_canonical_string`] returns.
///
/// # Examples
///
/// ```
/// use eidas_attributes::{parse_optional, CountryCode, ParseError};
///
/// let code: CountryCode = parse_optional(Some("se")).unwrap();
/// assert_eq!(code.as_str(), "SE");
///
/// let missing: Result<CountryCode, _> = parse_optional(None);
/// assert!(matches!(missing, Err(ParseError::Empty { .. })));
/// ```
pub fn parse_optional<T: CanonicalString>(value: Option<&str>) -> Result<T, ParseError> {
    match value {
        Some(v) => T::parse_canonical_string(v),
        None => Err(ParseError::Empty {
            type_name: T::TYPE_NAME,
        }),
    }
}

/// Reading and writing a value as the content of an XML element.
pub trait XmlValueCodec: Sized {
    /// Decodes a value from an element, using its ancestors for namespace
    /// resolution.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the element content does not hold a valid
    /// value of this type.
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError>;

    /// Writes the value into `target`, replacing its content.
    ///
    /// `scope` holds the namespace bindings in effect where `target` will
    /// be placed. Only `target` is modified.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the value cannot be represented.
    fn marshal(&self, target: &mut Element, scope: &NamespaceBindings) -> Result<(), ParseError>;
}

/// Returns the text content of a simple-content element.
///
/// Child elements are not allowed; blank content is [`ParseError::Empty`].
pub(crate) fn simple_content(
    element: &ElementRef<'_>,
    type_name: &'static str,
) -> Result<String, ParseError> {
    if let Some(child) = element.element().child_elements().next() {
        return Err(ParseError::UnrecognizedChild {
            name: child.name().to_string(),
        });
    }
    let text = element.element().text();
    if text.trim().is_empty() {
        return Err(ParseError::Empty { type_name });
    }
    Ok(text)
}

/// Replaces the content of `target` with a single text node.
pub(crate) fn set_simple_content(target: &mut Element, text: impl Into<String>) {
    target.clear_children();
    target.push_text(text);
}
