//! ISO 3166-1 alpha-2 country codes.

use std::fmt;
use std::str::FromStr;

use eidas_xml::{Element, ElementRef, NamespaceBindings};

use crate::codec::{CanonicalString, XmlValueCodec, set_simple_content, simple_content};
use crate::error::ParseError;

/// A two-letter country code, stored in uppercase.
///
/// Used for the `CountryOfResidence` attribute and for the country parts of
/// a [`PersonIdentifier`](crate::PersonIdentifier).
///
/// # Examples
///
/// ```
/// use eidas_attributes::CountryCode;
///
/// let code = CountryCode::parse(" se ").unwrap();
/// assert_eq!(code.as_str(), "SE");
///
/// assert!(CountryCode::parse("SVE").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Parses a country code. Surrounding whitespace is ignored and the
    /// letters are folded to uppercase.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty or whitespace only (`Empty`)
    /// - The input is not exactly two ASCII letters (`Malformed`)
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty {
                type_name: Self::TYPE_NAME,
            });
        }
        if trimmed.len() != 2 || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
            return Err(ParseError::malformed(
                input,
                "expected exactly two ASCII letters",
            ));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the uppercase code.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CanonicalString for CountryCode {
    const TYPE_NAME: &'static str = "CountryCode";

    fn to_canonical_string(&self) -> Option<String> {
        Some(self.0.clone())
    }

    fn parse_canonical_string(value: &str) -> Result<Self, ParseError> {
        Self::parse(value)
    }
}

impl XmlValueCodec for CountryCode {
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError> {
        Self::parse(&simple_content(element, Self::TYPE_NAME)?)
    }

    fn marshal(&self, target: &mut Element, _scope: &NamespaceBindings) -> Result<(), ParseError> {
        set_simple_content(target, self.0.as_str());
        Ok(())
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for CountryCode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for CountryCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for CountryCode {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CountryCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CountryCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
