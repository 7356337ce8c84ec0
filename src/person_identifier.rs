//! Composite person identifiers of the form `<origin>/<destination>/<id>`.

use std::fmt;
use std::str::FromStr;

use eidas_xml::{Element, ElementRef, NamespaceBindings};

use crate::codec::{CanonicalString, XmlValueCodec, set_simple_content, simple_content};
use crate::error::ParseError;

const SEPARATOR: char = '/';

/// A person identifier such as `ES/AT/02635542Y`.
///
/// The identifier is stored and written as one string. The parts are
/// derived on read and are never validated: a part that is missing reads as
/// `None`, and trailing empty parts are dropped, so `SE/NO/` has no local
/// identifier.
///
/// # Examples
///
/// ```
/// use eidas_attributes::PersonIdentifier;
///
/// let id = PersonIdentifier::parse("ES/AT/02635542Y").unwrap();
/// assert_eq!(id.origin_country(), Some("ES"));
/// assert_eq!(id.destination_country(), Some("AT"));
/// assert_eq!(id.identifier(), Some("02635542Y"));
///
/// let partial = PersonIdentifier::parse("ES").unwrap();
/// assert_eq!(partial.identifier(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonIdentifier(String);

impl PersonIdentifier {
    /// Wraps an identifier string. Only emptiness is checked.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Empty` if the input is empty or whitespace only.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::Empty {
                type_name: Self::TYPE_NAME,
            });
        }
        Ok(Self(input.to_string()))
    }

    /// Returns the whole identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part at `position` (0-based) after splitting on `/`.
    #[must_use]
    pub fn part(&self, position: usize) -> Option<&str> {
        let parts: Vec<&str> = self.0.split(SEPARATOR).collect();
        let significant = parts
            .iter()
            .rposition(|p| !p.is_empty())
            .map_or(0, |last| last + 1);
        parts[..significant].get(position).copied()
    }

    /// Returns the country that issued the identifier.
    #[must_use]
    pub fn origin_country(&self) -> Option<&str> {
        self.part(0)
    }

    /// Returns the country the identifier was issued for.
    #[must_use]
    pub fn destination_country(&self) -> Option<&str> {
        self.part(1)
    }

    /// Returns the local identifier.
    #[must_use]
    pub fn identifier(&self) -> Option<&str> {
        self.part(2)
    }
}

impl CanonicalString for PersonIdentifier {
    const TYPE_NAME: &'static str = "PersonIdentifier";

    fn to_canonical_string(&self) -> Option<String> {
        Some(self.0.clone())
    }

    fn parse_canonical_string(value: &str) -> Result<Self, ParseError> {
        Self::parse(value)
    }
}

impl XmlValueCodec for PersonIdentifier {
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError> {
        Self::parse(&simple_content(element, Self::TYPE_NAME)?)
    }

    fn marshal(&self, target: &mut Element, _scope: &NamespaceBindings) -> Result<(), ParseError> {
        set_simple_content(target, self.0.as_str());
        Ok(())
    }
}

impl fmt::Display for PersonIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PersonIdentifier {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for PersonIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PersonIdentifier {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PersonIdentifier {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
