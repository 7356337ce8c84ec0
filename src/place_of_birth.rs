//! Free-text place of birth.

use std::fmt;

use eidas_xml::{Element, ElementRef, NamespaceBindings};

use crate::codec::{CanonicalString, XmlValueCodec, set_simple_content, simple_content};
use crate::error::ParseError;

/// A place of birth, kept exactly as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlaceOfBirth(String);

impl PlaceOfBirth {
    /// Wraps a place name.
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

    /// Returns the place name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl CanonicalString for PlaceOfBirth {
    const TYPE_NAME: &'static str = "PlaceOfBirth";

    fn to_canonical_string(&self) -> Option<String> {
        Some(self.0.clone())
    }

    fn parse_canonical_string(value: &str) -> Result<Self, ParseError> {
        Self::parse(value)
    }
}

impl XmlValueCodec for PlaceOfBirth {
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError> {
        Self::parse(&simple_content(element, Self::TYPE_NAME)?)
    }

    fn marshal(&self, target: &mut Element, _scope: &NamespaceBindings) -> Result<(), ParseError> {
        set_simple_content(target, self.0.as_str());
        Ok(())
    }
}

impl fmt::Display for PlaceOfBirth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PlaceOfBirth {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PlaceOfBirth {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PlaceOfBirth {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_text_verbatim() {
        let place = PlaceOfBirth::parse("Place of Birth, Östersund").unwrap();
        assert_eq!(place.as_str(), "Place of Birth, Östersund");
        assert_eq!(
            PlaceOfBirth::parse_canonical_string(&place.to_canonical_string().unwrap()).unwrap(),
            place
        );
    }

    #[test]
    fn blank_is_empty() {
        assert!(matches!(
            PlaceOfBirth::parse(""),
            Err(ParseError::Empty {
                type_name: "PlaceOfBirth"
            })
        ));
    }
}
