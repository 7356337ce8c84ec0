//! The open gender enumeration.

use std::fmt;
use std::str::FromStr;

use eidas_xml::{Element, ElementRef, NamespaceBindings};

use crate::codec::{CanonicalString, XmlValueCodec, set_simple_content, simple_content};
use crate::error::ParseError;

/// The gender values named by the eIDAS schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownGender {
    /// `Male`
    Male,
    /// `Female`
    Female,
    /// `Unspecified`
    Unspecified,
}

impl KnownGender {
    /// All known values.
    pub const ALL: [Self; 3] = [Self::Male, Self::Female, Self::Unspecified];

    /// Returns the schema spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Unspecified => "Unspecified",
        }
    }

    /// Matches a value against the known spellings, ignoring ASCII case.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|known| known.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for KnownGender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A gender value.
///
/// The schema type is an open enumeration: a value that is not spelled
/// exactly like one of the known values is kept verbatim in
/// [`Gender::Other`] and written back unchanged.
///
/// # Examples
///
/// ```
/// use eidas_attributes::{Gender, KnownGender};
///
/// assert_eq!(Gender::parse("Female").unwrap(), Gender::Known(KnownGender::Female));
///
/// let odd = Gender::parse("FEMALE").unwrap();
/// assert_eq!(odd.as_str(), "FEMALE");
/// assert_eq!(odd.known(), Some(KnownGender::Female));
///
/// let other = Gender::parse("Nonbinary").unwrap();
/// assert_eq!(other.known(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Gender {
    /// One of the schema values, in its canonical spelling
    Known(KnownGender),
    /// Any other value, exactly as received
    Other(String),
}

impl Gender {
    /// Parses a gender value. Any non-blank string is accepted.
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
        Ok(KnownGender::ALL
            .into_iter()
            .find(|known| known.as_str() == input)
            .map_or_else(|| Self::Other(input.to_string()), Self::Known))
    }

    /// Returns the value as it appears on the wire.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(known) => known.as_str(),
            Self::Other(value) => value,
        }
    }

    /// Returns the known value this matches, ignoring ASCII case.
    #[must_use]
    pub fn known(&self) -> Option<KnownGender> {
        match self {
            Self::Known(known) => Some(*known),
            Self::Other(value) => KnownGender::from_value(value),
        }
    }
}

impl From<KnownGender> for Gender {
    fn from(value: KnownGender) -> Self {
        Self::Known(value)
    }
}

impl CanonicalString for Gender {
    const TYPE_NAME: &'static str = "Gender";

    fn to_canonical_string(&self) -> Option<String> {
        Some(self.as_str().to_string())
    }

    fn parse_canonical_string(value: &str) -> Result<Self, ParseError> {
        Self::parse(value)
    }
}

impl XmlValueCodec for Gender {
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError> {
        Self::parse(&simple_content(element, Self::TYPE_NAME)?)
    }

    fn marshal(&self, target: &mut Element, _scope: &NamespaceBindings) -> Result<(), ParseError> {
        set_simple_content(target, self.as_str());
        Ok(())
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for Gender {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Gender {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Gender {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
