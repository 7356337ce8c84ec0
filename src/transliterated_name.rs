//! Names that may be given in a non-Latin script.

use std::fmt;
use std::hash::{Hash, Hasher};

use eidas_xml::{Element, ElementRef, NamespaceBindings};

use crate::codec::{CanonicalString, XmlValueCodec, set_simple_content, simple_content};
use crate::constants::{EIDAS_NATURAL_PERSON_NS, LATIN_SCRIPT_ATTRIBUTE};
use crate::error::ParseError;

/// A name together with its `LatinScript` flag.
///
/// The eIDAS profile lets a name be sent twice: once in its original
/// script with `LatinScript="false"` and once transliterated. The flag is
/// carried as an XML attribute, not as part of the string, and reads as
/// `true` when it was never set.
///
/// Equality compares the string and the effective flag, so a name with
/// the flag explicitly set to `true` equals one without it.
///
/// # Examples
///
/// ```
/// use eidas_attributes::TransliteratedName;
///
/// let latin = TransliteratedName::parse("Onasis").unwrap();
/// assert!(latin.latin_script());
///
/// let greek = TransliteratedName::parse("Ωνασης").unwrap().with_latin_script(false);
/// assert!(!greek.latin_script());
/// assert_eq!(greek.value(), "Ωνασης");
/// ```
#[derive(Debug, Clone, Eq)]
pub struct TransliteratedName {
    value: String,
    latin_script: Option<bool>,
}

impl TransliteratedName {
    /// Parses a name. The string is kept exactly as given.
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
        Ok(Self {
            value: input.to_string(),
            latin_script: None,
        })
    }

    /// Sets the `LatinScript` flag explicitly.
    #[must_use]
    pub fn with_latin_script(mut self, latin_script: bool) -> Self {
        self.latin_script = Some(latin_script);
        self
    }

    /// Returns the name.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the effective flag: `true` unless explicitly set to `false`.
    #[must_use]
    pub fn latin_script(&self) -> bool {
        self.latin_script.unwrap_or(true)
    }

    /// Returns the flag only if it was explicitly set.
    #[must_use]
    pub const fn explicit_latin_script(&self) -> Option<bool> {
        self.latin_script
    }
}

impl PartialEq for TransliteratedName {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value && self.latin_script() == other.latin_script()
    }
}

impl Hash for TransliteratedName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
        self.latin_script().hash(state);
    }
}

/// Parses an `xs:boolean` lexical value. Spelling is case-sensitive.
fn parse_xs_boolean(input: &str) -> Result<bool, ParseError> {
    match input.trim() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ParseError::malformed(input, "expected an xs:boolean")),
    }
}

impl CanonicalString for TransliteratedName {
    const TYPE_NAME: &'static str = "TransliteratedName";

    /// Returns the name only; the flag has no string form.
    fn to_canonical_string(&self) -> Option<String> {
        Some(self.value.clone())
    }

    fn parse_canonical_string(value: &str) -> Result<Self, ParseError> {
        Self::parse(value)
    }
}

impl XmlValueCodec for TransliteratedName {
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError> {
        let mut name = Self::parse(&simple_content(element, Self::TYPE_NAME)?)?;
        let flag = element
            .attribute_ns(None, LATIN_SCRIPT_ATTRIBUTE)
            .or_else(|| element.attribute_ns(Some(EIDAS_NATURAL_PERSON_NS), LATIN_SCRIPT_ATTRIBUTE));
        if let Some(flag) = flag {
            name.latin_script = Some(parse_xs_boolean(flag)?);
        }
        Ok(name)
    }

    fn marshal(&self, target: &mut Element, _scope: &NamespaceBindings) -> Result<(), ParseError> {
        if let Some(flag) = self.latin_script {
            target.set_attribute(LATIN_SCRIPT_ATTRIBUTE, flag.to_string());
        }
        set_simple_content(target, self.value.as_str());
        Ok(())
    }
}

impl fmt::Display for TransliteratedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for TransliteratedName {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
