//! Dates of birth in ISO 8601 calendar form.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use eidas_xml::{Element, ElementRef, NamespaceBindings};

use crate::codec::{CanonicalString, XmlValueCodec, set_simple_content, simple_content};
use crate::error::ParseError;

const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

/// A Gregorian calendar date whose canonical form is `YYYY-MM-DD`.
///
/// The year always has four digits, so only years 1 through 9999 are
/// representable.
///
/// # Examples
///
/// ```
/// use eidas_attributes::BirthDate;
///
/// let date = BirthDate::parse("1969-11-29").unwrap();
/// assert_eq!((date.year(), date.month(), date.day()), (1969, 11, 29));
/// assert_eq!(date.to_string(), "1969-11-29");
///
/// assert!(BirthDate::parse("69-11-29").is_err());
/// assert!(BirthDate::from_ymd(1969, 2, 30).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// Parses a strict `YYYY-MM-DD` date. Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if:
    /// - The input is empty (`Empty`)
    /// - The input is not four digits, dash, two digits, dash, two digits (`Malformed`)
    /// - The date does not exist in the calendar (`OutOfRange`)
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ParseError::Empty {
                type_name: Self::TYPE_NAME,
            });
        }

        let bytes = trimmed.as_bytes();
        let shape_ok = bytes.len() == 10
            && bytes[4] == b'-'
            && bytes[7] == b'-'
            && bytes
                .iter()
                .enumerate()
                .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !shape_ok {
            return Err(ParseError::malformed(input, "expected YYYY-MM-DD"));
        }

        let number = |range: std::ops::Range<usize>| {
            trimmed[range]
                .parse::<u32>()
                .map_err(|_| ParseError::malformed(input, "expected YYYY-MM-DD"))
        };
        let year = number(0..4)?;
        let month = number(5..7)?;
        let day = number(8..10)?;

        let year = i32::try_from(year)
            .map_err(|_| ParseError::out_of_range(input, "year out of range"))?;
        Self::from_ymd(year, month, day).map_err(|_| {
            ParseError::out_of_range(input, "not a valid calendar date")
        })
    }

    /// Creates a date from its parts.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::OutOfRange` if the year is outside 1..=9999 or
    /// the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        let shown = || format!("{year:04}-{month:02}-{day:02}");
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(ParseError::out_of_range(shown(), "year must have four digits"));
        }
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ParseError::out_of_range(shown(), "not a valid calendar date"))
    }

    /// Creates a date from a `chrono` date.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::OutOfRange` if the year is outside 1..=9999.
    pub fn from_date(date: NaiveDate) -> Result<Self, ParseError> {
        Self::from_ymd(date.year(), date.month(), date.day())
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month, 1 through 12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of the month, starting at 1.
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the underlying `chrono` date.
    #[must_use]
    pub const fn as_date(&self) -> NaiveDate {
        self.0
    }
}

impl CanonicalString for BirthDate {
    const TYPE_NAME: &'static str = "BirthDate";

    fn to_canonical_string(&self) -> Option<String> {
        Some(self.to_string())
    }

    fn parse_canonical_string(value: &str) -> Result<Self, ParseError> {
        Self::parse(value)
    }
}

impl XmlValueCodec for BirthDate {
    fn unmarshal(element: &ElementRef<'_>) -> Result<Self, ParseError> {
        Self::parse(&simple_content(element, Self::TYPE_NAME)?)
    }

    fn marshal(&self, target: &mut Element, _scope: &NamespaceBindings) -> Result<(), ParseError> {
        set_simple_content(target, self.to_string());
        Ok(())
    }
}

impl fmt::Display for BirthDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

impl FromStr for BirthDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for BirthDate {
    type Error = ParseError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<NaiveDate> for BirthDate {
    type Error = ParseError;

    fn try_from(value: NaiveDate) -> Result<Self, Self::Error> {
        Self::from_date(value)
    }
}

impl From<BirthDate> for NaiveDate {
    fn from(value: BirthDate) -> Self {
        value.0
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BirthDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BirthDate {
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
    use eidas_xml::parse_str;

    use super::*;

    #[test]
    fn parse_valid_date() {
        let date = BirthDate::parse("1969-11-29").unwrap();
        assert_eq!(date.year(), 1969);
        assert_eq!(date.month(), 11);
        assert_eq!(date.day(), 29);
        assert_eq!(date.to_canonical_string().as_deref(), Some("1969-11-29"));
    }

    #[test]
    fn two_digit_year_is_malformed() {
        assert!(matches!(
            BirthDate::parse("69-11-29"),
            Err(ParseError::Malformed { .. })
        ));
    }

    #[test]
    fn garbage_is_malformed() {
        for input in ["not-a-date", "1969/11/29", "1969-1-29", "1969-11-29T00:00", "+969-11-29"] {
            assert!(
                matches!(BirthDate::parse(input), Err(ParseError::Malformed { .. })),
                "{input} should be malformed"
            );
        }
    }

    #[test]
    fn empty_is_empty() {
        assert!(matches!(BirthDate::parse(""), Err(ParseError::Empty { .. })));
    }

    #[test]
    fn impossible_dates_are_out_of_range() {
        for input in ["1969-13-01", "1969-02-30", "1969-00-10", "1969-04-31", "0000-01-01"] {
            assert!(
                matches!(BirthDate::parse(input), Err(ParseError::OutOfRange { .. })),
                "{input} should be out of range"
            );
        }
    }

    #[test]
    fn leap_day() {
        assert!(BirthDate::parse("2000-02-29").is_ok());
        assert!(BirthDate::parse("1900-02-29").is_err());
    }

    #[test]
    fn formatting_independent_of_construction() {
        let from_parts = BirthDate::from_ymd(7, 3, 4).unwrap();
        assert_eq!(from_parts.to_string(), "0007-03-04");

        let chrono_date = NaiveDate::from_ymd_opt(1985, 1, 9).unwrap();
        let from_date = BirthDate::from_date(chrono_date).unwrap();
        assert_eq!(from_date.to_string(), "1985-01-09");
        assert_eq!(from_date, BirthDate::parse("1985-01-09").unwrap());
    }

    #[test]
    fn five_digit_year_rejected() {
        assert!(matches!(
            BirthDate::from_ymd(10_000, 1, 1),
            Err(ParseError::OutOfRange { .. })
        ));
    }

    #[test]
    fn element_round_trip() {
        let doc = parse_str("<v>1965-01-01</v>").unwrap();
        let date = BirthDate::unmarshal(&ElementRef::root(doc.root())).unwrap();

        let mut target = Element::new("v");
        date.marshal(&mut target, &NamespaceBindings::new()).unwrap();
        assert_eq!(target.text(), "1965-01-01");
    }
}
