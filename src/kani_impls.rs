//! Kani Arbitrary implementations and proof harnesses for property verification.
//!
//! # Usage
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::{BirthDate, CanonicalString, CountryCode, Gender, KnownGender};

fn arbitrary_letter() -> char {
    let chars = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let idx: usize = kani::any();
    let idx = idx % chars.len();
    chars[idx] as char
}

impl kani::Arbitrary for CountryCode {
    fn any() -> Self {
        let code: String = [arbitrary_letter(), arbitrary_letter()].iter().collect();
        CountryCode::parse(&code).expect("two letters by construction")
    }
}

impl kani::Arbitrary for BirthDate {
    fn any() -> Self {
        let year: i32 = kani::any();
        let month: u32 = kani::any();
        let day: u32 = kani::any();
        kani::assume((1..=9999).contains(&year));
        kani::assume((1..=12).contains(&month));
        // Day 28 exists in every month
        kani::assume((1..=28).contains(&day));
        BirthDate::from_ymd(year, month, day).expect("valid date by construction")
    }
}

impl kani::Arbitrary for KnownGender {
    fn any() -> Self {
        let idx: usize = kani::any();
        KnownGender::ALL[idx % KnownGender::ALL.len()]
    }
}

// ============================================================================
// Kani Proof Harnesses
// ============================================================================

/// Proof: the canonical country code reparses to the same value
#[kani::proof]
#[kani::unwind(4)]
fn proof_country_code_roundtrip() {
    let code: CountryCode = kani::any();
    let canonical = code.to_canonical_string().expect("country code is never empty");
    assert_eq!(canonical.len(), 2);
    assert!(canonical.chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(CountryCode::parse(&canonical).expect("canonical parses"), code);
}

/// Proof: birth dates always render as ten characters
#[kani::proof]
#[kani::unwind(12)]
fn proof_birth_date_canonical_width() {
    let date: BirthDate = kani::any();
    let canonical = date.to_string();
    assert_eq!(canonical.len(), 10);
    assert_eq!(BirthDate::parse(&canonical).expect("canonical parses"), date);
}

/// Proof: known genders survive the canonical form
#[kani::proof]
#[kani::unwind(16)]
fn proof_known_gender_roundtrip() {
    let known: KnownGender = kani::any();
    let parsed = Gender::parse(known.as_str()).expect("known value parses");
    assert_eq!(parsed.known(), Some(known));
    assert_eq!(parsed, Gender::Known(known));
}
