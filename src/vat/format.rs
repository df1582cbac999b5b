//! VAT number format validation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::{CountryCode, FormatFailure, ValidationResult, VatFormatError};

/// Checks the body of a VAT number (the part after the country prefix).
///
/// Rules see raw bytes, so any non-ASCII input simply fails to match.
type BodyRule = fn(&[u8]) -> bool;

fn digits(b: &[u8]) -> bool {
    b.iter().all(u8::is_ascii_digit)
}

fn upper_alnum(b: &u8) -> bool {
    b.is_ascii_digit() || b.is_ascii_uppercase()
}

fn uppercase(b: &[u8]) -> bool {
    b.iter().all(u8::is_ascii_uppercase)
}

/// Body rule per member state. Every rule is anchored: it describes the whole body.
static FORMAT_RULES: &[(CountryCode, BodyRule)] = &[
    // U + 8 digits
    (CountryCode::Austria, |b| {
        b.len() == 9 && b[0] == b'U' && digits(&b[1..])
    }),
    // 0 + 9 digits
    (CountryCode::Belgium, |b| {
        b.len() == 10 && b[0] == b'0' && digits(b)
    }),
    (CountryCode::Bulgaria, |b| {
        (9..=10).contains(&b.len()) && digits(b)
    }),
    (CountryCode::Croatia, |b| b.len() == 11 && digits(b)),
    // 8 digits + check letter
    (CountryCode::Cyprus, |b| {
        b.len() == 9 && digits(&b[..8]) && b[8].is_ascii_uppercase()
    }),
    (CountryCode::Czechia, |b| {
        (8..=10).contains(&b.len()) && digits(b)
    }),
    (CountryCode::Denmark, |b| b.len() == 8 && digits(b)),
    (CountryCode::Estonia, |b| b.len() == 9 && digits(b)),
    (CountryCode::Finland, |b| b.len() == 8 && digits(b)),
    // 2-char alphanumeric key + 9-digit SIREN
    (CountryCode::France, |b| {
        b.len() == 11 && b[..2].iter().all(upper_alnum) && digits(&b[2..])
    }),
    (CountryCode::Germany, |b| b.len() == 9 && digits(b)),
    (CountryCode::Greece, |b| b.len() == 9 && digits(b)),
    (CountryCode::Hungary, |b| b.len() == 8 && digits(b)),
    // 7 digits + 1 or 2 letters
    (CountryCode::Ireland, |b| {
        (8..=9).contains(&b.len()) && digits(&b[..7]) && uppercase(&b[7..])
    }),
    (CountryCode::Italy, |b| b.len() == 11 && digits(b)),
    (CountryCode::Latvia, |b| b.len() == 11 && digits(b)),
    (CountryCode::Lithuania, |b| {
        (b.len() == 9 || b.len() == 12) && digits(b)
    }),
    (CountryCode::Luxembourg, |b| b.len() == 8 && digits(b)),
    (CountryCode::Malta, |b| b.len() == 8 && digits(b)),
    // 9 digits + B + 2 digits
    (CountryCode::Netherlands, |b| {
        b.len() == 12 && digits(&b[..9]) && b[9] == b'B' && digits(&b[10..])
    }),
    (CountryCode::Poland, |b| b.len() == 10 && digits(b)),
    (CountryCode::Portugal, |b| b.len() == 9 && digits(b)),
    (CountryCode::Romania, |b| {
        (2..=10).contains(&b.len()) && digits(b)
    }),
    (CountryCode::Slovakia, |b| b.len() == 10 && digits(b)),
    (CountryCode::Slovenia, |b| b.len() == 8 && digits(b)),
    // letter or digit, 7 digits, letter or digit
    (CountryCode::Spain, |b| {
        b.len() == 9 && upper_alnum(&b[0]) && digits(&b[1..8]) && upper_alnum(&b[8])
    }),
    (CountryCode::Sweden, |b| b.len() == 12 && digits(b)),
];

fn rule_for(country: CountryCode) -> Option<BodyRule> {
    FORMAT_RULES
        .iter()
        .find(|(c, _)| *c == country)
        .map(|&(_, rule)| rule)
}

/// A format-valid EU VAT number: member state prefix plus body.
///
/// Only obtainable through [`parse_vat_number`] (or `FromStr`), so holding
/// one means the format check has passed. Serializes as the full string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct VatNumber {
    country: CountryCode,
    body: String,
}

impl VatNumber {
    /// Member state the number was issued by.
    pub fn country(&self) -> CountryCode {
        self.country
    }

    /// The number without its country prefix.
    pub fn body(&self) -> &str {
        &self.body
    }
}

impl fmt::Display for VatNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.country, self.body)
    }
}

impl FromStr for VatNumber {
    type Err = VatFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_vat_number(s)
    }
}

impl TryFrom<String> for VatNumber {
    type Error = VatFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        parse_vat_number(&value)
    }
}

impl From<VatNumber> for String {
    fn from(vat: VatNumber) -> Self {
        vat.to_string()
    }
}

/// Parse a VAT number, reporting why it was rejected.
///
/// The input is taken exactly as given: the first two characters must be an
/// uppercase EU code and the rest must match that country's rule in full.
/// Callers holding raw form input trim it first.
pub fn parse_vat_number(value: &str) -> Result<VatNumber, VatFormatError> {
    if value.len() < 3 {
        return Err(VatFormatError::new(value, FormatFailure::TooShort));
    }

    let Some((prefix, body)) = value.split_at_checked(2) else {
        let prefix: String = value.chars().take(2).collect();
        return Err(VatFormatError::new(value, FormatFailure::UnknownCountry(prefix)));
    };

    let Some(country) = CountryCode::from_code(prefix) else {
        return Err(VatFormatError::new(
            value,
            FormatFailure::UnknownCountry(prefix.into()),
        ));
    };

    let Some(rule) = rule_for(country) else {
        return Err(VatFormatError::new(
            value,
            FormatFailure::NoRule(prefix.into()),
        ));
    };

    if !rule(body.as_bytes()) {
        return Err(VatFormatError::new(
            value,
            FormatFailure::BodyMismatch(prefix.into()),
        ));
    }

    Ok(VatNumber {
        country,
        body: body.to_string(),
    })
}

/// Validate a VAT number by format only (no authority call).
///
/// Returns [`ValidationResult::FormatValidButUnverified`] or
/// [`ValidationResult::FormatInvalid`]; never panics.
pub fn validate_format(vat_number: &str) -> ValidationResult {
    match parse_vat_number(vat_number) {
        Ok(_) => ValidationResult::FormatValidButUnverified,
        Err(_) => ValidationResult::FormatInvalid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_de() {
        let vat = parse_vat_number("DE123456789").unwrap();
        assert_eq!(vat.country(), CountryCode::Germany);
        assert_eq!(vat.body(), "123456789");
        assert_eq!(vat.to_string(), "DE123456789");
    }

    #[test]
    fn de_length_checked() {
        assert_eq!(validate_format("DE12345678"), ValidationResult::FormatInvalid);
        assert_eq!(validate_format("DE1234567890"), ValidationResult::FormatInvalid);
    }

    #[test]
    fn every_country_has_one_rule() {
        for country in CountryCode::ALL {
            let n = FORMAT_RULES.iter().filter(|(c, _)| *c == country).count();
            assert_eq!(n, 1, "{country} has {n} rules");
        }
    }

    #[test]
    fn unknown_prefix() {
        let err = parse_vat_number("XX123456789").unwrap_err();
        assert_eq!(err.reason, FormatFailure::UnknownCountry("XX".into()));
    }

    #[test]
    fn lowercase_prefix_rejected() {
        let err = parse_vat_number("de123456789").unwrap_err();
        assert_eq!(err.reason, FormatFailure::UnknownCountry("de".into()));
    }

    #[test]
    fn too_short() {
        for input in ["", "D", "DE"] {
            let err = parse_vat_number(input).unwrap_err();
            assert_eq!(err.reason, FormatFailure::TooShort, "{input:?}");
        }
    }

    #[test]
    fn body_mismatch_names_country() {
        let err = parse_vat_number("NL123456789A01").unwrap_err();
        assert_eq!(err.reason, FormatFailure::BodyMismatch("NL".into()));
    }

    #[test]
    fn surrounding_whitespace_rejected() {
        for input in [" DE123456789", "DE123456789 ", "  DE123456789\n"] {
            assert_eq!(validate_format(input), ValidationResult::FormatInvalid, "{input:?}");
        }
        let err = parse_vat_number(" DE123456789").unwrap_err();
        assert_eq!(err.reason, FormatFailure::UnknownCountry(" D".into()));
    }

    #[test]
    fn inner_whitespace_rejected() {
        assert_eq!(validate_format("DE 123456789"), ValidationResult::FormatInvalid);
    }

    #[test]
    fn non_ascii_does_not_panic() {
        assert_eq!(validate_format("ÄÖ123456789"), ValidationResult::FormatInvalid);
        assert_eq!(validate_format("DÉ12345678"), ValidationResult::FormatInvalid);
        assert_eq!(validate_format("DE12345678é"), ValidationResult::FormatInvalid);
        assert_eq!(validate_format("CY12345678É"), ValidationResult::FormatInvalid);
    }

    #[test]
    fn lithuania_is_anchored_on_both_lengths() {
        assert!(parse_vat_number("LT123456789").is_ok());
        assert!(parse_vat_number("LT123456789012").is_ok());
        assert!(parse_vat_number("LT1234567890").is_err());
        assert!(parse_vat_number("LT123456789X").is_err());
    }

    #[test]
    fn serde_as_string() {
        let vat = parse_vat_number("ATU12345678").unwrap();
        let json = serde_json::to_string(&vat).unwrap();
        assert_eq!(json, "\"ATU12345678\"");
        let back: VatNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vat);
        assert!(serde_json::from_str::<VatNumber>("\"AT12345678\"").is_err());
    }
}
