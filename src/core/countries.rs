//! EU member state registry.
//!
//! The closed set of the 27 EU member states, keyed by ISO 3166-1 alpha-2
//! code. Greece is `GR` here even though its VAT prefix at VIES is `EL`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An EU member state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CountryCode {
    /// AT
    Austria,
    /// BE
    Belgium,
    /// BG
    Bulgaria,
    /// HR
    Croatia,
    /// CY
    Cyprus,
    /// CZ
    Czechia,
    /// DK
    Denmark,
    /// EE
    Estonia,
    /// FI
    Finland,
    /// FR
    France,
    /// DE
    Germany,
    /// GR
    Greece,
    /// HU
    Hungary,
    /// IE
    Ireland,
    /// IT
    Italy,
    /// LV
    Latvia,
    /// LT
    Lithuania,
    /// LU
    Luxembourg,
    /// MT
    Malta,
    /// NL
    Netherlands,
    /// PL
    Poland,
    /// PT
    Portugal,
    /// RO
    Romania,
    /// SK
    Slovakia,
    /// SI
    Slovenia,
    /// ES
    Spain,
    /// SE
    Sweden,
}

impl CountryCode {
    /// Every member state, in registry order.
    pub const ALL: [CountryCode; 27] = [
        Self::Austria,
        Self::Belgium,
        Self::Bulgaria,
        Self::Croatia,
        Self::Cyprus,
        Self::Czechia,
        Self::Denmark,
        Self::Estonia,
        Self::Finland,
        Self::France,
        Self::Germany,
        Self::Greece,
        Self::Hungary,
        Self::Ireland,
        Self::Italy,
        Self::Latvia,
        Self::Lithuania,
        Self::Luxembourg,
        Self::Malta,
        Self::Netherlands,
        Self::Poland,
        Self::Portugal,
        Self::Romania,
        Self::Slovakia,
        Self::Slovenia,
        Self::Spain,
        Self::Sweden,
    ];

    /// ISO 3166-1 alpha-2 code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Austria => "AT",
            Self::Belgium => "BE",
            Self::Bulgaria => "BG",
            Self::Croatia => "HR",
            Self::Cyprus => "CY",
            Self::Czechia => "CZ",
            Self::Denmark => "DK",
            Self::Estonia => "EE",
            Self::Finland => "FI",
            Self::France => "FR",
            Self::Germany => "DE",
            Self::Greece => "GR",
            Self::Hungary => "HU",
            Self::Ireland => "IE",
            Self::Italy => "IT",
            Self::Latvia => "LV",
            Self::Lithuania => "LT",
            Self::Luxembourg => "LU",
            Self::Malta => "MT",
            Self::Netherlands => "NL",
            Self::Poland => "PL",
            Self::Portugal => "PT",
            Self::Romania => "RO",
            Self::Slovakia => "SK",
            Self::Slovenia => "SI",
            Self::Spain => "ES",
            Self::Sweden => "SE",
        }
    }

    /// Parse an uppercase ISO code. Case-sensitive: `"de"` is not Germany.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.code() == code)
    }

    /// Country prefix used by the VIES service (`EL` for Greece).
    pub fn vies_prefix(&self) -> &'static str {
        match self {
            Self::Greece => "EL",
            other => other.code(),
        }
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl TryFrom<String> for CountryCode {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_code(&value).ok_or_else(|| format!("'{value}' is not an EU member state"))
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.code().to_string()
    }
}

/// Check whether `code` is one of the 27 EU member states.
pub fn is_eu_country(code: &str) -> bool {
    CountryCode::from_code(code).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_states() {
        assert!(is_eu_country("DE"));
        assert!(is_eu_country("AT"));
        assert!(is_eu_country("GR"));
        assert!(is_eu_country("SE"));
    }

    #[test]
    fn non_members() {
        assert!(!is_eu_country("GB"));
        assert!(!is_eu_country("CH"));
        assert!(!is_eu_country("EL"));
        assert!(!is_eu_country("XX"));
        assert!(!is_eu_country(""));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert!(!is_eu_country("de"));
        assert!(!is_eu_country("De"));
    }

    #[test]
    fn codes_are_unique() {
        let mut codes: Vec<&str> = CountryCode::ALL.iter().map(|c| c.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 27);
    }

    #[test]
    fn code_round_trip() {
        for country in CountryCode::ALL {
            assert_eq!(CountryCode::from_code(country.code()), Some(country));
        }
    }

    #[test]
    fn greece_vies_prefix() {
        assert_eq!(CountryCode::Greece.code(), "GR");
        assert_eq!(CountryCode::Greece.vies_prefix(), "EL");
        assert_eq!(CountryCode::Germany.vies_prefix(), "DE");
    }

    #[test]
    fn serde_as_code() {
        let json = serde_json::to_string(&CountryCode::Netherlands).unwrap();
        assert_eq!(json, "\"NL\"");
        let back: CountryCode = serde_json::from_str("\"FR\"").unwrap();
        assert_eq!(back, CountryCode::France);
        assert!(serde_json::from_str::<CountryCode>("\"US\"").is_err());
    }
}
