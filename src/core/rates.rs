//! Standard VAT rates per EU member state.
//!
//! Used for the cross-border digital-goods case, where VAT is charged at the
//! buyer's country rate. These change occasionally and must be kept current.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::countries::CountryCode;

/// Standard VAT rate in percent, one entry per member state.
static STANDARD_RATES: &[(CountryCode, Decimal)] = &[
    (CountryCode::Austria, dec!(20)),
    (CountryCode::Belgium, dec!(21)),
    (CountryCode::Bulgaria, dec!(20)),
    (CountryCode::Croatia, dec!(25)),
    (CountryCode::Cyprus, dec!(19)),
    (CountryCode::Czechia, dec!(21)),
    (CountryCode::Denmark, dec!(25)),
    (CountryCode::Estonia, dec!(20)),
    (CountryCode::Finland, dec!(24)),
    (CountryCode::France, dec!(20)),
    (CountryCode::Germany, dec!(19)),
    (CountryCode::Greece, dec!(24)),
    (CountryCode::Hungary, dec!(27)),
    (CountryCode::Ireland, dec!(23)),
    (CountryCode::Italy, dec!(22)),
    (CountryCode::Latvia, dec!(21)),
    (CountryCode::Lithuania, dec!(21)),
    (CountryCode::Luxembourg, dec!(17)),
    (CountryCode::Malta, dec!(18)),
    (CountryCode::Netherlands, dec!(21)),
    (CountryCode::Poland, dec!(23)),
    (CountryCode::Portugal, dec!(23)),
    (CountryCode::Romania, dec!(19)),
    (CountryCode::Slovakia, dec!(20)),
    (CountryCode::Slovenia, dec!(22)),
    (CountryCode::Spain, dec!(21)),
    (CountryCode::Sweden, dec!(25)),
];

/// Standard VAT rate (percent) for a member state.
pub fn rate_for(country: CountryCode) -> Option<Decimal> {
    STANDARD_RATES
        .iter()
        .find(|(c, _)| *c == country)
        .map(|&(_, rate)| rate)
}

/// Standard VAT rate (percent) for an ISO code; `None` for non-EU codes.
pub fn standard_rate(code: &str) -> Option<Decimal> {
    CountryCode::from_code(code).and_then(rate_for)
}
