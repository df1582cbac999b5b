use std::fmt;

use tracing::{debug, info, warn};

use super::decision::TaxDecision;
use super::digital::digital_goods_rate;
use super::location::check_location;
use crate::core::{
    CartLineItem, ConfigError, EngineConfig, LocationCheckResult, ValidationResult,
    VerificationMode,
};
use crate::vat::{FormatOnlyVerifier, VatNumber, VatVerifier, parse_vat_number};

/// Decides per checkout whether VAT is charged and at which rate.
///
/// Holds nothing but the verification authority, so one engine can serve
/// any number of concurrent checkouts.
///
/// ```
/// use eu_vat_checkout::checkout::TaxDecisionEngine;
/// use eu_vat_checkout::core::{CartLineItem, LocationCheckResult};
/// use rust_decimal_macros::dec;
///
/// let engine = TaxDecisionEngine::trust_format_only();
/// let decision = engine.decide(None, &[CartLineItem::digital("ebook")], "FR", None);
/// assert!(decision.apply_vat);
/// assert_eq!(decision.rate, Some(dec!(20)));
/// assert_eq!(decision.location_warning, Some(LocationCheckResult::Undeterminable));
/// ```
pub struct TaxDecisionEngine {
    verifier: Box<dyn VatVerifier>,
}

impl fmt::Debug for TaxDecisionEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaxDecisionEngine").finish_non_exhaustive()
    }
}

impl TaxDecisionEngine {
    /// Engine backed by the given verification authority.
    pub fn new(verifier: impl VatVerifier + 'static) -> Self {
        Self {
            verifier: Box::new(verifier),
        }
    }

    /// Engine that treats every format-valid number as verified.
    ///
    /// No registry is consulted. Use only when format checking is an
    /// accepted risk for the shop.
    pub fn trust_format_only() -> Self {
        Self::new(FormatOnlyVerifier)
    }

    /// Build an engine from configuration.
    ///
    /// `RequireAuthority` uses the VIES client when the `vies` feature is
    /// enabled; otherwise no authority exists and exemption is never granted.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let engine = match config.verification {
            VerificationMode::TrustFormatOnly => Self::trust_format_only(),
            VerificationMode::RequireAuthority => Self::with_authority(config)?,
        };
        debug!(mode = ?config.verification, "tax decision engine ready");
        Ok(engine)
    }

    #[cfg(feature = "vies")]
    fn with_authority(config: &EngineConfig) -> Result<Self, ConfigError> {
        let vies = crate::vat::ViesVerifier::new(config.verification_timeout())?;
        Ok(Self::new(vies))
    }

    #[cfg(not(feature = "vies"))]
    fn with_authority(_config: &EngineConfig) -> Result<Self, ConfigError> {
        warn!("no VAT verification authority compiled in, exemptions will not be granted");
        Ok(Self::new(crate::vat::UnavailableVerifier))
    }

    /// Validate and verify a submitted VAT number.
    ///
    /// Form input is trimmed first and blank input counts as "no number".
    /// The authority is only asked once the format has passed.
    pub fn evaluate_exemption(
        &self,
        vat_number: Option<&str>,
    ) -> (Option<ValidationResult>, Option<VatNumber>) {
        let Some(raw) = vat_number.map(str::trim).filter(|v| !v.is_empty()) else {
            return (None, None);
        };
        match parse_vat_number(raw) {
            Ok(vat) => (Some(self.verifier.check(&vat)), Some(vat)),
            Err(e) => {
                debug!(error = %e, "VAT number rejected by format");
                (Some(ValidationResult::FormatInvalid), None)
            }
        }
    }

    /// Decide VAT treatment for one checkout.
    ///
    /// Exemption and the digital-goods rate are evaluated independently;
    /// when both apply the exemption wins and no VAT is charged. The
    /// location check is attached as advice and never changes the outcome.
    pub fn decide(
        &self,
        vat_number: Option<&str>,
        items: &[CartLineItem],
        declared_country: &str,
        observed_country: Option<&str>,
    ) -> TaxDecision {
        let (exemption, vat_number) = self.evaluate_exemption(vat_number);
        let exempt = exemption.is_some_and(|r| r.is_exempt_eligible());
        if exempt {
            info!(declared_country, "VAT exemption granted");
        }

        let rate = digital_goods_rate(items, declared_country);

        let location = check_location(declared_country, observed_country);
        if location == LocationCheckResult::Mismatch {
            warn!(
                declared_country,
                observed_country = observed_country.unwrap_or_default(),
                "billing country does not match detected location"
            );
        }

        let decision = TaxDecision {
            apply_vat: !exempt,
            rate,
            location_warning: Some(location),
            exemption,
            vat_number,
        };
        debug!(
            declared_country,
            apply_vat = decision.apply_vat,
            rate = ?decision.rate,
            location = ?location,
            "tax decision"
        );
        decision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CountryCode, VerificationError};
    use rust_decimal_macros::dec;

    struct Down;

    impl VatVerifier for Down {
        fn verify(&self, _: CountryCode, _: &str) -> Result<bool, VerificationError> {
            Err(VerificationError::Network("connection refused".into()))
        }
    }

    struct NotRegistered;

    impl VatVerifier for NotRegistered {
        fn verify(&self, _: CountryCode, _: &str) -> Result<bool, VerificationError> {
            Ok(false)
        }
    }

    #[test]
    fn verified_number_exempts() {
        let d = TaxDecisionEngine::trust_format_only().decide(Some("DE123456789"), &[], "DE", Some("DE"));
        assert!(!d.apply_vat);
        assert_eq!(d.exemption, Some(ValidationResult::Verified));
        assert_eq!(d.location_warning, Some(LocationCheckResult::Match));
    }

    #[test]
    fn no_number_never_exempts() {
        let d = TaxDecisionEngine::trust_format_only().decide(None, &[], "DE", None);
        assert!(d.apply_vat);
        assert_eq!(d.exemption, None);
        assert_eq!(d.rate, None);
    }

    #[test]
    fn blank_number_is_no_number() {
        let d = TaxDecisionEngine::trust_format_only().decide(Some("  "), &[], "DE", None);
        assert!(d.apply_vat);
        assert_eq!(d.exemption, None);
    }

    #[test]
    fn padded_form_input_is_trimmed() {
        let d = TaxDecisionEngine::trust_format_only().decide(Some(" DE123456789\n"), &[], "DE", None);
        assert!(!d.apply_vat);
        assert_eq!(d.vat_number.map(|v| v.to_string()).as_deref(), Some("DE123456789"));
    }

    #[test]
    fn malformed_number_charges_tax() {
        let d = TaxDecisionEngine::trust_format_only().decide(Some("DE12"), &[], "DE", None);
        assert!(d.apply_vat);
        assert_eq!(d.exemption, Some(ValidationResult::FormatInvalid));
        assert!(d.vat_number.is_none());
    }

    #[test]
    fn outage_fails_closed() {
        let d = TaxDecisionEngine::new(Down).decide(Some("DE123456789"), &[], "DE", None);
        assert!(d.apply_vat);
        assert_eq!(d.exemption, Some(ValidationResult::VerificationFailed));
        assert_eq!(d.vat_number.map(|v| v.to_string()).as_deref(), Some("DE123456789"));
    }

    #[test]
    fn authority_rejection_charges_tax() {
        let d = TaxDecisionEngine::new(NotRegistered).decide(Some("DE123456789"), &[], "DE", None);
        assert!(d.apply_vat);
        assert_eq!(d.exemption, Some(ValidationResult::Rejected));
    }

    #[test]
    fn exemption_wins_over_digital_rate() {
        let items = [CartLineItem::digital("ebook")];
        let d = TaxDecisionEngine::trust_format_only().decide(Some("DE123456789"), &items, "DE", Some("IT"));
        assert!(!d.apply_vat);
        assert_eq!(d.rate, Some(dec!(19)));
        assert_eq!(d.effective_rate(dec!(19)), None);
        assert_eq!(d.location_warning, Some(LocationCheckResult::Mismatch));
    }

    #[test]
    fn mismatch_does_not_change_outcome() {
        let engine = TaxDecisionEngine::trust_format_only();
        let items = [CartLineItem::digital("ebook")];
        let here = engine.decide(None, &items, "FR", Some("FR"));
        let away = engine.decide(None, &items, "FR", Some("US"));
        assert_eq!(here.apply_vat, away.apply_vat);
        assert_eq!(here.rate, away.rate);
    }

    #[test]
    fn config_trust_format_only() {
        let engine = TaxDecisionEngine::from_config(&EngineConfig::trust_format_only()).unwrap();
        assert!(!engine.decide(Some("ATU12345678"), &[], "AT", None).apply_vat);
    }

    #[test]
    fn config_zero_timeout_rejected() {
        let config = EngineConfig {
            verification_timeout_secs: 0,
            ..EngineConfig::default()
        };
        assert!(TaxDecisionEngine::from_config(&config).is_err());
    }

    #[cfg(not(feature = "vies"))]
    #[test]
    fn require_authority_without_client_never_exempts() {
        let engine = TaxDecisionEngine::from_config(&EngineConfig::default()).unwrap();
        let d = engine.decide(Some("DE123456789"), &[], "DE", Some("DE"));
        assert!(d.apply_vat);
        assert_eq!(d.exemption, Some(ValidationResult::VerificationFailed));
    }

    #[test]
    fn engine_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TaxDecisionEngine>();
    }
}
