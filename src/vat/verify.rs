//! Authority verification of format-valid VAT numbers.

use std::sync::Arc;

use tracing::warn;

use super::format::{VatNumber, parse_vat_number};
use crate::core::{CountryCode, ValidationResult, VerificationError};

/// An authority that can confirm a VAT number is registered.
///
/// Implementations performing I/O must bound the call with a timeout and
/// report outages as `Err`, never as `Ok(true)`.
pub trait VatVerifier: Send + Sync {
    /// Ask the authority about `body` issued by `country`.
    ///
    /// `Ok(true)` means registered, `Ok(false)` means the authority says it
    /// is not, `Err` means no answer could be obtained.
    fn verify(&self, country: CountryCode, body: &str) -> Result<bool, VerificationError>;

    /// Boolean form of [`verify`](Self::verify). Fails closed: any error is `false`.
    fn confirm(&self, country: CountryCode, body: &str) -> bool {
        match self.verify(country, body) {
            Ok(valid) => valid,
            Err(e) => {
                warn!(%country, error = %e, "VAT verification unavailable, not confirmed");
                false
            }
        }
    }

    /// Verify an already parsed number, keeping the failure kind.
    fn check(&self, vat: &VatNumber) -> ValidationResult {
        match self.verify(vat.country(), vat.body()) {
            Ok(true) => ValidationResult::Verified,
            Ok(false) => ValidationResult::Rejected,
            Err(e) => {
                warn!(vat_number = %vat, error = %e, "VAT verification failed");
                ValidationResult::VerificationFailed
            }
        }
    }
}

impl<T: VatVerifier + ?Sized> VatVerifier for Box<T> {
    fn verify(&self, country: CountryCode, body: &str) -> Result<bool, VerificationError> {
        (**self).verify(country, body)
    }
}

impl<T: VatVerifier + ?Sized> VatVerifier for Arc<T> {
    fn verify(&self, country: CountryCode, body: &str) -> Result<bool, VerificationError> {
        (**self).verify(country, body)
    }
}

/// Placeholder authority that confirms every number it is asked about.
///
/// This performs no registry lookup at all. It only makes sense when the
/// operator has explicitly chosen to trust format validation alone
/// ([`VerificationMode::TrustFormatOnly`](crate::core::VerificationMode)).
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatOnlyVerifier;

impl VatVerifier for FormatOnlyVerifier {
    fn verify(&self, _country: CountryCode, _body: &str) -> Result<bool, VerificationError> {
        Ok(true)
    }
}

/// Authority used when verification is required but no client is available.
/// Every call fails, so no exemption is ever granted.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableVerifier;

impl VatVerifier for UnavailableVerifier {
    fn verify(&self, _country: CountryCode, _body: &str) -> Result<bool, VerificationError> {
        Err(VerificationError::Unavailable)
    }
}

/// Format-validate `vat_number`, then ask `verifier` only if the format passed.
pub fn validate_and_verify(vat_number: &str, verifier: &dyn VatVerifier) -> ValidationResult {
    match parse_vat_number(vat_number) {
        Ok(vat) => verifier.check(&vat),
        Err(_) => ValidationResult::FormatInvalid,
    }
}
