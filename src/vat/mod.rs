//! VAT number format validation and authority verification.
//!
//! Format rules are one flat table keyed by member state. Verification goes
//! through the [`VatVerifier`] trait; with the `vies` feature a client for the
//! EU VIES service is available.
//!
//! # Example
//!
//! ```
//! use eu_vat_checkout::core::ValidationResult;
//! use eu_vat_checkout::vat::*;
//!
//! // Format-only validation (no network)
//! assert_eq!(validate_format("DE123456789"), ValidationResult::FormatValidButUnverified);
//! assert_eq!(validate_format("DE12345678"), ValidationResult::FormatInvalid);
//!
//! // Verification fails closed when no authority is available
//! assert_eq!(
//!     validate_and_verify("DE123456789", &UnavailableVerifier),
//!     ValidationResult::VerificationFailed
//! );
//! ```

mod format;
mod verify;
#[cfg(feature = "vies")]
mod vies;

pub use format::{VatNumber, parse_vat_number, validate_format};
pub use verify::{FormatOnlyVerifier, UnavailableVerifier, VatVerifier, validate_and_verify};
#[cfg(feature = "vies")]
pub use vies::{ViesResult, ViesVerifier, check_vies};
