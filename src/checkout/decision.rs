//! The engine's output record and the host-facing notices derived from it.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::{LocationCheckResult, ValidationResult};
use crate::vat::{VatNumber, validate_format};

/// Order metadata key the VAT number is stored under.
pub const ORDER_META_VAT_NUMBER: &str = "_vat_number";

const MSG_INVALID_VAT: &str = "Invalid VAT number. Please check and try again.";
const MSG_UNVERIFIED_VAT: &str =
    "Your VAT number could not be verified at this time. VAT has been charged on this order.";
const MSG_LOCATION_MISMATCH: &str = "Your billing country does not match your detected location. \
    Please update your billing information or confirm your location.";

/// Tax decision for one checkout evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxDecision {
    /// Whether VAT is charged at all. `false` means a verified exemption:
    /// the host skips tax computation for the order entirely.
    pub apply_vat: bool,
    /// Rate (percent) overriding the default line rate, set when the cart
    /// holds digital goods for an EU buyer. Resolved even when exempt;
    /// the exemption still wins.
    pub rate: Option<Decimal>,
    /// Declared vs. observed country. Advisory only.
    pub location_warning: Option<LocationCheckResult>,
    /// Outcome for the submitted VAT number; `None` if none was submitted.
    pub exemption: Option<ValidationResult>,
    /// The submitted number, when well-formed, for the host to persist.
    pub vat_number: Option<VatNumber>,
}

/// Severity of a checkout notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    /// Input must be corrected before the order can be placed.
    Error,
    /// Informational, never blocks checkout.
    Notice,
}

/// Message the host shows the buyer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutNotice {
    pub level: NoticeLevel,
    pub message: String,
}

impl CheckoutNotice {
    fn error(message: &str) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    fn notice(message: &str) -> Self {
        Self {
            level: NoticeLevel::Notice,
            message: message.into(),
        }
    }
}

impl TaxDecision {
    /// Whether a verified VAT number exempts the order.
    pub fn is_exempt(&self) -> bool {
        !self.apply_vat
    }

    /// Rate to charge on a line whose configured rate is `default_rate`.
    /// `None` means no tax line at all.
    pub fn effective_rate(&self, default_rate: Decimal) -> Option<Decimal> {
        if !self.apply_vat {
            return None;
        }
        Some(self.rate.unwrap_or(default_rate))
    }

    /// Tax owed on `net`, rounded half-up to cents. Zero when exempt.
    pub fn tax_amount(&self, net: Decimal, default_rate: Decimal) -> Decimal {
        match self.effective_rate(default_rate) {
            Some(rate) => (net * rate / Decimal::ONE_HUNDRED).round_dp_with_strategy(
                2,
                rust_decimal::RoundingStrategy::MidpointAwayFromZero,
            ),
            None => Decimal::ZERO,
        }
    }

    /// Metadata entry for the order record, if a well-formed number was given.
    pub fn order_meta(&self) -> Option<(&'static str, String)> {
        self.vat_number
            .as_ref()
            .map(|vat| (ORDER_META_VAT_NUMBER, vat.to_string()))
    }

    /// Notices to show for this decision, most severe first.
    pub fn notices(&self) -> Vec<CheckoutNotice> {
        let mut notices = Vec::new();
        match self.exemption {
            Some(ValidationResult::FormatInvalid | ValidationResult::Rejected) => {
                notices.push(CheckoutNotice::error(MSG_INVALID_VAT));
            }
            Some(ValidationResult::VerificationFailed) => {
                notices.push(CheckoutNotice::notice(MSG_UNVERIFIED_VAT));
            }
            _ => {}
        }
        if self.location_warning == Some(LocationCheckResult::Mismatch) {
            notices.push(CheckoutNotice::notice(MSG_LOCATION_MISMATCH));
        }
        notices
    }
}

/// Input-time check of the VAT field, run before the order is submitted.
///
/// Blank input is fine (the field is optional); a non-blank value must be
/// well-formed. No authority is consulted here.
pub fn validate_submission(vat_number: Option<&str>) -> Result<(), CheckoutNotice> {
    match vat_number.map(str::trim) {
        None | Some("") => Ok(()),
        Some(v) if validate_format(v).is_well_formed() => Ok(()),
        Some(_) => Err(CheckoutNotice::error(MSG_INVALID_VAT)),
    }
}
