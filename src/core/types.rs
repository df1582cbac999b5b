use serde::{Deserialize, Serialize};

/// Outcome of validating (and optionally verifying) a VAT number.
///
/// Only [`ValidationResult::Verified`] makes a buyer eligible for exemption.
/// The remaining variants keep the reason apart so a host can tell a typo
/// from an authority outage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationResult {
    /// Unknown prefix, no rule for the country, or body mismatch.
    FormatInvalid,
    /// Format passed; no authority check has been performed.
    FormatValidButUnverified,
    /// Format passed and the authority confirmed the number.
    Verified,
    /// Format passed but the authority says the number is not registered.
    Rejected,
    /// Format passed but the authority could not be reached or errored.
    VerificationFailed,
}

impl ValidationResult {
    /// Whether this result grants a VAT exemption.
    pub fn is_exempt_eligible(&self) -> bool {
        matches!(self, Self::Verified)
    }

    /// Whether the number at least has a valid format.
    pub fn is_well_formed(&self) -> bool {
        !matches!(self, Self::FormatInvalid)
    }
}

/// Declared billing country compared with the observed (IP) country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationCheckResult {
    /// Both countries are known and equal.
    Match,
    /// Both countries are known and differ.
    Mismatch,
    /// No observed country was available.
    Undeterminable,
}

/// How a cart item is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryType {
    /// Shipped goods.
    Physical,
    /// Electronically supplied goods.
    Digital,
    /// Files the buyer downloads.
    Downloadable,
    /// Services or goods with no delivery at all.
    Virtual,
}

impl DeliveryType {
    /// Digital, downloadable and virtual items are taxed at the buyer's country rate.
    pub fn is_digital(&self) -> bool {
        matches!(self, Self::Digital | Self::Downloadable | Self::Virtual)
    }
}

/// A cart line reduced to what the tax decision needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    /// Host product reference.
    pub product_id: String,
    /// Delivery classification.
    pub delivery: DeliveryType,
}

impl CartLineItem {
    pub fn new(product_id: impl Into<String>, delivery: DeliveryType) -> Self {
        Self {
            product_id: product_id.into(),
            delivery,
        }
    }

    pub fn physical(product_id: impl Into<String>) -> Self {
        Self::new(product_id, DeliveryType::Physical)
    }

    pub fn digital(product_id: impl Into<String>) -> Self {
        Self::new(product_id, DeliveryType::Digital)
    }
}
