//! Destination-country VAT rate for digital goods.

use rust_decimal::Decimal;

use crate::core::{CartLineItem, standard_rate};

/// Whether any line in the cart is digital, downloadable or virtual.
pub fn has_digital_goods(items: &[CartLineItem]) -> bool {
    items.iter().any(|item| item.delivery.is_digital())
}

/// Rate that overrides the default line rate for this order, if any.
///
/// Applies when the cart holds at least one digital item and the declared
/// billing country is an EU member state: the buyer's standard rate is used.
pub fn digital_goods_rate(items: &[CartLineItem], declared_country: &str) -> Option<Decimal> {
    if !has_digital_goods(items) {
        return None;
    }
    standard_rate(declared_country)
}
