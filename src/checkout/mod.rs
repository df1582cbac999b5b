//! Checkout-time tax decisions.
//!
//! The host calls [`TaxDecisionEngine::decide`] with plain data from its
//! checkout pipeline and maps the returned [`TaxDecision`] onto its own tax
//! lines. [`check_location`] and [`validate_submission`] are available
//! separately for hosts that run them at other points of the flow.

mod decision;
mod digital;
mod engine;
mod location;

pub use decision::{
    CheckoutNotice, NoticeLevel, ORDER_META_VAT_NUMBER, TaxDecision, validate_submission,
};
pub use digital::{digital_goods_rate, has_digital_goods};
pub use engine::TaxDecisionEngine;
pub use location::check_location;
