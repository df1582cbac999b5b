//! # eu-vat-checkout
//!
//! VAT decisions for EU e-commerce checkouts: is the buyer's VAT number
//! well-formed for its member state, is it confirmed by an authority, does
//! the declared billing country agree with the observed one, and which rate
//! applies to digital goods.
//!
//! All rates use [`rust_decimal::Decimal`] — never floating point. The crate
//! does no rendering, persistence or geolocation; the host passes plain
//! values in and gets plain values back.
//!
//! ## Quick Start
//!
//! ```rust
//! use eu_vat_checkout::checkout::TaxDecisionEngine;
//! use eu_vat_checkout::core::*;
//! use rust_decimal_macros::dec;
//!
//! let engine = TaxDecisionEngine::trust_format_only();
//!
//! // Verified business buyer: no VAT at all
//! let decision = engine.decide(Some("DE123456789"), &[], "DE", Some("DE"));
//! assert!(!decision.apply_vat);
//!
//! // Consumer buying an e-book from France: French standard rate
//! let decision = engine.decide(None, &[CartLineItem::digital("ebook")], "FR", None);
//! assert_eq!(decision.effective_rate(dec!(19)), Some(dec!(20)));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Country registry, format rules, engine |
//! | `json` | `EngineConfig::from_json` |
//! | `vies` | VIES verification client (blocking and async) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "core")]
pub mod vat;

#[cfg(feature = "core")]
pub mod checkout;

// Re-export the entry points at crate root for convenience
#[cfg(feature = "core")]
pub use crate::checkout::{TaxDecision, TaxDecisionEngine, check_location};
#[cfg(feature = "core")]
pub use crate::vat::{VatVerifier, validate_format};
