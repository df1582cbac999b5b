//! Core types: the EU country registry, rate table, result values,
//! errors and engine configuration.

mod config;
mod countries;
mod error;
mod rates;
mod types;

pub use config::*;
pub use countries::*;
pub use error::*;
pub use rates::{rate_for, standard_rate};
pub use types::*;
