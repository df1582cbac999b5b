//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::error::ConfigError;

/// Default bound on a remote verification call.
pub const DEFAULT_VERIFICATION_TIMEOUT_SECS: u64 = 30;

/// How a format-valid VAT number becomes eligible for exemption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMode {
    /// A verification authority must confirm the number. Without one,
    /// every number ends up `VerificationFailed` and tax is charged.
    #[default]
    RequireAuthority,
    /// Accept any format-valid number as verified. No registry is consulted.
    TrustFormatOnly,
}

/// Settings for building a [`TaxDecisionEngine`](crate::checkout::TaxDecisionEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Verification policy.
    pub verification: VerificationMode,
    /// Upper bound for one authority call, in seconds.
    pub verification_timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            verification: VerificationMode::default(),
            verification_timeout_secs: DEFAULT_VERIFICATION_TIMEOUT_SECS,
        }
    }
}

impl EngineConfig {
    /// Config that trusts format validation alone.
    pub fn trust_format_only() -> Self {
        Self {
            verification: VerificationMode::TrustFormatOnly,
            ..Self::default()
        }
    }

    pub fn verification_timeout(&self) -> Duration {
        Duration::from_secs(self.verification_timeout_secs)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.verification_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                field: "verification_timeout_secs",
                message: "must be greater than zero".into(),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON config document. Missing fields take defaults.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}
