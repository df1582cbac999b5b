use thiserror::Error;

/// Why a VAT number failed format validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid VAT number '{value}': {reason}")]
pub struct VatFormatError {
    /// The rejected input.
    pub value: String,
    /// Which check failed.
    pub reason: FormatFailure,
}

impl VatFormatError {
    pub(crate) fn new(value: impl Into<String>, reason: FormatFailure) -> Self {
        Self {
            value: value.into(),
            reason,
        }
    }
}

/// The specific format check a VAT number failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum FormatFailure {
    /// Fewer than 3 characters: no room for a prefix and a body.
    #[error("too short, must be at least 3 characters")]
    TooShort,
    /// The first two characters are not an EU member state code.
    #[error("unknown country prefix '{0}'")]
    UnknownCountry(String),
    /// No body rule is registered for the country.
    #[error("no format rule for country {0}")]
    NoRule(String),
    /// The body does not match the country's pattern.
    #[error("invalid format for country {0}")]
    BodyMismatch(String),
}

/// Failure of the authority verification call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum VerificationError {
    /// No authority is configured, so nothing can be confirmed.
    #[error("no verification authority available")]
    Unavailable,
    /// Network, TLS or timeout error talking to the authority.
    #[error("verification network error: {0}")]
    Network(String),
    /// The authority answered with an error (e.g. member state unavailable).
    #[error("verification API error: {0}")]
    Api(String),
    /// The authority's response could not be understood.
    #[error("verification parse error: {0}")]
    Parse(String),
}

/// Invalid engine configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// A field holds a value outside its allowed range.
    #[error("invalid config value for '{field}': {message}")]
    Invalid {
        field: &'static str,
        message: String,
    },

    /// The verification client could not be built.
    #[error("verification client error: {0}")]
    Verifier(#[from] VerificationError),

    /// The config document could not be parsed.
    #[cfg(feature = "json")]
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
