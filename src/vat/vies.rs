//! EU VIES REST API client for VAT number verification.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::verify::VatVerifier;
use crate::core::{CountryCode, VerificationError};

const VIES_URL: &str = "https://ec.europa.eu/taxation_customs/vies/rest-api/check-vat-number";

/// Result of a VIES VAT number check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViesResult {
    /// Whether the VAT number is currently valid.
    pub valid: bool,
    /// Date VIES answered the request.
    pub request_date: Option<NaiveDate>,
    /// Registered company name (if disclosed).
    pub name: Option<String>,
    /// Registered address (if disclosed).
    pub address: Option<String>,
}

/// VIES API response structure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ViesApiResponse {
    valid: Option<bool>,
    request_date: Option<String>,
    name: Option<String>,
    address: Option<String>,
    // Error fields
    error_wrappers: Option<Vec<ViesErrorWrapper>>,
}

#[derive(Debug, Deserialize)]
struct ViesErrorWrapper {
    error: Option<String>,
    message: Option<String>,
}

/// VIES API request body.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ViesRequest<'a> {
    country_code: &'static str,
    vat_number: &'a str,
}

impl<'a> ViesRequest<'a> {
    fn new(country: CountryCode, body: &'a str) -> Self {
        Self {
            country_code: country.vies_prefix(),
            vat_number: body,
        }
    }
}

/// VIES reports undisclosed fields as `---`.
fn disclosed(value: Option<String>) -> Option<String> {
    value.filter(|v| v != "---" && !v.is_empty())
}

/// Turn an HTTP status and body into a result. `requestDate` may carry a
/// time or offset suffix; only the date part is kept.
fn interpret(status: StatusCode, body: &str) -> Result<ViesResult, VerificationError> {
    if !status.is_success() {
        return Err(VerificationError::Api(format!("HTTP {status}: {body}")));
    }

    let resp: ViesApiResponse =
        serde_json::from_str(body).map_err(|e| VerificationError::Parse(e.to_string()))?;

    if let Some(err) = resp.error_wrappers.as_ref().and_then(|errors| errors.first()) {
        let msg = err
            .message
            .clone()
            .or_else(|| err.error.clone())
            .unwrap_or_else(|| "unknown error".into());
        return Err(VerificationError::Api(msg));
    }

    let Some(valid) = resp.valid else {
        return Err(VerificationError::Parse("missing 'valid' field".into()));
    };

    let request_date = resp
        .request_date
        .as_deref()
        .and_then(|d| d.get(..10))
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

    Ok(ViesResult {
        valid,
        request_date,
        name: disclosed(resp.name),
        address: disclosed(resp.address),
    })
}

/// Blocking VIES client, usable as the engine's verification authority.
///
/// Uses reqwest's blocking client, so it must not be called from inside an
/// async runtime. Async hosts should use [`check_vies`] instead.
#[derive(Debug, Clone)]
pub struct ViesVerifier {
    client: reqwest::blocking::Client,
}

impl ViesVerifier {
    /// Build a client whose calls give up after `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, VerificationError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| VerificationError::Network(e.to_string()))?;
        Ok(Self { client })
    }

    /// Full VIES answer for one number.
    pub fn lookup(&self, country: CountryCode, body: &str) -> Result<ViesResult, VerificationError> {
        let resp = self
            .client
            .post(VIES_URL)
            .json(&ViesRequest::new(country, body))
            .send()
            .map_err(|e| VerificationError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| VerificationError::Network(e.to_string()))?;
        let result = interpret(status, &text)?;
        debug!(%country, valid = result.valid, "VIES answered");
        Ok(result)
    }
}

impl VatVerifier for ViesVerifier {
    fn verify(&self, country: CountryCode, body: &str) -> Result<bool, VerificationError> {
        self.lookup(country, body).map(|r| r.valid)
    }
}

/// Check a VAT number against VIES from async code.
///
/// `body` is the number without its country prefix.
///
/// # Errors
///
/// `VerificationError::Network` on connection issues or timeout,
/// `VerificationError::Api` if a member state is unavailable,
/// `VerificationError::Parse` on unexpected response formats.
///
/// ```no_run
/// use std::time::Duration;
/// use eu_vat_checkout::core::{CountryCode, VerificationError};
/// use eu_vat_checkout::vat::check_vies;
///
/// async fn lookup() -> Result<(), VerificationError> {
///     let result = check_vies(CountryCode::Germany, "123456789", Duration::from_secs(30)).await?;
///     if result.valid {
///         println!("registered to {}", result.name.as_deref().unwrap_or("(undisclosed)"));
///     }
///     Ok(())
/// }
/// ```
pub async fn check_vies(
    country: CountryCode,
    body: &str,
    timeout: Duration,
) -> Result<ViesResult, VerificationError> {
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| VerificationError::Network(e.to_string()))?;

    let resp = client
        .post(VIES_URL)
        .json(&ViesRequest::new(country, body))
        .send()
        .await
        .map_err(|e| VerificationError::Network(e.to_string()))?;

    let status = resp.status();
    let text = resp
        .text()
        .await
        .map_err(|e| VerificationError::Network(e.to_string()))?;
    interpret(status, &text)
}
