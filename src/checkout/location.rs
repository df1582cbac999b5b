//! Declared billing country vs. observed (IP-derived) country.

use crate::core::LocationCheckResult;

/// Compare the declared billing country with the observed one.
///
/// An absent or empty observation is [`LocationCheckResult::Undeterminable`].
/// Comparison is exact and case-sensitive. The result is advisory: the
/// declared country is never replaced by the observed one.
pub fn check_location(declared: &str, observed: Option<&str>) -> LocationCheckResult {
    match observed {
        None | Some("") => LocationCheckResult::Undeterminable,
        Some(observed) if observed == declared => LocationCheckResult::Match,
        Some(_) => LocationCheckResult::Mismatch,
    }
}
