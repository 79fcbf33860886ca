//! Phone number cleanup for the SNS opt-in flow.

use once_cell::sync::Lazy;
use regex::Regex;

/// Normalizer output for input without any digits.
pub const SENTINEL: &str = "+";

/// Country code prepended when the cleaned number does not start with it.
pub const DEFAULT_COUNTRY_CODE: char = '1';

static NON_DIGITS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^0-9]+").expect("non-digit pattern is valid"));

/// Strip everything but ASCII digits and add the `+` / country code prefix.
///
/// Digits not starting with [`DEFAULT_COUNTRY_CODE`] get it prepended. Input
/// without digits yields exactly [`SENTINEL`].
///
/// ```rust
/// use sns_optin::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("555-123-4567"), "+15551234567");
/// assert_eq!(normalize_phone_number("+1 555 123 4567"), "+15551234567");
/// assert_eq!(normalize_phone_number("abc"), "+");
/// ```
pub fn normalize_phone_number(raw: &str) -> String {
    let digits = NON_DIGITS.replace_all(raw, "");

    match digits.chars().next() {
        None => SENTINEL.to_string(),
        Some(DEFAULT_COUNTRY_CODE) => format!("{SENTINEL}{digits}"),
        Some(_) => format!("{SENTINEL}{DEFAULT_COUNTRY_CODE}{digits}"),
    }
}
