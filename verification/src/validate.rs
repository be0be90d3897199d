//! Format validation and normalization for contact attributes.
//!
//! Pragmatic shape checks, not full RFC validation: the goal is to reject
//! obvious garbage before a code is ever sent, while the mailbox/number
//! itself is proven by the confirmation round-trip.

use veridian_types::PhoneNumber;

/// Maximum accepted length of an email address.
const MAX_EMAIL_LEN: usize = 254;

/// Accepted range of national-number digits.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 4..=14;

/// Shape check: `local@domain` with a dotted, non-empty domain.
pub fn is_valid_email(address: &str) -> bool {
    let trimmed = address.trim();
    if trimmed.is_empty() || trimmed.len() > MAX_EMAIL_LEN {
        return false;
    }
    if trimmed.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = trimmed.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|part| !part.is_empty())
}

/// Canonical form used for duplicate detection: trimmed and lowercased.
pub fn normalize_email(address: &str) -> String {
    address.trim().to_lowercase()
}

/// Positive country code and a plausible digit count; spaces and dashes
/// are accepted as separators.
pub fn is_valid_phone(phone: &PhoneNumber) -> bool {
    if phone.country_code == 0 || phone.country_code > 999 {
        return false;
    }
    if !phone
        .number
        .chars()
        .all(|c| c.is_ascii_digit() || c == ' ' || c == '-')
    {
        return false;
    }
    let digits = phone.number.chars().filter(|c| c.is_ascii_digit()).count();
    PHONE_DIGITS.contains(&digits)
}
