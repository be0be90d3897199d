//! Phone number value type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A phone number split into country calling code and national number.
///
/// A value type: it has no identity beyond the [`Verifiable`] wrapper that
/// carries it.
///
/// [`Verifiable`]: crate::attribute::Verifiable
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber {
    /// ITU country calling code (always positive).
    pub country_code: u32,
    /// National number as a digit string.
    pub number: String,
}

impl PhoneNumber {
    pub fn new(country_code: u32, number: impl Into<String>) -> Self {
        Self {
            country_code,
            number: number.into(),
        }
    }

    /// Canonical `+<country><digits>` form with separators stripped.
    pub fn normalized(&self) -> String {
        let digits: String = self
            .number
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        format!("+{}{}", self.country_code, digits)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "+{} {}", self.country_code, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_strips_separators() {
        let phone = PhoneNumber::new(44, "7700 900-123");
        assert_eq!(phone.normalized(), "+447700900123");
    }

    #[test]
    fn normalized_equal_for_equivalent_inputs() {
        let a = PhoneNumber::new(1, "555 0100");
        let b = PhoneNumber::new(1, "5550100");
        assert_eq!(a.normalized(), b.normalized());
        assert_ne!(a, b);
    }
}
