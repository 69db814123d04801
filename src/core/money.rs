//! Monetary amounts.

use serde::{Deserialize, Serialize};

/// A non-negative monetary amount.
///
/// Box values are arbitrary non-negative reals chosen by the host, so this
/// wraps an `f64`. Validation happens at setup (see `BoxRegistry::assign_values`);
/// the type itself does not reject values.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(pub f64);

impl Money {
    /// Zero dollars.
    pub const ZERO: Money = Money(0.0);

    /// Create an amount.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// The raw amount.
    #[must_use]
    pub const fn amount(self) -> f64 {
        self.0
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self(amount)
    }
}

/// Renders as `$1,234.50`.
impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }

        let sign = if self.0 < 0.0 { "-" } else { "" };
        write!(f, "{sign}${grouped}.{cents}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_small() {
        assert_eq!(Money::new(0.0).to_string(), "$0.00");
        assert_eq!(Money::new(5.5).to_string(), "$5.50");
        assert_eq!(Money::new(999.0).to_string(), "$999.00");
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Money::new(1000.0).to_string(), "$1,000.00");
        assert_eq!(Money::new(1234.5).to_string(), "$1,234.50");
        assert_eq!(Money::new(1_000_000.0).to_string(), "$1,000,000.00");
    }

    #[test]
    fn test_ordering() {
        assert!(Money::new(50.0) < Money::new(75.0));
        assert_eq!(Money::ZERO, Money::default());
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Money::new(250.0)).unwrap();
        assert_eq!(json, "250.0");
        let back: Money = serde_json::from_str("300").unwrap();
        assert_eq!(back, Money::new(300.0));
    }
}
