//! Monetary value object.

use serde::{Deserialize, Serialize};

/// A non-negative monetary amount in the smallest currency unit (cents).
///
/// Integer cents keep `unit_price * quantity` exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    /// Multiply by a quantity; `None` on overflow.
    pub fn checked_mul(self, quantity: u32) -> Option<Money> {
        self.0.checked_mul(u64::from(quantity)).map(Money)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn displays_as_dollars_and_cents() {
        assert_eq!(Money::from_cents(9198).to_string(), "$91.98");
        assert_eq!(Money::from_cents(5).to_string(), "$0.05");
        assert_eq!(Money::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn checked_mul_reports_overflow() {
        assert_eq!(Money::from_cents(u64::MAX).checked_mul(2), None);
        assert_eq!(
            Money::from_cents(4599).checked_mul(2),
            Some(Money::from_cents(9198))
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: multiplication by a quantity is exact integer arithmetic.
        #[test]
        fn checked_mul_is_exact(cents in 0u64..10_000_000u64, qty in 0u32..10_000u32) {
            let total = Money::from_cents(cents).checked_mul(qty).unwrap();
            prop_assert_eq!(total.cents(), cents * u64::from(qty));
        }
    }
}
