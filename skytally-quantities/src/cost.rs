use std::{
    fmt::{Debug, Display, Formatter},
    ops::Mul,
};

use serde::{Deserialize, Serialize};

/// Money in United States dollars.
#[repr(transparent)]
#[must_use]
#[derive(
    Clone,
    Copy,
    Default,
    Deserialize,
    Serialize,
    derive_more::Add,
    derive_more::AddAssign,
    derive_more::From,
    derive_more::FromStr,
    derive_more::Neg,
    derive_more::Sub,
    derive_more::SubAssign,
    derive_more::Sum,
)]
pub struct Cost(pub f64);

impl Cost {
    pub const ONE_CENT: Self = Self(0.01);
    pub const ZERO: Self = Self(0.0);

    /// Round to whole cents. Display-level only: stored amounts stay exact.
    pub fn round_to_cents(self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }
}

impl Display for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Debug for Cost {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Mul<f64> for Cost {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Self(self.0 * rhs)
    }
}

ordered_float!(Cost);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_round_to_cents() {
        assert_abs_diff_eq!(Cost::from(10.504_9).round_to_cents().0, 10.5);
        assert_abs_diff_eq!(Cost::from(10.505_1).round_to_cents().0, 10.51);
        assert_eq!(Cost::from(-0.005_1).round_to_cents(), -Cost::ONE_CENT);
    }

    #[test]
    fn test_display() {
        assert_eq!(Cost::from(10.5).to_string(), "$10.50");
        assert_eq!(Cost::ZERO.to_string(), "$0.00");
    }

    #[test]
    fn test_ordering() {
        assert!(Cost::from(9.04) < Cost::from(10.5));
        assert_eq!(Cost::from(-0.0), Cost::ZERO);
    }
}
