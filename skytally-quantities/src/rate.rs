use std::ops::Mul;

use crate::{
    cost::Cost,
    storage::Gigabytes,
    time::{Hours, Months},
};

quantity!(
    /// Price of one compute hour.
    HourlyRate, via: f64, suffix: "$/h", precision: 3
);

quantity!(
    /// Price of keeping one gigabyte for one month.
    GigabyteMonthRate, via: f64, suffix: "$/GB·mo", precision: 3
);

quantity!(
    /// Flat price per month.
    MonthlyRate, via: f64, suffix: "$/mo", precision: 3
);

quantity!(
    /// Price of one operating system license.
    LicenseRate, via: f64, suffix: "$/license", precision: 3
);

implement_mul!(HourlyRate, Hours, Cost);
implement_mul!(GigabyteMonthRate, Gigabytes, Cost);
implement_mul!(MonthlyRate, Months, Cost);

impl Mul<u32> for LicenseRate {
    type Output = Cost;

    fn mul(self, rhs: u32) -> Self::Output {
        Cost::from(self.0 * f64::from(rhs))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_rate_times_amount() {
        assert_abs_diff_eq!((HourlyRate::from(0.005) * Hours::from(10.0)).0, 0.05);
        assert_abs_diff_eq!((GigabyteMonthRate::from(0.02) * Gigabytes::from(100.0)).0, 2.0);
        assert_abs_diff_eq!((MonthlyRate::from(0.05) * Months::from(2.0)).0, 0.1);
        assert_abs_diff_eq!((LicenseRate::from(0.01) * 3).0, 0.03, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(HourlyRate::from(0.005).to_string(), "0.005 $/h");
        assert_eq!(GigabyteMonthRate::from(0.02).to_string(), "0.020 $/GB·mo");
    }
}
