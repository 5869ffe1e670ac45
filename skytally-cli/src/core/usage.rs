use std::fmt::{Display, Formatter};

use bon::Builder;
use skytally_quantities::{
    storage::Gigabytes,
    time::{Hours, Months},
};

/// Operating system of the workload. Tracked alongside the other inputs but
/// not priced: license costs charge per seat whatever the system is.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, clap::ValueEnum)]
pub enum Os {
    #[default]
    Windows,
    Linux,
}

impl Os {
    pub const fn toggled(self) -> Self {
        match self {
            Self::Windows => Self::Linux,
            Self::Linux => Self::Windows,
        }
    }
}

impl Display for Os {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Windows => write!(f, "Windows"),
            Self::Linux => write!(f, "Linux"),
        }
    }
}

/// On-premise workload as entered by the user.
///
/// Amounts are taken as they come: negative values are accepted and flow
/// through the arithmetic unchanged.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Builder)]
pub struct UsageInput {
    #[builder(default)]
    pub compute_hours: Hours,

    #[builder(default)]
    pub storage_gb: Gigabytes,

    #[builder(default)]
    pub backup_data_gb: Gigabytes,

    #[builder(default)]
    pub duration_months: Months,

    #[allow(dead_code)]
    #[builder(default)]
    pub os_type: Os,

    #[builder(default)]
    pub num_licenses: u32,
}

impl UsageInput {
    /// Replace non-finite amounts with zero, so that an empty or garbled
    /// field can never leak `NaN` into a total.
    pub fn sanitized(mut self) -> Self {
        self.compute_hours = Hours(finite_or_zero(self.compute_hours.0));
        self.storage_gb = Gigabytes(finite_or_zero(self.storage_gb.0));
        self.backup_data_gb = Gigabytes(finite_or_zero(self.backup_data_gb.0));
        self.duration_months = Months(finite_or_zero(self.duration_months.0));
        self
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
