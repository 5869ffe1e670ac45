use std::{collections::BTreeMap, fmt::Debug, fs, path::Path};

use serde::{Deserialize, Serialize};
use skytally_quantities::rate::{GigabyteMonthRate, HourlyRate, LicenseRate, MonthlyRate};

use crate::{pricing::provider::Provider, prelude::*};

/// Unit prices of a single platform.
#[must_use]
#[derive(Copy, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ProviderRates {
    pub compute_price_per_hour: HourlyRate,
    pub storage_price_per_gb_month: GigabyteMonthRate,
    pub archive_price_per_gb_month: GigabyteMonthRate,
    pub backup_price_per_gb_month: GigabyteMonthRate,
    pub networking_price_per_month: MonthlyRate,
    pub os_price_per_license: LicenseRate,
}

impl ProviderRates {
    /// Built-in prices of the given platform.
    const fn built_in(provider: Provider) -> Self {
        match provider {
            Provider::Aws => Self {
                compute_price_per_hour: HourlyRate(0.005),
                storage_price_per_gb_month: GigabyteMonthRate(0.02),
                archive_price_per_gb_month: GigabyteMonthRate(0.01),
                backup_price_per_gb_month: GigabyteMonthRate(0.03),
                networking_price_per_month: MonthlyRate(0.05),
                os_price_per_license: LicenseRate(0.0),
            },
            Provider::Azure => Self {
                compute_price_per_hour: HourlyRate(0.006),
                storage_price_per_gb_month: GigabyteMonthRate(0.022),
                archive_price_per_gb_month: GigabyteMonthRate(0.015),
                backup_price_per_gb_month: GigabyteMonthRate(0.035),
                networking_price_per_month: MonthlyRate(0.06),
                os_price_per_license: LicenseRate(0.0),
            },
            Provider::Gcp => Self {
                compute_price_per_hour: HourlyRate(0.004),
                storage_price_per_gb_month: GigabyteMonthRate(0.018),
                archive_price_per_gb_month: GigabyteMonthRate(0.012),
                backup_price_per_gb_month: GigabyteMonthRate(0.025),
                networking_price_per_month: MonthlyRate(0.055),
                os_price_per_license: LicenseRate(0.01),
            },
            Provider::Oracle => Self {
                compute_price_per_hour: HourlyRate(0.007),
                storage_price_per_gb_month: GigabyteMonthRate(0.021),
                archive_price_per_gb_month: GigabyteMonthRate(0.013),
                backup_price_per_gb_month: GigabyteMonthRate(0.03),
                networking_price_per_month: MonthlyRate(0.05),
                os_price_per_license: LicenseRate(0.015),
            },
        }
    }

    /// A usable price is a finite, non-negative number. The total order on the
    /// rate types places `NaN` above zero, so the finiteness check must be
    /// explicit and on the raw floats.
    fn is_valid(self) -> bool {
        [
            self.compute_price_per_hour.0,
            self.storage_price_per_gb_month.0,
            self.archive_price_per_gb_month.0,
            self.backup_price_per_gb_month.0,
            self.networking_price_per_month.0,
            self.os_price_per_license.0,
        ]
        .into_iter()
        .all(|price| price.is_finite() && price >= 0.0)
    }
}

/// Per-platform price list. Loaded once and never mutated: estimates may only
/// read it.
#[must_use]
#[derive(Clone, Deserialize, Serialize)]
#[serde(transparent)]
pub struct RateTable(BTreeMap<Provider, ProviderRates>);

impl RateTable {
    /// Parse a TOML price list with one `[Platform]` section per platform.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let table: Self = toml::from_str(contents).context("failed to parse the rate table")?;
        ensure!(!table.is_empty(), "the rate table defines no platforms");
        for (provider, rates) in &table.0 {
            ensure!(rates.is_valid(), "non-finite or negative price for {provider}");
        }
        Ok(table)
    }

    #[instrument(name = "Reading the rate table…")]
    pub fn read_from<P: AsRef<Path> + Debug>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read the rate table from {path:?}"))?;
        Self::from_toml(&contents)
    }

    #[allow(dead_code)]
    pub fn get(&self, provider: Provider) -> Option<&ProviderRates> {
        self.0.get(&provider)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Provider, &ProviderRates)> + '_ {
        self.0.iter().map(|(provider, rates)| (*provider, rates))
    }

    pub fn providers(&self) -> impl Iterator<Item = Provider> + '_ {
        self.0.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Provider, ProviderRates)> for RateTable {
    fn from_iter<T: IntoIterator<Item = (Provider, ProviderRates)>>(items: T) -> Self {
        Self(items.into_iter().collect())
    }
}

impl Default for RateTable {
    /// The built-in price list, covering every known platform.
    fn default() -> Self {
        Provider::ALL
            .into_iter()
            .map(|provider| (provider, ProviderRates::built_in(provider)))
            .collect()
    }
}
