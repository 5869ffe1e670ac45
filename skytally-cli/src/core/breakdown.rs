use std::collections::BTreeMap;

use serde::Serialize;
use skytally_quantities::cost::Cost;

use crate::pricing::provider::Provider;

/// Itemized costs of one platform for the whole billing duration.
#[must_use]
#[derive(Copy, Clone, Serialize)]
pub struct CostBreakdown {
    pub compute: Cost,
    pub storage: Cost,
    pub archive: Cost,
    pub backup: Cost,
    pub networking: Cost,
    pub os: Cost,

    /// Exact sum of the six components. Rounding is left to the renderers.
    pub total: Cost,
}

/// Per-platform breakdowns of a single calculation pass.
///
/// Replaced wholesale on every recalculation. Iteration follows the rate
/// table's platform order.
#[must_use]
#[derive(Serialize)]
#[serde(transparent)]
pub struct ResultSet(BTreeMap<Provider, CostBreakdown>);

impl ResultSet {
    #[allow(dead_code)]
    pub fn get(&self, provider: Provider) -> Option<&CostBreakdown> {
        self.0.get(&provider)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Provider, &CostBreakdown)> + '_ {
        self.0.iter().map(|(provider, breakdown)| (*provider, breakdown))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Platform with the lowest total, first in table order on a tie.
    pub fn cheapest(&self) -> Option<(Provider, &CostBreakdown)> {
        self.iter().min_by_key(|(_, breakdown)| breakdown.total)
    }
}

impl FromIterator<(Provider, CostBreakdown)> for ResultSet {
    fn from_iter<T: IntoIterator<Item = (Provider, CostBreakdown)>>(items: T) -> Self {
        Self(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown_of(total: f64) -> CostBreakdown {
        CostBreakdown {
            compute: Cost::ZERO,
            storage: Cost::ZERO,
            archive: Cost::ZERO,
            backup: Cost::ZERO,
            networking: Cost::ZERO,
            os: Cost::ZERO,
            total: Cost(total),
        }
    }

    #[test]
    fn cheapest_picks_the_lowest_total() {
        let results: ResultSet = [
            (Provider::Aws, breakdown_of(10.5)),
            (Provider::Azure, breakdown_of(12.63)),
            (Provider::Gcp, breakdown_of(9.04)),
        ]
        .into_iter()
        .collect();
        assert_eq!(results.cheapest().map(|(provider, _)| provider), Some(Provider::Gcp));
    }

    #[test]
    fn cheapest_tie_falls_to_the_first_platform() {
        let results: ResultSet =
            [(Provider::Oracle, breakdown_of(1.0)), (Provider::Aws, breakdown_of(1.0))]
                .into_iter()
                .collect();
        assert_eq!(results.cheapest().map(|(provider, _)| provider), Some(Provider::Aws));
    }

    #[test]
    fn serializes_as_a_platform_keyed_object() {
        let results: ResultSet = [(Provider::Aws, breakdown_of(1.0))].into_iter().collect();
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(json["AWS"]["total"], 1.0);
        assert_eq!(json["AWS"]["compute"], 0.0);
    }
}
