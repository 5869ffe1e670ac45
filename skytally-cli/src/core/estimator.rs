use crate::{
    core::{
        breakdown::{CostBreakdown, ResultSet},
        usage::UsageInput,
    },
    pricing::rates::RateTable,
};

const HOURS_PER_DAY: f64 = 24.0;

/// Price the workload against every platform in the rate table.
///
/// Pure: nothing is read or retained between calls, so equal inputs always
/// produce equal results. Non-finite amounts count as zero, which keeps the
/// totals well-defined for any input.
pub fn estimate(usage: &UsageInput, rates: &RateTable) -> ResultSet {
    let usage = usage.sanitized();
    let months = usage.duration_months.0;
    rates
        .iter()
        .map(|(provider, prices)| {
            let compute =
                prices.compute_price_per_hour * usage.compute_hours * (months * HOURS_PER_DAY);
            let storage = prices.storage_price_per_gb_month * usage.storage_gb * months;
            // Archived data is priced on the primary volume and only once,
            // not per month.
            let archive = prices.archive_price_per_gb_month * usage.storage_gb;
            let backup = prices.backup_price_per_gb_month * usage.backup_data_gb * months;
            let networking = prices.networking_price_per_month * usage.duration_months;
            let os = prices.os_price_per_license * usage.num_licenses;
            let total = compute + storage + archive + backup + networking + os;
            (provider, CostBreakdown { compute, storage, archive, backup, networking, os, total })
        })
        .collect()
}
