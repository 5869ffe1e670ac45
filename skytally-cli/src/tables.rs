use average::Mean;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use skytally_quantities::rate::LicenseRate;

use crate::{core::breakdown::ResultSet, pricing::rates::RateTable};

/// Build the itemized cost table, one row per platform. Totals at or above
/// the mean are flagged red, the cheaper ones green.
pub fn build_breakdown_table(results: &ResultSet) -> Table {
    let mean_total: f64 = if results.is_empty() {
        0.0
    } else {
        let estimate: Mean = results.iter().map(|(_, breakdown)| breakdown.total.0).collect();
        estimate.mean()
    };

    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Platform",
        "Compute",
        "Storage",
        "Archive",
        "Backup",
        "Networking",
        "OS",
        "Total",
    ]);
    for (provider, breakdown) in results.iter() {
        table.add_row(vec![
            Cell::new(provider).fg(provider.color()),
            Cell::new(breakdown.compute).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.storage).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.archive).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.backup).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.networking).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.os).set_alignment(CellAlignment::Right),
            Cell::new(breakdown.total).set_alignment(CellAlignment::Right).fg(
                if breakdown.total.0 >= mean_total { Color::Red } else { Color::Green },
            ),
        ]);
    }
    table
}

/// Build the unit price table behind the estimates.
pub fn build_rate_table(rates: &RateTable) -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table.set_header(vec![
        "Platform",
        "Compute",
        "Storage",
        "Archive",
        "Backup",
        "Networking",
        "OS license",
    ]);
    for (provider, prices) in rates.iter() {
        let os_license = {
            let cell = Cell::new(prices.os_price_per_license).set_alignment(CellAlignment::Right);
            if prices.os_price_per_license == LicenseRate::ZERO {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        };
        table.add_row(vec![
            Cell::new(provider).fg(provider.color()),
            Cell::new(prices.compute_price_per_hour).set_alignment(CellAlignment::Right),
            Cell::new(prices.storage_price_per_gb_month).set_alignment(CellAlignment::Right),
            Cell::new(prices.archive_price_per_gb_month).set_alignment(CellAlignment::Right),
            Cell::new(prices.backup_price_per_gb_month).set_alignment(CellAlignment::Right),
            Cell::new(prices.networking_price_per_month).set_alignment(CellAlignment::Right),
            os_license,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use skytally_quantities::{
        storage::Gigabytes,
        time::{Hours, Months},
    };

    use super::*;
    use crate::{
        core::{estimator::estimate, usage::UsageInput},
        pricing::provider::Provider,
    };

    #[test]
    fn breakdown_table_lists_every_platform() {
        let usage = UsageInput::builder()
            .compute_hours(Hours(10.0))
            .storage_gb(Gigabytes(100.0))
            .backup_data_gb(Gigabytes(50.0))
            .duration_months(Months(2.0))
            .build();
        let rendered = build_breakdown_table(&estimate(&usage, &RateTable::default())).to_string();
        for provider in Provider::ALL {
            assert!(rendered.contains(&provider.to_string()), "missing {provider}");
        }
        assert!(rendered.contains("$10.50"));
    }

    #[test]
    fn rate_table_shows_unit_prices() {
        let rendered = build_rate_table(&RateTable::default()).to_string();
        assert!(rendered.contains("0.005 $/h"));
        assert!(rendered.contains("0.035 $/GB·mo"));
    }
}
