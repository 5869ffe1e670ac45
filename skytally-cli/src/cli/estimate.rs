use clap::Parser;
use skytally_quantities::{
    storage::Gigabytes,
    time::{Hours, Months},
};

use crate::{
    cli::pricing::PricingArgs,
    core::{
        estimator,
        usage::{Os, UsageInput},
    },
    prelude::*,
    tables::build_breakdown_table,
};

#[derive(Parser)]
pub struct EstimateArgs {
    #[clap(flatten)]
    usage: UsageArgs,

    #[clap(flatten)]
    pricing: PricingArgs,

    /// Print the result set as JSON instead of a table.
    #[clap(long)]
    json: bool,
}

#[derive(Parser)]
pub struct UsageArgs {
    /// Compute hours of the workload.
    #[clap(long, env, default_value = "0", allow_negative_numbers = true)]
    compute_hours: Hours,

    /// Primary storage volume in gigabytes.
    #[clap(long, env, default_value = "0", allow_negative_numbers = true)]
    storage_gb: Gigabytes,

    /// Backup volume in gigabytes.
    #[clap(long, env, default_value = "0", allow_negative_numbers = true)]
    backup_data_gb: Gigabytes,

    /// Billing duration in months.
    #[clap(long, env, default_value = "0", allow_negative_numbers = true)]
    duration_months: Months,

    /// Operating system of the workload.
    #[clap(long = "os", env = "OS_TYPE", default_value = "windows")]
    os_type: Os,

    /// Number of operating system licenses.
    #[clap(long = "licenses", env = "NUM_LICENSES", default_value = "0")]
    num_licenses: u32,
}

impl UsageArgs {
    fn to_usage(&self) -> UsageInput {
        UsageInput::builder()
            .compute_hours(self.compute_hours)
            .storage_gb(self.storage_gb)
            .backup_data_gb(self.backup_data_gb)
            .duration_months(self.duration_months)
            .os_type(self.os_type)
            .num_licenses(self.num_licenses)
            .build()
    }
}

#[instrument(skip_all)]
pub fn estimate(args: &EstimateArgs) -> Result {
    let rates = args.pricing.load()?;
    let results = estimator::estimate(&args.usage.to_usage(), &rates);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    } else {
        println!("{}", build_breakdown_table(&results));
    }
    if let Some((provider, breakdown)) = results.cheapest() {
        info!(
            n_platforms = results.len(),
            cheapest = %provider,
            total = %breakdown.total,
            "estimated"
        );
    }
    Ok(())
}
