use clap::Parser;

use crate::{cli::pricing::PricingArgs, prelude::*, tables::build_rate_table};

#[derive(Parser)]
pub struct RatesArgs {
    #[clap(flatten)]
    pricing: PricingArgs,

    /// Print the rate table as JSON instead of a table.
    #[clap(long)]
    json: bool,
}

#[instrument(skip_all)]
pub fn rates(args: &RatesArgs) -> Result {
    let rates = args.pricing.load()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&rates)?);
    } else {
        println!("{}", build_rate_table(&rates));
    }
    Ok(())
}
