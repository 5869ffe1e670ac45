use std::path::PathBuf;

use clap::Parser;

use crate::{pricing::rates::RateTable, prelude::*};

#[derive(Parser)]
pub struct PricingArgs {
    /// TOML price list overriding the built-in rate table.
    #[clap(long = "rates", env = "RATES_PATH")]
    rates_path: Option<PathBuf>,
}

impl PricingArgs {
    /// Load the override file when one is given, the built-in prices otherwise.
    pub fn load(&self) -> Result<RateTable> {
        match &self.rates_path {
            Some(path) => {
                let rates = RateTable::read_from(path)?;
                info!(n_platforms = rates.len(), "loaded the custom rate table");
                Ok(rates)
            }
            None => Ok(RateTable::default()),
        }
    }
}
