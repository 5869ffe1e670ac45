mod estimate;
mod form;
mod pricing;
mod rates;

use clap::{Parser, Subcommand};

pub use self::{
    estimate::{EstimateArgs, estimate},
    form::{FormArgs, form},
    rates::{RatesArgs, rates},
};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: run the interactive calculator in the terminal.
    #[clap(name = "form")]
    Form(Box<FormArgs>),

    /// Estimate a workload non-interactively and print the breakdown.
    #[clap(name = "estimate")]
    Estimate(Box<EstimateArgs>),

    /// Print the unit prices behind the estimates.
    #[clap(name = "rates")]
    Rates(Box<RatesArgs>),
}
