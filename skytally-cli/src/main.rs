#![allow(clippy::doc_markdown)]
#![doc = include_str!("../../README.md")]

mod cli;
mod core;
mod form;
mod prelude;
mod pricing;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command, estimate, form, rates},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Form(args) => form(&args)?,
        Command::Estimate(args) => estimate(&args)?,
        Command::Rates(args) => rates(&args)?,
    }

    info!("done!");
    Ok(())
}
