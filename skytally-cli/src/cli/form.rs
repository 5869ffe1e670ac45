use clap::Parser;

use crate::{cli::pricing::PricingArgs, form::session::Session, prelude::*};

#[derive(Parser)]
pub struct FormArgs {
    #[clap(flatten)]
    pricing: PricingArgs,
}

pub fn form(args: &FormArgs) -> Result {
    let rates = args.pricing.load()?;
    let mut session = Session::new(rates);
    crate::form::run(&mut session)
}
