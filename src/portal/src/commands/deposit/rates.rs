use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use clap::Parser;
use portal_core::currency::{rate_table, Currency};

/// Lists the exchange rates used to convert deposits into KES.
#[derive(Parser)]
pub struct RatesOpts {
    /// Print KES per 100 units of each currency as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(env: &dyn Environment, opts: RatesOpts) -> PortalResult {
    let rates = env.get_exchange_rates()?;
    if opts.json {
        println!("{}", serde_json::to_string_pretty(&rate_table(&rates))?);
        return Ok(());
    }
    println!("{:<5} {:<20} {:>4} {:>10}", "Code", "Currency", "", "KSh/unit");
    for currency in Currency::ALL {
        println!(
            "{:<5} {:<20} {:>4} {:>10}",
            currency.code(),
            currency.name(),
            currency.symbol(),
            rates.display_rate(currency)?.to_string()
        );
    }
    Ok(())
}
