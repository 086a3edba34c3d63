use super::AmountArgs;
use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use clap::Parser;
use portal_core::deposit::DepositInstructions;

/// Previews a deposit's KES value and payment steps without contacting the backend.
#[derive(Parser)]
pub struct QuoteOpts {
    #[command(flatten)]
    amount: AmountArgs,

    /// Print the quote as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(env: &dyn Environment, opts: QuoteOpts) -> PortalResult {
    let quote = opts.amount.quote(env)?;
    let instructions = DepositInstructions::new(env.get_config().payment.clone(), quote.kes_amount);
    if opts.json {
        let out = serde_json::json!({
            "quote": quote,
            "instructions": instructions,
            "steps": instructions.steps(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    if quote.is_foreign() {
        println!("{}", quote.conversion_summary());
    }
    println!("{instructions}");
    Ok(())
}
