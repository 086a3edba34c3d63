use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::util::clap::parsers::kes_parser;
use clap::Parser;
use portal_core::format::format_kes;
use portal_core::payout::PayoutQuote;

/// Payout calculations.
#[derive(Parser)]
pub struct PayoutOpts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    Quote(QuoteOpts),
}

/// Shows the tax withheld from a payout and what the player receives.
#[derive(Parser)]
struct QuoteOpts {
    /// Gross winnings in KES.
    #[arg(value_parser = kes_parser)]
    amount: u64,

    /// Print the quote as JSON.
    #[arg(long)]
    json: bool,
}

pub fn exec(env: &dyn Environment, opts: PayoutOpts) -> PortalResult {
    match opts.subcmd {
        SubCommand::Quote(v) => {
            let quote = env.get_tax_policy()?.quote(v.amount);
            if v.json {
                println!("{}", serde_json::to_string_pretty(&quote)?);
            } else {
                print!("{}", render_quote(&quote));
            }
            Ok(())
        }
    }
}

pub(crate) fn render_quote(quote: &PayoutQuote) -> String {
    format!(
        "Gross winnings: {}\nTax ({}%):      -{}\nNet payout:     {}\n",
        format_kes(quote.gross),
        quote.tax_percent,
        format_kes(quote.tax),
        format_kes(quote.net),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::payout::TaxPolicy;

    #[test]
    fn renders_tax_breakdown() {
        let text = render_quote(&TaxPolicy::default().quote(15000));
        assert_eq!(
            text,
            "Gross winnings: KSh 15,000\nTax (20%):      -KSh 3,000\nNet payout:     KSh 12,000\n"
        );
    }
}
