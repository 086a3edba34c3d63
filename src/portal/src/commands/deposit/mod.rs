use crate::lib::agent::create_agent_environment;
use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::util::clap::parsers::amount_parser;
use clap::{Args, Parser};
use portal_core::currency::Currency;
use portal_core::deposit::DepositQuote;
use rust_decimal::Decimal;
use tokio::runtime::Runtime;

mod confirm;
mod initiate;
mod quote;
mod rates;

/// Deposit commands.
#[derive(Parser)]
#[command(name = "deposit")]
pub struct DepositOpts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    Confirm(confirm::ConfirmOpts),
    Initiate(initiate::InitiateOpts),
    Quote(quote::QuoteOpts),
    Rates(rates::RatesOpts),
}

/// An amount in one of the supported currencies.
#[derive(Args, Clone)]
pub struct AmountArgs {
    /// Amount to deposit, e.g. 100 or 1,500.50.
    #[arg(value_parser = amount_parser)]
    amount: Decimal,

    /// Currency of the amount (KES, USD, EUR, GBP, UGX, TZS, MWK, ZAR, ZMW).
    #[arg(long, short, default_value = "KES")]
    currency: Currency,
}

impl AmountArgs {
    pub fn quote(&self, env: &dyn Environment) -> PortalResult<DepositQuote> {
        Ok(DepositQuote::new(
            &env.get_exchange_rates()?,
            self.amount,
            self.currency,
        )?)
    }
}

pub fn exec(env: &dyn Environment, opts: DepositOpts) -> PortalResult {
    let runtime = || Runtime::new().expect("Unable to create a runtime");
    match opts.subcmd {
        SubCommand::Quote(v) => quote::exec(env, v),
        SubCommand::Rates(v) => rates::exec(env, v),
        SubCommand::Confirm(v) => runtime().block_on(async {
            let agent_env = create_agent_environment(env).await?;
            confirm::exec(&agent_env, v).await
        }),
        SubCommand::Initiate(v) => runtime().block_on(async {
            let agent_env = create_agent_environment(env).await?;
            initiate::exec(&agent_env, v).await
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::environment::EnvironmentImpl;
    use std::str::FromStr;

    #[derive(Parser)]
    struct Wrapper {
        #[command(flatten)]
        amount: AmountArgs,
    }

    #[test]
    fn parses_amount_and_currency() {
        let w = Wrapper::try_parse_from(["deposit", "1,500.50", "--currency", "usd"]).unwrap();
        assert_eq!(w.amount.currency, Currency::Usd);
        assert_eq!(w.amount.amount, Decimal::from_str("1500.50").unwrap());

        let w = Wrapper::try_parse_from(["deposit", "250"]).unwrap();
        assert_eq!(w.amount.currency, Currency::Kes);

        assert!(Wrapper::try_parse_from(["deposit", "0"]).is_err());
        assert!(Wrapper::try_parse_from(["deposit", "10", "-c", "BTC"]).is_err());
    }

    #[test]
    fn quotes_with_configured_rates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portal.json");
        std::fs::write(&path, r#"{"exchange_rates": {"EUR": 17000}}"#).unwrap();
        let env = EnvironmentImpl::new(Some(path)).unwrap();

        let w = Wrapper::try_parse_from(["deposit", "50.9", "-c", "EUR"]).unwrap();
        let quote = w.amount.quote(&env).unwrap();
        assert_eq!(quote.submitted_amount, 50);
        assert_eq!(quote.kes_amount, 8653);
    }
}
