use super::AmountArgs;
use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use clap::Parser;
use portal_core::deposit::DepositInstructions;
use slog::info;

/// Registers a pending deposit with the backend and prints how to pay it.
#[derive(Parser)]
pub struct InitiateOpts {
    #[command(flatten)]
    amount: AmountArgs,
}

pub async fn exec(env: &dyn Environment, opts: InitiateOpts) -> PortalResult {
    let quote = opts.amount.quote(env)?;
    let backend = BackendClient::from_env(env)?;

    let transaction_id = backend
        .initiate_deposit(quote.currency, quote.submitted_amount)
        .await?
        .0;
    info!(
        env.get_logger(),
        "Deposit initiated. Transaction ID: {}", transaction_id
    );

    println!("Transaction ID: {transaction_id}");
    if quote.is_foreign() {
        println!("{}", quote.conversion_summary());
    }
    let instructions = DepositInstructions::new(env.get_config().payment.clone(), quote.kes_amount);
    println!("{instructions}");
    println!("Once paid, run 'portal deposit confirm {transaction_id}'.");
    Ok(())
}
