use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use crate::util::clap::parsers::positive_kes_parser;
use clap::Parser;
use portal_core::currency::Currency;
use slog::info;

/// Records a deposit received outside the portal, crediting the caller's account.
#[derive(Parser)]
pub struct RecordDepositOpts {
    /// Whole units of the currency.
    #[arg(value_parser = positive_kes_parser)]
    amount: u64,

    #[arg(long, short, default_value = "KES")]
    currency: Currency,
}

pub async fn exec(
    env: &dyn Environment,
    backend: &BackendClient<'_>,
    opts: RecordDepositOpts,
) -> PortalResult {
    let transaction_id = backend
        .record_admin_deposit(opts.currency, opts.amount)
        .await?;
    info!(
        env.get_logger(),
        "Recorded deposit of {} {}.", opts.amount, opts.currency
    );
    println!("Transaction ID: {}", transaction_id.0);
    Ok(())
}
