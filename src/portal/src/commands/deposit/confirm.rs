use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use crate::util::clap::parsers::transaction_id_parser;
use clap::Parser;
use slog::info;

/// Marks an initiated deposit as paid.
#[derive(Parser)]
pub struct ConfirmOpts {
    /// Transaction ID returned by `portal deposit initiate`.
    #[arg(value_parser = transaction_id_parser)]
    transaction_id: u64,
}

pub async fn exec(env: &dyn Environment, opts: ConfirmOpts) -> PortalResult {
    let backend = BackendClient::from_env(env)?;
    backend.confirm_deposit(opts.transaction_id).await?;
    info!(
        env.get_logger(),
        "Deposit {} confirmed.", opts.transaction_id
    );
    Ok(())
}
