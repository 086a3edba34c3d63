use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use crate::util::clap::parsers::kes_parser;
use candid::Principal;
use clap::Parser;
use portal_core::format::format_kes;
use slog::info;

/// Sets a player's balance.
#[derive(Parser)]
pub struct AdjustBalanceOpts {
    user: Principal,

    /// New balance in KES.
    #[arg(value_parser = kes_parser)]
    balance: u64,
}

pub async fn exec(
    env: &dyn Environment,
    backend: &BackendClient<'_>,
    opts: AdjustBalanceOpts,
) -> PortalResult {
    backend.adjust_user_balance(opts.user, opts.balance).await?;
    info!(
        env.get_logger(),
        "Balance of {} set to {}.",
        opts.user,
        format_kes(opts.balance)
    );
    Ok(())
}
