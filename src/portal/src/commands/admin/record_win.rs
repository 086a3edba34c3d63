use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use crate::util::clap::parsers::positive_kes_parser;
use candid::Principal;
use clap::Parser;
use portal_core::format::format_kes;
use slog::info;

/// Records winnings for a player, to be released later.
#[derive(Parser)]
pub struct RecordWinOpts {
    user: Principal,

    /// Gross winnings in KES.
    #[arg(value_parser = positive_kes_parser)]
    amount: u64,
}

pub async fn exec(
    env: &dyn Environment,
    backend: &BackendClient<'_>,
    opts: RecordWinOpts,
) -> PortalResult {
    backend.record_win(opts.user, opts.amount).await?;
    info!(
        env.get_logger(),
        "Recorded a win of {} for {}.",
        format_kes(opts.amount),
        opts.user
    );
    Ok(())
}
