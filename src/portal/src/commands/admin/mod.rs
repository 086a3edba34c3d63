use crate::lib::access::ensure_admin;
use crate::lib::agent::create_agent_environment;
use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use clap::Parser;
use portal_core::admin::MockAdminFeed;
use tokio::runtime::Runtime;

mod adjust_balance;
mod assign_role;
mod history;
mod member_count;
mod pending;
mod record_deposit;
mod record_win;
mod release;
mod summary;

/// Admin dashboard: pending winnings, releases and balance management.
/// Every subcommand requires the caller to be an admin.
#[derive(Parser)]
#[command(name = "admin")]
pub struct AdminOpts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    AdjustBalance(adjust_balance::AdjustBalanceOpts),
    AssignRole(assign_role::AssignRoleOpts),
    History(history::HistoryOpts),
    MemberCount(member_count::MemberCountOpts),
    Pending(pending::PendingOpts),
    RecordDeposit(record_deposit::RecordDepositOpts),
    RecordWin(record_win::RecordWinOpts),
    Release(release::ReleaseOpts),
    Summary(summary::SummaryOpts),
}

pub fn exec(env: &dyn Environment, opts: AdminOpts) -> PortalResult {
    let runtime = Runtime::new().expect("Unable to create a runtime");
    runtime.block_on(async {
        let agent_env = create_agent_environment(env).await?;
        let backend = BackendClient::from_env(&agent_env)?;
        ensure_admin(&agent_env, &backend).await?;

        let mut feed = MockAdminFeed::seeded();
        match opts.subcmd {
            SubCommand::AdjustBalance(v) => adjust_balance::exec(&agent_env, &backend, v).await,
            SubCommand::AssignRole(v) => assign_role::exec(&agent_env, &backend, v).await,
            SubCommand::History(v) => history::exec(&feed, v),
            SubCommand::MemberCount(v) => member_count::exec(&backend, v).await,
            SubCommand::Pending(v) => pending::exec(&agent_env, &feed, v),
            SubCommand::RecordDeposit(v) => record_deposit::exec(&agent_env, &backend, v).await,
            SubCommand::RecordWin(v) => record_win::exec(&agent_env, &backend, v).await,
            SubCommand::Release(v) => release::exec(&agent_env, &backend, &mut feed, v).await,
            SubCommand::Summary(v) => summary::exec(&agent_env, &feed, v),
        }
    })
}
