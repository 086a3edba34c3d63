use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use clap::Subcommand;

mod admin;
mod config;
mod deposit;
mod history;
mod payout;
mod phone;
mod profile;
mod whoami;

#[derive(Subcommand)]
pub enum PortalCommand {
    Admin(admin::AdminOpts),
    Config(config::ConfigOpts),
    Deposit(deposit::DepositOpts),
    History(history::HistoryOpts),
    Payout(payout::PayoutOpts),
    Phone(phone::PhoneOpts),
    Profile(profile::ProfileOpts),
    Whoami(whoami::WhoamiOpts),
}

pub fn exec(env: &dyn Environment, cmd: PortalCommand) -> PortalResult {
    match cmd {
        PortalCommand::Admin(v) => admin::exec(env, v),
        PortalCommand::Config(v) => config::exec(env, v),
        PortalCommand::Deposit(v) => deposit::exec(env, v),
        PortalCommand::History(v) => history::exec(env, v),
        PortalCommand::Payout(v) => payout::exec(env, v),
        PortalCommand::Phone(v) => phone::exec(env, v),
        PortalCommand::Profile(v) => profile::exec(env, v),
        PortalCommand::Whoami(v) => whoami::exec(env, v),
    }
}
