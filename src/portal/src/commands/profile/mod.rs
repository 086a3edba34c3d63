use crate::lib::agent::create_agent_environment;
use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use clap::Parser;
use tokio::runtime::Runtime;

mod lookup;
mod setup;
mod show;
mod update;

/// Player profile commands.
#[derive(Parser)]
#[command(name = "profile")]
pub struct ProfileOpts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    Lookup(lookup::LookupOpts),
    Setup(setup::SetupOpts),
    Show(show::ShowOpts),
    Update(update::UpdateOpts),
}

pub fn exec(env: &dyn Environment, opts: ProfileOpts) -> PortalResult {
    let runtime = Runtime::new().expect("Unable to create a runtime");
    runtime.block_on(async {
        let agent_env = create_agent_environment(env).await?;
        match opts.subcmd {
            SubCommand::Lookup(v) => lookup::exec(&agent_env, v).await,
            SubCommand::Setup(v) => setup::exec(&agent_env, v).await,
            SubCommand::Show(v) => show::exec(&agent_env, v).await,
            SubCommand::Update(v) => update::exec(&agent_env, v).await,
        }
    })
}
