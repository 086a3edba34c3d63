use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use clap::Parser;
use portal_core::config::PortalConfig;
use slog::info;

/// Shows or changes the portal configuration.
#[derive(Parser)]
pub struct ConfigOpts {
    #[command(subcommand)]
    subcmd: SubCommand,
}

#[derive(Parser)]
enum SubCommand {
    /// Prints the configuration in effect, including command-line overrides.
    Show,

    /// Changes one setting in the configuration file.
    Set(SetOpts),

    /// Prints where the configuration file lives.
    Path,
}

#[derive(Parser)]
struct SetOpts {
    /// One of network.url, backend_canister_id, identity_pem, payment.paybill,
    /// payment.account_number, tax_percent or exchange_rates.<CODE>.
    key: String,

    /// The new value. `none` clears optional settings.
    value: String,
}

pub fn exec(env: &dyn Environment, opts: ConfigOpts) -> PortalResult {
    match opts.subcmd {
        SubCommand::Show => {
            let mut config = env.get_config().clone();
            config.network = env.get_network().clone();
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        }
        SubCommand::Set(v) => set(env, v),
        SubCommand::Path => {
            println!("{}", env.get_config_path().display());
            Ok(())
        }
    }
}

fn set(env: &dyn Environment, opts: SetOpts) -> PortalResult {
    let path = env.get_config_path();
    // Re-read from disk so command-line overrides are not persisted.
    let mut config = PortalConfig::load_or_default(path)?;
    config.set(&opts.key, &opts.value)?;
    config.save(path)?;
    info!(
        env.get_logger(),
        "Set '{}' to '{}' in {}.",
        opts.key,
        opts.value,
        path.display()
    );
    Ok(())
}
