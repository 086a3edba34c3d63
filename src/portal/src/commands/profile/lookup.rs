use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use anyhow::bail;
use candid::Principal;
use clap::Parser;

/// Shows another player's profile.
#[derive(Parser)]
pub struct LookupOpts {
    /// Principal of the player.
    user: Principal,

    /// Print the profile as JSON.
    #[arg(long)]
    json: bool,
}

pub async fn exec(env: &dyn Environment, opts: LookupOpts) -> PortalResult {
    let backend = BackendClient::from_env(env)?;
    match backend.get_user_profile(opts.user).await? {
        Some(profile) if opts.json => println!("{}", serde_json::to_string_pretty(&profile)?),
        Some(profile) => println!("{profile}"),
        None => bail!("No profile found for {}.", opts.user),
    }
    Ok(())
}
