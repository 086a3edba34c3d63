use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use clap::Parser;

/// Shows your profile and balance.
#[derive(Parser)]
pub struct ShowOpts {
    /// Print the profile as JSON.
    #[arg(long)]
    json: bool,
}

pub async fn exec(env: &dyn Environment, opts: ShowOpts) -> PortalResult {
    let backend = BackendClient::from_env(env)?;
    match backend.get_caller_user_profile().await? {
        Some(profile) if opts.json => println!("{}", serde_json::to_string_pretty(&profile)?),
        Some(profile) => println!("{profile}"),
        None => println!("No profile yet. Create one with 'portal profile setup'."),
    }
    Ok(())
}
