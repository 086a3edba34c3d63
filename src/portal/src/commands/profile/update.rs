use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use anyhow::bail;
use clap::Parser;
use portal_core::profile::ProfileUpdate;
use slog::info;

/// Edits your profile. Fields left out keep their current value.
#[derive(Parser)]
pub struct UpdateOpts {
    #[arg(long)]
    username: Option<String>,

    #[arg(long)]
    email: Option<String>,

    /// Pass an empty string to clear it.
    #[arg(long)]
    wallet_address: Option<String>,
}

pub async fn exec(env: &dyn Environment, opts: UpdateOpts) -> PortalResult {
    if opts.username.is_none() && opts.email.is_none() && opts.wallet_address.is_none() {
        bail!("Nothing to update. Pass --username, --email or --wallet-address.");
    }
    let backend = BackendClient::from_env(env)?;
    let current = backend.get_caller_user_profile().await?;
    let update = ProfileUpdate::merged(
        current.as_ref(),
        opts.username.map(|s| s.trim().to_string()),
        opts.email.map(|s| s.trim().to_string()),
        opts.wallet_address.map(|s| s.trim().to_string()),
    );
    update.validate()?;
    backend.save_caller_user_profile(update).await?;
    info!(env.get_logger(), "Profile updated.");
    Ok(())
}
