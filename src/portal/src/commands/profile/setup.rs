use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use clap::Parser;
use portal_core::phone::{format_for_display, Carrier};
use portal_core::profile::{ProfileSetup, ProfileUpdate};
use slog::{info, warn};

/// Creates your profile. A valid phone number is required.
#[derive(Parser)]
pub struct SetupOpts {
    #[arg(long)]
    username: String,

    #[arg(long)]
    email: String,

    /// Phone number, in local or international form.
    #[arg(long)]
    phone: String,

    /// Optional wallet address.
    #[arg(long, default_value = "")]
    wallet_address: String,
}

pub async fn exec(env: &dyn Environment, opts: SetupOpts) -> PortalResult {
    let log = env.get_logger();
    let setup = ProfileSetup {
        update: ProfileUpdate {
            username: opts.username.trim().to_string(),
            email: opts.email.trim().to_string(),
            wallet_address: opts.wallet_address.trim().to_string(),
        },
        phone: opts.phone,
    };
    let phone = setup.validate()?;

    let backend = BackendClient::from_env(env)?;
    if backend.get_caller_user_profile().await?.is_some() {
        warn!(log, "A profile already exists; it will be overwritten.");
    }
    backend.save_caller_user_profile(setup.update).await?;
    info!(log, "Profile created.");

    println!("Phone:   {} ({})", phone, format_for_display(phone.as_str()));
    println!("Country: {}", phone.country());
    if phone.carrier() != Carrier::Unknown {
        println!("Carrier: {}", phone.carrier());
    }
    Ok(())
}
