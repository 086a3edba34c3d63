use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use anyhow::{anyhow, Context};
use slog::debug;

/// Local and test replicas are not signed by the IC root key; trust theirs instead.
pub async fn fetch_root_key_if_needed(env: &dyn Environment) -> PortalResult {
    let agent = env
        .get_agent()
        .ok_or_else(|| anyhow!("Cannot get HTTP client from environment."))?;

    let network = env.get_network();
    if !network.is_ic() {
        debug!(env.get_logger(), "Fetching root key from {}", network.url);
        agent
            .fetch_root_key()
            .await
            .with_context(|| format!("Failed to fetch root key from {}.", network.url))?;
    }
    Ok(())
}
