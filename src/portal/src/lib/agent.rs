use crate::lib::environment::{AgentEnvironment, Environment};
use crate::lib::error::PortalResult;
use crate::lib::root_key::fetch_root_key_if_needed;
use fn_error_context::context;

/// Builds an agent for the selected identity and readies it for calls.
#[context("Failed to create AgentEnvironment.")]
pub async fn create_agent_environment<'a>(
    env: &'a (dyn Environment + 'a),
) -> PortalResult<AgentEnvironment<'a>> {
    let agent_env = AgentEnvironment::new(env)?;
    fetch_root_key_if_needed(&agent_env).await?;
    Ok(agent_env)
}
