use crate::lib::agent::create_agent_environment;
use crate::lib::environment::{AgentEnvironment, Environment};
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use anyhow::anyhow;
use clap::Parser;
use tokio::runtime::Runtime;

/// Shows the principal calls are made as, and the role the backend gives it.
#[derive(Parser)]
pub struct WhoamiOpts {
    /// Only print the principal; do not contact the backend.
    #[arg(long)]
    principal_only: bool,
}

pub fn exec(env: &dyn Environment, opts: WhoamiOpts) -> PortalResult {
    if opts.principal_only {
        let agent_env = AgentEnvironment::new(env)?;
        let principal = agent_env
            .get_selected_identity_principal()
            .ok_or_else(|| anyhow!("No identity selected."))?;
        println!("{principal}");
        return Ok(());
    }
    let runtime = Runtime::new().expect("Unable to create a runtime");
    runtime.block_on(async {
        let agent_env = create_agent_environment(env).await?;
        let principal = agent_env
            .get_selected_identity_principal()
            .ok_or_else(|| anyhow!("No identity selected."))?;
        let backend = BackendClient::from_env(&agent_env)?;
        let role = backend.get_caller_user_role().await?;
        println!(
            "Identity:  {}",
            agent_env.get_selected_identity().unwrap_or_default()
        );
        println!("Principal: {principal}");
        println!("Role:      {role}");
        Ok(())
    })
}
