use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use candid::Principal;
use clap::Parser;
use portal_core::admin::UserRole;
use slog::info;

/// Gives a principal the admin, user or guest role.
#[derive(Parser)]
pub struct AssignRoleOpts {
    user: Principal,

    role: UserRole,
}

pub async fn exec(
    env: &dyn Environment,
    backend: &BackendClient<'_>,
    opts: AssignRoleOpts,
) -> PortalResult {
    backend.assign_caller_user_role(opts.user, opts.role).await?;
    info!(env.get_logger(), "Assigned role {} to {}.", opts.role, opts.user);
    Ok(())
}
