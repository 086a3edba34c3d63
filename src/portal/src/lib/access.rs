use crate::lib::diagnosis::DiagnosedError;
use crate::lib::environment::Environment;
use crate::lib::error::PortalResult;
use crate::lib::operations::backend::BackendClient;
use anyhow::Context;
use candid::Principal;
use slog::debug;

/// Fails with an access-denied error unless the backend considers the caller an admin.
pub async fn ensure_admin(env: &dyn Environment, backend: &BackendClient<'_>) -> PortalResult {
    let caller = env.get_selected_identity_principal();
    if caller.is_none() || caller == Some(Principal::anonymous()) {
        return Err(access_denied(
            "You are calling anonymously, and anonymous callers are never admins.",
        ))
        .context("Access denied. You do not have permission to access the admin dashboard.");
    }
    if !backend.is_caller_admin().await? {
        return Err(access_denied(
            "The backend does not list your principal as an admin.",
        ))
        .context("Access denied. You do not have permission to access the admin dashboard.");
    }
    debug!(env.get_logger(), "Admin access granted.");
    Ok(())
}

fn access_denied(reason: &str) -> DiagnosedError {
    DiagnosedError::new(
        reason,
        "Use an admin identity with '--identity-pem <file>', or ask an existing admin to run 'portal admin assign-role <principal> admin'. 'portal whoami' shows your principal.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lib::diagnosis::diagnose;
    use crate::lib::environment::{AgentEnvironment, EnvironmentImpl};
    use slog::Logger;

    #[tokio::test]
    async fn anonymous_caller_is_denied() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Principal::from_text("rrkah-fqaaa-aaaaa-aaaaq-cai").unwrap();
        let env = EnvironmentImpl::new(Some(dir.path().join("portal.json")))
            .unwrap()
            .with_logger(Logger::root(slog::Discard, slog::o!()))
            .with_network_override(Some("http://127.0.0.1:4943".to_string()))
            .with_backend_override(Some(backend));
        let agent_env = AgentEnvironment::new(&env).unwrap();
        let client = BackendClient::from_env(&agent_env).unwrap();

        let err = ensure_admin(&agent_env, &client).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            "Access denied. You do not have permission to access the admin dashboard."
        );
        let (explanation, suggestion) = diagnose(&err);
        assert!(explanation.unwrap().contains("anonymous"));
        assert!(suggestion.unwrap().contains("--identity-pem"));
    }
}
