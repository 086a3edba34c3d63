use anyhow::Error as AnyhowError;
use ic_agent::AgentError;
use portal_core::error::config::ConfigError;
use portal_core::error::identity::IdentityError;
use thiserror::Error as ThisError;

/// Contains two Option<Strings> that can be displayed to the user:
///   - Error explanation: what went wrong, in terms of the portal.
///   - Action suggestion: how to move forward.
pub type Diagnosis = (Option<String>, Option<String>);
pub const NULL_DIAGNOSIS: Diagnosis = (None, None);

#[derive(ThisError, Debug)]
// This message will appear in the context trace of the stack. The diagnosis should not be displayed there yet.
#[error("Diagnosis was added here.")]
/// Attach with `.context(DiagnosedError::new(..))` to skip the generic diagnosis below.
pub struct DiagnosedError {
    /// A user-friendly explanation of what went wrong.
    pub error_explanation: Option<String>,

    /// Suggestions for the user on how to move forward to recover from the error.
    pub action_suggestion: Option<String>,
}

impl DiagnosedError {
    pub fn new(error_explanation: impl Into<String>, action_suggestion: impl Into<String>) -> Self {
        Self {
            error_explanation: Some(error_explanation.into()),
            action_suggestion: Some(action_suggestion.into()),
        }
    }
}

/// Attempts to give helpful suggestions on how to resolve errors.
pub fn diagnose(err: &AnyhowError) -> Diagnosis {
    if let Some(diagnosed_error) = err.downcast_ref::<DiagnosedError>() {
        return (
            diagnosed_error.error_explanation.clone(),
            diagnosed_error.action_suggestion.clone(),
        );
    }
    if let Some(agent_err) = err.downcast_ref::<AgentError>() {
        return diagnose_agent_error(agent_err);
    }
    if err.downcast_ref::<ConfigError>().is_some() {
        return (
            None,
            Some("Inspect the configuration with 'portal config show' and fix it with 'portal config set <key> <value>'.".to_string()),
        );
    }
    if err.downcast_ref::<IdentityError>().is_some() {
        return (
            Some("The portal signs backend calls with an Ed25519 or secp256k1 key stored in a PEM file.".to_string()),
            Some("Check the file given by --identity-pem, PORTAL_IDENTITY_PEM or the 'identity_pem' configuration key.".to_string()),
        );
    }
    NULL_DIAGNOSIS
}

fn diagnose_agent_error(agent_err: &AgentError) -> Diagnosis {
    if let AgentError::TransportError(_) = agent_err {
        return (
            Some("The portal could not reach the network.".to_string()),
            Some("Check your connection and the network url ('portal config show', or --network).".to_string()),
        );
    }
    let message = agent_err.to_string();
    if message.contains("Unauthorized") {
        return diagnose_unauthorized();
    }
    if is_canister_not_found(&message) {
        return (
            Some("The backend canister id does not exist on this network.".to_string()),
            Some("Set the right id with 'portal config set backend_canister_id <id>' or pass --backend.".to_string()),
        );
    }
    NULL_DIAGNOSIS
}

/// Matches the replica's reject for a missing canister (IC0301), not missing methods or records.
fn is_canister_not_found(message: &str) -> bool {
    if message.contains("IC0301") || message.contains("canister_not_found") {
        return true;
    }
    let words: Vec<&str> = message.split_whitespace().collect();
    words
        .windows(4)
        .any(|w| w[0] == "Canister" && w[2] == "not" && w[3].starts_with("found"))
}

fn diagnose_unauthorized() -> Diagnosis {
    let error_explanation = "The backend rejected the call because the calling principal lacks the required role.\n\
        Anonymous callers are guests; profile and deposit calls need the user role, and admin calls need the admin role.";
    let action_suggestion = "Sign in with your own identity by passing '--identity-pem <file>' (or setting 'identity_pem' in the configuration).
Run 'portal whoami' to see the principal and role the backend sees.
An existing admin can grant a role with 'portal admin assign-role <principal> <role>'.";
    (
        Some(error_explanation.to_string()),
        Some(action_suggestion.to_string()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Context};

    #[test]
    fn diagnosed_error_wins() {
        let err = Err::<(), _>(DiagnosedError::new("explained", "suggested"))
            .context("Access denied.")
            .unwrap_err();
        assert_eq!(
            diagnose(&err),
            (Some("explained".to_string()), Some("suggested".to_string()))
        );
    }

    #[test]
    fn config_errors_point_at_config_commands() {
        let err = anyhow!(ConfigError::UnknownKey("x".to_string(), "y".to_string()));
        let (explanation, suggestion) = diagnose(&err);
        assert!(explanation.is_none());
        assert!(suggestion.unwrap().contains("portal config"));
    }

    #[test]
    fn only_missing_canisters_count_as_not_found() {
        assert!(is_canister_not_found(
            "The replica returned a rejection error: reject code DestinationInvalid, \
             reject message Canister rrkah-fqaaa-aaaaa-aaaaq-cai not found, error code None"
        ));
        assert!(is_canister_not_found("error code Some(\"IC0301\")"));
        assert!(!is_canister_not_found(
            "reject message Canister rrkah-fqaaa-aaaaa-aaaaq-cai has no update method 'get_profile'"
        ));
        assert!(!is_canister_not_found("reject message Profile not found"));
        assert!(!is_canister_not_found("No pending payout found for user"));
    }

    #[test]
    fn unknown_errors_have_no_diagnosis() {
        assert_eq!(diagnose(&anyhow!("boom")), NULL_DIAGNOSIS);
    }
}
