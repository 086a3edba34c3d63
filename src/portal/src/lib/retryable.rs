use anyhow::anyhow;
use ic_agent::AgentError;

/// Whether the call failed before it ever reached the replica.
/// A timeout while polling is not retried: the update may already have run.
pub fn retryable(agent_error: &AgentError) -> bool {
    matches!(agent_error, AgentError::TransportError(_))
}

pub fn backoff_error(agent_error: AgentError) -> backoff::Error<anyhow::Error> {
    if retryable(&agent_error) {
        backoff::Error::transient(anyhow!(agent_error))
    } else {
        backoff::Error::permanent(anyhow!(agent_error))
    }
}
