use crate::lib::error::PortalResult;
use anyhow::Context;
use candid::Principal;
use ic_agent::Agent;
use portal_core::config::directories::get_user_config_path;
use portal_core::config::{NetworkConfig, PortalConfig};
use portal_core::currency::ExchangeRates;
use portal_core::identity::Identity;
use portal_core::payout::TaxPolicy;
use slog::{debug, Logger};
use std::path::{Path, PathBuf};

pub trait Environment {
    fn get_config(&self) -> &PortalConfig;
    fn get_config_path(&self) -> &Path;

    /// The network the agent talks to, after command-line overrides.
    fn get_network(&self) -> &NetworkConfig;
    fn get_backend_canister_id(&self) -> Option<Principal>;
    fn get_identity_pem(&self) -> Option<&Path>;

    fn get_agent(&self) -> Option<&Agent>;
    fn get_selected_identity(&self) -> Option<&str>;
    fn get_selected_identity_principal(&self) -> Option<Principal>;

    fn get_logger(&self) -> &Logger;

    fn get_exchange_rates(&self) -> PortalResult<ExchangeRates> {
        self.get_config()
            .exchange_rates()
            .context("Invalid exchange rates in the portal configuration.")
    }

    fn get_tax_policy(&self) -> PortalResult<TaxPolicy> {
        self.get_config()
            .tax_policy()
            .context("Invalid tax percentage in the portal configuration.")
    }
}

pub struct EnvironmentImpl {
    config: PortalConfig,
    config_path: PathBuf,
    network: NetworkConfig,
    logger: Option<Logger>,
}

impl EnvironmentImpl {
    /// Loads `portal.json` from `config_path`, or from the user config directory.
    pub fn new(config_path: Option<PathBuf>) -> PortalResult<Self> {
        let config_path = match config_path {
            Some(path) => path,
            None => get_user_config_path()?,
        };
        let config = PortalConfig::load_or_default(&config_path)?;
        Ok(EnvironmentImpl {
            network: config.network.clone(),
            config,
            config_path,
            logger: None,
        })
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn with_network_override(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.network = NetworkConfig { url };
        }
        self
    }

    pub fn with_backend_override(mut self, backend: Option<Principal>) -> Self {
        if backend.is_some() {
            self.config.backend_canister_id = backend;
        }
        self
    }

    pub fn with_identity_override(mut self, pem: Option<PathBuf>) -> Self {
        if pem.is_some() {
            self.config.identity_pem = pem;
        }
        self
    }
}

impl Environment for EnvironmentImpl {
    fn get_config(&self) -> &PortalConfig {
        &self.config
    }

    fn get_config_path(&self) -> &Path {
        &self.config_path
    }

    fn get_network(&self) -> &NetworkConfig {
        &self.network
    }

    fn get_backend_canister_id(&self) -> Option<Principal> {
        self.config.backend_canister_id
    }

    fn get_identity_pem(&self) -> Option<&Path> {
        self.config.identity_pem.as_deref()
    }

    fn get_agent(&self) -> Option<&Agent> {
        None
    }

    fn get_selected_identity(&self) -> Option<&str> {
        None
    }

    fn get_selected_identity_principal(&self) -> Option<Principal> {
        None
    }

    fn get_logger(&self) -> &Logger {
        self.logger
            .as_ref()
            .expect("Log was not setup, but is being used.")
    }
}

/// An environment that carries an agent signing as the selected identity.
pub struct AgentEnvironment<'a> {
    backend: &'a dyn Environment,
    agent: Agent,
    identity_name: String,
    principal: Principal,
}

impl<'a> AgentEnvironment<'a> {
    pub fn new(backend: &'a dyn Environment) -> PortalResult<Self> {
        let logger = backend.get_logger();
        let identity = Identity::load(logger, backend.get_identity_pem())?;
        let identity_name = identity.name().to_string();
        let principal = identity.sender()?;
        let url = &backend.get_network().url;
        debug!(
            logger,
            "Creating agent for {} as {} ({})", url, identity_name, principal
        );

        let agent = Agent::builder()
            .with_url(url.as_str())
            .with_boxed_identity(identity.into_inner())
            .build()
            .with_context(|| format!("Failed to create an agent for {url}."))?;

        Ok(AgentEnvironment {
            backend,
            agent,
            identity_name,
            principal,
        })
    }
}

impl<'a> Environment for AgentEnvironment<'a> {
    fn get_config(&self) -> &PortalConfig {
        self.backend.get_config()
    }

    fn get_config_path(&self) -> &Path {
        self.backend.get_config_path()
    }

    fn get_network(&self) -> &NetworkConfig {
        self.backend.get_network()
    }

    fn get_backend_canister_id(&self) -> Option<Principal> {
        self.backend.get_backend_canister_id()
    }

    fn get_identity_pem(&self) -> Option<&Path> {
        self.backend.get_identity_pem()
    }

    fn get_agent(&self) -> Option<&Agent> {
        Some(&self.agent)
    }

    fn get_selected_identity(&self) -> Option<&str> {
        Some(&self.identity_name)
    }

    fn get_selected_identity_principal(&self) -> Option<Principal> {
        Some(self.principal)
    }

    fn get_logger(&self) -> &Logger {
        self.backend.get_logger()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_in(dir: &Path) -> EnvironmentImpl {
        EnvironmentImpl::new(Some(dir.join("portal.json")))
            .unwrap()
            .with_logger(Logger::root(slog::Discard, slog::o!()))
    }

    #[test]
    fn command_line_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let backend = Principal::from_text("rrkah-fqaaa-aaaaa-aaaaq-cai").unwrap();
        let env = env_in(dir.path())
            .with_network_override(Some("http://127.0.0.1:4943".to_string()))
            .with_backend_override(Some(backend))
            .with_identity_override(None);
        assert!(!env.get_network().is_ic());
        assert_eq!(env.get_backend_canister_id(), Some(backend));
        assert_eq!(env.get_identity_pem(), None);
        assert!(env.get_agent().is_none());
    }

    #[test]
    fn anonymous_agent_environment() {
        let dir = tempfile::tempdir().unwrap();
        let env = env_in(dir.path());
        let agent_env = AgentEnvironment::new(&env).unwrap();
        assert_eq!(agent_env.get_selected_identity(), Some("anonymous"));
        assert_eq!(
            agent_env.get_selected_identity_principal(),
            Some(Principal::anonymous())
        );
        assert!(agent_env.get_agent().is_some());
        assert_eq!(agent_env.get_tax_policy().unwrap().percent(), 20);
    }
}
