//! Selector configuration

use crate::metadata::NetworkMetadata;
use crate::registry::{ChainRegistry, StaticChainRegistry};
use crate::selection::{get_preferred_networks, select_preferred, RequirementsInput};
use crate::types::{networks, PaymentRequirements};
use crate::{Result, X402Error};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Environment variable selecting testnet mode
pub const ENV_TESTNET: &str = "X402_TESTNET";
/// Environment variable overriding the preference list (comma-separated)
pub const ENV_PREFERRED_NETWORKS: &str = "X402_PREFERRED_NETWORKS";
/// Environment variable pointing at a JSON chain registry file
pub const ENV_CHAIN_REGISTRY: &str = "X402_CHAIN_REGISTRY";

/// Configuration for payment requirement selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorConfig {
    /// Whether to prefer testnets
    pub testnet: bool,
    /// Custom preference list replacing the built-in one for the mode
    pub preferred_networks: Option<Vec<String>>,
    /// Chain registry file used instead of the built-in table
    pub registry_path: Option<PathBuf>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorConfig {
    /// Create a new selector config (testnet mode, built-in preferences)
    pub fn new() -> Self {
        Self {
            testnet: true,
            preferred_networks: None,
            registry_path: None,
        }
    }

    /// Build a config from `X402_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::new();

        if let Some(raw) = lookup(ENV_TESTNET) {
            config.testnet = parse_bool(&raw).ok_or_else(|| {
                X402Error::config(format!("{} must be a boolean, got '{}'", ENV_TESTNET, raw))
            })?;
        }

        if let Some(raw) = lookup(ENV_PREFERRED_NETWORKS) {
            let list: Vec<String> = raw
                .split(',')
                .map(str::trim)
                .filter(|network| !network.is_empty())
                .map(String::from)
                .collect();
            if list.is_empty() {
                tracing::warn!(
                    "{} is set but empty, using built-in preferences",
                    ENV_PREFERRED_NETWORKS
                );
            } else {
                config.preferred_networks = Some(list);
            }
        }

        if let Some(raw) = lookup(ENV_CHAIN_REGISTRY) {
            if !raw.trim().is_empty() {
                config.registry_path = Some(PathBuf::from(raw.trim()));
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Set whether to prefer testnets
    pub fn with_testnet(mut self, testnet: bool) -> Self {
        self.testnet = testnet;
        self
    }

    /// Replace the built-in preference list
    pub fn with_preferred_networks<I, S>(mut self, preferred: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preferred_networks = Some(preferred.into_iter().map(Into::into).collect());
        self
    }

    /// Load chain metadata from a registry file
    pub fn with_registry_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.registry_path = Some(path.into());
        self
    }

    /// Validate the selector configuration
    pub fn validate(&self) -> Result<()> {
        if let Some(ref preferred) = self.preferred_networks {
            if preferred.is_empty() {
                return Err(X402Error::config("Preferred network list cannot be empty"));
            }
            if let Some(bad) = preferred
                .iter()
                .find(|network| networks::split_caip2(network).is_none())
            {
                return Err(X402Error::invalid_network(bad.clone()));
            }
        }

        Ok(())
    }

    /// Effective preference list, most preferred first
    pub fn preferred_networks(&self) -> Vec<String> {
        match self.preferred_networks {
            Some(ref preferred) => preferred.clone(),
            None => get_preferred_networks(self.testnet)
                .iter()
                .map(|network| network.to_string())
                .collect(),
        }
    }

    /// Registry named by the config, or the built-in one
    pub fn load_registry(&self) -> Result<StaticChainRegistry> {
        match self.registry_path {
            Some(ref path) => StaticChainRegistry::from_path(path),
            None => Ok(StaticChainRegistry::well_known()),
        }
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// A selected requirement along with its network metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedRequirement {
    /// The chosen requirement, as advertised
    pub requirement: PaymentRequirements,
    /// Display name of its network
    pub display_name: String,
    /// Whether its network is a testnet
    pub testnet: bool,
    /// False when no preferred network was offered and the first option was taken
    pub preferred: bool,
}

/// Configured selector that also describes what it picked
#[derive(Debug, Clone)]
pub struct PaymentSelector<R = StaticChainRegistry> {
    preferred: Vec<String>,
    metadata: NetworkMetadata<R>,
}

impl PaymentSelector {
    /// Build a selector from config, loading the registry it names
    pub fn from_config(config: &SelectorConfig) -> Result<Self> {
        let registry = config.load_registry()?;
        Self::with_registry(config, registry)
    }
}

impl<R: ChainRegistry> PaymentSelector<R> {
    /// Build a selector over an explicit registry
    pub fn with_registry(config: &SelectorConfig, registry: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            preferred: config.preferred_networks(),
            metadata: NetworkMetadata::new(registry),
        })
    }

    /// Effective preference list
    pub fn preferred_networks(&self) -> &[String] {
        &self.preferred
    }

    /// Metadata resolver used for descriptions
    pub fn metadata(&self) -> &NetworkMetadata<R> {
        &self.metadata
    }

    /// Choose a requirement and describe its network
    pub fn select(&self, input: impl Into<RequirementsInput>) -> Result<SelectedRequirement> {
        let requirements = crate::selection::normalize_payment_requirements(input);
        let requirement = select_preferred(&requirements, &self.preferred)
            .cloned()
            .ok_or(X402Error::NoPaymentRequirements)?;

        let preferred = self.preferred.iter().any(|n| *n == requirement.network);
        Ok(SelectedRequirement {
            display_name: self.metadata.display_name(&requirement.network),
            testnet: self.metadata.is_testnet(&requirement.network),
            preferred,
            requirement,
        })
    }
}
