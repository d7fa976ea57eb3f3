//! Human-readable metadata for CAIP-2 network identifiers
//!
//! Resolves display names and testnet flags for any network identifier.
//! EVM chains are looked up in a [`ChainRegistry`], with small built-in
//! tables for chains the registry does not carry. Solana clusters are
//! recognised by genesis hash. Nothing here fails: identifiers that cannot be
//! interpreted fall back to the identifier itself (display name) or `false`.
//!
//! # Examples
//!
//! ```
//! use x402_networks::metadata::{get_network_display_name, is_testnet_network};
//!
//! assert_eq!(get_network_display_name("eip155:8453"), "Base");
//! assert_eq!(get_network_display_name("eip155:8217"), "Kaia");
//! assert_eq!(get_network_display_name("eip155:999999999"), "Chain 999999999");
//! assert!(is_testnet_network("eip155:1001"));
//! ```
//!
//! ## Using a Custom Registry
//!
//! ```
//! use x402_networks::metadata::NetworkMetadata;
//! use x402_networks::registry::StaticChainRegistry;
//!
//! let metadata = NetworkMetadata::new(StaticChainRegistry::new().with_chain(10, "Optimism", false));
//! assert_eq!(metadata.display_name("eip155:10"), "Optimism");
//! assert_eq!(metadata.display_name("eip155:8453"), "Chain 8453");
//! ```

use crate::registry::{ChainRegistry, StaticChainRegistry};
use crate::types::{networks, NetworkFamily};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Display names for EVM chains missing from the registry
const CHAIN_NAME_OVERRIDES: &[(u64, &str)] = &[(8217, "Kaia"), (1001, "Kaia Kairos")];

/// EVM testnets recognised even when the registry lacks them
const FALLBACK_TESTNET_CHAIN_IDS: &[u64] = &[84532, 1001];

const SOLANA_MAINNET_LABEL: &str = "Solana";
const SOLANA_DEVNET_LABEL: &str = "Solana Devnet";

static DEFAULT_METADATA: LazyLock<NetworkMetadata> =
    LazyLock::new(|| NetworkMetadata::new(StaticChainRegistry::well_known()));

/// Whether `network` is an EVM (`eip155:`) identifier
pub fn is_evm_network(network: &str) -> bool {
    NetworkFamily::of(network) == NetworkFamily::Evm
}

/// Whether `network` is a Solana (`solana:`) identifier
pub fn is_svm_network(network: &str) -> bool {
    NetworkFamily::of(network) == NetworkFamily::Svm
}

/// Display name for `network` using the built-in registry
pub fn get_network_display_name(network: &str) -> String {
    DEFAULT_METADATA.display_name(network)
}

/// Whether `network` is a testnet, using the built-in registry
pub fn is_testnet_network(network: &str) -> bool {
    DEFAULT_METADATA.is_testnet(network)
}

/// Everything known about a network identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkDescription {
    /// The identifier as given
    pub network: String,
    /// Human-readable name
    pub display_name: String,
    /// Whether the network is a testnet
    pub testnet: bool,
    /// Chain family
    pub family: NetworkFamily,
}

/// Network metadata resolver backed by a chain registry
#[derive(Debug, Clone)]
pub struct NetworkMetadata<R = StaticChainRegistry> {
    registry: R,
}

impl Default for NetworkMetadata {
    fn default() -> Self {
        Self::new(StaticChainRegistry::well_known())
    }
}

impl<R: ChainRegistry> NetworkMetadata<R> {
    /// Create a resolver over `registry`
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    /// The underlying registry
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Human-readable name for a network identifier
    ///
    /// Unknown namespaces are returned unchanged.
    pub fn display_name(&self, network: &str) -> String {
        if let Some(reference) = networks::evm_reference(network) {
            let Ok(chain_id) = reference.parse::<u64>() else {
                return format!("Chain {}", reference);
            };
            if let Some(chain) = self.registry.lookup_chain_by_id(chain_id) {
                return chain.name;
            }
            return CHAIN_NAME_OVERRIDES
                .iter()
                .find(|(id, _)| *id == chain_id)
                .map(|(_, name)| name.to_string())
                .unwrap_or_else(|| format!("Chain {}", chain_id));
        }

        if let Some(reference) = networks::solana_reference(network) {
            let label = if reference == networks::SOLANA_DEVNET_GENESIS {
                SOLANA_DEVNET_LABEL
            } else {
                SOLANA_MAINNET_LABEL
            };
            return label.to_string();
        }

        network.to_string()
    }

    /// Whether a network identifier refers to a testnet
    pub fn is_testnet(&self, network: &str) -> bool {
        if let Some(reference) = networks::evm_reference(network) {
            let Ok(chain_id) = reference.parse::<u64>() else {
                return false;
            };
            return match self.registry.lookup_chain_by_id(chain_id) {
                Some(chain) => chain.testnet,
                None => FALLBACK_TESTNET_CHAIN_IDS.contains(&chain_id),
            };
        }

        if let Some(reference) = networks::solana_reference(network) {
            return reference == networks::SOLANA_DEVNET_GENESIS;
        }

        false
    }

    /// Resolve name, testnet flag and family in one go
    pub fn describe(&self, network: &str) -> NetworkDescription {
        NetworkDescription {
            network: network.to_string(),
            display_name: self.display_name(network),
            testnet: self.is_testnet(network),
            family: NetworkFamily::of(network),
        }
    }
}
