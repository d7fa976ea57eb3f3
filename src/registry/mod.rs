//! Chain metadata registry
//!
//! Display names and testnet flags for EVM chains come from a registry keyed
//! by numeric chain id. The registry is a collaborator handed to
//! [`NetworkMetadata`](crate::metadata::NetworkMetadata), so tests and hosts
//! can substitute their own table for the built-in one.
//!
//! # Examples
//!
//! ```
//! use x402_networks::registry::{ChainRegistry, StaticChainRegistry};
//!
//! let registry = StaticChainRegistry::new()
//!     .with_chain(8453, "Base", false)
//!     .with_chain(84532, "Base Sepolia", true);
//!
//! let base = registry.lookup_chain_by_id(8453).unwrap();
//! assert_eq!(base.name, "Base");
//! assert!(!base.testnet);
//! assert!(registry.lookup_chain_by_id(1).is_none());
//! ```
//!
//! ## Loading a Registry File
//!
//! ```no_run
//! use x402_networks::registry::StaticChainRegistry;
//!
//! # fn example() -> x402_networks::Result<()> {
//! // [{"id": 8453, "name": "Base", "testnet": false}, ...]
//! let registry = StaticChainRegistry::from_path("chains.json")?;
//! println!("{} chains loaded", registry.len());
//! # Ok(())
//! # }
//! ```

use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;


/// Metadata for one EVM chain
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ChainInfo {
    /// EIP-155 chain id
    pub id: u64,
    /// Human-readable chain name
    pub name: String,
    /// Whether the chain is a testnet
    #[serde(default)]
    pub testnet: bool,
}

impl ChainInfo {
    /// Create a new chain entry
    pub fn new(id: u64, name: impl Into<String>, testnet: bool) -> Self {
        Self {
            id,
            name: name.into(),
            testnet,
        }
    }
}

/// Read-only lookup of chain metadata by chain id
pub trait ChainRegistry {
    /// Metadata for `id`, if the registry knows the chain
    fn lookup_chain_by_id(&self, id: u64) -> Option<ChainInfo>;
}

impl<R: ChainRegistry + ?Sized> ChainRegistry for &R {
    fn lookup_chain_by_id(&self, id: u64) -> Option<ChainInfo> {
        (**self).lookup_chain_by_id(id)
    }
}

impl<R: ChainRegistry + ?Sized> ChainRegistry for Box<R> {
    fn lookup_chain_by_id(&self, id: u64) -> Option<ChainInfo> {
        (**self).lookup_chain_by_id(id)
    }
}

impl<R: ChainRegistry + ?Sized> ChainRegistry for Arc<R> {
    fn lookup_chain_by_id(&self, id: u64) -> Option<ChainInfo> {
        (**self).lookup_chain_by_id(id)
    }
}

/// Built-in chains, in lookup order. Kaia (8217, 1001) is not listed.
const WELL_KNOWN_CHAINS: &[(u64, &str, bool)] = &[
    (1, "Ethereum", false),
    (11155111, "Sepolia", true),
    (17000, "Holesky", true),
    (8453, "Base", false),
    (84532, "Base Sepolia", true),
    (10, "OP Mainnet", false),
    (11155420, "OP Sepolia", true),
    (42161, "Arbitrum One", false),
    (421614, "Arbitrum Sepolia", true),
    (137, "Polygon", false),
    (80002, "Polygon Amoy", true),
    (43114, "Avalanche", false),
    (43113, "Avalanche Fuji", true),
    (56, "BNB Smart Chain", false),
    (97, "Binance Smart Chain Testnet", true),
    (4689, "IoTeX", false),
    (1329, "Sei Network", false),
    (1328, "Sei Testnet", true),
];

/// Registry backed by an ordered in-memory list
///
/// When several entries share an id, the first one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticChainRegistry {
    chains: Vec<ChainInfo>,
}

impl Default for StaticChainRegistry {
    fn default() -> Self {
        Self::well_known()
    }
}

impl StaticChainRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { chains: Vec::new() }
    }

    /// Registry pre-populated with common EVM mainnets and testnets
    pub fn well_known() -> Self {
        Self {
            chains: WELL_KNOWN_CHAINS
                .iter()
                .map(|&(id, name, testnet)| ChainInfo::new(id, name, testnet))
                .collect(),
        }
    }

    /// Build a registry from a list of entries
    pub fn from_chains(chains: Vec<ChainInfo>) -> Self {
        Self { chains }
    }

    /// Parse a registry from a JSON array of `{id, name, testnet}` objects
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let chains: Vec<ChainInfo> = serde_json::from_str(json)?;
        Ok(Self::from_chains(chains))
    }

    /// Load a registry from a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let registry = Self::from_json(&json)?;
        tracing::debug!(
            path = %path.display(),
            chains = registry.len(),
            "Loaded chain registry"
        );
        Ok(registry)
    }

    /// Append a chain
    pub fn with_chain(mut self, id: u64, name: impl Into<String>, testnet: bool) -> Self {
        self.chains.push(ChainInfo::new(id, name, testnet));
        self
    }

    /// Append another registry's entries after this one's
    pub fn extend(&mut self, other: StaticChainRegistry) {
        self.chains.extend(other.chains);
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// Entries in lookup order
    pub fn chains(&self) -> &[ChainInfo] {
        &self.chains
    }
}

impl ChainRegistry for StaticChainRegistry {
    fn lookup_chain_by_id(&self, id: u64) -> Option<ChainInfo> {
        let found = self.chains.iter().find(|chain| chain.id == id).cloned();
        tracing::trace!(chain_id = id, hit = found.is_some(), "Chain registry lookup");
        found
    }
}
