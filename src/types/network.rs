//! Network mode and chain family types

use super::constants::{namespaces, networks};
use serde::{Deserialize, Serialize};

/// Preference order used when paying on mainnets
const MAINNET_PREFERENCE: [&str; 3] = [
    networks::BASE_MAINNET,
    networks::KAIA_MAINNET,
    networks::SOLANA_MAINNET,
];

/// Preference order used when paying on testnets
const TESTNET_PREFERENCE: [&str; 3] = [
    networks::BASE_SEPOLIA,
    networks::KAIA_KAIROS,
    networks::SOLANA_DEVNET,
];

/// Whether a client operates against mainnets or testnets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Network {
    /// Map the boolean testnet flag onto a mode
    pub fn from_testnet(testnet: bool) -> Self {
        if testnet {
            Network::Testnet
        } else {
            Network::Mainnet
        }
    }

    /// Whether this is the testnet mode
    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }

    /// Get the mode name
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }

    /// Networks a client should pay on, most preferred first
    pub fn preferred_networks(&self) -> &'static [&'static str] {
        match self {
            Network::Mainnet => &MAINNET_PREFERENCE,
            Network::Testnet => &TESTNET_PREFERENCE,
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Virtual-machine family a network identifier belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NetworkFamily {
    /// `eip155:` chains
    Evm,
    /// `solana:` clusters
    Svm,
    /// Any other namespace, or a malformed identifier
    Unknown,
}

impl NetworkFamily {
    /// Classify a network identifier by its namespace prefix
    pub fn of(network: &str) -> Self {
        if networks::evm_reference(network).is_some() {
            NetworkFamily::Evm
        } else if networks::solana_reference(network).is_some() {
            NetworkFamily::Svm
        } else {
            NetworkFamily::Unknown
        }
    }

    /// CAIP-2 namespace of the family, if it has one
    pub fn namespace(&self) -> Option<&'static str> {
        match self {
            NetworkFamily::Evm => Some(namespaces::EIP155),
            NetworkFamily::Svm => Some(namespaces::SOLANA),
            NetworkFamily::Unknown => None,
        }
    }
}
