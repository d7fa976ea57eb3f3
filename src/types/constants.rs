//! Common constants for networks and schemes

/// CAIP-2 namespaces understood by this crate
pub mod namespaces {
    /// EVM chains, referenced by decimal chain id
    pub const EIP155: &str = "eip155";
    /// Solana clusters, referenced by genesis hash
    pub const SOLANA: &str = "solana";
}

/// Well-known CAIP-2 network identifiers
pub mod networks {
    /// Base mainnet
    pub const BASE_MAINNET: &str = "eip155:8453";
    /// Base Sepolia testnet
    pub const BASE_SEPOLIA: &str = "eip155:84532";
    /// Kaia mainnet
    pub const KAIA_MAINNET: &str = "eip155:8217";
    /// Kaia Kairos testnet
    pub const KAIA_KAIROS: &str = "eip155:1001";
    /// Solana mainnet-beta
    pub const SOLANA_MAINNET: &str = "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";
    /// Solana devnet
    pub const SOLANA_DEVNET: &str = "solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1";

    /// Solana mainnet-beta genesis hash (CAIP-2 reference)
    pub const SOLANA_MAINNET_GENESIS: &str = "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp";
    /// Solana devnet genesis hash (CAIP-2 reference)
    pub const SOLANA_DEVNET_GENESIS: &str = "EtWTRABZaYq6iMfeYKouRu166VU2xqa1";

    /// Format an EVM chain id as a CAIP-2 identifier
    ///
    /// `caip2(8453)` returns `"eip155:8453"`.
    pub fn caip2(chain_id: u64) -> String {
        format!("{}:{}", super::namespaces::EIP155, chain_id)
    }

    /// Parse the decimal chain id out of an `eip155:` identifier
    pub fn parse_evm_chain_id(network: &str) -> Option<u64> {
        evm_reference(network).and_then(|reference| reference.parse().ok())
    }

    /// Reference part of an `eip155:` identifier, unparsed
    pub fn evm_reference(network: &str) -> Option<&str> {
        network
            .strip_prefix(super::namespaces::EIP155)
            .and_then(|rest| rest.strip_prefix(':'))
    }

    /// Reference part of a `solana:` identifier
    pub fn solana_reference(network: &str) -> Option<&str> {
        network
            .strip_prefix(super::namespaces::SOLANA)
            .and_then(|rest| rest.strip_prefix(':'))
    }

    /// Split an identifier into `(namespace, reference)`
    ///
    /// Returns `None` unless both parts are non-empty.
    pub fn split_caip2(network: &str) -> Option<(&str, &str)> {
        let (namespace, reference) = network.split_once(':')?;
        if namespace.is_empty() || reference.is_empty() {
            return None;
        }
        Some((namespace, reference))
    }
}

/// Common payment schemes
pub mod schemes {
    /// Exact payment scheme
    pub const EXACT: &str = "exact";
}
