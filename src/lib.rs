//! # x402 Network Selection
//!
//! Payment network selection and chain metadata for the x402 HTTP-native
//! micropayment protocol.
//!
//! A resource server answering `402 Payment Required` advertises one or more
//! acceptable payment options, each bound to a CAIP-2 network such as
//! `eip155:8453` (Base) or `solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp`. This
//! crate picks the option a client should pay with and tells you what each
//! network is called and whether it is a testnet.
//!
//! ## Features
//!
//! - **Requirement selection**: fixed per-mode preference order with first-offer fallback
//! - **Network metadata**: display names and testnet flags for EVM and Solana networks
//! - **Pluggable chain registry**: inject your own chain table or load one from JSON
//! - **Configuration**: builder API and `X402_*` environment variables
//!
//! ## Quick Start
//!
//! ```rust
//! use x402_networks::{
//!     choose_payment_requirement, get_network_display_name, is_testnet_network,
//!     types::{networks, PaymentRequirements},
//! };
//!
//! # fn main() -> x402_networks::Result<()> {
//! let offered = vec![
//!     PaymentRequirements::new("exact", networks::SOLANA_DEVNET),
//!     PaymentRequirements::new("exact", networks::BASE_SEPOLIA),
//! ];
//!
//! let chosen = choose_payment_requirement(offered, true)?;
//! assert_eq!(chosen.network, "eip155:84532");
//! assert_eq!(get_network_display_name(&chosen.network), "Base Sepolia");
//! assert!(is_testnet_network(&chosen.network));
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`types`**: Payment requirements, 402 responses, network modes and constants
//! - **`registry`**: Chain registry trait and the built-in static table
//! - **`metadata`**: EVM/SVM classification, display names, testnet detection
//! - **`selection`**: Requirement normalization and selection
//! - **`config`**: Selector configuration and the configured [`PaymentSelector`]
//! - **`error`**: Error handling
//!
//! ## Supported Networks
//!
//! Preferred, in order:
//! - **Mainnet**: Base, Kaia, Solana
//! - **Testnet**: Base Sepolia, Kaia Kairos, Solana Devnet

pub mod config;
pub mod error;
pub mod metadata;
pub mod registry;
pub mod selection;
pub mod types;

// Re-exports for convenience
pub use config::{PaymentSelector, SelectedRequirement, SelectorConfig};
pub use error::{Result, X402Error};
pub use metadata::{
    get_network_display_name, is_evm_network, is_svm_network, is_testnet_network,
    NetworkDescription, NetworkMetadata,
};
pub use registry::{ChainInfo, ChainRegistry, StaticChainRegistry};
pub use selection::{
    choose_payment_requirement, get_preferred_networks, normalize_payment_requirements,
    RequirementsInput,
};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
