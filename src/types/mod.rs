//! Core types for x402 network selection
//!
//! This module defines the data structures shared by the selector and the
//! metadata resolver: payment requirements as advertised by a resource server,
//! the 402 response envelope that carries them, the mainnet/testnet mode and
//! the chain family of a CAIP-2 identifier.
//!
//! # Architecture
//!
//! - [`payment`] - Payment requirements and the 402 response envelope
//! - [`network`] - Network mode and chain family
//! - [`constants`] - CAIP-2 namespaces, well-known networks and schemes
//!
//! # Examples
//!
//! ## Creating Payment Requirements
//!
//! ```
//! use x402_networks::types::{networks, PaymentRequirements};
//!
//! let requirements = PaymentRequirements::new("exact", networks::BASE_SEPOLIA)
//!     .with_asset("0x036CbD53842c5426634e7929541eC2318f3dCF7e")
//!     .with_pay_to("0x209693Bc6afc0C5328bA36FaF03C514EF312287C")
//!     .with_term("amount", "10000");
//!
//! assert_eq!(requirements.network, "eip155:84532");
//! assert_eq!(requirements.term("amount").unwrap(), "10000");
//! ```
//!
//! ## Decoding a 402 Header
//!
//! ```
//! use x402_networks::types::{networks, PaymentRequirements, PaymentRequirementsResponse};
//!
//! # fn example() -> x402_networks::Result<()> {
//! let response = PaymentRequirementsResponse::new(vec![PaymentRequirements::new(
//!     "exact",
//!     networks::SOLANA_DEVNET,
//! )]);
//! let header = response.to_base64()?;
//!
//! let decoded = PaymentRequirementsResponse::from_base64(&header)?;
//! assert_eq!(decoded.accepts[0].network, networks::SOLANA_DEVNET);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! ## Network Modes
//!
//! ```
//! use x402_networks::types::{Network, NetworkFamily};
//!
//! let mode = Network::from_testnet(true);
//! assert_eq!(mode.preferred_networks()[0], "eip155:84532");
//! assert_eq!(NetworkFamily::of("solana:EtWTRABZaYq6iMfeYKouRu166VU2xqa1"), NetworkFamily::Svm);
//! ```

pub mod constants;
pub mod network;
pub mod payment;

// Re-export commonly used types
pub use constants::{namespaces, networks, schemes};
pub use network::{Network, NetworkFamily};
pub use payment::{PaymentRequirements, PaymentRequirementsResponse, X402_VERSION};
