//! Error types for x402 network selection

use thiserror::Error;

/// Result type alias for x402 operations
pub type Result<T> = std::result::Result<T, X402Error>;

/// Errors produced while loading, configuring or selecting payment requirements
///
/// Network lookups themselves never fail; malformed identifiers degrade to
/// fallback values instead.
#[derive(Error, Debug)]
pub enum X402Error {
    /// JSON (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 decoding failed
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// Reading an input or registry file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A network identifier is not of the `<namespace>:<reference>` form
    #[error("Invalid network identifier: {network}")]
    InvalidNetwork { network: String },

    /// Payment requirements could not be interpreted
    #[error("Invalid payment requirements: {message}")]
    InvalidPaymentRequirements { message: String },

    /// The selector was handed an empty set of requirements
    #[error("No payment requirements provided")]
    NoPaymentRequirements,
}

impl X402Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid network error
    pub fn invalid_network(network: impl Into<String>) -> Self {
        Self::InvalidNetwork {
            network: network.into(),
        }
    }

    /// Create an invalid payment requirements error
    pub fn invalid_payment_requirements(message: impl Into<String>) -> Self {
        Self::InvalidPaymentRequirements {
            message: message.into(),
        }
    }
}
