//! Payment-related types

use super::constants::schemes;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// x402 protocol version that uses CAIP-2 network identifiers
pub const X402_VERSION: u32 = 2;

/// Payment requirements for a resource
///
/// Only `network` is interpreted by this crate. Every other member is kept
/// as raw JSON in [`terms`](Self::terms), whatever its shape, so a selected
/// requirement serializes back with the same members and values the server
/// sent, `null`s included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequirements {
    /// CAIP-2 network identifier (e.g., "eip155:8453")
    pub network: String,
    /// Remaining payment terms (scheme, amount, asset, payTo, ...)
    #[serde(flatten)]
    pub terms: Map<String, Value>,
}

impl PaymentRequirements {
    /// Create a new payment requirements instance
    pub fn new(scheme: impl Into<String>, network: impl Into<String>) -> Self {
        Self {
            network: network.into(),
            terms: Map::new(),
        }
        .with_term("scheme", scheme.into())
    }

    /// Requirements for the exact payment scheme
    pub fn exact(network: impl Into<String>) -> Self {
        Self::new(schemes::EXACT, network)
    }

    /// Set the asset
    pub fn with_asset(self, asset: impl Into<String>) -> Self {
        self.with_term("asset", asset.into())
    }

    /// Set the recipient
    pub fn with_pay_to(self, pay_to: impl Into<String>) -> Self {
        self.with_term("payTo", pay_to.into())
    }

    /// Set the maximum timeout
    pub fn with_max_timeout_seconds(self, max_timeout_seconds: u32) -> Self {
        self.with_term("maxTimeoutSeconds", max_timeout_seconds)
    }

    /// Set an arbitrary payment term
    pub fn with_term(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.terms.insert(key.into(), value.into());
        self
    }

    /// Look up a payment term by its wire name
    pub fn term(&self, key: &str) -> Option<&Value> {
        self.terms.get(key)
    }

    /// Payment scheme, when the server sent it as a string
    pub fn scheme(&self) -> Option<&str> {
        self.term("scheme").and_then(Value::as_str)
    }

    /// Asset, when the server sent it as a string
    pub fn asset(&self) -> Option<&str> {
        self.term("asset").and_then(Value::as_str)
    }

    /// Recipient, when the server sent it as a string
    pub fn pay_to(&self) -> Option<&str> {
        self.term("payTo").and_then(Value::as_str)
    }
}

/// Payment requirements response (HTTP 402 response)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequirementsResponse {
    /// Protocol version
    #[serde(rename = "x402Version")]
    pub x402_version: u32,
    /// Human-readable error message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Array of acceptable payment methods
    pub accepts: Vec<PaymentRequirements>,
}

impl PaymentRequirementsResponse {
    /// Create a new payment requirements response
    pub fn new(accepts: Vec<PaymentRequirements>) -> Self {
        Self {
            x402_version: X402_VERSION,
            error: None,
            accepts,
        }
    }

    /// Set the error message
    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Decode a base64-encoded response, as carried in the `PAYMENT-REQUIRED` header
    pub fn from_base64(encoded: &str) -> crate::Result<Self> {
        use base64::{engine::general_purpose, Engine as _};
        let decoded = general_purpose::STANDARD.decode(encoded.trim())?;
        let response: PaymentRequirementsResponse = serde_json::from_slice(&decoded)?;
        Ok(response)
    }

    /// Encode the response to base64
    pub fn to_base64(&self) -> crate::Result<String> {
        use base64::{engine::general_purpose, Engine as _};
        let json = serde_json::to_string(self)?;
        Ok(general_purpose::STANDARD.encode(json))
    }
}
