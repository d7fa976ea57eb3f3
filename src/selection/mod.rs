//! Payment requirement selection
//!
//! A resource server may advertise several acceptable payment options. The
//! selector picks the one a client should pay with by scanning a fixed
//! per-mode preference list; when nothing on the list is offered it falls
//! back to the first option the server advertised.
//!
//! # Architecture
//!
//! - [`RequirementsInput`] - one requirement or a list, as servers send either
//! - [`normalize_payment_requirements`] - flatten the input into a list
//! - [`get_preferred_networks`] - preference order for a mode
//! - [`select_preferred`] - borrowing core of the selector
//! - [`choose_payment_requirement`] - normalize and select in one call
//!
//! # Examples
//!
//! ```
//! use x402_networks::selection::choose_payment_requirement;
//! use x402_networks::types::{networks, PaymentRequirements};
//!
//! # fn example() -> x402_networks::Result<()> {
//! let offered = vec![
//!     PaymentRequirements::new("exact", networks::SOLANA_DEVNET),
//!     PaymentRequirements::new("exact", networks::BASE_SEPOLIA),
//! ];
//!
//! let chosen = choose_payment_requirement(offered, true)?;
//! assert_eq!(chosen.network, networks::BASE_SEPOLIA);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use crate::types::{Network, PaymentRequirements, PaymentRequirementsResponse};
use crate::{Result, X402Error};
use serde::{Deserialize, Serialize};

#[cfg(test)]
mod tests;

/// One payment requirement or an ordered list of them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementsInput {
    Many(Vec<PaymentRequirements>),
    One(Box<PaymentRequirements>),
}

impl RequirementsInput {
    /// Parse requirements from JSON
    ///
    /// Accepts a full 402 response body (its `accepts` list is used), a JSON
    /// array of requirements, or a single requirement object.
    pub fn from_json(json: &str) -> Result<Self> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Document {
            Response(PaymentRequirementsResponse),
            Input(RequirementsInput),
        }

        match serde_json::from_str::<Document>(json) {
            Ok(Document::Response(response)) => Ok(Self::Many(response.accepts)),
            Ok(Document::Input(input)) => Ok(input),
            Err(_) => {
                // Report what kind of JSON value was given
                let value: serde_json::Value = serde_json::from_str(json)?;
                Err(X402Error::invalid_payment_requirements(format!(
                    "expected a 402 response, a requirement or a list of requirements, got {}",
                    json_kind(&value)
                )))
            }
        }
    }

    /// Parse requirements from JSON or from a base64 `PAYMENT-REQUIRED` header
    ///
    /// Text starting with `{` or `[` is read as JSON (see [`from_json`](Self::from_json));
    /// anything else is decoded as a base64 402 response.
    pub fn parse(text: &str) -> Result<Self> {
        let text = text.trim();
        if text.starts_with('{') || text.starts_with('[') {
            return Self::from_json(text);
        }

        tracing::debug!("Input is not JSON, decoding as base64 402 response");
        PaymentRequirementsResponse::from_base64(text).map(Self::from)
    }

    /// Number of requirements carried
    pub fn len(&self) -> usize {
        match self {
            Self::Many(requirements) => requirements.len(),
            Self::One(_) => 1,
        }
    }

    /// Whether no requirements are carried
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array with invalid entries",
        serde_json::Value::Object(_) => "an object without a network",
    }
}

impl From<PaymentRequirements> for RequirementsInput {
    fn from(requirements: PaymentRequirements) -> Self {
        Self::One(Box::new(requirements))
    }
}

impl From<Vec<PaymentRequirements>> for RequirementsInput {
    fn from(requirements: Vec<PaymentRequirements>) -> Self {
        Self::Many(requirements)
    }
}

impl From<&[PaymentRequirements]> for RequirementsInput {
    fn from(requirements: &[PaymentRequirements]) -> Self {
        Self::Many(requirements.to_vec())
    }
}

impl From<PaymentRequirementsResponse> for RequirementsInput {
    fn from(response: PaymentRequirementsResponse) -> Self {
        Self::Many(response.accepts)
    }
}

/// Flatten one requirement or a list into a list, preserving order
pub fn normalize_payment_requirements(
    input: impl Into<RequirementsInput>,
) -> Vec<PaymentRequirements> {
    match input.into() {
        RequirementsInput::Many(requirements) => requirements,
        RequirementsInput::One(requirements) => vec![*requirements],
    }
}

/// Networks to prefer for the given mode, most preferred first
pub fn get_preferred_networks(testnet: bool) -> &'static [&'static str] {
    Network::from_testnet(testnet).preferred_networks()
}

/// Pick a requirement by preference list
///
/// Returns the first requirement on the most preferred network that is
/// offered, or the first requirement when none of `preferred` is offered.
/// `None` only for an empty slice.
pub fn select_preferred<'a, S: AsRef<str>>(
    requirements: &'a [PaymentRequirements],
    preferred: &[S],
) -> Option<&'a PaymentRequirements> {
    for network in preferred {
        let network = network.as_ref();
        if let Some(requirement) = requirements.iter().find(|r| r.network == network) {
            tracing::debug!(network, "Selected payment requirement on preferred network");
            return Some(requirement);
        }
    }

    let fallback = requirements.first();
    if let Some(requirement) = fallback {
        tracing::debug!(
            network = %requirement.network,
            "No preferred network offered, using first payment requirement"
        );
    }
    fallback
}

/// Choose the requirement a client should pay with
///
/// # Errors
///
/// [`X402Error::NoPaymentRequirements`] when the input is an empty list.
pub fn choose_payment_requirement(
    input: impl Into<RequirementsInput>,
    testnet: bool,
) -> Result<PaymentRequirements> {
    let requirements = normalize_payment_requirements(input);
    select_preferred(&requirements, get_preferred_networks(testnet))
        .cloned()
        .ok_or(X402Error::NoPaymentRequirements)
}
