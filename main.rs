//! x402 Network Selector
//!
//! Reads the payment requirements a resource server advertised (a full 402
//! response body, a JSON array of requirements, a single requirement, or the
//! base64 `PAYMENT-REQUIRED` header value) and
//! prints the one a client should pay with, together with its network's
//! display name and testnet flag.
//!
//! ## Usage
//!
//! ```text
//! x402-networks [FILE]     # FILE omitted or "-" reads stdin
//! ```
//!
//! ## Environment
//!
//! - `X402_TESTNET` - prefer testnets (default: true)
//! - `X402_PREFERRED_NETWORKS` - comma-separated CAIP-2 preference list
//! - `X402_CHAIN_REGISTRY` - JSON chain registry file
//! - `RUST_LOG` - log filter

use std::env;
use std::io::Read;
use tracing_subscriber::EnvFilter;

use x402_networks::{
    config::{ENV_CHAIN_REGISTRY, ENV_PREFERRED_NETWORKS, ENV_TESTNET},
    Network, PaymentSelector, RequirementsInput, Result, SelectorConfig,
};

fn main() {
    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let source = env::args().nth(1);
    if matches!(source.as_deref(), Some("-h") | Some("--help")) {
        print_usage();
        return Ok(());
    }

    let config = SelectorConfig::from_env()?;
    tracing::debug!(
        testnet = config.testnet,
        preferred = ?config.preferred_networks(),
        "Loaded selector configuration"
    );
    let selector = PaymentSelector::from_config(&config)?;

    let text = read_input(source.as_deref())?;
    let input = RequirementsInput::parse(&text)?;
    tracing::info!(offered = input.len(), "Selecting payment requirement");

    let selected = selector.select(input)?;
    let description = selector
        .metadata()
        .describe(&selected.requirement.network);

    let output = serde_json::json!({
        "mode": Network::from_testnet(config.testnet),
        "selected": selected,
        "network": description,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(())
}

fn read_input(source: Option<&str>) -> Result<String> {
    match source {
        None | Some("-") => {
            let mut json = String::new();
            std::io::stdin().read_to_string(&mut json)?;
            Ok(json)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn print_usage() {
    println!("x402-networks {}", x402_networks::VERSION);
    println!("Select the payment requirement to pay with from an x402 402 response.\n");
    println!("Usage: x402-networks [FILE]   (reads stdin when FILE is omitted or '-')\n");
    println!("Environment variables:");
    println!("   {} - Prefer testnets (default: true)", ENV_TESTNET);
    println!(
        "   {} - Comma-separated CAIP-2 preference list",
        ENV_PREFERRED_NETWORKS
    );
    println!("   {} - JSON chain registry file", ENV_CHAIN_REGISTRY);
}
