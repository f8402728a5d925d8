//! Demo Configuration
//!
//! Settings for the terminal demo, layered over [`StellarConfig`]. Values
//! come from command-line flags, environment variables (optionally loaded
//! from `.env`), or the built-in testnet defaults.

use crate::error::{DemoError, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use stellar_invoker::strkey::decode_contract_id;
use stellar_invoker::{Network, StellarConfig};

/// Default tracing filter when `RUST_LOG` is unset.
pub const DEFAULT_LOG_FILTER: &str = "stake_house_demo=info,stellar_invoker=info";

/// Demo Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DemoConfig {
    /// Target network.
    ///
    /// Default: `testnet`
    #[serde(default = "default_network")]
    pub network: Network,

    /// Horizon URL override.
    #[serde(default)]
    pub horizon_url: Option<String>,

    /// Friendbot URL override.
    #[serde(default)]
    pub friendbot_url: Option<String>,

    /// Fungible token contract override.
    #[serde(default)]
    pub fungible_contract_id: Option<String>,

    /// Stake house contract override.
    #[serde(default)]
    pub stake_house_contract_id: Option<String>,

    /// Directory used by `export` when none is given.
    ///
    /// Default: `.`
    #[serde(default = "default_export_dir")]
    pub export_dir: PathBuf,

    /// Generate and fund all five wallets at startup.
    ///
    /// Default: `true`
    #[serde(default = "default_bootstrap")]
    pub bootstrap: bool,
}

fn default_network() -> Network {
    Network::Testnet
}

fn default_export_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_bootstrap() -> bool {
    true
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            network: default_network(),
            horizon_url: None,
            friendbot_url: None,
            fungible_contract_id: None,
            stake_house_contract_id: None,
            export_dir: default_export_dir(),
            bootstrap: default_bootstrap(),
        }
    }
}

impl DemoConfig {
    /// Resolve the network configuration, applying overrides.
    pub fn stellar_config(&self) -> Result<StellarConfig> {
        let mut config = StellarConfig::for_network(self.network);

        if let Some(url) = &self.horizon_url {
            config.horizon_url = url.trim_end_matches('/').to_string();
        }
        if let Some(url) = &self.friendbot_url {
            config.friendbot_url = Some(url.clone());
        }
        if let Some(id) = &self.fungible_contract_id {
            config.fungible_contract_id = checked_contract_id(id)?;
        }
        if let Some(id) = &self.stake_house_contract_id {
            config.stake_house_contract_id = checked_contract_id(id)?;
        }

        if config.friendbot_url.is_none() {
            tracing::warn!("No friendbot on {:?}; wallet generation will fail", config.network);
        }

        Ok(config)
    }
}

fn checked_contract_id(id: &str) -> Result<String> {
    decode_contract_id(id).map_err(|e| DemoError::Config(format!("{}: {}", id, e)))?;
    Ok(id.to_string())
}

fn parse_network(value: &str) -> std::result::Result<Network, String> {
    match value.to_ascii_lowercase().as_str() {
        "testnet" => Ok(Network::Testnet),
        "mainnet" | "public" => Ok(Network::Mainnet),
        other => Err(format!("unknown network '{}'", other)),
    }
}

// ============================================================================
// Command line
// ============================================================================

/// Command-line flags for the `stake-house-demo` binary
#[derive(Debug, Parser)]
#[command(name = "stake-house-demo", version, about)]
pub struct CliArgs {
    /// Network to use (testnet or mainnet)
    #[arg(long, env = "STELLAR_NETWORK", default_value = "testnet", value_parser = parse_network)]
    pub network: Network,

    /// Horizon server URL
    #[arg(long, env = "HORIZON_URL")]
    pub horizon_url: Option<String>,

    /// Friendbot faucet URL
    #[arg(long, env = "FRIENDBOT_URL")]
    pub friendbot_url: Option<String>,

    /// Fungible token contract ID (C...)
    #[arg(long, env = "FUNGIBLE_CONTRACT_ID")]
    pub fungible_contract_id: Option<String>,

    /// Stake house contract ID (C...)
    #[arg(long, env = "STAKE_HOUSE_CONTRACT_ID")]
    pub stake_house_contract_id: Option<String>,

    /// Default directory for exported wallet files
    #[arg(long, env = "EXPORT_DIR", default_value = ".")]
    pub export_dir: PathBuf,

    /// Skip generating wallets at startup
    #[arg(long)]
    pub no_bootstrap: bool,
}

impl From<CliArgs> for DemoConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            network: args.network,
            horizon_url: args.horizon_url,
            friendbot_url: args.friendbot_url,
            fungible_contract_id: args.fungible_contract_id,
            stake_house_contract_id: args.stake_house_contract_id,
            export_dir: args.export_dir,
            bootstrap: !args.no_bootstrap,
        }
    }
}
