// ============================================================================
// STELLAR-INVOKER - Configuration
// ============================================================================
// Network configuration and the fixed contract addresses used by the demo.

use serde::{Deserialize, Serialize};

/// Fungible token contract deployed on testnet
pub const FUNGIBLE_CONTRACT_ID: &str = "CCSZ3PUWNPFQNERNJVQUVY4LB42VRLCAQZCJZE6LUILHSJO7AYF45NMI";

/// Stake house contract deployed on testnet
pub const STAKE_HOUSE_CONTRACT_ID: &str = "CAYTL7YU3XCI46HSJQSJSD3DPHX525NJCP6CZUKQJ2B7KOMOIYANIAWO";

/// Admin account that deployed both contracts
pub const ADMIN_PUBLIC_KEY: &str = "GBB7GMUFUCEJHUOIMD3GFC7IPK4O43ZCTAEOIAWE6I34B2TLVB5M373I";

/// Network selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    Testnet,
}

impl Default for Network {
    fn default() -> Self {
        #[cfg(feature = "mainnet")]
        return Network::Mainnet;

        #[cfg(not(feature = "mainnet"))]
        return Network::Testnet;
    }
}

/// Stellar network configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StellarConfig {
    /// Network (mainnet or testnet)
    pub network: Network,

    /// Horizon API URL
    pub horizon_url: String,

    /// Network passphrase for transaction signing
    pub network_passphrase: String,

    /// Friendbot URL (testnet only)
    pub friendbot_url: Option<String>,

    /// Fungible token contract (C... address)
    pub fungible_contract_id: String,

    /// Stake house contract (C... address)
    pub stake_house_contract_id: String,

    /// Contract admin (G... address)
    pub admin_public_key: String,

    /// Base fee in stroops (1 XLM = 10,000,000 stroops)
    pub base_fee: u32,

    /// Transaction validity window in seconds
    pub tx_timeout_secs: u64,

    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl StellarConfig {
    /// Create testnet configuration
    pub fn testnet() -> Self {
        Self {
            network: Network::Testnet,
            horizon_url: "https://horizon-testnet.stellar.org".to_string(),
            network_passphrase: "Test SDF Network ; September 2015".to_string(),
            friendbot_url: Some("https://friendbot.stellar.org".to_string()),
            fungible_contract_id: FUNGIBLE_CONTRACT_ID.to_string(),
            stake_house_contract_id: STAKE_HOUSE_CONTRACT_ID.to_string(),
            admin_public_key: ADMIN_PUBLIC_KEY.to_string(),
            base_fee: 100,
            tx_timeout_secs: 30,
            request_timeout_secs: 30,
        }
    }

    /// Create mainnet configuration (no friendbot)
    pub fn mainnet() -> Self {
        Self {
            network: Network::Mainnet,
            horizon_url: "https://horizon.stellar.org".to_string(),
            network_passphrase: "Public Global Stellar Network ; September 2015".to_string(),
            friendbot_url: None,
            ..Self::testnet()
        }
    }

    /// Configuration for a given network
    pub fn for_network(network: Network) -> Self {
        match network {
            Network::Mainnet => Self::mainnet(),
            Network::Testnet => Self::testnet(),
        }
    }

    /// Check if this is mainnet
    pub fn is_mainnet(&self) -> bool {
        self.network == Network::Mainnet
    }

    /// Get Stellar Expert explorer URL for a transaction
    pub fn explorer_tx_url(&self, hash: &str) -> String {
        match self.network {
            Network::Mainnet => format!("https://stellar.expert/explorer/public/tx/{}", hash),
            Network::Testnet => format!("https://stellar.expert/explorer/testnet/tx/{}", hash),
        }
    }
}

impl Default for StellarConfig {
    fn default() -> Self {
        Self::for_network(Network::default())
    }
}
