// ============================================================================
// STELLAR-INVOKER - Stellar Client
// ============================================================================
// High-level client for the demo: faucet funding and contract invocation.
// This is the API the application drives through `StellarGateway`.
//
// Every invocation is a single best-effort attempt:
//   load account -> build one InvokeHostFunction op -> sign -> submit
// ============================================================================

use crate::config::StellarConfig;
use crate::contract::{FungibleCall, StakeHouseCall};
use crate::horizon::HorizonClient;
use crate::keypair::Keypair;
use crate::scval::render_scval;
use crate::transaction::{return_value_from_meta, TransactionBuilder};
use crate::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use stellar_xdr::curr::ScVal;
use tracing::{info, warn};

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Result of a submitted contract call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvocationResult {
    pub contract_id: String,
    pub method: String,
    pub tx_hash: String,
    pub ledger: u64,
    pub successful: bool,
    pub explorer_url: String,
    /// Rendered contract return value, when the ledger meta carries one
    pub return_value: Option<String>,
}

// ============================================================================
// GATEWAY
// ============================================================================

/// Network operations the application needs
#[async_trait]
pub trait StellarGateway: Send + Sync {
    /// Ask the faucet to fund `address`
    async fn fund_account(&self, address: &str) -> Result<()>;

    /// Submit a fungible token call signed by `signer`
    async fn invoke_fungible(&self, call: &FungibleCall, signer: &Keypair) -> Result<InvocationResult>;

    /// Submit a stake house call signed by `signer`
    async fn invoke_stake_house(&self, call: &StakeHouseCall, signer: &Keypair) -> Result<InvocationResult>;
}

// ============================================================================
// STELLAR CLIENT
// ============================================================================

/// Horizon-backed implementation of [`StellarGateway`]
#[derive(Clone)]
pub struct StellarClient {
    config: StellarConfig,
    horizon: HorizonClient,
}

impl StellarClient {
    /// Create new client with config
    pub fn new(config: StellarConfig) -> Result<Self> {
        let horizon = HorizonClient::new(config.clone())?;
        Ok(Self { config, horizon })
    }

    /// Create testnet client
    pub fn testnet() -> Result<Self> {
        Self::new(StellarConfig::testnet())
    }

    /// Get configuration
    pub fn config(&self) -> &StellarConfig {
        &self.config
    }

    /// Build, sign and submit one contract call
    pub async fn invoke(
        &self,
        contract_id: &str,
        method: &str,
        args: Vec<ScVal>,
        signer: &Keypair,
    ) -> Result<InvocationResult> {
        let source = signer.public_key();
        let account = self.horizon.load_account(&source).await?;

        let signed = TransactionBuilder::new(&self.config, &source, &account)?
            .invoke_contract(contract_id, method, args)?
            .build()?
            .sign(signer)?;

        let response = self
            .horizon
            .submit_transaction(&signed.envelope_xdr, &source)
            .await?;

        let return_value = match response.result_meta_xdr.as_deref() {
            Some(meta) => match return_value_from_meta(meta) {
                Ok(value) => value.as_ref().map(render_scval),
                Err(e) => {
                    warn!("Could not decode result meta for {}: {}", response.hash, e);
                    None
                }
            },
            None => None,
        };

        info!("Contract call {}.{} submitted: {}", contract_id, method, response.hash);

        Ok(InvocationResult {
            contract_id: contract_id.to_string(),
            method: method.to_string(),
            explorer_url: self.config.explorer_tx_url(&response.hash),
            tx_hash: response.hash,
            ledger: response.ledger,
            successful: response.successful,
            return_value,
        })
    }
}

#[async_trait]
impl StellarGateway for StellarClient {
    async fn fund_account(&self, address: &str) -> Result<()> {
        self.horizon.friendbot_fund(address).await?;
        info!("Account {} funded via friendbot", address);
        Ok(())
    }

    async fn invoke_fungible(&self, call: &FungibleCall, signer: &Keypair) -> Result<InvocationResult> {
        let contract_id = self.config.fungible_contract_id.clone();
        self.invoke(&contract_id, call.method(), call.args()?, signer).await
    }

    async fn invoke_stake_house(&self, call: &StakeHouseCall, signer: &Keypair) -> Result<InvocationResult> {
        let contract_id = self.config.stake_house_contract_id.clone();
        self.invoke(&contract_id, call.method(), call.args()?, signer).await
    }
}

// ============================================================================
// TESTS
// ============================================================================
