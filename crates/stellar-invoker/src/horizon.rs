// ============================================================================
// STELLAR-INVOKER - Horizon API Client
// ============================================================================
// HTTP client for Stellar's Horizon API and the testnet friendbot.
// Handles account loading, transaction submission and faucet funding.
// ============================================================================

use crate::config::StellarConfig;
use crate::error::InvokerError;
use crate::Result;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result codes that mean the source cannot pay for the transaction
const INSUFFICIENT_FUNDS_CODES: &[&str] = &[
    "tx_insufficient_balance",
    "tx_insufficient_fee",
    "op_underfunded",
];

// ============================================================================
// DATA TYPES
// ============================================================================

/// Account balance information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    /// Asset type: "native" for XLM
    pub asset_type: String,

    /// Asset code (empty for native XLM)
    #[serde(default)]
    pub asset_code: String,

    /// Balance amount as string (Stellar uses string for precision)
    pub balance: String,
}

impl Balance {
    /// Check if this is native XLM
    pub fn is_native(&self) -> bool {
        self.asset_type == "native"
    }
}

/// Stellar account information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInfo {
    /// Account public key (G... address)
    pub id: String,

    /// Current sequence number
    pub sequence: String,

    /// Account balances
    #[serde(default)]
    pub balances: Vec<Balance>,

    /// Number of subentries
    #[serde(default)]
    pub subentry_count: u32,
}

impl AccountInfo {
    /// XLM balance as reported by Horizon
    pub fn xlm_balance(&self) -> Option<&str> {
        self.balances
            .iter()
            .find(|b| b.is_native())
            .map(|b| b.balance.as_str())
    }
}

/// Transaction submission result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionResponse {
    pub hash: String,
    #[serde(default)]
    pub ledger: u64,
    #[serde(default)]
    pub successful: bool,
    #[serde(default)]
    pub envelope_xdr: String,
    #[serde(default)]
    pub result_xdr: String,
    #[serde(default)]
    pub result_meta_xdr: Option<String>,
    #[serde(default)]
    pub fee_charged: Option<String>,
}

/// Horizon error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizonErrorResponse {
    #[serde(rename = "type")]
    pub error_type: Option<String>,
    pub title: Option<String>,
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub extras: Option<HorizonErrorExtras>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HorizonErrorExtras {
    pub envelope_xdr: Option<String>,
    pub result_codes: Option<ResultCodes>,
    pub result_xdr: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultCodes {
    pub transaction: Option<String>,
    pub operations: Option<Vec<String>>,
}

impl ResultCodes {
    fn all(&self) -> impl Iterator<Item = &str> {
        self.transaction
            .iter()
            .map(String::as_str)
            .chain(self.operations.iter().flatten().map(String::as_str))
    }

    fn describe(&self) -> String {
        format!(
            "tx: {}, ops: [{}]",
            self.transaction.as_deref().unwrap_or("-"),
            self.operations.as_deref().unwrap_or_default().join(", ")
        )
    }
}

/// Translate a 400 response from `POST /transactions` into an error
fn rejection_error(error: HorizonErrorResponse, source: &str) -> InvokerError {
    let codes = error
        .extras
        .and_then(|extras| extras.result_codes)
        .unwrap_or_default();

    if codes.all().any(|code| INSUFFICIENT_FUNDS_CODES.contains(&code)) {
        return InvokerError::InsufficientFunds(codes.describe());
    }

    if codes.all().any(|code| code == "tx_no_source_account") {
        return InvokerError::AccountNotFound(source.to_string());
    }

    let reason = if codes.transaction.is_some() {
        codes.describe()
    } else {
        error
            .detail
            .or(error.title)
            .unwrap_or_else(|| "unknown reason".to_string())
    };

    InvokerError::TransactionRejected { reason }
}

// ============================================================================
// HORIZON CLIENT
// ============================================================================

/// Client for Stellar Horizon API
#[derive(Clone)]
pub struct HorizonClient {
    config: StellarConfig,
    http: Client,
}

impl HorizonClient {
    /// Create new Horizon client
    pub fn new(config: StellarConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| InvokerError::ConfigError(format!("HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Create client for testnet
    pub fn testnet() -> Result<Self> {
        Self::new(StellarConfig::testnet())
    }

    /// Get configuration
    pub fn config(&self) -> &StellarConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.config.horizon_url.trim_end_matches('/'), path)
    }

    // ==================== Account Operations ====================

    /// Check if account exists
    pub async fn account_exists(&self, address: &str) -> Result<bool> {
        let response = self.http.get(self.url(&format!("accounts/{}", address))).send().await?;

        match response.status().as_u16() {
            200 => Ok(true),
            404 => Ok(false),
            429 => Err(InvokerError::RateLimited),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(InvokerError::HorizonError(format!(
                    "HTTP {}: {}", status, error_text
                )))
            }
        }
    }

    /// Load account information (sequence number in particular)
    pub async fn load_account(&self, address: &str) -> Result<AccountInfo> {
        debug!("Loading account: {}", address);

        let response = self.http.get(self.url(&format!("accounts/{}", address))).send().await?;

        match response.status().as_u16() {
            200 => {
                let account: AccountInfo = response.json().await?;
                Ok(account)
            }
            404 => Err(InvokerError::AccountNotFound(address.to_string())),
            429 => Err(InvokerError::RateLimited),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(InvokerError::HorizonError(format!(
                    "HTTP {}: {}", status, error_text
                )))
            }
        }
    }

    // ==================== Transaction Submission ====================

    /// Submit a signed transaction envelope (base64 XDR)
    pub async fn submit_transaction(&self, envelope_xdr: &str, source: &str) -> Result<TransactionResponse> {
        debug!("Submitting transaction from {}", source);

        let response = self
            .http
            .post(self.url("transactions"))
            .form(&[("tx", envelope_xdr)])
            .send()
            .await?;

        match response.status().as_u16() {
            200 => {
                let tx_response: TransactionResponse = response.json().await?;
                debug!("Transaction successful: {}", tx_response.hash);
                Ok(tx_response)
            }
            400 => {
                let error: HorizonErrorResponse = response.json().await?;
                let err = rejection_error(error, source);
                warn!("Transaction rejected: {}", err);
                Err(err)
            }
            429 => Err(InvokerError::RateLimited),
            504 => Err(InvokerError::TransactionTimeout),
            status => {
                let error_text = response.text().await.unwrap_or_default();
                Err(InvokerError::HorizonError(format!(
                    "HTTP {}: {}", status, error_text
                )))
            }
        }
    }

    // ==================== Testnet Only ====================

    /// Fund account using friendbot (testnet only)
    pub async fn friendbot_fund(&self, address: &str) -> Result<serde_json::Value> {
        let friendbot_url = self.config.friendbot_url.as_deref().ok_or_else(|| {
            InvokerError::ConfigError("Friendbot only available on testnet".to_string())
        })?;

        debug!("Requesting friendbot funding for: {}", address);

        let response = self
            .http
            .get(friendbot_url)
            .query(&[("addr", address)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Friendbot refused {}: HTTP {}", address, status.as_u16());
            return Err(InvokerError::FaucetError {
                status: status.as_u16(),
            });
        }

        debug!("Friendbot funded account: {}", address);
        Ok(response.json().await.unwrap_or(serde_json::Value::Null))
    }
}
