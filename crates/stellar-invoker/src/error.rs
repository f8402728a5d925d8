// ============================================================================
// STELLAR-INVOKER - Error Types
// ============================================================================

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvokerError {
    // ==================== Key Errors ====================
    #[error("Invalid Stellar address: {0}")]
    InvalidStellarAddress(String),

    #[error("Invalid contract id: {0}")]
    InvalidContractId(String),

    #[error("Invalid secret key")]
    InvalidSecretKey,

    // ==================== Account Errors ====================
    #[error("Account not found: {0}")]
    AccountNotFound(String),

    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),

    // ==================== Transaction Errors ====================
    #[error("Transaction rejected: {reason}")]
    TransactionRejected { reason: String },

    #[error("Transaction timeout")]
    TransactionTimeout,

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("XDR error: {0}")]
    Xdr(String),

    // ==================== Network Errors ====================
    #[error("Horizon API error: {0}")]
    HorizonError(String),

    #[error("Friendbot error: HTTP {status}")]
    FaucetError { status: u16 },

    #[error("Network request failed: {0}")]
    NetworkError(String),

    #[error("Rate limited - try again later")]
    RateLimited,

    // ==================== Configuration Errors ====================
    #[error("Configuration error: {0}")]
    ConfigError(String),

    // ==================== Internal Errors ====================
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<reqwest::Error> for InvokerError {
    fn from(err: reqwest::Error) -> Self {
        InvokerError::NetworkError(err.to_string())
    }
}

impl From<serde_json::Error> for InvokerError {
    fn from(err: serde_json::Error) -> Self {
        InvokerError::SerializationError(err.to_string())
    }
}

impl From<stellar_xdr::curr::Error> for InvokerError {
    fn from(err: stellar_xdr::curr::Error) -> Self {
        InvokerError::Xdr(err.to_string())
    }
}

impl From<base64::DecodeError> for InvokerError {
    fn from(err: base64::DecodeError) -> Self {
        InvokerError::Xdr(format!("base64: {}", err))
    }
}
