//! Demo Error Types
//!
//! Errors raised by the wallet manager and command layer. Network and
//! contract failures arrive wrapped from `stellar-invoker`.

use stellar_invoker::InvokerError;

/// Result type alias for demo operations.
pub type Result<T> = std::result::Result<T, DemoError>;

/// Demo Error Types
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// Wallet slot is empty
    #[error("No wallet for {0}")]
    WalletMissing(String),

    /// Unknown role or user index outside 1..=4
    #[error("Invalid role: {0}")]
    InvalidRole(String),

    /// Amount input failed validation
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// Command line could not be parsed
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the export file failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Faucet, Horizon or contract failure
    #[error(transparent)]
    Stellar(#[from] InvokerError),
}

impl From<std::io::Error> for DemoError {
    fn from(err: std::io::Error) -> Self {
        DemoError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DemoError {
    fn from(err: serde_json::Error) -> Self {
        DemoError::Serialization(err.to_string())
    }
}
