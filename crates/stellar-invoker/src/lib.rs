// ============================================================================
// STELLAR-INVOKER - Stellar Testnet Contract Calls
// ============================================================================
// Testnet plumbing for the stake-house demo.
//
// Features:
// - Random Ed25519 keypairs as G... / S... strings
// - Friendbot funding for new accounts
// - Account loading and transaction submission via Horizon
// - Soroban contract calls (fungible token, stake house) with a fixed
//   base fee and a 30 second validity window
// ============================================================================

pub mod config;
pub mod strkey;
pub mod keypair;
pub mod scval;
pub mod horizon;
pub mod transaction;
pub mod contract;
pub mod stellar_client;
pub mod error;

pub use config::{Network, StellarConfig};
pub use contract::{FungibleCall, StakeHouseCall};
pub use error::InvokerError;
pub use horizon::{AccountInfo, HorizonClient, TransactionResponse};
pub use keypair::Keypair;
pub use scval::{format_stroops, to_stroops, STROOPS_PER_UNIT};
pub use stellar_client::{InvocationResult, StellarClient, StellarGateway};
pub use transaction::{SignedTransaction, TransactionBuilder};

/// Re-export for convenience
pub type Result<T> = std::result::Result<T, InvokerError>;
