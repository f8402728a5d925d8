//! Demo Core Modules
//!
//! Wallet bookkeeping and failure-message mapping.

pub mod messages;
pub mod wallets;

pub use messages::{failure_message, Action};
pub use wallets::{UserSlot, WalletManager};
