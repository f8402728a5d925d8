//! Demo Data Models
//!
//! Wallets, export documents and the dashboard's status types.

pub mod status;
pub mod wallet;

pub use status::*;
pub use wallet::*;
