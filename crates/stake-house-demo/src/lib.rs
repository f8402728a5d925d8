//! # Stake House Demo
//!
//! Terminal dashboard for the stake-house airdrop contracts on the Stellar
//! test network.
//!
//! ## Features
//!
//! - **Wallets**: one investor and four user wallets, funded by friendbot
//! - **Deposit**: the investor deposits tokens into the stake house pool
//! - **Airdrop**: each user joins once; a counter tracks registrations
//! - **Token calls**: mint, transfer and balance on the fungible token
//! - **Export**: all wallets, secrets included, as a JSON file
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use stake_house_demo::{commands, DemoConfig, DemoState};
//! use stellar_invoker::StellarClient;
//!
//! # async fn run() -> stake_house_demo::Result<()> {
//! let config = DemoConfig::default();
//! let client = StellarClient::new(config.stellar_config()?)?;
//! let mut state = DemoState::new(Arc::new(client), config);
//!
//! commands::bootstrap(&mut state).await;
//! state.deposit_input = "25".into();
//! commands::make_deposit(&mut state).await;
//! commands::join_airdrop(&mut state, 1).await;
//! println!("{}", state.wallets.counter_text());
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod render;
pub mod state;

pub use config::{CliArgs, DemoConfig, DEFAULT_LOG_FILTER};
pub use error::{DemoError, Result};
pub use state::DemoState;
