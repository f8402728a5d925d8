//! Integration Tests Module
//!
//! Test categories:
//! - `wallet_flow`: wallet generation, reset, registration counter, export
//! - `contract_flow`: deposit, join and token commands against a fake gateway
//! - `horizon_flow`: the same commands end to end against a mocked Horizon
//!
//! Run tests:
//! ```bash
//! cargo test --test integration
//! ```

pub mod fake_gateway;

mod contract_flow;
mod horizon_flow;
