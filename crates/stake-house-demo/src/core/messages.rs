//! User-facing failure messages
//!
//! Errors are shown on the dashboard as one short sentence. Known failure
//! causes are recognized by a case-insensitive substring match on the error
//! text; anything else falls back to the action's generic message.

use std::fmt::Display;

pub const ACCOUNT_NOT_FOUND: &str = "Account not found. Make sure the account has XLM funds.";
pub const INSUFFICIENT_FUNDS: &str = "Insufficient funds in the account.";
pub const ALREADY_REGISTERED: &str = "User is already registered for the airdrop.";

/// Dashboard action that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GenerateWallet,
    Deposit,
    Join,
    Mint,
    Transfer,
    Balance,
    Query,
}

impl Action {
    fn generic(self) -> &'static str {
        match self {
            Action::GenerateWallet => "Failed to generate wallet",
            Action::Deposit => "Failed to make the deposit",
            Action::Join => "Failed to register for the airdrop",
            Action::Mint => "Failed to mint tokens",
            Action::Transfer => "Failed to transfer tokens",
            Action::Balance => "Failed to fetch the balance",
            Action::Query => "Contract query failed",
        }
    }

    fn known_causes(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Action::GenerateWallet => &[],
            Action::Join => &[
                ("account not found", ACCOUNT_NOT_FOUND),
                ("already registered", ALREADY_REGISTERED),
            ],
            _ => &[
                ("account not found", ACCOUNT_NOT_FOUND),
                ("insufficient funds", INSUFFICIENT_FUNDS),
            ],
        }
    }
}

/// Short message for a failed `action`
pub fn failure_message(action: Action, err: &dyn Display) -> String {
    let text = err.to_string().to_lowercase();
    action
        .known_causes()
        .iter()
        .find(|(needle, _)| text.contains(needle))
        .map(|(_, message)| (*message).to_string())
        .unwrap_or_else(|| action.generic().to_string())
}
