// ============================================================================
// STELLAR-INVOKER - Contract Calls
// ============================================================================
// The two contracts the demo talks to, expressed as typed calls.
//
// Fungible token:  mint(to, amount) | transfer(from, to, amount) | balance(id)
// Stake house:     deposit(from, amount) | join(user) | get_balance() | get_users()
// ============================================================================

use crate::scval::{address_arg, i128_arg};
use crate::Result;
use serde::{Deserialize, Serialize};
use stellar_xdr::curr::ScVal;

/// Call against the fungible token contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum FungibleCall {
    Mint { to: String, amount: i128 },
    Transfer { from: String, to: String, amount: i128 },
    Balance { address: String },
}

impl FungibleCall {
    /// Contract function name
    pub fn method(&self) -> &'static str {
        match self {
            FungibleCall::Mint { .. } => "mint",
            FungibleCall::Transfer { .. } => "transfer",
            FungibleCall::Balance { .. } => "balance",
        }
    }

    /// Encoded arguments, in contract order
    pub fn args(&self) -> Result<Vec<ScVal>> {
        Ok(match self {
            FungibleCall::Mint { to, amount } => vec![address_arg(to)?, i128_arg(*amount)],
            FungibleCall::Transfer { from, to, amount } => {
                vec![address_arg(from)?, address_arg(to)?, i128_arg(*amount)]
            }
            FungibleCall::Balance { address } => vec![address_arg(address)?],
        })
    }
}

/// Call against the stake house contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum StakeHouseCall {
    Deposit { from: String, amount: i128 },
    Join { user: String },
    GetBalance,
    GetUsers,
}

impl StakeHouseCall {
    /// Contract function name
    pub fn method(&self) -> &'static str {
        match self {
            StakeHouseCall::Deposit { .. } => "deposit",
            StakeHouseCall::Join { .. } => "join",
            StakeHouseCall::GetBalance => "get_balance",
            StakeHouseCall::GetUsers => "get_users",
        }
    }

    /// Encoded arguments, in contract order
    pub fn args(&self) -> Result<Vec<ScVal>> {
        Ok(match self {
            StakeHouseCall::Deposit { from, amount } => vec![address_arg(from)?, i128_arg(*amount)],
            StakeHouseCall::Join { user } => vec![address_arg(user)?],
            StakeHouseCall::GetBalance | StakeHouseCall::GetUsers => Vec::new(),
        })
    }
}
