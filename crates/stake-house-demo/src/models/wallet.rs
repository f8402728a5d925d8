//! Wallet models

use crate::error::{DemoError, Result};
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use stellar_invoker::Keypair;

/// Number of user slots on the dashboard.
pub const MAX_USERS: usize = 4;

/// Slot a wallet occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Investor,
    /// User slot, numbered 1..=4
    User(u8),
}

impl Role {
    /// User role with range check
    pub fn user(index: usize) -> Result<Self> {
        if (1..=MAX_USERS).contains(&index) {
            Ok(Role::User(index as u8))
        } else {
            Err(DemoError::InvalidRole(format!("user {} (expected 1-{})", index, MAX_USERS)))
        }
    }

    /// Every role, investor first
    pub fn all() -> impl Iterator<Item = Role> {
        std::iter::once(Role::Investor).chain((1..=MAX_USERS as u8).map(Role::User))
    }

    /// Display label, also the `type` field in exports
    pub fn label(&self) -> String {
        match self {
            Role::Investor => "Investor".to_string(),
            Role::User(n) => format!("User {}", n),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Accepts `investor`, `user3`, `user 3` and `3`.
impl FromStr for Role {
    type Err = DemoError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if normalized == "investor" {
            return Ok(Role::Investor);
        }

        let digits = normalized
            .strip_prefix("user")
            .or_else(|| normalized.strip_prefix('u'))
            .unwrap_or(&normalized);

        match digits.parse::<usize>() {
            Ok(index) => Role::user(index),
            Err(_) => Err(DemoError::InvalidRole(s.to_string())),
        }
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.label())
    }
}

/// A generated testnet wallet
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    #[serde(rename = "type")]
    pub role: Role,
    pub public_key: String,
    pub secret_key: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip)]
    keypair: Keypair,
}

impl Wallet {
    /// Fresh random wallet for `role`
    pub fn generate(role: Role) -> Self {
        Self::from_keypair(role, Keypair::random())
    }

    /// Wrap an existing keypair
    pub fn from_keypair(role: Role, keypair: Keypair) -> Self {
        Self {
            role,
            public_key: keypair.public_key(),
            secret_key: keypair.secret(),
            created_at: Utc::now(),
            keypair,
        }
    }

    /// Signing key for contract calls
    pub fn keypair(&self) -> &Keypair {
        &self.keypair
    }
}

/// Contents of an exported wallets file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub investor: Option<Wallet>,
    pub users: Vec<Wallet>,
    pub exported_at: DateTime<Utc>,
}
