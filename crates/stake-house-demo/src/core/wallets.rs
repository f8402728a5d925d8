//! Wallet Manager
//!
//! Owns the investor slot, the four user slots and the airdrop
//! registration counter. Funding happens in the command layer; this type
//! only tracks what has been generated and registered.
//!
//! # Counter invariant
//!
//! `registered_users` always equals the number of occupied user slots whose
//! `registered` flag is set. Replacing or resetting a registered slot
//! decrements it, so it can never go negative.

use crate::error::{DemoError, Result};
use crate::models::*;
use chrono::Utc;
use tracing::debug;

/// One of the four user positions
#[derive(Debug, Clone)]
pub struct UserSlot {
    pub wallet: Wallet,
    pub registered: bool,
    pub join_status: Option<StatusMessage>,
}

impl UserSlot {
    fn new(wallet: Wallet) -> Self {
        Self { wallet, registered: false, join_status: None }
    }
}

/// In-memory wallet store
#[derive(Debug, Default)]
pub struct WalletManager {
    investor: Option<Wallet>,
    users: [Option<UserSlot>; MAX_USERS],
    registered_users: usize,
}

impl WalletManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `wallet` into its role's slot, discarding whatever was there.
    pub fn store(&mut self, wallet: Wallet) {
        debug!("Storing wallet {} for {}", wallet.public_key, wallet.role);
        match wallet.role {
            Role::Investor => self.investor = Some(wallet),
            Role::User(n) => {
                self.clear_user(n);
                self.users[slot_index(n)] = Some(UserSlot::new(wallet));
            }
        }
    }

    /// Clear a slot. Returns `false` if it was already empty.
    pub fn reset(&mut self, role: Role) -> bool {
        match role {
            Role::Investor => self.investor.take().is_some(),
            Role::User(n) => self.clear_user(n).is_some(),
        }
    }

    /// Clear every slot and zero the counter
    pub fn reset_all(&mut self) {
        self.investor = None;
        self.users = Default::default();
        self.registered_users = 0;
    }

    pub fn investor(&self) -> Option<&Wallet> {
        self.investor.as_ref()
    }

    pub fn user(&self, index: u8) -> Option<&UserSlot> {
        self.users.get(slot_index(index))?.as_ref()
    }

    pub fn user_mut(&mut self, index: u8) -> Option<&mut UserSlot> {
        self.users.get_mut(slot_index(index))?.as_mut()
    }

    /// Wallet in any slot
    pub fn wallet(&self, role: Role) -> Option<&Wallet> {
        match role {
            Role::Investor => self.investor(),
            Role::User(n) => self.user(n).map(|slot| &slot.wallet),
        }
    }

    /// Wallet in a slot, or [`DemoError::WalletMissing`]
    pub fn require(&self, role: Role) -> Result<&Wallet> {
        self.wallet(role)
            .ok_or_else(|| DemoError::WalletMissing(role.label()))
    }

    /// Record a successful `join` for user `index`.
    ///
    /// Returns `true` if the counter moved.
    pub fn mark_registered(&mut self, index: u8) -> Result<bool> {
        let slot = self
            .user_mut(index)
            .ok_or_else(|| DemoError::WalletMissing(Role::User(index).label()))?;

        if slot.registered {
            return Ok(false);
        }
        slot.registered = true;
        self.registered_users += 1;
        Ok(true)
    }

    pub fn registered_users(&self) -> usize {
        self.registered_users
    }

    /// Number of occupied user slots
    pub fn active_users(&self) -> usize {
        self.users.iter().filter(|slot| slot.is_some()).count()
    }

    /// Join is offered only for an existing, unregistered user
    pub fn join_enabled(&self, index: u8) -> bool {
        self.user(index).is_some_and(|slot| !slot.registered)
    }

    /// Counter line, e.g. "2 of 4 users registered"
    pub fn counter_text(&self) -> String {
        format!("{} of {} users registered", self.registered_users, MAX_USERS)
    }

    /// Snapshot of all wallets for export
    pub fn export(&self) -> ExportDocument {
        ExportDocument {
            investor: self.investor.clone(),
            users: self
                .users
                .iter()
                .flatten()
                .map(|slot| slot.wallet.clone())
                .collect(),
            exported_at: Utc::now(),
        }
    }

    fn clear_user(&mut self, index: u8) -> Option<UserSlot> {
        let removed = self.users.get_mut(slot_index(index))?.take()?;
        if removed.registered {
            self.registered_users = self.registered_users.saturating_sub(1);
        }
        Some(removed)
    }
}

// Roles are 1-based; out-of-range indices map past the array and miss.
fn slot_index(index: u8) -> usize {
    (index as usize).wrapping_sub(1)
}
