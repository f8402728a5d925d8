//! Application state
//!
//! One [`DemoState`] value is owned by the command loop and mutated only
//! by the handlers in [`crate::commands`].

use crate::config::DemoConfig;
use crate::core::WalletManager;
use crate::models::*;
use std::sync::Arc;
use stellar_invoker::{to_stroops, Keypair, StellarGateway};

/// Dashboard state plus the network gateway
pub struct DemoState {
    gateway: Arc<dyn StellarGateway>,
    pub config: DemoConfig,
    pub wallets: WalletManager,
    /// Raw text of the deposit amount field
    pub deposit_input: String,
    pub deposit_status: Option<StatusMessage>,
    pub notification: Option<Notification>,
}

impl DemoState {
    pub fn new(gateway: Arc<dyn StellarGateway>, config: DemoConfig) -> Self {
        Self {
            gateway,
            config,
            wallets: WalletManager::new(),
            deposit_input: String::new(),
            deposit_status: None,
            notification: None,
        }
    }

    /// Shared handle to the gateway, usable across `.await` while state is borrowed mutably
    pub fn gateway(&self) -> Arc<dyn StellarGateway> {
        Arc::clone(&self.gateway)
    }

    /// Replace the current notification
    pub fn notify(&mut self, notification: Notification) {
        if notification.is_error() {
            tracing::debug!("Notification (error): {}", notification.text);
        } else {
            tracing::debug!("Notification: {}", notification.text);
        }
        self.notification = Some(notification);
    }

    /// Deposit is offered when an investor exists and the amount parses
    pub fn deposit_enabled(&self) -> bool {
        self.wallets.investor().is_some() && to_stroops(&self.deposit_input).is_ok()
    }

    /// Keypair for read-only queries: the investor, else the first user
    pub fn query_signer(&self) -> Option<Keypair> {
        Role::all()
            .find_map(|role| self.wallets.wallet(role))
            .map(|wallet| wallet.keypair().clone())
    }
}
