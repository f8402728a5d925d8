//! Wallet Commands
//!
//! Generate, fund and reset the dashboard's wallets.

use crate::core::{failure_message, Action};
use crate::error::Result;
use crate::models::*;
use crate::state::DemoState;
use tracing::{error, info, warn};

/// Generate a keypair, fund it through the faucet and store it.
///
/// The slot is only touched once funding succeeds.
pub async fn create_wallet(state: &mut DemoState, role: Role) -> Result<Wallet> {
    let wallet = Wallet::generate(role);
    info!("Funding new {} wallet {}", role, wallet.public_key);

    state.gateway().fund_account(&wallet.public_key).await?;

    if role == Role::Investor {
        state.deposit_status = None;
    }
    state.wallets.store(wallet.clone());
    Ok(wallet)
}

/// `generate <role>` handler
pub async fn generate_wallet(state: &mut DemoState, role: Role) -> Option<Wallet> {
    match create_wallet(state, role).await {
        Ok(wallet) => {
            state.notify(Notification::success(format!("{} wallet generated!", role)));
            Some(wallet)
        }
        Err(e) => {
            error!("Failed to generate {} wallet: {}", role, e);
            state.notify(Notification::error(failure_message(Action::GenerateWallet, &e)));
            None
        }
    }
}

/// Create all five wallets. Failures are logged and skipped.
///
/// Returns the number of wallets created.
pub async fn bootstrap(state: &mut DemoState) -> usize {
    let mut created = 0;
    let mut failed = 0;

    for role in Role::all() {
        match create_wallet(state, role).await {
            Ok(_) => created += 1,
            Err(e) => {
                error!("Startup wallet for {} failed: {}", role, e);
                failed += 1;
            }
        }
    }

    if failed == 0 {
        state.notify(Notification::success("All wallets generated!"));
    } else {
        warn!("{} of {} startup wallets failed", failed, created + failed);
        state.notify(Notification::error(format!(
            "Generated {} of {} wallets",
            created,
            created + failed
        )));
    }
    created
}

/// `reset <role>` handler
pub fn reset_wallet(state: &mut DemoState, role: Role) -> bool {
    let removed = state.wallets.reset(role);
    if role == Role::Investor {
        state.deposit_status = None;
    }

    if removed {
        info!("{} wallet removed", role);
        state.notify(Notification::success(format!("{} wallet removed", role)));
    } else {
        state.notify(Notification::error(format!("{} has no wallet", role)));
    }
    removed
}

/// `reset-all` handler
pub fn reset_all(state: &mut DemoState) {
    state.wallets.reset_all();
    state.deposit_status = None;
    state.deposit_input.clear();
    info!("All wallets removed");
    state.notify(Notification::success("All wallets were removed"));
}
