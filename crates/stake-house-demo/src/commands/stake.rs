//! Stake House Commands
//!
//! Deposit into the pool, register users for the airdrop and query the
//! pool contract.

use crate::core::messages::ALREADY_REGISTERED;
use crate::core::{failure_message, Action};
use crate::models::*;
use crate::state::DemoState;
use stellar_invoker::{format_stroops, to_stroops, InvocationResult, StakeHouseCall};
use tracing::{error, info};

pub const GENERATE_FIRST: &str = "Generate a wallet first";
pub const INVALID_AMOUNT: &str = "Enter a valid amount";

/// `deposit` handler: deposit the amount in the input field from the investor.
pub async fn make_deposit(state: &mut DemoState) -> Option<InvocationResult> {
    let Some(investor) = state.wallets.investor().cloned() else {
        state.deposit_status = Some(StatusMessage::error(GENERATE_FIRST));
        return None;
    };

    let stroops = match to_stroops(&state.deposit_input) {
        Ok(stroops) => stroops,
        Err(_) => {
            state.deposit_status = Some(StatusMessage::error(INVALID_AMOUNT));
            return None;
        }
    };
    let amount = format_stroops(stroops);

    state.deposit_status = Some(StatusMessage::loading("Processing deposit..."));
    info!("Depositing {} ({} stroops) from {}", amount, stroops, investor.public_key);

    let call = StakeHouseCall::Deposit {
        from: investor.public_key.clone(),
        amount: stroops,
    };

    match state.gateway().invoke_stake_house(&call, investor.keypair()).await {
        Ok(result) => {
            info!("Deposit confirmed in tx {}", result.tx_hash);
            state.deposit_status = Some(StatusMessage::success(format!(
                "Deposit of {} tokens completed successfully!",
                amount
            )));
            state.deposit_input.clear();
            state.notify(Notification::success(format!("Deposit of {} tokens completed!", amount)));
            Some(result)
        }
        Err(e) => {
            error!("Deposit failed: {}", e);
            let message = failure_message(Action::Deposit, &e);
            state.deposit_status = Some(StatusMessage::error(message.clone()));
            state.notify(Notification::error(message));
            None
        }
    }
}

/// `join <n>` handler: register user `index` for the airdrop.
pub async fn join_airdrop(state: &mut DemoState, index: u8) -> Option<InvocationResult> {
    let Some(slot) = state.wallets.user_mut(index) else {
        state.notify(Notification::error(GENERATE_FIRST));
        return None;
    };

    if slot.registered {
        state.notify(Notification::error(ALREADY_REGISTERED));
        return None;
    }

    slot.join_status = Some(StatusMessage::loading("Registering for the airdrop..."));
    let wallet = slot.wallet.clone();
    info!("User {} joining airdrop as {}", index, wallet.public_key);

    let call = StakeHouseCall::Join { user: wallet.public_key.clone() };
    let outcome = state.gateway().invoke_stake_house(&call, wallet.keypair()).await;

    match outcome {
        Ok(result) => {
            info!("User {} registered in tx {}", index, result.tx_hash);
            if let Err(e) = state.wallets.mark_registered(index) {
                error!("Could not record registration: {}", e);
            }
            set_join_status(state, index, StatusMessage::success("Successfully registered for the airdrop!"));
            state.notify(Notification::success(format!(
                "User {} registered for the airdrop!",
                index
            )));
            Some(result)
        }
        Err(e) => {
            error!("Join failed for user {}: {}", index, e);
            let message = failure_message(Action::Join, &e);
            set_join_status(state, index, StatusMessage::error(message.clone()));
            state.notify(Notification::error(message));
            None
        }
    }
}

fn set_join_status(state: &mut DemoState, index: u8, status: StatusMessage) {
    if let Some(slot) = state.wallets.user_mut(index) {
        slot.join_status = Some(status);
    }
}

/// `pool-balance` handler
pub async fn pool_balance(state: &mut DemoState) -> Option<InvocationResult> {
    let result = query(state, StakeHouseCall::GetBalance).await?;
    let shown = result
        .return_value
        .as_deref()
        .map(display_amount)
        .unwrap_or_else(|| "unavailable".to_string());
    state.notify(Notification::success(format!("Pool balance: {}", shown)));
    Some(result)
}

/// `users` handler
pub async fn registered_users(state: &mut DemoState) -> Option<InvocationResult> {
    let result = query(state, StakeHouseCall::GetUsers).await?;
    let shown = result.return_value.clone().unwrap_or_else(|| "unavailable".to_string());
    state.notify(Notification::success(format!("Registered users: {}", shown)));
    Some(result)
}

async fn query(state: &mut DemoState, call: StakeHouseCall) -> Option<InvocationResult> {
    let Some(signer) = state.query_signer() else {
        state.notify(Notification::error(GENERATE_FIRST));
        return None;
    };

    match state.gateway().invoke_stake_house(&call, &signer).await {
        Ok(result) => Some(result),
        Err(e) => {
            error!("{} failed: {}", call.method(), e);
            state.notify(Notification::error(failure_message(Action::Query, &e)));
            None
        }
    }
}

/// Show an i128 return value as a token amount, anything else verbatim
pub(crate) fn display_amount(raw: &str) -> String {
    match raw.parse::<i128>() {
        Ok(stroops) => format_stroops(stroops),
        Err(_) => raw.to_string(),
    }
}
