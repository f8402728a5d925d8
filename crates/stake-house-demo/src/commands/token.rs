//! Fungible Token Commands
//!
//! `mint`, `transfer` and `balance` against the token contract. Targets
//! may be a dashboard role (`investor`, `user2`) or a raw `G...`/`C...`
//! address.

use crate::commands::stake::{display_amount, GENERATE_FIRST, INVALID_AMOUNT};
use crate::core::{failure_message, Action};
use crate::error::{DemoError, Result};
use crate::models::*;
use crate::state::DemoState;
use stellar_invoker::strkey::{decode_contract_id, is_valid_public_key};
use stellar_invoker::{format_stroops, to_stroops, FungibleCall, InvocationResult, Keypair};
use tracing::{error, info};

/// Resolve a role name or address to an address string
pub fn resolve_target(state: &DemoState, target: &str) -> Result<String> {
    let target = target.trim();
    if is_valid_public_key(target) || decode_contract_id(target).is_ok() {
        return Ok(target.to_string());
    }
    let role: Role = target.parse()?;
    Ok(state.wallets.require(role)?.public_key.clone())
}

/// `mint <to> <amount>` handler, signed by the investor
pub async fn mint(state: &mut DemoState, to: &str, amount: &str) -> Option<InvocationResult> {
    let prepared = prepare(state, Role::Investor, amount)
        .and_then(|(signer, stroops)| Ok((signer, resolve_target(state, to)?, stroops)));
    let (signer, to, stroops) = reject_on_error(state, prepared, Action::Mint)?;

    let summary = format!("Minted {} tokens to {}", format_stroops(stroops), short(&to));
    let call = FungibleCall::Mint { to, amount: stroops };
    submit(state, call, &signer, Action::Mint, summary).await
}

/// `transfer <from> <to> <amount>` handler, signed by `from`
pub async fn transfer(
    state: &mut DemoState,
    from: &str,
    to: &str,
    amount: &str,
) -> Option<InvocationResult> {
    let prepared = from
        .parse::<Role>()
        .and_then(|role| prepare(state, role, amount))
        .and_then(|(signer, stroops)| Ok((signer, resolve_target(state, to)?, stroops)));
    let (signer, to, stroops) = reject_on_error(state, prepared, Action::Transfer)?;

    let summary = format!("Transferred {} tokens to {}", format_stroops(stroops), short(&to));
    let call = FungibleCall::Transfer {
        from: signer.public_key(),
        to,
        amount: stroops,
    };
    submit(state, call, &signer, Action::Transfer, summary).await
}

/// `balance <target>` handler
pub async fn balance(state: &mut DemoState, target: &str) -> Option<InvocationResult> {
    let prepared = resolve_target(state, target).and_then(|address| {
        let signer = state
            .query_signer()
            .ok_or_else(|| DemoError::WalletMissing("any role".into()))?;
        Ok((signer, address))
    });
    let (signer, address) = reject_on_error(state, prepared, Action::Balance)?;

    let call = FungibleCall::Balance { address: address.clone() };
    let result = submit(state, call, &signer, Action::Balance, String::new()).await?;

    let shown = result
        .return_value
        .as_deref()
        .map(display_amount)
        .unwrap_or_else(|| "unavailable".to_string());
    state.notify(Notification::success(format!("Balance of {}: {}", short(&address), shown)));
    Some(result)
}

fn prepare(state: &DemoState, signer_role: Role, amount: &str) -> Result<(Keypair, i128)> {
    let signer = state.wallets.require(signer_role)?.keypair().clone();
    let stroops = to_stroops(amount).map_err(|_| DemoError::InvalidAmount(amount.to_string()))?;
    Ok((signer, stroops))
}

fn reject_on_error<T>(state: &mut DemoState, prepared: Result<T>, action: Action) -> Option<T> {
    match prepared {
        Ok(value) => Some(value),
        Err(DemoError::WalletMissing(_)) => {
            state.notify(Notification::error(GENERATE_FIRST));
            None
        }
        Err(DemoError::InvalidAmount(_)) => {
            state.notify(Notification::error(INVALID_AMOUNT));
            None
        }
        Err(e) => {
            error!("{:?} rejected: {}", action, e);
            state.notify(Notification::error(e.to_string()));
            None
        }
    }
}

async fn submit(
    state: &mut DemoState,
    call: FungibleCall,
    signer: &Keypair,
    action: Action,
    summary: String,
) -> Option<InvocationResult> {
    match state.gateway().invoke_fungible(&call, signer).await {
        Ok(result) => {
            info!("{} confirmed in tx {}", call.method(), result.tx_hash);
            if !summary.is_empty() {
                state.notify(Notification::success(summary));
            }
            Some(result)
        }
        Err(e) => {
            error!("{} failed: {}", call.method(), e);
            state.notify(Notification::error(failure_message(action, &e)));
            None
        }
    }
}

fn short(address: &str) -> String {
    if address.len() > 12 {
        format!("{}...{}", &address[..6], &address[address.len() - 4..])
    } else {
        address.to_string()
    }
}
