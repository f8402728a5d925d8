//! Integration Tests: Contract Flow
//!
//! Deposit, join and token commands against a recording gateway:
//! - Prerequisite checks happen before any network call
//! - Amounts reach the contract in stroops
//! - Failures are mapped to short dashboard messages

use super::fake_gateway::{state_with, FakeGateway};
use pretty_assertions::assert_eq;
use stake_house_demo::commands::{self, Command, Flow};
use stake_house_demo::models::{NotificationKind, Role, StatusKind, StatusMessage};
use stellar_invoker::{FungibleCall, InvokerError, StakeHouseCall};

/// Test: deposit without an investor wallet never reaches the network
#[tokio::test]
async fn test_deposit_requires_investor() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    state.deposit_input = "10".into();

    assert!(!state.deposit_enabled());
    assert!(commands::make_deposit(&mut state).await.is_none());

    assert_eq!(
        state.deposit_status,
        Some(StatusMessage::error("Generate a wallet first"))
    );
    assert!(gateway.stake_calls().is_empty());
}

/// Test: invalid amounts are rejected locally
#[tokio::test]
async fn test_deposit_rejects_invalid_amounts() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    commands::generate_wallet(&mut state, Role::Investor).await.unwrap();

    for input in ["", "0", "-5", "ten", "0.00000001"] {
        state.deposit_input = input.into();
        assert!(!state.deposit_enabled());
        assert!(commands::make_deposit(&mut state).await.is_none());
        assert_eq!(
            state.deposit_status,
            Some(StatusMessage::error("Enter a valid amount")),
            "input {:?}",
            input
        );
    }
    assert!(gateway.stake_calls().is_empty());
}

/// Test: deposit converts to stroops and signs as the investor
#[tokio::test]
async fn test_deposit_sends_stroops() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    let investor = commands::generate_wallet(&mut state, Role::Investor).await.unwrap();

    let flow = commands::dispatch(&mut state, "deposit 12.5".parse().unwrap()).await;
    assert_eq!(flow, Flow::Continue);

    let calls = gateway.stake_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        (
            StakeHouseCall::Deposit {
                from: investor.public_key.clone(),
                amount: 125_000_000,
            },
            investor.public_key.clone()
        )
    );

    assert_eq!(
        state.deposit_status,
        Some(StatusMessage::success("Deposit of 12.5 tokens completed successfully!"))
    );
    assert_eq!(
        state.notification.as_ref().unwrap().text,
        "Deposit of 12.5 tokens completed!"
    );
    assert!(state.deposit_input.is_empty());
}

/// Test: digits past seven decimals are truncated
#[tokio::test]
async fn test_deposit_truncates_sub_stroop_digits() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    commands::generate_wallet(&mut state, Role::Investor).await.unwrap();

    state.deposit_input = "1.123456789".into();
    commands::make_deposit(&mut state).await.unwrap();

    match &gateway.stake_calls()[0].0 {
        StakeHouseCall::Deposit { amount, .. } => assert_eq!(*amount, 11_234_567),
        other => panic!("unexpected call {:?}", other),
    }
}

/// Test: deposit failure messages
#[tokio::test]
async fn test_deposit_failure_messages() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    commands::generate_wallet(&mut state, Role::Investor).await.unwrap();

    let cases = [
        (
            InvokerError::AccountNotFound("G...".into()),
            "Account not found. Make sure the account has XLM funds.",
        ),
        (
            InvokerError::InsufficientFunds("op_underfunded".into()),
            "Insufficient funds in the account.",
        ),
        (
            InvokerError::TransactionRejected { reason: "tx_bad_seq".into() },
            "Failed to make the deposit",
        ),
    ];

    for (err, expected) in cases {
        gateway.fail_next_invoke(err);
        state.deposit_input = "1".into();
        assert!(commands::make_deposit(&mut state).await.is_none());

        assert_eq!(state.deposit_status, Some(StatusMessage::error(expected)));
        let notification = state.notification.clone().unwrap();
        assert_eq!(notification.kind, NotificationKind::Error);
        assert_eq!(notification.text, expected);
        // input is kept for a retry
        assert_eq!(state.deposit_input, "1");
    }
}

/// Test: join registers once and updates the counter
#[tokio::test]
async fn test_join_registers_user() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    let user = commands::generate_wallet(&mut state, Role::User(2)).await.unwrap();
    assert!(state.wallets.join_enabled(2));

    let flow = commands::dispatch(&mut state, Command::Join(2)).await;
    assert_eq!(flow, Flow::Continue);

    assert_eq!(
        gateway.stake_calls(),
        vec![(
            StakeHouseCall::Join { user: user.public_key.clone() },
            user.public_key.clone()
        )]
    );
    let slot = state.wallets.user(2).unwrap();
    assert!(slot.registered);
    assert_eq!(
        slot.join_status,
        Some(StatusMessage::success("Successfully registered for the airdrop!"))
    );
    assert!(!state.wallets.join_enabled(2));
    assert_eq!(state.wallets.counter_text(), "1 of 4 users registered");
    assert_eq!(
        state.notification.as_ref().unwrap().text,
        "User 2 registered for the airdrop!"
    );

    // disabled once registered: no second call, counter unchanged
    assert!(commands::join_airdrop(&mut state, 2).await.is_none());
    assert_eq!(gateway.stake_calls().len(), 1);
    assert_eq!(state.wallets.registered_users(), 1);
}

/// Test: join without a wallet is rejected locally
#[tokio::test]
async fn test_join_requires_wallet() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);

    assert!(!state.wallets.join_enabled(1));
    assert!(commands::join_airdrop(&mut state, 1).await.is_none());

    assert_eq!(
        state.notification.as_ref().unwrap().text,
        "Generate a wallet first"
    );
    assert!(gateway.stake_calls().is_empty());
    assert_eq!(state.wallets.registered_users(), 0);
}

/// Test: a rejected join leaves the user unregistered
#[tokio::test]
async fn test_join_failure_keeps_counter() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    commands::generate_wallet(&mut state, Role::User(1)).await.unwrap();

    gateway.fail_next_invoke(InvokerError::TransactionRejected {
        reason: "Error(Contract, #1): already registered".into(),
    });
    assert!(commands::join_airdrop(&mut state, 1).await.is_none());

    let slot = state.wallets.user(1).unwrap();
    assert!(!slot.registered);
    assert_eq!(
        slot.join_status,
        Some(StatusMessage::error("User is already registered for the airdrop."))
    );
    assert_eq!(state.wallets.registered_users(), 0);
    assert!(state.wallets.join_enabled(1));
}

/// Test: the counter matches the number of successful joins
#[tokio::test]
async fn test_counter_matches_successful_joins() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    commands::bootstrap(&mut state).await;

    gateway.fail_next_invoke(InvokerError::AccountNotFound("G...".into()));
    for n in 1..=4 {
        commands::join_airdrop(&mut state, n).await;
    }

    let registered = (1..=4)
        .filter(|n| state.wallets.user(*n).unwrap().registered)
        .count();
    assert_eq!(registered, 3);
    assert_eq!(state.wallets.registered_users(), registered);
    assert_eq!(
        state.wallets.user(1).unwrap().join_status.as_ref().unwrap().kind,
        StatusKind::Error
    );
}

/// Test: mint resolves the role and signs as the investor
#[tokio::test]
async fn test_mint_to_user() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    let investor = commands::generate_wallet(&mut state, Role::Investor).await.unwrap();
    let user = commands::generate_wallet(&mut state, Role::User(1)).await.unwrap();

    commands::dispatch(&mut state, "mint user1 100".parse().unwrap()).await;

    assert_eq!(
        gateway.fungible_calls(),
        vec![(
            FungibleCall::Mint {
                to: user.public_key.clone(),
                amount: 1_000_000_000,
            },
            investor.public_key.clone()
        )]
    );
    assert!(state.notification.as_ref().unwrap().text.starts_with("Minted 100 tokens to "));
}

/// Test: transfer signs as the sender and accepts raw addresses
#[tokio::test]
async fn test_transfer_between_wallets() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    let sender = commands::generate_wallet(&mut state, Role::User(3)).await.unwrap();
    let receiver = stellar_invoker::Keypair::random().public_key();

    commands::transfer(&mut state, "user 3", &receiver, "0.5").await.unwrap();

    assert_eq!(
        gateway.fungible_calls(),
        vec![(
            FungibleCall::Transfer {
                from: sender.public_key.clone(),
                to: receiver,
                amount: 5_000_000,
            },
            sender.public_key.clone()
        )]
    );
}

/// Test: transfer from an empty slot is rejected locally
#[tokio::test]
async fn test_transfer_requires_sender_wallet() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);
    commands::generate_wallet(&mut state, Role::Investor).await.unwrap();

    assert!(commands::transfer(&mut state, "user2", "investor", "1").await.is_none());
    assert_eq!(
        state.notification.as_ref().unwrap().text,
        "Generate a wallet first"
    );
    assert!(gateway.fungible_calls().is_empty());
}

/// Test: balance renders the i128 return value as tokens
#[tokio::test]
async fn test_balance_display() {
    let gateway = FakeGateway::new();
    gateway.set_return_value("25000000");
    let mut state = state_with(&gateway);
    let investor = commands::generate_wallet(&mut state, Role::Investor).await.unwrap();

    let result = commands::balance(&mut state, "investor").await.unwrap();

    assert_eq!(result.return_value.as_deref(), Some("25000000"));
    assert_eq!(
        gateway.fungible_calls()[0].0,
        FungibleCall::Balance { address: investor.public_key.clone() }
    );
    assert!(state.notification.as_ref().unwrap().text.ends_with(": 2.5"));
}

/// Test: pool queries need some wallet to sign with
#[tokio::test]
async fn test_pool_queries() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);

    assert!(commands::pool_balance(&mut state).await.is_none());
    assert!(gateway.stake_calls().is_empty());

    let user = commands::generate_wallet(&mut state, Role::User(4)).await.unwrap();
    gateway.set_return_value("70000000");
    commands::pool_balance(&mut state).await.unwrap();
    assert_eq!(state.notification.as_ref().unwrap().text, "Pool balance: 7");

    commands::registered_users(&mut state).await.unwrap();
    let calls = gateway.stake_calls();
    assert_eq!(calls[0], (StakeHouseCall::GetBalance, user.public_key.clone()));
    assert_eq!(calls[1], (StakeHouseCall::GetUsers, user.public_key.clone()));
}

/// Test: `amount` toggles the derived deposit state
#[tokio::test]
async fn test_amount_command_reports_enabled_state() {
    let gateway = FakeGateway::new();
    let mut state = state_with(&gateway);

    let flow = commands::dispatch(&mut state, "amount 5".parse().unwrap()).await;
    assert_eq!(flow, Flow::Show("Deposit disabled".into()));

    commands::generate_wallet(&mut state, Role::Investor).await.unwrap();
    let flow = commands::dispatch(&mut state, "amount 5".parse().unwrap()).await;
    assert_eq!(flow, Flow::Show("Deposit enabled".into()));

    let Flow::Show(view) = commands::dispatch(&mut state, Command::Status).await else {
        panic!("status should render");
    };
    assert!(view.contains("0 of 4 users registered"));
    assert!(view.contains("(enabled)"));
}
