//! Integration Tests: Horizon Flow
//!
//! Drives the command handlers through a real `StellarClient` pointed at a
//! mocked Horizon + friendbot server.

use pretty_assertions::assert_eq;
use stake_house_demo::commands;
use stake_house_demo::models::{NotificationKind, Role, StatusMessage};
use stake_house_demo::{DemoConfig, DemoState};
use std::sync::Arc;
use stellar_invoker::scval::i128_from_parts;
use stellar_invoker::transaction::decode_envelope;
use stellar_invoker::StellarClient;
use stellar_xdr::curr::{HostFunction, OperationBody, ScVal, TransactionEnvelope};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn state_for(server: &MockServer) -> DemoState {
    let config = DemoConfig {
        horizon_url: Some(server.uri()),
        friendbot_url: Some(format!("{}/friendbot", server.uri())),
        ..Default::default()
    };
    let client = StellarClient::new(config.stellar_config().unwrap()).unwrap();
    DemoState::new(Arc::new(client), config)
}

async fn mount_friendbot(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path("/friendbot"))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({})))
        .mount(server)
        .await;
}

async fn mount_accounts(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path_regex(r"^/accounts/G[A-Z2-7]{55}$"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "ignored",
            "sequence": "4000",
            "balances": [{ "asset_type": "native", "balance": "10000.0000000" }]
        })))
        .mount(server)
        .await;
}

async fn mount_submit(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/transactions"))
        .respond_with(response)
        .mount(server)
        .await;
}

fn submitted_invocation(request: &Request) -> (String, Vec<ScVal>) {
    let body = String::from_utf8_lossy(&request.body).into_owned();
    let encoded = body.strip_prefix("tx=").expect("form field tx");
    let xdr = encoded
        .replace("%2B", "+")
        .replace("%2F", "/")
        .replace("%3D", "=");

    let TransactionEnvelope::Tx(envelope) = decode_envelope(&xdr).expect("envelope") else {
        panic!("expected v1 envelope");
    };
    assert_eq!(envelope.signatures.len(), 1);

    match &envelope.tx.operations[0].body {
        OperationBody::InvokeHostFunction(op) => match &op.host_function {
            HostFunction::InvokeContract(args) => (
                String::from_utf8_lossy(args.function_name.0.as_slice()).into_owned(),
                args.args.to_vec(),
            ),
            other => panic!("unexpected host function {:?}", other),
        },
        other => panic!("unexpected operation {:?}", other),
    }
}

/// Test: startup funding hits friendbot with each public key
#[tokio::test]
async fn test_bootstrap_uses_friendbot() {
    let server = MockServer::start().await;
    mount_friendbot(&server, 200).await;
    let mut state = state_for(&server);

    assert_eq!(commands::bootstrap(&mut state).await, 5);

    let investor = state.wallets.investor().unwrap().public_key.clone();
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
    assert!(requests
        .iter()
        .any(|r| r.url.query_pairs().any(|(k, v)| k == "addr" && v == investor.as_str())));
}

/// Test: deposit goes out as an i128 stroop amount signed by the investor
#[tokio::test]
async fn test_deposit_end_to_end() {
    let server = MockServer::start().await;
    mount_friendbot(&server, 200).await;
    mount_accounts(&server).await;
    mount_submit(
        &server,
        ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "hash": "abc123",
            "ledger": 77,
            "successful": true
        })),
    )
    .await;

    let mut state = state_for(&server);
    commands::generate_wallet(&mut state, Role::Investor).await.unwrap();
    state.deposit_input = "3.25".into();

    let result = commands::make_deposit(&mut state).await.expect("deposit submitted");
    assert_eq!(result.tx_hash, "abc123");
    assert_eq!(result.ledger, 77);
    assert!(result.explorer_url.ends_with("/tx/abc123"));

    let requests = server.received_requests().await.unwrap();
    let post = requests
        .iter()
        .find(|r| r.method.as_str() == "POST")
        .expect("transaction posted");
    let (function, args) = submitted_invocation(post);

    assert_eq!(function, "deposit");
    assert_eq!(args.len(), 2);
    assert!(matches!(args[0], ScVal::Address(_)));
    match &args[1] {
        ScVal::I128(parts) => assert_eq!(i128_from_parts(parts), 32_500_000),
        other => panic!("unexpected amount {:?}", other),
    }
    assert_eq!(
        state.deposit_status,
        Some(StatusMessage::success("Deposit of 3.25 tokens completed successfully!"))
    );
}

/// Test: an underfunded deposit shows the insufficient funds message
#[tokio::test]
async fn test_deposit_underfunded() {
    let server = MockServer::start().await;
    mount_friendbot(&server, 200).await;
    mount_accounts(&server).await;
    mount_submit(
        &server,
        ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "type": "https://stellar.org/horizon-errors/transaction_failed",
            "title": "Transaction Failed",
            "status": 400,
            "extras": {
                "result_codes": {
                    "transaction": "tx_failed",
                    "operations": ["op_underfunded"]
                }
            }
        })),
    )
    .await;

    let mut state = state_for(&server);
    commands::generate_wallet(&mut state, Role::Investor).await.unwrap();
    state.deposit_input = "1000000".into();

    assert!(commands::make_deposit(&mut state).await.is_none());
    assert_eq!(
        state.deposit_status,
        Some(StatusMessage::error("Insufficient funds in the account."))
    );
}

/// Test: joining from an account Horizon does not know
#[tokio::test]
async fn test_join_unknown_account() {
    let server = MockServer::start().await;
    mount_friendbot(&server, 200).await;
    Mock::given(method("GET"))
        .and(path_regex(r"^/accounts/"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let mut state = state_for(&server);
    commands::generate_wallet(&mut state, Role::User(1)).await.unwrap();

    assert!(commands::join_airdrop(&mut state, 1).await.is_none());
    let slot = state.wallets.user(1).unwrap();
    assert!(!slot.registered);
    assert_eq!(
        slot.join_status,
        Some(StatusMessage::error(
            "Account not found. Make sure the account has XLM funds."
        ))
    );
}

/// Test: a friendbot error status fails generation
#[tokio::test]
async fn test_friendbot_error_status() {
    let server = MockServer::start().await;
    mount_friendbot(&server, 400).await;

    let mut state = state_for(&server);
    assert!(commands::generate_wallet(&mut state, Role::User(4)).await.is_none());
    assert!(state.wallets.user(4).is_none());
    assert_eq!(
        state.notification.as_ref().unwrap().kind,
        NotificationKind::Error
    );
}
