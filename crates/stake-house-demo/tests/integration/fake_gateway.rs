//! In-memory `StellarGateway` that records every request.

use async_trait::async_trait;
use stake_house_demo::{DemoConfig, DemoState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use stellar_invoker::{
    FungibleCall, InvocationResult, InvokerError, Keypair, StakeHouseCall, StellarGateway,
};

#[derive(Default)]
pub struct FakeGateway {
    pub funded: Mutex<Vec<String>>,
    /// (call, signer public key)
    pub stake_calls: Mutex<Vec<(StakeHouseCall, String)>>,
    pub fungible_calls: Mutex<Vec<(FungibleCall, String)>>,
    fund_errors: Mutex<VecDeque<InvokerError>>,
    invoke_errors: Mutex<VecDeque<InvokerError>>,
    return_value: Mutex<Option<String>>,
}

impl FakeGateway {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Fail the next faucet request
    pub fn fail_next_funding(&self, err: InvokerError) {
        self.fund_errors.lock().unwrap().push_back(err);
    }

    /// Fail the next contract call
    pub fn fail_next_invoke(&self, err: InvokerError) {
        self.invoke_errors.lock().unwrap().push_back(err);
    }

    pub fn set_return_value(&self, value: &str) {
        *self.return_value.lock().unwrap() = Some(value.to_string());
    }

    pub fn stake_calls(&self) -> Vec<(StakeHouseCall, String)> {
        self.stake_calls.lock().unwrap().clone()
    }

    pub fn fungible_calls(&self) -> Vec<(FungibleCall, String)> {
        self.fungible_calls.lock().unwrap().clone()
    }

    pub fn funded(&self) -> Vec<String> {
        self.funded.lock().unwrap().clone()
    }

    fn result(&self, method: &str) -> stellar_invoker::Result<InvocationResult> {
        if let Some(err) = self.invoke_errors.lock().unwrap().pop_front() {
            return Err(err);
        }
        Ok(InvocationResult {
            contract_id: "CFAKE".to_string(),
            method: method.to_string(),
            tx_hash: format!("hash-{}", method),
            ledger: 1,
            successful: true,
            explorer_url: String::new(),
            return_value: self.return_value.lock().unwrap().clone(),
        })
    }
}

#[async_trait]
impl StellarGateway for FakeGateway {
    async fn fund_account(&self, address: &str) -> stellar_invoker::Result<()> {
        if let Some(err) = self.fund_errors.lock().unwrap().pop_front() {
            return Err(err);
        }
        self.funded.lock().unwrap().push(address.to_string());
        Ok(())
    }

    async fn invoke_fungible(
        &self,
        call: &FungibleCall,
        signer: &Keypair,
    ) -> stellar_invoker::Result<InvocationResult> {
        self.fungible_calls
            .lock()
            .unwrap()
            .push((call.clone(), signer.public_key()));
        self.result(call.method())
    }

    async fn invoke_stake_house(
        &self,
        call: &StakeHouseCall,
        signer: &Keypair,
    ) -> stellar_invoker::Result<InvocationResult> {
        self.stake_calls
            .lock()
            .unwrap()
            .push((call.clone(), signer.public_key()));
        self.result(call.method())
    }
}

/// Fresh state over `gateway`
pub fn state_with(gateway: &Arc<FakeGateway>) -> DemoState {
    DemoState::new(gateway.clone(), DemoConfig::default())
}
