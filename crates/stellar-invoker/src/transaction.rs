// ============================================================================
// STELLAR-INVOKER - Transaction Builder
// ============================================================================
// Build and sign Stellar transactions carrying Soroban contract calls.
//
// A contract call transaction consists of:
// - Source account + next sequence number
// - Fee (per operation, in stroops)
// - Time bounds (now .. now + timeout)
// - One InvokeHostFunction operation per call
// - Ed25519 signature over sha256(network_id || ENVELOPE_TYPE_TX || tx)
// ============================================================================

use crate::config::StellarConfig;
use crate::error::InvokerError;
use crate::horizon::AccountInfo;
use crate::keypair::Keypair;
use crate::strkey::{decode_contract_id, decode_public_key};
use crate::Result;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use sha2::{Digest, Sha256};
use stellar_xdr::curr::{
    DecoratedSignature, Hash, HostFunction, InvokeContractArgs, InvokeHostFunctionOp, Limits,
    Memo, MuxedAccount, Operation, OperationBody, Preconditions, ReadXdr, ScAddress, ScSymbol,
    ScVal, SequenceNumber, Signature, SignatureHint, StringM, TimeBounds, TimePoint,
    Transaction, TransactionEnvelope, TransactionExt, TransactionMeta,
    TransactionSignaturePayload, TransactionSignaturePayloadTaggedTransaction,
    TransactionV1Envelope, Uint256, WriteXdr,
};

/// Signed transaction ready for submission
#[derive(Debug, Clone)]
pub struct SignedTransaction {
    /// Hex transaction hash
    pub hash: String,
    /// Base64 `TransactionEnvelope` XDR
    pub envelope_xdr: String,
}

// ============================================================================
// TRANSACTION BUILDER
// ============================================================================

/// Builder for contract call transactions
pub struct TransactionBuilder {
    network_passphrase: String,
    source_account: String,
    sequence: i64,
    fee: u32,
    operations: Vec<Operation>,
    timeout_seconds: u64,
}

impl TransactionBuilder {
    /// Create builder for the next sequence number of `source_account`.
    ///
    /// The address is the signer's. Only the sequence is read from `account`.
    pub fn new(config: &StellarConfig, source_account: &str, account: &AccountInfo) -> Result<Self> {
        let current: i64 = account.sequence.parse().map_err(|_| {
            InvokerError::InvalidTransaction(format!("Invalid sequence number: {}", account.sequence))
        })?;

        Ok(Self::from_sequence(config, source_account, current))
    }

    /// Create builder from account address and its current sequence
    pub fn from_sequence(config: &StellarConfig, source_account: &str, sequence: i64) -> Self {
        Self {
            network_passphrase: config.network_passphrase.clone(),
            source_account: source_account.to_string(),
            sequence: sequence + 1,
            fee: config.base_fee,
            operations: Vec::new(),
            timeout_seconds: config.tx_timeout_secs,
        }
    }

    /// Add a contract invocation
    pub fn invoke_contract(mut self, contract_id: &str, function: &str, args: Vec<ScVal>) -> Result<Self> {
        let contract = decode_contract_id(contract_id)?;
        let function_name = ScSymbol(StringM::<32>::try_from(function)?);

        let invoke = InvokeContractArgs {
            contract_address: ScAddress::Contract(Hash(contract)),
            function_name,
            args: args.try_into()?,
        };

        self.operations.push(Operation {
            source_account: None,
            body: OperationBody::InvokeHostFunction(InvokeHostFunctionOp {
                host_function: HostFunction::InvokeContract(invoke),
                auth: Vec::new().try_into()?,
            }),
        });

        Ok(self)
    }

    /// Build with time bounds starting now
    pub fn build(self) -> Result<UnsignedTransaction> {
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_err(|e| InvokerError::InvalidTransaction(e.to_string()))?
            .as_secs();
        self.build_at(now)
    }

    /// Build with time bounds starting at `now` (unix seconds)
    pub fn build_at(self, now: u64) -> Result<UnsignedTransaction> {
        if self.operations.is_empty() {
            return Err(InvokerError::InvalidTransaction(
                "Transaction must have at least one operation".to_string(),
            ));
        }

        let source = decode_public_key(&self.source_account)?;
        let total_fee = self
            .fee
            .checked_mul(self.operations.len() as u32)
            .ok_or_else(|| InvokerError::InvalidTransaction("Fee overflow".to_string()))?;

        let tx = Transaction {
            source_account: MuxedAccount::Ed25519(Uint256(source)),
            fee: total_fee,
            seq_num: SequenceNumber(self.sequence),
            cond: Preconditions::Time(TimeBounds {
                min_time: TimePoint(0),
                max_time: TimePoint(now + self.timeout_seconds),
            }),
            memo: Memo::None,
            operations: self.operations.try_into()?,
            ext: TransactionExt::V0,
        };

        Ok(UnsignedTransaction {
            network_passphrase: self.network_passphrase,
            tx,
        })
    }
}

// ============================================================================
// UNSIGNED TRANSACTION
// ============================================================================

/// Unsigned transaction ready for signing
pub struct UnsignedTransaction {
    network_passphrase: String,
    tx: Transaction,
}

impl UnsignedTransaction {
    pub fn transaction(&self) -> &Transaction {
        &self.tx
    }

    /// Hash the signature payload for this network
    pub fn hash(&self) -> Result<[u8; 32]> {
        let network_id = Hash(Sha256::digest(self.network_passphrase.as_bytes()).into());

        let payload = TransactionSignaturePayload {
            network_id,
            tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(self.tx.clone()),
        };

        let payload_bytes = payload.to_xdr(Limits::none())?;
        Ok(Sha256::digest(&payload_bytes).into())
    }

    /// Sign with the source account's keypair
    pub fn sign(self, keypair: &Keypair) -> Result<SignedTransaction> {
        let tx_hash = self.hash()?;
        let signature = keypair.sign(&tx_hash);

        let decorated = DecoratedSignature {
            hint: SignatureHint(keypair.signature_hint()),
            signature: Signature(signature.to_vec().try_into()?),
        };

        let envelope = TransactionEnvelope::Tx(TransactionV1Envelope {
            tx: self.tx,
            signatures: vec![decorated].try_into()?,
        });

        let envelope_bytes = envelope.to_xdr(Limits::none())?;

        Ok(SignedTransaction {
            hash: hex::encode(tx_hash),
            envelope_xdr: BASE64_STANDARD.encode(envelope_bytes),
        })
    }
}

// ============================================================================
// RESULT DECODING
// ============================================================================

/// Extract the contract return value from a base64 `TransactionMeta`
pub fn return_value_from_meta(result_meta_xdr: &str) -> Result<Option<ScVal>> {
    let bytes = BASE64_STANDARD.decode(result_meta_xdr)?;
    let meta = TransactionMeta::from_xdr(bytes, Limits::none())?;

    Ok(match meta {
        TransactionMeta::V3(v3) => v3.soroban_meta.map(|soroban| soroban.return_value),
        _ => None,
    })
}

/// Decode a base64 envelope (used to inspect what was submitted)
pub fn decode_envelope(envelope_xdr: &str) -> Result<TransactionEnvelope> {
    let bytes = BASE64_STANDARD.decode(envelope_xdr)?;
    Ok(TransactionEnvelope::from_xdr(bytes, Limits::none())?)
}
