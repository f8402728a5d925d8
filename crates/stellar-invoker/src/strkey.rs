// ============================================================================
// STELLAR-INVOKER - StrKey Encoding/Decoding
// ============================================================================
// Thin layer over `stellar-strkey` for G... accounts, S... seeds and
// C... contracts. Decode failures map onto `InvokerError`.
// ============================================================================

use crate::error::InvokerError;
use crate::Result;
use stellar_strkey::ed25519::{PrivateKey, PublicKey};
use stellar_strkey::Contract;

/// Encode raw Ed25519 public key bytes as a G... address
///
/// # Example
/// ```
/// use stellar_invoker::strkey::{encode_public_key, decode_public_key};
///
/// let address = encode_public_key(&[7u8; 32]);
/// assert!(address.starts_with('G'));
/// assert_eq!(decode_public_key(&address).unwrap(), [7u8; 32]);
/// ```
pub fn encode_public_key(key_bytes: &[u8; 32]) -> String {
    PublicKey(*key_bytes).to_string()
}

/// Decode a G... address to raw Ed25519 public key bytes
pub fn decode_public_key(address: &str) -> Result<[u8; 32]> {
    PublicKey::from_string(address)
        .map(|key| key.0)
        .map_err(|e| InvokerError::InvalidStellarAddress(format!("{}: {:?}", address, e)))
}

/// Encode a 32-byte Ed25519 seed as an S... secret
pub fn encode_secret_seed(seed: &[u8; 32]) -> String {
    PrivateKey(*seed).to_string()
}

/// Decode an S... secret to the 32-byte Ed25519 seed
pub fn decode_secret_seed(secret: &str) -> Result<[u8; 32]> {
    // never echo the secret back in the error
    PrivateKey::from_string(secret)
        .map(|key| key.0)
        .map_err(|_| InvokerError::InvalidSecretKey)
}

/// Decode a C... contract address to the 32-byte contract hash
pub fn decode_contract_id(contract_id: &str) -> Result<[u8; 32]> {
    Contract::from_string(contract_id)
        .map(|contract| contract.0)
        .map_err(|e| InvokerError::InvalidContractId(format!("{}: {:?}", contract_id, e)))
}

/// Encode a 32-byte contract hash as a C... address
pub fn encode_contract_id(hash: &[u8; 32]) -> String {
    Contract(*hash).to_string()
}

/// Check whether a string is a valid G... address
pub fn is_valid_public_key(address: &str) -> bool {
    decode_public_key(address).is_ok()
}

// ============================================================================
// TESTS
// ============================================================================
