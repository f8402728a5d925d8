// ============================================================================
// STELLAR-INVOKER - Keypairs
// ============================================================================
// Ed25519 keypairs rendered as Stellar G... / S... strings.

use crate::strkey::{decode_secret_seed, encode_public_key, encode_secret_seed};
use crate::Result;
use ed25519_dalek::{Signer, SigningKey};
use rand::rngs::OsRng;

/// Stellar account keypair
#[derive(Clone)]
pub struct Keypair {
    signing_key: SigningKey,
}

impl Keypair {
    /// Generate a fresh random keypair
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::generate(&mut OsRng),
        }
    }

    /// Restore a keypair from an S... secret
    pub fn from_secret(secret: &str) -> Result<Self> {
        let seed = decode_secret_seed(secret)?;
        Ok(Self {
            signing_key: SigningKey::from_bytes(&seed),
        })
    }

    /// G... address
    pub fn public_key(&self) -> String {
        encode_public_key(&self.public_key_bytes())
    }

    /// S... secret
    pub fn secret(&self) -> String {
        encode_secret_seed(&self.signing_key.to_bytes())
    }

    pub fn public_key_bytes(&self) -> [u8; 32] {
        self.signing_key.verifying_key().to_bytes()
    }

    /// Last 4 bytes of the public key, used as the signature hint
    pub fn signature_hint(&self) -> [u8; 4] {
        let public = self.public_key_bytes();
        [public[28], public[29], public[30], public[31]]
    }

    /// Sign arbitrary bytes (a transaction hash in practice)
    pub fn sign(&self, message: &[u8]) -> [u8; 64] {
        self.signing_key.sign(message).to_bytes()
    }
}

impl std::fmt::Debug for Keypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret
        f.debug_struct("Keypair")
            .field("public_key", &self.public_key())
            .finish()
    }
}
