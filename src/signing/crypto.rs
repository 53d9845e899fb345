//! Cryptographic operations: key generation, signing, verification

use super::defaults::{SECRET_KEY_LEN, SIGNATURE_LEN};
use super::keys::KeyPair;
use crate::utils::encoding;
use ed25519_dalek::{Signature, Signer, SigningKey, Verifier, VerifyingKey};
use log::warn;
use rand::rngs::OsRng;

/// Generate a fresh Ed25519 keypair from the OS random source
pub fn generate_keypair() -> KeyPair {
    use rand::RngCore;
    let mut secret_key = [0u8; SECRET_KEY_LEN];
    OsRng.fill_bytes(&mut secret_key);
    KeyPair::from_signing_key(SigningKey::from_bytes(&secret_key))
}

/// Sign raw message bytes
pub fn sign_bytes(signing_key: &SigningKey, message: &[u8]) -> [u8; SIGNATURE_LEN] {
    signing_key.sign(message).to_bytes()
}

/// Sign raw message bytes and return the signature as base64
pub fn sign(signing_key: &SigningKey, message: &[u8]) -> String {
    encoding::encode(&sign_bytes(signing_key, message))
}

/// Verify a raw signature
pub fn verify_bytes(verifying_key: &VerifyingKey, message: &[u8], signature: &[u8]) -> bool {
    match Signature::from_slice(signature) {
        Ok(sig) => verifying_key.verify(message, &sig).is_ok(),
        Err(_) => {
            warn!(
                "⚠️ Signature is {} bytes, expected {SIGNATURE_LEN}",
                signature.len()
            );
            false
        }
    }
}

/// Verify a base64 signature
///
/// Text that does not decode counts as a failed verification, not an error.
pub fn verify(verifying_key: &VerifyingKey, message: &[u8], signature_text: &str) -> bool {
    match encoding::decode(signature_text.trim()) {
        Ok(bytes) => verify_bytes(verifying_key, message, &bytes),
        Err(e) => {
            warn!("⚠️ Error decoding signature: {e}");
            false
        }
    }
}
