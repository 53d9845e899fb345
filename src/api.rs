//! High-level API for gallifrey operations

use crate::exceptions::Result;
use crate::signing::{crypto, keys, store::KeyStore};
use crate::utils::resolve_key_dir;
use log::{debug, info};
use std::path::PathBuf;

/// Options for signing
#[derive(Debug, Default)]
pub struct SignOptions {
    /// Directory holding the key files (falls back to `GALLIFREY_KEY_DIR`, then CWD)
    pub key_dir: Option<PathBuf>,
}

/// Output of a sign operation, both fields base64
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignResult {
    pub signature: String,
    pub public_key: String,
}

/// Sign a message with the stored keypair, creating it on first use
pub fn sign_message(message: &[u8], options: &SignOptions) -> Result<SignResult> {
    let key_dir = resolve_key_dir(options.key_dir.clone());
    debug!("📁 Key directory: {key_dir:?}");

    let keypair = KeyStore::new(&key_dir).load_or_create()?;
    let signature = crypto::sign(keypair.signing_key(), message);
    info!(
        "✍️ Signed {} bytes with key {}",
        message.len(),
        keys::fingerprint(&keypair.verifying_key())
    );

    Ok(SignResult {
        signature,
        public_key: keypair.public_key_base64(),
    })
}

/// Verify a base64 signature against a base64 public key
///
/// A malformed public key is an error; a malformed signature is just
/// an invalid one.
pub fn verify_message(public_key: &str, message: &[u8], signature: &str) -> Result<bool> {
    let verifying_key = keys::public_key_from_base64(public_key)?;
    let valid = crypto::verify(&verifying_key, message, signature);
    info!(
        "🔍 Verified {} bytes against key {}: {}",
        message.len(),
        keys::fingerprint(&verifying_key),
        if valid { "✅ VALID" } else { "❌ INVALID" }
    );
    Ok(valid)
}
