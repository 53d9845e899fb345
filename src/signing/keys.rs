//! Ed25519 keypair type and raw-byte conversions

use super::defaults::{KEYPAIR_LEN, PUBLIC_KEY_LEN};
use crate::exceptions::{GallifreyError, Result};
use crate::utils::encoding;
use ed25519_dalek::{SigningKey, VerifyingKey};
use sha2::{Digest, Sha256};

/// A signing key together with its public half
#[derive(Debug, Clone)]
pub struct KeyPair {
    signing_key: SigningKey,
}

impl KeyPair {
    pub fn from_signing_key(signing_key: SigningKey) -> Self {
        KeyPair { signing_key }
    }

    /// Rebuild a keypair from its 64-byte on-disk form (seed || public key)
    ///
    /// Fails if the public half does not belong to the seed.
    pub fn from_keypair_bytes(bytes: &[u8]) -> Result<Self> {
        let array: &[u8; KEYPAIR_LEN] = bytes.try_into().map_err(|_| {
            GallifreyError::InvalidKey(format!(
                "private key must be exactly {KEYPAIR_LEN} bytes, got {}",
                bytes.len()
            ))
        })?;
        let signing_key = SigningKey::from_keypair_bytes(array)?;
        Ok(KeyPair { signing_key })
    }

    /// The 64-byte on-disk form of the private key
    pub fn to_keypair_bytes(&self) -> [u8; KEYPAIR_LEN] {
        self.signing_key.to_keypair_bytes()
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        self.signing_key.verifying_key()
    }

    /// Public key as base64, as printed by `sign`
    pub fn public_key_base64(&self) -> String {
        encoding::encode(self.verifying_key().as_bytes())
    }
}

/// Parse a raw 32-byte public key
pub fn public_key_from_bytes(bytes: &[u8]) -> Result<VerifyingKey> {
    let array: &[u8; PUBLIC_KEY_LEN] = bytes.try_into().map_err(|_| {
        GallifreyError::InvalidKey(format!(
            "public key must be exactly {PUBLIC_KEY_LEN} bytes, got {}",
            bytes.len()
        ))
    })?;
    Ok(VerifyingKey::from_bytes(array)?)
}

/// Parse a base64 public key as supplied on the command line
pub fn public_key_from_base64(text: &str) -> Result<VerifyingKey> {
    let bytes = encoding::decode(text.trim()).map_err(|e| GallifreyError::Decode {
        what: "public key".to_string(),
        reason: e.to_string(),
    })?;
    public_key_from_bytes(&bytes)
}

/// Short hex fingerprint of a public key for log output
pub fn fingerprint(verifying_key: &VerifyingKey) -> String {
    let digest = Sha256::digest(verifying_key.as_bytes());
    hex::encode(&digest[..8])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::signing::crypto::generate_keypair;

    #[test]
    fn test_keypair_bytes_roundtrip() {
        let keypair = generate_keypair();
        let bytes = keypair.to_keypair_bytes();
        let restored = KeyPair::from_keypair_bytes(&bytes).unwrap();
        assert_eq!(restored.verifying_key(), keypair.verifying_key());
        // Public half sits after the seed
        assert_eq!(&bytes[32..], keypair.verifying_key().as_bytes());
    }

    #[test]
    fn test_seed_only_private_key_rejected() {
        let keypair = generate_keypair();
        let seed = keypair.signing_key().to_bytes();
        let err = KeyPair::from_keypair_bytes(&seed).unwrap_err();
        assert!(err.to_string().contains("64 bytes"));
    }

    #[test]
    fn test_inconsistent_keypair_bytes_rejected() {
        let a = generate_keypair();
        let b = generate_keypair();
        let mut bytes = a.to_keypair_bytes();
        bytes[32..].copy_from_slice(b.verifying_key().as_bytes());
        assert!(KeyPair::from_keypair_bytes(&bytes).is_err());
    }

    #[test]
    fn test_public_key_from_base64() {
        let keypair = generate_keypair();
        let parsed = public_key_from_base64(&keypair.public_key_base64()).unwrap();
        assert_eq!(parsed, keypair.verifying_key());

        assert!(matches!(
            public_key_from_base64("%%%"),
            Err(GallifreyError::Decode { .. })
        ));
        assert!(matches!(
            public_key_from_base64(&encoding::encode(&[7u8; 16])),
            Err(GallifreyError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_fingerprint_is_stable() {
        let keypair = generate_keypair();
        let fp = fingerprint(&keypair.verifying_key());
        assert_eq!(fp.len(), 16);
        assert_eq!(fp, fingerprint(&keypair.verifying_key()));
    }
}
