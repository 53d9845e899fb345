//! Base64 text encoding for keys and signatures.

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};

/// Encode bytes as standard-alphabet, padded base64
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode standard-alphabet, padded base64
pub fn decode(text: &str) -> Result<Vec<u8>, base64::DecodeError> {
    BASE64.decode(text)
}
