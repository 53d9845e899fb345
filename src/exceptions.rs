//! Error types for gallifrey

use std::fmt;
use std::path::PathBuf;

/// Main error type for gallifrey operations
#[derive(Debug)]
pub enum GallifreyError {
    /// A required key file does not exist
    KeyFileMissing(PathBuf),

    /// I/O failure on a key file
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Text that should be base64 did not decode
    Decode { what: String, reason: String },

    /// Decoded bytes are not a usable Ed25519 key
    InvalidKey(String),

    /// Stdin could not be read
    Input(std::io::Error),
}

impl GallifreyError {
    /// Attach a path to an I/O error
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GallifreyError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GallifreyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GallifreyError::KeyFileMissing(path) => {
                write!(f, "Key file not found: {}", path.display())
            }
            GallifreyError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            GallifreyError::Decode { what, reason } => {
                write!(f, "Failed to decode {what}: {reason}")
            }
            GallifreyError::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            GallifreyError::Input(err) => write!(f, "Failed to read input: {err}"),
        }
    }
}

impl std::error::Error for GallifreyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GallifreyError::Io { source, .. } => Some(source),
            GallifreyError::Input(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ed25519_dalek::SignatureError> for GallifreyError {
    fn from(err: ed25519_dalek::SignatureError) -> Self {
        GallifreyError::InvalidKey(err.to_string())
    }
}

/// Result type for gallifrey operations
pub type Result<T> = std::result::Result<T, GallifreyError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_io_error_keeps_path_and_source() {
        let err = GallifreyError::io(
            "/tmp/keys/private_key.pem",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("/tmp/keys/private_key.pem"));
        assert!(msg.contains("denied"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_key_from_signature_error() {
        let err: GallifreyError = ed25519_dalek::SignatureError::new().into();
        assert!(matches!(err, GallifreyError::InvalidKey(_)));
    }
}
