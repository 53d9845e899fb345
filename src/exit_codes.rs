//! Standard exit codes for the gallifrey binary
//!
//! A verification that fails is a normal outcome and exits with
//! `EXIT_SUCCESS`; only errors map to the codes below.

use crate::exceptions::GallifreyError;

/// Successful execution
pub const EXIT_SUCCESS: i32 = 0;

/// Generic error (avoid using - be more specific)
pub const EXIT_ERROR: i32 = 1;

/// Panic or unrecoverable error
pub const EXIT_PANIC: i32 = 101;

/// Invalid command-line arguments (reported by clap before any error value exists)
pub const EXIT_INVALID_ARGS: i32 = 105;

/// I/O error (key file not found, permission denied, disk error)
pub const EXIT_IO_ERROR: i32 = 106;

/// Malformed key material (bad base64, wrong length, mismatched keypair)
pub const EXIT_KEY_ERROR: i32 = 107;

/// Map an error to the exit code the binary reports
pub fn exit_code_for(err: &GallifreyError) -> i32 {
    match err {
        GallifreyError::KeyFileMissing(_) | GallifreyError::Io { .. } => EXIT_IO_ERROR,
        GallifreyError::Decode { .. } | GallifreyError::InvalidKey(_) => EXIT_KEY_ERROR,
        GallifreyError::Input(_) => EXIT_ERROR,
    }
}
