//! Gallifrey - sign and verify single-line messages with Ed25519
//!
//! A keypair is generated on first use and kept in two base64 text files,
//! so repeated invocations sign with the same identity.

#![deny(
    // Safety
    unsafe_code,

    // Correctness
    missing_debug_implementations,

    // Future compatibility
    future_incompatible,

    // Rust 2018 idioms
    rust_2018_idioms,
)]
#![warn(
    unreachable_pub,

    // Error handling best practices
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::unimplemented,
    clippy::todo,

    // Code clarity and maintainability
    clippy::cognitive_complexity,
    clippy::type_complexity,

    // Best practices
    clippy::clone_on_ref_ptr,
    clippy::wildcard_imports,
    clippy::enum_glob_use,
    clippy::if_not_else,
    clippy::needless_continue,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod api;
pub mod exceptions;
pub mod exit_codes;
pub mod logger;
pub mod signing;
pub mod utils;
pub mod version;

// Re-export main API functions
pub use api::{SignOptions, SignResult, sign_message, verify_message};
pub use exceptions::GallifreyError;
pub use signing::{KeyPair, KeyStore};
