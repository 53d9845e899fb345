//! Ed25519 message signing backed by a local key store

pub mod cli;
pub mod crypto;
pub mod defaults;
pub mod keys;
pub mod store;

pub use keys::KeyPair;
pub use store::KeyStore;
