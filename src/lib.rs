//! detkey — deterministic SSH/TLS key derivation from a master password
//!
//! This crate derives Ed25519 and RSA key pairs from a single master
//! password and a hierarchical context string:
//! - Identical (password, salt, context, key type) inputs always reproduce
//!   identical key material
//! - Two different contexts under the same password yield unrelated keys
//! - No key is ever written to storage; everything is regenerated on demand

pub mod cli;
pub mod derive;
pub mod error;
pub mod output;

pub use error::{DetkeyError, Result};
