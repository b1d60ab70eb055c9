//! The derivation pipeline
//!
//! This module provides:
//! - Argon2id password stretching into a master seed
//! - HKDF-SHA256 context-bound expansion of that seed
//! - A deterministic entropy source for RSA key generation
//! - Key assembly for Ed25519, RSA-2048 and RSA-4096
//!
//! The whole pipeline is a pure function: identical (password, salt, context,
//! key type) inputs reproduce identical key material on any machine, and no
//! key ever touches storage.

mod entropy;
mod expand;
mod keys;
mod secret;
mod stretch;

pub use entropy::DeterministicEntropy;
pub use expand::EntropyStream;
pub use keys::{generate, KeyType, PrivateKeyMaterial, ED25519_SEED_LEN};
pub use secret::SecretBytes;
pub use stretch::{stretch, MASTER_SEED_LEN};

use crate::error::{DetkeyError, Result};

/// Fixed public salt. Changing it changes every derived key, so deployments
/// that override it must override it everywhere.
pub const DEFAULT_SALT: &str = "a-unique-salt-for-detkey-v1";

/// Derive a key pair from the master password and a context string
///
/// Runs the full pipeline: stretch the password into the master seed, bind an
/// entropy stream to (seed, salt, context), assemble the requested key type.
/// The master seed lives only for the duration of this call and is zeroed on
/// every exit path.
pub fn derive_key(
    password: &[u8],
    salt: &[u8],
    context: &str,
    key_type: KeyType,
) -> Result<PrivateKeyMaterial> {
    if password.is_empty() {
        return Err(DetkeyError::EmptyPassword);
    }
    if context.is_empty() {
        return Err(DetkeyError::EmptyContext);
    }

    let master_seed = stretch::stretch(password, salt)?;
    let mut stream = EntropyStream::new(master_seed.as_slice(), salt, context.as_bytes());

    keys::generate(key_type, &mut stream)
}
