//! Key Assembly
//!
//! Turns the context-bound entropy stream into an actual key pair. Ed25519
//! consumes a fixed 32-byte seed straight from the stream; RSA runs the
//! standard generation algorithm against the [`DeterministicEntropy`] adapter
//! in place of the system RNG, so the primality search itself becomes a pure
//! function of the derivation inputs.
//!
//! Generation failures are surfaced, never retried with fresh entropy.

use std::fmt;
use std::str::FromStr;

use ed25519_dalek::SigningKey;
use rsa::RsaPrivateKey;
use zeroize::Zeroizing;

use super::entropy::DeterministicEntropy;
use super::expand::EntropyStream;
use crate::error::{DetkeyError, Result};

/// Ed25519 seed length in bytes
pub const ED25519_SEED_LEN: usize = 32;

/// Supported key algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    Ed25519,
    Rsa2048,
    Rsa4096,
}

impl KeyType {
    pub fn name(self) -> &'static str {
        match self {
            KeyType::Ed25519 => "ed25519",
            KeyType::Rsa2048 => "rsa2048",
            KeyType::Rsa4096 => "rsa4096",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KeyType {
    type Err = DetkeyError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ed25519" => Ok(KeyType::Ed25519),
            "rsa2048" => Ok(KeyType::Rsa2048),
            "rsa4096" => Ok(KeyType::Rsa4096),
            other => Err(DetkeyError::UnsupportedKeyType(other.to_string())),
        }
    }
}

/// A derived private key, owned by the caller, never persisted by the core
pub enum PrivateKeyMaterial {
    Ed25519(SigningKey),
    Rsa(RsaPrivateKey),
}

/// Generate a key pair of the requested type from the entropy stream
pub fn generate(key_type: KeyType, stream: &mut EntropyStream) -> Result<PrivateKeyMaterial> {
    match key_type {
        KeyType::Ed25519 => {
            let mut seed = Zeroizing::new([0u8; ED25519_SEED_LEN]);
            stream.fill(seed.as_mut_slice())?;
            Ok(PrivateKeyMaterial::Ed25519(SigningKey::from_bytes(&seed)))
        }
        KeyType::Rsa2048 => generate_rsa(stream, 2048),
        KeyType::Rsa4096 => generate_rsa(stream, 4096),
    }
}

fn generate_rsa(stream: &mut EntropyStream, bits: usize) -> Result<PrivateKeyMaterial> {
    let mut rng = DeterministicEntropy::from_stream(stream)?;

    let key = RsaPrivateKey::new(&mut rng, bits)
        .map_err(|e| DetkeyError::KeyGenerationFailed(format!("rsa{}: {}", bits, e)))?;

    Ok(PrivateKeyMaterial::Rsa(key))
}
