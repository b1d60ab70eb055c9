//! Argon2id Password Stretching
//!
//! Turns the master password into a fixed-size high-entropy master seed.
//! Argon2id is memory-hard, which makes offline brute-force attacks against
//! the master password expensive, and it is fully deterministic for a given
//! (password, salt) pair.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::Zeroizing;

use crate::error::{DetkeyError, Result};

/// Master seed length in bytes (256 bits)
pub const MASTER_SEED_LEN: usize = 32;

/// Argon2id cost parameters. These are part of the key-reproduction contract:
/// changing any of them changes every key ever derived.
/// - Memory: 64 MiB (65536 KiB)
/// - Iterations: 1
/// - Parallelism: 4 lanes
const MEMORY_COST: u32 = 65536;
const TIME_COST: u32 = 1;
const PARALLELISM: u32 = 4;

/// Stretch the master password into the 32-byte master seed
///
/// # Arguments
/// * `password` - The user's master password
/// * `salt` - Public salt, identical across all derivations that should
///   reproduce the same keys
///
/// Deterministic: the same (password, salt) produces a byte-identical seed
/// on any machine.
pub fn stretch(password: &[u8], salt: &[u8]) -> Result<Zeroizing<[u8; MASTER_SEED_LEN]>> {
    let params = Params::new(MEMORY_COST, TIME_COST, PARALLELISM, Some(MASTER_SEED_LEN))
        .map_err(|e| DetkeyError::StretchFailed(e.to_string()))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut seed = Zeroizing::new([0u8; MASTER_SEED_LEN]);
    argon2
        .hash_password_into(password, salt, seed.as_mut_slice())
        .map_err(|e| DetkeyError::StretchFailed(e.to_string()))?;

    Ok(seed)
}
