//! HKDF-SHA256 Context Expansion
//!
//! Expands the master seed into a context-bound pseudo-random byte stream:
//! extract-then-expand per RFC 5869, with the salt as the extraction salt and
//! the context string as the expansion info label. Contexts differing by a
//! single character produce statistically independent streams.
//!
//! The stream is a reader, not a fixed buffer: blocks
//! `T(n) = HMAC(PRK, T(n-1) || info || n)` are computed lazily, so callers can
//! pull 32 bytes for an Ed25519 seed or feed the RSA entropy source from the
//! same primitive. HKDF caps the total output at 255 blocks (8160 bytes);
//! running past the cap is a hard error, never a wraparound.

use hkdf::Hkdf;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use zeroize::Zeroizing;

use crate::error::{DetkeyError, Result};

type HmacSha256 = Hmac<Sha256>;

/// Digest length of the underlying hash (SHA-256)
const HASH_LEN: usize = 32;

/// RFC 5869 block counter is a single byte, so 255 blocks maximum
const MAX_BLOCKS: u16 = 255;

/// A deterministic, context-bound stream of pseudo-random bytes
pub struct EntropyStream {
    /// Pseudo-random key from the extract stage
    prk: Zeroizing<[u8; HASH_LEN]>,
    /// Expansion info label (the context string)
    info: Vec<u8>,
    /// Most recent expansion block T(n)
    block: Zeroizing<[u8; HASH_LEN]>,
    /// Read cursor within `block`
    pos: usize,
    /// Index of the next block to compute, 1-based
    counter: u16,
}

impl EntropyStream {
    /// Bind a stream to (master seed, salt, context)
    pub fn new(master_seed: &[u8], salt: &[u8], context: &[u8]) -> Self {
        let (prk, _) = Hkdf::<Sha256>::extract(Some(salt), master_seed);

        Self {
            prk: Zeroizing::new(prk.into()),
            info: context.to_vec(),
            block: Zeroizing::new([0u8; HASH_LEN]),
            // The current block starts out fully consumed so the first read
            // computes T(1).
            pos: HASH_LEN,
            counter: 1,
        }
    }

    /// Fill `out` with the next bytes of the stream
    ///
    /// Reads are deterministic across any split: N bytes then M bytes yields
    /// the same sequence as a single N+M-byte read.
    pub fn fill(&mut self, out: &mut [u8]) -> Result<()> {
        let mut written = 0;

        while written < out.len() {
            if self.pos == HASH_LEN {
                self.next_block()?;
            }

            let n = (out.len() - written).min(HASH_LEN - self.pos);
            out[written..written + n].copy_from_slice(&self.block[self.pos..self.pos + n]);
            self.pos += n;
            written += n;
        }

        Ok(())
    }

    /// Compute T(counter) and reset the read cursor
    fn next_block(&mut self) -> Result<()> {
        if self.counter > MAX_BLOCKS {
            return Err(DetkeyError::EntropyExhausted);
        }

        let mut mac = HmacSha256::new_from_slice(self.prk.as_slice())
            .expect("HMAC accepts keys of any length");

        // T(1) has no predecessor block
        if self.counter > 1 {
            mac.update(self.block.as_slice());
        }
        mac.update(&self.info);
        mac.update(&[self.counter as u8]);

        self.block.copy_from_slice(&mac.finalize().into_bytes());
        self.counter += 1;
        self.pos = 0;

        Ok(())
    }
}
