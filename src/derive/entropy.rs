//! Deterministic Entropy Source
//!
//! RSA key generation consumes far more random bytes, in unpredictable
//! amounts, than a single HKDF stream can supply. This adapter seeds itself
//! with exactly 32 bytes from the upstream [`EntropyStream`], then produces an
//! unbounded counter-based SHA-256 stream that stands in for the operating
//! system RNG inside the generation algorithm.
//!
//! Output block `i` is `SHA-256(seed || i_le)` with a monotonically increasing
//! 64-bit counter that is never reset; blocks are staged through an 8 KiB
//! buffer to amortize hashing cost. The read path never duplicates and never
//! drops a byte across refills.

use rand_core::{CryptoRng, RngCore};
use sha2::{Digest, Sha256};
use zeroize::{Zeroize, Zeroizing};

use super::expand::EntropyStream;
use crate::error::Result;

/// Internal seed length consumed from the upstream stream
pub const SEED_LEN: usize = 32;

/// Staging buffer size; must be a multiple of the digest length
const BUFFER_LEN: usize = 8192;

/// SHA-256 digest length
const BLOCK_LEN: usize = 32;

/// Unbounded deterministic byte stream backing RSA key generation
pub struct DeterministicEntropy {
    seed: Zeroizing<[u8; SEED_LEN]>,
    counter: u64,
    buffer: Vec<u8>,
    pos: usize,
}

impl DeterministicEntropy {
    /// Seed the source from the upstream stream, consuming exactly 32 bytes
    ///
    /// A short upstream read is a hard error; no fallback seed is ever
    /// substituted.
    pub fn from_stream(stream: &mut EntropyStream) -> Result<Self> {
        let mut seed = Zeroizing::new([0u8; SEED_LEN]);
        stream.fill(seed.as_mut_slice())?;
        Ok(Self::from_seed(seed))
    }

    fn from_seed(seed: Zeroizing<[u8; SEED_LEN]>) -> Self {
        Self {
            seed,
            counter: 0,
            buffer: vec![0u8; BUFFER_LEN],
            // Fully consumed, so the first read triggers a refill
            pos: BUFFER_LEN,
        }
    }

    /// Read the next `out.len()` bytes of the stream
    ///
    /// Pure computation, cannot fail; any split of reads yields the same byte
    /// sequence as a single read of the combined length.
    pub fn read(&mut self, out: &mut [u8]) {
        let mut written = 0;

        while written < out.len() {
            if self.pos == self.buffer.len() {
                self.refill();
            }

            let n = (out.len() - written).min(self.buffer.len() - self.pos);
            out[written..written + n].copy_from_slice(&self.buffer[self.pos..self.pos + n]);
            self.pos += n;
            written += n;
        }
    }

    /// Refill the whole buffer with consecutive counter blocks
    fn refill(&mut self) {
        for chunk in self.buffer.chunks_exact_mut(BLOCK_LEN) {
            let mut hasher = Sha256::new();
            hasher.update(self.seed.as_slice());
            hasher.update(self.counter.to_le_bytes());
            chunk.copy_from_slice(&hasher.finalize());
            self.counter += 1;
        }
        self.pos = 0;
    }
}

impl RngCore for DeterministicEntropy {
    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.read(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> std::result::Result<(), rand_core::Error> {
        self.read(dest);
        Ok(())
    }
}

impl CryptoRng for DeterministicEntropy {}

impl Drop for DeterministicEntropy {
    fn drop(&mut self) {
        self.buffer.zeroize();
    }
}
