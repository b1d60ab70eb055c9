//! Secure container for the master password
//!
//! The wrapper ensures that the password is:
//! 1. Zeroed when dropped
//! 2. Not accidentally cloned or printed
//! 3. Locked in memory where possible (prevents swapping)

use std::ops::Deref;
use zeroize::Zeroize;

/// Master password bytes that are automatically zeroed on drop
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    /// Create a new SecretBytes from a vector
    /// The original vector is consumed and its memory is now managed securely
    pub fn new(data: Vec<u8>) -> Self {
        let secret = Self(data);
        secret.lock_memory();
        secret
    }

    /// Lock memory to prevent swapping (best effort, may fail without privileges)
    #[cfg(unix)]
    fn lock_memory(&self) {
        unsafe {
            libc::mlock(self.0.as_ptr() as *const libc::c_void, self.0.len());
        }
    }

    #[cfg(not(unix))]
    fn lock_memory(&self) {
        // Windows has VirtualLock but requires specific privileges
    }

    /// Get the length of the secret bytes
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Deref for SecretBytes {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<String> for SecretBytes {
    fn from(data: String) -> Self {
        Self::new(data.into_bytes())
    }
}

// Prevent accidental debug printing of the password
impl std::fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretBytes")
            .field("len", &self.0.len())
            .field("data", &"[REDACTED]")
            .finish()
    }
}
