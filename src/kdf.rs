//! Key derivation using SHA-256.
//!
//! The passphrase is hashed once with SHA-256 to produce a 256-bit AES key.
//! Derivation is deterministic: the same passphrase always yields the same
//! key, which is what makes ciphertexts self-contained (only the passphrase
//! is needed to decrypt, no salt or parameters travel with the data).

use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Length of encryption keys in bytes (256-bit).
pub const KEY_LENGTH: usize = 32;

/// Symmetric key derived from a passphrase.
///
/// Zeroizes its memory on drop to prevent key material from persisting.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey {
    key: [u8; KEY_LENGTH],
}

impl EncryptionKey {
    /// Create a key from raw bytes.
    pub fn from_bytes(key: [u8; KEY_LENGTH]) -> Self {
        Self { key }
    }

    /// Get the key bytes.
    ///
    /// # Security
    /// The returned slice should be used immediately and not stored.
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.key
    }
}

impl fmt::Debug for EncryptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EncryptionKey([REDACTED])")
    }
}

/// Derive a 256-bit key from a passphrase.
///
/// # Postconditions
/// - The derived key is deterministic given the same passphrase
/// - The passphrase is not stored or logged
///
/// The passphrase is not validated for strength; callers who need
/// brute-force resistance should supply a high-entropy secret.
pub fn derive_key(passphrase: &str) -> EncryptionKey {
    let digest = Sha256::digest(passphrase.as_bytes());
    EncryptionKey::from_bytes(digest.into())
}
