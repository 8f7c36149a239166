//! Authenticated encryption using AES-256-GCM.
//!
//! AES-256-GCM provides both confidentiality and authenticity with a
//! 128-bit tag. Sealed blobs are self-contained: the randomly generated
//! nonce is prepended to the ciphertext, so only the key is needed to open
//! them. The nonce must never repeat under the same key, which is why it is
//! freshly drawn from the OS CSPRNG on every call.

use aes_gcm::{
    aead::{
        generic_array::{typenum::Unsigned, GenericArray},
        Aead, AeadCore, KeyInit, Nonce, OsRng,
    },
    aes::Aes256,
    Aes256Gcm, AesGcm,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::kdf::EncryptionKey;

/// Authentication tag size (16 bytes).
pub const TAG_LENGTH: usize = 16;

/// AES-256-GCM with a 128-bit nonce.
type Aes256Gcm16 = AesGcm<Aes256, aes_gcm::aead::generic_array::typenum::U16>;

/// Supported nonce lengths for the sealed wire format.
///
/// Both sides of an exchange must agree on the nonce length out-of-band;
/// it is not recorded in the blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum NonceLength {
    /// 96-bit nonce, the standard and recommended size for GCM.
    #[default]
    Standard,
    /// 128-bit nonce, for interoperability with producers that use one.
    ///
    /// Nonces other than 96 bits are run through the GHASH-based IV
    /// derivation that the GCM specification defines, matching what
    /// WebCrypto and other compliant implementations produce.
    Extended,
}

impl NonceLength {
    /// Nonce size in bytes.
    pub const fn bytes(self) -> usize {
        match self {
            NonceLength::Standard => 12,
            NonceLength::Extended => 16,
        }
    }
}

/// Encrypt plaintext using AES-256-GCM.
///
/// # Postconditions
/// - Returns nonce || ciphertext || tag
/// - The nonce is randomly generated per call, so sealing the same
///   plaintext twice yields different blobs
///
/// # Errors
/// - Returns error if the plaintext exceeds the AES-GCM length limit
pub fn seal(key: &EncryptionKey, nonce_length: NonceLength, plaintext: &[u8]) -> Result<Vec<u8>> {
    match nonce_length {
        NonceLength::Standard => seal_with::<Aes256Gcm>(key, plaintext),
        NonceLength::Extended => seal_with::<Aes256Gcm16>(key, plaintext),
    }
}

/// Decrypt a blob produced by [`seal`].
///
/// # Preconditions
/// - `blob` must be at least `nonce_length.bytes()` + TAG_LENGTH bytes
/// - Blob format: nonce || encrypted_data || tag
///
/// # Errors
/// - Returns [`Error::Malformed`] if the blob is too short
/// - Returns [`Error::Authentication`] if tag verification fails
///   (wrong key, tampered data, or mismatched nonce length)
///
/// # Security
/// - Authenticates before releasing any plaintext
pub fn open(key: &EncryptionKey, nonce_length: NonceLength, blob: &[u8]) -> Result<Vec<u8>> {
    match nonce_length {
        NonceLength::Standard => open_with::<Aes256Gcm>(key, blob),
        NonceLength::Extended => open_with::<Aes256Gcm16>(key, blob),
    }
}

fn seal_with<C>(key: &EncryptionKey, plaintext: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let cipher = C::new(GenericArray::from_slice(key.as_bytes()));
    let nonce = C::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|_| Error::UnsupportedInput("plaintext exceeds AES-GCM length limit".into()))?;

    // Prepend nonce so the blob is self-contained
    let mut blob = Vec::with_capacity(nonce.len() + ciphertext.len());
    blob.extend_from_slice(&nonce);
    blob.extend_from_slice(&ciphertext);

    Ok(blob)
}

fn open_with<C>(key: &EncryptionKey, blob: &[u8]) -> Result<Vec<u8>>
where
    C: Aead + KeyInit,
{
    let nonce_bytes = <C as AeadCore>::NonceSize::to_usize();
    if blob.len() < nonce_bytes + TAG_LENGTH {
        return Err(Error::Malformed(format!(
            "ciphertext too short: {} bytes, need at least {}",
            blob.len(),
            nonce_bytes + TAG_LENGTH
        )));
    }

    let (nonce, ciphertext) = blob.split_at(nonce_bytes);
    let cipher = C::new(GenericArray::from_slice(key.as_bytes()));

    cipher
        .decrypt(Nonce::<C>::from_slice(nonce), ciphertext)
        .map_err(|_| Error::Authentication)
}
