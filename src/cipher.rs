//! The Cipher facade: passphrase in, Base64 ciphertexts out.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::aead::{self, NonceLength};
use crate::error::{Error, Result};
use crate::kdf::{derive_key, EncryptionKey};
use crate::payload::Payload;

/// Configuration for a [`Cipher`] instance.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CipherOptions {
    /// Nonce length used for sealing and expected when opening.
    pub nonce_length: NonceLength,
}

/// Encrypts and decrypts payloads under a passphrase-derived key.
///
/// The 256-bit key is derived once from the passphrase (SHA-256) at
/// construction; derivation is deterministic, so this is equivalent to
/// re-deriving per call. The passphrase itself is not retained.
///
/// One instance can seal and open any number of independent blobs. Every
/// blob is self-contained (the nonce travels with the ciphertext), so no
/// state accumulates between calls and instances can be shared freely
/// across threads.
///
/// # Example
/// ```
/// use cipherly::Cipher;
///
/// let cipher = Cipher::new("my-secret-key");
/// let sealed = cipher.encrypt("Hello World").unwrap();
/// assert_eq!(cipher.decrypt(&sealed).unwrap().as_text(), Some("Hello World"));
/// ```
#[derive(Debug, Clone)]
pub struct Cipher {
    key: EncryptionKey,
    nonce_length: NonceLength,
}

impl Cipher {
    /// Create a cipher with the default 96-bit nonce length.
    pub fn new(passphrase: &str) -> Self {
        Self::with_options(passphrase, CipherOptions::default())
    }

    /// Create a cipher with explicit options.
    ///
    /// Both the encrypting and the decrypting party must use the same
    /// passphrase and nonce length; neither is recorded in the output.
    pub fn with_options(passphrase: &str, options: CipherOptions) -> Self {
        Self {
            key: derive_key(passphrase),
            nonce_length: options.nonce_length,
        }
    }

    /// The configured nonce length.
    pub fn nonce_length(&self) -> NonceLength {
        self.nonce_length
    }

    /// Encrypt a payload and return it as a Base64 string.
    ///
    /// Accepts text, raw bytes, or a structured [`Payload::Value`]. A fresh
    /// random nonce is drawn for every call, so encrypting the same input
    /// twice produces different outputs.
    ///
    /// # Errors
    /// - Returns [`Error::UnsupportedInput`] if the payload has no defined
    ///   serialization (raised before any cryptographic work)
    pub fn encrypt(&self, data: impl Into<Payload>) -> Result<String> {
        let plaintext = data.into().to_bytes()?;
        let blob = aead::seal(&self.key, self.nonce_length, &plaintext)?;
        Ok(STANDARD.encode(blob))
    }

    /// Encrypt any serializable value as a structured payload.
    ///
    /// # Errors
    /// - Returns [`Error::UnsupportedInput`] if the value cannot be
    ///   represented as JSON
    pub fn encrypt_serialize<T: Serialize>(&self, value: &T) -> Result<String> {
        self.encrypt(Payload::from_serialize(value)?)
    }

    /// Decrypt a Base64 string produced by [`encrypt`](Self::encrypt).
    ///
    /// The decrypted bytes are reinterpreted best-effort (JSON, then UTF-8
    /// text, then raw bytes); the caller pattern-matches on the returned
    /// [`Payload`].
    ///
    /// # Errors
    /// - Returns [`Error::Malformed`] if the input is not valid Base64 or
    ///   is too short to contain a nonce and tag
    /// - Returns [`Error::Authentication`] if tag verification fails:
    ///   wrong passphrase, tampered data, or mismatched nonce length
    pub fn decrypt(&self, encoded: &str) -> Result<Payload> {
        let blob = STANDARD
            .decode(encoded)
            .map_err(|e| Error::Malformed(format!("invalid Base64: {}", e)))?;
        let plaintext = aead::open(&self.key, self.nonce_length, &blob)?;
        Ok(Payload::from_bytes(plaintext))
    }

    /// Decrypt and deserialize into a concrete type.
    ///
    /// The expected type is not verified against what was encrypted; this
    /// trusts the caller to know the payload shape, like
    /// [`Payload::deserialize`].
    pub fn decrypt_deserialize<T: serde::de::DeserializeOwned>(&self, encoded: &str) -> Result<T> {
        self.decrypt(encoded)?
            .deserialize()
            .map_err(|e| Error::Malformed(format!("payload did not deserialize: {}", e)))
    }
}
