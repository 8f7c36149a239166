//! Common error types for Cipherly.

use thiserror::Error;

/// Top-level error type for Cipherly operations.
///
/// Every failure is recoverable: a failed call never corrupts the cipher
/// instance, and subsequent calls are unaffected. No failure is retried
/// internally; retrying a rejected authentication with the same inputs
/// cannot succeed.
#[derive(Debug, Error)]
pub enum Error {
    /// The value handed to `encrypt` has no defined serialization.
    ///
    /// Raised before any cryptographic work is done.
    #[error("Unsupported input type: {0}")]
    UnsupportedInput(String),

    /// The input to `decrypt` is not a well-formed ciphertext.
    ///
    /// Either Base64 decoding failed, or the decoded blob is too short to
    /// contain a nonce and an authentication tag.
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// AEAD tag verification failed during decryption.
    ///
    /// Wrong passphrase, corrupted or tampered ciphertext, or a nonce
    /// length configuration that does not match the encrypting side.
    #[error("Authentication failed: wrong passphrase or corrupted ciphertext")]
    Authentication,
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;
