//! Passphrase-based authenticated encryption for Cipherly.
//!
//! This crate provides:
//! - Key derivation from a passphrase using SHA-256
//! - Authenticated encryption using AES-256-GCM
//! - Self-contained ciphertexts (nonce travels with the sealed data)
//! - Base64 text encoding for transport
//!
//! # Security Guarantees
//! - Key material is automatically zeroized on drop
//! - A fresh random nonce is drawn from the OS for every encryption
//! - Tampered or wrongly-keyed ciphertexts are rejected, never decrypted
//!
//! # Example
//! ```
//! use cipherly::{Cipher, Payload};
//!
//! let cipher = Cipher::new("my-secret-key");
//! let sealed = cipher.encrypt("Hello World").unwrap();
//! let opened = cipher.decrypt(&sealed).unwrap();
//! assert_eq!(opened, Payload::Text("Hello World".to_string()));
//! ```

pub mod aead;
pub mod cipher;
pub mod error;
pub mod kdf;
pub mod payload;

pub use aead::{NonceLength, TAG_LENGTH};
pub use cipher::{Cipher, CipherOptions};
pub use error::{Error, Result};
pub use kdf::{derive_key, EncryptionKey, KEY_LENGTH};
pub use payload::Payload;
