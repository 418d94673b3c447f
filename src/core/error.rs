//! Error types for encryption and decryption.
//!
//! This module provides a unified error type for key generation, key loading,
//! and the encrypt/decrypt operations of every transform. Error messages for
//! decryption are intentionally vague to avoid acting as a padding oracle.

use thiserror::Error;

/// Errors that can occur when generating keys or transforming data.
#[derive(Debug, Error)]
pub enum TransformError {
    /// The requested or decoded key length is not one of the allowed sizes.
    #[error("Invalid key length: {0} bits")]
    InvalidKeyLength(usize),

    /// The text is not valid standard base64.
    #[error("Malformed encoding: {0}")]
    MalformedEncoding(#[from] base64::DecodeError),

    /// The key block text could not be parsed, or carries extraneous data.
    #[error("Malformed key block: {0}")]
    MalformedKeyBlock(&'static str),

    /// The key block parsed, but its type label is not the expected one.
    #[error("Wrong key block type: expected {expected}, found {found}")]
    WrongBlockType {
        /// The label the caller asked for.
        expected: &'static str,
        /// The label found in the block.
        found: String,
    },

    /// The structured key payload is invalid or is not an RSA key.
    #[error("Invalid key material")]
    InvalidKey,

    /// The decoded ciphertext is shorter than its fixed-size prefix.
    #[error("Truncated ciphertext: expected at least {minimum} bytes, got {actual}")]
    TruncatedCiphertext {
        /// Minimum structural length in bytes.
        minimum: usize,
        /// Decoded length in bytes.
        actual: usize,
    },

    /// The plaintext exceeds what the RSA modulus can carry under OAEP.
    #[error("Plaintext too large: at most {maximum} bytes, got {actual}")]
    PlaintextTooLarge {
        /// Capacity of the key in bytes.
        maximum: usize,
        /// Length of the rejected plaintext.
        actual: usize,
    },

    /// Decryption failed (wrong key, corrupted data, bad padding).
    /// Intentionally vague for security.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// The operating system's secure random source could not be read.
    #[error("Secure random source unavailable")]
    EntropyUnavailable,

    /// Generic cryptographic error.
    /// Intentionally vague for security.
    #[error("Cryptographic operation failed")]
    CryptoError,
}

/// Result type alias for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;

impl From<rand::Error> for TransformError {
    fn from(_: rand::Error) -> Self {
        Self::EntropyUnavailable
    }
}
