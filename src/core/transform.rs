//! Capability traits shared by every transform.
//!
//! A caller picks a capability by picking a constructor:
//!
//! | Type | [`Encryptor`] | [`Decryptor`] | [`Transformer`] |
//! |------|:---:|:---:|:---:|
//! | `AesTransformer` | yes | yes | yes |
//! | `RsaTransformer` | yes | yes | yes |
//! | `RsaEncryptor` | yes | no | no |
//!
//! Ciphertexts are always standard base64 text, so they can be stored or
//! sent anywhere a string can.

use crate::core::error::TransformResult;

/// Encrypts data into base64 text.
pub trait Encryptor: Send + Sync {
    /// Encrypts `plaintext` and returns the base64-encoded ciphertext.
    ///
    /// Every call draws fresh randomness, so encrypting the same plaintext
    /// twice yields different ciphertexts.
    ///
    /// # Errors
    ///
    /// Fails if the secure random source is unavailable or if the plaintext
    /// does not fit the key.
    fn encrypt(&self, plaintext: &[u8]) -> TransformResult<String>;
}

/// Decrypts base64 text produced by a matching [`Encryptor`].
pub trait Decryptor: Send + Sync {
    /// Decrypts base64-encoded `ciphertext`.
    ///
    /// # Errors
    ///
    /// Fails if the text is not valid base64 or the ciphertext is not
    /// structurally valid for this key.
    fn decrypt(&self, ciphertext: &str) -> TransformResult<Vec<u8>>;
}

/// Both an [`Encryptor`] and a [`Decryptor`].
pub trait Transformer: Encryptor + Decryptor {}

impl<T: Encryptor + Decryptor> Transformer for T {}
