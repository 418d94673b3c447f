//! AES in CFB mode (full-block feedback).
//!
//! Wire format: `base64(iv || cfb(plaintext))` where the IV is one AES block
//! (16 bytes) drawn fresh from the secure source on every call.
//!
//! # Security
//!
//! CFB provides confidentiality only. There is no authentication tag, so a
//! modified ciphertext decrypts to garbage instead of failing. Adding a tag
//! would change the wire format.

use aes::cipher::{AsyncStreamCipher, BlockCipher, BlockEncryptMut, InnerIvInit, KeyInit};
use aes::{Aes128, Aes192, Aes256};
use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::encoding::{decode, encode};
use crate::core::error::{TransformError, TransformResult};
use crate::core::key_size::{AesKeySize, KeySize};
use crate::core::transform::{Decryptor, Encryptor};
use crate::core::types::AesKey;

/// Size of the IV prefix (one AES block).
pub const IV_SIZE: usize = 16;

/// Generates a new AES key of `bits` bits, returned as base64 text.
///
/// # Errors
///
/// - `TransformError::InvalidKeyLength` if `bits` is not 128, 192 or 256
/// - `TransformError::EntropyUnavailable` if the secure source fails
pub fn generate_aes_key(bits: usize) -> TransformResult<String> {
    let size = AesKeySize::from_bits(bits)?;
    Ok(AesKey::generate(size)?.to_string())
}

/// Block cipher keyed once at construction.
#[derive(Clone)]
enum BlockCipherKind {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipherKind {
    fn new(key: &AesKey) -> TransformResult<Self> {
        let bytes = key.as_bytes();
        let invalid = |_| TransformError::InvalidKeyLength(key.size().bits());
        Ok(match key.size() {
            AesKeySize::Aes128 => Self::Aes128(Aes128::new_from_slice(bytes).map_err(invalid)?),
            AesKeySize::Aes192 => Self::Aes192(Aes192::new_from_slice(bytes).map_err(invalid)?),
            AesKeySize::Aes256 => Self::Aes256(Aes256::new_from_slice(bytes).map_err(invalid)?),
        })
    }

    fn encrypt(&self, iv: &[u8], buf: &mut [u8]) -> TransformResult<()> {
        match self {
            Self::Aes128(cipher) => cfb_encrypt(cipher, iv, buf),
            Self::Aes192(cipher) => cfb_encrypt(cipher, iv, buf),
            Self::Aes256(cipher) => cfb_encrypt(cipher, iv, buf),
        }
    }

    fn decrypt(&self, iv: &[u8], buf: &mut [u8]) -> TransformResult<()> {
        match self {
            Self::Aes128(cipher) => cfb_decrypt(cipher, iv, buf),
            Self::Aes192(cipher) => cfb_decrypt(cipher, iv, buf),
            Self::Aes256(cipher) => cfb_decrypt(cipher, iv, buf),
        }
    }
}

fn cfb_encrypt<C>(cipher: &C, iv: &[u8], buf: &mut [u8]) -> TransformResult<()>
where
    C: BlockEncryptMut + BlockCipher + Clone,
{
    cfb_mode::Encryptor::<C>::inner_iv_slice_init(cipher.clone(), iv)
        .map_err(|_| TransformError::CryptoError)?
        .encrypt(buf);
    Ok(())
}

fn cfb_decrypt<C>(cipher: &C, iv: &[u8], buf: &mut [u8]) -> TransformResult<()>
where
    C: BlockEncryptMut + BlockCipher + Clone,
{
    cfb_mode::Decryptor::<C>::inner_iv_slice_init(cipher.clone(), iv)
        .map_err(|_| TransformError::CryptoError)?
        .decrypt(buf);
    Ok(())
}

/// Encrypts and decrypts with one AES key in CFB mode.
///
/// # Example
///
/// ```rust
/// use simple_encrypt::{generate_aes_key, AesTransformer, Decryptor, Encryptor};
///
/// let key = generate_aes_key(256).expect("valid size");
/// let transformer = AesTransformer::new(&key).expect("valid key");
///
/// let encrypted = transformer.encrypt(b"hello").expect("encrypt");
/// let decrypted = transformer.decrypt(&encrypted).expect("decrypt");
/// assert_eq!(decrypted, b"hello");
/// ```
#[derive(Clone)]
pub struct AesTransformer {
    cipher: BlockCipherKind,
    size: AesKeySize,
}

impl AesTransformer {
    /// Builds a transformer from a base64-encoded key.
    ///
    /// # Errors
    ///
    /// - `TransformError::MalformedEncoding` if `key` is not valid base64
    /// - `TransformError::InvalidKeyLength` if the decoded key is not 16, 24
    ///   or 32 bytes
    pub fn new(key: &str) -> TransformResult<Self> {
        let key = AesKey::try_from(key)?;
        Self::from_key(&key)
    }

    /// Builds a transformer from an already validated key.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidKeyLength` if the cipher rejects the key.
    pub fn from_key(key: &AesKey) -> TransformResult<Self> {
        let cipher = BlockCipherKind::new(key)?;
        debug!(size = %key.size(), "built AES transformer");
        Ok(Self {
            cipher,
            size: key.size(),
        })
    }

    /// Returns the size of the bound key.
    #[must_use]
    pub const fn key_size(&self) -> AesKeySize {
        self.size
    }
}

impl Encryptor for AesTransformer {
    fn encrypt(&self, plaintext: &[u8]) -> TransformResult<String> {
        let mut out = Zeroizing::new(vec![0u8; IV_SIZE + plaintext.len()]);
        let (iv, body) = out.split_at_mut(IV_SIZE);
        OsRng.try_fill_bytes(iv)?;
        body.copy_from_slice(plaintext);
        self.cipher.encrypt(iv, body)?;
        Ok(encode(&out))
    }
}

impl Decryptor for AesTransformer {
    fn decrypt(&self, ciphertext: &str) -> TransformResult<Vec<u8>> {
        let decoded = decode(ciphertext)?;
        if decoded.len() < IV_SIZE {
            return Err(TransformError::TruncatedCiphertext {
                minimum: IV_SIZE,
                actual: decoded.len(),
            });
        }
        let (iv, body) = decoded.split_at(IV_SIZE);
        let mut out = body.to_vec();
        self.cipher.decrypt(iv, &mut out)?;
        Ok(out)
    }
}

impl core::fmt::Debug for AesTransformer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AesTransformer")
            .field("size", &self.size)
            .field("key", &"[REDACTED]")
            .finish()
    }
}
