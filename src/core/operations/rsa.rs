//! RSA with OAEP padding over SHA-512.
//!
//! This module provides:
//! - Key-pair generation at 2048 or 3072 bits, encoded as labeled key blocks
//! - [`RsaEncryptor`], built from a public key block, which can only encrypt
//! - [`RsaTransformer`], built from a private key block, which encrypts
//!   against its own public half and decrypts
//!
//! Wire format: `base64(rsaes_oaep(plaintext))` with SHA-512 for both the
//! label hash and MGF1, and an empty label.
//!
//! # Security Warning
//!
//! The `rsa` crate is affected by [RUSTSEC-2023-0071] (Marvin Attack), a
//! timing side channel in decryption. Decryption here is blinded, but callers
//! exposing decryption as a remote oracle should account for it.
//!
//! [RUSTSEC-2023-0071]: https://rustsec.org/advisories/RUSTSEC-2023-0071

use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPrivateKey, RsaPublicKey};
use sha2::Sha512;
use tracing::{debug, warn};

use crate::core::block::{make_block, parse_block, KeyBlockType};
use crate::core::encoding::{decode, encode};
use crate::core::error::{TransformError, TransformResult};
use crate::core::key_size::{KeySize, RsaKeySize};
use crate::core::transform::{Decryptor, Encryptor};
use crate::core::types::RsaKeyPair;

/// SHA-512 digest size in bytes.
const HASH_SIZE: usize = 64;

/// Bytes OAEP adds on top of the message: two hashes plus two marker bytes.
pub const OAEP_OVERHEAD: usize = 2 * HASH_SIZE + 2;

/// Generates a new RSA key pair with a `bits`-bit modulus.
///
/// # Returns
///
/// A tuple of (public key block, private key block).
///
/// # Errors
///
/// - `TransformError::InvalidKeyLength` if `bits` is not 2048 or 3072
/// - `TransformError::CryptoError` if generation or encoding fails
///
/// # Panics
///
/// Panics if the operating system's random source fails; see
/// [`generate_rsa_key_pair`].
pub fn generate_rsa_keys(bits: usize) -> TransformResult<(String, String)> {
    let size = RsaKeySize::from_bits(bits)?;
    Ok(generate_rsa_key_pair(size)?.into_parts())
}

/// Generates a new RSA key pair of the given size.
///
/// # Errors
///
/// Returns `TransformError::CryptoError` if generation or encoding fails.
///
/// # Panics
///
/// Panics if the operating system's random source fails. The `rsa` crate
/// draws its randomness infallibly, so this is never reported as
/// `TransformError::EntropyUnavailable`.
pub fn generate_rsa_key_pair(size: RsaKeySize) -> TransformResult<RsaKeyPair> {
    let private_key =
        RsaPrivateKey::new(&mut OsRng, size.bits()).map_err(|_| TransformError::CryptoError)?;

    let public = encode_public_key(&private_key.to_public_key())?;
    let private_der = private_key
        .to_pkcs1_der()
        .map_err(|_| TransformError::CryptoError)?;
    let private = make_block(KeyBlockType::RsaPrivateKey, private_der.as_bytes())?;

    debug!(size = %size, "generated RSA key pair");
    Ok(RsaKeyPair::new(public, private, size))
}

fn encode_public_key(public_key: &RsaPublicKey) -> TransformResult<String> {
    let der = public_key
        .to_public_key_der()
        .map_err(|_| TransformError::CryptoError)?;
    make_block(KeyBlockType::RsaPublicKey, der.as_bytes())
}

fn oaep_encrypt(public_key: &RsaPublicKey, plaintext: &[u8]) -> TransformResult<String> {
    let maximum = max_plaintext_len(public_key);
    if plaintext.len() > maximum {
        return Err(TransformError::PlaintextTooLarge {
            maximum,
            actual: plaintext.len(),
        });
    }

    let encrypted = public_key
        .encrypt(&mut OsRng, Oaep::new::<Sha512>(), plaintext)
        .map_err(|e| match e {
            rsa::Error::MessageTooLong => TransformError::PlaintextTooLarge {
                maximum,
                actual: plaintext.len(),
            },
            _ => TransformError::CryptoError,
        })?;
    Ok(encode(&encrypted))
}

fn max_plaintext_len(public_key: &RsaPublicKey) -> usize {
    public_key.size().saturating_sub(OAEP_OVERHEAD)
}

// =============================================================================
// Public-key holder
// =============================================================================

/// Encrypts to an RSA public key. Cannot decrypt.
///
/// # Example
///
/// ```rust
/// use simple_encrypt::{generate_rsa_keys, Encryptor, RsaEncryptor};
///
/// let (public_key, _private_key) = generate_rsa_keys(2048).expect("valid size");
/// let encryptor = RsaEncryptor::new(&public_key).expect("valid key");
/// let encrypted = encryptor.encrypt(b"hello").expect("fits the key");
/// assert!(!encrypted.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct RsaEncryptor {
    public_key: RsaPublicKey,
}

impl RsaEncryptor {
    /// Builds an encryptor from an `RSA PUBLIC KEY` block.
    ///
    /// # Errors
    ///
    /// - `TransformError::MalformedKeyBlock` if the text is not exactly one
    ///   key block
    /// - `TransformError::WrongBlockType` if the label is not `RSA PUBLIC KEY`
    /// - `TransformError::InvalidKey` if the payload is not an RSA
    ///   `SubjectPublicKeyInfo`
    pub fn new(public_key: &str) -> TransformResult<Self> {
        let der = parse_block(public_key, KeyBlockType::RsaPublicKey)?;
        let public_key =
            RsaPublicKey::from_public_key_der(&der).map_err(|_| TransformError::InvalidKey)?;
        debug!(modulus_bits = public_key.n().bits(), "built RSA encryptor");
        Ok(Self { public_key })
    }

    /// Returns the largest plaintext this key can encrypt, in bytes.
    #[must_use]
    pub fn max_plaintext_len(&self) -> usize {
        max_plaintext_len(&self.public_key)
    }
}

impl Encryptor for RsaEncryptor {
    fn encrypt(&self, plaintext: &[u8]) -> TransformResult<String> {
        oaep_encrypt(&self.public_key, plaintext)
    }
}

// =============================================================================
// Private-key holder
// =============================================================================

/// Encrypts and decrypts with an RSA private key.
///
/// # Example
///
/// ```rust
/// use simple_encrypt::{generate_rsa_keys, Decryptor, Encryptor, RsaTransformer};
///
/// let (_public_key, private_key) = generate_rsa_keys(2048).expect("valid size");
/// let transformer = RsaTransformer::new(&private_key).expect("valid key");
///
/// let encrypted = transformer.encrypt(b"hello").expect("fits the key");
/// assert_eq!(transformer.decrypt(&encrypted).expect("decrypt"), b"hello");
/// ```
#[derive(Clone)]
pub struct RsaTransformer {
    private_key: RsaPrivateKey,
    public_key: RsaPublicKey,
}

impl RsaTransformer {
    /// Builds a transformer from an `RSA PRIVATE KEY` block.
    ///
    /// # Errors
    ///
    /// - `TransformError::MalformedKeyBlock` if the text is not exactly one
    ///   key block
    /// - `TransformError::WrongBlockType` if the label is not `RSA PRIVATE KEY`
    /// - `TransformError::InvalidKey` if the payload is not a PKCS#1 RSA
    ///   private key
    pub fn new(private_key: &str) -> TransformResult<Self> {
        let der = parse_block(private_key, KeyBlockType::RsaPrivateKey)?;
        let private_key =
            RsaPrivateKey::from_pkcs1_der(&der).map_err(|_| TransformError::InvalidKey)?;
        let public_key = private_key.to_public_key();
        debug!(modulus_bits = public_key.n().bits(), "built RSA transformer");
        Ok(Self {
            private_key,
            public_key,
        })
    }

    /// Returns the public half as an `RSA PUBLIC KEY` block.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::CryptoError` if encoding fails.
    pub fn public_key(&self) -> TransformResult<String> {
        encode_public_key(&self.public_key)
    }

    /// Returns the largest plaintext this key can encrypt, in bytes.
    #[must_use]
    pub fn max_plaintext_len(&self) -> usize {
        max_plaintext_len(&self.public_key)
    }
}

impl Encryptor for RsaTransformer {
    fn encrypt(&self, plaintext: &[u8]) -> TransformResult<String> {
        oaep_encrypt(&self.public_key, plaintext)
    }
}

impl Decryptor for RsaTransformer {
    fn decrypt(&self, ciphertext: &str) -> TransformResult<Vec<u8>> {
        let decoded = decode(ciphertext)?;
        self.private_key
            .decrypt_blinded(&mut OsRng, Oaep::new::<Sha512>(), &decoded)
            .map_err(|_| {
                warn!(ciphertext_len = decoded.len(), "RSA decryption failed");
                TransformError::DecryptionFailed
            })
    }
}

impl core::fmt::Debug for RsaTransformer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RsaTransformer")
            .field("public_key", &self.public_key)
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}
