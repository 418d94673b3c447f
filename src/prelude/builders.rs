//! Builder patterns for key generation.
//!
//! This module provides fluent builders with preset key sizes, so callers
//! pick a profile by name instead of passing raw bit counts around.
//!
//! # Presets
//!
//! | Builder | Preset | Size | Use Case |
//! |---------|--------|------|----------|
//! | `AesKeyBuilder` | `aes128()` | 128 bits | Legacy interoperability |
//! | `AesKeyBuilder` | `aes192()` | 192 bits | Rarely needed |
//! | `AesKeyBuilder` | `aes256()` | 256 bits | Recommended (default) |
//! | `RsaKeyBuilder` | `standard()` | 2048 bits | General use (default) |
//! | `RsaKeyBuilder` | `long_term()` | 3072 bits | Keys that must outlive 2030 |
//!
//! # Example
//!
//! ```rust
//! use simple_encrypt::prelude::*;
//!
//! let key = AesKeyBuilder::aes256().generate().expect("entropy available");
//! let transformer = AesTransformer::new(&key).expect("valid key");
//!
//! let encrypted = transformer.encrypt(b"payload").expect("entropy available");
//! assert_eq!(transformer.decrypt(&encrypted).expect("same key"), b"payload");
//! ```

#[cfg(any(feature = "aes-cfb", feature = "rsa-oaep"))]
use crate::core::error::TransformResult;
#[cfg(any(feature = "aes-cfb", feature = "rsa-oaep"))]
use crate::core::key_size::KeySize;

#[cfg(feature = "aes-cfb")]
use crate::core::key_size::AesKeySize;
#[cfg(feature = "aes-cfb")]
use crate::core::operations::aes::AesTransformer;
#[cfg(feature = "aes-cfb")]
use crate::core::types::AesKey;

#[cfg(feature = "rsa-oaep")]
use crate::core::key_size::RsaKeySize;
#[cfg(feature = "rsa-oaep")]
use crate::core::operations::rsa::generate_rsa_key_pair;
#[cfg(feature = "rsa-oaep")]
use crate::core::types::RsaKeyPair;

// =============================================================================
// AES
// =============================================================================

/// Builder for AES keys.
///
/// # Example
///
/// ```rust
/// use simple_encrypt::prelude::*;
///
/// let key = AesKeyBuilder::aes128().generate().expect("entropy available");
/// assert_eq!(key.len(), 24);
///
/// let key = AesKeyBuilder::bits(192)
///     .expect("allowed size")
///     .generate_key()
///     .expect("entropy available");
/// assert_eq!(key.size(), AesKeySize::Aes192);
/// ```
#[cfg(feature = "aes-cfb")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AesKeyBuilder {
    size: AesKeySize,
}

#[cfg(feature = "aes-cfb")]
impl Default for AesKeyBuilder {
    fn default() -> Self {
        Self::aes256()
    }
}

#[cfg(feature = "aes-cfb")]
impl AesKeyBuilder {
    /// Creates a new builder with the default (AES-256) size.
    ///
    /// Equivalent to calling `AesKeyBuilder::aes256()`.
    #[must_use]
    pub const fn new() -> Self {
        Self::aes256()
    }

    /// 128-bit keys, encoded as 24 characters.
    #[must_use]
    pub const fn aes128() -> Self {
        Self {
            size: AesKeySize::Aes128,
        }
    }

    /// 192-bit keys, encoded as 32 characters.
    #[must_use]
    pub const fn aes192() -> Self {
        Self {
            size: AesKeySize::Aes192,
        }
    }

    /// 256-bit keys, encoded as 44 characters.
    ///
    /// This is the recommended default.
    #[must_use]
    pub const fn aes256() -> Self {
        Self {
            size: AesKeySize::Aes256,
        }
    }

    /// Selects the size from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidKeyLength` unless `bits` is 128, 192
    /// or 256.
    pub fn bits(bits: usize) -> TransformResult<Self> {
        Ok(Self {
            size: AesKeySize::from_bits(bits)?,
        })
    }

    /// Returns the configured key size.
    #[must_use]
    pub const fn size(&self) -> AesKeySize {
        self.size
    }

    /// Generates a key and returns its base64 text.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EntropyUnavailable` if the random source fails.
    pub fn generate(&self) -> TransformResult<String> {
        Ok(self.generate_key()?.to_string())
    }

    /// Generates a key and keeps it in its zeroizing wrapper.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EntropyUnavailable` if the random source fails.
    pub fn generate_key(&self) -> TransformResult<AesKey> {
        AesKey::generate(self.size)
    }

    /// Generates a key and builds a transformer from it directly.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EntropyUnavailable` if the random source fails.
    pub fn try_build(&self) -> TransformResult<(AesKey, AesTransformer)> {
        let key = self.generate_key()?;
        let transformer = AesTransformer::from_key(&key)?;
        Ok((key, transformer))
    }
}

// =============================================================================
// RSA
// =============================================================================

/// Builder for RSA key pairs.
///
/// Generation is slow, in the order of a second for 3072 bits.
///
/// # Example
///
/// ```rust
/// use simple_encrypt::prelude::*;
///
/// let pair = RsaKeyBuilder::standard().generate().expect("entropy available");
/// let encryptor = RsaEncryptor::new(pair.public_key()).expect("valid block");
/// let transformer = RsaTransformer::new(pair.private_key()).expect("valid block");
///
/// let encrypted = encryptor.encrypt(b"secret").expect("fits in one block");
/// assert_eq!(transformer.decrypt(&encrypted).expect("matching key"), b"secret");
/// ```
#[cfg(feature = "rsa-oaep")]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsaKeyBuilder {
    size: RsaKeySize,
}

#[cfg(feature = "rsa-oaep")]
impl Default for RsaKeyBuilder {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(feature = "rsa-oaep")]
impl RsaKeyBuilder {
    /// Creates a new builder with the default (2048-bit) size.
    ///
    /// Equivalent to calling `RsaKeyBuilder::standard()`.
    #[must_use]
    pub const fn new() -> Self {
        Self::standard()
    }

    /// Standard profile: 2048-bit modulus.
    ///
    /// Plaintexts of up to 126 bytes fit in one block.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            size: RsaKeySize::Rsa2048,
        }
    }

    /// Long-term profile: 3072-bit modulus.
    ///
    /// Plaintexts of up to 254 bytes fit in one block.
    #[must_use]
    pub const fn long_term() -> Self {
        Self {
            size: RsaKeySize::Rsa3072,
        }
    }

    /// Selects the size from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidKeyLength` unless `bits` is 2048 or 3072.
    pub fn bits(bits: usize) -> TransformResult<Self> {
        Ok(Self {
            size: RsaKeySize::from_bits(bits)?,
        })
    }

    /// Returns the configured modulus size.
    #[must_use]
    pub const fn size(&self) -> RsaKeySize {
        self.size
    }

    /// Generates a key pair.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::CryptoError` if generation or encoding fails.
    ///
    /// # Panics
    ///
    /// Panics if the operating system's random source fails, since the `rsa`
    /// crate reads it without reporting errors.
    pub fn generate(&self) -> TransformResult<RsaKeyPair> {
        generate_rsa_key_pair(self.size)
    }
}
