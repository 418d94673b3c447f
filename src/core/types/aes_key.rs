//! `AesKey` - Symmetric key material.
//!
//! Format: `base64(key)`, standard alphabet with padding.

use core::fmt::{self, Debug, Display};

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::debug;
use zeroize::{Zeroize, Zeroizing};

use crate::core::encoding::{decode, encode};
use crate::core::error::{TransformError, TransformResult};
use crate::core::key_size::{AesKeySize, KeySize, BITS_PER_BYTE};

/// Largest AES key in bytes.
const MAX_KEY_BYTES: usize = 32;

/// A validated AES key.
///
/// # Security
///
/// - Key material is zeroized on drop
/// - Debug output redacts the key
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use simple_encrypt::core::types::AesKey;
/// use simple_encrypt::AesKeySize;
///
/// let key = AesKey::generate(AesKeySize::Aes256).expect("entropy available");
/// let encoded = key.to_string();
/// assert_eq!(encoded.len(), 44);
///
/// let parsed = AesKey::try_from(encoded.as_str()).expect("valid key");
/// assert_eq!(parsed, key);
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct AesKey {
    key: [u8; MAX_KEY_BYTES],
    #[zeroize(skip)]
    size: AesKeySize,
}

impl AesKey {
    /// Draws a fresh key of `size` from the operating system's secure source.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EntropyUnavailable` if the source fails.
    pub fn generate(size: AesKeySize) -> TransformResult<Self> {
        let mut key = [0u8; MAX_KEY_BYTES];
        OsRng.try_fill_bytes(&mut key[..size.bytes()])?;
        debug!(size = %size, "generated AES key");
        Ok(Self { key, size })
    }

    /// Creates an `AesKey` from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidKeyLength` if `bytes` is not 16, 24 or
    /// 32 bytes long.
    pub fn from_bytes(bytes: &[u8]) -> TransformResult<Self> {
        let size = AesKeySize::from_bits(bytes.len() * BITS_PER_BYTE)?;
        let mut key = [0u8; MAX_KEY_BYTES];
        key[..bytes.len()].copy_from_slice(bytes);
        Ok(Self { key, size })
    }

    /// Returns the key size.
    #[must_use]
    pub const fn size(&self) -> AesKeySize {
        self.size
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.key[..self.size.bytes()]
    }
}

impl AsRef<[u8]> for AesKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

// =============================================================================
// Display (serialization to base64)
// =============================================================================

impl Display for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode(self.as_bytes()))
    }
}

// =============================================================================
// Debug (security: don't expose key material)
// =============================================================================

impl Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AesKey")
            .field("size", &self.size)
            .field("key", &"[REDACTED]")
            .finish()
    }
}

// =============================================================================
// TryFrom (parsing from base64)
// =============================================================================

impl TryFrom<&str> for AesKey {
    type Error = TransformError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let key_bytes = Zeroizing::new(decode(encoded)?);
        Self::from_bytes(&key_bytes)
    }
}

impl TryFrom<String> for AesKey {
    type Error = TransformError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

// =============================================================================
// PartialEq (constant-time comparison)
// =============================================================================

impl PartialEq for AesKey {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        if self.size != other.size {
            return false;
        }
        self.as_bytes().ct_eq(other.as_bytes()).into()
    }
}

impl Eq for AesKey {}
