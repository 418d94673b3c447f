//! Allowed key sizes.
//!
//! Key lengths are closed enumerations, not ranges: a size is accepted only
//! if it is one of the listed variants, and every other bit count fails with
//! `TransformError::InvalidKeyLength`.

use core::fmt::{self, Display};

use crate::core::error::{TransformError, TransformResult};

mod private {
    pub trait Sealed {}
}

/// Number of bits in one byte of key material.
pub const BITS_PER_BYTE: usize = 8;

/// AES-128 key length in bits.
pub const AES_128_BITS: usize = 128;
/// AES-192 key length in bits.
pub const AES_192_BITS: usize = 192;
/// AES-256 key length in bits.
pub const AES_256_BITS: usize = 256;
/// RSA-2048 modulus length in bits.
pub const RSA_2048_BITS: usize = 2048;
/// RSA-3072 modulus length in bits.
pub const RSA_3072_BITS: usize = 3072;

/// Trait for closed key-size enumerations.
///
/// This trait is sealed and cannot be implemented outside of this crate.
pub trait KeySize: private::Sealed + Copy + Eq + Send + Sync + 'static {
    /// Every accepted size, smallest first.
    const ALL: &'static [Self];

    /// Key length in bits.
    fn bits(self) -> usize;

    /// Key length in whole bytes.
    fn bytes(self) -> usize {
        self.bits() / BITS_PER_BYTE
    }

    /// Looks up the variant for `bits`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidKeyLength` carrying `bits` if it is not
    /// one of [`KeySize::ALL`].
    fn from_bits(bits: usize) -> TransformResult<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|size| size.bits() == bits)
            .ok_or(TransformError::InvalidKeyLength(bits))
    }
}

// =============================================================================
// AES
// =============================================================================

/// Allowed AES key sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AesKeySize {
    /// 128-bit key.
    Aes128,
    /// 192-bit key.
    Aes192,
    /// 256-bit key.
    #[default]
    Aes256,
}

impl private::Sealed for AesKeySize {}

impl KeySize for AesKeySize {
    const ALL: &'static [Self] = &[Self::Aes128, Self::Aes192, Self::Aes256];

    fn bits(self) -> usize {
        match self {
            Self::Aes128 => AES_128_BITS,
            Self::Aes192 => AES_192_BITS,
            Self::Aes256 => AES_256_BITS,
        }
    }
}

impl TryFrom<usize> for AesKeySize {
    type Error = TransformError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl Display for AesKeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

// =============================================================================
// RSA
// =============================================================================

/// Allowed RSA modulus sizes for key-pair generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RsaKeySize {
    /// 2048-bit modulus.
    #[default]
    Rsa2048,
    /// 3072-bit modulus.
    Rsa3072,
}

impl private::Sealed for RsaKeySize {}

impl KeySize for RsaKeySize {
    const ALL: &'static [Self] = &[Self::Rsa2048, Self::Rsa3072];

    fn bits(self) -> usize {
        match self {
            Self::Rsa2048 => RSA_2048_BITS,
            Self::Rsa3072 => RSA_3072_BITS,
        }
    }
}

impl TryFrom<usize> for RsaKeySize {
    type Error = TransformError;

    fn try_from(bits: usize) -> Result<Self, Self::Error> {
        Self::from_bits(bits)
    }
}

impl Display for RsaKeySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RSA-{}", self.bits())
    }
}
