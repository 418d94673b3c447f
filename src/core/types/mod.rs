//! Key material types.
//!
//! - [`AesKey`] - Validated symmetric key (`base64(key)`)
//! - [`RsaKeyPair`] - Public and private RSA key blocks from one generation

#[cfg(feature = "aes-cfb")]
mod aes_key;
#[cfg(feature = "rsa-oaep")]
mod rsa_key_pair;

#[cfg(feature = "aes-cfb")]
pub use aes_key::AesKey;
#[cfg(feature = "rsa-oaep")]
pub use rsa_key_pair::RsaKeyPair;
