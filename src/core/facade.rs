//! Capability-returning constructors.
//!
//! These hide the concrete transform types behind the capability traits, so a
//! caller can hold "something that encrypts" without naming the primitive.

#[cfg(any(feature = "aes-cfb", feature = "rsa-oaep"))]
use crate::core::error::TransformResult;
#[cfg(any(feature = "aes-cfb", feature = "rsa-oaep"))]
use crate::core::transform::Transformer;

#[cfg(feature = "rsa-oaep")]
use crate::core::transform::Encryptor;

#[cfg(feature = "aes-cfb")]
use crate::core::operations::aes::AesTransformer;

#[cfg(feature = "rsa-oaep")]
use crate::core::operations::rsa::{RsaEncryptor, RsaTransformer};

/// Creates an AES [`Transformer`] from a base64-encoded key.
///
/// # Errors
///
/// See [`AesTransformer::new`].
#[cfg(feature = "aes-cfb")]
pub fn new_aes_transformer(key: &str) -> TransformResult<Box<dyn Transformer>> {
    Ok(Box::new(AesTransformer::new(key)?))
}

/// Creates an RSA [`Encryptor`] from an `RSA PUBLIC KEY` block.
///
/// # Errors
///
/// See [`RsaEncryptor::new`].
#[cfg(feature = "rsa-oaep")]
pub fn new_rsa_encryptor(public_key: &str) -> TransformResult<Box<dyn Encryptor>> {
    Ok(Box::new(RsaEncryptor::new(public_key)?))
}

/// Creates an RSA [`Transformer`] from an `RSA PRIVATE KEY` block.
///
/// # Errors
///
/// See [`RsaTransformer::new`].
#[cfg(feature = "rsa-oaep")]
pub fn new_rsa_transformer(private_key: &str) -> TransformResult<Box<dyn Transformer>> {
    Ok(Box::new(RsaTransformer::new(private_key)?))
}
