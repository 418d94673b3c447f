//! Core types and operations.
//!
//! This module provides the building blocks of the crate:
//!
//! - [`error`] - Error type for every operation
//! - [`encoding`] - Base64 encoding of keys and ciphertexts
//! - [`key_size`] - Closed sets of allowed key sizes
//! - [`transform`] - The `Encryptor` / `Decryptor` / `Transformer` capabilities
//! - [`block`] - Labeled key blocks for RSA keys (requires `rsa-oaep`)
//! - [`types`] - Key material types
//! - [`operations`] - AES-CFB and RSA-OAEP transforms
//! - [`facade`] - Constructors returning capability trait objects

pub mod encoding;
pub mod error;
pub mod facade;
pub mod key_size;
pub mod operations;
pub mod transform;
pub mod types;

#[cfg(feature = "rsa-oaep")]
pub mod block;

// Re-export commonly used items
pub use error::{TransformError, TransformResult};
pub use key_size::{AesKeySize, KeySize, RsaKeySize};
pub use transform::{Decryptor, Encryptor, Transformer};
