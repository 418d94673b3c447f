//! Ergonomic layer for key generation and transforms.
//!
//! The prelude module gathers the capability traits, the concrete transforms
//! and the key builders behind a single glob import.
//!
//! # Usage
//!
//! ```rust
//! use simple_encrypt::prelude::*;
//! ```

mod builders;

// Re-export core types for convenience
pub use crate::core::error::{TransformError, TransformResult};
pub use crate::core::key_size::{AesKeySize, KeySize, RsaKeySize};
pub use crate::core::transform::{Decryptor, Encryptor, Transformer};

#[cfg(feature = "aes-cfb")]
pub use crate::core::facade::new_aes_transformer;
#[cfg(feature = "aes-cfb")]
pub use crate::core::operations::aes::AesTransformer;
#[cfg(feature = "aes-cfb")]
pub use crate::core::types::AesKey;

#[cfg(feature = "rsa-oaep")]
pub use crate::core::facade::{new_rsa_encryptor, new_rsa_transformer};
#[cfg(feature = "rsa-oaep")]
pub use crate::core::operations::rsa::{RsaEncryptor, RsaTransformer};
#[cfg(feature = "rsa-oaep")]
pub use crate::core::types::RsaKeyPair;

#[cfg(feature = "aes-cfb")]
pub use builders::AesKeyBuilder;
#[cfg(feature = "rsa-oaep")]
pub use builders::RsaKeyBuilder;
