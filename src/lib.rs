//! Uniform encryption and decryption over AES-CFB and RSA-OAEP.
//!
//! This crate puts two primitives behind one small interface: obtain a key
//! (or key pair), build a transform from it, then call `encrypt` and
//! `decrypt`. Keys and ciphertexts are plain text, so they can be stored
//! and transmitted without further encoding.
//!
//! # Quick Start
//!
//! ```rust
//! use simple_encrypt::{generate_aes_key, new_aes_transformer, Decryptor, Encryptor};
//!
//! let key = generate_aes_key(256).expect("256 is an allowed size");
//! let transformer = new_aes_transformer(&key).expect("freshly generated key");
//!
//! let encrypted = transformer.encrypt(b"hello").expect("entropy available");
//! let decrypted = transformer.decrypt(&encrypted).expect("same key");
//! assert_eq!(decrypted, b"hello");
//! ```
//!
//! # Capabilities
//!
//! | Constructor | Key text | Capability |
//! |-------------|----------|------------|
//! | [`new_aes_transformer`] | `base64(key)` | [`Transformer`] |
//! | [`new_rsa_encryptor`] | `RSA PUBLIC KEY` block | [`Encryptor`] |
//! | [`new_rsa_transformer`] | `RSA PRIVATE KEY` block | [`Transformer`] |
//!
//! A holder of only the public key can encrypt but not decrypt; a holder of
//! the private key can do both.
//!
//! # Formats
//!
//! - AES keys: standard base64 of 16, 24 or 32 random bytes
//! - AES ciphertext: `base64(iv || cfb(plaintext))`, 16-byte IV
//! - RSA keys: PEM-style blocks; public payload is DER `SubjectPublicKeyInfo`,
//!   private payload is DER PKCS#1
//! - RSA ciphertext: `base64(oaep_sha512(plaintext))`, no label
//!
//! # Security
//!
//! - AES-CFB is **not authenticated**: modified ciphertext decrypts to
//!   garbage instead of failing
//! - Every encryption draws fresh randomness from the operating system
//! - Symmetric key material is zeroized on drop and redacted from debug output
//! - No unsafe code
//!
//! # Features
//!
//! ```toml
//! [dependencies]
//! simple-encrypt = "0.1"  # AES-CFB and RSA-OAEP (default)
//! simple-encrypt = { version = "0.1", default-features = false, features = ["aes-cfb"] }
//! simple-encrypt = { version = "0.1", features = ["prelude"] }  # builders
//! ```
//!
//! # Modules
//!
//! - [`core`] - Core types and operations
//! - [`prelude`] - Ergonomic imports and key builders (requires `prelude` feature)

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

// Re-export commonly used items at crate root
pub use crate::core::error::{TransformError, TransformResult};
pub use crate::core::key_size::{AesKeySize, KeySize, RsaKeySize};
pub use crate::core::transform::{Decryptor, Encryptor, Transformer};

#[cfg(feature = "aes-cfb")]
pub use crate::core::facade::new_aes_transformer;
#[cfg(feature = "aes-cfb")]
pub use crate::core::operations::aes::{generate_aes_key, AesTransformer};
#[cfg(feature = "aes-cfb")]
pub use crate::core::types::AesKey;

#[cfg(feature = "rsa-oaep")]
pub use crate::core::facade::{new_rsa_encryptor, new_rsa_transformer};
#[cfg(feature = "rsa-oaep")]
pub use crate::core::operations::rsa::{
    generate_rsa_key_pair, generate_rsa_keys, RsaEncryptor, RsaTransformer,
};
#[cfg(feature = "rsa-oaep")]
pub use crate::core::types::RsaKeyPair;
