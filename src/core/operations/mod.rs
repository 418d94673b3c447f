//! Transform implementations.
//!
//! - [`aes`] - AES-CFB with a random IV prefix (requires `aes-cfb`)
//! - [`rsa`] - RSA-OAEP with SHA-512 (requires `rsa-oaep`)

#[cfg(feature = "aes-cfb")]
pub mod aes;

#[cfg(feature = "rsa-oaep")]
pub mod rsa;
