//! Text-safe encoding of keys and ciphertexts.
//!
//! All binary material crossing the crate boundary is standard base64
//! (RFC 4648 alphabet, with padding). Decoding is strict: non-canonical
//! padding or trailing bits are rejected.

use base64::prelude::*;

use crate::core::error::TransformResult;

/// Encodes raw bytes as standard, padded base64.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}

/// Decodes standard, padded base64 back to raw bytes.
///
/// # Errors
///
/// Returns `TransformError::MalformedEncoding` if `text` is not something
/// [`encode`] could have produced.
pub fn decode(text: &str) -> TransformResult<Vec<u8>> {
    Ok(BASE64_STANDARD.decode(text)?)
}
