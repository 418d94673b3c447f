//! Labeled key blocks for asymmetric keys.
//!
//! RSA keys travel as PEM-style text:
//!
//! ```text
//! -----BEGIN RSA PUBLIC KEY-----
//! <base64 of the DER payload, wrapped at 64 columns>
//! -----END RSA PUBLIC KEY-----
//! ```
//!
//! The label is verified on every load and the body may be wrapped at any
//! width. Parsing is strict about what follows the block: blanks and at most
//! one line ending may trail the post-encapsulation boundary, and anything
//! else is rejected rather than ignored.

use core::fmt::{self, Display};

use pem_rfc7468::LineEnding;
use tracing::warn;
use zeroize::Zeroizing;

use crate::core::encoding::decode;
use crate::core::error::{TransformError, TransformResult};

/// Start of the pre-encapsulation boundary.
const PRE_ENCAPSULATION_BOUNDARY: &str = "-----BEGIN ";

/// Start of the post-encapsulation boundary.
const POST_ENCAPSULATION_BOUNDARY: &str = "-----END ";

/// Dashes closing an encapsulation boundary.
const BOUNDARY_DASHES: &str = "-----";

/// Blanks tolerated between a boundary and its line ending.
const BOUNDARY_PADDING: [char; 2] = [' ', '\t'];

/// The kinds of key block this crate reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyBlockType {
    /// `RSA PUBLIC KEY`, wrapping a DER `SubjectPublicKeyInfo`.
    RsaPublicKey,
    /// `RSA PRIVATE KEY`, wrapping a DER PKCS#1 `RSAPrivateKey`.
    RsaPrivateKey,
}

impl KeyBlockType {
    /// Returns the type label written between the boundaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RsaPublicKey => "RSA PUBLIC KEY",
            Self::RsaPrivateKey => "RSA PRIVATE KEY",
        }
    }
}

impl Display for KeyBlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Splits `text` after the first post-encapsulation boundary.
///
/// # Returns
///
/// A tuple of (block, rest) where `block` ends with the boundary, any blanks
/// after it and at most one line ending, and `rest` is everything after it.
///
/// # Errors
///
/// Returns `TransformError::MalformedKeyBlock` if no complete
/// post-encapsulation boundary is present.
pub fn split_block(text: &str) -> TransformResult<(&str, &str)> {
    let boundary_start = text
        .find(POST_ENCAPSULATION_BOUNDARY)
        .ok_or(TransformError::MalformedKeyBlock("missing end boundary"))?;
    let label_start = boundary_start + POST_ENCAPSULATION_BOUNDARY.len();

    let label_len = text[label_start..]
        .find(BOUNDARY_DASHES)
        .ok_or(TransformError::MalformedKeyBlock("unterminated end boundary"))?;
    let end = label_start + label_len + BOUNDARY_DASHES.len();

    Ok(text.split_at(end + boundary_tail_len(&text[end..])))
}

/// Length of the blanks and single line ending that may close a boundary line.
fn boundary_tail_len(tail: &str) -> usize {
    let trimmed = tail.trim_start_matches(BOUNDARY_PADDING);
    let padding = tail.len() - trimmed.len();
    let line_ending = if trimmed.starts_with("\r\n") {
        2
    } else if trimmed.starts_with(['\n', '\r']) {
        1
    } else {
        0
    };
    padding + line_ending
}

/// Splits one block into its label and its base64 body.
fn split_boundaries(block: &str) -> TransformResult<(&str, &str)> {
    let begin = block
        .find(PRE_ENCAPSULATION_BOUNDARY)
        .ok_or(TransformError::MalformedKeyBlock("missing begin boundary"))?;
    let label_start = begin + PRE_ENCAPSULATION_BOUNDARY.len();
    let label_len = block[label_start..]
        .find(BOUNDARY_DASHES)
        .ok_or(TransformError::MalformedKeyBlock("unterminated begin boundary"))?;
    let label = &block[label_start..label_start + label_len];
    if label.contains(['\n', '\r']) {
        return Err(TransformError::MalformedKeyBlock("unterminated begin boundary"));
    }

    let after_label = label_start + label_len + BOUNDARY_DASHES.len();
    let body_start = after_label + boundary_tail_len(&block[after_label..]);
    if !block[..body_start].ends_with(['\n', '\r']) {
        return Err(TransformError::MalformedKeyBlock(
            "begin boundary not followed by a line ending",
        ));
    }

    let end_start = block[body_start..]
        .find(POST_ENCAPSULATION_BOUNDARY)
        .map(|offset| body_start + offset)
        .ok_or(TransformError::MalformedKeyBlock("missing end boundary"))?;
    let body = &block[body_start..end_start];
    if !body.is_empty() && !body.ends_with(['\n', '\r']) {
        return Err(TransformError::MalformedKeyBlock(
            "end boundary does not start a line",
        ));
    }

    let end_label = &block[end_start + POST_ENCAPSULATION_BOUNDARY.len()..];
    let end_label = end_label
        .find(BOUNDARY_DASHES)
        .map(|len| &end_label[..len])
        .ok_or(TransformError::MalformedKeyBlock("unterminated end boundary"))?;
    if end_label != label {
        return Err(TransformError::MalformedKeyBlock("mismatched boundary labels"));
    }

    Ok((label, body))
}

/// Decodes a base64 body wrapped at any width.
fn decode_body(body: &str) -> TransformResult<Zeroizing<Vec<u8>>> {
    let compact: Zeroizing<String> = Zeroizing::new(
        body.chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect(),
    );
    decode(&compact)
        .map(Zeroizing::new)
        .map_err(|_| TransformError::MalformedKeyBlock("invalid encapsulated text"))
}

/// Parses a key block and checks its label.
///
/// Body lines may be wrapped at any width. Text before the pre-encapsulation
/// boundary is skipped; after the post-encapsulation boundary only blanks and
/// one line ending are allowed.
///
/// # Arguments
///
/// * `text` - The complete key block text
/// * `expected` - The block type the caller requires
///
/// # Returns
///
/// The decoded DER payload.
///
/// # Errors
///
/// - `TransformError::MalformedKeyBlock` if the text is not a single
///   well-formed block, including when extraneous data follows it
/// - `TransformError::WrongBlockType` if the label differs from `expected`
pub fn parse_block(text: &str, expected: KeyBlockType) -> TransformResult<Zeroizing<Vec<u8>>> {
    let (block, rest) = split_block(text)?;
    if !rest.is_empty() {
        warn!(expected = %expected, extra_bytes = rest.len(), "rejected key block with trailing data");
        return Err(TransformError::MalformedKeyBlock("extraneous data after key block"));
    }

    let (label, body) = split_boundaries(block)?;
    let der = decode_body(body)?;

    if label != expected.label() {
        warn!(expected = %expected, found = label, "rejected key block with wrong label");
        return Err(TransformError::WrongBlockType {
            expected: expected.label(),
            found: label.to_string(),
        });
    }

    Ok(der)
}

/// Wraps a DER payload in a labeled key block.
///
/// Lines are wrapped at 64 columns and end with `\n`, including the final
/// boundary line.
///
/// # Errors
///
/// Returns `TransformError::CryptoError` if the payload cannot be encoded.
pub fn make_block(block_type: KeyBlockType, der: &[u8]) -> TransformResult<String> {
    pem_rfc7468::encode_string(block_type.label(), LineEnding::LF, der)
        .map_err(|_| TransformError::CryptoError)
}
