//! Test vector types for the AES-CFB and RSA-OAEP vector suites.
//!
//! The vectors were produced by an independent implementation, so passing
//! them shows wire compatibility rather than self-consistency.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

// =============================================================================
// AES-CFB
// =============================================================================

/// Test vector for AES-CFB decryption.
#[derive(Debug, Deserialize)]
pub struct AesTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Base64 key text as a caller would supply it
    pub key: String,
    /// Hex-encoded IV (null for fail tests)
    pub iv: Option<String>,
    /// Hex-encoded plaintext (null for fail tests)
    pub plaintext: Option<String>,
    /// Base64 of `iv || ciphertext`
    pub ciphertext: Option<String>,
}

// =============================================================================
// RSA-OAEP
// =============================================================================

/// Test vector for RSA-OAEP decryption and key block parsing.
#[derive(Debug, Deserialize)]
pub struct RsaTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// `RSA PUBLIC KEY` block
    #[serde(rename = "public-key")]
    pub public_key: Option<String>,
    /// `RSA PRIVATE KEY` block
    #[serde(rename = "private-key")]
    pub private_key: Option<String>,
    /// Hex-encoded plaintext (null for fail tests)
    pub plaintext: Option<String>,
    /// Base64 OAEP ciphertext
    pub ciphertext: Option<String>,
}

// =============================================================================
// Helper functions
// =============================================================================

/// Decode a hex string to bytes.
/// Returns `None` if the string is not valid hex.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    hex::decode(s).ok()
}

/// Load a test vector suite from a JSON file.
pub fn load_vectors<T: serde::de::DeserializeOwned>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vector file {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vector file {path}: {e}"))
}
