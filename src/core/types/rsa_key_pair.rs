//! `RsaKeyPair` - A freshly generated pair of RSA key blocks.

use core::fmt::{self, Debug};

use zeroize::Zeroizing;

use crate::core::key_size::RsaKeySize;

/// Public and private RSA key blocks produced by one generation call.
///
/// The public block is `RSA PUBLIC KEY` (DER `SubjectPublicKeyInfo`) and the
/// private block is `RSA PRIVATE KEY` (DER PKCS#1). The private block is
/// zeroized on drop and redacted from debug output.
#[derive(Clone)]
pub struct RsaKeyPair {
    public: String,
    private: Zeroizing<String>,
    size: RsaKeySize,
}

impl RsaKeyPair {
    pub(crate) fn new(public: String, private: String, size: RsaKeySize) -> Self {
        Self {
            public,
            private: Zeroizing::new(private),
            size,
        }
    }

    /// Returns the public key block, safe to distribute.
    #[must_use]
    pub fn public_key(&self) -> &str {
        &self.public
    }

    /// Returns the private key block.
    #[must_use]
    pub fn private_key(&self) -> &str {
        &self.private
    }

    /// Returns the modulus size the pair was generated at.
    #[must_use]
    pub const fn size(&self) -> RsaKeySize {
        self.size
    }

    /// Consumes the pair and returns `(public, private)`.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        let Self {
            public,
            mut private,
            ..
        } = self;
        let private = core::mem::take(&mut *private);
        (public, private)
    }
}

impl Debug for RsaKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RsaKeyPair")
            .field("size", &self.size)
            .field("public", &self.public)
            .field("private", &"[REDACTED]")
            .finish()
    }
}
