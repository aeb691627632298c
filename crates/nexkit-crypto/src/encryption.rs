//! Cipher seam and ticket values.
//!
//! The handshake needs exactly two capabilities from the symmetric cipher:
//! decrypt a server-sent blob and check a keyed confirmation tag. The
//! concrete algorithm is supplied by the caller through [`CipherSuite`];
//! implementing it is out of scope for this crate.

use thiserror::Error;

use crate::derivation::SessionKey;

/// Errors surfaced by a cipher implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum KerberosError {
    /// Ciphertext failed to decrypt or authenticate.
    #[error("decryption failed: {reason}")]
    DecryptionFailed {
        /// What the cipher reported.
        reason: String,
    },
}

/// A session-key-bound unit able to decrypt data and verify
/// key-confirmation tags.
///
/// One context serves one authenticated session; the bound key is never
/// rotated.
pub trait EncryptionContext {
    /// Decrypt `data`, verifying its integrity tag where the cipher
    /// carries one.
    fn decrypt(&self, data: &[u8]) -> Result<Vec<u8>, KerberosError>;

    /// Check a server-sent key-confirmation tag against the bound key.
    ///
    /// A `false` return means the locally derived key disagrees with the
    /// server's, which in practice means the password was wrong.
    fn verify_tag(&self, data: &[u8]) -> bool;
}

/// Factory binding session keys to encryption contexts.
pub trait CipherSuite {
    /// Context type produced by this suite.
    type Context: EncryptionContext;

    /// Bind `key` into a ready-to-use context.
    fn context(&self, key: &SessionKey) -> Self::Context;
}

/// Service ticket granting access to a secure station.
///
/// Produced by a successful ticket request and handed to the caller as-is;
/// this crate attaches no further lifecycle to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    /// Session key for the secure station.
    pub key: Vec<u8>,
    /// Opaque ticket body, forwarded verbatim to the secure station.
    pub body: Vec<u8>,
}
