//! Password-to-key schedule.
//!
//! Two generations of servers derive the Kerberos session key differently,
//! and the flag choosing between them is part of each server's fixed
//! configuration. Iteration counts, byte order and the concatenation point
//! are all load-bearing: any deviation produces a key the server will
//! reject at tag verification.

use std::fmt;

use md5::{Digest, Md5};
use zeroize::Zeroize;

/// Derived symmetric session key.
///
/// Zeroed on drop. The debug representation is redacted so the key cannot
/// leak through logging.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionKey(Vec<u8>);

impl SessionKey {
    /// Key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Key length in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the key is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Drop for SessionKey {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}

impl fmt::Debug for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SessionKey({} bytes)", self.0.len())
    }
}

/// Key derivation schedule, fixed once per session.
///
/// The variant is selected by server configuration before any traffic
/// flows; there is no negotiation and no fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDerivation {
    /// Classic schedule: the principal id only varies the MD5 round count.
    Legacy {
        /// Base number of MD5 rounds.
        base_count: u32,
        /// Modulus for the pid-dependent extra rounds.
        pid_count: u32,
    },
    /// Later schedule: the principal id is mixed into the digest input.
    Versioned {
        /// MD5 rounds over the bare password.
        base_count: u32,
        /// MD5 rounds after the pid bytes are appended.
        pid_count: u32,
    },
}

impl KeyDerivation {
    /// Classic schedule with its production parameters.
    pub fn legacy() -> Self {
        Self::Legacy { base_count: 65000, pid_count: 1024 }
    }

    /// Later schedule with its production parameters.
    pub fn versioned() -> Self {
        Self::Versioned { base_count: 1, pid_count: 1 }
    }

    /// Map the `kerberos.key_derivation` configuration flag to a schedule:
    /// zero selects the classic schedule, anything else the later one.
    pub fn from_flag(flag: u32) -> Self {
        if flag == 0 { Self::legacy() } else { Self::versioned() }
    }

    /// Derive the session key for `password` and the assigned `pid`.
    ///
    /// Pure and deterministic: same inputs, same key, no side effects.
    pub fn derive(&self, password: &[u8], pid: u64) -> SessionKey {
        match *self {
            Self::Legacy { base_count, pid_count } => {
                let extra = if pid_count == 0 { 0 } else { pid % u64::from(pid_count) };
                let rounds = u64::from(base_count) + extra;

                let mut key = password.to_vec();
                for _ in 0..rounds {
                    hash_in_place(&mut key);
                }
                SessionKey(key)
            },
            Self::Versioned { base_count, pid_count } => {
                let mut key = password.to_vec();
                for _ in 0..base_count {
                    hash_in_place(&mut key);
                }

                key.extend_from_slice(&pid.to_le_bytes());
                for _ in 0..pid_count {
                    hash_in_place(&mut key);
                }
                SessionKey(key)
            },
        }
    }
}

/// Replace `key` with its MD5 digest, zeroing the previous contents.
fn hash_in_place(key: &mut Vec<u8>) {
    let digest = Md5::digest(&*key);
    key.zeroize();
    *key = digest.to_vec();
}
