//! Kerberos primitives
//!
//! Key-schedule and cipher seam for the Rendezvous authentication
//! handshake. The derivation here must reproduce the server's own schedule
//! bit for bit: both sides compute the session key independently from the
//! password and the assigned principal id, and only the key-confirmation
//! tag reveals a mismatch.
//!
//! ```text
//! password ──┐
//!            ├── KeyDerivation::derive ──> SessionKey
//! pid ───────┘                                 │
//!                                              ▼
//!                       CipherSuite::context ──> EncryptionContext
//!                                                 │        │
//!                                           verify_tag   decrypt
//! ```
//!
//! The symmetric cipher itself (historically RC4 keyed with an MD5 HMAC)
//! is deliberately not implemented here; callers plug their own through
//! [`CipherSuite`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod derivation;
mod encryption;

pub use derivation::{KeyDerivation, SessionKey};
pub use encryption::{CipherSuite, EncryptionContext, KerberosError, Ticket};
