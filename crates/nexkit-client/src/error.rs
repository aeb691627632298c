//! Error taxonomy for the authentication session.
//!
//! Three failure classes are distinguished deliberately: the server saying
//! no (a result word), the key confirmation failing (wrong password), and
//! the caller invoking an operation out of order. Transport and codec
//! failures pass through unchanged. Nothing here is retried.

use nexkit_crypto::KerberosError;
use nexkit_proto::ProtocolError;
use thiserror::Error;

use crate::transport::TransportError;

/// Errors returned by session operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The server answered with a failure result word.
    #[error("{operation} refused by server: {name} ({code:#010x})")]
    Failure {
        /// Operation the server refused.
        operation: &'static str,
        /// Raw result word, severity bit included.
        code: u32,
        /// Registered name for the code, or "unknown error".
        name: &'static str,
    },

    /// The key-confirmation tag did not verify: the locally derived
    /// session key disagrees with the server's, i.e. the password is
    /// wrong.
    #[error("kerberos key validation failed (incorrect password)")]
    IncorrectPassword,

    /// An operation that requires a completed login was called too early.
    /// This is a caller defect, not a recoverable protocol condition.
    #[error("{operation} requires a completed login")]
    NotAuthenticated {
        /// Operation that was attempted.
        operation: &'static str,
    },

    /// The secure station locator stored at login carries no usable
    /// numeric `PID` field, so a ticket request cannot be addressed.
    #[error("secure station url has no usable PID field")]
    MissingStationPid,

    /// Transport failure, propagated unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A response payload could not be decoded.
    #[error(transparent)]
    Proto(#[from] ProtocolError),

    /// The cipher rejected the encrypted ticket.
    #[error(transparent)]
    Kerberos(#[from] KerberosError),
}
