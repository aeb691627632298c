//! Authentication client
//!
//! Client side of the Rendezvous authentication handshake: log in, derive
//! the Kerberos session key, confirm it against the server's tag, and
//! request the service ticket that unlocks the secure station.
//!
//! # Architecture
//!
//! [`AuthClient`] is a thin state machine over two seams it does not
//! implement itself: a [`Transport`] that performs one request/response
//! round trip per call, and a [`CipherSuite`] supplying the symmetric
//! cipher. Session state (principal id, secure station locator,
//! encryption context) is absent until a login completes and is committed
//! all-or-nothing.
//!
//! # Components
//!
//! - [`AuthClient`]: the login / ticket-request state machine
//! - [`Transport`]: request/response seam to the network layer
//! - [`AuthConfig`]: key-derivation and wire-format knobs
//! - [`AuthError`]: failure taxonomy for every operation

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod client;
mod config;
mod error;
mod transport;

pub use client::{
    AuthClient, METHOD_GET_NAME, METHOD_GET_PID, METHOD_LOGIN, METHOD_LOGIN_EX,
    METHOD_LOGIN_WITH_CONTEXT, METHOD_REQUEST_TICKET, PROTOCOL_ID,
};
pub use config::AuthConfig;
pub use error::AuthError;
pub use nexkit_crypto::{CipherSuite, EncryptionContext, KeyDerivation, SessionKey, Ticket};
pub use nexkit_proto::{LoginData, StationUrl, StreamSettings};
pub use transport::{Transport, TransportError};
