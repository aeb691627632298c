//! Wire format
//!
//! Encoding and decoding primitives for the Rendezvous ("NEX")
//! authentication protocol, plus the message schemas exchanged during
//! login and ticket issuance.
//!
//! Everything on this wire is little-endian. Strings carry a `u16` length
//! prefix and a NUL terminator, buffers a `u32` length prefix, and
//! structures an optional version header depending on the server
//! generation (see [`StreamSettings`]).
//!
//! # Components
//!
//! - [`StreamOut`] / [`StreamIn`]: request writer and response reader
//! - [`schemas`]: the fixed-order handshake payloads
//! - [`StationUrl`]: reachability descriptor for a backend station
//! - [`DateTime`]: the protocol's packed calendar timestamp
//! - [`results`]: result-word classification and registered error names

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod datetime;
mod errors;
pub mod results;
pub mod schemas;
mod station;
mod stream;

pub use datetime::DateTime;
pub use errors::{ProtocolError, Result};
pub use schemas::{
    AccountExtraInfo, AuthenticationInfo, LoginData, NintendoLoginData, RVConnectionData,
};
pub use station::StationUrl;
pub use stream::{Data, PidSize, StreamIn, StreamOut, StreamSettings, Structure};
