//! Error types for wire-format encoding and decoding.
//!
//! Decoding failures are always structural: the peer sent fewer bytes than
//! a field requires, or a field's content contradicts its own framing.
//! There is no recovery at this layer; callers surface these unchanged.

use thiserror::Error;

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors raised while decoding a payload.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The stream ended before a field was complete.
    #[error("unexpected end of stream: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        /// Bytes the current field still required.
        needed: usize,
        /// Bytes actually left in the stream.
        remaining: usize,
    },

    /// A length-prefixed string was malformed.
    #[error("malformed string field: {reason}")]
    InvalidString {
        /// What was wrong with the string.
        reason: &'static str,
    },

    /// A structure header's declared length did not match its content.
    #[error("structure length mismatch: header declared {declared} bytes, decoder consumed {consumed}")]
    StructureLength {
        /// Length the version header declared.
        declared: usize,
        /// Bytes the decoder actually consumed.
        consumed: usize,
    },

    /// A station URL string did not follow the `scheme:/key=value;...` form.
    #[error("invalid station url: {reason}")]
    InvalidStationUrl {
        /// What was wrong with the URL.
        reason: &'static str,
    },
}
