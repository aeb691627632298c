//! Transport seam between the session and the network layer.
//!
//! The session never touches sockets. It hands a fully encoded method
//! payload to the transport and gets the peer's response payload back;
//! packet framing, call-id correlation, timeouts and retries all live
//! behind this trait.

use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

/// Errors surfaced by a transport implementation.
///
/// The session propagates these unchanged; whether an error was worth
/// retrying is the transport's decision, made before it returns.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The connection could not be established or was lost.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request could not be delivered or the response never arrived.
    #[error("request failed: {0}")]
    Request(String),
}

/// A request/response channel to a Rendezvous server.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform one remote method call and return the response payload.
    ///
    /// `protocol_id` and `method_id` select the remote method; `body` is
    /// the method's encoded parameter payload.
    async fn call(
        &self,
        protocol_id: u8,
        method_id: u32,
        body: Bytes,
    ) -> Result<Bytes, TransportError>;
}

/// Blanket implementation so a shared `Arc<T>` is itself a `Transport`.
#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn call(
        &self,
        protocol_id: u8,
        method_id: u32,
        body: Bytes,
    ) -> Result<Bytes, TransportError> {
        (**self).call(protocol_id, method_id, body).await
    }
}
