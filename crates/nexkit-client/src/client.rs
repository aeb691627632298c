//! Authentication session state machine.
//!
//! One [`AuthClient`] drives one login against one authentication server:
//!
//! ```text
//! ┌─────────────────┐   login / login_ex    ┌───────────────┐
//! │ Unauthenticated │──────────────────────>│ Authenticated │── request_ticket
//! └─────────────────┘   (tag verified)      └───────────────┘
//! ```
//!
//! The transition is one-way and happens at most once per session. The
//! authenticated bundle (principal id, secure station, encryption context)
//! is committed only after both the server's result word and the
//! key-confirmation tag check out; every failure path leaves the session
//! exactly as it was.
//!
//! `get_pid` and `get_name` are stateless lookups and work in either
//! state.

use nexkit_crypto::{CipherSuite, EncryptionContext, Ticket};
use nexkit_proto::{results, Data, LoginData, RVConnectionData, StationUrl, StreamIn, StreamOut};
use tracing::{debug, info};

use crate::{config::AuthConfig, error::AuthError, transport::Transport};

/// Protocol id of the authentication service.
pub const PROTOCOL_ID: u8 = 0xA;

/// Method id of `login`.
pub const METHOD_LOGIN: u32 = 1;
/// Method id of `login_ex`.
pub const METHOD_LOGIN_EX: u32 = 2;
/// Method id of `request_ticket`.
pub const METHOD_REQUEST_TICKET: u32 = 3;
/// Method id of `get_pid`.
pub const METHOD_GET_PID: u32 = 4;
/// Method id of `get_name`.
pub const METHOD_GET_NAME: u32 = 5;
/// Method id of `login_with_context`. Declared by the protocol but never
/// sent by this client; its payload shape is not publicly known.
pub const METHOD_LOGIN_WITH_CONTEXT: u32 = 6;

/// Authenticated-state bundle.
///
/// Present if and only if a login has completed successfully; the three
/// fields are committed together and never individually.
struct Session<C> {
    pid: u64,
    secure_station: StationUrl,
    cipher: C,
}

/// Client for the authentication service.
///
/// Generic over the [`Transport`] that moves payloads and the
/// [`CipherSuite`] that supplies the symmetric cipher; both are chosen at
/// construction and fixed for the session's lifetime.
pub struct AuthClient<T, S: CipherSuite> {
    transport: T,
    suite: S,
    config: AuthConfig,
    session: Option<Session<S::Context>>,
}

impl<T: Transport, S: CipherSuite> AuthClient<T, S> {
    /// New unauthenticated session.
    pub fn new(transport: T, suite: S, config: AuthConfig) -> Self {
        Self { transport, suite, config, session: None }
    }

    /// Whether a login has completed on this session.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// Principal id assigned at login, if authenticated.
    pub fn pid(&self) -> Option<u64> {
        self.session.as_ref().map(|s| s.pid)
    }

    /// Secure station locator received at login, if authenticated.
    pub fn secure_station(&self) -> Option<&StationUrl> {
        self.session.as_ref().map(|s| &s.secure_station)
    }

    /// Log in with a username alone.
    ///
    /// Returns the principal id the server assigned. On success the
    /// session becomes authenticated and [`AuthClient::request_ticket`]
    /// may be called.
    pub async fn login(&mut self, username: &str, password: &[u8]) -> Result<u64, AuthError> {
        info!(username, "login");

        let mut request = StreamOut::new(self.config.stream);
        request.string(username);

        let response = self.transport.call(PROTOCOL_ID, METHOD_LOGIN, request.finish()).await?;
        self.handle_login_response("login", &response, password)
    }

    /// Log in with a username plus an extra login payload.
    ///
    /// Identical to [`AuthClient::login`] except that the request also
    /// carries `auth_info` in an any-data envelope, letting the caller
    /// pick whichever payload shape the server expects.
    pub async fn login_ex(
        &mut self,
        username: &str,
        password: &[u8],
        auth_info: &LoginData,
    ) -> Result<u64, AuthError> {
        info!(username, payload = auth_info.name(), "login_ex");

        let mut request = StreamOut::new(self.config.stream);
        request.string(username);
        request.any_data(auth_info);

        let response = self.transport.call(PROTOCOL_ID, METHOD_LOGIN_EX, request.finish()).await?;
        self.handle_login_response("login_ex", &response, password)
    }

    /// Shared response path for both login flavors.
    ///
    /// Response layout: result word, principal id, confirmation-tag
    /// buffer, connection data structure, server display name.
    fn handle_login_response(
        &mut self,
        operation: &'static str,
        response: &[u8],
        password: &[u8],
    ) -> Result<u64, AuthError> {
        let mut stream = StreamIn::new(response, self.config.stream);

        let result = stream.u32()?;
        if results::is_error(result) {
            return Err(AuthError::Failure {
                operation,
                code: result,
                name: results::error_name(result),
            });
        }

        let pid = stream.pid()?;
        let confirmation = stream.buffer()?;
        let connection_data: RVConnectionData = stream.extract()?;
        let server_name = stream.string()?;

        let key = self.config.key_derivation.derive(password, pid);
        let cipher = self.suite.context(&key);
        if !cipher.verify_tag(&confirmation) {
            return Err(AuthError::IncorrectPassword);
        }

        let secure_station = connection_data.main_station;
        info!(pid, server = %server_name, station = %secure_station, "login complete");

        self.session = Some(Session { pid, secure_station, cipher });
        Ok(pid)
    }

    /// Request the service ticket for the secure station.
    ///
    /// Requires a completed login; calling this earlier is a caller
    /// defect and fails without contacting the transport.
    pub async fn request_ticket(&self) -> Result<Ticket, AuthError> {
        let Some(session) = &self.session else {
            return Err(AuthError::NotAuthenticated { operation: "request_ticket" });
        };
        let station_pid = session.secure_station.pid().ok_or(AuthError::MissingStationPid)?;

        info!(pid = session.pid, station_pid, "request_ticket");

        let mut request = StreamOut::new(self.config.stream);
        request.pid(session.pid);
        request.pid(station_pid);

        let response =
            self.transport.call(PROTOCOL_ID, METHOD_REQUEST_TICKET, request.finish()).await?;

        let mut stream = StreamIn::new(&response, self.config.stream);
        let result = stream.u32()?;
        if results::is_error(result) {
            return Err(AuthError::Failure {
                operation: "request_ticket",
                code: result,
                name: results::error_name(result),
            });
        }

        let encrypted = stream.buffer()?;
        let plaintext = session.cipher.decrypt(&encrypted)?;

        // Decrypted layout: raw key, one unused word, ticket body.
        let mut ticket = StreamIn::new(&plaintext, self.config.stream);
        let key = ticket.read(self.config.key_size)?.to_vec();
        let _ = ticket.u32()?;
        let body = ticket.buffer()?;

        debug!(body_len = body.len(), "ticket received");
        Ok(Ticket { key, body })
    }

    /// Look up the principal id registered for `name`.
    ///
    /// Stateless; works in either session state.
    pub async fn get_pid(&self, name: &str) -> Result<u64, AuthError> {
        debug!(name, "get_pid");

        let mut request = StreamOut::new(self.config.stream);
        request.string(name);

        let response = self.transport.call(PROTOCOL_ID, METHOD_GET_PID, request.finish()).await?;

        let mut stream = StreamIn::new(&response, self.config.stream);
        Ok(stream.pid()?)
    }

    /// Look up the display name registered for `pid`.
    ///
    /// Stateless; works in either session state.
    pub async fn get_name(&self, pid: u64) -> Result<String, AuthError> {
        debug!(pid, "get_name");

        let mut request = StreamOut::new(self.config.stream);
        request.pid(pid);

        let response = self.transport.call(PROTOCOL_ID, METHOD_GET_NAME, request.finish()).await?;

        let mut stream = StreamIn::new(&response, self.config.stream);
        Ok(stream.string()?)
    }
}
