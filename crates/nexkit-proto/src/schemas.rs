//! Handshake message schemas.
//!
//! Field order in every schema is fixed by the server and must not change;
//! these payloads have no self-describing framing, so a reordered field is
//! silently misparsed on the other side.
//!
//! The outbound login payloads implement [`Data`] so they can travel in
//! the any-data envelope of `login_ex`; [`RVConnectionData`] is the inbound
//! [`Structure`] a successful login returns.

use crate::{
    datetime::DateTime,
    errors::Result,
    station::StationUrl,
    stream::{Data, StreamIn, StreamOut, Structure},
};

/// Token-based login payload used by most servers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticationInfo {
    /// Service token presented to the server.
    pub token: String,
    /// Server build the client expects to talk to.
    pub server_version: u32,
}

impl Data for AuthenticationInfo {
    fn name(&self) -> &'static str {
        "AuthenticationInfo"
    }

    fn save(&self, stream: &mut StreamOut) {
        stream.string(&self.token);
        // Constant markers observed on the wire; meaning unspecified.
        stream.u32(3);
        stream.u8(1);
        stream.u32(self.server_version);
    }
}

/// Bare-token login payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NintendoLoginData {
    /// Service token presented to the server.
    pub token: String,
}

impl Data for NintendoLoginData {
    fn name(&self) -> &'static str {
        "NintendoLoginData"
    }

    fn save(&self, stream: &mut StreamOut) {
        stream.string(&self.token);
    }
}

/// Extended account login payload.
///
/// The three leading words have no published meaning; they are carried
/// verbatim in both directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountExtraInfo {
    /// First opaque word.
    pub unk1: u32,
    /// Second opaque word.
    pub unk2: u32,
    /// Third opaque word.
    pub unk3: u32,
    /// Service token presented to the server.
    pub token: String,
}

impl AccountExtraInfo {
    /// Decode the payload fields in wire order.
    pub fn load(stream: &mut StreamIn<'_>) -> Result<Self> {
        Ok(Self {
            unk1: stream.u32()?,
            unk2: stream.u32()?,
            unk3: stream.u32()?,
            token: stream.string()?,
        })
    }
}

impl Data for AccountExtraInfo {
    fn name(&self) -> &'static str {
        "AccountExtraInfo"
    }

    fn save(&self, stream: &mut StreamOut) {
        stream.u32(self.unk1);
        stream.u32(self.unk2);
        stream.u32(self.unk3);
        stream.string(&self.token);
    }
}

/// Connection bootstrap data returned by a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RVConnectionData {
    /// Locator for the secure station the client contacts next.
    pub main_station: StationUrl,
    /// Ids of the special protocols enabled for this session.
    pub special_protocols: Vec<u8>,
    /// Locator used by the special protocols, empty when unused.
    pub special_station: StationUrl,
    /// Server clock at login; absent before structure version 1.
    pub server_time: Option<DateTime>,
}

impl Structure for RVConnectionData {
    const VERSION: u8 = 1;

    fn decode(stream: &mut StreamIn<'_>, version: u8) -> Result<Self> {
        let main_station = stream.station()?;
        let special_protocols = stream.list_u8()?;
        let special_station = stream.station()?;
        let server_time = if version >= 1 { Some(stream.datetime()?) } else { None };

        Ok(Self { main_station, special_protocols, special_station, server_time })
    }
}

/// Polymorphic login payload accepted by `login_ex`.
///
/// The protocol frames this as an open registry of named types; in
/// practice exactly three shapes are ever produced, so the set is closed
/// here. Each variant contributes its own registered name and encoding to
/// the envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginData {
    /// Token plus expected server version.
    AuthenticationInfo(AuthenticationInfo),
    /// Bare token.
    NintendoLoginData(NintendoLoginData),
    /// Extended account form.
    AccountExtraInfo(AccountExtraInfo),
}

impl Data for LoginData {
    fn name(&self) -> &'static str {
        match self {
            Self::AuthenticationInfo(data) => data.name(),
            Self::NintendoLoginData(data) => data.name(),
            Self::AccountExtraInfo(data) => data.name(),
        }
    }

    fn save(&self, stream: &mut StreamOut) {
        match self {
            Self::AuthenticationInfo(data) => data.save(stream),
            Self::NintendoLoginData(data) => data.save(stream),
            Self::AccountExtraInfo(data) => data.save(stream),
        }
    }
}
