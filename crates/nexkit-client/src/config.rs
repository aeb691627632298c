//! Session configuration.

use nexkit_crypto::KeyDerivation;
use nexkit_proto::StreamSettings;

/// Knobs consumed by [`crate::AuthClient`] at construction time.
///
/// These mirror a server's fixed deployment configuration; nothing here is
/// negotiated at runtime.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Key derivation schedule, chosen once per session.
    pub key_derivation: KeyDerivation,
    /// Byte length of the ticket session key.
    pub key_size: usize,
    /// Wire-format settings for this server generation.
    pub stream: StreamSettings,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            key_derivation: KeyDerivation::legacy(),
            key_size: 32,
            stream: StreamSettings::default(),
        }
    }
}
