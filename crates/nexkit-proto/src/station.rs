//! Station URLs: reachability descriptors for backend stations.
//!
//! On the wire a station URL is a string of the form
//! `prudps:/address=10.0.0.1;port=60000;PID=2;sid=1`. The scheme names the
//! transport flavor; everything after `:/` is a `;`-separated parameter
//! map. Parameter order is not significant.

use std::{collections::BTreeMap, fmt, str::FromStr};

use crate::errors::ProtocolError;

/// Parsed station URL: scheme plus parameter map.
///
/// Servers hand these out in login responses to tell the client where the
/// secure station lives. The client treats the parameters as opaque except
/// for the handful it reads back (`PID`, `address`, `port`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationUrl {
    scheme: String,
    params: BTreeMap<String, String>,
}

impl StationUrl {
    /// Transport scheme, e.g. `prudp` or `prudps`.
    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    /// Look up a parameter by exact key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }

    /// Look up a parameter and parse it as an unsigned integer.
    pub fn get_int(&self, key: &str) -> Option<u64> {
        self.get(key)?.parse().ok()
    }

    /// The `PID` parameter: principal id of the station's owner.
    pub fn pid(&self) -> Option<u64> {
        self.get_int("PID")
    }

    /// The `address` parameter.
    pub fn address(&self) -> Option<&str> {
        self.get("address")
    }

    /// The `port` parameter.
    pub fn port(&self) -> Option<u16> {
        self.get("port")?.parse().ok()
    }
}

impl FromStr for StationUrl {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Servers send empty station strings when a slot is unused.
        if s.is_empty() {
            return Ok(Self { scheme: "prudp".to_owned(), params: BTreeMap::new() });
        }

        let Some((scheme, fields)) = s.split_once(":/") else {
            return Err(ProtocolError::InvalidStationUrl { reason: "missing ':/' separator" });
        };
        if scheme.is_empty() {
            return Err(ProtocolError::InvalidStationUrl { reason: "empty scheme" });
        }

        let mut params = BTreeMap::new();
        for field in fields.split(';') {
            if field.is_empty() {
                continue;
            }
            let Some((key, value)) = field.split_once('=') else {
                return Err(ProtocolError::InvalidStationUrl { reason: "parameter without '='" });
            };
            params.insert(key.to_owned(), value.to_owned());
        }

        Ok(Self { scheme: scheme.to_owned(), params })
    }
}

impl fmt::Display for StationUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:/", self.scheme)?;
        let mut first = true;
        for (key, value) in &self.params {
            if !first {
                write!(f, ";")?;
            }
            write!(f, "{key}={value}")?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_scheme_and_parameters() {
        let url: StationUrl =
            "prudps:/address=192.168.0.5;port=60001;PID=1234;sid=1".parse().unwrap();

        assert_eq!(url.scheme(), "prudps");
        assert_eq!(url.address(), Some("192.168.0.5"));
        assert_eq!(url.port(), Some(60001));
        assert_eq!(url.pid(), Some(1234));
        assert_eq!(url.get("sid"), Some("1"));
        assert_eq!(url.get("missing"), None);
    }

    #[test]
    fn empty_string_is_an_unused_slot() {
        let url: StationUrl = "".parse().unwrap();
        assert_eq!(url.scheme(), "prudp");
        assert_eq!(url.pid(), None);
    }

    #[test]
    fn display_round_trips_content() {
        let url: StationUrl = "prudp:/PID=2;address=10.0.0.1;port=9000".parse().unwrap();
        let reparsed: StationUrl = url.to_string().parse().unwrap();
        assert_eq!(url, reparsed);
    }

    #[test]
    fn rejects_missing_separator() {
        let err = "prudp address=1".parse::<StationUrl>().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidStationUrl { .. }));
    }

    #[test]
    fn rejects_parameter_without_value() {
        let err = "prudp:/address".parse::<StationUrl>().unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidStationUrl { .. }));
    }

    #[test]
    fn non_numeric_pid_reads_as_absent() {
        let url: StationUrl = "prudp:/PID=abc".parse().unwrap();
        assert_eq!(url.pid(), None);
        assert_eq!(url.get("PID"), Some("abc"));
    }

    #[test]
    fn trailing_semicolon_is_tolerated() {
        let url: StationUrl = "prudp:/address=1.2.3.4;".parse().unwrap();
        assert_eq!(url.address(), Some("1.2.3.4"));
    }
}
