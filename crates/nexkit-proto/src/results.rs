//! Result words and their registered error names.
//!
//! Every method response opens with a 32-bit result word. Bit 31 is the
//! severity flag: set means failure, clear means success. The low bits
//! identify a facility and an error code within it; the names below are
//! the ones the official servers register.
//!
//! The table covers the Core and RendezVous facilities, which is what the
//! authentication service actually emits. Anything else resolves to
//! [`UNKNOWN_ERROR`].

/// Severity flag in a result word.
const ERROR_BIT: u32 = 0x8000_0000;

/// Name reported for result codes absent from the registry.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Whether a result word reports a failure.
pub fn is_error(result: u32) -> bool {
    result & ERROR_BIT != 0
}

/// Registered name for a result word, ignoring the severity flag.
///
/// Unregistered codes yield [`UNKNOWN_ERROR`] rather than an error: the
/// caller is already on a failure path and the name is diagnostic only.
pub fn error_name(result: u32) -> &'static str {
    let code = result & !ERROR_BIT;
    match NAMES.binary_search_by_key(&code, |&(c, _)| c) {
        Ok(index) => NAMES[index].1,
        Err(_) => UNKNOWN_ERROR,
    }
}

// Sorted by code; `error_name` relies on the ordering.
const NAMES: &[(u32, &str)] = &[
    (0x0001_0001, "Core::Unknown"),
    (0x0001_0002, "Core::NotImplemented"),
    (0x0001_0003, "Core::InvalidPointer"),
    (0x0001_0004, "Core::OperationAborted"),
    (0x0001_0005, "Core::Exception"),
    (0x0001_0006, "Core::AccessDenied"),
    (0x0001_0007, "Core::InvalidHandle"),
    (0x0001_0008, "Core::InvalidIndex"),
    (0x0001_0009, "Core::OutOfMemory"),
    (0x0001_000A, "Core::InvalidArgument"),
    (0x0001_000B, "Core::Timeout"),
    (0x0001_000C, "Core::InitializationFailure"),
    (0x0001_000D, "Core::CallInitiationFailure"),
    (0x0001_000E, "Core::RegistrationError"),
    (0x0001_000F, "Core::BufferOverflow"),
    (0x0001_0010, "Core::InvalidLockState"),
    (0x0003_0001, "RendezVous::ConnectionFailure"),
    (0x0003_0002, "RendezVous::NotAuthenticated"),
    (0x0003_0064, "RendezVous::InvalidUsername"),
    (0x0003_0065, "RendezVous::InvalidPassword"),
    (0x0003_0066, "RendezVous::UsernameAlreadyExists"),
    (0x0003_0067, "RendezVous::AccountDisabled"),
    (0x0003_0068, "RendezVous::AccountExpired"),
    (0x0003_0069, "RendezVous::ConcurrentLoginDenied"),
    (0x0003_006A, "RendezVous::EncryptionFailure"),
    (0x0003_006B, "RendezVous::InvalidPID"),
    (0x0003_006C, "RendezVous::MaxConnectionsReached"),
    (0x0003_006D, "RendezVous::InvalidGID"),
    (0x0003_006E, "RendezVous::InvalidControlScriptID"),
    (0x0003_006F, "RendezVous::InvalidOperationInLiveEnvironment"),
    (0x0003_0070, "RendezVous::DuplicateEntry"),
    (0x0003_0071, "RendezVous::ControlScriptFailure"),
    (0x0003_0072, "RendezVous::ClassNotFound"),
    (0x0003_0073, "RendezVous::SessionVoid"),
    (0x0003_0075, "RendezVous::DDLMismatch"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_bit_marks_failure() {
        assert!(is_error(0x8001_0001));
        assert!(is_error(0x8000_0001));
        assert!(!is_error(0));
        assert!(!is_error(0x0001_0001));
    }

    #[test]
    fn known_codes_resolve_with_or_without_severity() {
        assert_eq!(error_name(0x8003_0065), "RendezVous::InvalidPassword");
        assert_eq!(error_name(0x0003_0065), "RendezVous::InvalidPassword");
        assert_eq!(error_name(0x8001_000B), "Core::Timeout");
    }

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(error_name(0x8000_0001), UNKNOWN_ERROR);
        assert_eq!(error_name(0x80FF_FFFF), UNKNOWN_ERROR);
    }

    #[test]
    fn table_is_sorted_for_binary_search() {
        for pair in NAMES.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{:#x} out of order", pair[1].0);
        }
    }
}
