//! Error types for blink configuration.
//!
//! Toggling the pin cannot fail. The only thing that can go wrong is being handed
//! a bad configuration, and that is rejected before a driver exists.

use core::fmt;

/// Result type for blink operations
pub type Result<T> = core::result::Result<T, BlinkError>;

/// Status code reported by a successful initialization.
pub const STATUS_OK: i32 = 0;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlinkError {
    /// Blink period of zero milliseconds
    ZeroPeriod,
    /// Blink period is not a decimal millisecond count
    InvalidPeriod,
    /// Heartbeat interval is not a decimal tick count
    InvalidHeartbeat,
}

impl BlinkError {
    /// Non-zero status code for this error.
    pub const fn code(self) -> i32 {
        match self {
            BlinkError::ZeroPeriod => 1,
            BlinkError::InvalidPeriod => 2,
            BlinkError::InvalidHeartbeat => 3,
        }
    }
}

impl fmt::Display for BlinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlinkError::ZeroPeriod => write!(f, "blink period must be non-zero"),
            BlinkError::InvalidPeriod => write!(f, "blink period is not a valid millisecond count"),
            BlinkError::InvalidHeartbeat => write!(f, "heartbeat interval is not a valid tick count"),
        }
    }
}

/// Maps an initialization result to the integer status code expected by a boot
/// sequence: [`STATUS_OK`] on success, otherwise [`BlinkError::code`].
pub fn status_code<T>(result: &Result<T>) -> i32 {
    match result {
        Ok(_) => STATUS_OK,
        Err(e) => e.code(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_ok_is_zero() {
        let result: Result<()> = Ok(());
        assert_eq!(status_code(&result), STATUS_OK);
        assert_eq!(STATUS_OK, 0);
    }

    #[test]
    fn status_code_errors_are_distinct_and_nonzero() {
        let zero: Result<()> = Err(BlinkError::ZeroPeriod);
        let invalid: Result<()> = Err(BlinkError::InvalidPeriod);
        let heartbeat: Result<()> = Err(BlinkError::InvalidHeartbeat);

        assert_eq!(status_code(&zero), 1);
        assert_eq!(status_code(&invalid), 2);
        assert_eq!(status_code(&heartbeat), 3);
        assert_ne!(status_code(&zero), STATUS_OK);
        assert_ne!(status_code(&invalid), STATUS_OK);
    }
}
