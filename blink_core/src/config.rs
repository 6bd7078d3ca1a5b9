//! Blink configuration.
//!
//! The period used to be a value pasted into the source before compiling. Here it
//! is an ordinary validated value handed to [`BlinkDriver::initialize`], fixed for
//! the lifetime of the driver.
//!
//! [`BlinkDriver::initialize`]: crate::BlinkDriver::initialize

use core::num::NonZeroU32;
use core::str::FromStr;

use crate::error::{BlinkError, Result};

/// Default blink period in milliseconds
pub const DEFAULT_PERIOD_MS: u32 = 500;

/// Time between two pin toggles, in milliseconds. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkPeriod(NonZeroU32);

impl BlinkPeriod {
    /// The default 500 ms period.
    pub const DEFAULT: Self = match NonZeroU32::new(DEFAULT_PERIOD_MS) {
        Some(ms) => Self(ms),
        None => panic!("default period is zero"),
    };

    /// Creates a period from a millisecond count.
    ///
    /// # Errors
    ///
    /// Returns [`BlinkError::ZeroPeriod`] if `ms` is 0.
    pub const fn from_millis(ms: u32) -> Result<Self> {
        match NonZeroU32::new(ms) {
            Some(ms) => Ok(Self(ms)),
            None => Err(BlinkError::ZeroPeriod),
        }
    }

    /// Period in milliseconds.
    pub const fn as_millis(self) -> u32 {
        self.0.get()
    }
}

impl Default for BlinkPeriod {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for BlinkPeriod {
    type Err = BlinkError;

    /// Parses a decimal millisecond count, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let ms = s
            .trim()
            .parse::<u32>()
            .map_err(|_| BlinkError::InvalidPeriod)?;
        Self::from_millis(ms)
    }
}

/// Driver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkConfig {
    /// Time between toggles
    pub period: BlinkPeriod,
    /// Log a heartbeat line every this many ticks. `None` disables it.
    pub heartbeat: Option<NonZeroU32>,
}

impl BlinkConfig {
    /// Configuration with the given period and no heartbeat.
    pub const fn new(period: BlinkPeriod) -> Self {
        Self {
            period,
            heartbeat: None,
        }
    }

    /// Sets the heartbeat interval. A count of 0 disables the heartbeat.
    pub const fn with_heartbeat(mut self, every_ticks: u32) -> Self {
        self.heartbeat = NonZeroU32::new(every_ticks);
        self
    }

    /// Builds a configuration from its textual form, as baked in at build time.
    ///
    /// # Arguments
    ///
    /// * `period_ms` - Blink period in milliseconds, e.g. `"500"`
    /// * `heartbeat` - Heartbeat interval in ticks, `"0"` to disable
    ///
    /// # Errors
    ///
    /// - [`BlinkError::ZeroPeriod`] if the period is 0
    /// - [`BlinkError::InvalidPeriod`] if the period is not a `u32`
    /// - [`BlinkError::InvalidHeartbeat`] if the heartbeat is not a `u32`
    pub fn parse(period_ms: &str, heartbeat: &str) -> Result<Self> {
        let period = period_ms.parse::<BlinkPeriod>()?;
        let heartbeat = heartbeat
            .trim()
            .parse::<u32>()
            .map_err(|_| BlinkError::InvalidHeartbeat)?;
        Ok(Self::new(period).with_heartbeat(heartbeat))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_period_is_500ms() {
        assert_eq!(BlinkPeriod::default().as_millis(), 500);
        assert_eq!(BlinkConfig::default().period, BlinkPeriod::DEFAULT);
        assert_eq!(BlinkConfig::default().heartbeat, None);
    }

    #[test]
    fn from_millis_rejects_zero() {
        assert_eq!(BlinkPeriod::from_millis(0), Err(BlinkError::ZeroPeriod));
        assert_eq!(BlinkPeriod::from_millis(1).map(BlinkPeriod::as_millis), Ok(1));
        assert_eq!(
            BlinkPeriod::from_millis(u32::MAX).map(BlinkPeriod::as_millis),
            Ok(u32::MAX)
        );
    }

    #[test]
    fn parse_valid_periods() {
        assert_eq!("500".parse::<BlinkPeriod>().map(BlinkPeriod::as_millis), Ok(500));
        assert_eq!(" 250\n".parse::<BlinkPeriod>().map(BlinkPeriod::as_millis), Ok(250));
    }

    #[test]
    fn parse_rejects_zero() {
        assert_eq!("0".parse::<BlinkPeriod>(), Err(BlinkError::ZeroPeriod));
    }

    #[test]
    fn parse_rejects_garbage() {
        for input in ["", "abc", "-5", "1.5", "99999999999"] {
            assert_eq!(
                input.parse::<BlinkPeriod>(),
                Err(BlinkError::InvalidPeriod),
                "input {input:?}"
            );
        }
    }

    #[test]
    fn heartbeat_zero_disables() {
        let config = BlinkConfig::new(BlinkPeriod::DEFAULT).with_heartbeat(0);
        assert_eq!(config.heartbeat, None);

        let config = config.with_heartbeat(10);
        assert_eq!(config.heartbeat.map(NonZeroU32::get), Some(10));
    }

    #[test]
    fn parse_full_config() {
        let config = BlinkConfig::parse("250", "10").unwrap();
        assert_eq!(config.period.as_millis(), 250);
        assert_eq!(config.heartbeat.map(NonZeroU32::get), Some(10));

        let config = BlinkConfig::parse("500", "0").unwrap();
        assert_eq!(config, BlinkConfig::default());
    }

    #[test]
    fn parse_full_config_errors() {
        assert_eq!(BlinkConfig::parse("0", "10"), Err(BlinkError::ZeroPeriod));
        assert_eq!(BlinkConfig::parse("x", "10"), Err(BlinkError::InvalidPeriod));
        assert_eq!(BlinkConfig::parse("500", "often"), Err(BlinkError::InvalidHeartbeat));
        assert_eq!(BlinkConfig::parse("500", "-1"), Err(BlinkError::InvalidHeartbeat));
    }
}
