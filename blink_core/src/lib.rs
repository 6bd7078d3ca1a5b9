//! Periodic LED blink driver
//!
//! This crate holds the platform-independent half of the blink firmware: a driver
//! that flips one output pin every time a periodic tick fires. Hardware access is
//! injected through two small traits so the same toggle logic runs on an ESP32 and
//! in host tests.
//!
//! ## Modules
//!
//! - [`driver`]: the [`BlinkDriver`] and its periodic callback
//! - [`pin`]: the pin read/write capability and a simulated pin
//! - [`timer`]: the tick source capability and a manually fired timer
//! - [`config`]: blink period and heartbeat configuration
//! - [`error`]: configuration errors and init status codes
//!
//! ## Example
//!
//! ```
//! use blink_core::{BlinkConfig, BlinkDriver, ManualTimer, PinLevel, SimulatedPin};
//!
//! let mut driver = BlinkDriver::initialize(
//!     SimulatedPin::new(),
//!     ManualTimer::new(),
//!     BlinkConfig::default(),
//! );
//! assert_eq!(driver.level(), PinLevel::Low);
//!
//! while driver.ticks() < 3 && driver.timer_mut().fire() {
//!     driver.on_tick();
//! }
//! assert_eq!(driver.level(), PinLevel::High);
//! ```

#![no_std]
#![warn(missing_docs)]

// Must come first so the log macros are visible to the modules below.
#[macro_use]
mod fmt;

/// Blink period and heartbeat configuration
pub mod config;

/// The blink driver and its periodic callback
pub mod driver;

/// Error type and init status codes
pub mod error;

/// Pin read/write capability
pub mod pin;

/// Tick source capability
pub mod timer;

pub use config::{BlinkConfig, BlinkPeriod};
pub use driver::{BlinkDriver, BlinkStatus};
pub use error::{BlinkError, Result, STATUS_OK, status_code};
pub use pin::{PinBackend, PinLevel, SimulatedPin};
pub use timer::{ManualTimer, TickSource, TimerMode};
