//! ESP32 LED blink firmware
//!
//! This library wires the platform-independent [`blink_core`] driver to the ESP32:
//! the LED is an `esp_hal` GPIO output and ticks come from an Embassy ticker.
//!
//! ## Example
//!
//! ```no_run
//! use blink_led::blinker::{blink_task, user_init};
//! use embassy_executor::Spawner;
//!
//! #[esp_rtos::main]
//! async fn main(spawner: Spawner) -> ! {
//!     let peripherals = esp_hal::init(esp_hal::Config::default());
//!     // ... start esp-rtos (see bin/main.rs for the complete example)
//!     let driver = user_init(peripherals.GPIO2).unwrap();
//!     spawner.spawn(blink_task(driver).unwrap());
//!     loop {}
//! }
//! ```

#![no_std]
#![warn(missing_docs)]

/// LED pin setup
pub mod board;

/// Blink initialization and the blink task
pub mod blinker;

/// Embassy-backed tick source
pub mod ticker;

/// Global static storage for the blink driver
pub mod types;
