//! Global static storage for the blink driver.
//!
//! Embassy tasks need `'static` arguments, so the driver is moved into a
//! static cell once and handed to the blink task by reference.

use blink_core::BlinkDriver;
use esp_hal::gpio::Output;
use static_cell::StaticCell;

use crate::ticker::EmbassyTicker;

/// Blink driver toggling an ESP32 GPIO output on Embassy ticks.
pub type LedDriver = BlinkDriver<Output<'static>, EmbassyTicker>;

/// Static storage for the blink driver.
///
/// Can be initialized once; the blink task is its only user afterwards.
pub static BLINK_DRIVER: StaticCell<LedDriver> = StaticCell::new();
