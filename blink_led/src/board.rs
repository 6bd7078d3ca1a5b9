//! LED pin setup for ESP32 dev kits.
//!
//! Most ESP32 DevKit boards wire their on-board LED to GPIO2.

use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

/// Routes `pin` to the GPIO matrix as a push-pull output driven low.
///
/// Constructing the [`Output`] selects the GPIO function in the IO mux and
/// enables the output driver, so the returned pin is ready for the blink driver.
pub fn led_output(pin: impl OutputPin + 'static) -> Output<'static> {
    Output::new(pin, Level::Low, OutputConfig::default())
}
