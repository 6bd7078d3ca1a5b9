//! Blink initialization and the Embassy task that drives it.

use blink_core::{BlinkConfig, BlinkDriver, Result};
use defmt::info;
use esp_hal::gpio::OutputPin;
use esp_println::println;

use crate::board::led_output;
use crate::ticker::EmbassyTicker;
use crate::types::{BLINK_DRIVER, LedDriver};

/// Blink period in milliseconds, set by `build.rs` from `BLINK_PERIOD_MS`.
const BLINK_PERIOD_MS: &str = env!("BLINK_PERIOD_MS");

/// Heartbeat interval in ticks, set by `build.rs` from `BLINK_HEARTBEAT`.
const BLINK_HEARTBEAT: &str = env!("BLINK_HEARTBEAT");

/// Embassy task that runs the blink callback once per tick.
///
/// Runs until the driver's ticker is disarmed, which never happens in the
/// shipped firmware.
///
/// # Arguments
///
/// * `driver` - Initialized blink driver with static lifetime
#[embassy_executor::task]
pub async fn blink_task(driver: &'static mut LedDriver) {
    while driver.timer_mut().next().await {
        driver.on_tick();
    }
    println!("Blink timer disarmed after {} ticks", driver.ticks());
}

/// Configures the LED pin and builds the blink driver.
///
/// Parses the build-time blink settings, sets `led_pin` up as a low GPIO output,
/// arms an Embassy ticker at the configured period and moves the driver into
/// static storage.
///
/// # Arguments
///
/// * `led_pin` - GPIO the LED is connected to
///
/// # Errors
///
/// Returns a [`blink_core::BlinkError`] if the baked-in settings are invalid.
///
/// # Panics
///
/// Panics if called more than once.
pub fn user_init(led_pin: impl OutputPin + 'static) -> Result<&'static mut LedDriver> {
    let config = BlinkConfig::parse(BLINK_PERIOD_MS, BLINK_HEARTBEAT).map_err(|e| {
        println!("Invalid blink configuration: {}", e);
        e
    })?;
    info!("Blink config: {}", config);

    let led = led_output(led_pin);
    let driver = BlinkDriver::initialize(led, EmbassyTicker::new(), config);
    println!("LED blinking every {} ms", config.period.as_millis());

    Ok(BLINK_DRIVER.init(driver))
}
