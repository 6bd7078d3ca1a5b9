//! The blink driver.
//!
//! [`BlinkDriver`] owns everything the blink needs: the output pin, the timer
//! handle, and the tick counter. Whoever receives ticks from the timer (an Embassy
//! task on target, a test loop on host) holds the driver by value or `&mut` and
//! calls [`BlinkDriver::on_tick`] once per tick. Because `on_tick` takes
//! `&mut self`, two ticks can never run against the same driver at once.

use crate::config::BlinkConfig;
use crate::pin::{PinBackend, PinLevel};
use crate::timer::{TickSource, TimerMode};

/// Snapshot of driver state for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BlinkStatus {
    /// Ticks handled since initialization
    pub ticks: u32,
    /// Level currently driven on the pin
    pub level: PinLevel,
    /// Whether the timer is still armed
    pub armed: bool,
}

/// Toggles one output pin on every timer tick.
///
/// The pin level is never cached: each tick reads what the pin is actually
/// driving and writes the opposite, so a level disturbed from outside is
/// corrected on the next tick rather than carried forward.
#[derive(Debug)]
pub struct BlinkDriver<P, T> {
    pin: P,
    timer: T,
    config: BlinkConfig,
    ticks: u32,
}

impl<P, T> BlinkDriver<P, T>
where
    P: PinBackend,
    T: TickSource,
{
    /// Takes ownership of the pin and timer and starts blinking.
    ///
    /// Drives the pin low, resets the tick counter and arms `timer` to repeat
    /// every `config.period`.
    ///
    /// # Arguments
    ///
    /// * `pin` - Pin already configured as a GPIO output
    /// * `timer` - Timer handle, owned by the driver from now on
    /// * `config` - Validated blink configuration
    pub fn initialize(mut pin: P, mut timer: T, config: BlinkConfig) -> Self {
        pin.set_pin(PinLevel::Low);
        timer.arm(config.period, TimerMode::Periodic);

        info!("blink armed: period {} ms", config.period.as_millis());

        Self {
            pin,
            timer,
            config,
            ticks: 0,
        }
    }

    /// Periodic callback. Call once per timer tick.
    ///
    /// Increments the tick counter (wrapping at `u32::MAX`), reads the pin and
    /// drives it to the opposite level.
    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);

        let level = !self.pin.read_pin();
        self.pin.set_pin(level);

        trace!("tick {}: pin {}", self.ticks, level);

        if let Some(every) = self.config.heartbeat
            && self.ticks % every.get() == 0
        {
            info!("blink heartbeat: {} ticks, pin {}", self.ticks, level);
        }
    }

    /// Stops blinking and gives the pin and timer back.
    ///
    /// Disarms the timer and leaves the pin low.
    pub fn shutdown(mut self) -> (P, T) {
        self.timer.disarm();
        self.pin.set_pin(PinLevel::Low);

        debug!("blink stopped after {} ticks", self.ticks);

        (self.pin, self.timer)
    }

    /// Level currently driven on the pin.
    pub fn level(&mut self) -> PinLevel {
        self.pin.read_pin()
    }

    /// Current state snapshot.
    pub fn status(&mut self) -> BlinkStatus {
        BlinkStatus {
            ticks: self.ticks,
            level: self.pin.read_pin(),
            armed: self.timer.is_armed(),
        }
    }
}

impl<P, T> BlinkDriver<P, T> {
    /// Ticks handled since initialization.
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Configuration the driver was initialized with.
    pub const fn config(&self) -> &BlinkConfig {
        &self.config
    }

    /// Mutable access to the pin.
    pub fn pin_mut(&mut self) -> &mut P {
        &mut self.pin
    }

    /// The timer handle.
    pub const fn timer(&self) -> &T {
        &self.timer
    }

    /// Mutable access to the timer handle, used by the tick loop to wait for
    /// the next period.
    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }
}
