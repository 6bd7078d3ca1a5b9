//! Tick source capability.
//!
//! A tick source is the timer handle owned by the driver. Arming it asks the
//! platform to signal a tick after every period (or once); whoever owns the driver
//! waits for that signal and calls [`BlinkDriver::on_tick`].
//!
//! [`BlinkDriver::on_tick`]: crate::BlinkDriver::on_tick

use crate::config::BlinkPeriod;

/// Whether an armed tick source repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimerMode {
    /// Fire every period until disarmed
    Periodic,
    /// Fire once, then disarm
    OneShot,
}

/// Timer handle that signals ticks at a fixed period.
pub trait TickSource {
    /// Arms the source. Re-arming replaces any previous period and mode.
    fn arm(&mut self, period: BlinkPeriod, mode: TimerMode);

    /// Stops signalling ticks.
    fn disarm(&mut self);

    /// Returns `true` while ticks will still be signalled.
    fn is_armed(&self) -> bool;
}

/// Tick source fired by hand, for host testing.
///
/// Records how it was armed so tests can check the driver asked for the right
/// period and mode.
#[derive(Debug, Clone, Default)]
pub struct ManualTimer {
    armed: Option<(BlinkPeriod, TimerMode)>,
    arm_count: u32,
    fired: u32,
}

impl ManualTimer {
    /// Creates a disarmed timer.
    pub const fn new() -> Self {
        Self {
            armed: None,
            arm_count: 0,
            fired: 0,
        }
    }

    /// Simulates one period elapsing.
    ///
    /// Returns `true` if a tick is due, i.e. the timer was armed. A one-shot
    /// arming is consumed by the first fire.
    pub fn fire(&mut self) -> bool {
        match self.armed {
            Some((_, mode)) => {
                if mode == TimerMode::OneShot {
                    self.armed = None;
                }
                self.fired = self.fired.wrapping_add(1);
                true
            }
            None => false,
        }
    }

    /// Period of the current arming.
    pub fn period(&self) -> Option<BlinkPeriod> {
        self.armed.map(|(period, _)| period)
    }

    /// Mode of the current arming.
    pub fn mode(&self) -> Option<TimerMode> {
        self.armed.map(|(_, mode)| mode)
    }

    /// Number of times [`TickSource::arm`] was called.
    pub const fn arm_count(&self) -> u32 {
        self.arm_count
    }

    /// Number of ticks signalled so far.
    pub const fn fired(&self) -> u32 {
        self.fired
    }
}

impl TickSource for ManualTimer {
    fn arm(&mut self, period: BlinkPeriod, mode: TimerMode) {
        self.armed = Some((period, mode));
        self.arm_count = self.arm_count.wrapping_add(1);
    }

    fn disarm(&mut self) {
        self.armed = None;
    }

    fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn period(ms: u32) -> BlinkPeriod {
        BlinkPeriod::from_millis(ms).unwrap()
    }

    #[test]
    fn disarmed_timer_never_fires() {
        let mut timer = ManualTimer::new();
        assert!(!timer.is_armed());
        assert!(!timer.fire());
        assert_eq!(timer.fired(), 0);
    }

    #[test]
    fn periodic_fires_until_disarmed() {
        let mut timer = ManualTimer::new();
        timer.arm(period(100), TimerMode::Periodic);

        for _ in 0..5 {
            assert!(timer.fire());
        }
        assert_eq!(timer.fired(), 5);
        assert!(timer.is_armed());

        timer.disarm();
        assert!(!timer.fire());
        assert_eq!(timer.fired(), 5);
    }

    #[test]
    fn one_shot_fires_once() {
        let mut timer = ManualTimer::new();
        timer.arm(period(10), TimerMode::OneShot);

        assert!(timer.fire());
        assert!(!timer.is_armed());
        assert!(!timer.fire());
    }

    #[test]
    fn rearm_replaces_period_and_mode() {
        let mut timer = ManualTimer::new();
        timer.arm(period(10), TimerMode::OneShot);
        timer.arm(period(20), TimerMode::Periodic);

        assert_eq!(timer.period(), Some(period(20)));
        assert_eq!(timer.mode(), Some(TimerMode::Periodic));
        assert_eq!(timer.arm_count(), 2);
    }
}
