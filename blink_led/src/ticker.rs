//! Tick source backed by an Embassy [`Ticker`].
//!
//! The Embassy executor stands in for the timer subsystem: [`EmbassyTicker::next`]
//! completes once per period and the task awaiting it runs the blink callback.
//! Ticks are delivered to one task at a time, so callbacks never overlap.

use blink_core::{BlinkPeriod, TickSource, TimerMode};
use embassy_time::{Duration, Ticker};

/// Timer handle for [`blink_core::BlinkDriver`] on Embassy.
pub struct EmbassyTicker {
    ticker: Option<Ticker>,
    mode: TimerMode,
}

impl EmbassyTicker {
    /// Creates a disarmed ticker.
    pub const fn new() -> Self {
        Self {
            ticker: None,
            mode: TimerMode::Periodic,
        }
    }

    /// Waits for the next period to elapse.
    ///
    /// Returns `false` immediately if the ticker is disarmed. A one-shot arming
    /// disarms itself after its tick.
    pub async fn next(&mut self) -> bool {
        let Some(ticker) = self.ticker.as_mut() else {
            return false;
        };
        ticker.next().await;

        if self.mode == TimerMode::OneShot {
            self.ticker = None;
        }
        true
    }
}

impl Default for EmbassyTicker {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for EmbassyTicker {
    fn arm(&mut self, period: BlinkPeriod, mode: TimerMode) {
        let period = Duration::from_millis(u64::from(period.as_millis()));
        self.ticker = Some(Ticker::every(period));
        self.mode = mode;
    }

    fn disarm(&mut self) {
        self.ticker = None;
    }

    fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }
}
