use std::time::Duration;

use tokio::time::{Interval, interval};

/// Fixed-cadence tick source for a game session. The clock is owned by the
/// session task and polled from its `select!` loop, so there is never more
/// than one ticking source and a stopped clock cannot drive another step.
pub struct GameClock {
    period: Duration,
    timer: Option<Interval>,
}

impl GameClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            timer: None,
        }
    }

    /// Arms the clock at the current period, replacing any timer that was
    /// already armed. The first tick fires immediately, subsequent ticks
    /// follow the period.
    pub fn start(&mut self) {
        self.timer = Some(interval(self.period));
    }

    /// Disarms the clock. Safe to call when already stopped.
    pub fn stop(&mut self) {
        self.timer = None;
    }

    pub fn is_running(&self) -> bool {
        self.timer.is_some()
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Swaps in a new period. A running clock is re-armed at the new cadence;
    /// a stopped clock stays stopped and only remembers the period.
    pub fn set_period(&mut self, period: Duration) {
        self.period = period;
        if self.timer.is_some() {
            self.timer = Some(interval(period));
        }
    }

    /// Resolves at the next scheduled tick. Pending forever while stopped.
    pub async fn tick(&mut self) {
        match self.timer.as_mut() {
            Some(timer) => {
                timer.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
