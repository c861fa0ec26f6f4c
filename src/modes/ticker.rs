use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

use crate::game::Scheduler;

/// [`Scheduler`] backed by a tokio interval
///
/// Holds at most one interval. With nothing scheduled, [`IntervalTicker::tick`]
/// never completes, so it can sit in a `select!` unconditionally.
#[derive(Default)]
pub struct IntervalTicker {
    interval: Option<Interval>,
    period: Option<Duration>,
}

impl IntervalTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the next tick of the active schedule
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}

impl Scheduler for IntervalTicker {
    fn schedule(&mut self, period: Duration) {
        // First tick one full period from now, not immediately
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        self.period = Some(period);
    }

    fn cancel(&mut self) {
        self.interval = None;
        self.period = None;
    }

    fn active_interval(&self) -> Option<Duration> {
        self.period
    }
}
