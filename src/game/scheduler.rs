//! Repeating tick source used by the session
//!
//! The session only asks for "tick every `interval`" or "stop ticking";
//! who actually delivers the ticks is up to the implementation. The play
//! mode backs this with a tokio interval, tests use [`ManualScheduler`] and
//! call `Session::tick` themselves.

use std::time::Duration;

/// A cancellable repeating task
pub trait Scheduler {
    /// Start ticking every `interval`, replacing any running schedule
    fn schedule(&mut self, interval: Duration);

    /// Stop ticking. Does nothing if nothing is scheduled.
    fn cancel(&mut self);

    /// Interval of the active schedule, if any
    fn active_interval(&self) -> Option<Duration>;

    fn is_scheduled(&self) -> bool {
        self.active_interval().is_some()
    }
}

/// Scheduler that only records requests; ticks are delivered by hand
#[derive(Debug, Default, Clone)]
pub struct ManualScheduler {
    active: Option<Duration>,
    history: Vec<Duration>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every interval ever scheduled, oldest first
    pub fn history(&self) -> &[Duration] {
        &self.history
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&mut self, interval: Duration) {
        self.active = Some(interval);
        self.history.push(interval);
    }

    fn cancel(&mut self) {
        self.active = None;
    }

    fn active_interval(&self) -> Option<Duration> {
        self.active
    }
}
