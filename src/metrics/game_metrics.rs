use std::time::{Duration, Instant};

use crate::game::Phase;

/// Play-time clock and run counter, driven by session phase changes
pub struct GameMetrics {
    /// Set while the clock is running
    running_since: Option<Instant>,
    /// Time banked from earlier running stretches of this run
    banked: Duration,
    pub elapsed_time: Duration,
    pub games_played: u32,
    last_phase: Phase,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            running_since: None,
            banked: Duration::ZERO,
            elapsed_time: Duration::ZERO,
            games_played: 0,
            last_phase: Phase::Idle,
        }
    }

    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    /// Follow the session into `phase`
    pub fn observe(&mut self, phase: Phase) {
        self.observe_at(phase, Instant::now());
    }

    fn update_at(&mut self, now: Instant) {
        self.elapsed_time = match self.running_since {
            Some(since) => self.banked + now.saturating_duration_since(since),
            None => self.banked,
        };
    }

    fn observe_at(&mut self, phase: Phase, now: Instant) {
        if phase == self.last_phase {
            return;
        }

        match phase {
            Phase::Running => {
                // Straight from a game over into a new run
                if self.last_phase == Phase::GameOver {
                    self.banked = Duration::ZERO;
                }
                self.running_since.get_or_insert(now);
            }
            Phase::Paused => self.stop_clock(now),
            Phase::GameOver => {
                self.stop_clock(now);
                self.games_played += 1;
            }
            Phase::Idle => {
                self.running_since = None;
                self.banked = Duration::ZERO;
            }
        }

        self.last_phase = phase;
        self.update_at(now);
    }

    fn stop_clock(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.banked += now.saturating_duration_since(since);
        }
    }

    pub fn format_time(&self) -> String {
        let total_secs = self.elapsed_time.as_secs();
        let minutes = total_secs / 60;
        let seconds = total_secs % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.elapsed_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_clock_stops_while_paused() {
        let mut metrics = GameMetrics::new();
        let t0 = Instant::now();

        metrics.observe_at(Phase::Running, t0);
        metrics.observe_at(Phase::Paused, t0 + Duration::from_secs(10));
        metrics.update_at(t0 + Duration::from_secs(60));
        assert_eq!(metrics.elapsed_time, Duration::from_secs(10));

        metrics.observe_at(Phase::Running, t0 + Duration::from_secs(60));
        metrics.update_at(t0 + Duration::from_secs(65));
        assert_eq!(metrics.elapsed_time, Duration::from_secs(15));
    }

    #[test]
    fn test_game_over_counts_runs() {
        let mut metrics = GameMetrics::new();
        let t0 = Instant::now();

        metrics.observe_at(Phase::Running, t0);
        metrics.observe_at(Phase::GameOver, t0 + Duration::from_secs(3));
        metrics.observe_at(Phase::GameOver, t0 + Duration::from_secs(4));
        assert_eq!(metrics.games_played, 1);
        assert_eq!(metrics.elapsed_time, Duration::from_secs(3));

        metrics.observe_at(Phase::Idle, t0 + Duration::from_secs(5));
        assert_eq!(metrics.elapsed_time, Duration::ZERO);

        metrics.observe_at(Phase::Running, t0 + Duration::from_secs(6));
        metrics.observe_at(Phase::GameOver, t0 + Duration::from_secs(7));
        assert_eq!(metrics.games_played, 2);

        // Play again without passing through Idle
        metrics.observe_at(Phase::Running, t0 + Duration::from_secs(8));
        metrics.update_at(t0 + Duration::from_secs(10));
        assert_eq!(metrics.elapsed_time, Duration::from_secs(2));
    }
}
