//! Session state machine
//!
//! Owns one run of the game plus everything that outlives it (best score,
//! speed, mute) and decides when the engine is allowed to tick.
//!
//! ```text
//! Idle --start--> Running --pause--> Paused --resume--> Running
//! Running --collision--> GameOver
//! any --restart--> Idle
//! ```

use log::{debug, info, warn};

use super::{
    action::{Action, Direction},
    config::{GameConfig, Speed},
    engine::{GameEngine, StepOutcome},
    scheduler::Scheduler,
    score::ScoreTracker,
    state::{CollisionType, GameState},
};
use crate::audio::{AudioPort, Cue};
use crate::persistence::BestScoreStore;

/// Where the session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fresh layout, waiting for the first start
    Idle,
    /// Ticks are scheduled
    Running,
    /// Ticks cancelled, run kept
    Paused,
    /// Run ended, waiting for a restart
    GameOver,
}

/// Why the last run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOverReason {
    Collision(CollisionType),
    BoardFilled,
}

pub struct Session<S: Scheduler> {
    engine: GameEngine,
    state: GameState,
    phase: Phase,
    scores: ScoreTracker,
    speed: Speed,
    scheduler: S,
    store: Box<dyn BestScoreStore>,
    audio: AudioPort,
    game_over: Option<GameOverReason>,
    redraw: bool,
}

impl<S: Scheduler> Session<S> {
    /// Create an idle session, loading the best score from `store`
    pub fn new(
        config: &GameConfig,
        scheduler: S,
        store: Box<dyn BestScoreStore>,
        audio: AudioPort,
    ) -> Self {
        let best = store.load().unwrap_or_else(|e| {
            warn!("could not load best score, starting from 0: {}", e);
            0
        });

        let mut engine = GameEngine::new(config);
        let state = engine.reset();

        Self {
            engine,
            state,
            phase: Phase::Idle,
            scores: ScoreTracker::new(best),
            speed: config.speed,
            scheduler,
            store,
            audio,
            game_over: None,
            redraw: true,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn score(&self) -> u32 {
        self.scores.current()
    }

    pub fn best_score(&self) -> u32 {
        self.scores.best()
    }

    pub fn speed(&self) -> Speed {
        self.speed
    }

    pub fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    pub fn game_over_reason(&self) -> Option<GameOverReason> {
        self.game_over
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Returns true once after every visible change
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }

    /// Dispatch a player intent
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::Steer(direction) => self.set_next_direction(direction),
            Action::Toggle => self.toggle(),
            Action::Restart => {
                self.restart();
                true
            }
            Action::ToggleMute => {
                self.toggle_mute();
                true
            }
            Action::Faster => self.set_speed(self.speed.faster()),
            Action::Slower => self.set_speed(self.speed.slower()),
        }
    }

    /// Queue a direction for the next tick; exact reversals are ignored
    pub fn set_next_direction(&mut self, direction: Direction) -> bool {
        self.state.snake.set_next_direction(direction)
    }

    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.run();
        info!("run started at speed {}", self.speed.level());
        self.audio.notify(Cue::Start);
        true
    }

    pub fn pause(&mut self) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        self.scheduler.cancel();
        self.phase = Phase::Paused;
        self.redraw = true;
        info!("paused at score {}", self.scores.current());
        self.audio.notify(Cue::Pause);
        true
    }

    pub fn resume(&mut self) -> bool {
        if self.phase != Phase::Paused {
            return false;
        }
        self.run();
        info!("resumed");
        self.audio.notify(Cue::Resume);
        true
    }

    /// Start, pause or resume; after a game over, begin a new run
    pub fn toggle(&mut self) -> bool {
        match self.phase {
            Phase::Idle => self.start(),
            Phase::Running => self.pause(),
            Phase::Paused => self.resume(),
            Phase::GameOver => {
                self.restart();
                self.start()
            }
        }
    }

    /// Drop the current run and go back to the initial layout.
    ///
    /// Allowed from every phase; the best score is kept.
    pub fn restart(&mut self) {
        self.scheduler.cancel();
        self.state = self.engine.reset();
        self.scores.reset();
        self.phase = Phase::Idle;
        self.game_over = None;
        self.redraw = true;
        info!("session reset");
    }

    /// Change tick speed; a running timer is rescheduled at the new interval
    pub fn set_speed(&mut self, speed: Speed) -> bool {
        if speed == self.speed {
            return false;
        }
        self.speed = speed;
        if self.phase == Phase::Running {
            self.scheduler.schedule(self.speed.interval());
        }
        self.redraw = true;
        debug!(
            "speed set to {} ({} ms)",
            speed.level(),
            speed.interval().as_millis()
        );
        true
    }

    pub fn toggle_mute(&mut self) {
        let muted = !self.audio.is_muted();
        self.audio.set_muted(muted);
        self.redraw = true;
        if !muted {
            self.audio.notify(Cue::Resume);
        }
    }

    /// Advance one tick. Ignored unless running.
    pub fn tick(&mut self) -> Option<StepOutcome> {
        if self.phase != Phase::Running {
            return None;
        }

        let outcome = self.engine.step(&mut self.state);
        match outcome {
            StepOutcome::Moved => {}
            StepOutcome::Ate => self.audio.notify(Cue::Eat),
            StepOutcome::Collided(collision) => {
                self.game_over = Some(GameOverReason::Collision(collision));
            }
            StepOutcome::BoardFilled => {
                self.game_over = Some(GameOverReason::BoardFilled);
            }
        }
        if matches!(outcome, StepOutcome::Ate | StepOutcome::BoardFilled) {
            self.scores.record_food();
        }
        if outcome.is_terminal() {
            self.finish();
        }
        self.redraw = true;
        Some(outcome)
    }

    fn run(&mut self) {
        self.scheduler.schedule(self.speed.interval());
        self.phase = Phase::Running;
        self.redraw = true;
    }

    fn finish(&mut self) {
        self.scheduler.cancel();
        self.phase = Phase::GameOver;

        if let Some(best) = self.scores.settle() {
            info!("new best score {}", best);
            if let Err(e) = self.store.save(best) {
                warn!("failed to persist best score {}: {}", best, e);
            }
        }

        info!(
            "game over ({:?}) with score {} after {} ticks",
            self.game_over,
            self.scores.current(),
            self.state.steps
        );
        self.audio.notify(Cue::GameOver);
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }
}
