//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! Timing, persistence and audio are reached through the `Scheduler`,
//! `BestScoreStore` and `AudioPort` seams, so a session can be driven tick by
//! tick from tests.

pub mod action;
pub mod config;
pub mod engine;
pub mod grid;
pub mod scheduler;
pub mod score;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use action::{Action, Direction};
pub use config::{ConfigError, GameConfig, Speed};
pub use engine::{GameEngine, StepOutcome};
pub use grid::Grid;
pub use scheduler::{ManualScheduler, Scheduler};
pub use score::ScoreTracker;
pub use session::{GameOverReason, Phase, Session};
pub use state::{Cell, CollisionType, GameState, Snake};
