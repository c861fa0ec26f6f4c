//! Grid Snake - a terminal Snake game
//!
//! This library provides:
//! - Core game logic: step engine and session state machine (game module)
//! - Best score persistence (persistence module)
//! - Audio cues behind a failure-absorbing port (audio module)
//! - TUI rendering and keyboard input (render, input modules)
//! - The interactive play loop (modes module)

pub mod audio;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod persistence;
pub mod render;
