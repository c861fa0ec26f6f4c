//! Fire-and-forget audio feedback
//!
//! Game logic reports what happened as a [`Cue`]; an [`AudioSink`] turns
//! it into sound. Everything goes through [`AudioPort`], which drops cues
//! while muted and swallows any error or panic coming out of the sink so
//! that audio can never disturb gameplay.

pub mod bell;

use log::debug;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;

pub use bell::TerminalBell;

#[derive(Debug, Error)]
pub enum AudioError {
    #[error("audio device unavailable")]
    Unavailable,
    #[error("failed to emit cue")]
    Io(#[from] std::io::Error),
}

/// Oscillator shape of a tone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Triangle,
    Sawtooth,
}

/// One tone in a cue's jingle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub freq_hz: f32,
    pub duration_ms: u64,
    pub waveform: Waveform,
    pub volume: f32,
    /// Offset from the start of the cue
    pub delay_ms: u64,
}

impl Tone {
    const fn new(freq_hz: f32, duration_ms: u64, waveform: Waveform, volume: f32, delay_ms: u64) -> Self {
        Self {
            freq_hz,
            duration_ms,
            waveform,
            volume,
            delay_ms,
        }
    }
}

const EAT: [Tone; 2] = [
    Tone::new(520.0, 60, Waveform::Square, 0.12, 0),
    Tone::new(750.0, 80, Waveform::Square, 0.10, 70),
];

const START: [Tone; 2] = [
    Tone::new(300.0, 60, Waveform::Triangle, 0.08, 0),
    Tone::new(500.0, 80, Waveform::Triangle, 0.08, 80),
];

const PAUSE: [Tone; 1] = [Tone::new(280.0, 80, Waveform::Triangle, 0.08, 0)];

const RESUME: [Tone; 1] = [Tone::new(700.0, 80, Waveform::Triangle, 0.08, 0)];

const GAME_OVER: [Tone; 3] = [
    Tone::new(480.0, 160, Waveform::Sawtooth, 0.10, 0),
    Tone::new(360.0, 160, Waveform::Sawtooth, 0.10, 170),
    Tone::new(240.0, 220, Waveform::Sawtooth, 0.09, 330),
];

/// Something worth a sound
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cue {
    Eat,
    Start,
    Pause,
    Resume,
    GameOver,
}

impl Cue {
    /// The jingle for this cue
    pub fn tones(&self) -> &'static [Tone] {
        match self {
            Cue::Eat => &EAT,
            Cue::Start => &START,
            Cue::Pause => &PAUSE,
            Cue::Resume => &RESUME,
            Cue::GameOver => &GAME_OVER,
        }
    }
}

/// Output device for cues
pub trait AudioSink {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError>;
}

/// Failure-absorbing, mute-able front for an optional sink
#[derive(Default)]
pub struct AudioPort {
    sink: Option<Box<dyn AudioSink>>,
    muted: bool,
}

impl AudioPort {
    pub fn new(sink: Box<dyn AudioSink>) -> Self {
        Self {
            sink: Some(sink),
            muted: false,
        }
    }

    /// A port with nothing attached
    pub fn silent() -> Self {
        Self::default()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Play a cue unless muted. Never fails.
    pub fn notify(&mut self, cue: Cue) {
        if self.muted {
            return;
        }
        let Some(sink) = self.sink.as_mut() else {
            return;
        };

        match panic::catch_unwind(AssertUnwindSafe(|| sink.play(cue))) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => debug!("audio cue {:?} dropped: {}", cue, e),
            Err(_) => debug!("audio sink panicked on cue {:?}", cue),
        }
    }
}
