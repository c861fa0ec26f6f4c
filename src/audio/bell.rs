use std::io::Write;

use super::{AudioError, AudioSink, Cue};

const BEL: &[u8] = b"\x07";

/// Rings the terminal bell for the cues that matter most.
///
/// A terminal cannot play the tone sequences, so eating rings once and a
/// game over rings once per tone of its jingle. Other cues stay quiet.
pub struct TerminalBell<W: Write> {
    out: W,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play(&mut self, cue: Cue) -> Result<(), AudioError> {
        let rings = match cue {
            Cue::Eat => 1,
            Cue::GameOver => cue.tones().len(),
            Cue::Start | Cue::Pause | Cue::Resume => 0,
        };
        if rings == 0 {
            return Ok(());
        }
        for _ in 0..rings {
            self.out.write_all(BEL)?;
        }
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bell_rings() {
        let mut bell = TerminalBell::new(Vec::new());
        bell.play(Cue::Start).unwrap();
        bell.play(Cue::Eat).unwrap();
        bell.play(Cue::GameOver).unwrap();

        assert_eq!(bell.into_inner(), b"\x07\x07\x07\x07".to_vec());
    }
}
