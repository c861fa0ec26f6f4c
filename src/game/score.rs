/// Current score and the best score seen so far
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTracker {
    current: u32,
    best: u32,
}

impl ScoreTracker {
    pub fn new(best: u32) -> Self {
        Self { current: 0, best }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    pub fn record_food(&mut self) {
        self.current += 1;
    }

    /// Start a new run, keeping the best score
    pub fn reset(&mut self) {
        self.current = 0;
    }

    /// Close out a run.
    ///
    /// Returns the new best when the current score beats it.
    pub fn settle(&mut self) -> Option<u32> {
        if self.current > self.best {
            self.best = self.current;
            Some(self.best)
        } else {
            None
        }
    }
}
