use std::time::Instant;

use crate::game::timer::Timer;

/// Score, mistake count, and the session timer. Pure state holder; the
/// renderer repaints these every frame.
pub struct Scoreboard {
    pub score: u32,
    pub mistakes: u32,
    pub timer: Timer,
}

impl Scoreboard {
    pub fn new() -> Self {
        Self {
            score: 0,
            mistakes: 0,
            timer: Timer::new(),
        }
    }

    pub fn record_hit(&mut self) {
        self.score += 1;
    }

    pub fn record_miss(&mut self) {
        self.mistakes += 1;
    }

    pub fn reset(&mut self) {
        self.score = 0;
        self.mistakes = 0;
        self.timer.reset();
    }

    pub fn start_timing(&mut self, now: Instant) {
        self.timer.start(now);
    }

    pub fn elapsed(&self, now: Instant) -> f64 {
        self.timer.elapsed(now, self.mistakes)
    }
}
