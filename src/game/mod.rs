mod moves;
mod ticks;

pub mod grid;
pub mod sched;
pub mod scoreboard;
pub mod timer;
pub mod types;
pub use types::*;

#[cfg(test)]
mod tests;

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::grid::Grid;
use crate::game::sched::{Callback, TimerQueue};
use crate::game::scoreboard::Scoreboard;
use crate::settings::Settings;

/// The session state machine. Cycles restart -> setup -> active play ->
/// ended -> restart for the life of the process, driven by the scheduled
/// callbacks in `pending` and by key input.
pub struct Session {
    pub grid: Grid,
    pub scoreboard: Scoreboard,
    pub active_game: bool,
    pub setup_rows: usize,
    pub banner: Option<Banner>,
    is_restarting: bool,
    pending: TimerQueue,
    rng: StdRng,
}

impl Session {
    pub fn new(settings: &Settings, now: Instant) -> Self {
        let rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut session = Self {
            grid: Grid::new(),
            scoreboard: Scoreboard::new(),
            active_game: false,
            setup_rows: 0,
            banner: None,
            is_restarting: false,
            pending: TimerQueue::new(),
            rng,
        };
        session.end_game(now);
        session.restart(now);
        session
    }

    /// Begin a new round. Suppressed while a restart sequence is already in
    /// flight; the guard clears `RESTART_GUARD_DELAY` after it was set.
    pub fn restart(&mut self, now: Instant) {
        if self.is_restarting {
            return;
        }
        self.is_restarting = true;

        self.banner = None;
        self.setup_rows = 0;
        self.scoreboard.reset();
        self.active_game = true;

        self.setup_step(now);

        self.pending
            .push_after(now, RESTART_GUARD_DELAY, Callback::ClockTick);
        self.pending
            .push_after(now, RESTART_GUARD_DELAY, Callback::ClearRestartGuard);
    }

    pub fn end_game(&mut self, now: Instant) {
        self.active_game = false;
        self.banner = Some(Banner::game_over(now));
        for row in 0..BOARD_HEIGHT {
            self.grid.clear_row(row);
        }
    }

    /// Drop the bottom row, let the rest fall, and spawn a fresh block at
    /// the top of a random lane.
    fn advance_board(&mut self) {
        self.grid.advance();
        let col = self.rng.gen_range(0..BOARD_WIDTH);
        let marker = self.rng.gen_range(1..=BLOCK_KINDS);
        self.grid.place(col, 0, marker);
    }

    pub fn is_restarting(&self) -> bool {
        self.is_restarting
    }
}
