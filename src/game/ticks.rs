use std::time::Instant;

use super::{
    Banner, Session, BOARD_HEIGHT, CLOCK_TICK_INTERVAL, SETUP_STEP_DELAY,
};
use crate::game::sched::Callback;
use crate::game::timer::{TIME_LIMIT_SECS, TIME_LIMIT_SLACK};

impl Session {
    /// Fire every due callback, oldest deadline first, then drop an expired
    /// banner. Handlers re-check the session flags, so callbacks left over
    /// from before an end/restart transition fall through as no-ops.
    pub fn run_due(&mut self, now: Instant) {
        while let Some(callback) = self.pending.pop_due(now) {
            match callback {
                Callback::SetupStep => self.setup_step(now),
                Callback::ClockTick => self.clock_tick(now),
                Callback::ClearRestartGuard => self.is_restarting = false,
            }
        }
        if let Some(banner) = &self.banner {
            if !banner.visible(now) {
                self.banner = None;
            }
        }
    }

    /// Earliest instant at which `run_due` has work: a pending callback or
    /// a banner that needs taking down.
    pub fn next_deadline(&self) -> Option<Instant> {
        let queued = self.pending.next_deadline();
        let banner = self.banner.as_ref().and_then(|b| b.expires_at());
        match (queued, banner) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (deadline, None) => deadline,
            (None, deadline) => deadline,
        }
    }

    /// One step of the setup phase: flash the countdown, place the next
    /// starting row, and come back in a second. After `BOARD_HEIGHT` steps
    /// the board is full and the chain stops rescheduling itself.
    pub(super) fn setup_step(&mut self, now: Instant) {
        if self.setup_rows < BOARD_HEIGHT && self.active_game {
            let remaining = BOARD_HEIGHT - 1 - self.setup_rows;
            self.banner = Some(if remaining == 0 {
                Banner::start(now)
            } else {
                Banner::countdown(remaining, now)
            });
            self.setup_rows += 1;
            self.advance_board();
            self.pending
                .push_after(now, SETUP_STEP_DELAY, Callback::SetupStep);
        }
    }

    /// The active-phase clock: starts timing on its first firing and then
    /// keeps ticking until time runs out or the game ends.
    pub(super) fn clock_tick(&mut self, now: Instant) {
        if !self.scoreboard.timer.is_running() {
            self.scoreboard.start_timing(now);
        }
        if !self.time_up(now) && self.active_game {
            self.pending
                .push_after(now, CLOCK_TICK_INTERVAL, Callback::ClockTick);
        } else if self.active_game {
            self.end_game(now);
        }
    }

    pub fn time_up(&self, now: Instant) -> bool {
        self.scoreboard.elapsed(now) >= TIME_LIMIT_SECS + TIME_LIMIT_SLACK
    }
}
