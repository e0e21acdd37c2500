use std::time::Instant;

use super::{GameKey, Lane, Session};

impl Session {
    /// Strike a lane. HIT when the lane's bottom cell holds a block: the
    /// board advances and the score goes up. MISS otherwise: one more
    /// mistake, which charges half a second against the clock.
    pub fn do_move(&mut self, lane: Lane) -> bool {
        let (col, row) = lane.target_cell();
        if self.grid.is_occupied(col, row) {
            self.advance_board();
            self.scoreboard.record_hit();
            true
        } else {
            self.scoreboard.record_miss();
            false
        }
    }

    pub fn handle_key(&mut self, key: GameKey, now: Instant) {
        if self.active_game && !self.time_up(now) {
            match key {
                GameKey::Lane(lane) => {
                    self.do_move(lane);
                }
                GameKey::Space => {
                    // Early quit, ignored during the restart window.
                    if !self.is_restarting() {
                        self.end_game(now);
                    }
                }
            }
        } else if key == GameKey::Space && !self.active_game {
            self.restart(now);
        }
    }
}
