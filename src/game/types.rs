use std::time::{Duration, Instant};

use crossterm::style::Color;

pub const BOARD_WIDTH: usize = 3;
pub const BOARD_HEIGHT: usize = 4;
pub const EMPTY: u8 = 0;
pub const BLOCK_KINDS: u8 = 4;

pub const BLOCK_COLORS: [Color; BLOCK_KINDS as usize] =
    [Color::Cyan, Color::Yellow, Color::Magenta, Color::Green];

pub const SETUP_STEP_DELAY: Duration = Duration::from_millis(1000);
pub const RESTART_GUARD_DELAY: Duration = Duration::from_millis(3000);
pub const CLOCK_TICK_INTERVAL: Duration = Duration::from_millis(10);

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Lane {
    Left,
    Down,
    Right,
}

impl Lane {
    /// The fixed bottom-row cell this lane key strikes.
    pub fn target_cell(self) -> (usize, usize) {
        let row = BOARD_HEIGHT - 1;
        match self {
            Lane::Left => (0, row),
            Lane::Down => (1, row),
            Lane::Right => (2, row),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameKey {
    Lane(Lane),
    Space,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BannerKind {
    Countdown(usize),
    Start,
    GameOver,
}

pub struct Banner {
    pub kind: BannerKind,
    pub shown_at: Instant,
    pub ttl: Option<Duration>,
}

impl Banner {
    pub fn countdown(n: usize, now: Instant) -> Self {
        Self {
            kind: BannerKind::Countdown(n),
            shown_at: now,
            ttl: Some(SETUP_STEP_DELAY),
        }
    }

    pub fn start(now: Instant) -> Self {
        Self {
            kind: BannerKind::Start,
            shown_at: now,
            ttl: Some(SETUP_STEP_DELAY / 2),
        }
    }

    pub fn game_over(now: Instant) -> Self {
        Self {
            kind: BannerKind::GameOver,
            shown_at: now,
            ttl: None,
        }
    }

    pub fn visible(&self, now: Instant) -> bool {
        match self.ttl {
            Some(ttl) => now.duration_since(self.shown_at) < ttl,
            None => true,
        }
    }

    pub fn expires_at(&self) -> Option<Instant> {
        self.ttl.map(|ttl| self.shown_at + ttl)
    }

    pub fn text(&self) -> String {
        match self.kind {
            BannerKind::Countdown(n) => n.to_string(),
            BannerKind::Start => "START!!".to_string(),
            BannerKind::GameOver => "FINISHED!!!".to_string(),
        }
    }
}
