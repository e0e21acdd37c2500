use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;
use std::time::{Duration, Instant};

use crate::game::{GameKey, Lane, Session};

fn force_quit() -> io::Error {
    io::Error::new(io::ErrorKind::Interrupted, "force quit")
}

pub(crate) fn read_key() -> io::Result<Option<KeyCode>> {
    if let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event::read()? {
        if kind != KeyEventKind::Press {
            return Ok(None);
        }
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return Err(force_quit());
        }
        Ok(Some(code))
    } else {
        Ok(None)
    }
}

/// Map a terminal key to a game key; anything else is ignored.
pub(crate) fn decode_game_key(code: KeyCode) -> Option<GameKey> {
    match code {
        KeyCode::Left => Some(GameKey::Lane(Lane::Left)),
        KeyCode::Down => Some(GameKey::Lane(Lane::Down)),
        KeyCode::Right => Some(GameKey::Lane(Lane::Right)),
        KeyCode::Char(' ') => Some(GameKey::Space),
        _ => None,
    }
}

/// Poll timeout: sleep until the session's next scheduled callback or
/// banner expiry; an idle (ended) session just waits on input.
pub(crate) fn compute_timeout(session: &Session, now: Instant) -> Duration {
    match session.next_deadline() {
        Some(deadline) => deadline.saturating_duration_since(now),
        None => Duration::from_secs(1),
    }
}
