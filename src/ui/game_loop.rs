use crossterm::event::{self, KeyCode};
use crossterm::{execute, terminal};
use std::io;
use std::time::Instant;

use crate::game::Session;
use crate::render;
use crate::settings::Settings;

use super::input::{compute_timeout, decode_game_key, read_key};

/// The event loop: fire due callbacks, redraw, then sleep in `poll` until
/// the next deadline or a key press. Returns when the player quits.
pub fn run_game(stdout: &mut io::Stdout, settings: &Settings) -> io::Result<()> {
    let mut session = Session::new(settings, Instant::now());
    execute!(stdout, terminal::Clear(terminal::ClearType::All))?;

    loop {
        let now = Instant::now();
        session.run_due(now);
        render::draw(stdout, &session, now, settings.lane_hints)?;

        if event::poll(compute_timeout(&session, now))? {
            if let Some(code) = read_key()? {
                match code {
                    KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(()),
                    _ => {
                        if let Some(key) = decode_game_key(code) {
                            session.handle_key(key, Instant::now());
                        }
                    }
                }
            }
        }
    }
}
