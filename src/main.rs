mod game;
mod render;
mod settings;
mod ui;

use crossterm::{cursor, execute, terminal};
use std::io;

use settings::Settings;

fn main() -> io::Result<()> {
    let settings = Settings::load();
    let mut stdout = io::stdout();

    terminal::enable_raw_mode()?;
    execute!(
        stdout,
        terminal::EnterAlternateScreen,
        cursor::Hide,
        terminal::Clear(terminal::ClearType::All)
    )?;

    let result = ui::run_game(&mut stdout, &settings);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    result
}
