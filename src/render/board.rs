use crossterm::style::{Color, Stylize};
use crossterm::{cursor, execute};
use std::io::{self, Write};
use std::time::Instant;

use crate::game::{Banner, BannerKind, Session, BOARD_HEIGHT, BOARD_WIDTH, EMPTY};

use super::{centered, color_for, draw_title, CELL_H, CELL_W, LEFT_PAD};

const BLOCK: &str = "████████";

fn banner_color(kind: BannerKind) -> Color {
    match kind {
        BannerKind::Countdown(_) => Color::Yellow,
        BannerKind::Start => Color::Green,
        BannerKind::GameOver => Color::Red,
    }
}

fn draw_side_panel(
    stdout: &mut io::Stdout,
    session: &Session,
    line: usize,
    now: Instant,
) -> io::Result<()> {
    match line {
        1 => write!(stdout, "  Score: {}", session.scoreboard.score),
        3 => write!(stdout, "  Mistakes: {}", session.scoreboard.mistakes),
        5 => {
            let (sec, tenth) = session
                .scoreboard
                .timer
                .display(now, session.scoreboard.mistakes);
            write!(stdout, "  Time: {}:{}", sec, tenth)
        }
        7 => write!(
            stdout,
            "{}",
            "  space: end / restart".with(Color::DarkGrey)
        ),
        _ => Ok(()),
    }
}

pub fn draw(
    stdout: &mut io::Stdout,
    session: &Session,
    now: Instant,
    lane_hints: bool,
) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0))?;
    draw_title(stdout)?;

    let inner_w = BOARD_WIDTH * CELL_W;
    let banner: Option<&Banner> = session.banner.as_ref().filter(|b| b.visible(now));
    let banner_line = BOARD_HEIGHT * CELL_H / 2 - 1;

    write!(stdout, "{:LEFT_PAD$}╔", "")?;
    for _ in 0..inner_w {
        write!(stdout, "═")?;
    }
    write!(stdout, "╗\x1b[K\r\n")?;

    for line in 0..BOARD_HEIGHT * CELL_H {
        let row = line / CELL_H;
        write!(stdout, "{:LEFT_PAD$}║", "")?;
        match banner {
            Some(b) if line == banner_line => {
                let text = centered(&b.text(), inner_w);
                write!(stdout, "{}", text.as_str().with(banner_color(b.kind)))?;
            }
            _ => {
                for col in 0..BOARD_WIDTH {
                    let marker = session.grid.marker(col, row);
                    if marker == EMPTY {
                        write!(stdout, "{:CELL_W$}", "")?;
                    } else {
                        write!(stdout, "{}", BLOCK.with(color_for(marker)))?;
                    }
                }
            }
        }
        write!(stdout, "║")?;
        draw_side_panel(stdout, session, line, now)?;
        write!(stdout, "\x1b[K\r\n")?;
    }

    write!(stdout, "{:LEFT_PAD$}╚", "")?;
    for _ in 0..inner_w {
        write!(stdout, "═")?;
    }
    write!(stdout, "╝\x1b[K\r\n")?;

    if lane_hints {
        write!(stdout, "{:LEFT_PAD$} ", "")?;
        for symbol in ["←", "↓", "→"] {
            let hint = centered(symbol, CELL_W);
            write!(stdout, "{}", hint.as_str().with(Color::DarkGrey))?;
        }
        write!(stdout, "\x1b[K\r\n")?;
    }

    write!(stdout, "\x1b[J")?;
    stdout.flush()?;
    Ok(())
}
