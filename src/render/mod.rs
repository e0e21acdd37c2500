mod board;

pub use board::draw;

use crossterm::style::{Color, Stylize};
use std::io::{self, Write};

use crate::game::BLOCK_COLORS;

pub(crate) const LEFT_PAD: usize = 6;
pub(crate) const CELL_W: usize = 8;
pub(crate) const CELL_H: usize = 2;

pub(crate) fn color_for(marker: u8) -> Color {
    BLOCK_COLORS[(marker - 1) as usize]
}

pub(crate) fn centered(text: &str, inner_w: usize) -> String {
    let pad = inner_w.saturating_sub(text.chars().count());
    let left = pad / 2;
    format!("{:ls$}{}{:rs$}", "", text, "", ls = left, rs = pad - left)
}

pub(crate) fn draw_title(stdout: &mut io::Stdout) -> io::Result<()> {
    const LETTERS: [(Color, [&str; 6]); 6] = [
        // S
        (Color::Red, [
            " █████╗",
            "██╔═══╝",
            "╚████╗ ",
            " ╚══██╗",
            "█████╔╝",
            "╚════╝ ",
        ]),
        // T
        (Color::DarkYellow, [
            "██████╗",
            "╚═██╔═╝",
            "  ██║  ",
            "  ██║  ",
            "  ██║  ",
            "  ╚═╝  ",
        ]),
        // R
        (Color::Yellow, [
            "█████╗ ",
            "██╔═██╗",
            "█████╔╝",
            "██╔═██╗",
            "██║ ██║",
            "╚═╝ ╚═╝",
        ]),
        // I
        (Color::Green, [
            "██╗",
            "██║",
            "██║",
            "██║",
            "██║",
            "╚═╝",
        ]),
        // K
        (Color::Blue, [
            "██╗ ██╗",
            "██║██╔╝",
            "████╔╝ ",
            "██╔██╗ ",
            "██║╚██╗",
            "╚═╝ ╚═╝",
        ]),
        // E
        (Color::Magenta, [
            "██████╗",
            "██╔═══╝",
            "█████╗ ",
            "██╔══╝ ",
            "██████╗",
            "╚═════╝",
        ]),
    ];

    for row in 0..6 {
        write!(stdout, "  ")?;
        for (color, letter) in &LETTERS {
            write!(stdout, "{}", letter[row].with(*color))?;
        }
        write!(stdout, "\x1b[K\r\n")?;
    }
    write!(stdout, "\r\n")?;
    Ok(())
}
