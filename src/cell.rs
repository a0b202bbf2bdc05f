// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

/// One terminal cell as the writer will emit it. `None` colors fall back to
/// the terminal defaults (monochrome mode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
}

impl Cell {
    pub fn blank(bg: Option<Color>) -> Self {
        Self::glyph(' ', None, bg, false)
    }

    pub fn glyph(ch: char, fg: Option<Color>, bg: Option<Color>, bold: bool) -> Self {
        Self { ch, fg, bg, bold }
    }

    pub fn is_blank(&self) -> bool {
        self.ch == ' '
    }

    /// Style equality, used to batch neighbouring cells into one write.
    pub fn same_style(&self, other: &Cell) -> bool {
        self.fg == other.fg && self.bg == other.bg && self.bold == other.bold
    }
}
