// Copyright (c) 2026 rezky_nightky

use crate::canvas::{Canvas, Rgb, Rgba, Surface};
use crate::cell::Cell;
use crate::frame::Frame;
use crate::palette::terminal_color;
use crate::runtime::ColorMode;

/// Pixel size of one terminal cell on the virtual surface.
pub const CELL_WIDTH_PX: f32 = 8.0;
pub const CELL_HEIGHT_PX: f32 = 16.0;

/// Rows kept free under the surface for the caption.
pub const CAPTION_ROWS: u16 = 2;

/// Glyphs at this font size or larger are drawn bold once fully opaque.
const BOLD_FONT_SIZE: f32 = 12.0;

/// Placement of the square pixel surface inside the terminal grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Viewport {
    pub origin_col: u16,
    pub origin_row: u16,
    pub cols: u16,
    pub rows: u16,
    pub caption_row: Option<u16>,
}

impl Viewport {
    pub fn fit(term_cols: u16, term_rows: u16) -> Self {
        let reserve = if term_rows > CAPTION_ROWS + 2 {
            CAPTION_ROWS
        } else {
            0
        };
        let usable_rows = term_rows - reserve;

        let side = (term_cols as f32 * CELL_WIDTH_PX).min(usable_rows as f32 * CELL_HEIGHT_PX);
        // whole cells in both directions keep the surface square
        let side = (side / CELL_HEIGHT_PX).floor() * CELL_HEIGHT_PX;
        let cols = ((side / CELL_WIDTH_PX).floor() as u16).min(term_cols);
        let rows = ((side / CELL_HEIGHT_PX).floor() as u16).min(usable_rows);

        let origin_col = (term_cols - cols) / 2;
        let origin_row = (usable_rows - rows) / 2;
        let caption_row = (reserve > 0).then(|| (origin_row + rows + 1).min(term_rows - 1));

        Self {
            origin_col,
            origin_row,
            cols,
            rows,
            caption_row,
        }
    }

    pub fn surface(&self) -> Surface {
        Surface::new(
            self.cols as f32 * CELL_WIDTH_PX,
            self.rows as f32 * CELL_HEIGHT_PX,
        )
    }

    /// Terminal cell covering surface pixel `(x, y)`.
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(u16, u16)> {
        if !(x >= 0.0 && y >= 0.0) {
            return None;
        }
        let col = (x / CELL_WIDTH_PX).floor();
        let row = (y / CELL_HEIGHT_PX).floor();
        if col >= self.cols as f32 || row >= self.rows as f32 {
            return None;
        }
        Some((self.origin_col + col as u16, self.origin_row + row as u16))
    }
}

/// [`Canvas`] that rasterizes onto terminal cells. Alpha is blended over the
/// last background fill; when glyphs collide the most opaque one keeps the
/// cell.
pub struct TerminalCanvas {
    frame: Frame,
    viewport: Viewport,
    mode: ColorMode,
    background: Rgb,
    coverage: Vec<f32>,
}

impl TerminalCanvas {
    pub fn new(term_cols: u16, term_rows: u16, mode: ColorMode, background: Rgb) -> Self {
        let bg = terminal_color(background, mode);
        Self {
            frame: Frame::new(term_cols, term_rows, bg),
            viewport: Viewport::fit(term_cols, term_rows),
            mode,
            background,
            coverage: vec![0.0; term_cols as usize * term_rows as usize],
        }
    }

    pub fn resize(&mut self, term_cols: u16, term_rows: u16) {
        *self = Self::new(term_cols, term_rows, self.mode, self.background);
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Writes `text` centered on the caption row.
    pub fn draw_caption(&mut self, text: &str, color: Rgb) {
        let Some(row) = self.viewport.caption_row else {
            return;
        };
        let width = self.frame.width as usize;
        let chars: Vec<char> = text.chars().take(width).collect();
        let start = (width - chars.len()) / 2;

        let fg = terminal_color(color, self.mode);
        let bg = terminal_color(self.background, self.mode);
        for (i, ch) in chars.into_iter().enumerate() {
            self.frame.set(
                (start + i) as u16,
                row,
                Cell::glyph(ch, fg, bg, true),
            );
        }
    }
}

impl Canvas for TerminalCanvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        self.background = color;
        let bg = terminal_color(color, self.mode);

        let surface = self.viewport.surface();
        if x <= 0.0 && y <= 0.0 && w >= surface.width && h >= surface.height {
            self.frame.clear_with_bg(bg);
            self.coverage.fill(0.0);
            return;
        }

        let (Some((c0, r0)), Some((c1, r1))) = (
            self.viewport.cell_at(x.max(0.0), y.max(0.0)),
            self.viewport
                .cell_at((x + w).min(surface.width) - 1.0, (y + h).min(surface.height) - 1.0),
        ) else {
            return;
        };
        for row in r0..=r1 {
            for col in c0..=c1 {
                self.frame.set(col, row, Cell::blank(bg));
                if let Some(i) = self.frame.index(col, row) {
                    self.coverage[i] = 0.0;
                }
            }
        }
    }

    fn fill_text(&mut self, x: f32, y: f32, font_size: f32, color: Rgba, text: &str) {
        // anchor on the glyph's vertical middle rather than its baseline
        let mid_y = y - font_size / 2.0;
        let bg = terminal_color(self.background, self.mode);

        for (i, ch) in text.chars().enumerate() {
            let gx = x + i as f32 * CELL_WIDTH_PX;
            let Some((col, row)) = self.viewport.cell_at(gx, mid_y) else {
                continue;
            };
            let Some(idx) = self.frame.index(col, row) else {
                continue;
            };
            if color.a <= self.coverage[idx] {
                continue;
            }
            self.coverage[idx] = color.a;

            let shade = self.background.blend(color.rgb, color.a);
            self.frame.set(
                col,
                row,
                Cell::glyph(
                    ch,
                    terminal_color(shade, self.mode),
                    bg,
                    font_size >= BOLD_FONT_SIZE && color.a >= 1.0,
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::style::Color;

    use super::*;

    const BG: Rgb = Rgb::new(0, 0, 0);
    const RED: Rgb = Rgb::new(200, 0, 0);

    #[test]
    fn fit_centers_square_surface() {
        let vp = Viewport::fit(80, 24);
        assert_eq!(
            vp,
            Viewport {
                origin_col: 18,
                origin_row: 0,
                cols: 44,
                rows: 22,
                caption_row: Some(23),
            }
        );
        assert_eq!(vp.surface(), Surface::new(352.0, 352.0));
    }

    #[test]
    fn fit_on_tiny_terminal_has_no_caption_row() {
        let vp = Viewport::fit(10, 3);
        assert_eq!(vp.caption_row, None);
        assert!(vp.cols <= 10 && vp.rows <= 3);
        let vp = Viewport::fit(0, 0);
        assert_eq!(vp.surface(), Surface::new(0.0, 0.0));
    }

    #[test]
    fn fit_keeps_surface_square_when_width_limits() {
        // 31 columns give 248 px, which is not a whole number of rows
        let vp = Viewport::fit(31, 40);
        assert_eq!(vp.surface(), Surface::new(240.0, 240.0));
        assert_eq!((vp.cols, vp.rows), (30, 15));
        assert_eq!(vp.origin_col, 0);
    }

    #[test]
    fn partial_fill_blanks_only_covered_cells() {
        let mut c = TerminalCanvas::new(80, 24, ColorMode::TrueColor, BG);
        for x in [0.0, 8.0, 16.0, 24.0] {
            c.fill_text(x, 30.0, 12.0, RED.with_alpha(1.0), "1");
        }
        c.fill_rect(8.0, 16.0, 16.0, 16.0, BG);

        let row: String = c.frame().row(1)[18..22].iter().map(|cell| cell.ch).collect();
        assert_eq!(row, "1  1");
        assert_eq!(c.frame().get(19, 1).unwrap().fg, None);

        // cleared cells accept fainter glyphs again
        c.fill_text(8.0, 30.0, 12.0, RED.with_alpha(0.2), "0");
        c.fill_text(0.0, 30.0, 12.0, RED.with_alpha(0.2), "0");
        assert_eq!(c.frame().get(19, 1).unwrap().ch, '0');
        assert_eq!(c.frame().get(18, 1).unwrap().ch, '1');
    }

    #[test]
    fn cell_at_maps_pixels_and_drops_outside() {
        let vp = Viewport::fit(80, 24);
        assert_eq!(vp.cell_at(0.0, 0.0), Some((18, 0)));
        assert_eq!(vp.cell_at(17.0, 40.0), Some((20, 2)));
        assert_eq!(vp.cell_at(-1.0, 5.0), None);
        assert_eq!(vp.cell_at(5.0, -20.0), None);
        assert_eq!(vp.cell_at(352.0, 5.0), None);
        assert_eq!(vp.cell_at(5.0, f32::NAN), None);
    }

    #[test]
    fn most_opaque_glyph_wins() {
        let mut c = TerminalCanvas::new(80, 24, ColorMode::TrueColor, BG);
        c.fill_rect(0.0, 0.0, 352.0, 352.0, BG);
        c.fill_text(4.0, 30.0, 12.0, RED.with_alpha(1.0), "1");
        c.fill_text(4.0, 30.0, 12.0, RED.with_alpha(0.3), "0");

        let cell = c.frame().get(18, 1).unwrap();
        assert_eq!(cell.ch, '1');
        assert_eq!(cell.fg, Some(Color::Rgb { r: 200, g: 0, b: 0 }));
        assert!(cell.bold);
    }

    #[test]
    fn faint_glyph_is_blended_over_background() {
        let mut c = TerminalCanvas::new(80, 24, ColorMode::TrueColor, BG);
        c.fill_rect(0.0, 0.0, 352.0, 352.0, BG);
        c.fill_text(4.0, 30.0, 12.0, RED.with_alpha(0.5), "0");
        let cell = c.frame().get(18, 1).unwrap();
        assert_eq!(cell.fg, Some(Color::Rgb { r: 100, g: 0, b: 0 }));
        assert!(!cell.bold);
    }

    #[test]
    fn background_fill_clears_previous_glyphs() {
        let mut c = TerminalCanvas::new(80, 24, ColorMode::TrueColor, BG);
        c.fill_text(4.0, 30.0, 12.0, RED.with_alpha(1.0), "1");
        c.fill_rect(0.0, 0.0, 352.0, 352.0, BG);
        assert_eq!(c.frame().get(18, 1).unwrap().ch, ' ');

        c.fill_text(4.0, 30.0, 12.0, RED.with_alpha(0.2), "0");
        assert_eq!(c.frame().get(18, 1).unwrap().ch, '0');
    }

    #[test]
    fn caption_is_centered_below_surface() {
        let mut c = TerminalCanvas::new(80, 24, ColorMode::Mono, BG);
        c.draw_caption("love", RED);
        let row: String = c.frame().row(23).iter().map(|cell| cell.ch).collect();
        assert_eq!(&row[38..42], "love");
        assert_eq!(c.frame().get(38, 23).unwrap().fg, None);
    }
}
