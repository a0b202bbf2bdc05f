// Copyright (c) 2026 rezky_nightky

use crossterm::style::Color;

use crate::canvas::Rgb;
use crate::runtime::{ColorMode, ColorScheme};

/// Colors of one theme, before terminal color-mode reduction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub glyph: Rgb,
    pub background: Rgb,
    pub caption: Rgb,
}

pub fn build_palette(scheme: ColorScheme) -> Palette {
    let (glyph, background, caption) = match scheme {
        ColorScheme::Red => ((255, 75, 75), (26, 26, 46), (255, 140, 140)),
        ColorScheme::Pink => ((255, 105, 180), (24, 16, 32), (255, 182, 217)),
        ColorScheme::Rose => ((232, 120, 140), (40, 20, 36), (250, 200, 210)),
        ColorScheme::Crimson => ((200, 16, 46), (8, 4, 6), (240, 90, 100)),
        ColorScheme::Purple => ((180, 90, 255), (16, 8, 30), (220, 180, 255)),
        ColorScheme::Gold => ((255, 200, 60), (30, 22, 10), (255, 230, 160)),
        ColorScheme::Green => ((60, 230, 110), (4, 12, 6), (170, 255, 190)),
        ColorScheme::Cyan => ((90, 220, 255), (6, 16, 26), (190, 240, 255)),
        ColorScheme::Snow => ((235, 240, 250), (28, 32, 40), (255, 255, 255)),
    };
    let rgb = |(r, g, b): (u8, u8, u8)| Rgb::new(r, g, b);
    Palette {
        glyph: rgb(glyph),
        background: rgb(background),
        caption: rgb(caption),
    }
}

fn dist2(a: Rgb, b: Rgb) -> i32 {
    let dr = a.r as i32 - b.r as i32;
    let dg = a.g as i32 - b.g as i32;
    let db = a.b as i32 - b.b as i32;
    dr * dr + dg * dg + db * db
}

fn rgb_to_ansi256(c: Rgb) -> u8 {
    const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    let level = |v: u8| ((v as u16 * 5 + 127) / 255) as u8;
    let (r6, g6, b6) = (level(c.r), level(c.g), level(c.b));
    let cube = Rgb::new(
        CUBE_LEVELS[r6 as usize],
        CUBE_LEVELS[g6 as usize],
        CUBE_LEVELS[b6 as usize],
    );
    let cube_idx = 16 + 36 * r6 + 6 * g6 + b6;

    let avg = ((c.r as u16 + c.g as u16 + c.b as u16) / 3) as u8;
    let (gray_idx, gray) = match avg {
        0..=7 => (16, Rgb::new(0, 0, 0)),
        239..=255 => (231, Rgb::new(255, 255, 255)),
        _ => {
            let step = (avg - 8) / 10;
            let v = 8 + 10 * step;
            (232 + step, Rgb::new(v, v, v))
        }
    };

    if dist2(c, gray) < dist2(c, cube) {
        gray_idx
    } else {
        cube_idx
    }
}

fn rgb_to_color16(c: Rgb) -> Color {
    const TABLE: [(Color, Rgb); 16] = [
        (Color::Black, Rgb::new(0, 0, 0)),
        (Color::DarkGrey, Rgb::new(128, 128, 128)),
        (Color::Grey, Rgb::new(192, 192, 192)),
        (Color::White, Rgb::new(255, 255, 255)),
        (Color::DarkRed, Rgb::new(128, 0, 0)),
        (Color::Red, Rgb::new(255, 0, 0)),
        (Color::DarkGreen, Rgb::new(0, 128, 0)),
        (Color::Green, Rgb::new(0, 255, 0)),
        (Color::DarkBlue, Rgb::new(0, 0, 128)),
        (Color::Blue, Rgb::new(0, 0, 255)),
        (Color::DarkCyan, Rgb::new(0, 128, 128)),
        (Color::Cyan, Rgb::new(0, 255, 255)),
        (Color::DarkMagenta, Rgb::new(128, 0, 128)),
        (Color::Magenta, Rgb::new(255, 0, 255)),
        (Color::DarkYellow, Rgb::new(128, 128, 0)),
        (Color::Yellow, Rgb::new(255, 255, 0)),
    ];

    TABLE
        .iter()
        .min_by_key(|(_, rgb)| dist2(c, *rgb))
        .map(|(color, _)| *color)
        .unwrap_or(Color::White)
}

/// Reduces `c` to what the terminal can show. `None` leaves the terminal's
/// default color in place.
pub fn terminal_color(c: Rgb, mode: ColorMode) -> Option<Color> {
    match mode {
        ColorMode::Mono => None,
        ColorMode::Color16 => Some(rgb_to_color16(c)),
        ColorMode::Color256 => Some(Color::AnsiValue(rgb_to_ansi256(c))),
        ColorMode::TrueColor => Some(Color::Rgb {
            r: c.r,
            g: c.g,
            b: c.b,
        }),
    }
}
