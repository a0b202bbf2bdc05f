// Copyright (c) 2026 rezky_nightky

/// Width the heart and glyph sizes are tuned for.
pub const REFERENCE_WIDTH: f32 = 800.0;

/// Pixel dimensions of the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn scale(&self) -> f32 {
        self.width / REFERENCE_WIDTH
    }

    pub fn center(&self) -> (f32, f32) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn with_alpha(self, a: f32) -> Rgba {
        Rgba {
            rgb: self,
            a: a.clamp(0.0, 1.0),
        }
    }

    /// Composites `fg` at `alpha` over `self`.
    pub fn blend(self, fg: Rgb, alpha: f32) -> Rgb {
        let t = alpha.clamp(0.0, 1.0);
        let mix = |b: u8, f: u8| {
            let b = b as f32;
            let f = f as f32;
            (b + (f - b) * t).round().clamp(0.0, 255.0) as u8
        };
        Rgb {
            r: mix(self.r, fg.r),
            g: mix(self.g, fg.g),
            b: mix(self.b, fg.b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: Rgb,
    pub a: f32,
}

/// Drawing primitives the animation needs from its host.
pub trait Canvas {
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb);

    /// Draws `text` with its baseline at `y`.
    fn fill_text(&mut self, x: f32, y: f32, font_size: f32, color: Rgba, text: &str);
}
