// Copyright (c) 2026 rezky_nightky

use rand::Rng;

use crate::canvas::{Canvas, Rgb, Surface};
use crate::shape::TargetPoint;

/// Spawn height, just above the visible top edge.
pub const TOP_OFFSET: f32 = -20.0;

const SPEED_MIN: f32 = 2.0;
const SPEED_MAX: f32 = 4.0;
const OPACITY_MIN: f32 = 0.1;
const OPACITY_MAX: f32 = 0.6;

/// Curve units to reference-width pixels.
const HEART_ZOOM: f32 = 8.0;
const SNAP_DISTANCE: f32 = 2.0;
const EASE: f32 = 0.05;
const FADE_IN: f32 = 0.01;

const FONT_MIN: f32 = 8.0;
const FONT_MAX: f32 = 12.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Target {
    pub point: TargetPoint,
    pub index: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub opacity: f32,
    pub glyph: char,
    target: Option<Target>,
}

impl Particle {
    /// A falling particle placed anywhere on the surface, so the first frame
    /// is already populated.
    pub fn new<R: Rng + ?Sized>(surface: Surface, rng: &mut R) -> Self {
        let mut p = Self {
            x: 0.0,
            y: 0.0,
            speed: SPEED_MIN,
            opacity: OPACITY_MIN,
            glyph: if rng.random_bool(0.5) { '0' } else { '1' },
            target: None,
        };
        p.reset(surface, rng);
        p.y = random_below(rng, surface.height);
        p
    }

    pub fn reset<R: Rng + ?Sized>(&mut self, surface: Surface, rng: &mut R) {
        self.x = random_below(rng, surface.width);
        self.y = TOP_OFFSET;
        self.speed = rng.random_range(SPEED_MIN..SPEED_MAX);
        self.opacity = rng.random_range(OPACITY_MIN..OPACITY_MAX);
        self.target = None;
    }

    pub fn set_target(&mut self, point: TargetPoint, index: usize, surface: Surface) {
        let scale = surface.scale();
        let (cx, cy) = surface.center();
        self.target = Some(Target {
            point,
            index,
            x: point.x * HEART_ZOOM * scale + cx,
            y: point.y * HEART_ZOOM * scale + cy,
        });
    }

    pub fn target(&self) -> Option<&Target> {
        self.target.as_ref()
    }

    pub fn is_falling(&self) -> bool {
        self.target.is_none()
    }

    pub fn is_settled(&self) -> bool {
        self.target
            .is_some_and(|t| t.x == self.x && t.y == self.y && self.opacity >= 1.0)
    }

    pub fn update<R: Rng + ?Sized>(&mut self, surface: Surface, rng: &mut R) {
        let Some(t) = self.target else {
            self.y += self.speed;
            if self.y > surface.height {
                self.reset(surface, rng);
            }
            return;
        };

        let dx = t.x - self.x;
        let dy = t.y - self.y;
        if dx.hypot(dy) < SNAP_DISTANCE {
            self.x = t.x;
            self.y = t.y;
            self.opacity = 1.0;
        } else {
            self.x += dx * EASE;
            self.y += dy * EASE;
            self.opacity = (self.opacity + FADE_IN).min(1.0);
        }
    }

    pub fn font_size(surface: Surface) -> f32 {
        (FONT_MAX * surface.scale()).min(FONT_MAX).max(FONT_MIN)
    }

    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, surface: Surface, color: Rgb) {
        let mut buf = [0u8; 4];
        canvas.fill_text(
            self.x,
            self.y,
            Self::font_size(surface),
            color.with_alpha(self.opacity),
            self.glyph.encode_utf8(&mut buf),
        );
    }
}

fn random_below<R: Rng + ?Sized>(rng: &mut R, max: f32) -> f32 {
    if max > 0.0 {
        rng.random_range(0.0..max)
    } else {
        0.0
    }
}
