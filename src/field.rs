// Copyright (c) 2026 rezky_nightky

use log::{debug, info, trace};
use rand::{rngs::StdRng, seq::IteratorRandom};

use crate::canvas::{Canvas, Rgb, Surface};
use crate::clock::AnimationClock;
use crate::particle::Particle;
use crate::shape::{heart_points, TargetPoint, DEFAULT_HEART_POINTS};

/// Clock seconds between two target assignments.
pub const ASSIGN_INTERVAL: f64 = 0.1;
/// Share of assigned points after which the caption starts.
pub const CAPTION_THRESHOLD: f64 = 0.9;

const MIN_PARTICLES: usize = 100;
const MAX_PARTICLES: usize = 300;
const MAX_FALLING_FLOOR: usize = 100;

pub fn initial_particle_count(width: f32) -> usize {
    ((width / 3.0).floor() as usize).clamp(MIN_PARTICLES, MAX_PARTICLES)
}

/// Below this many falling particles a new one is spawned each frame.
pub fn falling_floor(width: f32) -> usize {
    ((width / 8.0).floor() as usize).min(MAX_FALLING_FLOOR)
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub points: usize,
    pub glyph_color: Rgb,
    pub background: Rgb,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            points: DEFAULT_HEART_POINTS,
            glyph_color: Rgb::new(255, 75, 75),
            background: Rgb::new(26, 26, 46),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub assigned: usize,
    pub total: usize,
}

impl Progress {
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            return 1.0;
        }
        self.assigned as f64 / self.total as f64
    }

    pub fn caption_ready(&self) -> bool {
        self.assigned as f64 > self.total as f64 * CAPTION_THRESHOLD
    }
}

/// Owns every particle and the schedule that hands heart points to them.
pub struct ParticleField {
    surface: Surface,
    config: FieldConfig,
    heart: Vec<TargetPoint>,
    particles: Vec<Particle>,
    assigned_points: usize,
    last_assignment: f64,
    clock: AnimationClock,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(surface: Surface, config: FieldConfig, rng: StdRng) -> Self {
        let heart = heart_points(config.points);
        let mut field = Self {
            surface,
            config,
            heart,
            particles: Vec::new(),
            assigned_points: 0,
            last_assignment: 0.0,
            clock: AnimationClock::new(),
            rng,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        let n = initial_particle_count(self.surface.width);
        self.particles.clear();
        self.particles.reserve(n);
        for _ in 0..n {
            self.particles.push(Particle::new(self.surface, &mut self.rng));
        }
        debug!(
            "field populated: {} particles on {}x{} surface",
            n, self.surface.width, self.surface.height
        );
    }

    /// Starts the animation over on the current surface.
    pub fn restart(&mut self) {
        self.assigned_points = 0;
        self.last_assignment = 0.0;
        self.clock = AnimationClock::new();
        self.populate();
        info!("animation restarted");
    }

    pub fn surface(&self) -> Surface {
        self.surface
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn heart_points(&self) -> &[TargetPoint] {
        &self.heart
    }

    pub fn assigned_points(&self) -> usize {
        self.assigned_points
    }

    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    pub fn falling_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_falling()).count()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            assigned: self.assigned_points,
            total: self.heart.len(),
        }
    }

    /// Advances one frame and draws it onto `canvas`.
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) -> Progress {
        let now = self.clock.advance();
        let surface = self.surface;

        canvas.fill_rect(
            0.0,
            0.0,
            surface.width,
            surface.height,
            self.config.background,
        );

        if now - self.last_assignment > ASSIGN_INTERVAL && self.assigned_points < self.heart.len()
        {
            self.assign_next(now);
        }

        let color = self.config.glyph_color;
        for p in &mut self.particles {
            p.update(surface, &mut self.rng);
            p.draw(canvas, surface, color);
        }

        if self.falling_count() < falling_floor(surface.width) {
            self.particles.push(Particle::new(surface, &mut self.rng));
        }

        self.progress()
    }

    /// Hands the next heart point to a random falling particle. Returns false
    /// when every particle is already seeking.
    fn assign_next(&mut self, now: f64) -> bool {
        let index = self.assigned_points;
        let Some(&point) = self.heart.get(index) else {
            return false;
        };

        // linear scan; the field never holds more than a few hundred particles
        let Some(p) = self
            .particles
            .iter_mut()
            .filter(|p| p.is_falling())
            .choose(&mut self.rng)
        else {
            trace!("no falling particle for point {}", index);
            return false;
        };

        p.set_target(point, index, self.surface);
        self.assigned_points += 1;
        self.last_assignment = now;

        trace!(
            "assigned point {}/{} ({:.0}%)",
            self.assigned_points,
            self.heart.len(),
            self.progress().fraction() * 100.0
        );
        if self.assigned_points == self.heart.len() {
            debug!("all {} heart points assigned at t={:.3}", self.heart.len(), now);
        }
        true
    }

    /// Adopts a new surface size and re-centers the heart on it.
    pub fn resize(&mut self, surface: Surface) {
        self.surface = surface;
        for p in &mut self.particles {
            if let Some(t) = p.target().copied() {
                p.set_target(t.point, t.index, surface);
            }
        }
        debug!("field resized to {}x{}", surface.width, surface.height);
    }
}
