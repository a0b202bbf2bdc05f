// Copyright (c) 2026 rezky_nightky

use std::time::{Duration, Instant};

use log::{debug, info};
use rand::{rngs::StdRng, Rng};

pub const FLICKER_INTERVAL: Duration = Duration::from_millis(50);
pub const FLICKERS_PER_CHAR: u8 = 5;
pub const CHAR_PAUSE: Duration = Duration::from_millis(100);

const SCRAMBLE_GLYPHS: [char; 2] = ['0', '1'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Revealing,
    Done,
}

/// Reveals a fixed caption one character at a time. Each character flickers
/// through random binary digits before the real one is committed.
///
/// Driven by [`CaptionTypewriter::poll`] with the current instant; every
/// elapsed deadline is replayed in order, so a late poll catches up instead
/// of skipping steps.
pub struct CaptionTypewriter {
    text: Vec<char>,
    display: String,
    visible: bool,
    phase: Phase,
    position: usize,
    iteration: u8,
    next_step: Option<Instant>,
    rng: StdRng,
}

impl CaptionTypewriter {
    pub fn new(text: &str, rng: StdRng) -> Self {
        Self {
            text: text.chars().collect(),
            display: String::new(),
            visible: false,
            phase: Phase::Idle,
            position: 0,
            iteration: 0,
            next_step: None,
            rng,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Number of committed characters.
    pub fn revealed(&self) -> usize {
        self.position
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_step
    }

    /// Starts the reveal. Only the first call has any effect.
    pub fn trigger(&mut self, now: Instant) -> bool {
        if self.phase != Phase::Idle {
            return false;
        }
        self.visible = true;
        if self.text.is_empty() {
            self.phase = Phase::Done;
            return true;
        }
        self.phase = Phase::Revealing;
        self.next_step = Some(now + FLICKER_INTERVAL);
        info!("caption reveal started ({} chars)", self.text.len());
        true
    }

    /// Runs every step due at `now`. Returns true if the display changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        let mut changed = false;
        while let Some(due) = self.next_step {
            if due > now {
                break;
            }
            self.step(due);
            changed = true;
        }
        changed
    }

    /// Pushes the pending deadline back, e.g. while the animation is paused.
    pub fn shift(&mut self, by: Duration) {
        if let Some(due) = self.next_step.as_mut() {
            *due += by;
        }
    }

    /// Restores the idle state for a new run of the animation.
    pub fn reset(&mut self) {
        self.display.clear();
        self.visible = false;
        self.phase = Phase::Idle;
        self.position = 0;
        self.iteration = 0;
        self.next_step = None;
    }

    fn step(&mut self, due: Instant) {
        self.iteration += 1;

        if self.iteration < FLICKERS_PER_CHAR {
            let glyph = SCRAMBLE_GLYPHS[self.rng.random_range(0..SCRAMBLE_GLYPHS.len())];
            self.display.clear();
            self.display.extend(self.text[..self.position].iter());
            self.display.push(glyph);
            self.display.extend(self.text[self.position + 1..].iter());
            self.next_step = Some(due + FLICKER_INTERVAL);
            return;
        }

        self.display.clear();
        self.display.extend(self.text.iter());
        self.position += 1;
        self.iteration = 0;

        if self.position >= self.text.len() {
            self.phase = Phase::Done;
            self.next_step = None;
            info!("caption reveal finished");
        } else {
            debug!("caption char {}/{}", self.position, self.text.len());
            self.next_step = Some(due + CHAR_PAUSE + FLICKER_INTERVAL);
        }
    }
}
