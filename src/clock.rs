// Copyright (c) 2026 rezky_nightky

/// Nominal seconds per rendered frame.
pub const FRAME_STEP: f64 = 0.016;

/// Animation time. Advances a fixed step per frame rather than following the
/// wall clock, so slow frames slow the animation down instead of skipping it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationClock {
    elapsed: f64,
}

impl AnimationClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) -> f64 {
        self.elapsed += FRAME_STEP;
        self.elapsed
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }
}
