// Copyright (c) 2026 rezky_nightky

use std::f32::consts::TAU;

pub const DEFAULT_HEART_POINTS: usize = 200;

const DENOM_OFFSET: f32 = 1.4;
const CURVE_SCALE: f32 = 40.0;

/// A sample of the heart curve in curve-native units, centered on the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TargetPoint {
    pub x: f32,
    pub y: f32,
}

/// Samples `n + 1` points along the heart outline. The last point repeats the
/// first so the outline is closed.
pub fn heart_points(n: usize) -> Vec<TargetPoint> {
    if n == 0 {
        return vec![TargetPoint { x: 0.0, y: 0.0 }];
    }

    (0..=n)
        .map(|i| {
            let angle = (i % n) as f32 / n as f32 * TAU;
            let (sin, cos) = angle.sin_cos();
            // sin >= -1 keeps the denominator >= 0.4
            let r = sin * cos.abs().sqrt() / (sin + DENOM_OFFSET) * CURVE_SCALE;
            TargetPoint {
                x: r * cos,
                y: -r * sin,
            }
        })
        .collect()
}
