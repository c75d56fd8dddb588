//! Spherical tank: a single closed surface, no shell/head split.

use std::f64::consts::PI;

/// Volume of the spherical cap of height `level`.
pub(super) fn volume(diameter: f64, level: f64) -> f64 {
    let h = level.clamp(0.0, diameter);
    PI / 6.0 * h * (3.0 * h * (diameter - h) + h * h)
}

/// Area of the spherical zone of height `level`.
pub(super) fn area(diameter: f64, level: f64) -> f64 {
    PI * diameter * level.clamp(0.0, diameter)
}
