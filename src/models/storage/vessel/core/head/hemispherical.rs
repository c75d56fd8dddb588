use std::f64::consts::PI;

use super::elliptical::cap_volume;

pub(super) fn end_volume(diameter: f64, level: f64) -> f64 {
    let r = 0.5 * diameter;
    cap_volume(r, r, r, level.min(r))
}

/// Zone area of a hemisphere grows linearly with height.
pub(super) fn end_area(diameter: f64, level: f64) -> f64 {
    PI * diameter * level.min(0.5 * diameter)
}

/// The two hemispheres of a horizontal vessel together form a sphere.
pub(super) fn pair_volume(diameter: f64, level: f64) -> f64 {
    let r = 0.5 * diameter;
    cap_volume(r, r, r, level.min(diameter))
}

pub(super) fn pair_area(diameter: f64, level: f64) -> f64 {
    PI * diameter * level.min(diameter)
}
