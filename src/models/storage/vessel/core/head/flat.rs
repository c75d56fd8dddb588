use std::f64::consts::PI;

use super::super::shell::segment_area;

/// Plate area, wetted as soon as any liquid is present.
pub(super) fn end_area(diameter: f64, level: f64) -> f64 {
    if level > 0.0 {
        PI * diameter * diameter / 4.0
    } else {
        0.0
    }
}

/// Both end plates of a horizontal shell.
pub(super) fn pair_area(diameter: f64, level: f64) -> f64 {
    2.0 * segment_area(0.5 * diameter, level)
}
