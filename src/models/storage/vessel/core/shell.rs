//! Partial volume and wetted area of the cylindrical shell.

use std::f64::consts::PI;

use super::{arccos, root};

/// Liquid volume in an upright shell whose bottom tangent line sits `offset` above the datum.
pub(super) fn vertical_volume(diameter: f64, length: f64, offset: f64, level: f64) -> f64 {
    PI * diameter * diameter / 4.0 * wetted_length(length, offset, level)
}

pub(super) fn vertical_area(diameter: f64, length: f64, offset: f64, level: f64) -> f64 {
    PI * diameter * wetted_length(length, offset, level)
}

fn wetted_length(length: f64, offset: f64, level: f64) -> f64 {
    (level - offset).clamp(0.0, length)
}

/// Liquid volume in a shell lying on its side, filled to `level` above its bottom.
pub(super) fn horizontal_volume(diameter: f64, length: f64, level: f64) -> f64 {
    length * segment_area(0.5 * diameter, level)
}

pub(super) fn horizontal_area(diameter: f64, length: f64, level: f64) -> f64 {
    diameter * segment_angle(0.5 * diameter, level) * length
}

/// Area of a circular segment of depth `depth` cut from a circle of radius `radius`.
pub(super) fn segment_area(radius: f64, depth: f64) -> f64 {
    let depth = depth.clamp(0.0, 2.0 * radius);
    let theta = segment_angle(radius, depth);
    theta * radius * radius - (radius - depth) * root(depth * (2.0 * radius - depth))
}

/// Half the central angle subtended by a segment of depth `depth`.
fn segment_angle(radius: f64, depth: f64) -> f64 {
    arccos(1.0 - depth / radius)
}
