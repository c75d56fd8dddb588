use std::f64::consts::PI;

/// Depth of a standard 2:1 ellipsoidal head.
pub(super) fn depth(diameter: f64) -> f64 {
    0.25 * diameter
}

/// Volume of a cap of height `cap` cut from an ellipsoid.
///
/// `x` and `y` are the semi-axes across the cut plane, `z` the semi-axis along
/// the cap height.
pub(super) fn cap_volume(x: f64, y: f64, z: f64, cap: f64) -> f64 {
    PI * x * y * cap * cap * (3.0 * z - cap) / (3.0 * z * z)
}

pub(super) fn end_volume(diameter: f64, level: f64) -> f64 {
    let r = 0.5 * diameter;
    let depth = depth(diameter);
    cap_volume(r, r, depth, level.min(depth))
}

/// Both heads of a horizontal vessel together form one ellipsoid lying on its side.
pub(super) fn pair_volume(diameter: f64, level: f64) -> f64 {
    let r = 0.5 * diameter;
    cap_volume(r, depth(diameter), r, level.min(diameter))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn standard_head_volume() {
        let d: f64 = 2.0;
        assert_relative_eq!(end_volume(d, f64::INFINITY), PI * d.powi(3) / 24.0, epsilon = 1e-12);
        assert_relative_eq!(pair_volume(d, d), PI * d.powi(3) / 12.0, epsilon = 1e-12);
        assert_relative_eq!(pair_volume(d, 1.0), PI * d.powi(3) / 24.0, epsilon = 1e-12);
    }
}
