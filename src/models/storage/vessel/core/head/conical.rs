use std::f64::consts::{FRAC_PI_2, PI};

use super::super::root;

/// Volume of an upright cone filled to `level` above its apex.
pub(super) fn end_volume(diameter: f64, depth: f64, level: f64) -> f64 {
    if level <= 0.0 || depth <= 0.0 {
        return 0.0;
    }
    let level = level.min(depth);
    let radius = level * 0.5 * diameter / depth;
    PI * level * radius * radius / 3.0
}

/// Lateral area of an upright cone wetted to `level` above its apex.
pub(super) fn end_area(diameter: f64, depth: f64, level: f64) -> f64 {
    if level <= 0.0 || depth <= 0.0 {
        return 0.0;
    }
    let level = level.min(depth);
    let radius = level / depth * 0.5 * diameter;
    PI * radius * (level * level + radius * radius).sqrt()
}

pub(super) fn pair_volume(diameter: f64, depth: f64, level: f64) -> f64 {
    if level <= 0.0 || depth <= 0.0 {
        return 0.0;
    }
    if level < 0.5 * diameter {
        2.0 * section_volume(diameter, depth, level)
    } else {
        let full = PI * diameter * diameter * depth / 12.0;
        2.0 * (full - section_volume(diameter, depth, diameter - level.min(diameter)))
    }
}

/// Volume of one cone lying on its side below a plane `level` above its lowest
/// generator, for `level` up to the axis.
fn section_volume(diameter: f64, depth: f64, level: f64) -> f64 {
    let k = 1.0 - 2.0 * level / diameter;
    if k.abs() < f64::EPSILON {
        return PI * diameter * diameter * depth / 24.0;
    }
    depth * diameter * diameter / 12.0
        * (FRAC_PI_2 - 2.0 * k * root(1.0 - k * k) - k.asin() + k.powi(3) * (1.0 / k).acosh())
}

pub(super) fn pair_area(diameter: f64, depth: f64, level: f64) -> f64 {
    if level <= 0.0 || depth <= 0.0 {
        return 0.0;
    }
    if level < 0.5 * diameter {
        2.0 * section_area(diameter, depth, level)
    } else {
        let full = end_area(diameter, depth, depth);
        2.0 * (full - section_area(diameter, depth, diameter - level.min(diameter)))
    }
}

/// Lateral area of one cone lying on its side, wetted to `level`.
///
/// The lateral surface projects onto the base disk with a constant area
/// factor (slant height over radius), so the wetted part is that factor times
/// the circular segment below the level.
fn section_area(diameter: f64, depth: f64, level: f64) -> f64 {
    let r = 0.5 * diameter;
    let k = 1.0 - level / r;
    r * (r * r + depth * depth).sqrt() * (FRAC_PI_2 - k.asin() - k * root(1.0 - k * k))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const D: f64 = 2.0;
    const DEPTH: f64 = 0.8;

    #[test]
    fn upright_cone() {
        assert_relative_eq!(end_volume(D, DEPTH, 1.0), PI * DEPTH / 3.0, epsilon = 1e-12);
        assert_relative_eq!(end_volume(D, DEPTH, 0.4), PI * DEPTH / 24.0, epsilon = 1e-12);

        let slant = (1.0 + DEPTH * DEPTH).sqrt();
        assert_relative_eq!(end_area(D, DEPTH, 5.0), PI * slant, epsilon = 1e-12);
        assert_eq!(end_area(D, 0.0, 5.0), 0.0);
    }

    #[test]
    fn lying_cone_is_continuous_at_the_axis() {
        let below = pair_volume(D, DEPTH, 1.0 - 1e-9);
        let at = pair_volume(D, DEPTH, 1.0);
        let above = pair_volume(D, DEPTH, 1.0 + 1e-9);
        assert_relative_eq!(below, at, epsilon = 1e-7);
        assert_relative_eq!(above, at, epsilon = 1e-7);
        assert_relative_eq!(at, PI * D * D * DEPTH / 12.0, epsilon = 1e-12);

        let below = pair_area(D, DEPTH, 1.0 - 1e-9);
        let at = pair_area(D, DEPTH, 1.0);
        let above = pair_area(D, DEPTH, 1.0 + 1e-9);
        assert_relative_eq!(below, at, epsilon = 1e-7);
        assert_relative_eq!(above, at, epsilon = 1e-7);
        assert_relative_eq!(at, end_area(D, DEPTH, DEPTH), epsilon = 1e-12);
    }

    #[test]
    fn lying_cone_full() {
        assert_relative_eq!(pair_volume(D, DEPTH, D), 2.0 * PI * DEPTH / 3.0, epsilon = 1e-12);
        assert_relative_eq!(pair_area(D, DEPTH, D), 2.0 * end_area(D, DEPTH, DEPTH), epsilon = 1e-12);
    }
}
