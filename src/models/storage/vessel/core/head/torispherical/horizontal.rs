//! Torispherical head on a horizontal shell.
//!
//! Liquid height `δ` is measured in diameters from the bottom of the shell. The
//! head is sliced by horizontal planes: each slice at height `x` meets the dish
//! in a circular segment (only when `|½ − x| < b1`) and the knuckle in a region
//! whose axial extent is integrated across the slice.

use crate::{
    models::storage::vessel::HeadFactors,
    support::quadrature::{QuadratureConfig, integrate_or_zero},
};

use super::super::super::{arccos, root};
use super::Profile;

/// Volume of one head filled to `level` above the bottom of the shell.
pub(in super::super) fn side_volume(
    diameter: f64,
    factors: &HeadFactors,
    level: f64,
    q: &QuadratureConfig,
) -> f64 {
    if level <= 0.0 {
        return 0.0;
    }
    let profile = Profile::new(factors);
    let delta = level.min(diameter) / diameter;
    let slice = |x: f64| profile.dish_slice(x) + profile.knuckle_slice(x, q);
    diameter.powi(3) * integrate_or_zero(slice, 0.0, delta, q)
}

/// Surface of one head wetted to `level` above the bottom of the shell.
pub(in super::super) fn side_area(
    diameter: f64,
    factors: &HeadFactors,
    level: f64,
    q: &QuadratureConfig,
) -> f64 {
    if level <= 0.0 {
        return 0.0;
    }
    let profile = Profile::new(factors);
    let delta = level.min(diameter) / diameter;
    diameter * diameter * (profile.wetted_dish(delta, q) + profile.wetted_knuckle(delta, q))
}

impl Profile {
    fn in_dish_band(&self, x: f64) -> bool {
        (0.5 - self.b1) < x && x < (0.5 + self.b1)
    }

    /// Area of the slice at height `x` that lies in the dish.
    fn dish_slice(&self, x: f64) -> f64 {
        if !self.in_dish_band(x) {
            return 0.0;
        }
        let p = root(self.fd * self.fd - (0.5 - x) * (0.5 - x));
        let c = self.fd - self.a1;
        p * p * arccos(c / p) - c * root(p * p - c * c)
    }

    /// Area of the slice at height `x` that lies in the knuckle.
    fn knuckle_slice(&self, x: f64, q: &QuadratureConfig) -> f64 {
        let fk = self.fk;
        let offset = 0.5 - x;
        let half_chord = root(0.25 - offset * offset);
        let rise = |b: f64| {
            let r = (b * b + offset * offset).sqrt();
            root(fk * fk - ((0.5 - fk) - r) * ((0.5 - fk) - r))
        };

        if self.in_dish_band(x) {
            let junction = self.knuckle_radius(self.a1);
            let dish_chord = root(junction * junction - offset * offset);
            2.0 * (integrate_or_zero(rise, dish_chord, half_chord, q)
                + dish_chord * (self.a2 - self.a1))
        } else {
            2.0 * integrate_or_zero(rise, 0.0, half_chord, q)
        }
    }

    /// Wetted dish surface at fill fraction `delta`.
    fn wetted_dish(&self, delta: f64, q: &QuadratureConfig) -> f64 {
        let fd = self.fd;
        let band = self.b1;
        let strip = |x: f64| 2.0 * fd * arccos((0.5 - delta) / self.dish_radius(x));

        if delta <= 0.5 - band {
            0.0
        } else if delta < 0.5 {
            let a0 = fd - root(fd * fd - (0.5 - delta) * (0.5 - delta));
            integrate_or_zero(strip, a0, self.a1, q)
        } else if delta < 0.5 + band {
            let a0 = fd - root(fd * fd - (delta - 0.5) * (delta - 0.5));
            integrate_or_zero(strip, a0, self.a1, q) + self.dish_area(a0)
        } else {
            self.dish_area(self.a1)
        }
    }

    /// Wetted knuckle surface at fill fraction `delta`.
    fn wetted_knuckle(&self, delta: f64, q: &QuadratureConfig) -> f64 {
        let fk = self.fk;
        let band = self.b1;
        let strip = |x: f64| {
            let rise = self.knuckle_rise(x);
            let beta = (0.5 - fk) + rise;
            2.0 * fk * beta * arccos((0.5 - delta.min(0.5 + beta)) / beta) / rise
        };

        if delta < 0.5 - band {
            let a0 = self.a2 - root(fk * fk - (fk - delta) * (fk - delta));
            integrate_or_zero(strip, a0, self.a2, q)
        } else if delta < 0.5 + band {
            integrate_or_zero(strip, self.a1, self.a2, q)
        } else {
            let dry = 1.0 - delta;
            let a0 = self.a2 - root(fk * fk - (fk - dry) * (fk - dry));
            self.knuckle_area(a0) + integrate_or_zero(strip, a0, self.a2, q)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use super::super::{end_area, end_volume};

    const D: f64 = 2.0;

    fn quadrature() -> QuadratureConfig {
        QuadratureConfig::default()
    }

    #[test]
    fn full_head_matches_upright_head() {
        let q = quadrature();
        for factors in [HeadFactors::TORISPHERICAL, HeadFactors::ELLIPTICAL] {
            let upright_volume = end_volume(D, &factors, f64::INFINITY, &q);
            let upright_area = end_area(D, &factors, f64::INFINITY);

            assert_relative_eq!(side_volume(D, &factors, D, &q), upright_volume, epsilon = 1e-6);
            assert_relative_eq!(side_area(D, &factors, D, &q), upright_area, epsilon = 1e-6);
        }
    }

    #[test]
    fn flanged_and_dished_reference_values() {
        let q = quadrature();
        let factors = HeadFactors::TORISPHERICAL;

        assert_relative_eq!(side_volume(D, &factors, D, &q), 0.647_992_04, epsilon = 1e-6);
        assert_relative_eq!(side_area(D, &factors, 0.7, &q), 1.206_004_21, epsilon = 1e-6);
        assert_relative_eq!(side_area(D, &factors, 1.3, &q), 2.516_327_11, epsilon = 1e-6);
    }

    #[test]
    fn half_full_is_half() {
        let q = quadrature();
        let factors = HeadFactors::TORISPHERICAL;

        let volume = side_volume(D, &factors, D, &q);
        let area = side_area(D, &factors, D, &q);
        assert_relative_eq!(side_volume(D, &factors, 0.5 * D, &q), 0.5 * volume, epsilon = 1e-6);
        assert_relative_eq!(side_area(D, &factors, 0.5 * D, &q), 0.5 * area, epsilon = 1e-6);
    }

    #[test]
    fn wetted_area_is_symmetric_about_the_axis() {
        let q = quadrature();
        let factors = HeadFactors::ELLIPTICAL;
        let full = side_area(D, &factors, D, &q);

        for level in [0.1, 0.35, 0.7, 0.95] {
            let below = side_area(D, &factors, level, &q);
            let above = side_area(D, &factors, D - level, &q);
            assert_relative_eq!(below + above, full, epsilon = 1e-6);
        }
    }

    #[test]
    fn monotone_in_level() {
        let q = quadrature();
        let factors = HeadFactors::TORISPHERICAL;
        let mut last = (0.0, 0.0);
        for i in 1..=40 {
            let level = D * f64::from(i) / 40.0;
            let volume = side_volume(D, &factors, level, &q);
            let area = side_area(D, &factors, level, &q);
            assert!(volume >= last.0 - 1e-9, "volume drops at {level}");
            assert!(area >= last.1 - 1e-9, "area drops at {level}");
            last = (volume, area);
        }
    }

    #[test]
    fn empty_head() {
        let q = quadrature();
        let factors = HeadFactors::TORISPHERICAL;

        assert_eq!(side_volume(D, &factors, 0.0, &q), 0.0);
        assert_eq!(side_area(D, &factors, 0.0, &q), 0.0);
    }
}
