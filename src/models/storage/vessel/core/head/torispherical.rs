//! Torispherical (dished) head.
//!
//! The head is two tangent surfaces of revolution about the shell axis: a
//! spherical dish of radius `fd·D` and a toroidal knuckle of tube radius `fk·D`
//! that blends the dish into the shell. All profile coordinates here are in
//! diameters, with the axial coordinate `x` running from the apex (`x = 0`)
//! through the dish-knuckle junction (`x = a1`) to the tangent line (`x = a2`).
//!
//! Upright partial volumes integrate the cross-sectional area along the axis.
//! Upright wetted areas have closed forms. A horizontal head is cut parallel to
//! its axis, which needs the two-level integration in [`horizontal`].

mod horizontal;

use std::f64::consts::PI;

use crate::{
    models::storage::vessel::HeadFactors,
    support::quadrature::{QuadratureConfig, integrate_or_zero},
};

use super::super::root;

pub(super) use horizontal::{side_area, side_volume};

/// Dimensionless head profile, derived from the factors on every query.
#[derive(Debug, Clone, Copy)]
struct Profile {
    fd: f64,
    fk: f64,
    a1: f64,
    a2: f64,
    b1: f64,
}

impl Profile {
    fn new(factors: &HeadFactors) -> Self {
        Self {
            fd: factors.fd(),
            fk: factors.fk(),
            a1: factors.a1(),
            a2: factors.a2(),
            b1: factors.b1(),
        }
    }

    /// Radius of the dish at axial position `x`.
    fn dish_radius(&self, x: f64) -> f64 {
        root(self.fd * self.fd - (x - self.fd) * (x - self.fd))
    }

    /// Axial half-chord of the knuckle circle at `x`, measured from the tangent line.
    fn knuckle_rise(&self, x: f64) -> f64 {
        root(self.fk * self.fk - (x - self.a2) * (x - self.a2))
    }

    /// Radius of the knuckle at axial position `x`.
    fn knuckle_radius(&self, x: f64) -> f64 {
        (0.5 - self.fk) + self.knuckle_rise(x)
    }

    /// Cross-sectional area of the head at axial position `x`.
    fn section_area(&self, x: f64) -> f64 {
        let radius = if x <= self.a1 {
            self.dish_radius(x)
        } else {
            self.knuckle_radius(x)
        };
        PI * radius * radius
    }

    /// Dish surface between the apex and axial position `a`.
    fn dish_area(&self, a: f64) -> f64 {
        let a = a.min(self.a1);
        if a < 0.0 { 0.0 } else { 2.0 * PI * self.fd * a }
    }

    /// Knuckle surface between the junction and axial position `a`.
    fn knuckle_area(&self, a: f64) -> f64 {
        if a < self.a1 {
            return 0.0;
        }
        let a = a.min(self.a2);
        let sweep = ((a - self.a2) / self.fk).asin() - ((self.a1 - self.a2) / self.fk).asin();
        2.0 * PI * self.fk * (a - self.a1 + (0.5 - self.fk) * sweep)
    }
}

/// Volume of an upright head filled to `level` above its apex.
pub(super) fn end_volume(
    diameter: f64,
    factors: &HeadFactors,
    level: f64,
    q: &QuadratureConfig,
) -> f64 {
    if level <= 0.0 {
        return 0.0;
    }
    let profile = Profile::new(factors);
    let upper = (level / diameter).min(profile.a2);
    diameter.powi(3) * integrate_or_zero(|x| profile.section_area(x), 0.0, upper, q)
}

/// Surface of an upright head wetted to `level` above its apex.
pub(super) fn end_area(diameter: f64, factors: &HeadFactors, level: f64) -> f64 {
    if level <= 0.0 {
        return 0.0;
    }
    let profile = Profile::new(factors);
    let a = (level / diameter).min(profile.a2);
    diameter * diameter * (profile.dish_area(a) + profile.knuckle_area(a))
}
