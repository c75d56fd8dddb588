//! Head (end-cap) formulas.
//!
//! Each shape answers four questions, all for a level already clamped to the
//! vessel:
//!
//! - `end_volume` / `end_area`: a single upright head filled to `level` above
//!   its apex (vertical orientation). Levels beyond the head depth return the
//!   full head, so `f64::INFINITY` is a valid way to ask for it.
//! - `pair_volume` / `pair_area`: both heads of a horizontal vessel filled to
//!   `level` above the bottom of the shell.

mod conical;
mod elliptical;
mod flat;
mod hemispherical;
mod torispherical;

use crate::{models::storage::vessel::HeadFactors, support::quadrature::QuadratureConfig};

/// Head shape with its resolved parameters.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Head {
    Flat,
    Hemispherical,
    /// Exact ellipsoid volume; wetted area from the torispherical profile.
    Elliptical(HeadFactors),
    Torispherical(HeadFactors),
    Conical {
        depth: f64,
    },
}

impl Head {
    pub(super) fn depth(&self, diameter: f64) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::Hemispherical => 0.5 * diameter,
            Self::Elliptical(_) => elliptical::depth(diameter),
            Self::Torispherical(factors) => factors.a2() * diameter,
            Self::Conical { depth } => *depth,
        }
    }

    pub(super) fn end_volume(&self, diameter: f64, level: f64, q: &QuadratureConfig) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::Hemispherical => hemispherical::end_volume(diameter, level),
            Self::Elliptical(_) => elliptical::end_volume(diameter, level),
            Self::Torispherical(factors) => {
                torispherical::end_volume(diameter, factors, level, q)
            }
            Self::Conical { depth } => conical::end_volume(diameter, *depth, level),
        }
    }

    pub(super) fn end_area(&self, diameter: f64, level: f64) -> f64 {
        match self {
            Self::Flat => flat::end_area(diameter, level),
            Self::Hemispherical => hemispherical::end_area(diameter, level),
            Self::Elliptical(factors) | Self::Torispherical(factors) => {
                torispherical::end_area(diameter, factors, level)
            }
            Self::Conical { depth } => conical::end_area(diameter, *depth, level),
        }
    }

    pub(super) fn pair_volume(&self, diameter: f64, level: f64, q: &QuadratureConfig) -> f64 {
        match self {
            Self::Flat => 0.0,
            Self::Hemispherical => hemispherical::pair_volume(diameter, level),
            Self::Elliptical(_) => elliptical::pair_volume(diameter, level),
            Self::Torispherical(factors) => {
                2.0 * torispherical::side_volume(diameter, factors, level, q)
            }
            Self::Conical { depth } => conical::pair_volume(diameter, *depth, level),
        }
    }

    pub(super) fn pair_area(&self, diameter: f64, level: f64, q: &QuadratureConfig) -> f64 {
        match self {
            Self::Flat => flat::pair_area(diameter, level),
            Self::Hemispherical => hemispherical::pair_area(diameter, level),
            Self::Elliptical(factors) | Self::Torispherical(factors) => {
                2.0 * torispherical::side_area(diameter, factors, level, q)
            }
            Self::Conical { depth } => conical::pair_area(diameter, *depth, level),
        }
    }
}
