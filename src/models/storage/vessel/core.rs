//! Height-indexed geometry of a vessel.
//!
//! Everything in this module works in metres (and square/cubic metres) as
//! plain `f64`. Every partial function `f(h)` follows the same contract:
//! `f(h) = 0` for `h <= 0` (and NaN), `f(h) = f(total_height)` above the top,
//! and `f` is non-decreasing in between.

mod head;
mod shell;
mod sphere;

use std::f64::consts::PI;

use crate::support::quadrature::QuadratureConfig;

pub(crate) use head::Head;

use super::Variant;

/// A cylindrical shell with identical heads.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Cylinder {
    pub(crate) diameter: f64,
    pub(crate) length: f64,
    pub(crate) head: Head,
    pub(crate) quadrature: QuadratureConfig,
}

/// Resolved vessel geometry, rebuilt from the current attributes per query.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Geometry {
    Vertical { cylinder: Cylinder, variant: Variant },
    Horizontal { cylinder: Cylinder },
    Sphere { diameter: f64 },
}

impl Geometry {
    /// Axial depth of one head.
    pub(crate) fn head_distance(&self) -> f64 {
        match self {
            Self::Vertical { cylinder, .. } | Self::Horizontal { cylinder } => {
                cylinder.head.depth(cylinder.diameter)
            }
            Self::Sphere { .. } => 0.0,
        }
    }

    pub(crate) fn bottom_head_distance(&self) -> f64 {
        match self {
            Self::Vertical {
                variant: Variant::Tank,
                ..
            } => 0.0,
            _ => self.head_distance(),
        }
    }

    pub(crate) fn top_head_distance(&self) -> f64 {
        self.head_distance()
    }

    pub(crate) fn total_height(&self) -> f64 {
        match self {
            Self::Vertical { cylinder, .. } => {
                cylinder.length + self.bottom_head_distance() + self.top_head_distance()
            }
            Self::Horizontal { cylinder } => cylinder.diameter,
            Self::Sphere { diameter } => *diameter,
        }
    }

    /// Height of the bottom tangent line; zero when the shell starts at the datum.
    pub(crate) fn tangent_height(&self) -> f64 {
        match self {
            Self::Vertical { cylinder, .. } => cylinder.length + self.bottom_head_distance(),
            Self::Horizontal { .. } | Self::Sphere { .. } => 0.0,
        }
    }

    /// Clamps a query height into `[0, total_height]`.
    fn clamp(&self, level: f64) -> f64 {
        if level > 0.0 {
            level.min(self.total_height())
        } else {
            0.0
        }
    }

    pub(crate) fn shell_liquid_volume(&self, level: f64) -> f64 {
        let level = self.clamp(level);
        match self {
            Self::Vertical { cylinder, .. } => shell::vertical_volume(
                cylinder.diameter,
                cylinder.length,
                self.bottom_head_distance(),
                level,
            ),
            Self::Horizontal { cylinder } => {
                shell::horizontal_volume(cylinder.diameter, cylinder.length, level)
            }
            Self::Sphere { diameter } => sphere::volume(*diameter, level),
        }
    }

    pub(crate) fn shell_wetted_area(&self, level: f64) -> f64 {
        let level = self.clamp(level);
        match self {
            Self::Vertical { cylinder, .. } => shell::vertical_area(
                cylinder.diameter,
                cylinder.length,
                self.bottom_head_distance(),
                level,
            ),
            Self::Horizontal { cylinder } => {
                shell::horizontal_area(cylinder.diameter, cylinder.length, level)
            }
            Self::Sphere { diameter } => sphere::area(*diameter, level),
        }
    }

    pub(crate) fn bottom_head_liquid_volume(&self, level: f64) -> f64 {
        let level = self.clamp(level);
        match self {
            Self::Vertical {
                cylinder,
                variant: Variant::Vessel,
            } => cylinder
                .head
                .end_volume(cylinder.diameter, level, &cylinder.quadrature),
            Self::Vertical {
                variant: Variant::Tank,
                ..
            }
            | Self::Sphere { .. } => 0.0,
            Self::Horizontal { cylinder } => 0.5 * cylinder.pair_volume(level),
        }
    }

    pub(crate) fn top_head_liquid_volume(&self, level: f64) -> f64 {
        let level = self.clamp(level);
        match self {
            Self::Vertical { cylinder, .. } => {
                if level <= self.tangent_height() {
                    return 0.0;
                }
                let (d, q) = (cylinder.diameter, &cylinder.quadrature);
                let full = cylinder.head.end_volume(d, f64::INFINITY, q);
                let dry = cylinder.head.end_volume(d, self.total_height() - level, q);
                (full - dry).max(0.0)
            }
            Self::Horizontal { cylinder } => 0.5 * cylinder.pair_volume(level),
            Self::Sphere { .. } => 0.0,
        }
    }

    pub(crate) fn head_liquid_volume(&self, level: f64) -> f64 {
        match self {
            Self::Horizontal { cylinder } => cylinder.pair_volume(self.clamp(level)),
            _ => self.bottom_head_liquid_volume(level) + self.top_head_liquid_volume(level),
        }
    }

    pub(crate) fn bottom_head_wetted_area(&self, level: f64) -> f64 {
        let level = self.clamp(level);
        match self {
            Self::Vertical {
                cylinder,
                variant: Variant::Vessel,
            } => cylinder.head.end_area(cylinder.diameter, level),
            Self::Vertical {
                cylinder,
                variant: Variant::Tank,
            } => Head::Flat.end_area(cylinder.diameter, level),
            Self::Horizontal { cylinder } => 0.5 * cylinder.pair_area(level),
            Self::Sphere { .. } => 0.0,
        }
    }

    pub(crate) fn top_head_wetted_area(&self, level: f64) -> f64 {
        let level = self.clamp(level);
        match self {
            Self::Vertical { cylinder, .. } => {
                if level < self.tangent_height() {
                    return 0.0;
                }
                let d = cylinder.diameter;
                let full = cylinder.head.end_area(d, f64::INFINITY);
                let dry = cylinder.head.end_area(d, self.total_height() - level);
                (full - dry).max(0.0)
            }
            Self::Horizontal { cylinder } => 0.5 * cylinder.pair_area(level),
            Self::Sphere { .. } => 0.0,
        }
    }

    pub(crate) fn head_wetted_area(&self, level: f64) -> f64 {
        match self {
            Self::Horizontal { cylinder } => cylinder.pair_area(self.clamp(level)),
            _ => self.bottom_head_wetted_area(level) + self.top_head_wetted_area(level),
        }
    }

    pub(crate) fn liquid_volume(&self, level: f64) -> f64 {
        self.shell_liquid_volume(level) + self.head_liquid_volume(level)
    }

    pub(crate) fn wetted_area(&self, level: f64) -> f64 {
        self.shell_wetted_area(level) + self.head_wetted_area(level)
    }

    pub(crate) fn shell_volume(&self) -> f64 {
        match self {
            Self::Vertical { cylinder, .. } | Self::Horizontal { cylinder } => {
                PI * cylinder.diameter * cylinder.diameter / 4.0 * cylinder.length
            }
            Self::Sphere { diameter } => sphere::volume(*diameter, *diameter),
        }
    }

    pub(crate) fn head_volume(&self) -> f64 {
        self.head_liquid_volume(self.total_height())
    }

    pub(crate) fn total_volume(&self) -> f64 {
        self.shell_volume() + self.head_volume()
    }

    pub(crate) fn shell_surface_area(&self) -> f64 {
        match self {
            Self::Vertical { cylinder, .. } | Self::Horizontal { cylinder } => {
                PI * cylinder.diameter * cylinder.length
            }
            Self::Sphere { diameter } => sphere::area(*diameter, *diameter),
        }
    }

    pub(crate) fn head_surface_area(&self) -> f64 {
        self.head_wetted_area(self.total_height())
    }

    pub(crate) fn total_surface_area(&self) -> f64 {
        self.shell_surface_area() + self.head_surface_area()
    }
}

impl Cylinder {
    fn pair_volume(&self, level: f64) -> f64 {
        self.head.pair_volume(self.diameter, level, &self.quadrature)
    }

    fn pair_area(&self, level: f64) -> f64 {
        self.head.pair_area(self.diameter, level, &self.quadrature)
    }
}

/// Square root of a radicand that is non-negative up to rounding.
fn root(radicand: f64) -> f64 {
    radicand.max(0.0).sqrt()
}

/// Arccosine of an argument that lies in `[-1, 1]` up to rounding.
fn arccos(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).acos()
}
