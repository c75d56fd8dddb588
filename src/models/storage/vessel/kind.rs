use std::{fmt, str::FromStr};

use thiserror::Error;

/// Direction of the shell axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Upright shell; heads at the bottom and top.
    Vertical,

    /// Shell lying on its side; heads at both ends.
    Horizontal,
}

/// End-cap geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeadShape {
    /// Flat plate.
    Flat,

    /// Half sphere with the shell's radius.
    Hemispherical,

    /// Standard 2:1 ellipsoidal head, depth `D/4`.
    Elliptical,

    /// Dished head: a spherical dish blended into the shell by a toroidal knuckle.
    Torispherical,

    /// Cone with a configurable depth.
    Conical,
}

impl HeadShape {
    const fn label(self) -> &'static str {
        match self {
            Self::Flat => "Flat",
            Self::Hemispherical => "Hemispherical",
            Self::Elliptical => "Elliptical",
            Self::Torispherical => "Torispherical",
            Self::Conical => "Conical",
        }
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Hemispherical => "hemispherical",
            Self::Elliptical => "elliptical",
            Self::Torispherical => "torispherical",
            Self::Conical => "conical",
        }
    }
}

/// Whether a vertical shell carries a head at both ends or only on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Head at both ends.
    Vessel,

    /// Flat bottom plate; the head shape applies to the top only.
    Tank,
}

/// The fixed shape family of a vessel.
///
/// Every combination of orientation, head shape, and variant that the geometry
/// engine supports is representable, and nothing else: horizontal shells are
/// always two-headed vessels, and a sphere has neither shell nor heads.
///
/// Each kind has a stable key for use in configuration files and input forms:
///
/// ```
/// use twine_vessels::models::storage::vessel::{HeadShape, Variant, VesselKind};
///
/// let kind: VesselKind = "vertical-torispherical-tank".parse().unwrap();
/// assert_eq!(
///     kind,
///     VesselKind::Vertical { head: HeadShape::Torispherical, variant: Variant::Tank }
/// );
/// assert_eq!(kind.to_string(), "Vertical Torispherical Tank");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VesselKind {
    Vertical { head: HeadShape, variant: Variant },
    Horizontal { head: HeadShape },
    Spherical,
}

const HEADS: [HeadShape; 5] = [
    HeadShape::Flat,
    HeadShape::Torispherical,
    HeadShape::Elliptical,
    HeadShape::Hemispherical,
    HeadShape::Conical,
];

impl VesselKind {
    /// Every supported kind, in catalog order.
    pub const ALL: [VesselKind; 16] = {
        let mut all = [VesselKind::Spherical; 16];
        let mut i = 0;
        while i < HEADS.len() {
            all[i] = VesselKind::Vertical {
                head: HEADS[i],
                variant: Variant::Vessel,
            };
            all[i + 5] = VesselKind::Vertical {
                head: HEADS[i],
                variant: Variant::Tank,
            };
            all[i + 10] = VesselKind::Horizontal { head: HEADS[i] };
            i += 1;
        }
        all
    };

    /// Returns the shell orientation, or `None` for a sphere.
    #[must_use]
    pub const fn orientation(self) -> Option<Orientation> {
        match self {
            Self::Vertical { .. } => Some(Orientation::Vertical),
            Self::Horizontal { .. } => Some(Orientation::Horizontal),
            Self::Spherical => None,
        }
    }

    /// Returns the head shape, or `None` for a sphere.
    #[must_use]
    pub const fn head(self) -> Option<HeadShape> {
        match self {
            Self::Vertical { head, .. } | Self::Horizontal { head } => Some(head),
            Self::Spherical => None,
        }
    }

    /// Returns the variant; spheres are storage tanks.
    #[must_use]
    pub const fn variant(self) -> Variant {
        match self {
            Self::Vertical { variant, .. } => variant,
            Self::Horizontal { .. } => Variant::Vessel,
            Self::Spherical => Variant::Tank,
        }
    }

    /// Whether the kind has a cylindrical shell whose length must be given.
    #[must_use]
    pub const fn requires_length(self) -> bool {
        !matches!(self, Self::Spherical)
    }

    /// Whether the head depth must be given rather than derived from the diameter.
    #[must_use]
    pub const fn requires_head_distance(self) -> bool {
        matches!(self.head(), Some(HeadShape::Conical))
    }

    /// Stable identifier, e.g. `"horizontal-conical-vessel"`.
    #[must_use]
    pub fn key(self) -> String {
        match self {
            Self::Vertical { head, variant } => {
                let suffix = match variant {
                    Variant::Vessel => "vessel",
                    Variant::Tank => "tank",
                };
                format!("vertical-{}-{suffix}", head.key())
            }
            Self::Horizontal { head } => format!("horizontal-{}-vessel", head.key()),
            Self::Spherical => "spherical-tank".to_owned(),
        }
    }
}

impl fmt::Display for VesselKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertical { head, variant } => {
                let suffix = match variant {
                    Variant::Vessel => "Vessel",
                    Variant::Tank => "Tank",
                };
                write!(f, "Vertical {} {suffix}", head.label())
            }
            Self::Horizontal { head } => write!(f, "Horizontal {} Vessel", head.label()),
            Self::Spherical => f.write_str("Spherical Tank"),
        }
    }
}

/// Error returned when parsing an unrecognized [`VesselKind`] key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vessel kind: {0:?}")]
pub struct ParseKindError(String);

impl FromStr for VesselKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .ok_or_else(|| ParseKindError(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    #[test]
    fn catalog_is_complete_and_unique() {
        let keys: HashSet<_> = VesselKind::ALL.iter().map(|kind| kind.key()).collect();
        assert_eq!(keys.len(), 16);

        let tanks = VesselKind::ALL
            .iter()
            .filter(|kind| kind.variant() == Variant::Tank)
            .count();
        assert_eq!(tanks, 6);
        assert_eq!(VesselKind::ALL[15], VesselKind::Spherical);
    }

    #[test]
    fn keys_round_trip() {
        for kind in VesselKind::ALL {
            assert_eq!(kind.key().parse::<VesselKind>(), Ok(kind));
        }
        assert_eq!(
            " Horizontal-Flat-Vessel ".parse::<VesselKind>(),
            Ok(VesselKind::Horizontal {
                head: HeadShape::Flat
            })
        );
        assert!("horizontal-flat-tank".parse::<VesselKind>().is_err());
    }

    #[test]
    fn labels() {
        assert_eq!(
            VesselKind::Horizontal {
                head: HeadShape::Hemispherical
            }
            .to_string(),
            "Horizontal Hemispherical Vessel"
        );
        assert_eq!(VesselKind::Spherical.to_string(), "Spherical Tank");
    }

    #[test]
    fn input_requirements() {
        assert!(!VesselKind::Spherical.requires_length());
        assert!(VesselKind::ALL[..15].iter().all(|kind| kind.requires_length()));

        let conical: Vec<_> = VesselKind::ALL
            .into_iter()
            .filter(|kind| kind.requires_head_distance())
            .collect();
        assert_eq!(conical.len(), 3);
        assert!(
            conical
                .iter()
                .all(|kind| kind.head() == Some(HeadShape::Conical))
        );
    }
}
