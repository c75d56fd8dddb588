use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::VesselKind;

/// Vessel attributes and arguments that can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    Diameter,
    Length,
    HeadDistance,
    DishRadius,
    KnuckleRadius,
    HighLiquidLevel,
    LowLiquidLevel,
    LiquidLevel,
    FlowRate,
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Diameter => "diameter",
            Self::Length => "length",
            Self::HeadDistance => "head distance",
            Self::DishRadius => "dish radius factor",
            Self::KnuckleRadius => "knuckle radius factor",
            Self::HighLiquidLevel => "high liquid level",
            Self::LowLiquidLevel => "low liquid level",
            Self::LiquidLevel => "liquid level",
            Self::FlowRate => "flow rate",
        })
    }
}

/// Errors returned by vessel construction, setters, and derived queries.
///
/// A setter that returns an error leaves the vessel unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum VesselError {
    /// A dimension, shape factor, or control level is out of range.
    #[error("invalid {parameter}: {source}")]
    Validation {
        parameter: Parameter,
        source: ConstraintError,
    },

    /// An argument to a derived calculation is out of range.
    #[error("invalid {parameter} argument: {source}")]
    InvalidArgument {
        parameter: Parameter,
        source: ConstraintError,
    },

    /// The dish and knuckle radii cannot be joined tangentially.
    #[error("head factors fd={fd}, fk={fk} admit no dish-knuckle tangency")]
    NoTangency { fd: f64, fk: f64 },

    /// The attribute does not exist for this shape family.
    #[error("{parameter} does not apply to a {kind}")]
    NotApplicable {
        parameter: Parameter,
        kind: VesselKind,
    },
}

impl VesselError {
    /// Returns a mapper from a constraint violation to a validation error.
    pub(super) fn validation(parameter: Parameter) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::Validation { parameter, source }
    }
}
