use thiserror::Error;

/// Errors that can occur during adaptive integration.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum QuadratureError {
    /// An integration bound is infinite or NaN.
    #[error("integration bounds must be finite: [{lower}, {upper}]")]
    InvalidBounds { lower: f64, upper: f64 },

    /// The integrand returned a non-finite value.
    #[error("integrand is not finite at x={at}")]
    NonFinite { at: f64 },

    /// The tolerance was not met within the subinterval budget.
    #[error("subinterval limit reached: estimate={estimate}, error={abs_error}")]
    MaxSubintervals {
        /// Best integral estimate reached.
        estimate: f64,

        /// Summed error estimate at the limit.
        abs_error: f64,
    },

    /// An interval became too narrow to bisect in floating point.
    #[error("interval cannot be subdivided further at x={at}")]
    Roundoff { at: f64 },
}
