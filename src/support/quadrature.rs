//! Adaptive numerical integration of scalar functions.
//!
//! [`integrate`] estimates a definite integral with a globally adaptive
//! 15-point Gauss–Kronrod rule: the interval with the largest error estimate is
//! bisected until the summed error meets the configured tolerance or the
//! subinterval budget runs out. The rule never evaluates the integrand at an
//! interval endpoint, so integrands with an infinite slope (or an integrable
//! singularity) at a bound are handled without special casing.
//!
//! [`integrate_or_zero`] wraps [`integrate`] for callers that treat any failure
//! as a zero contribution. Failures are reported through [`tracing`] at debug
//! level and otherwise swallowed.
//!
//! # Example
//!
//! ```
//! use twine_vessels::support::quadrature::{QuadratureConfig, integrate};
//!
//! let estimate = integrate(|x| x.sin(), 0.0, std::f64::consts::PI, &QuadratureConfig::default())
//!     .unwrap();
//! assert!((estimate.value - 2.0).abs() < 1e-12);
//! ```

mod config;
mod error;
mod gauss_kronrod;

pub use config::QuadratureConfig;
pub use error::QuadratureError;

use gauss_kronrod::Segment;

/// A converged integral estimate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    /// Integral value.
    pub value: f64,

    /// Estimated absolute error of `value`.
    pub abs_error: f64,

    /// Number of subintervals used.
    pub subintervals: usize,
}

/// Integrates `f` from `lower` to `upper`.
///
/// Reversed bounds yield the negated integral; equal bounds yield zero.
///
/// # Errors
///
/// Returns [`QuadratureError`] if a bound is not finite, the integrand returns
/// a non-finite value, or the tolerance cannot be met within the configured
/// subinterval budget.
pub fn integrate<F>(
    f: F,
    lower: f64,
    upper: f64,
    config: &QuadratureConfig,
) -> Result<Estimate, QuadratureError>
where
    F: Fn(f64) -> f64,
{
    if !lower.is_finite() || !upper.is_finite() {
        return Err(QuadratureError::InvalidBounds { lower, upper });
    }

    if lower == upper {
        return Ok(Estimate {
            value: 0.0,
            abs_error: 0.0,
            subintervals: 0,
        });
    }

    if upper < lower {
        let estimate = integrate(f, upper, lower, config)?;
        return Ok(Estimate {
            value: -estimate.value,
            ..estimate
        });
    }

    let mut segments = vec![Segment::evaluate(&f, lower, upper)?];

    loop {
        let value: f64 = segments.iter().map(|s| s.value).sum();
        let abs_error: f64 = segments.iter().map(|s| s.abs_error).sum();

        if abs_error <= config.tolerance(value) {
            return Ok(Estimate {
                value,
                abs_error,
                subintervals: segments.len(),
            });
        }

        if segments.len() >= config.max_subintervals {
            return Err(QuadratureError::MaxSubintervals {
                estimate: value,
                abs_error,
            });
        }

        let worst = segments
            .iter()
            .enumerate()
            .max_by(|(_, a), (_, b)| a.abs_error.total_cmp(&b.abs_error))
            .map_or(0, |(index, _)| index);
        let segment = segments.swap_remove(worst);

        let mid = 0.5 * (segment.lower + segment.upper);
        if mid <= segment.lower || mid >= segment.upper {
            return Err(QuadratureError::Roundoff { at: mid });
        }

        segments.push(Segment::evaluate(&f, segment.lower, mid)?);
        segments.push(Segment::evaluate(&f, mid, segment.upper)?);
    }
}

/// Integrates `f` from `lower` to `upper`, substituting `0.0` for any failure.
///
/// Use this where a failed integration must degrade to "no contribution"
/// rather than abort the surrounding computation.
pub fn integrate_or_zero<F>(f: F, lower: f64, upper: f64, config: &QuadratureConfig) -> f64
where
    F: Fn(f64) -> f64,
{
    match integrate(f, lower, upper, config) {
        Ok(estimate) => estimate.value,
        Err(error) => {
            tracing::debug!(lower, upper, %error, "integration failed, using zero");
            0.0
        }
    }
}
