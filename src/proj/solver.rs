//! Bounded fixed-point iteration shared by the inverse solvers.
//!
//! Both `tm2geo` (footpoint latitude) and `ecef2geo` (geodetic latitude)
//! refine a latitude estimate until a residual drops under a tolerance.
//! Each run goes Initial -> Iterating -> Converged, or ends Diverged once
//! `max_iterations` is spent, which surfaces as
//! [`ProjError::ConvergenceFailure`].

use crate::error::ProjError;

/// Tolerances and iteration cap for the inverse solvers.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(default))]
pub struct SolverConfig {
    /// Footpoint search stops once `|B(φ) - x|` is at most this many metres.
    pub arc_tolerance: f64,
    /// ECEF latitude search stops once successive estimates differ by less
    /// than this many degrees.
    pub latitude_tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            arc_tolerance: 0.0005,
            latitude_tolerance: 1e-10,
            max_iterations: 50,
        }
    }
}

impl SolverConfig {
    pub fn new(
        arc_tolerance: f64,
        latitude_tolerance: f64,
        max_iterations: usize,
    ) -> Result<Self, ProjError> {
        let config = Self {
            arc_tolerance,
            latitude_tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ProjError> {
        if !(self.arc_tolerance.is_finite() && self.arc_tolerance > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "arc_tolerance must be finite and positive, got {}",
                self.arc_tolerance
            )));
        }
        if !(self.latitude_tolerance.is_finite() && self.latitude_tolerance > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "latitude_tolerance must be finite and positive, got {}",
                self.latitude_tolerance
            )));
        }
        if self.max_iterations == 0 {
            return Err(ProjError::InvalidParameter(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Outcome of one evaluation at the current estimate.
pub(crate) enum Step<T> {
    /// Tolerance met; carries the solver's result.
    Done(T),
    /// Tolerance unmet; continue from `next`.
    Continue { next: f64, residual: f64 },
}

/// Run `step` from `initial` until it reports [`Step::Done`] or
/// `max_iterations` evaluations have been made.
pub(crate) fn fixed_point<T, F>(
    solver: &'static str,
    max_iterations: usize,
    initial: f64,
    mut step: F,
) -> Result<T, ProjError>
where
    F: FnMut(f64) -> Result<Step<T>, ProjError>,
{
    let mut estimate = initial;
    let mut residual = f64::NAN;
    let mut iterations = 0;

    for iteration in 1..=max_iterations {
        iterations = iteration;
        match step(estimate)? {
            Step::Done(value) => {
                tracing::debug!(solver, iterations = iteration, "converged");
                return Ok(value);
            }
            Step::Continue { next, residual: r } => {
                tracing::trace!(solver, iteration, residual = r, estimate = next);
                residual = r;
                if !next.is_finite() {
                    break;
                }
                estimate = next;
            }
        }
    }

    tracing::warn!(solver, iterations, residual, "no convergence");
    Err(ProjError::ConvergenceFailure {
        solver,
        iterations,
        residual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let c = SolverConfig::default();
        assert_relative_eq!(c.arc_tolerance, 0.0005);
        assert_relative_eq!(c.latitude_tolerance, 1e-10);
        assert_eq!(c.max_iterations, 50);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_invalid_config() {
        assert!(SolverConfig::new(0.0, 1e-10, 10).is_err());
        assert!(SolverConfig::new(1e-3, f64::NAN, 10).is_err());
        assert!(matches!(
            SolverConfig::new(1e-3, 1e-10, 0),
            Err(ProjError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_fixed_point_sqrt2() {
        // Newton on x² = 2
        let root = fixed_point("sqrt2", 50, 1.0, |x| {
            let r = x * x - 2.0;
            if r.abs() < 1e-14 {
                Ok(Step::Done(x))
            } else {
                Ok(Step::Continue {
                    next: x - r / (2.0 * x),
                    residual: r.abs(),
                })
            }
        })
        .unwrap();
        assert_relative_eq!(root, std::f64::consts::SQRT_2, epsilon = 1e-14);
    }

    #[test]
    fn test_fixed_point_exhausted() {
        let err = fixed_point::<f64, _>("never", 5, 0.0, |x| {
            Ok(Step::Continue {
                next: x + 1.0,
                residual: 1.0,
            })
        })
        .unwrap_err();
        assert_eq!(
            err,
            ProjError::ConvergenceFailure {
                solver: "never",
                iterations: 5,
                residual: 1.0,
            }
        );
    }

    #[test]
    fn test_fixed_point_non_finite_estimate() {
        let err = fixed_point::<f64, _>("blowup", 50, 1.0, |_| {
            Ok(Step::Continue {
                next: f64::INFINITY,
                residual: f64::INFINITY,
            })
        })
        .unwrap_err();
        assert!(matches!(err, ProjError::ConvergenceFailure { .. }));
    }
}
