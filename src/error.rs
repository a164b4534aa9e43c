use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProjError {
    #[error("Invalid ellipsoid: a = {a}, f = {f} (need a > 0 and 0 < f < 1)")]
    InvalidEllipsoid { a: f64, f: f64 },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Domain error: {0}")]
    Domain(String),

    #[error("{solver} did not converge after {iterations} iterations (residual {residual:e})")]
    ConvergenceFailure {
        solver: &'static str,
        iterations: usize,
        residual: f64,
    },
}

impl ProjError {
    /// Domain error for a latitude outside the accepted range.
    pub(crate) fn latitude(latitude: f64, range: &str) -> Self {
        ProjError::Domain(format!("latitude {latitude} outside {range}"))
    }
}
