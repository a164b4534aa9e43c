pub mod error;
pub mod proj;
#[cfg(feature = "python")]
mod py;

pub use error::ProjError;
pub use proj::converter::{Converter, TmParams};
pub use proj::ecef::Geodetic;
pub use proj::ellipsoid::{Ellipsoid, GRS80, INTERNATIONAL_1924, WGS84};
pub use proj::meridional_arc::{MeridionalArc, MAX_FLATTENING};
pub use proj::radius::Radius;
pub use proj::solver::SolverConfig;
pub use proj::Projection;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// A Python module implemented in Rust.
#[cfg(feature = "python")]
#[pymodule]
fn _rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
