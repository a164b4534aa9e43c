use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::geo2tm, m)?)?;
    m.add_function(wrap_pyfunction!(transform::tm2geo, m)?)?;
    m.add_function(wrap_pyfunction!(transform::ecef2geo, m)?)?;
    Ok(())
}
