//! PyO3 bindings for array coordinate conversion.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::error::ProjError;
use crate::proj::converter::Converter;
use crate::proj::ellipsoid::Ellipsoid;

type Pair<'py> = (Bound<'py, PyArray1<f64>>, Bound<'py, PyArray1<f64>>);

fn to_py_err(e: ProjError) -> PyErr {
    match e {
        ProjError::ConvergenceFailure { .. } => PyRuntimeError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn converter(
    ellipsoid: &str,
    central_meridian: f64,
    scale_factor: f64,
    false_northing: f64,
    false_easting: f64,
) -> PyResult<Converter> {
    let ellipsoid = Ellipsoid::named(ellipsoid)
        .ok_or_else(|| PyValueError::new_err(format!("Unknown ellipsoid: '{ellipsoid}'")))?;
    Converter::new(
        ellipsoid,
        central_meridian,
        scale_factor,
        false_northing,
        false_easting,
    )
    .map_err(to_py_err)
}

fn zip_pairs(
    a: &PyReadonlyArray1<'_, f64>,
    b: &PyReadonlyArray1<'_, f64>,
) -> PyResult<Vec<(f64, f64)>> {
    let a = a.as_array();
    let b = b.as_array();
    if a.len() != b.len() {
        return Err(PyValueError::new_err(format!(
            "arrays must have same length, got {} and {}",
            a.len(),
            b.len()
        )));
    }
    Ok(a.iter().zip(b.iter()).map(|(&p, &q)| (p, q)).collect())
}

fn unzip_pairs(py: Python<'_>, coords: Vec<(f64, f64)>) -> Pair<'_> {
    let (xs, ys): (Vec<f64>, Vec<f64>) = coords.into_iter().unzip();
    (
        PyArray1::from_owned_array(py, ndarray::Array1::from(xs)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(ys)),
    )
}

/// Project geographic coordinates to Transverse Mercator.
///
/// Args:
///     latitude: 1D array of latitudes in degrees.
///     longitude: 1D array of longitudes in degrees.
///     central_meridian: Central meridian in degrees.
///     scale_factor: Scale factor on the central meridian.
///     false_northing: False northing in metres.
///     false_easting: False easting in metres.
///     ellipsoid: Ellipsoid name ("WGS84", "GRS80", "intl").
///
/// Returns:
///     Tuple of (north, east) arrays in metres.
#[pyfunction]
#[pyo3(signature = (latitude, longitude, central_meridian, scale_factor=0.9996, false_northing=0.0, false_easting=500_000.0, ellipsoid="WGS84"))]
#[allow(clippy::too_many_arguments)]
pub fn geo2tm<'py>(
    py: Python<'py>,
    latitude: PyReadonlyArray1<'py, f64>,
    longitude: PyReadonlyArray1<'py, f64>,
    central_meridian: f64,
    scale_factor: f64,
    false_northing: f64,
    false_easting: f64,
    ellipsoid: &str,
) -> PyResult<Pair<'py>> {
    let conv = converter(ellipsoid, central_meridian, scale_factor, false_northing, false_easting)?;
    let coords = zip_pairs(&latitude, &longitude)?;
    let out = py
        .allow_threads(move || conv.geo2tm_batch(&coords))
        .map_err(to_py_err)?;
    Ok(unzip_pairs(py, out))
}

/// Unproject Transverse Mercator coordinates to geographic.
///
/// Args:
///     north: 1D array of northings in metres.
///     east: 1D array of eastings in metres.
///     (frame arguments as for ``geo2tm``)
///
/// Returns:
///     Tuple of (latitude, longitude) arrays in degrees.
#[pyfunction]
#[pyo3(signature = (north, east, central_meridian, scale_factor=0.9996, false_northing=0.0, false_easting=500_000.0, ellipsoid="WGS84"))]
#[allow(clippy::too_many_arguments)]
pub fn tm2geo<'py>(
    py: Python<'py>,
    north: PyReadonlyArray1<'py, f64>,
    east: PyReadonlyArray1<'py, f64>,
    central_meridian: f64,
    scale_factor: f64,
    false_northing: f64,
    false_easting: f64,
    ellipsoid: &str,
) -> PyResult<Pair<'py>> {
    let conv = converter(ellipsoid, central_meridian, scale_factor, false_northing, false_easting)?;
    let coords = zip_pairs(&north, &east)?;
    let out = py
        .allow_threads(move || conv.tm2geo_batch(&coords))
        .map_err(to_py_err)?;
    Ok(unzip_pairs(py, out))
}

/// Convert ECEF coordinates to geodetic latitude, longitude and height.
///
/// Returns:
///     Tuple of (latitude, longitude, h) arrays (degrees, degrees, metres).
#[pyfunction]
#[pyo3(signature = (x, y, z, ellipsoid="WGS84"))]
#[allow(clippy::type_complexity)]
pub fn ecef2geo<'py>(
    py: Python<'py>,
    x: PyReadonlyArray1<'py, f64>,
    y: PyReadonlyArray1<'py, f64>,
    z: PyReadonlyArray1<'py, f64>,
    ellipsoid: &str,
) -> PyResult<(
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
)> {
    // The TM frame is irrelevant here; any valid one will do.
    let conv = converter(ellipsoid, 0.0, 1.0, 0.0, 0.0)?;
    let xy = zip_pairs(&x, &y)?;
    let z = z.as_array();
    if z.len() != xy.len() {
        return Err(PyValueError::new_err(format!(
            "arrays must have same length, got {} and {}",
            xy.len(),
            z.len()
        )));
    }
    let coords: Vec<(f64, f64, f64)> = xy
        .into_iter()
        .zip(z.iter())
        .map(|((x, y), &z)| (x, y, z))
        .collect();

    let out = py
        .allow_threads(move || conv.ecef2geo_batch(&coords))
        .map_err(to_py_err)?;

    let lat: Vec<f64> = out.iter().map(|g| g.latitude).collect();
    let lon: Vec<f64> = out.iter().map(|g| g.longitude).collect();
    let h: Vec<f64> = out.iter().map(|g| g.h).collect();
    Ok((
        PyArray1::from_owned_array(py, ndarray::Array1::from(lat)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(lon)),
        PyArray1::from_owned_array(py, ndarray::Array1::from(h)),
    ))
}
