//! A single Transverse Mercator frame bound to one ellipsoid.

use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;
use crate::proj::meridional_arc::check_flattening;
use crate::proj::solver::SolverConfig;
use crate::proj::Projection;

/// Transverse Mercator frame parameters. Angles in degrees, offsets in metres.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TmParams {
    pub central_meridian: f64,
    pub scale_factor: f64,
    pub false_northing: f64,
    pub false_easting: f64,
}

impl TmParams {
    pub fn validate(&self) -> Result<(), ProjError> {
        if !self.central_meridian.is_finite() {
            return Err(ProjError::InvalidParameter(format!(
                "central meridian must be finite, got {}",
                self.central_meridian
            )));
        }
        if !(self.scale_factor.is_finite() && self.scale_factor > 0.0) {
            return Err(ProjError::InvalidParameter(format!(
                "scale factor must be finite and positive, got {}",
                self.scale_factor
            )));
        }
        if !(self.false_northing.is_finite() && self.false_easting.is_finite()) {
            return Err(ProjError::InvalidParameter(format!(
                "false northing/easting must be finite, got {}/{}",
                self.false_northing, self.false_easting
            )));
        }
        Ok(())
    }
}

/// Converts between geographic, Transverse Mercator and ECEF coordinates.
///
/// Immutable once built. `Ellipsoid` is `Copy`, so any number of converters
/// can share the same ellipsoid definition, and a converter can be shared
/// across threads by reference.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Converter {
    pub(crate) ellipsoid: Ellipsoid,
    pub(crate) params: TmParams,
    pub(crate) solver: SolverConfig,
}

impl Converter {
    pub fn new(
        ellipsoid: Ellipsoid,
        central_meridian: f64,
        scale_factor: f64,
        false_northing: f64,
        false_easting: f64,
    ) -> Result<Self, ProjError> {
        Self::from_params(
            ellipsoid,
            TmParams {
                central_meridian,
                scale_factor,
                false_northing,
                false_easting,
            },
        )
    }

    /// Fails with `InvalidParameter` for an invalid frame or an ellipsoid
    /// flatter than [`MAX_FLATTENING`](crate::proj::meridional_arc::MAX_FLATTENING).
    pub fn from_params(ellipsoid: Ellipsoid, params: TmParams) -> Result<Self, ProjError> {
        check_flattening(&ellipsoid)?;
        params.validate()?;
        Ok(Self {
            ellipsoid,
            params,
            solver: SolverConfig::default(),
        })
    }

    /// Replace the solver tolerances and iteration cap.
    pub fn with_solver(mut self, solver: SolverConfig) -> Result<Self, ProjError> {
        solver.validate()?;
        self.solver = solver;
        Ok(self)
    }

    pub fn params(&self) -> &TmParams {
        &self.params
    }

    pub fn solver(&self) -> &SolverConfig {
        &self.solver
    }
}

impl Projection for Converter {
    fn forward(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), ProjError> {
        self.geo2tm(latitude, longitude)
    }

    fn inverse(&self, north: f64, east: f64) -> Result<(f64, f64), ProjError> {
        self.tm2geo(north, east)
    }

    fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}
