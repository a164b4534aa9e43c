//! Earth-Centered Earth-Fixed (ECEF) Cartesian coordinates.
//!
//! `ecef2geo` refines the geodetic latitude with a Bowring-style fixed
//! point iteration, rebuilding the prime vertical radius at each estimate.

use crate::error::ProjError;
use crate::proj::converter::Converter;
use crate::proj::radius::Radius;
use crate::proj::solver::{fixed_point, Step};

/// Geodetic position: degrees, degrees, metres above the ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub h: f64,
}

impl Converter {
    /// Geodetic `(latitude, longitude, h)` to ECEF `(x, y, z)` in metres.
    pub fn geo2ecef(
        &self,
        latitude: f64,
        longitude: f64,
        h: f64,
    ) -> Result<(f64, f64, f64), ProjError> {
        if !(longitude.is_finite() && h.is_finite()) {
            return Err(ProjError::Domain(format!(
                "longitude {longitude} and height {h} must be finite"
            )));
        }
        let n = Radius::new(&self.ellipsoid, latitude)?.curvature_normal_section();
        let e2 = self.ellipsoid.first_eccentricity_squared();
        let (sin_phi, cos_phi) = latitude.to_radians().sin_cos();
        let (sin_lam, cos_lam) = longitude.to_radians().sin_cos();

        let x = (n + h) * cos_phi * cos_lam;
        let y = (n + h) * cos_phi * sin_lam;
        let z = (n * (1.0 - e2) + h) * sin_phi;
        Ok((x, y, z))
    }

    /// ECEF `(x, y, z)` in metres to geodetic coordinates.
    ///
    /// Points on the polar axis resolve directly to ±90° (longitude 0); the
    /// centre of the ellipsoid has no geodetic position and is rejected.
    pub fn ecef2geo(&self, x: f64, y: f64, z: f64) -> Result<Geodetic, ProjError> {
        if !(x.is_finite() && y.is_finite() && z.is_finite()) {
            return Err(ProjError::Domain(format!(
                "ECEF coordinates ({x}, {y}, {z}) are not finite"
            )));
        }

        let e2 = self.ellipsoid.first_eccentricity_squared();
        let p = x.hypot(y);

        if p == 0.0 {
            if z == 0.0 {
                return Err(ProjError::Domain(
                    "ECEF origin has no geodetic position".to_string(),
                ));
            }
            let latitude = 90.0_f64.copysign(z);
            let n = Radius::new(&self.ellipsoid, latitude)?.curvature_normal_section();
            let h = z / latitude.to_radians().sin() - n * (1.0 - e2);
            return Ok(Geodetic {
                latitude,
                longitude: 0.0,
                h,
            });
        }

        let longitude = y.atan2(x).to_degrees();

        // On the equatorial plane the iteration would divide by z.
        if z == 0.0 {
            return Ok(Geodetic {
                latitude: 0.0,
                longitude,
                h: p - self.ellipsoid.semi_major_axis(),
            });
        }

        let ratio = z / p;
        let initial = (ratio * (1.0 + e2 / (1.0 - e2))).atan();
        let tolerance = self.solver.latitude_tolerance;

        let phi = fixed_point("ecef2geo", self.solver.max_iterations, initial, |phi0| {
            let n = Radius::new(&self.ellipsoid, phi0.to_degrees())?.curvature_normal_section();
            let phi = (ratio * (1.0 + e2 * n * phi0.sin() / z)).atan();
            let residual = (phi.to_degrees() - phi0.to_degrees()).abs();
            if residual < tolerance {
                Ok(Step::Done(phi))
            } else {
                Ok(Step::Continue {
                    next: phi,
                    residual,
                })
            }
        })?;

        let latitude = phi.to_degrees();
        // Equal to p/cosφ - N and z/sinφ - N(1-e²), without either blowing up.
        let n = Radius::new(&self.ellipsoid, latitude)?.curvature_normal_section();
        let a = self.ellipsoid.semi_major_axis();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let h = p * cos_phi + z * sin_phi - a * a / n;

        Ok(Geodetic {
            latitude,
            longitude,
            h,
        })
    }
}
