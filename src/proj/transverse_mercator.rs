//! Transverse Mercator — conventional power series in longitude difference.
//!
//! Forward and inverse series after Blachut, Chrzanowski & Saastamoinen,
//! *Urban Surveying and Mapping* (1979), pp. 22-24. Accurate to the
//! millimetre within a few degrees of the central meridian; accuracy degrades
//! (but is not rejected) further out.

use crate::error::ProjError;
use crate::proj::converter::Converter;
use crate::proj::meridional_arc::ArcCoefficients;
use crate::proj::radius::Radius;
use crate::proj::solver::{fixed_point, Step};

/// Forward series coefficients a₁..a₆ at one latitude.
fn forward_coefficients(parallel: f64, phi: f64, ee2: f64) -> [f64; 6] {
    let (sin_phi, t) = phi.sin_cos();
    let t2 = t * t;
    let t4 = t2 * t2;
    let t6 = t4 * t2;

    let a1 = parallel;
    let a2 = 0.5 * a1 * sin_phi;
    let a3 = a1 / 6.0 * (-1.0 + 2.0 * t2 + ee2 * t4);
    let a4 = a2 / 12.0 * (-1.0 + 6.0 * t2 + 9.0 * ee2 * t4 + 4.0 * ee2 * ee2 * t6);
    let a5 = a1 / 120.0 * (1.0 - 20.0 * t2 + (24.0 - 58.0 * ee2) * t4 + 72.0 * ee2 * t6);
    let a6 = a2 / 360.0 * (1.0 - 60.0 * t2 + 120.0 * t4);
    [a1, a2, a3, a4, a5, a6]
}

/// Inverse series coefficients b₁..b₆ at the footpoint latitude.
fn inverse_coefficients(parallel: f64, phi: f64, ee2: f64) -> [f64; 6] {
    let (sin_phi, t) = phi.sin_cos();
    let t2 = t * t;
    let t4 = t2 * t2;
    let t6 = t4 * t2;

    let b1 = 1.0 / parallel;
    let b2 = -0.5 * b1 * b1 * sin_phi * t * (1.0 + ee2 * t2);
    let b3 = -b1.powi(3) / 6.0 * (2.0 - t2 + ee2 * t4);
    let b4 = -b1 * b1 * b2 / 12.0
        * (3.0 + (2.0 - 9.0 * ee2) * t2 + 10.0 * ee2 * t4 - 4.0 * ee2 * ee2 * t6);
    let b5 = b1.powi(5) / 120.0 * (24.0 - 20.0 * t2 + (1.0 + 8.0 * ee2) * t4 - 2.0 * ee2 * t6);
    let b6 = b1.powi(4) * b2 / 360.0 * (45.0 + 16.0 * t4);
    [b1, b2, b3, b4, b5, b6]
}

/// Latitude strictly inside (-90, 90) and a finite longitude.
fn check_position(latitude: f64, longitude: f64) -> Result<(), ProjError> {
    if !(latitude > -90.0 && latitude < 90.0) {
        return Err(ProjError::latitude(latitude, "(-90, 90)"));
    }
    if !longitude.is_finite() {
        return Err(ProjError::Domain(format!("longitude {longitude} is not finite")));
    }
    Ok(())
}

impl Converter {
    /// Geographic (degrees) to Transverse Mercator `(north, east)` in metres.
    ///
    /// Latitude must lie strictly inside (-90, 90); the series degenerates at
    /// the poles.
    pub fn geo2tm(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), ProjError> {
        check_position(latitude, longitude)?;

        let phi = latitude.to_radians();
        let parallel = Radius::new(&self.ellipsoid, latitude)?.parallel_circle();
        let ee2 = self.ellipsoid.second_eccentricity_squared();
        let [a1, a2, a3, a4, a5, a6] = forward_coefficients(parallel, phi, ee2);

        let arc = ArcCoefficients::new(&self.ellipsoid).length(phi);
        let dl = (longitude - self.params.central_meridian).to_radians();
        let dl2 = dl * dl;

        // Along-meridian and across-meridian components
        let x = arc + dl2 * (a2 + dl2 * (a4 + dl2 * a6));
        let y = dl * (a1 + dl2 * (a3 + dl2 * a5));

        let north = self.params.false_northing + self.params.scale_factor * x;
        let east = self.params.false_easting + self.params.scale_factor * y;
        Ok((north, east))
    }

    /// Transverse Mercator `(north, east)` in metres to geographic
    /// `(latitude, longitude)` in degrees.
    pub fn tm2geo(&self, north: f64, east: f64) -> Result<(f64, f64), ProjError> {
        if !(north.is_finite() && east.is_finite()) {
            return Err(ProjError::Domain(format!(
                "projected coordinates ({north}, {east}) are not finite"
            )));
        }

        let x = (north - self.params.false_northing) / self.params.scale_factor;
        let y = (east - self.params.false_easting) / self.params.scale_factor;

        let phi = self.footpoint_latitude(x)?;
        let footpoint = phi.to_degrees();
        let parallel = Radius::new(&self.ellipsoid, footpoint)?.parallel_circle();
        if parallel < 1e-6 {
            return Err(ProjError::Domain(format!(
                "footpoint latitude {footpoint} is at a pole"
            )));
        }

        let ee2 = self.ellipsoid.second_eccentricity_squared();
        let [b1, b2, b3, b4, b5, b6] = inverse_coefficients(parallel, phi, ee2);
        let y2 = y * y;

        let latitude = (phi + y2 * (b2 + y2 * (b4 + y2 * b6))).to_degrees();
        let longitude =
            self.params.central_meridian + (y * (b1 + y2 * (b3 + y2 * b5))).to_degrees();
        Ok((latitude, longitude))
    }

    /// Latitude (radians) whose meridian arc equals `x` metres.
    fn footpoint_latitude(&self, x: f64) -> Result<f64, ProjError> {
        let coeffs = ArcCoefficients::new(&self.ellipsoid);
        let scale = coeffs.rectifying_scale();
        let tolerance = self.solver.arc_tolerance;

        fixed_point("tm2geo", self.solver.max_iterations, x / scale, |phi| {
            let arc = coeffs.length(phi);
            let residual = (arc - x).abs();
            if residual <= tolerance {
                Ok(Step::Done(phi))
            } else {
                Ok(Step::Continue {
                    next: phi + (x - arc) / scale,
                    residual,
                })
            }
        })
    }

    /// Point scale factor `k` at a geographic position (degrees).
    pub fn scale_factor(&self, latitude: f64, longitude: f64) -> Result<f64, ProjError> {
        check_position(latitude, longitude)?;
        let phi = latitude.to_radians();
        let ee2 = self.ellipsoid.second_eccentricity_squared();
        let cos_phi = phi.cos();
        let a = (longitude - self.params.central_meridian).to_radians() * cos_phi;
        let a2 = a * a;
        let t = phi.tan().powi(2);
        let c = ee2 * cos_phi * cos_phi;

        let series = 1.0
            + (1.0 + c) * a2 / 2.0
            + (5.0 - 4.0 * t + 42.0 * c + 13.0 * c * c - 28.0 * ee2) * a2 * a2 / 24.0
            + (61.0 - 148.0 * t + 16.0 * t * t) * a2 * a2 * a2 / 720.0;
        Ok(self.params.scale_factor * series)
    }

    /// Meridian convergence (grid north to true north) in degrees, positive
    /// east of the central meridian in the northern hemisphere.
    pub fn meridian_convergence(&self, latitude: f64, longitude: f64) -> Result<f64, ProjError> {
        check_position(latitude, longitude)?;
        let phi = latitude.to_radians();
        let ee2 = self.ellipsoid.second_eccentricity_squared();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let dl = (longitude - self.params.central_meridian).to_radians();
        let l2 = (dl * cos_phi).powi(2);
        let c = ee2 * cos_phi * cos_phi;
        let t = phi.tan().powi(2);

        let gamma = dl
            * sin_phi
            * (1.0 + l2 / 3.0 * (1.0 + 3.0 * c + 2.0 * c * c) + l2 * l2 / 15.0 * (2.0 - t));
        Ok(gamma.to_degrees())
    }
}
