//! Curvature radii of the ellipsoid at a given latitude.

use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;

/// Radii of curvature at one latitude.
///
/// A short-lived view: build one per latitude of interest and drop it.
#[derive(Clone, Copy, Debug)]
pub struct Radius<'a> {
    ellipsoid: &'a Ellipsoid,
    latitude: f64,
    v: f64,
}

impl<'a> Radius<'a> {
    /// `latitude` in degrees, within [-90, 90].
    pub fn new(ellipsoid: &'a Ellipsoid, latitude: f64) -> Result<Self, ProjError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(ProjError::latitude(latitude, "[-90, 90]"));
        }
        let cos_lat = latitude.to_radians().cos();
        let v = (1.0 + ellipsoid.second_eccentricity_squared() * cos_lat * cos_lat).sqrt();
        Ok(Self {
            ellipsoid,
            latitude,
            v,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Auxiliary quantity `V = sqrt(1 + e'² cos² φ)`.
    pub fn auxiliary_v(&self) -> f64 {
        self.v
    }

    /// Meridian radius of curvature `M = c / V³`.
    pub fn curvature_in_the_meridian(&self) -> f64 {
        self.ellipsoid.polar_radius() / self.v.powi(3)
    }

    /// Prime vertical radius of curvature `N = c / V`.
    pub fn curvature_normal_section(&self) -> f64 {
        self.ellipsoid.polar_radius() / self.v
    }

    /// Gaussian mean radius `RM = c / V²`.
    pub fn mean_radius(&self) -> f64 {
        self.ellipsoid.polar_radius() / (self.v * self.v)
    }

    /// Radius of the parallel circle `P = N cos φ`.
    pub fn parallel_circle(&self) -> f64 {
        self.curvature_normal_section() * self.latitude.to_radians().cos()
    }
}
