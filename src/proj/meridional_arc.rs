//! Meridional arc length, Helmert-style series in the second eccentricity.
//!
//! Conventional formulas after Blachut, Chrzanowski & Saastamoinen,
//! *Urban Surveying and Mapping* (1979), pp. 18-20. The coefficients are
//! evaluated in nested (Horner-like) form up to e'¹⁰; keep that form, the
//! expanded polynomial loses digits for larger eccentricities.

use crate::error::ProjError;
use crate::proj::ellipsoid::Ellipsoid;

/// Largest flattening the truncated series is used for.
///
/// The series is strictly increasing on [0°, 90°] up to f ≈ 0.25, but the
/// Transverse Mercator expansions built on it drift well before that.
pub const MAX_FLATTENING: f64 = 0.05;

/// Reject ellipsoids too flat for the arc and projection series.
pub fn check_flattening(ellipsoid: &Ellipsoid) -> Result<(), ProjError> {
    let f = ellipsoid.flattening();
    if f > MAX_FLATTENING {
        return Err(ProjError::InvalidParameter(format!(
            "flattening {f} exceeds {MAX_FLATTENING}, the meridional arc series does not hold"
        )));
    }
    Ok(())
}

/// Series coefficients `A0, A1, A2, A4, A6, A8` for one ellipsoid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArcCoefficients {
    pub a0: f64,
    pub a1: f64,
    pub a2: f64,
    pub a4: f64,
    pub a6: f64,
    pub a8: f64,
    /// Polar radius of curvature `c` of the ellipsoid.
    c: f64,
}

impl ArcCoefficients {
    pub fn new(ellipsoid: &Ellipsoid) -> Self {
        let ee2 = ellipsoid.second_eccentricity_squared();

        let a0 = 1.0
            - 3.0 / 4.0
                * ee2
                * (1.0
                    - 15.0 / 16.0
                        * ee2
                        * (1.0
                            - 35.0 / 36.0
                                * ee2
                                * (1.0 - 63.0 / 64.0 * ee2 * (1.0 - 99.0 / 100.0 * ee2))));
        let a1 = 3.0 / 4.0
            * ee2
            * (1.0
                - 25.0 / 16.0
                    * ee2
                    * (1.0
                        - 77.0 / 60.0
                            * ee2
                            * (1.0 - 837.0 / 704.0 * ee2 * (1.0 - 2123.0 / 1860.0 * ee2))));
        let a2 = 5.0 / 8.0
            * ee2
            * (1.0
                - 139.0 / 144.0
                    * ee2
                    * (1.0 - 1087.0 / 1112.0 * ee2 * (1.0 - 513_427.0 / 521_760.0 * ee2)));
        let a4 = 35.0 / 72.0
            * ee2.powi(2)
            * (1.0 - 125.0 / 64.0 * ee2 * (1.0 - 221_069.0 / 150_000.0 * ee2));
        let a6 = 105.0 / 256.0 * ee2.powi(3) * (1.0 - 1179.0 / 400.0 * ee2);
        let a8 = 231.0 / 640.0 * ee2.powi(4);

        Self {
            a0,
            a1,
            a2,
            a4,
            a6,
            a8,
            c: ellipsoid.polar_radius(),
        }
    }

    /// `A0 · c`: metres of arc per radian of latitude, to first order.
    pub fn rectifying_scale(&self) -> f64 {
        self.a0 * self.c
    }

    /// Arc length in metres from the equator to `phi` (radians).
    pub fn length(&self, phi: f64) -> f64 {
        let (sin_phi, cos_phi) = phi.sin_cos();
        let s2 = sin_phi * sin_phi;
        let series = 1.0 + s2 * (self.a2 + s2 * (self.a4 + s2 * (self.a6 + s2 * self.a8)));
        self.a0 * self.c * phi - self.a1 * self.c * sin_phi * cos_phi * series
    }
}

/// Meridian arc from the equator to an optional latitude.
///
/// Only meaningful for flattenings up to [`MAX_FLATTENING`]; beyond roughly
/// 0.25 the series stops increasing with latitude.
#[derive(Clone, Copy, Debug)]
pub struct MeridionalArc<'a> {
    ellipsoid: &'a Ellipsoid,
    latitude: Option<f64>,
}

impl<'a> MeridionalArc<'a> {
    /// `latitude` in degrees; `None` asks for the normalisation constant.
    pub fn new(ellipsoid: &'a Ellipsoid, latitude: Option<f64>) -> Self {
        Self {
            ellipsoid,
            latitude,
        }
    }

    /// Arc length in metres, or the dimensionless `A0` when no latitude
    /// was given.
    pub fn get_length(&self) -> f64 {
        let coeffs = ArcCoefficients::new(self.ellipsoid);
        match self.latitude {
            None => coeffs.a0,
            Some(lat) => coeffs.length(lat.to_radians()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proj::ellipsoid::{Ellipsoid, INTERNATIONAL_1924, WGS84};
    use approx::assert_relative_eq;

    #[test]
    fn test_meridional_arc_equator() {
        let m = MeridionalArc::new(&WGS84, Some(0.0)).get_length();
        assert_relative_eq!(m, 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalisation_constant() {
        let a0 = MeridionalArc::new(&WGS84, None).get_length();
        assert_relative_eq!(a0, 0.994_977_106_076_534, epsilon = 1e-13);
    }

    #[test]
    fn test_known_lengths_wgs84() {
        let m45 = MeridionalArc::new(&WGS84, Some(45.0)).get_length();
        assert_relative_eq!(m45, 4_984_944.378, epsilon = 1e-3);
        // Quarter meridian
        let m90 = MeridionalArc::new(&WGS84, Some(90.0)).get_length();
        assert_relative_eq!(m90, 10_001_965.729, epsilon = 1e-3);
    }

    #[test]
    fn test_odd_symmetry() {
        let north = MeridionalArc::new(&WGS84, Some(30.0)).get_length();
        let south = MeridionalArc::new(&WGS84, Some(-30.0)).get_length();
        assert_relative_eq!(north, -south, epsilon = 1e-9);
    }

    #[test]
    fn test_strictly_increasing() {
        let flattest = Ellipsoid::new(6_000_000.0, MAX_FLATTENING).unwrap();
        for ellipsoid in [WGS84, INTERNATIONAL_1924, flattest] {
            let coeffs = ArcCoefficients::new(&ellipsoid);
            let mut prev = coeffs.length(0.0);
            for i in 1..=900 {
                let len = coeffs.length((f64::from(i) * 0.1).to_radians());
                assert!(len > prev, "not increasing at {} deg", f64::from(i) * 0.1);
                prev = len;
            }
        }
    }

    #[test]
    fn test_flattening_limit() {
        assert!(check_flattening(&WGS84).is_ok());
        assert!(check_flattening(&Ellipsoid::new(6_378_137.0, MAX_FLATTENING).unwrap()).is_ok());
        // Past f = 0.25 the arc is no longer monotone.
        for f in [0.06, 0.26, 0.5, 0.7] {
            let ellipsoid = Ellipsoid::new(6_378_137.0, f).unwrap();
            assert!(matches!(
                check_flattening(&ellipsoid),
                Err(ProjError::InvalidParameter(_))
            ));
        }
    }
}
