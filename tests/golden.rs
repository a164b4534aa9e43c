//! Golden values for the WGS84 / central meridian 69°W frame, plus a cross
//! check of the series projection against proj4rs' `tmerc`.

use _rust::{Converter, Ellipsoid, MeridionalArc, ProjError, SolverConfig, WGS84};
use approx::assert_relative_eq;
use proj4rs::Proj;

fn chile() -> Converter {
    let wgs84 = Ellipsoid::new(6_378_137.0, 1.0 / 298.257_223_563).unwrap();
    Converter::new(wgs84, -69.0, 0.9996, 10_000_000.0, 500_000.0).unwrap()
}

#[test]
fn test_tm2geo_golden() {
    let (lat, lon) = chile().tm2geo(6_958_579.443, 363_102.736).unwrap();
    assert_relative_eq!(lat, -27.489_522_86, epsilon = 1e-6);
    assert_relative_eq!(lon, -70.385_774_73, epsilon = 1e-6);
}

#[test]
fn test_geo2tm_golden() {
    let (n, e) = chile().geo2tm(-27.489_522_86, -70.385_774_73).unwrap();
    assert_relative_eq!(n, 6_958_579.443, epsilon = 0.01);
    assert_relative_eq!(e, 363_102.736, epsilon = 0.01);
}

#[test]
fn test_inverse_flattening_constructor_gives_same_frame() {
    let wgs84 = Ellipsoid::from_inverse_flattening(6_378_137.0, 298.257_223_563).unwrap();
    let conv = Converter::new(wgs84, -69.0, 0.9996, 10_000_000.0, 500_000.0).unwrap();
    let (lat, lon) = conv.tm2geo(6_958_579.443, 363_102.736).unwrap();
    assert_relative_eq!(lat, -27.489_522_86, epsilon = 1e-6);
    assert_relative_eq!(lon, -70.385_774_73, epsilon = 1e-6);
}

#[test]
fn test_degenerate_ellipsoid() {
    assert!(matches!(
        Ellipsoid::new(-1.0, 0.5),
        Err(ProjError::InvalidEllipsoid { .. })
    ));
}

#[test]
fn test_pole_uses_polar_branch() {
    let b = WGS84.polar_semiaxis();
    let geo = chile().ecef2geo(0.0, 0.0, b).unwrap();
    assert_eq!(geo.latitude, 90.0);
    assert_relative_eq!(geo.h, 0.0, epsilon = 1e-6);
}

#[test]
fn test_convergence_failure_surfaces() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let conv = chile()
        .with_solver(SolverConfig::new(1e-9, 1e-15, 2).unwrap())
        .unwrap();
    let err = conv.tm2geo(6_958_579.443, 363_102.736).unwrap_err();
    assert!(matches!(err, ProjError::ConvergenceFailure { iterations: 2, .. }));
    assert!(err.to_string().contains("tm2geo"));
}

#[test]
fn test_quarter_meridian() {
    let q = MeridionalArc::new(&WGS84, Some(90.0)).get_length();
    assert_relative_eq!(q, 10_001_965.729, epsilon = 1e-3);
}

#[test]
fn test_matches_proj4rs_tmerc() {
    let geo = Proj::from_proj_string("+proj=longlat +ellps=WGS84").unwrap();
    let tm = Proj::from_proj_string(
        "+proj=tmerc +lon_0=-69 +k=0.9996 +x_0=500000 +y_0=10000000 +ellps=WGS84 +units=m",
    )
    .unwrap();
    let conv = chile();

    let points: &[(f64, f64)] = &[
        (-27.489_522_86, -70.385_774_73),
        (-18.5, -70.3),
        (-33.45, -70.66),
        (-53.16, -70.91),
        (-40.0, -67.0),
    ];

    for &(lat, lon) in points {
        let mut p = (lon.to_radians(), lat.to_radians());
        proj4rs::transform::transform(&geo, &tm, &mut p).unwrap();
        let (n, e) = conv.geo2tm(lat, lon).unwrap();
        // Both are millimetre-level approximations of the exact projection
        assert_relative_eq!(e, p.0, epsilon = 0.01);
        assert_relative_eq!(n, p.1, epsilon = 0.01);
    }
}
