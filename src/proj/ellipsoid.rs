use crate::error::ProjError;

/// Reference ellipsoid parameters.
///
/// Only the semi-major axis and flattening are stored (plus the semi-minor
/// axis derived from them). Everything else is computed on demand, so a value
/// never carries stale constants.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "EllipsoidParams", into = "EllipsoidParams")
)]
pub struct Ellipsoid {
    a: f64,
    f: f64,
    b: f64,
}

impl Ellipsoid {
    /// Build an ellipsoid from semi-major axis `a` (metres) and flattening `f`.
    ///
    /// Fails with [`ProjError::InvalidEllipsoid`] unless `a` is finite and
    /// positive and `0 < f < 1`.
    pub fn new(a: f64, f: f64) -> Result<Self, ProjError> {
        if !(a.is_finite() && a > 0.0 && f > 0.0 && f < 1.0) {
            return Err(ProjError::InvalidEllipsoid { a, f });
        }
        Ok(Self::from_parts(a, f))
    }

    /// Build an ellipsoid from `a` and the inverse flattening `1/f`
    /// (e.g. `298.257223563` for WGS84).
    pub fn from_inverse_flattening(a: f64, inverse_flattening: f64) -> Result<Self, ProjError> {
        if !(inverse_flattening.is_finite() && inverse_flattening > 1.0) {
            return Err(ProjError::InvalidEllipsoid {
                a,
                f: 1.0 / inverse_flattening,
            });
        }
        Self::new(a, 1.0 / inverse_flattening)
    }

    /// Predefined ellipsoid by (case-insensitive) name.
    pub fn named(name: &str) -> Option<Self> {
        NAMED
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, e)| *e)
    }

    const fn from_parts(a: f64, f: f64) -> Self {
        Self {
            a,
            f,
            b: a * (1.0 - f),
        }
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    pub fn flattening(&self) -> f64 {
        self.f
    }

    /// Semi-minor (polar) axis `b = a(1 - f)`.
    pub fn polar_semiaxis(&self) -> f64 {
        self.b
    }

    /// First eccentricity squared: `(a² - b²) / a²`.
    pub fn first_eccentricity_squared(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.a * self.a)
    }

    /// First eccentricity `e`.
    pub fn first_eccentricity(&self) -> f64 {
        self.first_eccentricity_squared().sqrt()
    }

    /// Second eccentricity squared: `(a² - b²) / b²`.
    pub fn second_eccentricity_squared(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.b * self.b)
    }

    /// Second eccentricity `e'`.
    pub fn second_eccentricity(&self) -> f64 {
        self.second_eccentricity_squared().sqrt()
    }

    /// Polar radius of curvature `c = a² / b`.
    pub fn polar_radius(&self) -> f64 {
        self.a * self.a / self.b
    }

    /// Linear eccentricity: distance from the centre to a focus of the
    /// meridian ellipse, `sqrt(a² - b²)`.
    pub fn linear_eccentricity(&self) -> f64 {
        (self.a * self.a - self.b * self.b).sqrt()
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::from_parts(6_378_137.0, 1.0 / 298.257_223_563);
pub const GRS80: Ellipsoid = Ellipsoid::from_parts(6_378_137.0, 1.0 / 298.257_222_101);
/// Hayford 1909 / International 1924 (PSAD56, ED50).
pub const INTERNATIONAL_1924: Ellipsoid = Ellipsoid::from_parts(6_378_388.0, 1.0 / 297.0);

static NAMED: [(&str, Ellipsoid); 4] = [
    ("WGS84", WGS84),
    ("GRS80", GRS80),
    ("intl", INTERNATIONAL_1924),
    ("International1924", INTERNATIONAL_1924),
];

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct EllipsoidParams {
    a: f64,
    f: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<EllipsoidParams> for Ellipsoid {
    type Error = ProjError;

    fn try_from(p: EllipsoidParams) -> Result<Self, Self::Error> {
        Ellipsoid::new(p.a, p.f)
    }
}

#[cfg(feature = "serde")]
impl From<Ellipsoid> for EllipsoidParams {
    fn from(e: Ellipsoid) -> Self {
        Self { a: e.a, f: e.f }
    }
}
