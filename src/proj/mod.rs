pub mod batch;
pub mod converter;
pub mod ecef;
pub mod ellipsoid;
pub mod meridional_arc;
pub mod radius;
pub mod solver;
pub mod transverse_mercator;

use crate::error::ProjError;

/// Trait for map projections supporting forward and inverse transforms.
///
/// Geographic coordinates are `(latitude, longitude)` in degrees, projected
/// coordinates `(north, east)` in metres.
pub trait Projection: Send + Sync {
    /// Forward: (latitude, longitude) -> (north, east)
    fn forward(&self, latitude: f64, longitude: f64) -> Result<(f64, f64), ProjError>;

    /// Inverse: (north, east) -> (latitude, longitude)
    fn inverse(&self, north: f64, east: f64) -> Result<(f64, f64), ProjError>;

    /// Batch forward transform, in place.
    fn forward_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1)?;
        }
        Ok(())
    }

    /// Batch inverse transform, in place.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) -> Result<(), ProjError> {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1)?;
        }
        Ok(())
    }

    fn ellipsoid(&self) -> &ellipsoid::Ellipsoid;
}
