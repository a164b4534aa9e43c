//! Parallel batch conversion over slices.
//!
//! Points are independent, so each batch fans out over rayon's global pool.
//! The first failing point aborts the batch and its error is returned.

use rayon::prelude::*;

use crate::error::ProjError;
use crate::proj::converter::Converter;
use crate::proj::ecef::Geodetic;

impl Converter {
    /// `geo2tm` over `(latitude, longitude)` pairs.
    pub fn geo2tm_batch(&self, coords: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, ProjError> {
        coords
            .par_iter()
            .map(|&(lat, lon)| self.geo2tm(lat, lon))
            .collect()
    }

    /// `tm2geo` over `(north, east)` pairs.
    pub fn tm2geo_batch(&self, coords: &[(f64, f64)]) -> Result<Vec<(f64, f64)>, ProjError> {
        coords
            .par_iter()
            .map(|&(north, east)| self.tm2geo(north, east))
            .collect()
    }

    /// `ecef2geo` over `(x, y, z)` triples.
    pub fn ecef2geo_batch(&self, coords: &[(f64, f64, f64)]) -> Result<Vec<Geodetic>, ProjError> {
        coords
            .par_iter()
            .map(|&(x, y, z)| self.ecef2geo(x, y, z))
            .collect()
    }
}
