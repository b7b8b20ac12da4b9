//! Geodesic distance strategies for Stayfind.
//!
//! This crate provides:
//! - Four interchangeable distance algorithms (flat-projection, Haversine,
//!   law of cosines, Vincenty)
//! - A [`DistanceAlgorithm`] selector for startup-time configuration
//! - Coordinate validation helpers
//!
//! # Example
//!
//! ```
//! use stayfind_geo::{haversine_distance_meters, Coordinate};
//!
//! let berlin = Coordinate::new(52.5200, 13.4050);
//! let paris = Coordinate::new(48.8566, 2.3522);
//!
//! let distance = haversine_distance_meters(&berlin, &paris);
//! assert!((distance - 878_000.0).abs() < 10_000.0); // ~878 km
//! ```

mod error;
mod euclidean;
mod haversine;
mod law_of_cosines;
mod vincenty;

pub use error::{GeoError, GeoErrorCode, Result};
pub use euclidean::{equirectangular_distance_meters, euclidean_distance_meters};
pub use haversine::{haversine_distance_meters, EARTH_RADIUS_M};
pub use law_of_cosines::law_of_cosines_distance_meters;
pub use vincenty::{vincenty_distance_meters, FLATTENING, SEMI_MAJOR_AXIS_M};

use std::fmt;
use std::str::FromStr;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 to 180)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate after range-checking both components.
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        let coord = Self::new(latitude, longitude);
        if coord.is_valid() {
            Ok(coord)
        } else {
            Err(GeoError::InvalidCoordinate(format!(
                "({latitude}, {longitude}) outside [-90,90] x [-180,180]"
            )))
        }
    }

    /// Returns true if the coordinate has valid values.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

/// The distance algorithm to use for a catalog deployment.
///
/// Selected once at startup and injected into the ranking pipeline; the
/// variants are functionally interchangeable but trade accuracy for cost.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistanceAlgorithm {
    /// Flat-projection approximation; cheapest, small areas only.
    Euclidean,
    /// Great-circle distance via the Haversine formula.
    #[default]
    Haversine,
    /// Great-circle distance via the spherical law of cosines.
    LawOfCosines,
    /// Iterative ellipsoidal distance on WGS-84.
    Vincenty,
}

impl DistanceAlgorithm {
    /// Computes the distance between two coordinates in meters.
    ///
    /// Only [`DistanceAlgorithm::Vincenty`] can fail, when its iteration
    /// does not converge for nearly antipodal points.
    pub fn distance_meters(&self, from: &Coordinate, to: &Coordinate) -> Result<f64> {
        match self {
            Self::Euclidean => Ok(euclidean_distance_meters(from, to)),
            Self::Haversine => Ok(haversine_distance_meters(from, to)),
            Self::LawOfCosines => Ok(law_of_cosines_distance_meters(from, to)),
            Self::Vincenty => vincenty_distance_meters(from, to),
        }
    }

    /// All algorithm variants, in increasing order of cost.
    pub fn all() -> [DistanceAlgorithm; 4] {
        [
            Self::Euclidean,
            Self::Haversine,
            Self::LawOfCosines,
            Self::Vincenty,
        ]
    }

    /// Stable name used in config files and CLI flags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::Haversine => "haversine",
            Self::LawOfCosines => "law-of-cosines",
            Self::Vincenty => "vincenty",
        }
    }
}

impl fmt::Display for DistanceAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceAlgorithm {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "euclidean" => Ok(Self::Euclidean),
            "haversine" => Ok(Self::Haversine),
            "law-of-cosines" => Ok(Self::LawOfCosines),
            "vincenty" => Ok(Self::Vincenty),
            other => Err(GeoError::UnknownAlgorithm(other.to_string())),
        }
    }
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn spherical_distances_are_finite_and_non_negative(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let from = Coordinate::new(lat1, lon1);
            let to = Coordinate::new(lat2, lon2);

            for algo in [
                DistanceAlgorithm::Euclidean,
                DistanceAlgorithm::Haversine,
                DistanceAlgorithm::LawOfCosines,
            ] {
                let d = algo.distance_meters(&from, &to).unwrap();
                prop_assert!(d.is_finite() && d >= 0.0, "{algo}: {d}");
            }
        }

        #[test]
        fn vincenty_is_finite_and_non_negative_when_it_converges(
            lat1 in -90.0f64..=90.0,
            lon1 in -180.0f64..=180.0,
            lat2 in -90.0f64..=90.0,
            lon2 in -180.0f64..=180.0,
        ) {
            let from = Coordinate::new(lat1, lon1);
            let to = Coordinate::new(lat2, lon2);

            // Nearly antipodal pairs may legitimately fail to converge;
            // every successful result must still be a valid distance.
            match vincenty_distance_meters(&from, &to) {
                Ok(d) => prop_assert!(d.is_finite() && d >= 0.0, "{d}"),
                Err(GeoError::NoConvergence { .. }) => {}
                Err(e) => prop_assert!(false, "unexpected error: {e}"),
            }
        }
    }
}
