//! Flat-projection distance approximations.
//!
//! These are the cheapest strategies and are only meaningful for small
//! areas where the curvature of the Earth can be ignored.

use crate::haversine::EARTH_RADIUS_M;
use crate::Coordinate;

/// Calculates a flat-projection distance between two coordinates in meters.
///
/// This preserves the historical behavior of the catalog verbatim: the
/// inputs are NOT converted from degrees to radians before the cosine of
/// the mean latitude is taken, so the longitude scaling is off for most
/// latitudes. The formula is kept as the literal compatibility contract;
/// use [`equirectangular_distance_meters`] for the corrected projection.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in meters
#[inline]
pub fn euclidean_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    let x = (to.longitude - from.longitude)
        * ((from.latitude + to.latitude) / 2.0).cos();
    let y = to.latitude - from.latitude;

    (x * x + y * y).sqrt() * EARTH_RADIUS_M
}

/// Fast approximate distance using the equirectangular projection, in meters.
///
/// The corrected form of [`euclidean_distance_meters`]: degrees are
/// converted to radians before projecting. Faster than Haversine but less
/// accurate over long distances; use for quick radius filtering before
/// applying an exact formula.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Approximate distance in meters
#[inline]
pub fn equirectangular_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let x = (lon2 - lon1) * ((lat1 + lat2) / 2.0).cos();
    let y = lat2 - lat1;

    (x * x + y * y).sqrt() * EARTH_RADIUS_M
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::haversine_distance_meters;

    const BERLIN: Coordinate = Coordinate { latitude: 52.5200, longitude: 13.4050 };
    const PARIS: Coordinate = Coordinate { latitude: 48.8566, longitude: 2.3522 };

    #[test]
    fn test_same_point_zero_distance() {
        assert_eq!(euclidean_distance_meters(&BERLIN, &BERLIN), 0.0);
        assert_eq!(equirectangular_distance_meters(&BERLIN, &BERLIN), 0.0);
    }

    #[test]
    fn test_euclidean_pins_raw_degree_cosine() {
        // The compatibility contract: cos() is applied to the mean latitude
        // in degrees, not radians.
        let from = Coordinate::new(50.0, 10.0);
        let to = Coordinate::new(51.0, 11.0);

        let x = (11.0 - 10.0) * (50.5f64).cos();
        let y = 51.0 - 50.0;
        let expected = (x * x + y * y).sqrt() * EARTH_RADIUS_M;

        assert_eq!(euclidean_distance_meters(&from, &to), expected);
    }

    #[test]
    fn test_equirectangular_close_to_haversine() {
        let exact = haversine_distance_meters(&BERLIN, &PARIS);
        let approx = equirectangular_distance_meters(&BERLIN, &PARIS);
        // Approximate should be within 5% for this distance
        let error = ((approx - exact) / exact).abs();
        assert!(error < 0.05, "Error: {}%", error * 100.0);
    }

    #[test]
    fn test_symmetry() {
        let d1 = euclidean_distance_meters(&BERLIN, &PARIS);
        let d2 = euclidean_distance_meters(&PARIS, &BERLIN);
        assert!((d1 - d2).abs() < 1e-9);
    }
}
