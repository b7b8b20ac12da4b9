//! Spherical law of cosines distance calculation.

use crate::haversine::EARTH_RADIUS_M;
use crate::Coordinate;

/// Calculates the great-circle distance between two coordinates in meters
/// using the spherical law of cosines.
///
/// Simpler than Haversine but loses precision for very small separations,
/// where the acos argument approaches 1. The argument is clamped to [-1, 1]
/// so rounding can never push it out of the acos domain; coincident points
/// return exactly 0 rather than NaN.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in meters
#[inline]
pub fn law_of_cosines_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, _) = from.to_radians();
    let (lat2, _) = to.to_radians();
    let d_lon = (to.longitude - from.longitude).to_radians();

    let central = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * d_lon.cos();

    EARTH_RADIUS_M * central.clamp(-1.0, 1.0).acos()
}
