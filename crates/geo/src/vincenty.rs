//! Vincenty inverse distance calculation on the WGS-84 ellipsoid.
//!
//! Higher accuracy than the spherical formulas, especially over long
//! distances, at the cost of an iterative solve. The lambda iteration is
//! known not to converge for nearly antipodal points; that case surfaces
//! as [`GeoError::NoConvergence`] instead of a NaN result.

use crate::error::{GeoError, Result};
use crate::Coordinate;

/// WGS-84 semi-major axis in meters.
pub const SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;

/// WGS-84 flattening of the ellipsoid.
pub const FLATTENING: f64 = 1.0 / 298.257223563;

/// Iteration stops once lambda changes by less than this, in radians.
const CONVERGENCE_THRESHOLD: f64 = 1e-12;

/// Iteration budget before reporting a convergence failure.
const MAX_ITERATIONS: u32 = 100;

/// Calculates the ellipsoidal distance between two coordinates in meters.
///
/// Coincident points are detected through a zero angular separation on the
/// auxiliary sphere (not literal coordinate equality) and return `Ok(0.0)`
/// without iterating further.
///
/// # Arguments
/// * `from` - Starting coordinate
/// * `to` - Ending coordinate
///
/// # Returns
/// Distance in meters, or [`GeoError::NoConvergence`] when the iteration
/// budget is exhausted.
pub fn vincenty_distance_meters(from: &Coordinate, to: &Coordinate) -> Result<f64> {
    let a = SEMI_MAJOR_AXIS_M;
    let f = FLATTENING;
    let b = (1.0 - f) * a;

    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    // Reduced latitudes on the auxiliary sphere.
    let u1 = ((1.0 - f) * lat1.tan()).atan();
    let u2 = ((1.0 - f) * lat2.tan()).atan();
    let l = lon2 - lon1;

    let (sin_u1, cos_u1) = u1.sin_cos();
    let (sin_u2, cos_u2) = u2.sin_cos();

    let mut lambda = l;
    let mut remaining = MAX_ITERATIONS;

    let (sin_sigma, cos_sigma, sigma, cos_sq_alpha) = loop {
        let (sin_lambda, cos_lambda) = lambda.sin_cos();

        let sin_sigma = ((cos_u2 * sin_lambda).powi(2)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda).powi(2))
        .sqrt();
        if sin_sigma == 0.0 {
            // Co-incident points
            return Ok(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);
        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));

        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_sq_alpha
                            + c * cos_sigma * (-1.0 + 2.0 * cos_sq_alpha * cos_sq_alpha)));

        if (lambda - lambda_prev).abs() <= CONVERGENCE_THRESHOLD {
            break (sin_sigma, cos_sigma, sigma, cos_sq_alpha);
        }

        remaining -= 1;
        if remaining == 0 {
            return Err(GeoError::NoConvergence {
                iterations: MAX_ITERATIONS,
            });
        }
    };

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

    let delta_sigma = big_b
        * sin_sigma
        * (cos_sigma * (2.0 * cos_sq_alpha * cos_sq_alpha - 1.0)
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_sigma * cos_sigma)
                    - big_b / 6.0
                        * cos_sq_alpha
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_sq_alpha * cos_sq_alpha)));

    Ok(b * big_a * (sigma - delta_sigma))
}
