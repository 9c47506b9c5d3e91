//! Geodesic distance and bearing between geographic coordinates.
//!
//! Distances use the iterative inverse solution on the WGS-84 ellipsoid and
//! fall back to a spherical great-circle approximation when the iteration
//! does not converge (nearly antipodal points) or produces a non-finite
//! intermediate. The fallback is itself inaccurate in exactly those
//! degenerate cases; it exists so that a route computation always receives a
//! finite distance.

use std::f64::consts::{FRAC_PI_2, TAU};

/// WGS-84 equatorial radius in meters.
const EQUATORIAL_RADIUS_M: f64 = 6_378_137.0;
/// WGS-84 polar radius in meters.
const POLAR_RADIUS_M: f64 = 6_356_752.3142;
/// WGS-84 flattening.
const FLATTENING: f64 = 1.0 / 298.257223563;
/// Mean Earth radius for the spherical fallback, in meters.
const MEAN_RADIUS_M: f64 = 6_371_008.0;

/// Convergence tolerance for the λ iteration, in radians.
const CONVERGENCE_TOLERANCE: f64 = 1e-12;
/// Iteration cap for the λ iteration.
const MAX_ITERATIONS: usize = 100;

/// Distance in meters between two (latitude, longitude) pairs in degrees.
///
/// Coincident points return exactly 0.
pub fn distance(lat0: f64, lng0: f64, lat1: f64, lng1: f64) -> f64 {
    match vincenty_distance(lat0, lng0, lat1, lng1) {
        Some(meters) => meters,
        None => {
            tracing::debug!(
                "ellipsoidal distance did not converge for ({lat0}, {lng0}) -> ({lat1}, {lng1}); \
                 using spherical fallback"
            );
            haversine_distance(lat0, lng0, lat1, lng1)
        }
    }
}

/// Segment heading in the wind-synchronized convention.
///
/// The plane bearing `atan2(Δlat, Δlng)` is rotated by +90°, negated and
/// normalized into [0, 2π): heading due south is 0, due west π/2, due north
/// π, due east 3π/2. This is the same angle space that meteorological wind
/// directions convert into, so headwind/crosswind decomposition is a plain
/// angle difference.
pub fn wind_angle(lat0: f64, lng0: f64, lat1: f64, lng1: f64) -> f64 {
    let bearing = (lat1 - lat0).atan2(lng1 - lng0);
    (-(bearing + FRAC_PI_2)).rem_euclid(TAU)
}

/// Inverse geodesic solution (Vincenty) on the WGS-84 ellipsoid.
///
/// Returns `None` when the λ iteration fails to converge within the cap or
/// an intermediate value turns non-finite.
fn vincenty_distance(lat0: f64, lng0: f64, lat1: f64, lng1: f64) -> Option<f64> {
    let a = EQUATORIAL_RADIUS_M;
    let b = POLAR_RADIUS_M;
    let f = FLATTENING;

    let l = (lng1 - lng0).to_radians();

    let tan_u1 = (1.0 - f) * lat0.to_radians().tan();
    let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
    let sin_u1 = tan_u1 * cos_u1;
    let tan_u2 = (1.0 - f) * lat1.to_radians().tan();
    let cos_u2 = 1.0 / (1.0 + tan_u2 * tan_u2).sqrt();
    let sin_u2 = tan_u2 * cos_u2;

    let mut lambda = l;
    let mut remaining_iterations = MAX_ITERATIONS;
    let (sigma, sin_sigma, cos_sigma, cos_sq_alpha, cos_2sigma_m) = loop {
        let sin_lambda = lambda.sin();
        let cos_lambda = lambda.cos();

        let sin_sq_sigma = (cos_u2 * sin_lambda) * (cos_u2 * sin_lambda)
            + (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda)
                * (cos_u1 * sin_u2 - sin_u1 * cos_u2 * cos_lambda);
        let sin_sigma = sin_sq_sigma.sqrt();
        if sin_sigma == 0.0 {
            // Coincident points; also guards the 0/0 azimuth below.
            return Some(0.0);
        }

        let cos_sigma = sin_u1 * sin_u2 + cos_u1 * cos_u2 * cos_lambda;
        let sigma = sin_sigma.atan2(cos_sigma);

        let sin_alpha = cos_u1 * cos_u2 * sin_lambda / sin_sigma;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let mut cos_2sigma_m = cos_sigma - 2.0 * sin_u1 * sin_u2 / cos_sq_alpha;
        if !cos_2sigma_m.is_finite() {
            // Both points on the equator: cos²α == 0.
            cos_2sigma_m = 0.0;
        }

        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let lambda_prev = lambda;
        lambda = l
            + (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m
                            + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));
        if !lambda.is_finite() {
            return None;
        }
        if (lambda - lambda_prev).abs() <= CONVERGENCE_TOLERANCE {
            break (sigma, sin_sigma, cos_sigma, cos_sq_alpha, cos_2sigma_m);
        }
        remaining_iterations -= 1;
        if remaining_iterations == 0 {
            return None;
        }
    };

    let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);
    let big_a = 1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
    let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));
    let delta_sigma = big_b
        * sin_sigma
        * (cos_2sigma_m
            + big_b / 4.0
                * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                    - big_b / 6.0
                        * cos_2sigma_m
                        * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                        * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

    let meters = b * big_a * (sigma - delta_sigma);
    meters.is_finite().then_some(meters)
}

/// Great-circle distance on a sphere of mean Earth radius.
fn haversine_distance(lat0: f64, lng0: f64, lat1: f64, lng1: f64) -> f64 {
    let d_lat = (lat1 - lat0).to_radians();
    let d_lng = (lng1 - lng0).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat0.to_radians().cos() * lat1.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    MEAN_RADIUS_M * c
}
