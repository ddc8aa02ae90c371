//! Geographic calculations for navigation
//!
//! Pure functions for great-circle distance and bearing between two
//! positions given in decimal degrees. All distances are in meters.

use libm::{atan2, cos, fabs, fmod, sin, sqrt};

/// Mean Earth radius in meters used by the haversine formula
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;
const RAD_TO_DEG: f64 = 180.0 / core::f64::consts::PI;

/// Calculate great-circle distance between two positions using the Haversine formula
///
/// The result is symmetric in its arguments and exactly zero when both
/// positions are identical.
///
/// # Arguments
///
/// * `lat1`, `lon1` - Start position in degrees
/// * `lat2`, `lon2` - End position in degrees
///
/// # Returns
///
/// Distance in meters
pub fn calculate_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    // Half-angle magnitudes keep sin() sign-independent so that a->b == b->a
    let half_dlat = fabs(lat2 - lat1) * DEG_TO_RAD / 2.0;
    let half_dlon = fabs(lon2 - lon1) * DEG_TO_RAD / 2.0;

    let sin_dlat = sin(half_dlat);
    let sin_dlon = sin(half_dlon);
    let a = sin_dlat * sin_dlat + cos(lat1_rad) * cos(lat2_rad) * sin_dlon * sin_dlon;
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * atan2(sqrt(a), sqrt(1.0 - a));

    EARTH_RADIUS_M * c
}

/// Calculate initial bearing (forward azimuth) from the first position to the second
///
/// # Returns
///
/// Bearing in degrees (0-360, 0 = North, 90 = East)
pub fn calculate_bearing(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let y = sin(delta_lon) * cos(lat2_rad);
    let x = cos(lat1_rad) * sin(lat2_rad) - sin(lat1_rad) * cos(lat2_rad) * cos(delta_lon);
    wrap_360(atan2(y, x) * RAD_TO_DEG)
}

/// Normalize angle to the 0 to 360 range
pub fn wrap_360(angle: f64) -> f64 {
    let a = fmod(angle, 360.0);
    if a < 0.0 {
        a + 360.0
    } else {
        a
    }
}

/// Check that a latitude/longitude pair is finite and inside the valid ranges
pub fn is_valid_coordinate(lat: f64, lon: f64) -> bool {
    lat.is_finite()
        && lon.is_finite()
        && (-90.0..=90.0).contains(&lat)
        && (-180.0..=180.0).contains(&lon)
}
