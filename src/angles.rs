use std::f64::consts::FRAC_PI_2;

use crate::types::HorizontalPosition;

pub const DEGREES_PER_HOUR: f64 = 15.0;

/// Seconds of time per degree of Earth rotation (86400 s / 360°).
pub const SECONDS_PER_DEGREE: f64 = 240.0;

/// Below this magnitude both bearing components are treated as zero.
const BEARING_EPSILON: f64 = 1e-12;

pub fn deg_to_rad(deg: f64) -> f64 {
    deg * (std::f64::consts::PI / 180.0)
}

pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / std::f64::consts::PI)
}

/// Wraps into [0, 360).
pub fn normalize_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid rounds tiny negatives up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

pub fn cotangent(x: f64) -> f64 {
    (FRAC_PI_2 - x).tan()
}

/// Arc-cotangent of `a / b`, quadrant preserved.
pub fn arccotangent2(a: f64, b: f64) -> f64 {
    b.atan2(a)
}

/// Horizon coordinates from hour angle, declination and latitude (all radians).
pub fn horizontal_position(hour_angle: f64, declination: f64, latitude: f64) -> HorizontalPosition {
    let sin_alt = latitude.sin() * declination.sin()
        + latitude.cos() * declination.cos() * hour_angle.cos();
    let sin_az = -declination.cos() * hour_angle.sin();
    let cos_az =
        declination.sin() * latitude.cos() - declination.cos() * latitude.sin() * hour_angle.cos();
    HorizontalPosition {
        altitude: rad_to_deg(sin_alt.clamp(-1.0, 1.0).asin()),
        azimuth: normalize_angle(rad_to_deg(sin_az.atan2(cos_az))),
    }
}

/// Initial great-circle bearing in degrees from one point to another.
///
/// Returns `None` when the bearing is undefined, i.e. the two points coincide
/// or are antipodal.
pub fn great_circle_bearing(
    from_lat: f64,
    from_lng: f64,
    to_lat: f64,
    to_lng: f64,
) -> Option<f64> {
    let delta_lng = deg_to_rad(to_lng - from_lng);
    let from_colat = deg_to_rad(90.0 - from_lat);
    let to_colat = deg_to_rad(90.0 - to_lat);

    let y = delta_lng.sin();
    let x = from_colat.sin() * cotangent(to_colat) - from_colat.cos() * delta_lng.cos();
    if y.abs() < BEARING_EPSILON && x.abs() < BEARING_EPSILON {
        return None;
    }
    Some(normalize_angle(rad_to_deg(y.atan2(x))))
}
