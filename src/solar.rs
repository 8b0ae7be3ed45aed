//! Low-precision solar ephemeris.
//!
//! Mean elements are linear in Julian centuries `T` since J2000.0; all angles
//! are radians unless a name says otherwise. Accurate to well under a minute
//! of time for dates within a few centuries of J2000.

use std::f64::consts::PI;

use crate::angles::{deg_to_rad, horizontal_position, DEGREES_PER_HOUR};
use crate::error::{CalcError, CalcResult};
use crate::time_base::{centuries_since_j2000, days_since_j2000, DAYS_PER_CENTURY};
use crate::types::{EquatorialPosition, HorizontalPosition, Location};

const MEAN_LONGITUDE: (f64, f64) = (4.89506, 628.33197);
const MEAN_ANOMALY: (f64, f64) = (6.24006, 628.30195);
const CENTER_FIRST: (f64, f64) = (0.03342, -0.0000873);
const CENTER_SECOND: f64 = 0.000349;

const OBLIQUITY: (f64, f64) = (0.40909, -0.0002295);

const SIDEREAL_AT_EPOCH: f64 = 6.697374558;
const SIDEREAL_PER_DAY: f64 = 0.06570982441908;
const SIDEREAL_PER_UT_HOUR: f64 = 1.002737909350795;
const SIDEREAL_PER_CENTURY2: f64 = 0.000026;

/// Fixed-point passes in [`sun_time`].
const SUN_TIME_ITERATIONS: usize = 2;

/// Seconds of time per radian of hour angle.
pub const SECONDS_PER_RADIAN: f64 = 43200.0 / PI;

pub fn mean_longitude(t: f64) -> f64 {
    MEAN_LONGITUDE.0 + MEAN_LONGITUDE.1 * t
}

pub fn mean_anomaly(t: f64) -> f64 {
    MEAN_ANOMALY.0 + MEAN_ANOMALY.1 * t
}

/// Obliquity of the ecliptic.
pub fn obliquity(t: f64) -> f64 {
    OBLIQUITY.0 + OBLIQUITY.1 * t
}

/// Mean longitude plus the two-term equation of the center.
pub fn true_longitude(t: f64) -> f64 {
    let m = mean_anomaly(t);
    let center = (CENTER_FIRST.0 + CENTER_FIRST.1 * t) * m.sin() + CENTER_SECOND * (2.0 * m).sin();
    mean_longitude(t) + center
}

/// Right ascension from the single-quadrant arctangent.
///
/// `atan` only covers (-π/2, π/2), so the result is then shifted by a whole
/// multiple of π onto the half-plane of the true longitude. Right ascension
/// never strays more than ~2.5° from the longitude, which makes the shift
/// unambiguous.
pub fn right_ascension(t: f64) -> f64 {
    let longitude = true_longitude(t);
    let folded = (longitude.tan() * obliquity(t).cos()).atan();
    folded + PI * ((longitude - folded) / PI).round()
}

pub fn declination(instant: f64) -> f64 {
    let t = centuries_since_j2000(instant);
    (true_longitude(t).sin() * obliquity(t).sin()).asin()
}

pub fn equatorial_position(instant: f64) -> EquatorialPosition {
    let t = centuries_since_j2000(instant);
    EquatorialPosition {
        right_ascension: right_ascension(t),
        declination: declination(instant),
    }
}

/// Apparent minus mean solar time, in seconds.
pub fn equation_of_time(instant: f64) -> f64 {
    let t = centuries_since_j2000(instant);
    let mut delta = mean_longitude(t) - right_ascension(t);
    delta -= ((delta + PI) / (2.0 * PI)).floor() * 2.0 * PI;
    delta * SECONDS_PER_RADIAN
}

/// Local mean sidereal time in hours (not wrapped to 24).
pub fn mean_sidereal_time(instant: f64, longitude: f64) -> f64 {
    let d = days_since_j2000(instant);
    // preceding 0h UT; J2000 itself falls at noon
    let day_start = d.floor() - 0.5 + if d - d.floor() >= 0.5 { 1.0 } else { 0.0 };
    let ut_hours = 24.0 * (d - day_start);
    let t = d / DAYS_PER_CENTURY;
    SIDEREAL_AT_EPOCH
        + SIDEREAL_PER_DAY * day_start
        + SIDEREAL_PER_UT_HOUR * ut_hours
        + SIDEREAL_PER_CENTURY2 * t * t
        + longitude / DEGREES_PER_HOUR
}

/// Local hour angle of a body with the given right ascension.
pub fn hour_angle(instant: f64, longitude: f64, right_ascension: f64) -> f64 {
    deg_to_rad(mean_sidereal_time(instant, longitude) * DEGREES_PER_HOUR) - right_ascension
}

/// Sun position for an explicit latitude, which may differ from the
/// observer's during high-latitude correction.
pub fn sun_position_at(instant: f64, latitude: f64, longitude: f64) -> HorizontalPosition {
    let eq = equatorial_position(instant);
    let ha = hour_angle(instant, longitude, eq.right_ascension);
    horizontal_position(ha, eq.declination, deg_to_rad(latitude))
}

pub fn sun_position(instant: f64, location: &Location) -> HorizontalPosition {
    sun_position_at(instant, location.latitude(), location.longitude())
}

pub fn sun_altitude(instant: f64, latitude: f64, longitude: f64) -> f64 {
    sun_position_at(instant, latitude, longitude).altitude
}

pub fn sun_azimuth(instant: f64, location: &Location) -> f64 {
    sun_position(instant, location).azimuth
}

/// Seconds between local noon and the sun standing at `altitude` (radians).
///
/// Declination is re-evaluated at the current estimate on each of two passes.
/// Fails when the sun never reaches `altitude` at this latitude.
pub fn sun_time(altitude: f64, noon: f64, latitude: f64) -> CalcResult<f64> {
    let lat = deg_to_rad(latitude);
    let mut offset = 0.0;
    for _ in 0..SUN_TIME_ITERATIONS {
        let dec = declination(noon + offset);
        let cos_h = (altitude.sin() - dec.sin() * lat.sin()) / (dec.cos() * lat.cos());
        if !(-1.0..=1.0).contains(&cos_h) {
            return Err(CalcError::UnreachableAltitude {
                altitude_deg: altitude.to_degrees(),
                latitude_deg: latitude,
            });
        }
        offset = cos_h.acos() * SECONDS_PER_RADIAN;
    }
    Ok(offset)
}
