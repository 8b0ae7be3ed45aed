//! Unix time, Julian dates and the anchors of a calculation day.
//!
//! A calculation day starts at civil midnight in the configured time zone
//! (`basetime`). Solar midnight and solar noon are offsets from it derived
//! from the zone's meridian and the observer's longitude.

use crate::angles::{DEGREES_PER_HOUR, SECONDS_PER_DEGREE};
use crate::solar;
use crate::types::{Location, TimeZoneOffset};

pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Julian date of the Unix epoch, 1970-01-01 0:00 UTC. The fractional excess
/// over .5 is a fixed TT-UTC difference.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.500_761_306;

/// J2000.0, 2000-01-01 12:00 TT.
pub const J2000_JD: f64 = 2_451_545.0;

pub const DAYS_PER_CENTURY: f64 = 36525.0;

pub fn unix_to_julian(seconds: f64) -> f64 {
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

pub fn julian_to_unix(jd: f64) -> f64 {
    SECONDS_PER_DAY * (jd - UNIX_EPOCH_JD)
}

/// Days since J2000.0.
pub fn days_since_j2000(seconds: f64) -> f64 {
    unix_to_julian(seconds) - J2000_JD
}

/// Julian centuries since J2000.0.
pub fn centuries_since_j2000(seconds: f64) -> f64 {
    days_since_j2000(seconds) / DAYS_PER_CENTURY
}

/// Seconds from civil midnight to the instant the mean sun crosses the
/// observer's anti-meridian.
fn meridian_offset(zone: TimeZoneOffset, longitude: f64) -> f64 {
    (zone.hours() * DEGREES_PER_HOUR - longitude) * SECONDS_PER_DEGREE
}

/// Mean solar noon of the day starting at `basetime`.
pub fn midday(basetime: f64, zone: TimeZoneOffset, location: &Location) -> f64 {
    basetime + 180.0 * SECONDS_PER_DEGREE + meridian_offset(zone, location.longitude())
}

/// True solar midnight opening the day that starts at `basetime`.
///
/// The equation of time is evaluated once at the mean-midnight estimate.
pub fn midnight(basetime: f64, zone: TimeZoneOffset, location: &Location) -> f64 {
    let mean = basetime + meridian_offset(zone, location.longitude());
    mean - solar::equation_of_time(mean)
}

/// Civil midnight of the calculation day containing `instant`.
///
/// The UTC day is shifted by the zone, then moved one day either way when
/// `instant` lies outside the solar midnights bounding it.
pub fn basetime(instant: f64, zone: TimeZoneOffset, location: &Location) -> f64 {
    let day_begin = (instant / SECONDS_PER_DAY).floor() * SECONDS_PER_DAY - zone.seconds();
    let opening = midnight(day_begin, zone, location);
    let closing = midnight(day_begin + SECONDS_PER_DAY, zone, location);

    if instant > closing {
        day_begin + SECONDS_PER_DAY
    } else if instant < opening {
        day_begin - SECONDS_PER_DAY
    } else {
        day_begin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unix_epoch_maps_to_epoch_jd() {
        assert_eq!(unix_to_julian(0.0), UNIX_EPOCH_JD);
    }

    #[test]
    fn one_day_is_one_julian_day() {
        let d = unix_to_julian(SECONDS_PER_DAY) - unix_to_julian(0.0);
        assert!((d - 1.0).abs() < 1e-9);
    }

    #[test]
    fn j2000_is_zero_centuries() {
        let t = julian_to_unix(J2000_JD);
        assert!(centuries_since_j2000(t).abs() < 1e-12);
    }
}
