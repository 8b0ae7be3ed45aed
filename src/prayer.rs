//! Daily prayer times.
//!
//! Times are solved geometrically from the sun's altitude around local noon.
//! When the sun does not get low enough at night or high enough at noon, the
//! working latitude is moved toward the equator until it does. If that is not
//! possible the times become fixed proportional offsets from dhohr.
//!
//! The working latitude is a local value threaded through the calls; nothing
//! here mutates shared state.

use log::debug;

use crate::angles::{arccotangent2, deg_to_rad, SECONDS_PER_DEGREE};
use crate::error::CalcResult;
use crate::solar::{self, SECONDS_PER_RADIAN};
use crate::time_base::{self, SECONDS_PER_DAY};
use crate::types::{
    CalculationMode, CalculationSettings, Location, Prayer, PrayerTimeSet, TimeZoneOffset,
    SUNSET_ALTITUDE,
};

/// Fraction by which the altitude window is widened on both sides.
const OVERHEAD: f64 = 0.05;
/// Minimum noon altitude, in degrees, before widening.
const LATITUDE_UPPER: f64 = 0.0;
/// Tolerated miss, in degrees, after the latitude correction.
const ERROR_MARGIN: f64 = 0.1;

/// Reference instants of one calculation day, Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayAnchors {
    pub basetime: f64,
    pub midnight: f64,
    pub next_midnight: f64,
    pub midday: f64,
    pub dhohr: f64,
}

impl DayAnchors {
    pub fn new(instant: f64, zone: TimeZoneOffset, location: &Location) -> Self {
        let basetime = time_base::basetime(instant, zone, location);
        let midday = time_base::midday(basetime, zone, location);
        Self {
            basetime,
            midnight: time_base::midnight(basetime, zone, location),
            next_midnight: time_base::midnight(basetime + SECONDS_PER_DAY, zone, location),
            midday,
            dhohr: midday - solar::equation_of_time(midday),
        }
    }
}

/// Altitude window (lower, upper) the sun must leave at midnight and noon.
///
/// The asr shadow factor takes part in the minimum as configured.
pub fn altitude_window(settings: &CalculationSettings) -> (f64, f64) {
    let lower = settings
        .fajr_angle
        .min(settings.asr_factor)
        .min(settings.isha_angle);
    let spread = LATITUDE_UPPER - lower;
    (lower - spread * OVERHEAD, LATITUDE_UPPER + spread * OVERHEAD)
}

/// Latitude at which the geometric method can be used, or `None` when the
/// proportional fallback is required.
pub fn working_latitude(
    anchors: &DayAnchors,
    location: &Location,
    settings: &CalculationSettings,
) -> Option<f64> {
    let (lower, upper) = altitude_window(settings);
    let latitude = location.latitude();
    let longitude = location.longitude();

    let night = solar::sun_altitude(anchors.midnight, latitude, longitude);
    let day = solar::sun_altitude(anchors.dhohr, latitude, longitude);
    if night <= lower && day >= upper {
        return Some(latitude);
    }

    let adjust = (night - lower).max(upper - day);
    if latitude.abs() < adjust {
        debug!("latitude {latitude} cannot absorb a {adjust:.3}° correction");
        return None;
    }

    let shifted = latitude - adjust.copysign(latitude);
    let night = solar::sun_altitude(anchors.midnight, shifted, longitude);
    let day = solar::sun_altitude(anchors.dhohr, shifted, longitude);
    if night - lower > ERROR_MARGIN || upper - day > ERROR_MARGIN {
        debug!("latitude correction to {shifted:.3} still misses the altitude window");
        return None;
    }

    debug!("latitude {latitude} corrected to {shifted:.3} for this day");
    Some(shifted)
}

/// Asr altitude in radians: shadow equal to `factor` heights plus the noon shadow.
///
/// The noon term is signed. When the sun culminates far enough on the pole
/// side the result lies above 90° and the geometric branch cannot use it.
pub fn asr_altitude(factor: f64, latitude: f64, declination: f64) -> f64 {
    arccotangent2(factor + (deg_to_rad(latitude) - declination).tan(), 1.0)
}

/// Geometric times in [`Prayer::ALL`] order, unadjusted.
pub fn geometric_times(
    anchors: &DayAnchors,
    latitude: f64,
    settings: &CalculationSettings,
) -> CalcResult<[f64; 6]> {
    let noon = anchors.midday;
    let apparent = |t: f64| t - solar::equation_of_time(t);
    let before = |altitude: f64| -> CalcResult<f64> {
        Ok(apparent(noon - solar::sun_time(altitude, noon, latitude)?))
    };
    let after = |altitude: f64| -> CalcResult<f64> {
        Ok(apparent(noon + solar::sun_time(altitude, noon, latitude)?))
    };

    let sunset = deg_to_rad(SUNSET_ALTITUDE);
    let asr = asr_altitude(settings.asr_factor, latitude, solar::declination(noon));

    Ok([
        before(deg_to_rad(settings.fajr_angle))?,
        before(sunset)?,
        anchors.dhohr,
        after(asr)?,
        after(sunset)?,
        after(deg_to_rad(settings.isha_angle))? + settings.isha_minutes * 60.0,
    ])
}

/// Proportional times in [`Prayer::ALL`] order, unadjusted: every degree of
/// depression counts as four minutes from dhohr.
pub fn proportional_times(anchors: &DayAnchors, settings: &CalculationSettings) -> [f64; 6] {
    let dhohr = anchors.dhohr;
    let offset = |angle: f64| (90.0 - angle) * SECONDS_PER_DEGREE;
    [
        dhohr - offset(settings.fajr_angle),
        dhohr - offset(SUNSET_ALTITUDE),
        dhohr,
        dhohr + settings.asr_factor.atan() * SECONDS_PER_RADIAN,
        dhohr + offset(SUNSET_ALTITUDE),
        dhohr + offset(settings.isha_angle),
    ]
}

pub fn prayer_times(
    instant: i64,
    location: &Location,
    zone: TimeZoneOffset,
    settings: &CalculationSettings,
) -> PrayerTimeSet {
    let anchors = DayAnchors::new(instant as f64, zone, location);

    let geometric = working_latitude(&anchors, location, settings).and_then(|latitude| {
        match geometric_times(&anchors, latitude, settings) {
            Ok(times) => Some(times),
            Err(err) => {
                debug!("falling back to proportional times: {err}");
                None
            }
        }
    });
    let (mut times, mode) = match geometric {
        Some(times) => (times, CalculationMode::Geometric),
        None => (
            proportional_times(&anchors, settings),
            CalculationMode::Proportional,
        ),
    };

    for (time, prayer) in times.iter_mut().zip(Prayer::ALL) {
        *time += settings.adjustments.get(prayer) * 60.0;
    }

    let round = |t: f64| t.round() as i64;
    PrayerTimeSet {
        basetime: round(anchors.basetime),
        fajr: round(times[0]),
        shurooq: round(times[1]),
        dhohr: round(times[2]),
        asr: round(times[3]),
        maghrib: round(times[4]),
        isha: round(times[5]),
        next_midnight: round(anchors.next_midnight),
        mode,
    }
}
