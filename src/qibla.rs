use crate::angles::great_circle_bearing;
use crate::error::{CalcError, CalcResult};
use crate::types::Location;

pub const KAABA_LATITUDE: f64 = 21.422517;
pub const KAABA_LONGITUDE: f64 = 39.826166;

/// Bearing from the observer to the Ka'aba, degrees clockwise from north.
pub fn qibla_azimuth(location: &Location) -> CalcResult<f64> {
    great_circle_bearing(
        location.latitude(),
        location.longitude(),
        KAABA_LATITUDE,
        KAABA_LONGITUDE,
    )
    .ok_or(CalcError::QiblaUndefined)
}
