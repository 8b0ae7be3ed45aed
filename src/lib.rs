pub mod angles;
pub mod clock;
pub mod config;
pub mod error;
pub mod lunar;
pub mod prayer;
pub mod qibla;
pub mod solar;
pub mod time_base;
pub mod timetable;
pub mod types;

pub use angles::{
    arccotangent2, cotangent, deg_to_rad, great_circle_bearing, horizontal_position,
    normalize_angle, rad_to_deg, DEGREES_PER_HOUR, SECONDS_PER_DEGREE,
};

pub use clock::{instant_from_datetime, PrayerClock};

pub use config::{Config, ConfigBuilder};

pub use error::{CalcError, CalcResult};

pub use lunar::{moon_azimuth, moon_equatorial, moon_position};

pub use prayer::{prayer_times, DayAnchors};

pub use qibla::{qibla_azimuth, KAABA_LATITUDE, KAABA_LONGITUDE};

pub use solar::{
    declination, equation_of_time, mean_sidereal_time, right_ascension, sun_altitude,
    sun_azimuth, sun_position, sun_time, true_longitude,
};

pub use time_base::{basetime, julian_to_unix, midday, midnight, unix_to_julian};

pub use timetable::{local_noon, timetable};

pub use types::{
    AsrMethod, CalculationMethod, CalculationMode, CalculationSettings, EquatorialPosition,
    HorizontalPosition, Location, MinuteAdjustments, MoonAccuracy, Prayer, PrayerTimeSet,
    TimeZoneOffset, Timetable, TimetableMetadata, TimetableRow, SUNSET_ALTITUDE,
};
