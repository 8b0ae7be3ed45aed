use chrono::{DateTime, TimeZone, Utc};

use crate::config::Config;
use crate::error::CalcResult;
use crate::lunar;
use crate::prayer;
use crate::qibla;
use crate::solar;
use crate::types::{MoonAccuracy, PrayerTimeSet};

pub fn instant_from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> i64 {
    dt.timestamp()
}

/// Convenience wrapper binding a [`Config`] to the calculations. Instants are
/// optional; `None` means the current system time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PrayerClock {
    config: Config,
}

impl PrayerClock {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn resolve(instant: Option<i64>) -> i64 {
        instant.unwrap_or_else(|| Utc::now().timestamp())
    }

    pub fn times(&self, instant: Option<i64>) -> PrayerTimeSet {
        prayer::prayer_times(
            Self::resolve(instant),
            &self.config.location(),
            self.config.time_zone(),
            &self.config.settings(),
        )
    }

    pub fn times_at<Tz: TimeZone>(&self, dt: &DateTime<Tz>) -> PrayerTimeSet {
        self.times(Some(instant_from_datetime(dt)))
    }

    pub fn qibla(&self) -> CalcResult<f64> {
        qibla::qibla_azimuth(&self.config.location())
    }

    pub fn sun_azimuth(&self, instant: Option<i64>) -> f64 {
        solar::sun_azimuth(Self::resolve(instant) as f64, &self.config.location())
    }

    pub fn moon_azimuth(&self, instant: Option<i64>) -> f64 {
        lunar::moon_azimuth(
            Self::resolve(instant) as f64,
            &self.config.location(),
            MoonAccuracy::default(),
        )
    }
}
