//! Validated configuration.
//!
//! Raw input is never rejected: anything out of range is replaced by a
//! documented default and logged, so the calculator only ever sees valid
//! values.

use std::str::FromStr;

use log::warn;

use crate::error::CalcError;
use crate::types::{
    AsrMethod, CalculationMethod, CalculationSettings, Location, MinuteAdjustments, TimeZoneOffset,
};

/// The Prophet's Mosque, Medina.
pub const DEFAULT_LATITUDE: f64 = 24.494647;
pub const DEFAULT_LONGITUDE: f64 = 39.770508;
pub const DEFAULT_TIME_ZONE: f64 = 3.0;

pub const MIN_TIME_ZONE: f64 = -13.0;
pub const MAX_TIME_ZONE: f64 = 15.0;

impl Location {
    /// Accepts `-90 < latitude < 90` and `-180 <= longitude < 180`.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        let valid = latitude > -90.0 && latitude < 90.0 && longitude >= -180.0 && longitude < 180.0;
        if valid {
            Self { latitude, longitude }
        } else {
            warn!("location ({latitude}, {longitude}) out of range, using default");
            Self::default()
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self {
            latitude: DEFAULT_LATITUDE,
            longitude: DEFAULT_LONGITUDE,
        }
    }
}

impl TimeZoneOffset {
    pub fn new(hours: f64) -> Self {
        if (MIN_TIME_ZONE..=MAX_TIME_ZONE).contains(&hours) {
            Self(hours)
        } else {
            warn!("time zone {hours} out of range, using default");
            Self::default()
        }
    }
}

impl Default for TimeZoneOffset {
    fn default() -> Self {
        Self(DEFAULT_TIME_ZONE)
    }
}

impl FromStr for CalculationMethod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::UnknownMethod(s.to_string()))
    }
}

impl CalculationMethod {
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

impl FromStr for AsrMethod {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalcError::UnknownMethod(s.to_string()))
    }
}

impl AsrMethod {
    pub fn from_index(index: i64) -> Option<Self> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }
}

impl MinuteAdjustments {
    pub fn new(minutes: [f64; 6]) -> Self {
        Self::from_slice(&minutes)
    }

    /// Requires exactly six finite values; anything else yields all zeros.
    pub fn from_slice(minutes: &[f64]) -> Self {
        match <[f64; 6]>::try_from(minutes) {
            Ok(values) if values.iter().all(|m| m.is_finite()) => Self(values),
            _ => {
                warn!("minute adjustments {minutes:?} invalid, using zeros");
                Self::default()
            }
        }
    }
}

/// Everything a calculation needs besides the instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Config {
    location: Location,
    time_zone: TimeZoneOffset,
    method: CalculationMethod,
    asr_method: AsrMethod,
    adjustments: MinuteAdjustments,
}

impl Config {
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude()
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude()
    }

    pub fn time_zone(&self) -> TimeZoneOffset {
        self.time_zone
    }

    pub fn method(&self) -> CalculationMethod {
        self.method
    }

    pub fn asr_method(&self) -> AsrMethod {
        self.asr_method
    }

    pub fn adjustments(&self) -> MinuteAdjustments {
        self.adjustments
    }

    pub fn settings(&self) -> CalculationSettings {
        CalculationSettings::new(self.method, self.asr_method, self.adjustments)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn location(mut self, latitude: f64, longitude: f64) -> Self {
        self.config.location = Location::new(latitude, longitude);
        self
    }

    pub fn time_zone(mut self, hours: f64) -> Self {
        self.config.time_zone = TimeZoneOffset::new(hours);
        self
    }

    pub fn method(mut self, method: CalculationMethod) -> Self {
        self.config.method = method;
        self
    }

    pub fn method_name(self, name: &str) -> Self {
        let method = name.parse().unwrap_or_else(|err| {
            warn!("{err}, using default calculation method");
            CalculationMethod::default()
        });
        self.method(method)
    }

    pub fn method_index(self, index: i64) -> Self {
        let method = CalculationMethod::from_index(index).unwrap_or_else(|| {
            warn!("calculation method index {index} out of range, using default");
            CalculationMethod::default()
        });
        self.method(method)
    }

    pub fn asr_method(mut self, asr_method: AsrMethod) -> Self {
        self.config.asr_method = asr_method;
        self
    }

    pub fn asr_method_name(self, name: &str) -> Self {
        let asr = name.parse().unwrap_or_else(|err| {
            warn!("{err}, using default asr method");
            AsrMethod::default()
        });
        self.asr_method(asr)
    }

    pub fn asr_method_index(self, index: i64) -> Self {
        let asr = AsrMethod::from_index(index).unwrap_or_else(|| {
            warn!("asr method index {index} out of range, using default");
            AsrMethod::default()
        });
        self.asr_method(asr)
    }

    pub fn adjustments(mut self, minutes: &[f64]) -> Self {
        self.config.adjustments = MinuteAdjustments::from_slice(minutes);
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
