use chrono::{DateTime, TimeZone, Utc};

use crate::error::CalcError;

/// Altitude of the sun's upper limb at sunrise and sunset, refraction included.
pub const SUNSET_ALTITUDE: f64 = -0.8333;

/// Observer position in degrees. Built through [`Location::new`], which
/// substitutes the default pair for out-of-range input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

impl Location {
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Civil offset from UTC in hours, within [-13, 15].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeZoneOffset(pub(crate) f64);

impl TimeZoneOffset {
    pub fn hours(&self) -> f64 {
        self.0
    }

    pub fn seconds(&self) -> f64 {
        self.0 * 3600.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CalculationMethod {
    /// University of Islamic Sciences, Karachi.
    #[default]
    Karachi,
    /// Islamic Society of North America.
    Isna,
    /// Muslim World League.
    Mwl,
    /// Umm al-Qura, Makkah. Isha is a fixed interval after sunset.
    Makkah,
    /// Egyptian General Authority of Survey.
    Egypt,
}

impl CalculationMethod {
    pub const ALL: [CalculationMethod; 5] = [
        CalculationMethod::Karachi,
        CalculationMethod::Isna,
        CalculationMethod::Mwl,
        CalculationMethod::Makkah,
        CalculationMethod::Egypt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CalculationMethod::Karachi => "Karachi",
            CalculationMethod::Isna => "ISNA",
            CalculationMethod::Mwl => "MWL",
            CalculationMethod::Makkah => "Makkah",
            CalculationMethod::Egypt => "Egypt",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// (fajr angle, isha angle, isha minutes after maghrib)
    pub fn parameters(&self) -> (f64, f64, f64) {
        match self {
            CalculationMethod::Karachi => (-18.0, -18.0, 0.0),
            CalculationMethod::Isna => (-15.0, -15.0, 0.0),
            CalculationMethod::Mwl => (-18.0, -17.0, 0.0),
            CalculationMethod::Makkah => (-19.0, SUNSET_ALTITUDE, 90.0),
            CalculationMethod::Egypt => (-19.5, -17.5, 0.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AsrMethod {
    #[default]
    Shafii,
    Hanafi,
}

impl AsrMethod {
    pub const ALL: [AsrMethod; 2] = [AsrMethod::Shafii, AsrMethod::Hanafi];

    pub fn name(&self) -> &'static str {
        match self {
            AsrMethod::Shafii => "Shafii",
            AsrMethod::Hanafi => "Hanafi",
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Shadow length, in object heights, added to the noon shadow.
    pub fn shadow_factor(&self) -> f64 {
        match self {
            AsrMethod::Shafii => 1.0,
            AsrMethod::Hanafi => 2.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Prayer {
    Fajr,
    Shurooq,
    Dhohr,
    Asr,
    Maghrib,
    Isha,
}

impl Prayer {
    pub const ALL: [Prayer; 6] = [
        Prayer::Fajr,
        Prayer::Shurooq,
        Prayer::Dhohr,
        Prayer::Asr,
        Prayer::Maghrib,
        Prayer::Isha,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Prayer::Fajr => "Fajr",
            Prayer::Shurooq => "Shurooq",
            Prayer::Dhohr => "Dhohr",
            Prayer::Asr => "Asr",
            Prayer::Maghrib => "Maghrib",
            Prayer::Isha => "Isha",
        }
    }
}

/// Signed minute offsets applied after calculation, in [`Prayer::ALL`] order.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MinuteAdjustments(pub(crate) [f64; 6]);

impl MinuteAdjustments {
    pub fn minutes(&self) -> [f64; 6] {
        self.0
    }

    pub fn get(&self, prayer: Prayer) -> f64 {
        self.0[prayer as usize]
    }
}

/// Immutable parameter set consumed by the calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationSettings {
    pub fajr_angle: f64,
    pub isha_angle: f64,
    pub isha_minutes: f64,
    pub asr_factor: f64,
    pub adjustments: MinuteAdjustments,
}

impl CalculationSettings {
    pub fn new(method: CalculationMethod, asr: AsrMethod, adjustments: MinuteAdjustments) -> Self {
        let (fajr_angle, isha_angle, isha_minutes) = method.parameters();
        Self {
            fajr_angle,
            isha_angle,
            isha_minutes,
            asr_factor: asr.shadow_factor(),
            adjustments,
        }
    }
}

impl Default for CalculationSettings {
    fn default() -> Self {
        Self::new(
            CalculationMethod::default(),
            AsrMethod::default(),
            MinuteAdjustments::default(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculationMode {
    /// Times solved from the sun's altitude, possibly at a corrected latitude.
    Geometric,
    /// Fixed proportional offsets from dhohr.
    Proportional,
}

/// The eight instants of one calculation day, as Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrayerTimeSet {
    pub basetime: i64,
    pub fajr: i64,
    pub shurooq: i64,
    pub dhohr: i64,
    pub asr: i64,
    pub maghrib: i64,
    pub isha: i64,
    pub next_midnight: i64,
    pub mode: CalculationMode,
}

impl PrayerTimeSet {
    pub fn as_array(&self) -> [i64; 8] {
        [
            self.basetime,
            self.fajr,
            self.shurooq,
            self.dhohr,
            self.asr,
            self.maghrib,
            self.isha,
            self.next_midnight,
        ]
    }

    pub fn get(&self, prayer: Prayer) -> i64 {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Shurooq => self.shurooq,
            Prayer::Dhohr => self.dhohr,
            Prayer::Asr => self.asr,
            Prayer::Maghrib => self.maghrib,
            Prayer::Isha => self.isha,
        }
    }

    /// All eight instants as UTC datetimes, or `None` if any lies outside
    /// chrono's representable range.
    pub fn to_utc(&self) -> Option<[DateTime<Utc>; 8]> {
        let mut out = [DateTime::<Utc>::MIN_UTC; 8];
        for (slot, t) in out.iter_mut().zip(self.as_array()) {
            *slot = Utc.timestamp_opt(t, 0).single()?;
        }
        Some(out)
    }

    pub fn is_ordered(&self) -> bool {
        self.as_array().windows(2).all(|w| w[0] <= w[1])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum MoonAccuracy {
    /// Mean anomaly used directly as the eccentric anomaly.
    MeanAnomaly,
    /// Kepler's equation refined by Newton iteration.
    Kepler,
    /// Kepler plus the largest perturbations (evection, variation, annual equation).
    #[default]
    Perturbed,
    /// All perturbation terms.
    Full,
}

impl MoonAccuracy {
    /// Maps any level outside 0-3 to the default.
    pub fn from_level(level: i64) -> Self {
        u8::try_from(level)
            .ok()
            .and_then(|l| Self::try_from(l).ok())
            .unwrap_or_default()
    }

    pub fn level(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for MoonAccuracy {
    type Error = CalcError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(MoonAccuracy::MeanAnomaly),
            1 => Ok(MoonAccuracy::Kepler),
            2 => Ok(MoonAccuracy::Perturbed),
            3 => Ok(MoonAccuracy::Full),
            other => Err(CalcError::InvalidAccuracy(other)),
        }
    }
}

/// Geocentric equatorial coordinates, radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    pub right_ascension: f64,
    pub declination: f64,
}

/// Horizon coordinates, degrees. Azimuth is measured from north through east.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    pub altitude: f64,
    pub azimuth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimetableRow {
    pub date: chrono::NaiveDate,
    pub times: PrayerTimeSet,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimetableMetadata {
    pub generated_at: String,
    pub total_rows: usize,
    pub proportional_rows: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Timetable {
    pub config: crate::config::Config,
    pub rows: Vec<TimetableRow>,
    pub metadata: TimetableMetadata,
}
