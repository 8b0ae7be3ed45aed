use chrono::{Days, NaiveDate, SecondsFormat, TimeZone, Utc};

use crate::config::Config;
use crate::prayer;
use crate::types::{
    CalculationMode, Prayer, Timetable, TimetableMetadata, TimetableRow, TimeZoneOffset,
};

/// Unix instant of 12:00 civil time on `date` in `zone`.
pub fn local_noon(date: NaiveDate, zone: TimeZoneOffset) -> i64 {
    let noon = date.and_hms_opt(12, 0, 0).unwrap_or_default();
    Utc.from_utc_datetime(&noon).timestamp() - zone.seconds().round() as i64
}

/// Prayer times for `days` consecutive civil dates starting at `start`.
pub fn timetable(config: &Config, start: NaiveDate, days: u32) -> Timetable {
    let location = config.location();
    let zone = config.time_zone();
    let settings = config.settings();

    let rows: Vec<TimetableRow> = (0..days)
        .filter_map(|offset| start.checked_add_days(Days::new(u64::from(offset))))
        .map(|date| TimetableRow {
            date,
            times: prayer::prayer_times(local_noon(date, zone), &location, zone, &settings),
        })
        .collect();

    let proportional_rows = rows
        .iter()
        .filter(|row| row.times.mode == CalculationMode::Proportional)
        .count();

    Timetable {
        config: *config,
        metadata: TimetableMetadata {
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false),
            total_rows: rows.len(),
            proportional_rows,
        },
        rows,
    }
}

impl Timetable {
    pub fn row(&self, date: NaiveDate) -> Option<&TimetableRow> {
        self.rows.iter().find(|row| row.date == date)
    }

    /// First prayer strictly after `instant`.
    pub fn next_prayer(&self, instant: i64) -> Option<(Prayer, i64)> {
        self.rows
            .iter()
            .flat_map(|row| Prayer::ALL.map(|p| (p, row.times.get(p))))
            .find(|&(_, time)| time > instant)
    }
}
