// Date utility functions
// ISO-8601 week numbering and Monday-based week windows

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// ISO-8601 week number together with the ISO year it belongs to.
///
/// The ISO year differs from the calendar year near year boundaries:
/// 2026-12-31 is in week 53 of 2026, while 2024-12-30 is in week 1 of 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct IsoWeekNumber {
    pub week: u32,
    pub iso_year: i32,
}

/// Week 1 contains the year's first Thursday; weeks run Monday to Sunday.
pub fn iso_week(date: NaiveDate) -> IsoWeekNumber {
    let week = date.iso_week();
    IsoWeekNumber {
        week: week.week(),
        iso_year: week.year(),
    }
}

/// Number of ISO weeks (52 or 53) in `iso_year`.
///
/// December 28th always falls in the last ISO week of its year.
pub fn iso_weeks_in_year(iso_year: i32) -> u32 {
    NaiveDate::from_ymd_opt(iso_year, 12, 28)
        .map(|d| d.iso_week().week())
        .unwrap_or(52)
}

/// The Monday starting `date`'s week. May fall in the previous month or year.
pub fn week_start_of(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// Monday through Sunday window containing an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekWindow {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
}

impl WeekWindow {
    pub fn containing(anchor: NaiveDate) -> Self {
        let week_start = week_start_of(anchor);
        Self {
            week_start,
            week_end: week_start + Duration::days(6),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.week_start <= date && date <= self.week_end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.week_start;
        (0..7).map(move |offset| start + Duration::days(offset))
    }

    pub fn iso_week(&self) -> IsoWeekNumber {
        iso_week(self.week_start)
    }
}
