// Holiday module
// School closure over an inclusive date range

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A holiday blocks every lesson on `[start_date, end_date]`, whatever the time of day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Holiday {
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<Self, String> {
        let holiday = Self {
            name: name.into(),
            start_date,
            end_date,
        };
        holiday.validate()?;
        Ok(holiday)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Holiday name cannot be empty".to_string());
        }
        if self.end_date < self.start_date {
            return Err("Holiday end date cannot be before its start date".to_string());
        }
        Ok(())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Interval intersection with `[start, end]`; partial overlap counts.
    pub fn overlaps_range(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.start_date <= end && start <= self.end_date
    }
}
