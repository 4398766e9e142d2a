// Course module
// A recurring lesson series with its date window and time slot

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::recurrence::RecurrenceRule;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub room_id: Option<i64>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: NaiveTime,
    /// Falls back to the configured default lesson length when absent.
    #[serde(default)]
    pub end_time: Option<NaiveTime>,
    pub recurrence: RecurrenceRule,
}

impl Course {
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Course name cannot be empty".to_string());
        }
        if self.end_date < self.start_date {
            return Err("Course end date cannot be before its start date".to_string());
        }
        if let Some(end_time) = self.end_time {
            if end_time <= self.start_time {
                return Err("Course end time must be after start time".to_string());
            }
        }
        Ok(())
    }

    /// End of each lesson, using `default_minutes` when no end time is set.
    pub fn lesson_end_time(&self, default_minutes: u32) -> Result<NaiveTime, String> {
        if let Some(end_time) = self.end_time {
            return Ok(end_time);
        }

        let (end_time, wrapped) = self
            .start_time
            .overflowing_add_signed(Duration::minutes(i64::from(default_minutes)));
        if wrapped != 0 || end_time <= self.start_time {
            return Err(format!(
                "A {} minute lesson starting at {} would run past midnight",
                default_minutes, self.start_time
            ));
        }
        Ok(end_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn course() -> Course {
        Course {
            id: 7,
            name: "Piano beginners".to_string(),
            teacher_id: Some(1),
            student_id: None,
            room_id: Some(3),
            start_date: NaiveDate::from_ymd_opt(2024, 9, 2).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 12, 20).unwrap(),
            start_time: NaiveTime::from_hms_opt(16, 0, 0).unwrap(),
            end_time: None,
            recurrence: RecurrenceRule::weekly(Weekday::Wed),
        }
    }

    #[test]
    fn test_default_lesson_length() {
        let end = course().lesson_end_time(45).unwrap();
        assert_eq!(end, NaiveTime::from_hms_opt(16, 45, 0).unwrap());
    }

    #[test]
    fn test_explicit_end_time_wins() {
        let mut course = course();
        course.end_time = NaiveTime::from_hms_opt(17, 30, 0);
        assert_eq!(
            course.lesson_end_time(45).unwrap(),
            NaiveTime::from_hms_opt(17, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_lesson_past_midnight_is_rejected() {
        let mut course = course();
        course.start_time = NaiveTime::from_hms_opt(23, 30, 0).unwrap();
        assert!(course.lesson_end_time(45).is_err());
    }

    #[test]
    fn test_validate_date_window() {
        let mut course = course();
        assert!(course.validate().is_ok());
        course.end_date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
        assert!(course.validate().is_err());
    }
}
