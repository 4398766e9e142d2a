use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

/// Failures surfaced by [`SchedulingService`](super::SchedulingService).
#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("Teacher with id {0} not found")]
    TeacherNotFound(i64),

    #[error("Course with id {0} not found")]
    CourseNotFound(i64),

    #[error("End time {end} must be after start time {start}")]
    InvalidTimeRange { start: NaiveTime, end: NaiveTime },

    #[error("End date {end} cannot be before start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Course {id} is invalid: {reason}")]
    InvalidCourse { id: i64, reason: String },

    /// A data source failed to answer.
    #[error(transparent)]
    Source(#[from] anyhow::Error),
}

impl ScheduleError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ScheduleError::TeacherNotFound(_) | ScheduleError::CourseNotFound(_)
        )
    }
}
