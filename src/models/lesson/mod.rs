// Lesson module
// A single scheduled lesson slot

use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

/// A lesson on one date occupying `[start_time, end_time)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: i64,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub teacher_id: Option<i64>,
    #[serde(default)]
    pub student_id: Option<i64>,
    #[serde(default)]
    pub room_id: Option<i64>,
    #[serde(default)]
    pub course_id: Option<i64>,
    #[serde(default)]
    pub status: LessonStatus,
}

impl Lesson {
    /// Create a scheduled lesson with no teacher, student or room assigned.
    ///
    /// # Examples
    /// ```
    /// use lesson_scheduler::models::lesson::Lesson;
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
    /// let start = NaiveTime::from_hms_opt(10, 0, 0).unwrap();
    /// let end = NaiveTime::from_hms_opt(10, 45, 0).unwrap();
    /// let lesson = Lesson::new(1, date, start, end).unwrap();
    /// assert!(lesson.is_active());
    /// ```
    pub fn new(
        id: i64,
        date: NaiveDate,
        start_time: NaiveTime,
        end_time: NaiveTime,
    ) -> Result<Self, String> {
        let lesson = Self {
            id,
            date,
            start_time,
            end_time,
            teacher_id: None,
            student_id: None,
            room_id: None,
            course_id: None,
            status: LessonStatus::Scheduled,
        };
        lesson.validate()?;
        Ok(lesson)
    }

    pub fn with_teacher(mut self, teacher_id: i64) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    pub fn with_student(mut self, student_id: i64) -> Self {
        self.student_id = Some(student_id);
        self
    }

    pub fn with_room(mut self, room_id: i64) -> Self {
        self.room_id = Some(room_id);
        self
    }

    pub fn with_course(mut self, course_id: i64) -> Self {
        self.course_id = Some(course_id);
        self
    }

    pub fn with_status(mut self, status: LessonStatus) -> Self {
        self.status = status;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.end_time <= self.start_time {
            return Err("Lesson end time must be after start time".to_string());
        }
        Ok(())
    }

    /// Cancelled lessons free their slot.
    pub fn is_active(&self) -> bool {
        self.status != LessonStatus::Cancelled
    }

    pub fn duration(&self) -> Duration {
        self.end_time - self.start_time
    }

    /// Half-open overlap on the same date. Touching ranges do not overlap.
    pub fn overlaps(&self, date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> bool {
        if self.date != date {
            return false;
        }
        self.start_time < end_time && start_time < self.end_time
    }
}
