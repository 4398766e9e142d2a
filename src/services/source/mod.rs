//! Read-only data sources the scheduling service pulls its snapshot from.
//!
//! Persistence lives outside this crate; anything that can answer these
//! queries can back a [`SchedulingService`](crate::services::schedule::SchedulingService).

use anyhow::Result;
use chrono::NaiveDate;

use crate::models::course::Course;
use crate::models::holiday::Holiday;
use crate::models::lesson::Lesson;
use crate::models::teacher::Teacher;

mod snapshot;

pub use snapshot::ScheduleSnapshot;

pub trait LessonSource {
    /// Lessons dated within `[start, end]`, any status.
    fn lessons_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Lesson>>;
}

pub trait HolidaySource {
    /// Holidays intersecting `[start, end]`.
    fn holidays_overlapping(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Holiday>>;
}

pub trait TeacherDirectory {
    fn find_teacher(&self, id: i64) -> Result<Option<Teacher>>;
}

pub trait CourseCatalog {
    fn find_course(&self, id: i64) -> Result<Option<Course>>;
}

/// Everything the scheduling service reads.
pub trait ScheduleSource: LessonSource + HolidaySource + TeacherDirectory + CourseCatalog {}

impl<T> ScheduleSource for T where T: LessonSource + HolidaySource + TeacherDirectory + CourseCatalog {}
