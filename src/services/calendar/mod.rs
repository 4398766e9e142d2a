//! Week calendar aggregation.
//!
//! Builds the Monday–Sunday view used by the weekly and teacher schedules
//! from a snapshot of lessons and holidays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::holiday::Holiday;
use crate::models::lesson::Lesson;
use crate::utils::clock::Clock;
use crate::utils::date::WeekWindow;

/// Which week to show and whose lessons to include.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekQuery {
    /// Any date in the wanted week; today when absent.
    pub anchor: Option<NaiveDate>,
    pub teacher_id: Option<i64>,
    pub student_id: Option<i64>,
}

impl WeekQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn anchored_at(mut self, anchor: NaiveDate) -> Self {
        self.anchor = Some(anchor);
        self
    }

    pub fn for_teacher(mut self, teacher_id: i64) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    pub fn for_student(mut self, student_id: i64) -> Self {
        self.student_id = Some(student_id);
        self
    }

    pub fn window(&self, clock: &dyn Clock) -> WeekWindow {
        WeekWindow::containing(self.anchor.unwrap_or_else(|| clock.today()))
    }

    fn includes(&self, lesson: &Lesson) -> bool {
        if self.teacher_id.is_some() && lesson.teacher_id != self.teacher_id {
            return false;
        }
        if self.student_id.is_some() && lesson.student_id != self.student_id {
            return false;
        }
        true
    }
}

/// View-ready week: lessons by date then start time, holidays by start date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekCalendar {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub lessons: Vec<Lesson>,
    pub holidays: Vec<Holiday>,
}

impl WeekCalendar {
    pub fn window(&self) -> WeekWindow {
        WeekWindow {
            week_start: self.week_start,
            week_end: self.week_end,
        }
    }

    pub fn lessons_on(&self, date: NaiveDate) -> impl Iterator<Item = &Lesson> {
        self.lessons.iter().filter(move |lesson| lesson.date == date)
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty() && self.holidays.is_empty()
    }
}

/// Resolve the query's week and assemble it.
pub fn week_view(
    query: &WeekQuery,
    clock: &dyn Clock,
    lessons: &[Lesson],
    holidays: &[Holiday],
) -> WeekCalendar {
    assemble_week(query.window(clock), query, lessons, holidays)
}

/// Collect the lessons inside `window` that match `query`, plus every
/// holiday intersecting it (partial overlap included).
pub fn assemble_week(
    window: WeekWindow,
    query: &WeekQuery,
    lessons: &[Lesson],
    holidays: &[Holiday],
) -> WeekCalendar {
    let mut week_lessons: Vec<Lesson> = lessons
        .iter()
        .filter(|lesson| window.contains(lesson.date))
        .filter(|lesson| query.includes(lesson))
        .cloned()
        .collect();
    week_lessons.sort_by_key(|lesson| (lesson.date, lesson.start_time, lesson.id));

    let mut week_holidays: Vec<Holiday> = holidays
        .iter()
        .filter(|holiday| holiday.overlaps_range(window.week_start, window.week_end))
        .cloned()
        .collect();
    week_holidays.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.name.cmp(&b.name)));

    log::debug!(
        "Week {} to {}: {} lesson(s), {} holiday(s)",
        window.week_start,
        window.week_end,
        week_lessons.len(),
        week_holidays.len()
    );

    WeekCalendar {
        week_start: window.week_start,
        week_end: window.week_end,
        lessons: week_lessons,
        holidays: week_holidays,
    }
}
