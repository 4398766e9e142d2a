//! Course realisation planning.
//!
//! Expands a course's recurrence into dated lesson slots and checks each
//! one against the existing calendar. Turning the plan into stored
//! lessons is left to the caller.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::conflict::Availability;
use crate::models::course::Course;
use crate::models::holiday::Holiday;
use crate::models::lesson::Lesson;
use crate::services::availability::{check_availability, SlotRequest};
use crate::services::recurrence::occurrences;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedLesson {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub availability: Availability,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoursePlan {
    pub course_id: i64,
    pub lessons: Vec<PlannedLesson>,
    /// More occurrences existed than the configured cap allowed.
    pub truncated: bool,
}

impl CoursePlan {
    pub fn available(&self) -> impl Iterator<Item = &PlannedLesson> {
        self.lessons.iter().filter(|l| l.availability.is_available)
    }

    pub fn conflicting(&self) -> impl Iterator<Item = &PlannedLesson> {
        self.lessons.iter().filter(|l| !l.availability.is_available)
    }
}

/// Plan up to `max_occurrences` lessons for `course`, each ending at `lesson_end`.
///
/// Lessons already belonging to the course are ignored so re-planning an
/// existing course does not clash with itself. Expects `lesson_end` to be
/// after the course start time.
pub fn plan_lessons(
    course: &Course,
    lesson_end: NaiveTime,
    lessons: &[Lesson],
    holidays: &[Holiday],
    max_occurrences: usize,
) -> CoursePlan {
    let others: Vec<Lesson> = lessons
        .iter()
        .filter(|lesson| lesson.course_id != Some(course.id))
        .cloned()
        .collect();

    let mut dates = occurrences(course.start_date, course.end_date, &course.recurrence);
    let mut planned = Vec::new();

    for date in dates.by_ref().take(max_occurrences) {
        let request = SlotRequest {
            date,
            start_time: course.start_time,
            end_time: lesson_end,
            teacher_id: course.teacher_id,
            room_id: course.room_id,
            exclude_lesson_id: None,
        };
        planned.push(PlannedLesson {
            date,
            start_time: course.start_time,
            end_time: lesson_end,
            availability: check_availability(&request, &others, holidays),
        });
    }

    let truncated = dates.next().is_some();
    if truncated {
        log::warn!(
            "Course {} has more than {} occurrences; plan truncated",
            course.id,
            max_occurrences
        );
    }

    CoursePlan {
        course_id: course.id,
        lessons: planned,
        truncated,
    }
}
