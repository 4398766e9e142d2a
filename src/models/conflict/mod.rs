// Conflict module
// Transient scheduling clashes reported by the availability checker

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::holiday::Holiday;
use crate::models::lesson::Lesson;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictKind {
    Teacher,
    Room,
    Holiday,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conflict {
    #[serde(rename = "type")]
    pub kind: ConflictKind,
    pub description: String,
    /// The clashing lesson, for teacher and room conflicts.
    pub lesson_id: Option<i64>,
    /// The blocking holiday, for holiday conflicts.
    pub holiday_name: Option<String>,
}

impl Conflict {
    pub fn teacher(lesson: &Lesson) -> Self {
        Self {
            kind: ConflictKind::Teacher,
            description: format!(
                "Teacher {} already teaches lesson {} on {} from {} to {}",
                lesson.teacher_id.unwrap_or_default(),
                lesson.id,
                lesson.date,
                fmt_time(lesson.start_time),
                fmt_time(lesson.end_time),
            ),
            lesson_id: Some(lesson.id),
            holiday_name: None,
        }
    }

    pub fn room(lesson: &Lesson) -> Self {
        Self {
            kind: ConflictKind::Room,
            description: format!(
                "Room {} is booked for lesson {} on {} from {} to {}",
                lesson.room_id.unwrap_or_default(),
                lesson.id,
                lesson.date,
                fmt_time(lesson.start_time),
                fmt_time(lesson.end_time),
            ),
            lesson_id: Some(lesson.id),
            holiday_name: None,
        }
    }

    pub fn holiday(holiday: &Holiday, date: NaiveDate) -> Self {
        Self {
            kind: ConflictKind::Holiday,
            description: format!(
                "{} falls within holiday '{}' ({} to {})",
                date, holiday.name, holiday.start_date, holiday.end_date
            ),
            lesson_id: None,
            holiday_name: Some(holiday.name.clone()),
        }
    }
}

/// Result of an availability check. Available iff there are no conflicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub is_available: bool,
    pub conflicts: Vec<Conflict>,
}

impl Availability {
    pub fn from_conflicts(conflicts: Vec<Conflict>) -> Self {
        Self {
            is_available: conflicts.is_empty(),
            conflicts,
        }
    }

    pub fn conflicts_of(&self, kind: ConflictKind) -> impl Iterator<Item = &Conflict> {
        self.conflicts.iter().filter(move |c| c.kind == kind)
    }
}

fn fmt_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}
