//! Availability checking for a proposed lesson slot.
//!
//! A slot clashes with an existing, non-cancelled lesson on the same date
//! when their `[start, end)` ranges overlap and they share the requested
//! teacher or room. Any holiday covering the date blocks the slot outright.

use chrono::{NaiveDate, NaiveTime};

use crate::models::conflict::{Availability, Conflict};
use crate::models::holiday::Holiday;
use crate::models::lesson::Lesson;

/// A candidate lesson slot to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotRequest {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub teacher_id: Option<i64>,
    pub room_id: Option<i64>,
    /// Lesson being edited; it never conflicts with itself.
    pub exclude_lesson_id: Option<i64>,
}

impl SlotRequest {
    pub fn new(date: NaiveDate, start_time: NaiveTime, end_time: NaiveTime) -> Result<Self, String> {
        if end_time <= start_time {
            return Err("Slot end time must be after start time".to_string());
        }
        Ok(Self {
            date,
            start_time,
            end_time,
            teacher_id: None,
            room_id: None,
            exclude_lesson_id: None,
        })
    }

    pub fn with_teacher(mut self, teacher_id: i64) -> Self {
        self.teacher_id = Some(teacher_id);
        self
    }

    pub fn with_room(mut self, room_id: i64) -> Self {
        self.room_id = Some(room_id);
        self
    }

    pub fn excluding(mut self, lesson_id: i64) -> Self {
        self.exclude_lesson_id = Some(lesson_id);
        self
    }
}

/// Check `request` against a snapshot of lessons and holidays.
///
/// Teacher and room conflicts come first, ordered by lesson start time,
/// followed by holiday conflicts ordered by holiday start date. A lesson
/// yields at most one conflict per dimension. Expects `request` to have
/// a non-empty time range.
pub fn check_availability(
    request: &SlotRequest,
    lessons: &[Lesson],
    holidays: &[Holiday],
) -> Availability {
    let mut conflicts = Vec::new();

    let mut candidates: Vec<&Lesson> = lessons
        .iter()
        .filter(|lesson| lesson.is_active())
        .filter(|lesson| Some(lesson.id) != request.exclude_lesson_id)
        .filter(|lesson| lesson.overlaps(request.date, request.start_time, request.end_time))
        .collect();
    candidates.sort_by_key(|lesson| (lesson.start_time, lesson.id));

    for lesson in candidates {
        if request.teacher_id.is_some() && lesson.teacher_id == request.teacher_id {
            conflicts.push(Conflict::teacher(lesson));
        }
        if request.room_id.is_some() && lesson.room_id == request.room_id {
            conflicts.push(Conflict::room(lesson));
        }
    }

    let mut blocking: Vec<&Holiday> = holidays
        .iter()
        .filter(|holiday| holiday.contains(request.date))
        .collect();
    blocking.sort_by(|a, b| a.start_date.cmp(&b.start_date).then_with(|| a.name.cmp(&b.name)));
    conflicts.extend(blocking.into_iter().map(|h| Conflict::holiday(h, request.date)));

    if !conflicts.is_empty() {
        log::debug!(
            "Slot {} {}-{} has {} conflict(s)",
            request.date,
            request.start_time,
            request.end_time,
            conflicts.len()
        );
    }

    Availability::from_conflicts(conflicts)
}
