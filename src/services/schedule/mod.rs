//! Scheduling service entry point.
//! Fetches the relevant snapshot from a [`ScheduleSource`] and hands it to
//! the pure recurrence, availability and calendar modules.

use chrono::NaiveDate;

use crate::models::conflict::Availability;
use crate::models::recurrence::RecurrenceRule;
use crate::models::settings::Settings;
use crate::services::availability::{self, SlotRequest};
use crate::services::calendar::{self, WeekCalendar, WeekQuery};
use crate::services::planner::{self, CoursePlan};
use crate::services::recurrence;
use crate::services::source::ScheduleSource;
use crate::utils::clock::Clock;

mod error;

pub use error::ScheduleError;

pub type Result<T> = std::result::Result<T, ScheduleError>;

/// Service answering calendar, availability and planning queries.
pub struct SchedulingService<'a, S: ScheduleSource + ?Sized> {
    source: &'a S,
    clock: &'a dyn Clock,
    settings: Settings,
}

impl<'a, S: ScheduleSource + ?Sized> SchedulingService<'a, S> {
    pub fn new(source: &'a S, clock: &'a dyn Clock) -> Self {
        Self::with_settings(source, clock, Settings::default())
    }

    pub fn with_settings(source: &'a S, clock: &'a dyn Clock, settings: Settings) -> Self {
        Self {
            source,
            clock,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Monday–Sunday view around the query's anchor (today by default).
    pub fn week_view(&self, query: &WeekQuery) -> Result<WeekCalendar> {
        let window = query.window(self.clock);
        let lessons = self
            .source
            .lessons_between(window.week_start, window.week_end)?;
        let holidays = self
            .source
            .holidays_overlapping(window.week_start, window.week_end)?;

        Ok(calendar::assemble_week(window, query, &lessons, &holidays))
    }

    /// Week view scoped to one teacher.
    ///
    /// An unknown teacher is [`ScheduleError::TeacherNotFound`]; a known
    /// teacher with no lessons yields an empty week.
    pub fn teacher_schedule(
        &self,
        teacher_id: i64,
        anchor: Option<NaiveDate>,
    ) -> Result<WeekCalendar> {
        let teacher = self
            .source
            .find_teacher(teacher_id)?
            .ok_or(ScheduleError::TeacherNotFound(teacher_id))?;
        log::debug!("Building schedule for teacher {} ({})", teacher.id, teacher.name);

        let query = WeekQuery {
            anchor,
            teacher_id: Some(teacher_id),
            student_id: None,
        };
        self.week_view(&query)
    }

    pub fn check_availability(&self, request: &SlotRequest) -> Result<Availability> {
        if request.end_time <= request.start_time {
            return Err(ScheduleError::InvalidTimeRange {
                start: request.start_time,
                end: request.end_time,
            });
        }

        let lessons = self.source.lessons_between(request.date, request.date)?;
        let holidays = self.source.holidays_overlapping(request.date, request.date)?;

        Ok(availability::check_availability(request, &lessons, &holidays))
    }

    /// Occurrence dates of `rule` in `[start, end]`.
    pub fn occurrences(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        rule: &RecurrenceRule,
    ) -> Result<Vec<NaiveDate>> {
        if end < start {
            return Err(ScheduleError::InvalidDateRange { start, end });
        }
        Ok(recurrence::generate(start, end, rule))
    }

    /// Expand a course into checked lesson slots, capped by `max_occurrences`.
    pub fn plan_course(&self, course_id: i64) -> Result<CoursePlan> {
        let course = self
            .source
            .find_course(course_id)?
            .ok_or(ScheduleError::CourseNotFound(course_id))?;

        course
            .validate()
            .map_err(|reason| ScheduleError::InvalidCourse { id: course.id, reason })?;
        let lesson_end = course
            .lesson_end_time(self.settings.default_lesson_minutes)
            .map_err(|reason| ScheduleError::InvalidCourse { id: course.id, reason })?;

        let lessons = self
            .source
            .lessons_between(course.start_date, course.end_date)?;
        let holidays = self
            .source
            .holidays_overlapping(course.start_date, course.end_date)?;

        let plan = planner::plan_lessons(
            &course,
            lesson_end,
            &lessons,
            &holidays,
            self.settings.max_occurrences,
        );
        log::info!(
            "Planned {} lesson(s) for course {} ({} with conflicts)",
            plan.lessons.len(),
            course.id,
            plan.conflicting().count()
        );
        Ok(plan)
    }
}
