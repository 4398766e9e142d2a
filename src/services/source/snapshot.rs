use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{CourseCatalog, HolidaySource, LessonSource, TeacherDirectory};
use crate::models::course::Course;
use crate::models::holiday::Holiday;
use crate::models::lesson::Lesson;
use crate::models::teacher::Teacher;

/// In-memory schedule data, typically loaded from a JSON export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSnapshot {
    pub teachers: Vec<Teacher>,
    pub courses: Vec<Course>,
    pub lessons: Vec<Lesson>,
    pub holidays: Vec<Holiday>,
}

impl ScheduleSnapshot {
    /// Read and validate a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schedule file {}", path.display()))?;
        let snapshot = Self::from_json(&raw)
            .with_context(|| format!("Failed to load schedule file {}", path.display()))?;

        log::info!(
            "Loaded {} lesson(s), {} holiday(s), {} course(s) from {}",
            snapshot.lessons.len(),
            snapshot.holidays.len(),
            snapshot.courses.len(),
            path.display()
        );
        Ok(snapshot)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(raw).context("Malformed schedule JSON")?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn validate(&self) -> Result<()> {
        for lesson in &self.lessons {
            lesson
                .validate()
                .map_err(|e| anyhow!("Lesson {}: {}", lesson.id, e))?;
        }
        for holiday in &self.holidays {
            holiday
                .validate()
                .map_err(|e| anyhow!("Holiday '{}': {}", holiday.name, e))?;
        }
        for course in &self.courses {
            course
                .validate()
                .map_err(|e| anyhow!("Course {}: {}", course.id, e))?;
        }
        Ok(())
    }
}

impl LessonSource for ScheduleSnapshot {
    fn lessons_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Lesson>> {
        Ok(self
            .lessons
            .iter()
            .filter(|lesson| start <= lesson.date && lesson.date <= end)
            .cloned()
            .collect())
    }
}

impl HolidaySource for ScheduleSnapshot {
    fn holidays_overlapping(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<Holiday>> {
        Ok(self
            .holidays
            .iter()
            .filter(|holiday| holiday.overlaps_range(start, end))
            .cloned()
            .collect())
    }
}

impl TeacherDirectory for ScheduleSnapshot {
    fn find_teacher(&self, id: i64) -> Result<Option<Teacher>> {
        Ok(self.teachers.iter().find(|t| t.id == id).cloned())
    }
}

impl CourseCatalog for ScheduleSnapshot {
    fn find_course(&self, id: i64) -> Result<Option<Course>> {
        Ok(self.courses.iter().find(|c| c.id == id).cloned())
    }
}
