// Settings module
// Scheduler configuration read from config.toml

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default `env_logger` filter; `RUST_LOG` takes precedence.
    pub log_level: String,
    /// JSON schedule snapshot used by the command line front-end.
    pub data_file: Option<PathBuf>,
    /// Upper bound on lessons realised from one course.
    pub max_occurrences: usize,
    /// Lesson length for courses without an explicit end time.
    pub default_lesson_minutes: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            data_file: None,
            max_occurrences: 520, // ten years of weekly lessons
            default_lesson_minutes: 45,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), String> {
        if self.max_occurrences == 0 {
            return Err("max_occurrences must be at least 1".to_string());
        }
        if self.default_lesson_minutes == 0 || self.default_lesson_minutes >= 24 * 60 {
            return Err("default_lesson_minutes must be between 1 and 1439".to_string());
        }
        Ok(())
    }
}
