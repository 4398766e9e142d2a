// Module exports for models

pub mod conflict;
pub mod course;
pub mod holiday;
pub mod lesson;
pub mod recurrence;
pub mod settings;
pub mod teacher;
