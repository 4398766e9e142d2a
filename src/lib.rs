// Lesson Scheduler Library
// Recurring lesson scheduling and availability engine for a music school

pub mod models;
pub mod services;
pub mod utils;
