// Service module exports

pub mod availability;
pub mod calendar;
pub mod planner;
pub mod recurrence;
pub mod schedule;
pub mod settings;
pub mod source;
