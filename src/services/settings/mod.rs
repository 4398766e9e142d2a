//! Scheduler settings loaded from a TOML file.

mod service;

pub use service::SettingsService;
