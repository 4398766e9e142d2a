// Lesson Scheduler
// Command line front-end over a JSON schedule snapshot

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{NaiveDate, NaiveTime, Weekday};
use clap::{Parser, Subcommand};
use serde::Serialize;

use lesson_scheduler::models::recurrence::{Frequency, RecurrenceRule, WeekParity};
use lesson_scheduler::models::settings::Settings;
use lesson_scheduler::services::availability::SlotRequest;
use lesson_scheduler::services::calendar::WeekQuery;
use lesson_scheduler::services::schedule::SchedulingService;
use lesson_scheduler::services::settings::SettingsService;
use lesson_scheduler::services::source::ScheduleSnapshot;
use lesson_scheduler::utils::clock::SystemClock;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// JSON schedule snapshot; overrides `data_file` from the settings
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the Monday–Sunday week around a date
    Week {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long)]
        teacher: Option<i64>,
        #[arg(long)]
        student: Option<i64>,
    },
    /// Show one teacher's week
    Teacher {
        id: i64,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Check whether a slot is free
    Check {
        #[arg(long)]
        date: NaiveDate,
        #[arg(long, value_parser = parse_time)]
        start: NaiveTime,
        #[arg(long, value_parser = parse_time)]
        end: NaiveTime,
        #[arg(long)]
        teacher: Option<i64>,
        #[arg(long)]
        room: Option<i64>,
        /// Lesson being edited, ignored when looking for clashes
        #[arg(long)]
        exclude: Option<i64>,
    },
    /// List the dates a recurrence rule produces
    Occurrences {
        #[arg(long)]
        from: NaiveDate,
        #[arg(long)]
        to: NaiveDate,
        #[arg(long, default_value = "weekly")]
        frequency: Frequency,
        #[arg(long)]
        day: Weekday,
        #[arg(long, default_value = "all")]
        parity: WeekParity,
    },
    /// Expand a course into lesson slots and report conflicts
    Plan { course: i64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings_service = match &cli.config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::with_default_location()?,
    };
    let settings = settings_service.get()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str()),
    )
    .init();
    log::debug!("Using settings from {}", settings_service.path().display());

    run(cli, settings)
}

fn run(cli: Cli, settings: Settings) -> Result<()> {
    let clock = SystemClock;
    let snapshot = match cli.command {
        Command::Occurrences { .. } => ScheduleSnapshot::default(),
        _ => {
            let data_file = cli
                .data
                .clone()
                .or_else(|| settings.data_file.clone())
                .ok_or_else(|| anyhow!("No schedule data given; pass --data or set data_file"))?;
            ScheduleSnapshot::load(&data_file)?
        }
    };
    let service = SchedulingService::with_settings(&snapshot, &clock, settings);

    match cli.command {
        Command::Week {
            date,
            teacher,
            student,
        } => {
            let query = WeekQuery {
                anchor: date,
                teacher_id: teacher,
                student_id: student,
            };
            print_json(&service.week_view(&query)?)
        }
        Command::Teacher { id, date } => print_json(&service.teacher_schedule(id, date)?),
        Command::Check {
            date,
            start,
            end,
            teacher,
            room,
            exclude,
        } => {
            let request = SlotRequest {
                date,
                start_time: start,
                end_time: end,
                teacher_id: teacher,
                room_id: room,
                exclude_lesson_id: exclude,
            };
            print_json(&service.check_availability(&request)?)
        }
        Command::Occurrences {
            from,
            to,
            frequency,
            day,
            parity,
        } => {
            let rule = RecurrenceRule {
                frequency,
                anchor_day: day,
                week_parity: parity,
            };
            print_json(&service.occurrences(from, to, &rule)?)
        }
        Command::Plan { course } => print_json(&service.plan_course(course)?),
    }
}

fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("'{}' is not a time like 14:30", value))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value).context("Failed to render result")?;
    println!("{}", rendered);
    Ok(())
}
