// Test fixtures - reusable test data
// Provides consistent schedule data across all test files
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime};
use lesson_scheduler::models::holiday::Holiday;
use lesson_scheduler::models::lesson::Lesson;

pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Friday in ISO week 11 of 2024
    pub fn mid_march_2024() -> NaiveDate {
        ymd(2024, 3, 15)
    }

    /// Monday of ISO week 52 in a 53-week year
    pub fn dec_21_2026() -> NaiveDate {
        ymd(2026, 12, 21)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample lessons and holidays for testing
pub mod schedule {
    use super::*;

    /// Teacher 1 in room 2, Tuesday 10:00-11:00
    pub fn piano_lesson() -> Lesson {
        Lesson::new(1, ymd(2024, 3, 12), hm(10, 0), hm(11, 0))
            .unwrap()
            .with_teacher(1)
            .with_room(2)
            .with_student(100)
    }

    /// Teacher 2 in room 3, Thursday 15:00-15:45
    pub fn cello_lesson() -> Lesson {
        Lesson::new(2, ymd(2024, 3, 14), hm(15, 0), hm(15, 45))
            .unwrap()
            .with_teacher(2)
            .with_room(3)
            .with_student(101)
    }

    /// Teacher 1, the following Monday
    pub fn next_week_lesson() -> Lesson {
        Lesson::new(3, ymd(2024, 3, 18), hm(9, 0), hm(10, 0))
            .unwrap()
            .with_teacher(1)
            .with_student(100)
    }

    pub fn christmas() -> Holiday {
        Holiday::new("Christmas", ymd(2024, 12, 24), ymd(2024, 12, 26)).unwrap()
    }

    pub fn easter_break() -> Holiday {
        Holiday::new("Easter break", ymd(2024, 3, 16), ymd(2024, 4, 1)).unwrap()
    }
}
