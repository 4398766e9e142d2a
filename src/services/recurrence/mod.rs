//! Occurrence generation for course recurrence rules.
//!
//! Expands a [`RecurrenceRule`] into the concrete lesson dates inside a
//! caller-supplied `[start, end]` window. Everything here is a pure
//! function of its arguments.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::recurrence::{Frequency, RecurrenceRule, WeekParity};

mod monthly;
mod parity;

pub use parity::matches_parity;

/// First date on or after `start` that satisfies `rule`, or `None` if it
/// would fall after `end`.
pub fn first_occurrence(
    start: NaiveDate,
    rule: &RecurrenceRule,
    end: NaiveDate,
) -> Option<NaiveDate> {
    let mut date = start;
    while date.weekday() != rule.anchor_day {
        if date >= end {
            return None;
        }
        date = date.succ_opt()?;
    }

    let parity = rule.effective_parity();
    while !matches_parity(date, parity) {
        date = date.checked_add_signed(Duration::weeks(1))?;
    }

    (date <= end).then_some(date)
}

/// The occurrence following `date`.
///
/// Returns `None` only when the next date is beyond chrono's range.
pub fn next_occurrence(date: NaiveDate, rule: &RecurrenceRule) -> Option<NaiveDate> {
    match (rule.frequency, rule.week_parity) {
        (Frequency::Weekly, _) => date.checked_add_signed(Duration::weeks(1)),
        (Frequency::Biweekly, WeekParity::All) => date.checked_add_signed(Duration::weeks(2)),
        (Frequency::Biweekly, parity) => {
            // step a week at a time so week 53 → week 1 stays in phase
            let mut next = date.checked_add_signed(Duration::weeks(1))?;
            while !matches_parity(next, parity) {
                next = next.checked_add_signed(Duration::weeks(1))?;
            }
            Some(next)
        }
        (Frequency::Monthly, _) => monthly::advance_month_keeping_weekday(date, rule.anchor_day),
    }
}

/// All occurrences of `rule` in `[start, end]`, in ascending order.
///
/// An empty result means the window holds no matching date; it is not an
/// error. Callers must ensure `start <= end`.
pub fn generate(start: NaiveDate, end: NaiveDate, rule: &RecurrenceRule) -> Vec<NaiveDate> {
    occurrences(start, end, rule).collect()
}

/// Lazy form of [`generate`].
pub fn occurrences(start: NaiveDate, end: NaiveDate, rule: &RecurrenceRule) -> Occurrences {
    Occurrences {
        rule: *rule,
        end,
        next: first_occurrence(start, rule, end),
    }
}

/// Iterator over a rule's occurrences inside a bounded window.
#[derive(Debug, Clone)]
pub struct Occurrences {
    rule: RecurrenceRule,
    end: NaiveDate,
    next: Option<NaiveDate>,
}

impl Iterator for Occurrences {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = next_occurrence(current, &self.rule);
        Some(current)
    }
}

impl std::iter::FusedIterator for Occurrences {}
