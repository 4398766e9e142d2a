use chrono::NaiveDate;

use crate::models::recurrence::WeekParity;
use crate::utils::date::iso_week;

/// Whether `date`'s own ISO week number satisfies `parity`.
///
/// Parity is read from the week number, not from weeks elapsed since a
/// course started, so two adjacent odd weeks can be 7 days apart when a
/// 53-week year rolls over (week 53 → week 1).
pub fn matches_parity(date: NaiveDate, parity: WeekParity) -> bool {
    let week = iso_week(date).week;
    match parity {
        WeekParity::All => true,
        WeekParity::Odd => week % 2 == 1,
        WeekParity::Even => week % 2 == 0,
    }
}
