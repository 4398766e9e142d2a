use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Which occurrence of its weekday `date` is within its month (1..=5).
pub(super) fn weekday_ordinal(date: NaiveDate) -> u32 {
    (date.day() - 1) / 7 + 1
}

/// The same ordinal `weekday` in the month after `date`.
///
/// A fifth weekday with no counterpart next month clamps to the last
/// `weekday` of that month, so the step is always four or five weeks.
pub(super) fn advance_month_keeping_weekday(date: NaiveDate, weekday: Weekday) -> Option<NaiveDate> {
    let ordinal = weekday_ordinal(date);
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days_until_target = (7 + weekday.num_days_from_monday()
        - first.weekday().num_days_from_monday())
        % 7;
    let first_target = first + Duration::days(i64::from(days_until_target));

    let candidate = first_target + Duration::weeks(i64::from(ordinal - 1));
    if candidate.month() == month {
        Some(candidate)
    } else {
        Some(candidate - Duration::weeks(1))
    }
}
