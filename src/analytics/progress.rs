/// Weekly and monthly progress counts
///
/// These are plain membership counts over a calendar window, not streaks:
/// gaps inside the window do not reset anything, and completions outside
/// the window never contribute.

use chrono::{Datelike, Duration, NaiveDate};

use crate::analytics::CompletionSet;

/// Count completions in the calendar week containing the reference date
///
/// Weeks start on Sunday and always span seven days.
pub fn weekly_progress(completions: &CompletionSet, today: NaiveDate) -> u32 {
    let week_start = today - Duration::days(today.weekday().num_days_from_sunday() as i64);
    week_start
        .iter_days()
        .take(7)
        .filter(|day| completions.contains(*day))
        .count() as u32
}

/// Count completions in the calendar month containing the reference date
///
/// The window runs from the first through the last day of the month.
pub fn monthly_progress(completions: &CompletionSet, today: NaiveDate) -> u32 {
    let month_start = today - Duration::days(today.day0() as i64);
    month_start
        .iter_days()
        .take_while(|day| day.month() == today.month() && day.year() == today.year())
        .filter(|day| completions.contains(*day))
        .count() as u32
}
