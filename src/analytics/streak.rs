/// Current-streak calculation
///
/// A streak is the number of consecutive calendar days, ending today or
/// yesterday, on which the habit was completed without a gap. A habit that
/// was last completed two or more days ago has no active streak, no matter
/// how long its history runs before that.

use chrono::{Duration, NaiveDate};

use crate::analytics::CompletionSet;

/// Calculate the current active streak as of the given reference date
///
/// The walk is anchored at `today` when today is completed, otherwise at
/// yesterday; an unfinished today does not break a streak that is still
/// alive from yesterday.
pub fn current_streak(completions: &CompletionSet, today: NaiveDate) -> u32 {
    if completions.is_empty() {
        return 0;
    }

    let yesterday = today - Duration::days(1);
    let anchor = if completions.contains(today) {
        today
    } else if completions.contains(yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut day = anchor;
    while completions.contains(day) {
        streak += 1;
        day = day - Duration::days(1);
    }

    streak
}
