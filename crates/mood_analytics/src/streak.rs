//! Consecutive-day logging streaks.

use crate::entry::MoodEntry;
use chrono::NaiveDate;
use std::collections::BTreeSet;

fn logged_days(entries: &[MoodEntry]) -> BTreeSet<NaiveDate> {
	entries.iter().map(|entry| entry.date).collect()
}

fn run_ending_at(days: &BTreeSet<NaiveDate>, anchor: NaiveDate) -> u32 {
	let mut count = 0;
	let mut cursor = Some(anchor);
	while let Some(day) = cursor.filter(|day| days.contains(day)) {
		count += 1;
		cursor = day.pred_opt();
	}
	count
}

/// Consecutive logged days walking backward from the most recent entry's day.
///
/// Several entries on one day count once. Returns 0 for an empty list.
pub fn streak_days(entries: &[MoodEntry]) -> u32 {
	let days = logged_days(entries);
	days.last().map_or(0, |&latest| run_ending_at(&days, latest))
}

/// Streak as seen on `today`.
///
/// Counts back from `today` when it already has an entry, otherwise from
/// yesterday, so a streak is only broken once a whole day has been missed.
/// Entries dated after `today` are ignored.
pub fn current_streak(entries: &[MoodEntry], today: NaiveDate) -> u32 {
	let days = logged_days(entries);
	if days.contains(&today) {
		return run_ending_at(&days, today);
	}
	today.pred_opt().map_or(0, |yesterday| run_ending_at(&days, yesterday))
}

/// Longest run of consecutive logged days anywhere in the history.
pub fn longest_streak(entries: &[MoodEntry]) -> u32 {
	let mut longest = 0;
	let mut run = 0;
	let mut previous: Option<NaiveDate> = None;

	for day in logged_days(entries) {
		run = match previous.and_then(|prev| prev.succ_opt()) {
			Some(expected) if expected == day => run + 1,
			_ => 1,
		};
		longest = longest.max(run);
		previous = Some(day);
	}

	longest
}
