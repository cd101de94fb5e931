//! Entry window selection. Every helper keeps insertion order.

use crate::calendar::YearMonth;
use crate::entry::MoodEntry;
use chrono::NaiveDate;

/// Default window length used by the weekly views.
pub const DEFAULT_WINDOW: usize = 7;

/// The most recently logged `n` entries, oldest first.
pub fn recent(entries: &[MoodEntry], n: usize) -> &[MoodEntry] {
	&entries[entries.len().saturating_sub(n)..]
}

/// Entries dated within `start..=end`.
pub fn between(entries: &[MoodEntry], start: NaiveDate, end: NaiveDate) -> Vec<MoodEntry> {
	entries.iter().filter(|entry| entry.date >= start && entry.date <= end).cloned().collect()
}

pub fn in_month(entries: &[MoodEntry], month: YearMonth) -> Vec<MoodEntry> {
	entries.iter().filter(|entry| month.contains(entry.date)).cloned().collect()
}
