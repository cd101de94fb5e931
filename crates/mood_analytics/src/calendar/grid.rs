use super::month::{WeekStart, YearMonth};
use crate::entry::MoodEntry;
use crate::error::{CalendarError, Result};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DAYS_PER_WEEK: usize = 7;
pub const GRID_WEEKS: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * GRID_WEEKS;

/// One cell of the month grid.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
	pub date: NaiveDate,
	/// False for the leading and trailing cells borrowed from adjacent months.
	pub in_month: bool,
	/// Every entry logged on `date`, untruncated. Always empty outside the month.
	pub entries: Vec<MoodEntry>,
}

impl CalendarDay {
	pub fn has_entries(&self) -> bool {
		!self.entries.is_empty()
	}
}

/// Sunday-first month grid. See [`build_month_grid_with`].
///
/// # Errors
/// Returns [`CalendarError::OutOfRange`] if the grid would run past chrono's
/// supported dates.
pub fn build_month_grid(month: YearMonth, entries: &[MoodEntry]) -> Result<Vec<CalendarDay>> {
	build_month_grid_with(month, entries, WeekStart::Sunday)
}

/// Lay `month` out as exactly [`GRID_CELLS`] days (six weeks of seven).
///
/// The grid opens with the days of the previous month needed to reach the
/// month's first weekday, continues with every day of the month and is padded
/// with days of the next month. Entries are binned by exact date equality.
///
/// # Errors
/// Returns [`CalendarError::OutOfRange`] if the grid would run past chrono's
/// supported dates.
pub fn build_month_grid_with(month: YearMonth, entries: &[MoodEntry], week_start: WeekStart) -> Result<Vec<CalendarDay>> {
	let first = month.first_day();
	let leading = week_start.column(first.weekday());
	let out_of_range = || CalendarError::OutOfRange(month.to_string());

	let grid_start = first.checked_sub_days(Days::new(u64::from(leading))).ok_or_else(out_of_range)?;

	let mut by_day: HashMap<NaiveDate, Vec<MoodEntry>> = HashMap::new();
	for entry in entries.iter().filter(|entry| month.contains(entry.date)) {
		by_day.entry(entry.date).or_default().push(entry.clone());
	}

	let grid: Vec<CalendarDay> = grid_start
		.iter_days()
		.take(GRID_CELLS)
		.map(|date| {
			let in_month = month.contains(date);
			CalendarDay {
				date,
				in_month,
				entries: if in_month { by_day.remove(&date).unwrap_or_default() } else { Vec::new() },
			}
		})
		.collect();

	if grid.len() != GRID_CELLS {
		return Err(out_of_range().into());
	}

	tracing::trace!(%month, leading, days = month.days_in_month(), "built month grid");
	Ok(grid)
}
