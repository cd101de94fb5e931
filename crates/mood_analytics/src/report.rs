use crate::calendar::{build_month_grid_with, CalendarDay, WeekStart, YearMonth};
use crate::chart::{bar_geometry, intensity_axis_ticks, line_geometry, pie_geometry, BarGeometry, LinePoint, PieSlice, AXIS_TICK_COUNT};
use crate::distribution::{compute_distribution, DistributionSlice};
use crate::entry::{validate_entries, MoodEntry};
use crate::error::{AnalyticsError, Result};
use crate::stats::{compute_stats, StatsSummary};
use crate::window::{recent, DEFAULT_WINDOW};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ReportOptions {
	/// Month shown by the calendar.
	pub month: YearMonth,
	/// Number of most recent entries plotted by the bar and line charts.
	pub window: usize,
	pub week_start: WeekStart,
}

impl ReportOptions {
	pub fn new(month: YearMonth) -> Self {
		Self {
			month,
			window: DEFAULT_WINDOW,
			week_start: WeekStart::default(),
		}
	}
}

/// Everything the mood dashboard renders, derived from one history snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MoodReport {
	/// `None` when there is nothing to summarise yet.
	pub stats: Option<StatsSummary>,
	pub distribution: Vec<DistributionSlice>,
	pub month: YearMonth,
	pub calendar: Vec<CalendarDay>,
	pub bars: Vec<BarGeometry>,
	pub line: Vec<LinePoint>,
	/// Intensity values to label on the y-axis of the bar and line charts.
	pub intensity_ticks: Vec<f64>,
	pub pie: Vec<PieSlice>,
}

impl MoodReport {
	/// Stats, distribution and pie cover the whole history; bars and line
	/// cover the last `options.window` entries.
	///
	/// # Errors
	/// Fails on the first entry with an out-of-range intensity, or when the
	/// calendar month cannot be laid out.
	#[instrument(skip(entries), fields(entries = entries.len()))]
	pub fn build(entries: &[MoodEntry], options: &ReportOptions) -> Result<Self> {
		validate_entries(entries)?;

		let stats = match compute_stats(entries) {
			Ok(stats) => Some(stats),
			Err(AnalyticsError::EmptyInput) => None,
			Err(err) => return Err(err),
		};

		let distribution = compute_distribution(entries);
		let pie = pie_geometry(&distribution)?;
		let calendar = build_month_grid_with(options.month, entries, options.week_start)?;

		let window = recent(entries, options.window);
		let bars = bar_geometry(window)?;
		let line = line_geometry(window)?;

		debug!(slices = distribution.len(), window = window.len(), "built mood report");

		Ok(Self {
			stats,
			distribution,
			month: options.month,
			calendar,
			bars,
			line,
			intensity_ticks: intensity_axis_ticks(AXIS_TICK_COUNT),
			pie,
		})
	}

	pub fn has_data(&self) -> bool {
		self.stats.is_some()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::calendar::GRID_CELLS;
	use crate::error::ValidationError;
	use chrono::NaiveDate;

	fn history() -> Vec<MoodEntry> {
		let start = NaiveDate::from_ymd_opt(2024, 10, 1).unwrap();
		start
			.iter_days()
			.take(10)
			.enumerate()
			.map(|(i, date)| {
				let mood = if i % 3 == 0 { "Calm" } else { "Happy" };
				MoodEntry::new(date, mood, u8::try_from(i % 10).unwrap() + 1)
			})
			.collect()
	}

	#[test]
	fn test_report_sections() {
		let options = ReportOptions::new(YearMonth::new(2024, 10).unwrap());
		let report = MoodReport::build(&history(), &options).unwrap();

		assert!(report.has_data());
		let stats = report.stats.as_ref().unwrap();
		assert_eq!(stats.total_entries, 10);
		assert_eq!(stats.streak_days, 10);
		assert_eq!(report.calendar.len(), GRID_CELLS);
		assert_eq!(report.bars.len(), 7);
		assert_eq!(report.line.len(), 7);
		assert_eq!(report.distribution.len(), 2);
		assert_eq!(report.pie.len(), 2);
		assert_eq!(report.bars[0].intensity, 4);
		assert_eq!(report.intensity_ticks, vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
	}

	#[test]
	fn test_empty_history_has_no_stats() {
		let options = ReportOptions::new(YearMonth::new(2024, 10).unwrap());
		let report = MoodReport::build(&[], &options).unwrap();

		assert!(!report.has_data());
		assert!(report.distribution.is_empty());
		assert!(report.pie.is_empty());
		assert!(report.bars.is_empty());
		assert_eq!(report.calendar.len(), GRID_CELLS);
	}

	#[test]
	fn test_invalid_entry_fails_whole_report() {
		let mut entries = history();
		entries[2].intensity = 0;
		let options = ReportOptions::new(YearMonth::new(2024, 10).unwrap());
		assert_eq!(
			MoodReport::build(&entries, &options),
			Err(AnalyticsError::Validation(ValidationError::IntensityOutOfRange { index: 2, intensity: 0 }))
		);
	}
}
