use crate::entry::{chronological_bounds, MoodEntry};
use crate::error::{AnalyticsError, Result};
use crate::frequency::MoodTally;
use crate::streak::streak_days;
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
	Up,
	Down,
	Stable,
}

impl TrendDirection {
	const fn between(earliest: u8, latest: u8) -> Self {
		if latest > earliest {
			Self::Up
		} else if latest < earliest {
			Self::Down
		} else {
			Self::Stable
		}
	}
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Trend {
	pub direction: TrendDirection,
	pub magnitude: u8,
}

/// Summary card values for a window of entries. Recomputed on demand.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
	/// Unrounded mean, callers format it.
	pub average_intensity: f64,
	pub trend_direction: TrendDirection,
	pub trend_magnitude: u8,
	pub dominant_mood: String,
	pub dominant_mood_count: usize,
	pub total_entries: usize,
	pub streak_days: u32,
}

/// Mean intensity of the window, `None` when empty.
#[allow(clippy::cast_precision_loss)]
pub fn average_intensity(entries: &[MoodEntry]) -> Option<f64> {
	if entries.is_empty() {
		return None;
	}
	let sum: u64 = entries.iter().map(|entry| u64::from(entry.intensity)).sum();
	Some(sum as f64 / entries.len() as f64)
}

/// Change in intensity from the chronologically earliest to the latest entry.
pub fn trend(entries: &[MoodEntry]) -> Option<Trend> {
	chronological_bounds(entries).map(|(earliest, latest)| Trend {
		direction: TrendDirection::between(earliest.intensity, latest.intensity),
		magnitude: latest.intensity.abs_diff(earliest.intensity),
	})
}

/// Compute the summary statistics of a window.
///
/// Intensities are assumed to be within `1..=10`; they are not re-checked here.
///
/// # Errors
/// Returns [`AnalyticsError::EmptyInput`] for an empty window. No placeholder
/// values are produced.
pub fn compute_stats(entries: &[MoodEntry]) -> Result<StatsSummary> {
	let average_intensity = average_intensity(entries).ok_or(AnalyticsError::EmptyInput)?;
	let trend = trend(entries).ok_or(AnalyticsError::EmptyInput)?;
	let (dominant_mood, dominant_mood_count) = MoodTally::from_entries(entries).leader().ok_or(AnalyticsError::EmptyInput)?;

	let summary = StatsSummary {
		average_intensity,
		trend_direction: trend.direction,
		trend_magnitude: trend.magnitude,
		dominant_mood: dominant_mood.to_string(),
		dominant_mood_count,
		total_entries: entries.len(),
		streak_days: streak_days(entries),
	};

	debug!(
		total = summary.total_entries,
		average = summary.average_intensity,
		dominant = %summary.dominant_mood,
		streak = summary.streak_days,
		"computed mood stats"
	);

	Ok(summary)
}

impl StatsSummary {
	/// Average formatted to one decimal place, as shown on summary cards.
	pub fn average_display(&self) -> String {
		format!("{:.1}", self.average_intensity)
	}

	pub fn is_improving(&self) -> bool {
		self.trend_direction == TrendDirection::Up
	}
}
