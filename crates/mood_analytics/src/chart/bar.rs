use super::scale::intensity_scale;
use crate::entry::{validate_entries, MoodEntry};
use crate::error::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BarGeometry {
	/// `intensity / 10 * 100`.
	pub height_percent: f64,
	/// Abbreviated weekday of `date`, e.g. `Mon`.
	pub label: String,
	pub date: NaiveDate,
	pub intensity: u8,
}

/// One bar per entry, in window order.
///
/// # Errors
/// Fails with a validation error when any intensity is outside `1..=10`.
pub fn bar_geometry(entries: &[MoodEntry]) -> Result<Vec<BarGeometry>> {
	validate_entries(entries)?;
	let scale = intensity_scale();

	Ok(
		entries
			.iter()
			.map(|entry| BarGeometry {
				height_percent: scale.percent(entry.intensity),
				label: entry.date.format("%a").to_string(),
				date: entry.date,
				intensity: entry.intensity,
			})
			.collect(),
	)
}
