use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

/// A single mood observation as logged by the user.
///
/// Entries are handed to the engine as a read-only list in insertion order
/// (oldest logged first). Nothing here assumes that list is sorted by `date`.
///
/// `intensity` is expected to be within `MIN_INTENSITY..=MAX_INTENSITY`. The
/// statistics functions take that as a precondition; the chart geometry
/// functions check it and fail with [`ValidationError`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
	/// Naive calendar day, compared by exact equality when binning.
	pub date: NaiveDate,
	/// Time of day as entered, display only.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub time: Option<String>,
	pub mood: String,
	pub intensity: u8,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub notes: Option<String>,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub activities: Vec<String>,
}

impl MoodEntry {
	pub fn new(date: NaiveDate, mood: impl Into<String>, intensity: u8) -> Self {
		Self {
			date,
			time: None,
			mood: mood.into(),
			intensity,
			notes: None,
			activities: Vec::new(),
		}
	}

	#[must_use]
	pub fn with_time(mut self, time: impl Into<String>) -> Self {
		self.time = Some(time.into());
		self
	}

	#[must_use]
	pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
		self.notes = Some(notes.into());
		self
	}

	#[must_use]
	pub fn with_activity(mut self, activity: impl Into<String>) -> Self {
		self.activities.push(activity.into());
		self
	}

	/// Check the intensity bounds. `index` is the entry's position in its list
	/// and is only used to point at the offending entry in the error.
	///
	/// # Errors
	/// Returns [`ValidationError::IntensityOutOfRange`] when the intensity is
	/// outside `1..=10`.
	pub fn validate(&self, index: usize) -> Result<(), ValidationError> {
		if self.intensity < MIN_INTENSITY || self.intensity > MAX_INTENSITY {
			return Err(ValidationError::intensity_out_of_range(index, self.intensity));
		}
		Ok(())
	}
}

/// Validate every entry, failing on the first one out of range.
///
/// # Errors
/// Returns the first [`ValidationError`] encountered.
pub fn validate_entries(entries: &[MoodEntry]) -> Result<(), ValidationError> {
	entries.iter().enumerate().try_for_each(|(index, entry)| entry.validate(index))
}

/// Chronologically earliest and latest entries of a window.
///
/// Entries sharing a date keep their insertion order: the first of them
/// counts as earliest, the last of them as latest.
pub fn chronological_bounds(entries: &[MoodEntry]) -> Option<(&MoodEntry, &MoodEntry)> {
	let mut iter = entries.iter();
	let first = iter.next()?;
	let (mut earliest, mut latest) = (first, first);

	for entry in iter {
		if entry.date < earliest.date {
			earliest = entry;
		}
		if entry.date >= latest.date {
			latest = entry;
		}
	}

	Some((earliest, latest))
}
