use crate::entry::MoodEntry;
use crate::error::ValidationError;
use crate::frequency::MoodTally;
use serde::{Deserialize, Serialize};

pub const FULL_PERCENT: u32 = 100;

/// One mood's share of a window.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DistributionSlice {
	pub mood: String,
	pub count: usize,
	/// `count / total * 100`, rounded on its own. Slices of one distribution
	/// sum to 100 only up to one point of rounding per slice.
	pub percentage: u32,
}

impl DistributionSlice {
	/// # Errors
	/// Returns [`ValidationError::PercentageOutOfRange`] when `percentage > 100`.
	pub fn validate(&self) -> Result<(), ValidationError> {
		if self.percentage > FULL_PERCENT {
			return Err(ValidationError::percentage_out_of_range(&self.mood, self.percentage));
		}
		Ok(())
	}
}

/// Checks every slice, then that the percentages of the whole list sum to
/// 100 within one point of rounding per slice. An empty list is valid.
///
/// # Errors
/// Returns the first out-of-range slice, or
/// [`ValidationError::DistributionTotalOutOfRange`] for a malformed list.
pub fn validate_distribution(slices: &[DistributionSlice]) -> Result<(), ValidationError> {
	if slices.is_empty() {
		return Ok(());
	}
	slices.iter().try_for_each(DistributionSlice::validate)?;

	let total: u64 = slices.iter().map(|slice| u64::from(slice.percentage)).sum();
	let tolerance = u64::try_from(slices.len()).unwrap_or(u64::MAX);
	if total.abs_diff(u64::from(FULL_PERCENT)) > tolerance {
		return Err(ValidationError::DistributionTotalOutOfRange { total, slices: slices.len() });
	}
	Ok(())
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent_of(count: usize, total: usize) -> u32 {
	(count as f64 / total as f64 * 100.0).round() as u32
}

/// Per-mood counts and rounded percentages, in order of first appearance.
///
/// An empty window yields an empty distribution. Callers wanting a fixed
/// legend order sort the result themselves.
pub fn compute_distribution(entries: &[MoodEntry]) -> Vec<DistributionSlice> {
	let total = entries.len();
	MoodTally::from_entries(entries)
		.iter()
		.map(|(mood, count)| DistributionSlice {
			mood: mood.to_string(),
			count,
			percentage: percent_of(count, total),
		})
		.collect()
}
