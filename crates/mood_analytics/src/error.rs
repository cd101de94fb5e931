use thiserror::Error;

pub type Result<T> = std::result::Result<T, AnalyticsError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyticsError {
	#[error("cannot compute statistics over zero entries")]
	EmptyInput,

	#[error("validation failed: {0}")]
	Validation(#[from] ValidationError),

	#[error("calendar error: {0}")]
	Calendar(#[from] CalendarError),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
	#[error("entry {index} has intensity {intensity}, must be between 1 and 10")]
	IntensityOutOfRange { index: usize, intensity: u8 },

	#[error("slice {mood:?} has percentage {percentage}, must be between 0 and 100")]
	PercentageOutOfRange { mood: String, percentage: u32 },

	#[error("{slices} slices sum to {total} percent, expected 100 within rounding")]
	DistributionTotalOutOfRange { total: u64, slices: usize },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CalendarError {
	#[error("invalid month {month} for year {year}")]
	InvalidMonth { year: i32, month: u32 },

	#[error("expected a YYYY-MM month, got {0:?}")]
	InvalidFormat(String),

	#[error("unknown week start {0:?}, expected sunday or monday")]
	InvalidWeekStart(String),

	#[error("month grid for {0} falls outside the supported date range")]
	OutOfRange(String),
}

impl ValidationError {
	#[must_use]
	pub const fn intensity_out_of_range(index: usize, intensity: u8) -> Self {
		Self::IntensityOutOfRange { index, intensity }
	}

	pub fn percentage_out_of_range(mood: &str, percentage: u32) -> Self {
		Self::PercentageOutOfRange {
			mood: mood.to_string(),
			percentage,
		}
	}
}
