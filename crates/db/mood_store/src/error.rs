use mood_analytics::ValidationError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("Serialization error: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Invalid entry: {0}")]
	InvalidEntry(#[from] ValidationError),

	#[error("Invalid query range: {start} is after {end}")]
	InvalidRange { start: chrono::NaiveDate, end: chrono::NaiveDate },
}
